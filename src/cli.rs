use clap::{crate_version, Arg, ArgAction, Command, ValueHint};

const BASE_HELP: &str = "hexadecimal if prefixed with `0x`, otherwise decimal,
when omitted the address is taken from the model (m100/t102 0x8001, t200 0xA001)";
const CONFIG_LONG_HELP: &str = "JSON object that overlays the default settings, e.g.
`{\"packer\":{\"maxLineLength\":200},\"tokenizer\":{\"baseAddress\":40961}}`";

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input").value_name("INPUT").help(help)
        .value_hint(ValueHint::FilePath)
        .required(true)
}

fn config_arg() -> Arg {
    Arg::new("config").long("config").short('c').value_name("JSON").help("modify settings")
        .long_help(CONFIG_LONG_HELP)
        .required(false)
}

fn console_arg() -> Arg {
    Arg::new("console").long("console").help("also dump the result to the console")
        .required(false)
        .action(ArgAction::SetTrue)
        .long_help("after writing the output file, display the bytes in columns of hex and ascii,\nor if stdout is not a terminal, copy the raw image to stdout")
}

pub fn build_cli() -> Command {
    let long_help = "m100kit is always invoked with exactly one of several subcommands.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
pack source:           `m100kit pack src/TSWEEP.DO packed/TSWEEP.DO`
tokenize for M100:     `m100kit tokenize packed/TSWEEP.DO`
tokenize for T200:     `m100kit tokenize packed/TSWEEP.DO TSWEEP.BA --model t200`
explicit address:      `m100kit tokenize packed/TSWEEP.DO TSWEEP.BA 0x8001`
list tokenized file:   `m100kit detokenize TSWEEP.BA`";

    let mut main_cmd = Command::new("m100kit")
        .about("Packs and tokenizes BASIC programs for the TRS-80 Model 100 family.")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(
        Command::new("pack")
            .arg(input_arg("ASCII BASIC source file"))
            .arg(Arg::new("output").value_name("OUTPUT").help("packed ASCII file to create")
                .value_hint(ValueHint::FilePath)
                .required(true))
            .arg(Arg::new("max-len").long("max-len").short('m').value_name("BYTES").help("maximum physical line length")
                .value_parser(clap::value_parser!(usize))
                .required(false))
            .arg(config_arg())
            .about("strip comments and spaces, merge and renumber lines"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("tokenize")
            .arg(input_arg("packed ASCII BASIC file"))
            .arg(Arg::new("output").value_name("OUTPUT").help("tokenized file, defaults to INPUT with extension BA")
                .value_hint(ValueHint::FilePath)
                .required(false))
            .arg(Arg::new("base").value_name("BASE").help("memory address of the first line")
                .long_help(BASE_HELP)
                .required(false))
            .arg(Arg::new("model").long("model").value_name("MODEL").help("target machine")
                .value_parser(["m100","t102","t200"])
                .default_value("m100"))
            .arg(config_arg())
            .arg(console_arg())
            .visible_alias("tok")
            .about("convert ASCII BASIC to the tokenized BA format"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("detokenize")
            .arg(input_arg("tokenized BA file"))
            .visible_alias("dtok")
            .about("list a tokenized BA file as ASCII on stdout"),
    );
    main_cmd
}
