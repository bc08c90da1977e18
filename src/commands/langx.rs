//! ## Language Transformations
//!
//! Runs `pack`, `tokenize`, and `detokenize`.  Arguments are checked before any
//! file is touched, and output files are only created once the whole result is ready.

use std::str::FromStr;
use std::path::{Path,PathBuf};
use std::io::Write;
use colored::Colorize;
use super::{CommandError,parse_address,write_output};
use crate::lang;
use crate::lang::m100;
use crate::lang::m100::settings::{self,Settings};
use crate::STDRESULT;
const RCH: &str = "unreachable was reached";

fn require_input(cmd: &clap::ArgMatches) -> Result<PathBuf,CommandError> {
    let path = PathBuf::from(cmd.get_one::<String>("input").expect(RCH));
    if !path.is_file() {
        log::error!("input file {} was not found",path.display());
        return Err(CommandError::FileNotFound);
    }
    Ok(path)
}

fn get_settings(cmd: &clap::ArgMatches) -> Result<Settings,crate::DYNERR> {
    match cmd.get_one::<String>("config") {
        Some(json) => settings::parse(json),
        None => Ok(Settings::new())
    }
}

pub fn pack(cmd: &clap::ArgMatches) -> STDRESULT {
    let config = get_settings(cmd)?;
    let in_path = require_input(cmd)?;
    let out_path = Path::new(cmd.get_one::<String>("output").expect(RCH));
    let max_len = match cmd.get_one::<usize>("max-len") {
        Some(len) => *len,
        None => config.packer.max_line_length
    };
    let program = match std::fs::read_to_string(&in_path) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{} could not be read as text",in_path.display());
            return Err(Box::new(e));
        }
    };
    let mut minifier = m100::minifier::Minifier::new();
    minifier.set_max_line_length(max_len);
    let object = minifier.minify(&program)?;
    write_output(out_path,object.as_bytes())?;
    let stats = minifier.stats();
    eprintln!("\u{2713} {} {} {} {} {}","Packed".green(),
        stats.source_lines,"lines into".green(),
        stats.merged_lines,"lines".green());
    if let (Some(first),Some(last)) = (stats.first_line,stats.last_line) {
        log::info!("source lines spanned {} to {}",first,last);
    }
    log::info!("saved {} bytes of line numbers",stats.label_bytes_before.saturating_sub(stats.label_bytes_after));
    Ok(())
}

pub fn tokenize(cmd: &clap::ArgMatches) -> STDRESULT {
    let config = get_settings(cmd)?;
    let model = m100::Model::from_str(cmd.get_one::<String>("model").expect(RCH))?;
    let base_addr = match (cmd.get_one::<String>("base"),config.tokenizer.base_address) {
        (Some(s),_) => parse_address(s)?,
        (None,Some(addr)) => addr,
        (None,None) => model.base_address()
    };
    let in_path = require_input(cmd)?;
    let out_path = match cmd.get_one::<String>("output") {
        Some(s) => PathBuf::from(s),
        None => in_path.with_extension("BA")
    };
    let program = lang::read_lossy(&in_path)?;
    let tokenizer = m100::tokenizer::Tokenizer::new();
    let object = tokenizer.tokenize(&program,base_addr)?;
    write_output(&out_path,&object)?;
    eprintln!("\u{2713} {} {} {} {:04X}","Tokenized".green(),
        object.len(),"bytes at".green(),base_addr);
    if cmd.get_flag("console") {
        if atty::is(atty::Stream::Stdout) {
            crate::display_block(base_addr,&object);
        } else {
            // not the console, pipe the image to the next node
            std::io::stdout().write_all(&object)?;
        }
    }
    Ok(())
}

pub fn detokenize(cmd: &clap::ArgMatches) -> STDRESULT {
    let in_path = require_input(cmd)?;
    let img = std::fs::read(&in_path)?;
    if img.len()==0 {
        log::error!("{} is empty",in_path.display());
        return Err(Box::new(CommandError::UnsupportedFormat));
    }
    if let Some(addr) = m100::encoder::deduce_address(&img) {
        log::info!("image was linked at {:04X}",addr);
    }
    let tokenizer = m100::tokenizer::Tokenizer::new();
    let listing = tokenizer.detokenize(&img)?;
    print!("{}",listing);
    Ok(())
}
