//! # `m100kit` main library
//!
//! This library packs and tokenizes BASIC programs for the TRS-80 Model 100 family
//! (Model 100, Tandy 102, Tandy 200).
//!
//! ## Architecture
//!
//! Processing happens in two independent pipelines that share the notion of a numbered line:
//! * packing (`lang::m100::minifier`) strips comments and spaces, merges lines that are not
//!   jump targets, then renumbers the program and repairs the line references
//! * tokenizing (`lang::m100::tokenizer`) replaces keywords with single byte tokens and wraps
//!   each line in the linked record format the ROM expects, see `lang::m100::encoder`
//!
//! Generic helpers that any BASIC dialect could use are in `lang`.
//! The CLI subcommands are run by the `commands` module.

pub mod lang;
pub mod commands;

type DYNERR = Box<dyn std::error::Error>;
pub type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Display binary to stdout in columns of hex and ascii
pub fn display_block(start_addr: u16,block: &[u8]) {
    let mut slice_start = 0;
    if block.len()==0 {
        return;
    }
    loop {
        let row_label = start_addr as usize + slice_start;
        let mut slice_end = slice_start + 16;
        if slice_end > block.len() {
            slice_end = block.len();
        }
        let slice = block[slice_start..slice_end].to_vec();
        let txt: Vec<u8> = slice.iter().map(|c| match *c {
            x if x<32 => '.' as u8,
            x if x<127 => x,
            _ => '.' as u8
        }).collect();
        print!("{:04X} : ",row_label & 0xffff);
        for byte in slice {
            print!("{:02X} ",byte);
        }
        for _blank in slice_end..slice_start+16 {
            print!("   ");
        }
        println!("| {}",String::from_utf8_lossy(&txt));
        slice_start += 16;
        if slice_end==block.len() {
            break;
        }
    }
}
