//! ## Program record format
//!
//! A tokenized program is a chain of records laid out back to back in memory:
//! `[next address][line number][payload][0]`, both words little endian.
//! The next address is where the following record starts.  For the last record this is
//! one past the end of the program, there is no terminating record.
//! Serialization uses the `binrw` crate.

use std::io::Cursor;
use binrw::{BinRead,BinWrite,NullString};
use log::{warn,debug};
use crate::lang;
use crate::DYNERR;

/// Bytes in a record that are not payload: two words and the terminator
pub const RECORD_OVERHEAD: usize = 5;

/// A line after tokenization but before its address is known
#[derive(Clone,Debug,PartialEq)]
pub struct TokenizedLine {
    pub line_num: u16,
    pub payload: Vec<u8>
}

/// A record as it appears in memory or in a BA file
#[derive(BinRead,BinWrite,Debug,Clone,PartialEq)]
#[brw(little)]
pub struct EncodedLine {
    pub next_addr: u16,
    pub line_num: u16,
    pub payload: NullString
}

/// Work out the forward links starting from `base_addr`
pub fn link(lines: &[TokenizedLine],base_addr: u16) -> Vec<EncodedLine> {
    let mut ans = Vec::new();
    let mut curr_addr = base_addr as usize;
    for line in lines {
        curr_addr += RECORD_OVERHEAD + line.payload.len();
        if curr_addr > u16::MAX as usize {
            warn!("line {} extends past the top of memory",line.line_num);
        }
        ans.push(EncodedLine {
            next_addr: (curr_addr & 0xffff) as u16,
            line_num: line.line_num,
            payload: NullString(line.payload.clone())
        });
    }
    ans
}

/// Produce the bytes of the program as loaded at `base_addr`
pub fn encode(lines: &[TokenizedLine],base_addr: u16) -> Result<Vec<u8>,DYNERR> {
    let mut curs = Cursor::new(Vec::new());
    for rec in link(lines,base_addr) {
        rec.write(&mut curs)?;
    }
    Ok(curs.into_inner())
}

/// Split an image back into records, the links are read but not followed
pub fn decode(img: &[u8]) -> Result<Vec<EncodedLine>,DYNERR> {
    let mut ans = Vec::new();
    let mut curs = Cursor::new(img);
    while (curs.position() as usize) < img.len() {
        match EncodedLine::read(&mut curs) {
            Ok(rec) => ans.push(rec),
            Err(e) => {
                debug!("{}",e);
                warn!("record starting at offset {} is truncated",curs.position());
                return Err(Box::new(lang::Error::Detokenization));
            }
        }
    }
    Ok(ans)
}

/// Recover the load address of an image from its first link, if there is a first record
pub fn deduce_address(img: &[u8]) -> Option<u16> {
    let first = decode(img).ok()?.into_iter().next()?;
    let size = RECORD_OVERHEAD + first.payload.0.len();
    Some(first.next_addr.wrapping_sub(size as u16))
}
