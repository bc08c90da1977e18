//! # Language Module
//!
//! Helpers that do not depend on the BASIC dialect live here, such as
//! splitting a source line into its label and code, or matching keywords
//! in a case insensitive way.
//! Dialect specific operations such as tokenization are in the submodules.

pub mod linenum;
pub mod m100;

use thiserror::Error;
use regex::Regex;
use log::trace;
use crate::{STDRESULT,DYNERR};

#[derive(Error,Debug)]
pub enum Error {
    #[error("Syntax error")]
    Syntax,
    #[error("Invalid Line Number")]
    LineNumber,
    #[error("Tokenization error")]
    Tokenization,
    #[error("Detokenization error")]
    Detokenization,
    #[error("Settings could not be interpreted")]
    Settings,
    #[error("Unknown machine model")]
    UnknownModel
}

/// A numbered line of BASIC source, `code` excludes the label and the separating whitespace
#[derive(Clone,Debug,PartialEq)]
pub struct SourceLine {
    pub number: usize,
    pub code: String
}

impl SourceLine {
    pub fn new(number: usize,code: &str) -> Self {
        Self {
            number,
            code: code.to_string()
        }
    }
}

/// Split a line of the form `<digits><whitespace><code>`.
/// Returns None if the line does not have this shape or the label overflows.
pub fn split_source_line(line: &str) -> Option<SourceLine> {
    split_with(&label_pattern(),line)
}

fn label_pattern() -> Regex {
    Regex::new(r"^([0-9]+)\s+(.*)").expect("unreachable")
}

fn split_with(patt: &Regex,line: &str) -> Option<SourceLine> {
    let caps = patt.captures(line)?;
    let number = caps.get(1)?.as_str().parse::<usize>().ok()?;
    Some(SourceLine::new(number,caps.get(2)?.as_str()))
}

/// Gather the numbered lines of a program.  Blank lines, lines that are only a comment,
/// and lines that do not start with a label are dropped.
pub fn parse_program(program: &str) -> Vec<SourceLine> {
    let patt = label_pattern();
    let mut ans = Vec::new();
    for (row,line) in program.lines().enumerate() {
        if line.trim().len()==0 {
            continue;
        }
        match split_with(&patt,line) {
            Some(src) => {
                let stripped = src.code.trim();
                if stripped.len() > 0 && !stripped.starts_with('\'') {
                    ans.push(src);
                } else {
                    trace!("row {} is comment only",row);
                }
            },
            None => trace!("row {} has no line number",row)
        }
    }
    ans
}

/// Case insensitive test for `kw` at position `pos` of `chars`, `kw` should be upper case ASCII.
pub fn matches_keyword(chars: &[char],pos: usize,kw: &str) -> bool {
    let mut idx = pos;
    for k in kw.chars() {
        match chars.get(idx) {
            Some(c) if c.to_ascii_uppercase()==k => idx += 1,
            _ => return false
        }
    }
    true
}

/// Overwrite `curr` if `key` is present in the JSON object and is an unsigned integer.
/// If the key is present with some other type an error is returned.
pub fn update_json_usize(maybe_obj: &serde_json::Value,key: &str,curr: &mut usize) -> STDRESULT {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(val) = obj.get(key) {
            match val.as_u64() {
                Some(x) => *curr = x as usize,
                None => return Err(Box::new(Error::Settings))
            }
        }
    }
    Ok(())
}

/// Overwrite `curr` if `key` is present in the JSON object and fits in 16 bits.
/// If the key is present with some other type or range an error is returned.
pub fn update_json_u16(maybe_obj: &serde_json::Value,key: &str,curr: &mut Option<u16>) -> STDRESULT {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(val) = obj.get(key) {
            match val.as_u64() {
                Some(x) if x <= u16::MAX as u64 => *curr = Some(x as u16),
                _ => return Err(Box::new(Error::Settings))
            }
        }
    }
    Ok(())
}

/// Render bytes of a listing, printable ASCII is kept, anything else becomes `\xHH`.
pub fn bytes_to_escaped_string(bytes: &[u8]) -> String {
    let mut ans = String::new();
    for b in bytes {
        if *b >= 0x20 && *b < 0x7f {
            ans.push(*b as char);
        } else {
            ans += &format!("\\x{:02X}",b);
        }
    }
    ans
}

/// Read a whole program as a string, bytes that are not UTF8 are replaced.
pub fn read_lossy(path: &std::path::Path) -> Result<String,DYNERR> {
    let dat = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&dat).to_string())
}

#[test]
fn test_split_source_line() {
    assert_eq!(split_source_line("10 PRINT \"HI\""),Some(SourceLine::new(10,"PRINT \"HI\"")));
    assert_eq!(split_source_line("20\t  A=1 "),Some(SourceLine::new(20,"A=1 ")));
    assert_eq!(split_source_line("PRINT"),None);
    assert_eq!(split_source_line("30PRINT"),None);
}

#[test]
fn test_parse_program() {
    let prog = "10 CLS\n\n15 ' just a comment\nREM no label\n20 PRINT 1 'trailing\r\n";
    let lines = parse_program(prog);
    assert_eq!(lines,vec![
        SourceLine::new(10,"CLS"),
        SourceLine::new(20,"PRINT 1 'trailing")
    ]);
}

#[test]
fn test_matches_keyword() {
    let chars: Vec<char> = "x goTo 10".chars().collect();
    assert!(matches_keyword(&chars,2,"GOTO"));
    assert!(!matches_keyword(&chars,2,"GOSUB"));
    assert!(!matches_keyword(&chars,7,"10 "));
}
