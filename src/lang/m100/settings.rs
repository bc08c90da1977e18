//! Parse settings string passed with `--config`.
//!
//! The JSON is an overlay, keys that are missing keep their defaults and
//! unknown keys are ignored.

use serde_json;
use log::error;
use crate::DYNERR;
use crate::lang;
use crate::lang::{update_json_usize,update_json_u16};

#[derive(Clone,Debug,PartialEq)]
pub struct Packer {
    pub max_line_length: usize
}
#[derive(Clone,Debug,PartialEq)]
pub struct Tokenizer {
    /// if None the address comes from the machine model
    pub base_address: Option<u16>
}
#[derive(Clone,Debug,PartialEq)]
pub struct Settings {
    pub packer: Packer,
    pub tokenizer: Tokenizer
}

impl Settings {
    pub fn new() -> Self {
        Self {
            packer: Packer {
                max_line_length: super::DEFAULT_MAX_LINE_LENGTH
            },
            tokenizer: Tokenizer {
                base_address: None
            }
        }
    }
}

pub fn parse(json: &str) -> Result<Settings,DYNERR> {
    let mut ans = Settings::new();
    let root = match serde_json::from_str::<serde_json::Value>(json) {
        Ok(root) => root,
        Err(e) => {
            error!("settings are not valid JSON: {}",e);
            return Err(Box::new(lang::Error::Settings));
        }
    };
    if let Some(obj) = root.as_object() {
        for (key,val) in obj {
            match key.as_str() {
                "packer" => {
                    update_json_usize(val,"maxLineLength",&mut ans.packer.max_line_length)?;
                },
                "tokenizer" => {
                    update_json_u16(val,"baseAddress",&mut ans.tokenizer.base_address)?;
                },
                _ => {}
            }
        }
    }
    Ok(ans)
}

#[test]
fn test_overlay() {
    let s = parse("{\"packer\":{\"maxLineLength\":200},\"other\":true}").expect("parse failed");
    assert_eq!(s.packer.max_line_length,200);
    assert_eq!(s.tokenizer.base_address,None);
    let s = parse("{\"tokenizer\":{\"baseAddress\":40961}}").expect("parse failed");
    assert_eq!(s.packer.max_line_length,255);
    assert_eq!(s.tokenizer.base_address,Some(0xA001));
}

#[test]
fn test_bad_settings() {
    assert!(parse("{\"packer\":{\"maxLineLength\":\"long\"}}").is_err());
    assert!(parse("{\"tokenizer\":{\"baseAddress\":65536}}").is_err());
    assert!(parse("not json").is_err());
}
