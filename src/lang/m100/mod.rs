//! # Model 100 BASIC packing and tokenization
//!
//! This module serves the BASIC found in ROM on the TRS-80 Model 100, Tandy 102, and Tandy 200.
//! There is no parser, the transformations are lexical, with the only structure recognized being
//! string literals, statement separators, and the operands of branching keywords.
//!
//! Packing is run by `minifier::Minifier`, which uses `compactor`, `flow`, and `renumber`.
//! Tokenizing is run by `tokenizer::Tokenizer`, which uses `encoder` for the record format.

mod token_maps;
#[cfg(test)]
mod tokenize_test;
pub mod compactor;
pub mod flow;
pub mod minifier;
pub mod renumber;
pub mod tokenizer;
pub mod encoder;
pub mod settings;

use std::str::FromStr;

/// Where the Model 100 and Tandy 102 load the first program line
pub const M100_BASE_ADDRESS: u16 = 0x8001;
/// Where the Tandy 200 loads the first program line
pub const T200_BASE_ADDRESS: u16 = 0xA001;
/// Longest physical line the packer will produce, counting the label and its space
pub const DEFAULT_MAX_LINE_LENGTH: usize = 255;

pub const COLON: u8 = 0x3A;
pub const REM_TOK: u8 = 0x8E;
pub const ELSE_TOK: u8 = 0x91;
/// The apostrophe comment is stored as `:REM` followed by this
pub const QUOTE_TOK: u8 = 0xFF;

/// Machines sharing this dialect, they differ in where programs are loaded.
#[derive(Clone,Copy,PartialEq,Debug)]
pub enum Model {
    M100,
    T102,
    T200
}

impl Model {
    pub fn base_address(&self) -> u16 {
        match self {
            Self::M100 | Self::T102 => M100_BASE_ADDRESS,
            Self::T200 => T200_BASE_ADDRESS
        }
    }
}

impl FromStr for Model {
    type Err = super::Error;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s.to_lowercase().as_str() {
            "m100" => Ok(Self::M100),
            "t102" => Ok(Self::T102),
            "t200" => Ok(Self::T200),
            _ => Err(super::Error::UnknownModel)
        }
    }
}

#[test]
fn test_model_addresses() {
    assert_eq!(Model::from_str("m100").unwrap().base_address(),0x8001);
    assert_eq!(Model::from_str("T102").unwrap().base_address(),0x8001);
    assert_eq!(Model::from_str("t200").unwrap().base_address(),0xA001);
    assert!(Model::from_str("coco").is_err());
}
