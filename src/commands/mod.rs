//! # CLI Subcommands
//!
//! Contains modules that run the subcommands, and helpers they share
//! for interpreting arguments and writing files.

pub mod langx;

use std::io::Write;
use std::path::Path;
use log::{error,debug};
use crate::STDRESULT;

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("One of the parameters was out of range")]
    OutOfRange,
    #[error("Input source is not supported")]
    UnsupportedFormat,
    #[error("File not found")]
    FileNotFound
}

/// Interpret an address argument, hexadecimal if prefixed with `0x`, otherwise decimal.
/// Anything that does not fit in 16 bits is out of range.
pub fn parse_address(s: &str) -> Result<u16,CommandError> {
    let trimmed = s.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex,16),
        None => u64::from_str_radix(trimmed,10)
    };
    match parsed {
        Ok(addr) if addr <= u16::MAX as u64 => Ok(addr as u16),
        Ok(addr) => {
            error!("address {} does not fit in 16 bits",addr);
            Err(CommandError::OutOfRange)
        },
        Err(_) => {
            error!("could not interpret {} as an address",s);
            Err(CommandError::OutOfRange)
        }
    }
}

/// Write `dat` to `path` by way of a temporary file in the same directory,
/// so that a failure never leaves a partial file behind.
pub fn write_output(path: &Path,dat: &[u8]) -> STDRESULT {
    let dir = match path.parent() {
        Some(p) if p.as_os_str().len() > 0 => p,
        _ => Path::new(".")
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(dat)?;
    tmp.flush()?;
    tmp.persist(path)?;
    debug!("wrote {} bytes to {}",dat.len(),path.display());
    Ok(())
}

#[test]
fn test_parse_address() {
    assert_eq!(parse_address("0x8001").unwrap(),0x8001);
    assert_eq!(parse_address("0XA001").unwrap(),0xA001);
    assert_eq!(parse_address("32769").unwrap(),0x8001);
    assert!(parse_address("0x10000").is_err());
    assert!(parse_address("65536").is_err());
    assert!(parse_address("8001h").is_err());
    assert!(parse_address("-1").is_err());
}
