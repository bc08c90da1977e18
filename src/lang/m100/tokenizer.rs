//! Module containing the Model 100 BASIC tokenizer
//!
//! Keywords are found by trying the longest candidate first, anywhere outside of
//! string literals, the same way the ROM crunches a line typed at the prompt.
//! This means a variable such as `TOTAL` is tokenized as `TO` followed by `TAL`.

use std::collections::HashMap;
use log::{warn,error,debug};
use crate::lang;
use super::token_maps;
use super::encoder;
use super::encoder::TokenizedLine;
use super::{COLON,REM_TOK,ELSE_TOK,QUOTE_TOK};
use crate::DYNERR;

/// Handles tokenization of Model 100 BASIC
pub struct Tokenizer
{
	tok_map: HashMap<&'static str,u8>,
	detok_map: HashMap<u8,&'static str>
}

impl Tokenizer
{
	/// Create a new `Tokenizer` structure
	pub fn new() -> Self
	{
		Self {
			tok_map: HashMap::from(token_maps::TOK_MAP),
			detok_map: token_maps::TOK_MAP.iter().map(|(k,v)| (*v,*k)).collect()
		}
	}
	/// Split an ASCII line at the first space into its line number and code.
	/// A line with no space is all label and no code.
	pub fn parse_line(line: &str) -> Result<(u16,&str),lang::Error> {
		let (label,code) = match line.split_once(' ') {
			Some((label,code)) => (label,code),
			None => (line,"")
		};
		match label.parse::<u16>() {
			Ok(num) => Ok((num,code)),
			Err(_) => Err(lang::Error::LineNumber)
		}
	}
	/// Tokenize the code of one line (label excluded), the result has no header or terminator.
	/// Characters that cannot be represented in a byte are an error.
	pub fn tokenize_line(&self,code: &str) -> Result<Vec<u8>,DYNERR> {
		let chars: Vec<char> = code.chars().collect();
		let mut ans: Vec<u8> = Vec::new();
		let mut in_string = false;
		let mut i = 0;
		while i < chars.len() {
			if chars[i]=='"' && (i==0 || chars[i-1]!='\\') {
				in_string = !in_string;
				ans.push(b'"');
				i += 1;
				continue;
			}
			if chars[i]=='\'' && !in_string {
				ans.append(&mut vec![COLON,REM_TOK,QUOTE_TOK]);
				break;
			}
			if !in_string {
				if let Some((tok,len)) = self.match_keyword(&chars[i..]) {
					ans.push(tok);
					i += len;
					if tok==ELSE_TOK && ans.len() > 1 && ans[ans.len()-2]!=COLON {
						ans.insert(ans.len()-1,COLON);
					}
					continue;
				}
			}
			match u8::try_from(chars[i] as u32) {
				Ok(b) => ans.push(b),
				Err(_) => {
					error!("character {} cannot be tokenized",chars[i]);
					return Err(Box::new(lang::Error::Tokenization));
				}
			}
			i += 1;
		}
		Ok(ans)
	}
	/// longest keyword at the start of `chars`, returns the token and how many characters it spans
	fn match_keyword(&self,chars: &[char]) -> Option<(u8,usize)> {
		let longest = usize::min(token_maps::MAX_KEYWORD_LEN,chars.len());
		for len in (1..=longest).rev() {
			let candidate: String = chars[0..len].iter().map(|c| c.to_ascii_uppercase()).collect();
			if let Some(tok) = self.tok_map.get(candidate.as_str()) {
				return Some((*tok,len));
			}
		}
		None
	}
	/// Tokenize every line of a program without assigning addresses.
	/// Lines whose number or characters are invalid are skipped with a warning.
	pub fn tokenize_lines(&self,program: &str) -> Vec<TokenizedLine> {
		let mut ans = Vec::new();
		for line in program.lines() {
			if line.trim().len()==0 {
				continue;
			}
			let (line_num,code) = match Self::parse_line(line) {
				Ok(x) => x,
				Err(e) => {
					warn!("skipping invalid line: {} ({})",line,e);
					continue;
				}
			};
			match self.tokenize_line(code) {
				Ok(payload) => ans.push(TokenizedLine { line_num, payload }),
				Err(e) => warn!("skipping invalid line: {} ({})",line,e)
			}
		}
		ans
	}
	/// Tokenize a program contained in a UTF8 string, result is the image of the program
	/// as it would be loaded at `base_addr`.
	pub fn tokenize(&self,program: &str,base_addr: u16) -> Result<Vec<u8>,DYNERR> {
		let lines = self.tokenize_lines(program);
		debug!("tokenized {} lines",lines.len());
		encoder::encode(&lines,base_addr)
	}
	/// Expand the payload of one record into text
	fn detokenize_payload(&self,payload: &[u8]) -> Result<String,DYNERR> {
		let mut code = String::new();
		let mut in_string = false;
		let mut idx = 0;
		while idx < payload.len() {
			let b = payload[idx];
			if b==b'"' {
				in_string = !in_string;
				code.push('"');
			} else if in_string || b < 0x80 {
				if !in_string && b==COLON && payload.get(idx+1)==Some(&REM_TOK) && payload.get(idx+2)==Some(&QUOTE_TOK) {
					code += "'";
					code += &lang::bytes_to_escaped_string(&payload[idx+3..]);
					break;
				}
				if !in_string && b==COLON && payload.get(idx+1)==Some(&ELSE_TOK) {
					idx += 1;
					continue;
				}
				code += &lang::bytes_to_escaped_string(&[b]);
			} else {
				match self.detok_map.get(&b) {
					Some(kw) => code += kw,
					None => {
						error!("unrecognized token {:02X}",b);
						return Err(Box::new(lang::Error::Detokenization));
					}
				}
			}
			idx += 1;
		}
		Ok(code)
	}
	/// Detokenize from byte array into a UTF8 string, each line is terminated by a newline
	pub fn detokenize(&self,img: &[u8]) -> Result<String,DYNERR> {
		let mut code = String::new();
		for rec in encoder::decode(img)? {
			code += &rec.line_num.to_string();
			code += " ";
			code += &self.detokenize_payload(&rec.payload.0)?;
			code += "\n";
		}
		Ok(code)
	}
}
