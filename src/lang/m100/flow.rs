//! ## Control flow analysis for line merging
//!
//! Two questions decide whether a line can be appended to the one before it:
//! is something jumping to it (it must keep its own label), and does the line
//! before it end in a way that would make appended code unreachable or conditional.

use std::collections::HashSet;
use log::trace;
use crate::lang::{SourceLine,matches_keyword};
use crate::lang::linenum::{gather_references,JUMP_KEYWORDS};

/// Statements after which nothing on the same line can run
const TERMINAL_STATEMENTS: [&str;3] = ["RETURN","END","STOP"];

/// Gather every line number that appears as an operand of GOTO, GOSUB, THEN, or ELSE.
/// References to lines that do not exist are included.
pub fn find_targets(lines: &[SourceLine]) -> HashSet<usize> {
	let mut ans = HashSet::new();
	for line in lines {
		for num in gather_references(&line.code,&JUMP_KEYWORDS) {
			trace!("line {} references {}",line.number,num);
			ans.insert(num);
		}
	}
	ans
}

/// Is the next source line forbidden from joining this one.
/// This is true if the last statement is RETURN, END, STOP, or GOTO with a literal target,
/// or if there is an IF followed by THEN anywhere outside strings.
/// GOSUB does not count since control comes back.
pub fn ends_flow(code: &str) -> bool {
	let code = code.trim_end();
	if code.len()==0 {
		return false;
	}
	let chars: Vec<char> = code.chars().collect();
	let mut in_string = false;
	let mut last_colon: Option<usize> = None;
	for (i,c) in chars.iter().enumerate() {
		if *c=='"' {
			in_string = !in_string;
		} else if *c==':' && !in_string {
			last_colon = Some(i);
		}
	}
	let last_stmt: String = match last_colon {
		Some(i) => chars[i+1..].iter().collect(),
		None => code.to_string()
	};
	let last_stmt = last_stmt.trim().to_uppercase();
	if TERMINAL_STATEMENTS.contains(&last_stmt.as_str()) {
		return true;
	}
	if let Some(rest) = last_stmt.strip_prefix("GOTO") {
		if let Some(c) = rest.trim_start().chars().next() {
			if c.is_ascii_digit() {
				return true;
			}
		}
	}
	has_if_then(&chars)
}

fn has_if_then(chars: &[char]) -> bool {
	let mut in_string = false;
	let mut seen_if = false;
	let mut i = 0;
	while i < chars.len() {
		if chars[i]=='"' {
			in_string = !in_string;
			i += 1;
			continue;
		}
		if !in_string {
			if seen_if && matches_keyword(chars,i,"THEN") {
				return true;
			}
			if matches_keyword(chars,i,"IF") {
				seen_if = true;
				i += 2;
				continue;
			}
		}
		i += 1;
	}
	false
}
