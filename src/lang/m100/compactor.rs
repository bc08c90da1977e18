//! ## Intra-line compaction
//!
//! Each function here transforms the code of a single line (label excluded) and
//! never looks inside string literals.  `compact_line` applies the per-line
//! transformations in the order the packer needs them.  The trailing quote is
//! handled separately because it is only safe once lines are no longer being joined.

use crate::lang::matches_keyword;

/// Functions that may follow a PRINT separator without ambiguity
const PRINT_FUNCTIONS: [&str;2] = ["CHR$","STRING$"];

/// Remove an apostrophe comment and the statement separator that only existed to introduce it,
/// e.g., `DATA 1,2,3 : 'comment` becomes `DATA 1,2,3`.
pub fn strip_comment(line: &str) -> String {
	let mut in_string = false;
	let mut ans: Vec<char> = Vec::new();
	for c in line.chars() {
		if c=='"' {
			in_string = !in_string;
			ans.push(c);
			continue;
		}
		if c=='\'' && !in_string {
			while let Some(last) = ans.last() {
				if *last==':' {
					ans.pop();
					break;
				}
				if *last!=' ' {
					break;
				}
				ans.pop();
			}
			break;
		}
		ans.push(c);
	}
	ans.iter().collect::<String>().trim_end().to_string()
}

/// Remove spaces outside of strings.  A single space is kept in front of `AND` and `OR`,
/// and `DATA` at the start of the line is always followed by a space.
pub fn pack_spaces(line: &str) -> String {
	let chars: Vec<char> = line.chars().collect();
	let mut in_string = false;
	let mut ans = String::new();
	for i in 0..chars.len() {
		let c = chars[i];
		if c=='"' {
			in_string = !in_string;
			ans.push(c);
			continue;
		}
		if in_string {
			ans.push(c);
			continue;
		}
		if c==' ' {
			let mut j = i + 1;
			while j < chars.len() && chars[j]==' ' {
				j += 1;
			}
			if j==chars.len() {
				continue;
			}
			if (matches_keyword(&chars,j,"AND") || matches_keyword(&chars,j,"OR")) && !ans.ends_with(' ') {
				ans.push(' ');
			}
			continue;
		}
		ans.push(c);
	}
	let packed: Vec<char> = ans.chars().collect();
	if matches_keyword(&packed,0,"DATA") && packed.len() > 4 && packed[4]!=' ' {
		return String::from("DATA ") + &packed[4..].iter().collect::<String>();
	}
	ans
}

/// Remove semicolons in PRINT statements that sit between a closed expression and
/// the start of another, e.g., `PRINT CHR$(235);STRING$(38,231)` becomes `PRINT CHR$(235)STRING$(38,231)`.
/// A semicolon ending the statement is kept since it holds the cursor.
pub fn elide_print_semicolons(line: &str) -> String {
	let chars: Vec<char> = line.chars().collect();
	let mut ans = String::new();
	let mut in_string = false;
	let mut in_print = false;
	let mut i = 0;
	while i < chars.len() {
		let c = chars[i];
		if c=='"' {
			in_string = !in_string;
			ans.push(c);
			i += 1;
			continue;
		}
		if in_string {
			ans.push(c);
			i += 1;
			continue;
		}
		if matches_keyword(&chars,i,"PRINT") {
			in_print = true;
			ans.extend(&chars[i..i+5]);
			i += 5;
			continue;
		}
		if in_print && c==':' {
			in_print = false;
			ans.push(c);
			i += 1;
			continue;
		}
		if in_print && c==';' {
			let mut j = i + 1;
			while j < chars.len() && chars[j]==' ' {
				j += 1;
			}
			if j < chars.len() && chars[j]!=':' && closes_expression(&ans) && opens_expression(&chars,j) {
				i += 1;
				continue;
			}
		}
		ans.push(c);
		i += 1;
	}
	ans
}

fn closes_expression(emitted: &str) -> bool {
	matches!(emitted.trim_end().chars().last(),Some(')') | Some('"'))
}

fn opens_expression(chars: &[char],pos: usize) -> bool {
	if PRINT_FUNCTIONS.iter().any(|f| matches_keyword(chars,pos,f)) || chars[pos]=='"' {
		return true;
	}
	chars[pos].is_alphabetic() && !matches_keyword(chars,pos,"ELSE")
}

/// The ROM closes an open string at the end of the line, so a closing quote in
/// the last position can be dropped.
pub fn strip_trailing_quote(line: &str) -> String {
	let trimmed = line.trim_end();
	if !trimmed.ends_with('"') {
		return line.to_string();
	}
	let quotes = line.chars().filter(|c| *c=='"').count();
	match quotes % 2 {
		0 => trimmed[0..trimmed.len()-1].to_string(),
		_ => line.to_string()
	}
}

/// Comment, space, and semicolon removal in that order
pub fn compact_line(code: &str) -> String {
	elide_print_semicolons(&pack_spaces(&strip_comment(code)))
}
