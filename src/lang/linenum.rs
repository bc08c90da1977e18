//! # Module for handling line numbers
//!
//! Finding jump targets and repairing references after a renumber both come down to
//! locating the numeric operands of branching keywords.  This provides the scanner
//! that any dialect with textual line references should be able to use.

use super::matches_keyword;

/// Keywords whose operands are line numbers, tested in order, the first match wins.
pub const JUMP_KEYWORDS: [&str;4] = ["GOTO","GOSUB","THEN","ELSE"];

/// Separators allowed between operands, e.g., in `ON X GOTO 10, 20,30`
const OPERAND_SEPARATORS: [char;3] = [',',' ','\t'];

/// Copy `code` while passing each line number operand of a keyword in `keywords` through `replace`.
/// The closure receives the digits as written and returns the text to put in their place.
/// Text inside string literals is never examined.
pub fn map_references<F>(code: &str,keywords: &[&str],mut replace: F) -> String
where F: FnMut(&str) -> String {
    let chars: Vec<char> = code.chars().collect();
    let mut ans = String::new();
    let mut in_string = false;
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
        match keywords.iter().find(|kw| matches_keyword(&chars,i,kw)) {
            Some(kw) => {
                let end = i + kw.len();
                ans.extend(&chars[i..end]);
                i = end;
                while i < chars.len() {
                    if chars[i].is_ascii_digit() {
                        let start = i;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                        let digits: String = chars[start..i].iter().collect();
                        ans += &replace(&digits);
                    } else if OPERAND_SEPARATORS.contains(&chars[i]) {
                        ans.push(chars[i]);
                        i += 1;
                    } else {
                        break;
                    }
                }
            },
            None => {
                ans.push(c);
                i += 1;
            }
        }
    }
    ans
}

/// List every line number operand in `code` in order of appearance.
/// Operands too large to be a line number are left out.
pub fn gather_references(code: &str,keywords: &[&str]) -> Vec<usize> {
    let mut ans = Vec::new();
    map_references(code,keywords,|digits| {
        if let Ok(num) = digits.parse::<usize>() {
            ans.push(num);
        }
        digits.to_string()
    });
    ans
}

#[test]
fn test_gather_on_goto() {
    let refs = gather_references("ONXGOTO10, 20,30:GOSUB1000",&JUMP_KEYWORDS);
    assert_eq!(refs,vec![10,20,30,1000]);
}

#[test]
fn test_refs_in_strings_ignored() {
    let refs = gather_references("PRINT\"GOTO 10\":IFATHEN20ELSE30",&JUMP_KEYWORDS);
    assert_eq!(refs,vec![20,30]);
}

#[test]
fn test_map_keeps_separators() {
    let ans = map_references("on x goto 10 ,\t20",&JUMP_KEYWORDS,|d| format!("<{}>",d));
    assert_eq!(ans,"on x goto <10> ,\t<20>");
}
