//! ## Renumber Module
//!
//! After merging, the physical lines are numbered consecutively from 1 and
//! every branch operand is rewritten to follow its line.

use std::collections::HashMap;
use log::{debug,trace};
use crate::lang::linenum::{map_references,JUMP_KEYWORDS};
use super::minifier::MergedSegment;

pub struct Renumberer {
	line_map: HashMap<usize,usize>
}

impl Renumberer {
	pub fn new() -> Self {
		Self {
			line_map: HashMap::new()
		}
	}
	/// Map from original anchor numbers to new numbers, valid after `renumber`
	pub fn line_map(&self) -> &HashMap<usize,usize> {
		&self.line_map
	}
	/// Assign numbers 1,2,3,... to the segments and record where each anchor went.
	/// Continuation segments get a number but nothing can refer to them.
	fn build_map(&mut self,segments: &[MergedSegment]) -> Vec<usize> {
		self.line_map = HashMap::new();
		let mut ans = Vec::new();
		for (idx,seg) in segments.iter().enumerate() {
			let new_num = idx + 1;
			if let Some(old) = seg.anchor {
				if !self.line_map.contains_key(&old) {
					self.line_map.insert(old,new_num);
				} else {
					debug!("duplicate line {} will not be referenced by its second instance",old);
				}
			}
			ans.push(new_num);
		}
		ans
	}
	/// Rewrite the line number operands in one line of code using the current map.
	/// Operands with no entry are written back as plain decimal.
	pub fn update_references(&self,code: &str) -> String {
		map_references(code,&JUMP_KEYWORDS,|digits| {
			match digits.parse::<usize>() {
				Ok(old) => match self.line_map.get(&old) {
					Some(new_num) => {
						trace!("reference {} -> {}",old,new_num);
						new_num.to_string()
					},
					None => old.to_string()
				},
				Err(_) => digits.to_string()
			}
		})
	}
	/// Number the segments and repair references, returns (line number, code) pairs
	pub fn renumber(&mut self,segments: &[MergedSegment]) -> Vec<(usize,String)> {
		let nums = self.build_map(segments);
		segments.iter().zip(nums).map(|(seg,num)| {
			(num,self.update_references(&seg.code))
		}).collect()
	}
}
