//! Module containing the Model 100 BASIC packer
//!
//! Packing happens in stages:
//! 1. each line is compacted on its own, see `compactor`
//! 2. jump targets are gathered from the compacted lines
//! 3. lines are merged unless they are targets or follow a line that ends control flow
//! 4. the merged lines are renumbered and references repaired
//! 5. trailing quotes are dropped and the program is written back out

use std::collections::HashSet;
use log::{info,debug,trace,error};
use crate::lang;
use crate::lang::SourceLine;
use super::{compactor,flow};
use super::renumber::Renumberer;
use crate::DYNERR;

/// Code destined for one physical line.
/// `anchor` is the original number of the first statement, or None
/// for a continuation that was split off because of the length limit.
#[derive(Clone,Debug,PartialEq)]
pub struct MergedSegment {
	pub anchor: Option<usize>,
	pub code: String
}

/// Counts gathered during the last call to `Minifier::minify`
#[derive(Clone,Debug,Default,PartialEq)]
pub struct PackStats {
	pub source_lines: usize,
	pub targets: usize,
	pub merged_lines: usize,
	pub first_line: Option<usize>,
	pub last_line: Option<usize>,
	pub label_bytes_before: usize,
	pub label_bytes_after: usize
}

/// Pieces waiting to be joined into the current physical line
struct Accumulator {
	start: Option<usize>,
	pieces: Vec<String>
}

fn digits(num: usize) -> usize {
	num.to_string().len()
}

/// DATA consumes everything up to a colon, so a space is needed to end the last item cleanly
fn separator_after(piece: &str) -> &'static str {
	let chars: Vec<char> = piece.chars().collect();
	match lang::matches_keyword(&chars,0,"DATA") {
		true => " :",
		false => ":"
	}
}

impl Accumulator {
	fn new() -> Self {
		Self {
			start: None,
			pieces: Vec::new()
		}
	}
	fn begin(number: usize,code: &str) -> Self {
		Self {
			start: Some(number),
			pieces: vec![code.to_string()]
		}
	}
	/// room left for code once the label and its space are accounted for
	fn max_code_len(&self,max_line_length: usize) -> usize {
		match self.start {
			Some(num) => max_line_length.saturating_sub(digits(num) + 1),
			None => max_line_length
		}
	}
	/// estimate the length if `code` were appended, the separator following the
	/// last piece is charged for every piece
	fn fits(&self,code: &str,max_line_length: usize) -> bool {
		let sep = match self.pieces.last() {
			Some(last) => separator_after(last),
			None => ":"
		};
		let len = self.pieces.iter().map(|s| s.chars().count()).sum::<usize>()
			+ sep.len() * self.pieces.len()
			+ code.chars().count();
		len <= self.max_code_len(max_line_length)
	}
	fn push(mut self,number: usize,code: &str) -> Self {
		if self.start.is_none() {
			self.start = Some(number);
		}
		self.pieces.push(code.to_string());
		self
	}
	/// Emit the accumulated pieces.  If the joined text is too long the first piece keeps
	/// the anchor and the rest become unanchored continuations.
	fn flush(self,max_line_length: usize,merged: &mut Vec<MergedSegment>) {
		let start = match self.start {
			Some(num) => num,
			None => return
		};
		if self.pieces.len()==0 {
			return;
		}
		let mut combined = String::new();
		for (idx,piece) in self.pieces.iter().enumerate() {
			if idx > 0 {
				combined += separator_after(&self.pieces[idx-1]);
			}
			combined += piece;
		}
		if combined.chars().count() <= self.max_code_len(max_line_length) {
			merged.push(MergedSegment { anchor: Some(start), code: combined });
			return;
		}
		debug!("line {} is split into {} lines",start,self.pieces.len());
		let mut iter = self.pieces.into_iter();
		if let Some(first) = iter.next() {
			merged.push(MergedSegment { anchor: Some(start), code: first });
		}
		for piece in iter {
			merged.push(MergedSegment { anchor: None, code: piece });
		}
	}
}

/// Handles packing of Model 100 BASIC
pub struct Minifier
{
	max_line_length: usize,
	stats: PackStats
}

impl Minifier
{
	/// Create a new `Minifier` structure
	pub fn new() -> Self
	{
		Self {
			max_line_length: super::DEFAULT_MAX_LINE_LENGTH,
			stats: PackStats::default()
		}
	}
	/// set the longest physical line, including the label and the space after it
	pub fn set_max_line_length(&mut self,max_line_length: usize) {
		self.max_line_length = max_line_length;
	}
	pub fn stats(&self) -> &PackStats {
		&self.stats
	}
	/// compact each line on its own
	pub fn compact(&self,lines: &[SourceLine]) -> Vec<SourceLine> {
		lines.iter().map(|line| {
			let code = compactor::compact_line(&line.code);
			trace!("{}: {} -> {}",line.number,line.code,code);
			SourceLine { number: line.number, code }
		}).collect()
	}
	/// Join consecutive lines into physical lines.
	/// A line starts a new physical line if it is a target, or if the source line before it ends control flow.
	/// The control flow test is always applied to the source line, never the merged result.
	pub fn merge(&self,lines: &[SourceLine],targets: &HashSet<usize>) -> Vec<MergedSegment> {
		let mut merged = Vec::new();
		let mut acc = Accumulator::new();
		let mut prevent_merge = false;
		for line in lines {
			acc = if targets.contains(&line.number) || prevent_merge {
				acc.flush(self.max_line_length,&mut merged);
				Accumulator::begin(line.number,&line.code)
			} else if acc.fits(&line.code,self.max_line_length) {
				acc.push(line.number,&line.code)
			} else {
				acc.flush(self.max_line_length,&mut merged);
				Accumulator::begin(line.number,&line.code)
			};
			prevent_merge = flow::ends_flow(&line.code);
		}
		acc.flush(self.max_line_length,&mut merged);
		merged
	}
	/// Pack a program given as a string of numbered lines, result is the packed program,
	/// with each line terminated by a newline.
	pub fn minify(&mut self,program: &str) -> Result<String,DYNERR> {
		self.stats = PackStats::default();
		let lines = lang::parse_program(program);
		info!("parsed {} non-comment lines",lines.len());
		if lines.len()==0 {
			error!("no numbered lines were found");
			return Err(Box::new(lang::Error::Syntax));
		}
		let packed = self.compact(&lines);
		let targets = flow::find_targets(&packed);
		info!("found {} line number targets",targets.len());
		let merged = self.merge(&packed,&targets);
		info!("merged into {} lines",merged.len());
		let mut renumberer = Renumberer::new();
		let numbered = renumberer.renumber(&merged);

		let mut ans = String::new();
		for (num,code) in &numbered {
			ans += &num.to_string();
			ans += " ";
			ans += &compactor::strip_trailing_quote(code);
			ans += "\n";
		}

		self.stats = PackStats {
			source_lines: lines.len(),
			targets: targets.len(),
			merged_lines: numbered.len(),
			first_line: lines.first().map(|l| l.number),
			last_line: lines.last().map(|l| l.number),
			label_bytes_before: lines.iter().map(|l| digits(l.number)).sum(),
			label_bytes_after: numbered.iter().map(|(n,_)| digits(*n)).sum()
		};
		info!("line number bytes: {} -> {}",self.stats.label_bytes_before,self.stats.label_bytes_after);
		Ok(ans)
	}
}
