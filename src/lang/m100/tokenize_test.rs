// Expected images are the bytes of a program as loaded at 0x8001 unless noted,
// records are [next address][line number][payload][00] with words little endian.

#[cfg(test)]
use std::fmt::Write;
#[cfg(test)]
use regex::Regex;
#[cfg(test)]
use super::tokenizer::Tokenizer;

#[cfg(test)]
fn hex_string(bytes: &[u8]) -> String {
	let mut listfmt = String::new();
	write!(&mut listfmt,"{:02X?}",bytes).expect("formatting error");
	let re = Regex::new(r"[\[\] ,]").unwrap();
	re.replace_all(&listfmt,"".to_string()).to_string()
}

#[cfg(test)]
fn test_tokenizer_at(test_code: &str,base_addr: u16,expected: &str) {
	let tokenizer = Tokenizer::new();
	let bytes = tokenizer.tokenize(test_code,base_addr).expect("tokenizer failed");
	assert_eq!(hex_string(&bytes),expected);
}

#[cfg(test)]
fn test_tokenizer(test_code: &str,expected: &str) {
	test_tokenizer_at(test_code,super::M100_BASE_ADDRESS,expected);
}

mod keywords {
	#[test]
	fn print_string() {
		let test_code = "10 PRINT \"HI\"";
		let expected = "0C800A00A3202248492200";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn lower_case_keyword() {
		let test_code = "10 print \"goto 10\"";
		let expected = "11800A00A32022676F746F2031302200";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn operators() {
		let test_code = "10 FOR I=1 TO 10:NEXT";
		let expected = "12800A00812049DD3120C12031303A8200";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn keyword_inside_variable() {
		// TO is crunched out of TOTAL just as the ROM would do it
		let test_code = "10 TOTAL=5";
		let expected = "0C800A00C154414CDD3500";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn longest_match() {
		let test_code = "10 PRINT CHR$(65)STRING$(3,42)";
		let expected = "14800A00A320FA28363529C628332C34322900";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn data_statement() {
		let test_code = "10 DATA 1,2,3";
		let expected = "0D800A008320312C322C3300";
		super::test_tokenizer(test_code, expected);
	}
}

mod special_forms {
	#[test]
	fn else_gets_colon() {
		let test_code = "10 IF A THEN 20 ELSE 30";
		let expected = "14800A008A204120CD203230203A9120333000";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn else_keeps_colon() {
		let test_code = "10 IF A THEN 20:ELSE 30";
		let expected = "13800A008A204120CD2032303A9120333000";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn else_alone() {
		let test_code = "10 ELSE";
		let expected = "07800A009100";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn apostrophe_comment() {
		let test_code = "10 A=1 'set a";
		let expected = "0D800A0041DD31203A8EFF00";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn apostrophe_in_string() {
		let tokenizer = super::Tokenizer::new();
		let bytes = tokenizer.tokenize_line("PRINT \"IT'S\"").expect("tokenizer failed");
		assert_eq!(super::hex_string(&bytes),"A320224954275322");
	}
	#[test]
	fn apostrophe_spacing() {
		let tokenizer = super::Tokenizer::new();
		let spaced = tokenizer.tokenize_line("PRINT 1 'hi").expect("tokenizer failed");
		let tight = tokenizer.tokenize_line("PRINT 1'hi").expect("tokenizer failed");
		assert_eq!(super::hex_string(&spaced),"A32031203A8EFF");
		assert_eq!(super::hex_string(&tight),"A320313A8EFF");
		// only the space written before the apostrophe differs
		assert_eq!(spaced[0..3],tight[0..3]);
		assert_eq!(spaced[4..],tight[3..]);
	}
}

mod addresses {
	#[test]
	fn model_100() {
		let test_code = "10 CLS\n20 GOTO 10";
		let expected = "07800A00B000108014008820313000";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn tandy_200() {
		let test_code = "10 CLS\n20 GOTO 10";
		let expected = "07A00A00B00010A014008820313000";
		super::test_tokenizer_at(test_code, super::super::T200_BASE_ADDRESS, expected);
	}
	#[test]
	fn wrap_around() {
		let test_code = "1 A=1:B=2\n2 GOSUB 1";
		let expected = "FCFF010041DD313A42DD3200040002008C203100";
		super::test_tokenizer_at(test_code, 0xFFF0, expected);
	}
	#[test]
	fn links_are_cumulative() {
		let tokenizer = super::Tokenizer::new();
		let prog = "10 CLS\n20 PRINT \"HELLO\"\n30 END";
		let lines = tokenizer.tokenize_lines(prog);
		let bytes = tokenizer.tokenize(prog,0x8001).expect("tokenizer failed");
		let mut addr = 0x8001;
		let mut offset = 0;
		for line in &lines {
			addr += 5 + line.payload.len();
			let link = u16::from_le_bytes([bytes[offset],bytes[offset+1]]);
			assert_eq!(link as usize,addr);
			offset = addr - 0x8001;
		}
		assert_eq!(offset,bytes.len());
	}
}

mod malformed {
	#[test]
	fn skip_bad_lines() {
		let test_code = "\n10 CLS\nXX PRINT\n70000 END\n20 GOTO 10\n";
		let expected = "07800A00B000108014008820313000";
		super::test_tokenizer(test_code, expected);
	}
	#[test]
	fn wide_character() {
		let tokenizer = super::Tokenizer::new();
		assert!(tokenizer.tokenize_line("PRINT \"\u{20ac}\"").is_err());
		let lines = tokenizer.tokenize_lines("10 PRINT \"\u{20ac}\"\n20 END");
		assert_eq!(lines.len(),1);
		assert_eq!(lines[0].line_num,20);
	}
	#[test]
	fn parse_line() {
		assert_eq!(super::Tokenizer::parse_line("10 PRINT 1").unwrap(),(10,"PRINT 1"));
		assert_eq!(super::Tokenizer::parse_line("10").unwrap(),(10,""));
		assert!(super::Tokenizer::parse_line("A PRINT").is_err());
	}
	#[test]
	fn empty_program() {
		let tokenizer = super::Tokenizer::new();
		assert_eq!(tokenizer.tokenize("\n\n",0x8001).expect("tokenizer failed").len(),0);
	}
}
