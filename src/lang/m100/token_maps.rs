//! Keyword and operator tokens of Model 100 BASIC.
//! Every byte from 0x80 to 0xFF is assigned, 0xFF is the apostrophe comment.

pub const MAX_KEYWORD_LEN: usize = 7;

pub const TOK_MAP: [(&str,u8);128] = [
	("END",0x80),
	("FOR",0x81),
	("NEXT",0x82),
	("DATA",0x83),
	("INPUT",0x84),
	("DIM",0x85),
	("READ",0x86),
	("LET",0x87),
	("GOTO",0x88),
	("RUN",0x89),
	("IF",0x8A),
	("RESTORE",0x8B),
	("GOSUB",0x8C),
	("RETURN",0x8D),
	("REM",0x8E),
	("STOP",0x8F),
	("WIDTH",0x90),
	("ELSE",0x91),
	("LINE",0x92),
	("EDIT",0x93),
	("ERROR",0x94),
	("RESUME",0x95),
	("OUT",0x96),
	("ON",0x97),
	("DSKO$",0x98),
	("OPEN",0x99),
	("CLOSE",0x9A),
	("LOAD",0x9B),
	("MERGE",0x9C),
	("FILES",0x9D),
	("SAVE",0x9E),
	("LFILES",0x9F),
	("LPRINT",0xA0),
	("DEF",0xA1),
	("POKE",0xA2),
	("PRINT",0xA3),
	("CONT",0xA4),
	("LIST",0xA5),
	("LLIST",0xA6),
	("CLEAR",0xA7),
	("CLOAD",0xA8),
	("CSAVE",0xA9),
	("TIME$",0xAA),
	("DATE$",0xAB),
	("DAY$",0xAC),
	("COM",0xAD),
	("MDM",0xAE),
	("KEY",0xAF),
	("CLS",0xB0),
	("BEEP",0xB1),
	("SOUND",0xB2),
	("LCOPY",0xB3),
	("PSET",0xB4),
	("PRESET",0xB5),
	("MOTOR",0xB6),
	("MAX",0xB7),
	("POWER",0xB8),
	("CALL",0xB9),
	("MENU",0xBA),
	("IPL",0xBB),
	("NAME",0xBC),
	("KILL",0xBD),
	("SCREEN",0xBE),
	("NEW",0xBF),
	("TAB(",0xC0),
	("TO",0xC1),
	("USING",0xC2),
	("VARPTR",0xC3),
	("ERL",0xC4),
	("ERR",0xC5),
	("STRING$",0xC6),
	("INSTR",0xC7),
	("DSKI$",0xC8),
	("INKEY$",0xC9),
	("CSRLIN",0xCA),
	("OFF",0xCB),
	("HIMEM",0xCC),
	("THEN",0xCD),
	("NOT",0xCE),
	("STEP",0xCF),
	("+",0xD0),
	("-",0xD1),
	("*",0xD2),
	("/",0xD3),
	("^",0xD4),
	("AND",0xD5),
	("OR",0xD6),
	("XOR",0xD7),
	("EQV",0xD8),
	("IMP",0xD9),
	("MOD",0xDA),
	("\\",0xDB),
	(">",0xDC),
	("=",0xDD),
	("<",0xDE),
	("SGN",0xDF),
	("INT",0xE0),
	("ABS",0xE1),
	("FRE",0xE2),
	("INP",0xE3),
	("LPOS",0xE4),
	("POS",0xE5),
	("SQR",0xE6),
	("RND",0xE7),
	("LOG",0xE8),
	("EXP",0xE9),
	("COS",0xEA),
	("SIN",0xEB),
	("TAN",0xEC),
	("ATN",0xED),
	("PEEK",0xEE),
	("EOF",0xEF),
	("LOC",0xF0),
	("LOF",0xF1),
	("CINT",0xF2),
	("CSNG",0xF3),
	("CDBL",0xF4),
	("FIX",0xF5),
	("LEN",0xF6),
	("STR$",0xF7),
	("VAL",0xF8),
	("ASC",0xF9),
	("CHR$",0xFA),
	("SPACE$",0xFB),
	("LEFT$",0xFC),
	("RIGHT$",0xFD),
	("MID$",0xFE),
	("'",0xFF)
];
