//--> Imports <--

use std::{
	fmt,
	str::FromStr,
};

use logos::{
	Lexer,
	Logos,
};

//--> Structs <--

/// A classified word from one source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
	/// Zero-based index of the source line the lexeme came from.
	pub line: usize,
	pub kind: LexemeKind,
	/// The word exactly as written, case preserved.
	pub text: String,
}

//--> Enums <--

#[derive(Logos)]
enum Tok {
	#[regex(r"[^ \t,]+", LexemeKind::classify)]
	Word(LexemeKind),

	#[error]
	#[regex(r"[ \t,]+", logos::skip)]
	Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexemeKind {
	Register(Reg),
	Directive(Dir),
	Mnemonic(Inst),
	Number(i32),
	Identifier,
	/// Anything that isn't a keyword, number or identifier. Only rejected once an encoder looks at it.
	Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg {
	Byte(ByteReg),
	Word(WordReg),
	Segment(SegReg),
}

// Discriminants are the 3-bit register field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteReg {
	AL = 0b000,
	CL = 0b001,
	DL = 0b010,
	BL = 0b011,
	AH = 0b100,
	CH = 0b101,
	DH = 0b110,
	BH = 0b111,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordReg {
	AX = 0b000,
	CX = 0b001,
	DX = 0b010,
	BX = 0b011,
	SP = 0b100,
	BP = 0b101,
	SI = 0b110,
	DI = 0b111,
}

// Discriminants are the 2-bit segment field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegReg {
	ES = 0b00,
	CS = 0b01,
	SS = 0b10,
	DS = 0b11,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
	DefineByte,
	DefineWord,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inst {
	Subtract,
	SignedMultiply,
	Pop,
}

//--> Functions <--

/// Splits a line on spaces, tabs and commas and classifies every word, keeping source order.
pub fn lex_line(index: usize, text: &str) -> Vec<Lexeme> {
	let mut lexemes = Vec::new();

	for (token, span) in Tok::lexer(text).spanned() {
		let kind = match token {
			Tok::Word(kind) => kind,
			Tok::Error => LexemeKind::Unknown,
		};

		let lexeme = Lexeme::new(index, kind, &text[span]);
		tracing::trace!(line = index + 1, "got {}", lexeme);
		lexemes.push(lexeme);
	}

	lexemes
}

impl Lexeme {
	pub fn new(line: usize, kind: LexemeKind, text: &str) -> Lexeme {
		Lexeme { line, kind, text: String::from(text) }
	}
}

impl fmt::Display for Lexeme {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match &self.kind {
			LexemeKind::Register(reg) => match reg {
				Reg::Byte(_) => write!(f, "8-bit register {}", self.text),
				Reg::Word(_) => write!(f, "16-bit register {}", self.text),
				Reg::Segment(_) => write!(f, "segment register {}", self.text),
			},
			LexemeKind::Directive(dir) => match dir {
				Dir::DefineByte => write!(f, "define byte directive"),
				Dir::DefineWord => write!(f, "define word directive"),
			},
			LexemeKind::Mnemonic(inst) => match inst {
				Inst::Subtract => write!(f, "SUB instruction"),
				Inst::SignedMultiply => write!(f, "IMUL instruction"),
				Inst::Pop => write!(f, "POP instruction"),
			},
			LexemeKind::Number(n) => write!(f, "number {}", n),
			LexemeKind::Identifier => write!(f, "identifier {}", self.text),
			LexemeKind::Unknown => write!(f, "unrecognized text {}", self.text),
		}
	}
}

impl LexemeKind {
	fn classify(l: &mut Lexer<Tok>) -> LexemeKind {
		let s = l.slice();
		let su = s.to_ascii_uppercase();

		match su.as_str() {
			// 8-bit registers
			"AL" => LexemeKind::Register(Reg::Byte(ByteReg::AL)),
			"CL" => LexemeKind::Register(Reg::Byte(ByteReg::CL)),
			"DL" => LexemeKind::Register(Reg::Byte(ByteReg::DL)),
			"BL" => LexemeKind::Register(Reg::Byte(ByteReg::BL)),
			"AH" => LexemeKind::Register(Reg::Byte(ByteReg::AH)),
			"CH" => LexemeKind::Register(Reg::Byte(ByteReg::CH)),
			"DH" => LexemeKind::Register(Reg::Byte(ByteReg::DH)),
			"BH" => LexemeKind::Register(Reg::Byte(ByteReg::BH)),
			// 16-bit registers
			"AX" => LexemeKind::Register(Reg::Word(WordReg::AX)),
			"CX" => LexemeKind::Register(Reg::Word(WordReg::CX)),
			"DX" => LexemeKind::Register(Reg::Word(WordReg::DX)),
			"BX" => LexemeKind::Register(Reg::Word(WordReg::BX)),
			"SP" => LexemeKind::Register(Reg::Word(WordReg::SP)),
			"BP" => LexemeKind::Register(Reg::Word(WordReg::BP)),
			"SI" => LexemeKind::Register(Reg::Word(WordReg::SI)),
			"DI" => LexemeKind::Register(Reg::Word(WordReg::DI)),
			// segment registers
			"ES" => LexemeKind::Register(Reg::Segment(SegReg::ES)),
			"CS" => LexemeKind::Register(Reg::Segment(SegReg::CS)),
			"SS" => LexemeKind::Register(Reg::Segment(SegReg::SS)),
			"DS" => LexemeKind::Register(Reg::Segment(SegReg::DS)),
			// directives
			"DB" => LexemeKind::Directive(Dir::DefineByte),
			"DW" => LexemeKind::Directive(Dir::DefineWord),
			// instructions
			"SUB" => LexemeKind::Mnemonic(Inst::Subtract),
			"IMUL" => LexemeKind::Mnemonic(Inst::SignedMultiply),
			"POP" => LexemeKind::Mnemonic(Inst::Pop),
			_ => if let Some(n) = parse_number(&su) {
				LexemeKind::Number(n)
			} else if is_identifier(s) {
				LexemeKind::Identifier
			} else {
				LexemeKind::Unknown
			}
		}
	}
}

impl Reg {
	/// The register field: 3 bits for general registers, 2 bits for segment registers.
	pub fn code(&self) -> u8 {
		match self {
			Reg::Byte(r) => *r as u8,
			Reg::Word(r) => *r as u8,
			Reg::Segment(r) => *r as u8,
		}
	}

	pub fn is_segment(&self) -> bool { matches!(self, Reg::Segment(_)) }

	/// AL and AX get the short immediate forms.
	pub fn is_accumulator(&self) -> bool {
		matches!(self, Reg::Byte(ByteReg::AL) | Reg::Word(WordReg::AX))
	}
}

/// Reads decimal, or hexadecimal written as `0...H`. Expects an upper-cased word.
fn parse_number(s: &str) -> Option<i32> {
	if s.starts_with('0') && s.ends_with('H') {
		// The hex body is a 32-bit pattern, so FFFFFFFF reads back as -1.
		u32::from_str_radix(&s[..s.len() - 1], 16).ok().map(|n| n as i32)
	} else {
		i32::from_str(s).ok()
	}
}

fn is_identifier_start(c: char) -> bool {
	c.is_ascii_alphabetic() || matches!(c, '@' | '?' | '$' | '\'')
}

fn is_identifier_continue(c: char) -> bool {
	c.is_ascii_alphanumeric() || matches!(c, '@' | '?' | '$' | '_' | '.' | '-')
}

// True when some suffix of the word is a start character followed only by continue characters.
fn is_identifier(s: &str) -> bool {
	let mut tail_continues = true;

	for c in s.chars().rev() {
		if is_identifier_start(c) { return true }

		tail_continues &= is_identifier_continue(c);

		if !tail_continues { return false }
	}

	false
}

//--> Tests <--
