//--> Imports <--

use crate::lexer::{
	Dir,
	LexemeKind,
	Reg,
};

//--> Enums <--

/// How many bytes an operand occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeClass {
	Byte,
	Word,
}

//--> Functions <--

impl SizeClass {
	pub fn bytes(self) -> u32 {
		match self {
			SizeClass::Byte => 1,
			SizeClass::Word => 2,
		}
	}

	/// The `w` bit of an opcode.
	pub fn w_bit(self) -> u8 {
		match self {
			SizeClass::Byte => 0,
			SizeClass::Word => 1,
		}
	}

	pub fn of_register(reg: Reg) -> SizeClass {
		match reg {
			Reg::Byte(_) => SizeClass::Byte,
			Reg::Word(_) | Reg::Segment(_) => SizeClass::Word,
		}
	}

	pub fn of_directive(dir: Dir) -> SizeClass {
		match dir {
			Dir::DefineByte => SizeClass::Byte,
			Dir::DefineWord => SizeClass::Word,
		}
	}

	/// Registers and directives have a size; everything else doesn't.
	pub fn of_kind(kind: &LexemeKind) -> Option<SizeClass> {
		match kind {
			LexemeKind::Register(reg) => Some(SizeClass::of_register(*reg)),
			LexemeKind::Directive(dir) => Some(SizeClass::of_directive(*dir)),
			_ => None,
		}
	}

	pub fn of_number(n: i32) -> Option<SizeClass> {
		if n > -129 && n < 257 {
			Some(SizeClass::Byte)
		} else if n > -32768 && n < 65537 {
			Some(SizeClass::Word)
		} else { None }
	}

	/// Whether a literal of this value may be stored at this size.
	pub fn holds(self, n: i32) -> bool {
		SizeClass::of_number(n).map_or(false, |class| class <= self)
	}
}

pub fn sizes_match(a: Option<SizeClass>, b: Option<SizeClass>) -> bool {
	matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// An immediate may be narrower than its destination, never wider.
pub fn immediate_fits(n: i32, target: Option<SizeClass>) -> bool {
	target.map_or(false, |class| class.holds(n))
}

//--> Tests <--
