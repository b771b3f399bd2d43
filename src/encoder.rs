//--> Imports <--

use crate::{
	error::{
		Result,
		TranslateError,
	},
	lexer::{
		Dir,
		Inst,
		Lexeme,
		LexemeKind,
		Reg,
	},
	operand::{
		immediate_fits,
		sizes_match,
		SizeClass,
	},
	symbols::SymbolIndex,
	text::{
		self,
		ByteOrder,
	},
};

//--> Constants <--

// mod=00 r/m=110 with reg=101, the direct address form used by the immediate and IMUL memory encodings.
const DIRECT_ADDRESS: u8 = 0b0010_1110;

//--> Structs <--

/// The code produced for one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoding {
	pub groups: Vec<String>,
	/// How far the address advances past this line.
	pub size: u32,
	/// Set for `DB`/`DW` lines: the size of each stored element.
	pub data: Option<SizeClass>,
}

//--> Enums <--

// An instruction operand as the encoder sees it.
enum Operand<'a> {
	Register(Reg),
	Memory(&'a Lexeme),
	Immediate(i32),
}

//--> Functions <--

/// Encodes one lexed line. Memory operands are looked up in `symbols`.
pub fn encode(lexemes: &[Lexeme], symbols: &SymbolIndex) -> Result<Encoding> {
	let (head, operands) = match lexemes.split_first() {
		Some(split) => split,
		None => return Err(TranslateError::UnsupportedInstruction { lexeme: String::new() }),
	};

	let line = head.line + 1;

	match head.kind {
		LexemeKind::Mnemonic(Inst::Subtract) => encode_sub(line, operands, symbols),
		LexemeKind::Mnemonic(Inst::SignedMultiply) => encode_imul(line, operands, symbols),
		LexemeKind::Mnemonic(Inst::Pop) => encode_pop(line, operands, symbols),
		// label DB|DW value
		LexemeKind::Identifier => match operands {
			[Lexeme { kind: LexemeKind::Directive(dir), .. }, value] => encode_definition(line, *dir, value),
			_ => Err(TranslateError::Format { line }),
		},
		// DB|DW value, with nothing to refer to it by
		LexemeKind::Directive(dir) => match operands {
			[value] => encode_definition(line, dir, value),
			_ => Err(TranslateError::Format { line }),
		},
		_ => Err(TranslateError::UnsupportedInstruction { lexeme: head.text.clone() }),
	}
}

impl Encoding {
	fn code(size: u32) -> Encoding {
		Encoding { groups: Vec::new(), size, data: None }
	}

	fn data(size: u32, element: SizeClass) -> Encoding {
		Encoding { groups: Vec::new(), size, data: Some(element) }
	}

	fn byte(mut self, b: u8) -> Encoding {
		self.groups.push(text::byte_group(b));
		self
	}

	fn value(mut self, n: i32, size: SizeClass, order: ByteOrder) -> Encoding {
		self.groups.extend(text::value_groups(n, size, order));
		self
	}

	fn address(mut self, address: u32) -> Encoding {
		self.groups.push(text::address_group(address));
		self
	}
}

// Registers, labels and numbers only. Segment registers can't be SUB or IMUL operands.
fn general_operand(line: usize, lexeme: &Lexeme) -> Result<Operand<'_>> {
	match lexeme.kind {
		LexemeKind::Register(reg) if !reg.is_segment() => Ok(Operand::Register(reg)),
		LexemeKind::Identifier => Ok(Operand::Memory(lexeme)),
		LexemeKind::Number(n) => Ok(Operand::Immediate(n)),
		_ => Err(TranslateError::Format { line }),
	}
}

// mod=00 r/m=110: direct address with the register in the middle field.
fn direct_modrm(reg: Reg) -> u8 { (reg.code() << 3) | 0b0000_0110 }

fn check(line: usize, ok: bool) -> Result<()> {
	if ok { Ok(()) } else { Err(TranslateError::Format { line }) }
}

fn encode_sub(line: usize, operands: &[Lexeme], symbols: &SymbolIndex) -> Result<Encoding> {
	let (dst, src) = match operands {
		[dst, src] => (general_operand(line, dst)?, general_operand(line, src)?),
		_ => return Err(TranslateError::Format { line }),
	};

	match (dst, src) {
		(Operand::Memory(label), Operand::Immediate(n)) => {
			let data = symbols.resolve(label)?;
			check(line, immediate_fits(n, Some(data.size)))?;

			Ok(Encoding::code(4 + data.size.bytes())
				.byte(0b1000_0000 | data.size.w_bit())
				.byte(DIRECT_ADDRESS)
				.value(n, data.size, ByteOrder::Natural)
				.address(data.address))
		},
		(Operand::Memory(label), Operand::Register(reg)) => {
			let data = symbols.resolve(label)?;
			check(line, sizes_match(Some(data.size), Some(SizeClass::of_register(reg))))?;

			Ok(Encoding::code(4)
				.byte(0b0010_1000 | data.size.w_bit())
				.byte(direct_modrm(reg))
				.address(data.address))
		},
		(Operand::Register(reg), Operand::Memory(label)) => {
			let data = symbols.resolve(label)?;
			check(line, sizes_match(Some(SizeClass::of_register(reg)), Some(data.size)))?;

			Ok(Encoding::code(4)
				.byte(0b0010_1010 | data.size.w_bit())
				.byte(direct_modrm(reg))
				.address(data.address))
		},
		(Operand::Register(reg), Operand::Immediate(n)) => {
			let size = SizeClass::of_register(reg);
			check(line, immediate_fits(n, Some(size)))?;

			if reg.is_accumulator() {
				Ok(Encoding::code(1 + size.bytes())
					.byte(0b0010_1100 | size.w_bit())
					.value(n, size, ByteOrder::Natural))
			} else {
				// Advances by two more bytes than it emits; kept as-is for listing compatibility.
				Ok(Encoding::code(4 + size.bytes())
					.byte(0b1000_0010 | size.w_bit())
					.byte(0b1110_1000 | reg.code())
					.value(n, size, ByteOrder::Natural))
			}
		},
		(Operand::Register(dst), Operand::Register(src)) => {
			let size = SizeClass::of_register(dst);
			check(line, sizes_match(Some(size), Some(SizeClass::of_register(src))))?;

			Ok(Encoding::code(2)
				.byte(0b0010_1010 | size.w_bit())
				.byte(0b1100_0000 | (dst.code() << 3) | src.code()))
		},
		// immediate destination, or memory to memory
		_ => Err(TranslateError::Format { line }),
	}
}

fn encode_imul(line: usize, operands: &[Lexeme], symbols: &SymbolIndex) -> Result<Encoding> {
	let operand = match operands {
		[operand] => general_operand(line, operand)?,
		_ => return Err(TranslateError::Format { line }),
	};

	match operand {
		Operand::Memory(label) => {
			let data = symbols.resolve(label)?;

			Ok(Encoding::code(4)
				.byte(0b1111_0110 | data.size.w_bit())
				.byte(DIRECT_ADDRESS)
				.address(data.address))
		},
		Operand::Register(reg) => Ok(Encoding::code(2)
			.byte(0b1111_0110 | SizeClass::of_register(reg).w_bit())
			.byte(0b1110_1000 | reg.code())),
		Operand::Immediate(_) => Err(TranslateError::Format { line }),
	}
}

fn encode_pop(line: usize, operands: &[Lexeme], symbols: &SymbolIndex) -> Result<Encoding> {
	let operand = match operands {
		[operand] => operand,
		_ => return Err(TranslateError::Format { line }),
	};

	match operand.kind {
		LexemeKind::Identifier => {
			let data = symbols.resolve(operand)?;

			Ok(Encoding::code(4)
				.byte(0b1000_1111)
				.byte(0b0000_0110)
				.address(data.address))
		},
		LexemeKind::Register(reg) if reg.is_segment() => Ok(Encoding::code(1)
			.byte((reg.code() << 3) | 0b0000_0111)),
		LexemeKind::Register(reg) => Ok(Encoding::code(1)
			.byte(0b0101_1000 | reg.code())),
		_ => Err(TranslateError::Format { line }),
	}
}

fn encode_definition(line: usize, dir: Dir, value: &Lexeme) -> Result<Encoding> {
	let size = SizeClass::of_directive(dir);

	match value.kind {
		LexemeKind::Number(n) => {
			check(line, size.holds(n))?;

			Ok(Encoding::data(size.bytes(), size).value(n, size, ByteOrder::Swapped))
		},
		// quoted text classifies as an identifier
		LexemeKind::Identifier => {
			let codes = text::quoted_codes(&value.text).ok_or(TranslateError::Format { line })?;
			let total = size.bytes() * codes.len() as u32;

			codes.into_iter().try_fold(Encoding::data(total, size), |encoding, code| {
				// Characters wider than an element are rejected like oversized numbers.
				check(line, size.holds(code as i32))?;

				Ok(encoding.value(code as i32, size, ByteOrder::Swapped))
			})
		},
		_ => Err(TranslateError::Format { line }),
	}
}

//--> Tests <--
