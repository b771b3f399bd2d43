//--> Imports <--

use std::collections::HashMap;

use crate::{
	error::{
		Result,
		TranslateError,
	},
	lexer::{
		Lexeme,
		LexemeKind,
	},
	operand::SizeClass,
};

//--> Structs <--

/// Where a resolved data definition lives and how wide its elements are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataRef {
	pub address: u32,
	pub size: SizeClass,
}

/// Lookup tables over the lines seen so far. Only ever appended to.
#[derive(Default)]
pub struct SymbolIndex {
	// identifier text -> first line it appeared on
	first_seen: HashMap<String, usize>,
	// line index -> what was emitted for it
	emitted: HashMap<usize, Emitted>,
}

struct Emitted {
	address: u32,
	data: Option<SizeClass>,
}

//--> Functions <--

impl SymbolIndex {
	pub fn new() -> SymbolIndex { SymbolIndex::default() }

	/// Notes every identifier on a freshly lexed line, whether or not the line translates.
	pub fn observe(&mut self, lexemes: &[Lexeme]) {
		for lexeme in lexemes.iter().filter(|l| l.kind == LexemeKind::Identifier) {
			self.first_seen.entry(lexeme.text.clone()).or_insert(lexeme.line);
		}
	}

	/// Registers a successfully translated line.
	pub fn record(&mut self, line: usize, address: u32, data: Option<SizeClass>) {
		self.emitted.insert(line, Emitted { address, data });
	}

	/// Resolves a memory operand to the data definition on the line where its name first appeared.
	pub fn resolve(&self, lexeme: &Lexeme) -> Result<DataRef> {
		let unresolved = || TranslateError::UnresolvedSymbol { name: lexeme.text.clone() };

		let line = self.first_seen.get(&lexeme.text).ok_or_else(unresolved)?;

		match self.emitted.get(line) {
			Some(Emitted { address, data: Some(size) }) => Ok(DataRef { address: *address, size: *size }),
			_ => Err(unresolved()),
		}
	}
}

//--> Tests <--

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexer::lex_line;

	fn operand(text: &str) -> Lexeme {
		Lexeme::new(9, LexemeKind::Identifier, text)
	}

	#[test]
	fn resolves_prior_data_definition() {
		let mut index = SymbolIndex::new();
		index.observe(&lex_line(0, "VAR DW 7"));
		index.record(0, 0x10, Some(SizeClass::Word));

		assert_eq!(index.resolve(&operand("VAR")), Ok(DataRef { address: 0x10, size: SizeClass::Word }));
	}

	#[test]
	fn unknown_name() {
		let index = SymbolIndex::new();

		assert_eq!(index.resolve(&operand("VAR")), Err(TranslateError::UnresolvedSymbol { name: String::from("VAR") }));
	}

	#[test]
	fn names_are_case_sensitive() {
		let mut index = SymbolIndex::new();
		index.observe(&lex_line(0, "VAR DB 1"));
		index.record(0, 0, Some(SizeClass::Byte));

		assert!(index.resolve(&operand("var")).is_err());
	}

	#[test]
	fn line_that_is_not_data() {
		let mut index = SymbolIndex::new();
		index.observe(&lex_line(0, "POP X"));
		index.record(0, 0, None);

		assert!(index.resolve(&operand("X")).is_err());
	}

	#[test]
	fn first_appearance_on_a_failed_line_wins() {
		let mut index = SymbolIndex::new();
		// line 0 failed, so it's never recorded
		index.observe(&lex_line(0, "SUB AL, X"));
		index.observe(&lex_line(1, "X DB 1"));
		index.record(1, 0, Some(SizeClass::Byte));

		assert!(index.resolve(&operand("X")).is_err());
	}
}
