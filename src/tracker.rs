//--> Imports <--

use crate::{
	encoder,
	error::TranslateError,
	lexer,
	operand::SizeClass,
	symbols::SymbolIndex,
	text,
};

//--> Structs <--

/// A translated source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedLine {
	/// Zero-based source line index.
	pub line: usize,
	pub address: u32,
	pub groups: Vec<String>,
	pub source: String,
	/// Element size when the line is a `DB`/`DW` definition.
	pub data: Option<SizeClass>,
}

/// The row handed to whatever renders the results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
	pub line_number: usize,
	pub address: String,
	pub encoded_bytes: String,
	pub source_text: String,
}

/// A line that couldn't be translated, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
	pub line_number: usize,
	pub error: TranslateError,
}

/// Everything one run produced, both lists in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translation {
	pub lines: Vec<EmittedLine>,
	pub skipped: Vec<SkippedLine>,
}

/// Owns the running address and every line emitted so far.
#[derive(Default)]
pub struct Translator {
	lines: Vec<EmittedLine>,
	address: u32,
	symbols: SymbolIndex,
}

//--> Functions <--

/// Translates a whole source text. Bad lines are skipped, never fatal.
pub fn translate(source: &str) -> Translation {
	let mut translator = Translator::new();
	let mut skipped = Vec::new();

	for (index, text) in source.lines().enumerate() {
		if let Err(error) = translator.feed(index, text) {
			skipped.push(SkippedLine { line_number: index + 1, error });
		}
	}

	Translation { lines: translator.finish(), skipped }
}

impl Translator {
	pub fn new() -> Translator { Translator::default() }

	/// Where the next translated line will be placed.
	pub fn address(&self) -> u32 { self.address }

	pub fn lines(&self) -> &[EmittedLine] { &self.lines }

	/// Translates source line `index`. Blank lines give `Ok(None)`; a failed line leaves the address alone.
	pub fn feed(&mut self, index: usize, text: &str) -> Result<Option<&EmittedLine>, TranslateError> {
		let lexemes = lexer::lex_line(index, text);

		if lexemes.is_empty() { return Ok(None) }

		self.symbols.observe(&lexemes);

		let encoding = match encoder::encode(&lexemes, &self.symbols) {
			Ok(encoding) => encoding,
			Err(err) => {
				tracing::debug!(line = index + 1, "skipped line: {}", err);
				return Err(err);
			}
		};

		tracing::debug!(line = index + 1, address = self.address, size = encoding.size, "translated line");

		self.symbols.record(index, self.address, encoding.data);

		self.lines.push(EmittedLine {
			line: index,
			address: self.address,
			groups: encoding.groups,
			source: String::from(text),
			data: encoding.data,
		});

		self.address += encoding.size;

		Ok(self.lines.last())
	}

	pub fn finish(self) -> Vec<EmittedLine> { self.lines }
}

impl EmittedLine {
	pub fn line_number(&self) -> usize { self.line + 1 }

	pub fn address_text(&self) -> String { text::address_group(self.address) }

	pub fn encoded_bytes(&self) -> String { self.groups.join(" ") }

	pub fn is_data(&self) -> bool { self.data.is_some() }

	pub fn record(&self) -> Record {
		Record {
			line_number: self.line_number(),
			address: self.address_text(),
			encoded_bytes: self.encoded_bytes(),
			source_text: self.source.clone(),
		}
	}
}

impl Translation {
	pub fn records(&self) -> Vec<Record> {
		self.lines.iter().map(EmittedLine::record).collect()
	}
}

//--> Tests <--

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn address_advances_only_on_success() {
		let mut translator = Translator::new();

		assert!(translator.feed(0, "POP AX").is_ok());
		assert_eq!(translator.address(), 1);

		assert!(translator.feed(1, "SUB AX, BL").is_err());
		assert_eq!(translator.address(), 1);

		let line = translator.feed(2, "IMUL CX").expect("imul should translate").expect("line isn't blank");
		assert_eq!(line.address, 1);
		assert_eq!(translator.address(), 3);
		assert_eq!(translator.lines().len(), 2);
	}

	#[test]
	fn blank_lines_are_ignored() {
		let mut translator = Translator::new();

		assert_eq!(translator.feed(0, "   "), Ok(None));
		assert_eq!(translator.address(), 0);
		assert!(translator.lines().is_empty());
	}

	#[test]
	fn records() {
		let translation = translate("LABEL1 DB 'A'\nSUB AL, LABEL1\n");
		let records = translation.records();

		assert_eq!(records[0], Record {
			line_number: 1,
			address: String::from("0000"),
			encoded_bytes: String::from("41"),
			source_text: String::from("LABEL1 DB 'A'"),
		});
		assert_eq!(records[1].address, "0001");
		assert_eq!(records[1].encoded_bytes, "2A 06 0000");
		assert!(translation.lines[0].is_data());
		assert!(!translation.lines[1].is_data());
	}

	#[test]
	fn skipped_lines_are_reported_in_order() {
		let translation = translate("MOVE 1 2\nPOP AX\nSUB AX\n");

		assert_eq!(translation.lines.len(), 1);
		assert_eq!(translation.skipped, vec![
			SkippedLine { line_number: 1, error: TranslateError::Format { line: 1 } },
			SkippedLine { line_number: 3, error: TranslateError::Format { line: 3 } },
		]);
	}
}
