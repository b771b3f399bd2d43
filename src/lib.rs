//! Translates a small 8086 subset (`SUB`, `IMUL`, `POP`, `DB`, `DW`) into hex object code, one line at a time.
//!
//! Lines that fail to translate are skipped without moving the address, so a run always finishes.

//--> Imports <--

// Encodes instructions and data definitions.
pub mod encoder;

// Error kinds and user-facing diagnostics.
pub mod error;

// Splits source lines into classified lexemes.
pub mod lexer;

// Renders translated lines as a fixed-width table.
pub mod listing;

// Operand size classes.
pub mod operand;

// Resolves labels to earlier data definitions.
pub mod symbols;

// Hex and quoted-literal helpers.
pub mod text;

// Running address and the emitted line sequence.
pub mod tracker;

pub use error::{
	Diagnostic,
	TranslateError,
};

pub use tracker::{
	translate,
	EmittedLine,
	Record,
	SkippedLine,
	Translation,
	Translator,
};
