//--> Imports <--

use std::{
	fmt,
	path::PathBuf,
};

use thiserror::Error;

//--> Type Aliases <--

pub type Result<T> = std::result::Result<T, TranslateError>;

//--> Structs <--

/// A message for the user about one input file, optionally tied to a line.
pub struct Diagnostic {
	pub is_warning: bool,
	pub file: PathBuf,
	pub line: Option<usize>,
	pub message: String,
}

//--> Enums <--

/// Why a single line couldn't be translated. None of these stop the run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TranslateError {
	/// Wrong operand count, wrong operand kinds, or mismatched operand sizes.
	#[error("line {line} is badly formed")]
	Format { line: usize },

	#[error("no data definition named \"{name}\" was translated before this line")]
	UnresolvedSymbol { name: String },

	#[error("\"{lexeme}\" is not an instruction or directive")]
	UnsupportedInstruction { lexeme: String },
}

//--> Functions <--

impl Diagnostic {
	pub fn new(is_warning: bool, file: PathBuf, line: Option<usize>, message: String) -> Diagnostic {
		Diagnostic { is_warning, file, line, message }
	}

	/// A skipped line is a warning; the rest of the file still gets translated.
	pub fn skipped(file: PathBuf, line: usize, err: &TranslateError) -> Diagnostic {
		Diagnostic::new(true, file, Some(line), format!("Skipped this line: {}", err))
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let start = if self.is_warning { "WARN" } else { "ERR" };

		match self.line {
			Some(l) => write!(f, "{}: {}: {}: {}", start, self.file.display(), l, self.message),
			None => write!(f, "{}: {}: {}", start, self.file.display(), self.message)
		}
	}
}

//--> Tests <--
