//! Whole-program translation scenarios.

use asm86::{translate, TranslateError, Translator};

fn rows(source: &str) -> Vec<(usize, String, String)> {
	translate(source)
		.records()
		.into_iter()
		.map(|r| (r.line_number, r.address, r.encoded_bytes))
		.collect()
}

#[test]
fn label_then_register_minus_memory() {
	let translation = translate("LABEL1 DB 'A'\nSUB AL, LABEL1\n");

	assert_eq!(rows("LABEL1 DB 'A'\nSUB AL, LABEL1\n"), vec![
		(1, String::from("0000"), String::from("41")),
		(2, String::from("0001"), String::from("2A 06 0000")),
	]);
	assert!(translation.lines[0].is_data());
	assert!(translation.skipped.is_empty());
}

#[test]
fn listed_scenarios() {
	assert_eq!(rows("SUB AX, 5"), vec![(1, String::from("0000"), String::from("2D 00 05"))]);
	assert_eq!(rows("DW 300"), vec![(1, String::from("0000"), String::from("2C 01"))]);
	assert_eq!(rows("POP BP"), vec![(1, String::from("0000"), String::from("5D"))]);
	assert_eq!(rows("IMUL CX"), vec![(1, String::from("0000"), String::from("F7 E9"))]);
}

#[test]
fn deterministic() {
	let source = "A DW 1234\nB DB 'xyz'\nSUB A, 10\nSUB CL, B\nIMUL A\nPOP ES\nSUB SI, 2\nPOP B\n";

	assert_eq!(translate(source), translate(source));
}

#[test]
fn addresses_follow_sizes_of_translated_lines_only() {
	let source = "A DW 1\nSUB AX, BL\nS DB 'hey'\nbogus!\nSUB A, AX\nSUB DX, 3\nPOP AX\n";
	let translation = translate(source);
	let sizes = [2, 3, 4, 6, 1];

	assert_eq!(translation.lines.len(), sizes.len());

	let mut expected = 0;

	for (line, size) in translation.lines.iter().zip(sizes) {
		assert_eq!(line.address, expected);
		expected += size;
	}

	assert_eq!(translation.skipped.iter().map(|s| s.line_number).collect::<Vec<_>>(), vec![2, 4]);
}

#[test]
fn forward_references_are_rejected() {
	let translation = translate("SUB AL, LATER\nLATER DB 1\nSUB AL, LATER\n");

	assert_eq!(translation.skipped[0].error, TranslateError::UnresolvedSymbol { name: String::from("LATER") });
	// LATER first appeared on a line that never translated, so it stays unresolved.
	assert_eq!(translation.skipped[1].error, TranslateError::UnresolvedSymbol { name: String::from("LATER") });
	assert_eq!(translation.lines.len(), 1);
}

#[test]
fn size_mismatch_produces_nothing() {
	let translation = translate("SUB AL, BX\n");

	assert!(translation.lines.is_empty());
	assert_eq!(translation.skipped[0].error, TranslateError::Format { line: 1 });
}

#[test]
fn unsupported_instruction() {
	let translation = translate("CX 1\n");

	assert_eq!(translation.skipped[0].error, TranslateError::UnsupportedInstruction { lexeme: String::from("CX") });
}

#[test]
fn data_addresses_are_referenced_by_later_lines() {
	assert_eq!(rows("POP DS\nX DW 0FFFFH\nIMUL X\nPOP X\n"), vec![
		(1, String::from("0000"), String::from("1F")),
		(2, String::from("0001"), String::from("FF FF")),
		(3, String::from("0003"), String::from("F7 2E 0001")),
		(4, String::from("0007"), String::from("8F 06 0001")),
	]);
}

#[test]
fn translator_can_be_driven_line_by_line() {
	let mut translator = Translator::new();

	for (index, text) in ["V DB 9", "", "SUB V, BH"].iter().enumerate() {
		translator.feed(index, text).expect("line should translate");
	}

	let lines = translator.finish();

	assert_eq!(lines.len(), 2);
	assert_eq!(lines[1].encoded_bytes(), "28 3E 0000");
	assert_eq!(lines[1].line_number(), 3);
}
