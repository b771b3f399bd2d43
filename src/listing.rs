//--> Imports <--

use std::fmt::Write;

use crate::tracker::Record;

//--> Constants <--

const COLUMNS: usize = 4;

const COLUMN_WIDTH: usize = 30;

const HEADER: [&str; COLUMNS] = ["Line", "Address", "Object code", "Source line"];

//--> Functions <--

/// Renders records as a bordered table with centred cells.
pub fn render(records: &[Record]) -> String {
	let rule = "-".repeat(COLUMNS * COLUMN_WIDTH + (COLUMNS - 1));
	let mut out = String::new();

	out.push_str(&rule);
	out.push('\n');

	push_row(&mut out, &HEADER.map(String::from), &rule);

	for record in records {
		let row = [
			record.line_number.to_string(),
			record.address.clone(),
			record.encoded_bytes.clone(),
			record.source_text.clone(),
		];

		push_row(&mut out, &row, &rule);
	}

	out
}

fn push_row(out: &mut String, cells: &[String; COLUMNS], rule: &str) {
	for cell in cells {
		// Overlong cells just push the border out.
		let spaces = COLUMN_WIDTH.saturating_sub(cell.chars().count());
		let left = spaces / 2;

		// Writing to a String can't fail.
		let _ = write!(out, "|{}{}{}", " ".repeat(left), cell, " ".repeat(spaces - left));
	}

	out.push_str("|\n");
	out.push_str(rule);
	out.push('\n');
}

//--> Tests <--

#[cfg(test)]
mod tests {
	use super::*;

	fn record() -> Record {
		Record {
			line_number: 2,
			address: String::from("0001"),
			encoded_bytes: String::from("2A 06 0000"),
			source_text: String::from("SUB AL, LABEL1"),
		}
	}

	#[test]
	fn layout() {
		let table = render(&[record()]);
		let lines = table.lines().collect::<Vec<_>>();

		// rule, header, rule, row, rule
		assert_eq!(lines.len(), 5);
		assert_eq!(lines[0].len(), 123);
		assert!(lines.iter().step_by(2).all(|l| l.chars().all(|c| c == '-')));
		assert_eq!(lines[1].len(), 4 * 31 + 1);
		assert_eq!(lines[3].len(), 4 * 31 + 1);
	}

	#[test]
	fn cells_are_centred() {
		let table = render(&[record()]);
		let row = table.lines().nth(3).expect("row should exist");
		let cells = row.split('|').collect::<Vec<_>>();

		// "0001" leaves 26 spaces, 13 either side
		assert_eq!(cells[2], format!("{}0001{}", " ".repeat(13), " ".repeat(13)));
		// "2" leaves 29 spaces, the extra one goes right
		assert_eq!(cells[1], format!("{}2{}", " ".repeat(14), " ".repeat(15)));
	}

	#[test]
	fn empty_table_has_header() {
		let table = render(&[]);

		assert_eq!(table.lines().count(), 3);
		assert!(table.contains("Object code"));
	}
}
