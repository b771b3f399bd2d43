//--> Imports <--

use crate::operand::SizeClass;

//--> Enums <--

/// Which byte of a 16-bit value is written first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
	/// High byte first, as immediates are written.
	Natural,
	/// Low byte first, as data definitions are written.
	Swapped,
}

//--> Functions <--

pub fn byte_group(b: u8) -> String { format!("{:02X}", b) }

pub fn address_group(address: u32) -> String { format!("{:04X}", address) }

/// Renders a value as one group per byte, truncated to the given size.
pub fn value_groups(n: i32, size: SizeClass, order: ByteOrder) -> Vec<String> {
	match size {
		SizeClass::Byte => vec![byte_group(n as u8)],
		SizeClass::Word => {
			let [high, low] = (n as u16).to_be_bytes();

			match order {
				ByteOrder::Natural => vec![byte_group(high), byte_group(low)],
				ByteOrder::Swapped => vec![byte_group(low), byte_group(high)],
			}
		}
	}
}

/// Character codes between a pair of single quotes. Fails on unquoted or empty text.
pub fn quoted_codes(s: &str) -> Option<Vec<u32>> {
	let inner = s.strip_prefix('\'')?.strip_suffix('\'')?;

	if inner.is_empty() { return None }

	Some(inner.chars().map(|c| c as u32).collect())
}

//--> Tests <--
