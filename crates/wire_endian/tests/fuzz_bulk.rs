//! Property-based tests for bulk conversion: host-order results independent
//! of alignment, and overlap-safe conversion within a single buffer.

use proptest::prelude::*;
use wire_endian::big_endian;
use wire_endian::little_endian;

const BUFFER: usize = 96;

#[repr(C, align(8))]
struct Aligned([u8; BUFFER]);

fn native_words_u32(bytes: &[u8]) -> Vec<u32> {
	bytes
		.chunks_exact(4)
		.map(|chunk| u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
		.collect()
}

fn native_words_u64(bytes: &[u8]) -> Vec<u64> {
	bytes
		.chunks_exact(8)
		.map(|chunk| {
			let mut word = [0u8; 8];
			word.copy_from_slice(chunk);
			u64::from_ne_bytes(word)
		})
		.collect()
}

// ---------------------------------------------------------------------------
// Disjoint conversion yields host-order words at any alignment
// ---------------------------------------------------------------------------

proptest! {
	#[test]
	fn bulk_u32_matches_scalar_decode(
		ref words in prop::collection::vec(any::<u32>(), 0..16),
		src_shift in 0usize..8,
		dest_shift in 0usize..8,
	) {
		let mut src = Aligned([0; BUFFER]);
		let mut dest = Aligned([0; BUFFER]);
		for (index, word) in words.iter().enumerate() {
			big_endian::set_u32(&mut src.0, src_shift + index * 4, *word)
				.unwrap_or_else(|e| panic!("{e}"));
		}

		big_endian::bulk_convert_32(&mut dest.0[dest_shift..], &src.0[src_shift..], words.len())
			.unwrap_or_else(|e| panic!("{e}"));
		let span = words.len() * 4;
		prop_assert_eq!(&native_words_u32(&dest.0[dest_shift..dest_shift + span]), words);
	}

	#[test]
	fn bulk_u64_little_endian(
		ref words in prop::collection::vec(any::<u64>(), 0..8),
		shift in 0usize..8,
	) {
		let mut src = Aligned([0; BUFFER]);
		let mut dest = [0u8; BUFFER];
		for (index, word) in words.iter().enumerate() {
			little_endian::set_u64(&mut src.0, shift + index * 8, *word)
				.unwrap_or_else(|e| panic!("{e}"));
		}

		little_endian::bulk_convert_64(&mut dest, &src.0[shift..], words.len())
			.unwrap_or_else(|e| panic!("{e}"));
		prop_assert_eq!(&native_words_u64(&dest[..words.len() * 8]), words);
	}
}

// ---------------------------------------------------------------------------
// Conversion within one buffer equals conversion through a temporary
// ---------------------------------------------------------------------------

proptest! {
	#[test]
	fn convert_within_matches_temporary(
		bytes in prop::array::uniform32(any::<u8>()),
		count in 0usize..8,
		src in 0usize..48,
		dest in 0usize..48,
	) {
		let mut buffer = Aligned([0; BUFFER]);
		buffer.0[..32].copy_from_slice(&bytes);
		buffer.0[32..64].copy_from_slice(&bytes);

		let span = count * 4;
		let mut temporary = vec![0u8; span];
		big_endian::bulk_convert_32(&mut temporary, &buffer.0[src..], count)
			.unwrap_or_else(|e| panic!("{e}"));
		let mut expected = buffer.0;
		expected[dest..dest + span].copy_from_slice(&temporary);

		big_endian::convert_within_32(&mut buffer.0, src, dest, count)
			.unwrap_or_else(|e| panic!("{e}"));
		prop_assert_eq!(&buffer.0[..], &expected[..]);
	}

	#[test]
	fn convert_within_u16_little_endian(
		bytes in prop::array::uniform32(any::<u8>()),
		count in 0usize..16,
		src in 0usize..32,
		dest in 0usize..32,
	) {
		let mut buffer = [0u8; 64];
		buffer[..32].copy_from_slice(&bytes);

		let span = count * 2;
		let mut temporary = vec![0u8; span];
		little_endian::bulk_convert_16(&mut temporary, &buffer[src..], count)
			.unwrap_or_else(|e| panic!("{e}"));
		let mut expected = buffer;
		expected[dest..dest + span].copy_from_slice(&temporary);

		little_endian::convert_within_16(&mut buffer, src, dest, count)
			.unwrap_or_else(|e| panic!("{e}"));
		prop_assert_eq!(buffer, expected);
	}
}

#[test]
fn one_word_forward_overlap() {
	let mut buffer = Aligned([0; BUFFER]);
	let words = [0x0A0B_0C0D_u32, 0x1020_3040, 0xCAFE_BABE, 0x0000_0001];
	for (index, word) in words.iter().enumerate() {
		big_endian::set_u32(&mut buffer.0, index * 4, *word).unwrap();
	}

	big_endian::convert_within_32(&mut buffer.0, 0, 4, 4).unwrap();
	assert_eq!(native_words_u32(&buffer.0[4..20]), words);
	assert_eq!(&buffer.0[..4], &[0x0A, 0x0B, 0x0C, 0x0D]);
}
