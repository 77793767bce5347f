//! Word-level primitives shared by the scalar and bulk codecs.
//!
//! [`assemble`] and [`scatter`] are the reference byte layout: they build or
//! split a value one byte at a time and are correct at any address and for any
//! width up to eight bytes, including the 6-byte fields. [`load`] and
//! [`store`] add the fast path on top of them. When the `fast-path` feature is
//! enabled and the bytes are naturally aligned for the word, they perform a
//! single native access through a checked `bytemuck` cast and swap the bytes
//! only if the wire order differs from the host order.

use core::fmt::Debug;

use bytemuck::Pod;

#[cfg(feature = "fast-path")]
use crate::align::is_ptr_aligned;
use crate::align::WordWidth;
use crate::order::ByteOrder;
use crate::order::Endianness;
use crate::order::NativeEndian;

mod private {
	pub trait Sealed {}
}

/// Unsigned integers with a native load/store instruction.
pub trait Word: Pod + Eq + Debug + private::Sealed {
	const WIDTH: WordWidth;
	const SIZE: usize = Self::WIDTH.bytes();

	fn swap_bytes(self) -> Self;

	/// Keeps the low `SIZE` bytes of `value`.
	fn truncate_from(value: u64) -> Self;

	fn widen(self) -> u64;
}

macro_rules! impl_word {
	($W:ty, $width:expr) => {
		impl private::Sealed for $W {}

		impl Word for $W {
			const WIDTH: WordWidth = $width;

			#[inline(always)]
			fn swap_bytes(self) -> Self {
				<$W>::swap_bytes(self)
			}

			#[inline(always)]
			fn truncate_from(value: u64) -> Self {
				value as $W
			}

			#[inline(always)]
			fn widen(self) -> u64 {
				u64::from(self)
			}
		}
	};
}

impl_word!(u16, WordWidth::Two);
impl_word!(u32, WordWidth::Four);
impl_word!(u64, WordWidth::Eight);

/// Builds a value from `bytes` laid out in `O` order.
///
/// Accepts 0 to 8 bytes. Bits above `8 * bytes.len()` are always zero.
///
/// ```
/// use wire_endian::BigEndian;
/// use wire_endian::LittleEndian;
/// use wire_endian::word::assemble;
///
/// let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
/// assert_eq!(assemble::<BigEndian>(&bytes), 0x0102_0304_0506);
/// assert_eq!(assemble::<LittleEndian>(&bytes), 0x0605_0403_0201);
/// ```
#[inline(always)]
pub fn assemble<O: ByteOrder>(bytes: &[u8]) -> u64 {
	debug_assert!(bytes.len() <= 8);
	match O::ENDIANNESS {
		Endianness::Big => {
			bytes
				.iter()
				.fold(0, |value, &byte| (value << 8) | u64::from(byte))
		}
		Endianness::Little => {
			bytes
				.iter()
				.rev()
				.fold(0, |value, &byte| (value << 8) | u64::from(byte))
		}
	}
}

/// Writes the low `bytes.len()` bytes of `value` into `bytes` in `O` order.
///
/// Higher bytes of `value` are dropped and nothing outside `bytes` is touched.
#[inline(always)]
pub fn scatter<O: ByteOrder>(bytes: &mut [u8], value: u64) {
	debug_assert!(bytes.len() <= 8);
	let last = bytes.len().saturating_sub(1);
	for (index, byte) in bytes.iter_mut().enumerate() {
		let shift = match O::ENDIANNESS {
			Endianness::Big => 8 * (last - index),
			Endianness::Little => 8 * index,
		};
		*byte = (value >> shift) as u8;
	}
}

/// Converts between a word as it sits in memory in `O` order and its value.
/// The same swap works in both directions.
#[cfg(feature = "fast-path")]
#[inline(always)]
pub(crate) fn reorder<O: ByteOrder, W: Word>(word: W) -> W {
	if O::IS_NATIVE { word } else { word.swap_bytes() }
}

/// Reads a `W` stored in `O` order. `bytes` must be exactly `W::SIZE` long.
#[inline(always)]
pub(crate) fn load<O: ByteOrder, W: Word>(bytes: &[u8]) -> W {
	debug_assert_eq!(bytes.len(), W::SIZE);

	#[cfg(feature = "fast-path")]
	if is_ptr_aligned(bytes.as_ptr(), W::WIDTH) {
		if let Ok(word) = bytemuck::try_from_bytes::<W>(bytes) {
			return reorder::<O, W>(*word);
		}
	}

	W::truncate_from(assemble::<O>(bytes))
}

/// Writes `value` in `O` order. `bytes` must be exactly `W::SIZE` long.
#[inline(always)]
pub(crate) fn store<O: ByteOrder, W: Word>(bytes: &mut [u8], value: W) {
	debug_assert_eq!(bytes.len(), W::SIZE);

	#[cfg(feature = "fast-path")]
	if is_ptr_aligned(bytes.as_ptr(), W::WIDTH) {
		if let Ok(slot) = bytemuck::try_from_bytes_mut::<W>(bytes) {
			*slot = reorder::<O, W>(value);
			return;
		}
	}

	scatter::<O>(bytes, value.widen());
}

/// Writes `value` in host order.
#[inline(always)]
pub(crate) fn store_native<W: Word>(bytes: &mut [u8], value: W) {
	store::<NativeEndian, W>(bytes, value);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::order::BigEndian;
	use crate::order::LittleEndian;

	#[repr(C, align(8))]
	struct Aligned([u8; 24]);

	const PATTERN: [u8; 24] = [
		0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32,
		0x10, 0x0F, 0x1E, 0x2D, 0x3C, 0x4B, 0x5A, 0x69, 0x78,
	];

	fn check_load_at_every_offset<W: Word>() {
		let block = Aligned(PATTERN);
		for offset in 0..8 {
			let bytes = &block.0[offset..offset + W::SIZE];
			assert_eq!(
				load::<BigEndian, W>(bytes),
				W::truncate_from(assemble::<BigEndian>(bytes)),
				"big-endian offset {offset}"
			);
			assert_eq!(
				load::<LittleEndian, W>(bytes),
				W::truncate_from(assemble::<LittleEndian>(bytes)),
				"little-endian offset {offset}"
			);
		}
	}

	fn check_store_at_every_offset<W: Word>(value: W) {
		for offset in 0..8 {
			let mut fast = Aligned([0xAA; 24]);
			let mut reference = [0xAA_u8; 24];
			store::<BigEndian, W>(&mut fast.0[offset..offset + W::SIZE], value);
			scatter::<BigEndian>(&mut reference[offset..offset + W::SIZE], value.widen());
			assert_eq!(fast.0, reference, "big-endian offset {offset}");

			let mut fast = Aligned([0xAA; 24]);
			let mut reference = [0xAA_u8; 24];
			store::<LittleEndian, W>(&mut fast.0[offset..offset + W::SIZE], value);
			scatter::<LittleEndian>(&mut reference[offset..offset + W::SIZE], value.widen());
			assert_eq!(fast.0, reference, "little-endian offset {offset}");
		}
	}

	#[test]
	fn assemble_matches_std_layouts() {
		let bytes = &PATTERN[..8];
		assert_eq!(
			assemble::<BigEndian>(bytes),
			u64::from_be_bytes(PATTERN[..8].try_into().unwrap())
		);
		assert_eq!(
			assemble::<LittleEndian>(bytes),
			u64::from_le_bytes(PATTERN[..8].try_into().unwrap())
		);
		assert_eq!(assemble::<BigEndian>(&[]), 0);
	}

	#[test]
	fn scatter_drops_high_bytes() {
		let mut six = [0u8; 6];
		scatter::<BigEndian>(&mut six, 0xFFFF_0102_0304_0506);
		assert_eq!(six, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
		scatter::<LittleEndian>(&mut six, 0xFFFF_0102_0304_0506);
		assert_eq!(six, [0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
	}

	#[test]
	fn fast_load_agrees_with_reference() {
		check_load_at_every_offset::<u16>();
		check_load_at_every_offset::<u32>();
		check_load_at_every_offset::<u64>();
	}

	#[test]
	fn fast_store_agrees_with_reference() {
		check_store_at_every_offset::<u16>(0xBEEF);
		check_store_at_every_offset::<u32>(0xDEAD_BEEF);
		check_store_at_every_offset::<u64>(0x0123_4567_89AB_CDEF);
	}

	#[test]
	fn native_store_uses_host_layout() {
		let mut bytes = [0u8; 4];
		store_native(&mut bytes, 0x0A0B_0C0D_u32);
		assert_eq!(bytes, 0x0A0B_0C0D_u32.to_ne_bytes());
	}
}
