//! Scalar codec generic over the wire byte order.
//!
//! Every function takes the byte order as its first type parameter and
//! accepts either `u8` or `i8` buffers. The [`big_endian`](crate::big_endian)
//! and [`little_endian`](crate::little_endian) modules fix the order and are
//! the usual entry points.
//!
//! Getters return the value found at `[offset, offset + width)`. Setters write
//! exactly those bytes and nothing else. Both check the range first and return
//! [`CodecError::OutOfBounds`](crate::CodecError::OutOfBounds) without touching
//! the buffer when it does not fit.
//!
//! ```
//! use wire_endian::BigEndian;
//! use wire_endian::LittleEndian;
//! use wire_endian::scalar;
//!
//! let mut buf = [0u8; 8];
//! scalar::set_u32::<BigEndian, _>(&mut buf, 2, 0xDEAD_BEEF)?;
//! assert_eq!(buf, [0x00, 0x00, 0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00]);
//! assert_eq!(scalar::get_u32::<LittleEndian, _>(&buf, 2)?, 0xEFBE_ADDE);
//! # Ok::<(), wire_endian::CodecError>(())
//! ```

use crate::error::CodecError;
use crate::error::Result;
use crate::error::window;
use crate::octets::Octet;
use crate::octets::as_bytes;
use crate::octets::as_bytes_mut;
use crate::order::ByteOrder;
use crate::sizes::*;
use crate::word::Word;
use crate::word::assemble;
use crate::word::load;
use crate::word::scatter;
use crate::word::store;

/// Largest value a 48-bit field can hold.
pub const U48_MAX: u64 = (1 << 48) - 1;
/// Smallest value an `i48` field can hold.
pub const I48_MIN: i64 = -(1 << 47);
/// Largest value an `i48` field can hold.
pub const I48_MAX: i64 = (1 << 47) - 1;

#[inline(always)]
fn get_word<O: ByteOrder, W: Word, T: Octet>(buf: &[T], offset: usize) -> Result<W> {
	let bytes = as_bytes(buf);
	let range = window(offset, W::SIZE, bytes.len())?;
	Ok(load::<O, W>(&bytes[range]))
}

#[inline(always)]
fn set_word<O: ByteOrder, W: Word, T: Octet>(buf: &mut [T], offset: usize, value: W) -> Result<()> {
	let bytes = as_bytes_mut(buf);
	let range = window(offset, W::SIZE, bytes.len())?;
	store::<O, W>(&mut bytes[range], value);
	Ok(())
}

/// Reads one byte. Byte order does not apply.
#[inline(always)]
pub fn get_u8<O: ByteOrder, T: Octet>(buf: &[T], offset: usize) -> Result<u8> {
	let bytes = as_bytes(buf);
	let range = window(offset, U8_SIZE, bytes.len())?;
	Ok(bytes[range.start])
}

/// Writes one byte. Byte order does not apply.
#[inline(always)]
pub fn set_u8<O: ByteOrder, T: Octet>(buf: &mut [T], offset: usize, value: u8) -> Result<()> {
	let bytes = as_bytes_mut(buf);
	let range = window(offset, U8_SIZE, bytes.len())?;
	bytes[range.start] = value;
	Ok(())
}

#[inline(always)]
pub fn get_u16<O: ByteOrder, T: Octet>(buf: &[T], offset: usize) -> Result<u16> {
	get_word::<O, u16, T>(buf, offset)
}

#[inline(always)]
pub fn set_u16<O: ByteOrder, T: Octet>(buf: &mut [T], offset: usize, value: u16) -> Result<()> {
	set_word::<O, u16, T>(buf, offset, value)
}

#[inline(always)]
pub fn get_u32<O: ByteOrder, T: Octet>(buf: &[T], offset: usize) -> Result<u32> {
	get_word::<O, u32, T>(buf, offset)
}

#[inline(always)]
pub fn set_u32<O: ByteOrder, T: Octet>(buf: &mut [T], offset: usize, value: u32) -> Result<()> {
	set_word::<O, u32, T>(buf, offset, value)
}

/// Reads a 6-byte unsigned field into the low 48 bits of a `u64`.
///
/// Exactly six bytes are read, whatever the alignment, and the top 16 bits of
/// the result are always zero.
#[inline(always)]
pub fn get_u48<O: ByteOrder, T: Octet>(buf: &[T], offset: usize) -> Result<u64> {
	let bytes = as_bytes(buf);
	let range = window(offset, U48_SIZE, bytes.len())?;
	Ok(assemble::<O>(&bytes[range]))
}

/// Writes the low 48 bits of `value` as a 6-byte field. The top 16 bits are
/// ignored.
#[inline(always)]
pub fn set_u48<O: ByteOrder, T: Octet>(buf: &mut [T], offset: usize, value: u64) -> Result<()> {
	let bytes = as_bytes_mut(buf);
	let range = window(offset, U48_SIZE, bytes.len())?;
	scatter::<O>(&mut bytes[range], value & U48_MAX);
	Ok(())
}

#[inline(always)]
pub fn get_u64<O: ByteOrder, T: Octet>(buf: &[T], offset: usize) -> Result<u64> {
	get_word::<O, u64, T>(buf, offset)
}

#[inline(always)]
pub fn set_u64<O: ByteOrder, T: Octet>(buf: &mut [T], offset: usize, value: u64) -> Result<()> {
	set_word::<O, u64, T>(buf, offset, value)
}

/// Generates signed and floating point accessors as bit reinterpretations of
/// the unsigned accessor of the same width.
macro_rules! impl_reinterpreted {
	($($kind:ident: $V:ty => $raw:ident, $from_raw:expr, $to_raw:expr;)*) => {
		pastey::paste! {
			$(
				#[doc = "Reads an `" $kind "` by reinterpreting the bits of [`get_" $raw "`]."]
				#[inline(always)]
				pub fn [<get_ $kind>]<O: ByteOrder, T: Octet>(buf: &[T], offset: usize) -> Result<$V> {
					[<get_ $raw>]::<O, T>(buf, offset).map($from_raw)
				}

				#[doc = "Writes an `" $kind "` through [`set_" $raw "`] using its bit pattern."]
				#[inline(always)]
				pub fn [<set_ $kind>]<O: ByteOrder, T: Octet>(
					buf: &mut [T],
					offset: usize,
					value: $V,
				) -> Result<()> {
					[<set_ $raw>]::<O, T>(buf, offset, $to_raw(value))
				}
			)*
		}
	};
}

impl_reinterpreted! {
	i8: i8 => u8, |raw: u8| raw as i8, |value: i8| value as u8;
	i16: i16 => u16, |raw: u16| raw as i16, |value: i16| value as u16;
	i32: i32 => u32, |raw: u32| raw as i32, |value: i32| value as u32;
	i48: i64 => u48, sign_extend_48, |value: i64| value as u64;
	i64: i64 => u64, |raw: u64| raw as i64, |value: i64| value as u64;
	f32: f32 => u32, f32::from_bits, f32::to_bits;
	f64: f64 => u64, f64::from_bits, f64::to_bits;
}

/// Copies bit 47 into the 16 bits above it.
#[inline(always)]
const fn sign_extend_48(raw: u64) -> i64 {
	((raw << 16) as i64) >> 16
}

/// Generates the `_tracked` setters. They advance a running length by the
/// field width after a successful write and leave it alone on error. A cursor
/// that cannot grow by the width fails with [`CodecError::LengthOverflow`]
/// before anything is written.
macro_rules! impl_tracked {
	($($kind:ident: $V:ty => $size:ident;)*) => {
		pastey::paste! {
			$(
				#[doc = "[`set_" $kind "`] that also adds `" $size "` bytes to `cursor`."]
				#[inline(always)]
				pub fn [<set_ $kind _tracked>]<O: ByteOrder, T: Octet>(
					buf: &mut [T],
					offset: usize,
					value: $V,
					cursor: &mut usize,
				) -> Result<()> {
					let advanced = cursor.checked_add($size).ok_or(CodecError::LengthOverflow {
						count: 1,
						width: $size,
					})?;
					[<set_ $kind>]::<O, T>(buf, offset, value)?;
					*cursor = advanced;
					Ok(())
				}
			)*
		}
	};
}

impl_tracked! {
	u8: u8 => U8_SIZE;
	u16: u16 => U16_SIZE;
	u32: u32 => U32_SIZE;
	u48: u64 => U48_SIZE;
	u64: u64 => U64_SIZE;
	i8: i8 => I8_SIZE;
	i16: i16 => I16_SIZE;
	i32: i32 => I32_SIZE;
	i48: i64 => I48_SIZE;
	i64: i64 => I64_SIZE;
	f32: f32 => F32_SIZE;
	f64: f64 => F64_SIZE;
}
