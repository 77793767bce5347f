//! Buffer element types.
//!
//! Binary buffers show up both as raw `u8` octets and as platform `c_char`
//! octets (`i8` on most targets). Both are viewed as the same bytes through
//! [`bytemuck`], so every codec operation behaves identically for either.

use bytemuck::Pod;

mod private {
	pub trait Sealed {}
}

/// A single byte-sized buffer element.
pub trait Octet: Pod + private::Sealed {}

impl private::Sealed for u8 {}
impl private::Sealed for i8 {}
impl Octet for u8 {}
impl Octet for i8 {}

/// Views an octet slice as raw bytes.
#[inline(always)]
pub fn as_bytes<T: Octet>(buf: &[T]) -> &[u8] {
	bytemuck::cast_slice(buf)
}

/// Views a mutable octet slice as raw bytes.
#[inline(always)]
pub fn as_bytes_mut<T: Octet>(buf: &mut [T]) -> &mut [u8] {
	bytemuck::cast_slice_mut(buf)
}
