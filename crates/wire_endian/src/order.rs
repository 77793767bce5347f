//! Byte order of the external representation and of the host.

use core::fmt;

/// Which byte of a multi-byte value is stored at the lowest address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endianness {
	/// Most significant byte first.
	Big,
	/// Least significant byte first.
	Little,
}

impl Endianness {
	/// Byte order of the target this crate was compiled for.
	#[cfg(target_endian = "big")]
	pub const NATIVE: Self = Self::Big;
	/// Byte order of the target this crate was compiled for.
	#[cfg(target_endian = "little")]
	pub const NATIVE: Self = Self::Little;

	pub const fn is_native(self) -> bool {
		matches!(
			(self, Self::NATIVE),
			(Self::Big, Self::Big) | (Self::Little, Self::Little)
		)
	}
}

impl fmt::Display for Endianness {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Big => f.write_str("big-endian"),
			Self::Little => f.write_str("little-endian"),
		}
	}
}

mod private {
	pub trait Sealed {}
}

/// Type-level byte order used to select a codec family.
///
/// Implemented only by [`BigEndian`] and [`LittleEndian`]. The choice is
/// resolved at compile time, so a codec monomorphised for the host order
/// never contains a byte swap.
pub trait ByteOrder: private::Sealed + Copy + fmt::Debug + 'static {
	const ENDIANNESS: Endianness;

	/// `true` when wire bytes can be used as host bytes unchanged.
	const IS_NATIVE: bool = Self::ENDIANNESS.is_native();
}

/// Most significant byte at the lowest address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BigEndian {}

/// Least significant byte at the lowest address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LittleEndian {}

impl private::Sealed for BigEndian {}
impl private::Sealed for LittleEndian {}

impl ByteOrder for BigEndian {
	const ENDIANNESS: Endianness = Endianness::Big;
}

impl ByteOrder for LittleEndian {
	const ENDIANNESS: Endianness = Endianness::Little;
}

/// The host's own byte order.
#[cfg(target_endian = "big")]
pub type NativeEndian = BigEndian;
/// The host's own byte order.
#[cfg(target_endian = "little")]
pub type NativeEndian = LittleEndian;

/// Network protocols are big-endian.
pub type NetworkEndian = BigEndian;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn native_matches_target() {
		let probe = 0x00FF_u16.to_ne_bytes();
		let expected = if probe[0] == 0xFF {
			Endianness::Little
		} else {
			Endianness::Big
		};
		assert_eq!(Endianness::NATIVE, expected);
		assert_eq!(NativeEndian::ENDIANNESS, expected);
		assert!(NativeEndian::IS_NATIVE);
	}

	#[test]
	fn exactly_one_family_is_native() {
		assert_ne!(BigEndian::IS_NATIVE, LittleEndian::IS_NATIVE);
	}
}
