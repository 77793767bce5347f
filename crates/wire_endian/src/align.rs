//! Natural alignment checks that gate the native load/store fast path.
//!
//! The byte assembly fallback is correct at every address. These predicates
//! are only ever consulted to decide whether a single native-width access is
//! allowed.

/// Word widths that have a native load/store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordWidth {
	/// 16-bit words.
	Two = 2,
	/// 32-bit words.
	Four = 4,
	/// 64-bit words.
	Eight = 8,
}

impl WordWidth {
	pub const fn bytes(self) -> usize {
		self as usize
	}

	/// Width class for a byte count, if it has one.
	pub const fn from_bytes(bytes: usize) -> Option<Self> {
		match bytes {
			2 => Some(Self::Two),
			4 => Some(Self::Four),
			8 => Some(Self::Eight),
			_ => None,
		}
	}
}

/// Returns `true` when `address` is a multiple of `width`.
///
/// ```
/// use wire_endian::WordWidth;
/// use wire_endian::is_aligned;
///
/// assert!(is_aligned(0x1000, WordWidth::Eight));
/// assert!(is_aligned(0x1004, WordWidth::Four));
/// assert!(!is_aligned(0x1004, WordWidth::Eight));
/// assert!(!is_aligned(0x1001, WordWidth::Two));
/// ```
#[inline(always)]
pub const fn is_aligned(address: usize, width: WordWidth) -> bool {
	// Widths are powers of two.
	address & (width.bytes() - 1) == 0
}

/// [`is_aligned`] applied to the address of `ptr`.
#[inline(always)]
pub fn is_ptr_aligned<T>(ptr: *const T, width: WordWidth) -> bool {
	is_aligned(ptr.addr(), width)
}
