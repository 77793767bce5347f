//! Byte footprint of every scalar kind the codec handles.

use core::fmt;

/// Size of a `u8` field (1 byte).
pub const U8_SIZE: usize = 1;
/// Size of a `u16` field (2 bytes).
pub const U16_SIZE: usize = 2;
/// Size of a `u32` field (4 bytes).
pub const U32_SIZE: usize = 4;
/// Size of a `u48` field (6 bytes). Carried in a `u64`.
pub const U48_SIZE: usize = 6;
/// Size of a `u64` field (8 bytes).
pub const U64_SIZE: usize = 8;

/// Size of an `i8` field (1 byte).
pub const I8_SIZE: usize = 1;
/// Size of an `i16` field (2 bytes).
pub const I16_SIZE: usize = 2;
/// Size of an `i32` field (4 bytes).
pub const I32_SIZE: usize = 4;
/// Size of an `i48` field (6 bytes). Carried in an `i64`.
pub const I48_SIZE: usize = 6;
/// Size of an `i64` field (8 bytes).
pub const I64_SIZE: usize = 8;

/// Size of an IEEE-754 single precision field (4 bytes).
pub const F32_SIZE: usize = 4;
/// Size of an IEEE-754 double precision field (8 bytes).
pub const F64_SIZE: usize = 8;

/// The twelve scalar kinds understood by the codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
	U8,
	U16,
	U32,
	U48,
	U64,
	I8,
	I16,
	I32,
	I48,
	I64,
	F32,
	F64,
}

impl ScalarKind {
	pub const ALL: [Self; 12] = [
		Self::U8,
		Self::U16,
		Self::U32,
		Self::U48,
		Self::U64,
		Self::I8,
		Self::I16,
		Self::I32,
		Self::I48,
		Self::I64,
		Self::F32,
		Self::F64,
	];

	/// Number of bytes the kind occupies in a buffer.
	pub const fn size(self) -> usize {
		match self {
			Self::U8 => U8_SIZE,
			Self::U16 => U16_SIZE,
			Self::U32 => U32_SIZE,
			Self::U48 => U48_SIZE,
			Self::U64 => U64_SIZE,
			Self::I8 => I8_SIZE,
			Self::I16 => I16_SIZE,
			Self::I32 => I32_SIZE,
			Self::I48 => I48_SIZE,
			Self::I64 => I64_SIZE,
			Self::F32 => F32_SIZE,
			Self::F64 => F64_SIZE,
		}
	}

	pub const fn is_signed(self) -> bool {
		matches!(
			self,
			Self::I8 | Self::I16 | Self::I32 | Self::I48 | Self::I64 | Self::F32 | Self::F64
		)
	}

	pub const fn is_float(self) -> bool {
		matches!(self, Self::F32 | Self::F64)
	}

	pub const fn name(self) -> &'static str {
		match self {
			Self::U8 => "u8",
			Self::U16 => "u16",
			Self::U32 => "u32",
			Self::U48 => "u48",
			Self::U64 => "u64",
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I48 => "i48",
			Self::I64 => "i64",
			Self::F32 => "f32",
			Self::F64 => "f64",
		}
	}
}

impl fmt::Display for ScalarKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
