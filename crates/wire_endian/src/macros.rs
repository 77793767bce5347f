//! Internal logging shims. With the `logs` feature they forward to the `log`
//! facade, otherwise they expand to nothing.

#[cfg(feature = "logs")]
macro_rules! log_debug {
	($($arg:tt)+) => {
		::log::debug!(target: "wire_endian", $($arg)+)
	};
}

#[cfg(not(feature = "logs"))]
macro_rules! log_debug {
	($($arg:tt)+) => {{}};
}

#[cfg(feature = "logs")]
macro_rules! log_trace {
	($($arg:tt)+) => {
		::log::trace!(target: "wire_endian", $($arg)+)
	};
}

#[cfg(not(feature = "logs"))]
macro_rules! log_trace {
	($($arg:tt)+) => {{}};
}

/// Expands the full operation set of one codec family with the byte order
/// fixed to `$order`.
macro_rules! codec_family {
	($order:ident, $label:tt) => {
		codec_family!(@scalars $order, $label;
			u8: u8,
			u16: u16,
			u32: u32,
			u48: u64,
			u64: u64,
			i8: i8,
			i16: i16,
			i32: i32,
			i48: i64,
			i64: i64,
			f32: f32,
			f64: f64
		);
		codec_family!(@bulk $order, $label; 16: u16, 32: u32, 64: u64);
	};

	(@scalars $order:ident, $label:tt; $($kind:ident: $V:ty),*) => {
		pastey::paste! {
			$(
				#[doc = "Reads the " $label " `" $kind "` at `offset`."]
				#[inline(always)]
				pub fn [<get_ $kind>]<T: $crate::Octet>(buf: &[T], offset: usize) -> $crate::Result<$V> {
					$crate::scalar::[<get_ $kind>]::<$crate::$order, T>(buf, offset)
				}

				#[doc = "Writes `value` as a " $label " `" $kind "` at `offset`."]
				#[inline(always)]
				pub fn [<set_ $kind>]<T: $crate::Octet>(
					buf: &mut [T],
					offset: usize,
					value: $V,
				) -> $crate::Result<()> {
					$crate::scalar::[<set_ $kind>]::<$crate::$order, T>(buf, offset, value)
				}

				#[doc = "Writes `value` as a " $label " `" $kind "` at `offset` and advances `cursor` by its width."]
				#[inline(always)]
				pub fn [<set_ $kind _tracked>]<T: $crate::Octet>(
					buf: &mut [T],
					offset: usize,
					value: $V,
					cursor: &mut usize,
				) -> $crate::Result<()> {
					$crate::scalar::[<set_ $kind _tracked>]::<$crate::$order, T>(buf, offset, value, cursor)
				}
			)*
		}
	};

	(@bulk $order:ident, $label:tt; $($bits:tt: $W:ty),*) => {
		pastey::paste! {
			$(
				#[doc = "Converts `count` " $label " " $bits "-bit words from `src` into host order in `dest`."]
				#[inline]
				pub fn [<bulk_convert_ $bits>]<T: $crate::Octet>(
					dest: &mut [T],
					src: &[T],
					count: usize,
				) -> $crate::Result<()> {
					$crate::bulk::convert::<$crate::$order, $W, T>(dest, src, count)
				}

				#[doc = "Converts `count` " $label " " $bits "-bit words at `src` into host order at `dest` within one buffer. The ranges may overlap."]
				#[inline]
				pub fn [<convert_within_ $bits>]<T: $crate::Octet>(
					buffer: &mut [T],
					src: usize,
					dest: usize,
					count: usize,
				) -> $crate::Result<()> {
					$crate::bulk::convert_within::<$crate::$order, $W, T>(buffer, src, dest, count)
				}
			)*
		}
	};
}
