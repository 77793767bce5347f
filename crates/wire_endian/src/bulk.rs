//! Array conversion from wire order to host order.
//!
//! [`convert`] reads `count` words from one buffer and writes them in host
//! layout into another. The borrow rules already guarantee those two slices
//! are disjoint, so in-place and overlapping conversions go through
//! [`convert_within`], which works on a single buffer and picks a plain copy
//! or an overlap-safe move depending on whether the two ranges intersect.
//!
//! When wire and host order agree both reduce to a byte copy. Otherwise every
//! word is reordered explicitly, through a whole-slice cast when the bytes are
//! aligned for `W` and one word at a time when they are not. The result never
//! depends on alignment.

use core::ops::Range;

#[cfg(feature = "fast-path")]
use crate::align::is_ptr_aligned;
use crate::error::Result;
use crate::error::span;
use crate::error::window;
use crate::octets::Octet;
use crate::octets::as_bytes;
use crate::octets::as_bytes_mut;
use crate::order::ByteOrder;
use crate::word::Word;
use crate::word::load;
use crate::word::store_native;

/// Converts `count` words of type `W` stored in `O` order at the start of
/// `src` into host order at the start of `dest`.
///
/// Both buffers must hold at least `count * W::SIZE` bytes. Bytes past that
/// span are left alone.
///
/// ```
/// use wire_endian::BigEndian;
/// use wire_endian::bulk;
///
/// let src = [0x00, 0x01, 0x00, 0x02, 0x00, 0x03];
/// let mut dest = [0u8; 6];
/// bulk::convert::<BigEndian, u16, _>(&mut dest, &src, 3)?;
///
/// let words: Vec<u16> = dest
/// 	.chunks_exact(2)
/// 	.map(|chunk| u16::from_ne_bytes([chunk[0], chunk[1]]))
/// 	.collect();
/// assert_eq!(words, [1, 2, 3]);
/// # Ok::<(), wire_endian::CodecError>(())
/// ```
pub fn convert<O: ByteOrder, W: Word, T: Octet>(
	dest: &mut [T],
	src: &[T],
	count: usize,
) -> Result<()> {
	let len = span(count, W::SIZE)?;
	let src = as_bytes(src);
	let dest = as_bytes_mut(dest);
	let src_range = window(0, len, src.len())?;
	let dest_range = window(0, len, dest.len())?;
	let src = &src[src_range];
	let dest = &mut dest[dest_range];

	convert_disjoint::<O, W>(dest, src);
	Ok(())
}

/// Converts `count` words stored in `O` order at `src` into host order at
/// `dest`, both offsets into the same `buffer`.
///
/// The ranges may overlap in either direction or coincide; the result is the
/// same as converting through a separate temporary buffer.
///
/// ```
/// use wire_endian::LittleEndian;
/// use wire_endian::bulk;
///
/// let mut buffer = [0u8; 12];
/// buffer[..8].copy_from_slice(&[1, 0, 0, 0, 2, 0, 0, 0]);
/// bulk::convert_within::<LittleEndian, u32, _>(&mut buffer, 0, 4, 2)?;
/// assert_eq!(&buffer[4..8], &1u32.to_ne_bytes());
/// assert_eq!(&buffer[8..12], &2u32.to_ne_bytes());
/// # Ok::<(), wire_endian::CodecError>(())
/// ```
pub fn convert_within<O: ByteOrder, W: Word, T: Octet>(
	buffer: &mut [T],
	src: usize,
	dest: usize,
	count: usize,
) -> Result<()> {
	let len = span(count, W::SIZE)?;
	let bytes = as_bytes_mut(buffer);
	let src_range = window(src, len, bytes.len())?;
	let dest_range = window(dest, len, bytes.len())?;

	if len == 0 {
		return Ok(());
	}

	if ranges_overlap(&src_range, &dest_range) {
		log_trace!("overlapping conversion of {count} words, {src} -> {dest}");
		bytes.copy_within(src_range, dest);
		if !O::IS_NATIVE {
			reorder_in_place::<O, W>(&mut bytes[dest_range]);
		}
	} else if src_range.start < dest_range.start {
		let (head, tail) = bytes.split_at_mut(dest_range.start);
		convert_disjoint::<O, W>(&mut tail[..len], &head[src_range]);
	} else {
		let (head, tail) = bytes.split_at_mut(src_range.start);
		convert_disjoint::<O, W>(&mut head[dest_range], &tail[..len]);
	}

	Ok(())
}

/// Whether two half-open byte ranges share at least one byte.
pub fn ranges_overlap(a: &Range<usize>, b: &Range<usize>) -> bool {
	a.start < b.end && b.start < a.end
}

/// `dest` and `src` have the same length, a multiple of `W::SIZE`.
fn convert_disjoint<O: ByteOrder, W: Word>(dest: &mut [u8], src: &[u8]) {
	debug_assert_eq!(dest.len(), src.len());

	if O::IS_NATIVE {
		log_trace!("{} bytes already in host order, copying", src.len());
		dest.copy_from_slice(src);
		return;
	}

	#[cfg(feature = "fast-path")]
	if is_ptr_aligned(src.as_ptr(), W::WIDTH) {
		if let (Ok(out), Ok(words)) = (
			bytemuck::try_cast_slice_mut::<u8, W>(dest),
			bytemuck::try_cast_slice::<u8, W>(src),
		) {
			log_trace!("swapping {} aligned words", words.len());
			for (slot, word) in out.iter_mut().zip(words) {
				*slot = word.swap_bytes();
			}
			return;
		}
	}

	log_trace!("reordering {} words one at a time", src.len() / W::SIZE);
	for (out, word) in dest.chunks_exact_mut(W::SIZE).zip(src.chunks_exact(W::SIZE)) {
		store_native::<W>(out, load::<O, W>(word));
	}
}

/// Rewrites every `O`-ordered word of `bytes` in host order.
fn reorder_in_place<O: ByteOrder, W: Word>(bytes: &mut [u8]) {
	#[cfg(feature = "fast-path")]
	if let Ok(words) = bytemuck::try_cast_slice_mut::<u8, W>(bytes) {
		for word in words {
			*word = word.swap_bytes();
		}
		return;
	}

	for chunk in bytes.chunks_exact_mut(W::SIZE) {
		let value = load::<O, W>(chunk);
		store_native::<W>(chunk, value);
	}
}
