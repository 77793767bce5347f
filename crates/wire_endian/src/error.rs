use core::ops::Range;

/// Contract violations detected before any byte is read or written.
///
/// Every operation checks its byte range up front. When it returns an error
/// the buffer has not been touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
	#[error("{width}-byte access at offset {offset} exceeds buffer of {len} bytes")]
	OutOfBounds {
		offset: usize,
		width: usize,
		len: usize,
	},

	#[error("{count} elements of {width} bytes overflow the address space")]
	LengthOverflow { count: usize, width: usize },
}

pub type Result<T, E = CodecError> = core::result::Result<T, E>;

/// Resolves `[offset, offset + width)` against a buffer of `len` bytes.
#[inline(always)]
pub(crate) fn window(offset: usize, width: usize, len: usize) -> Result<Range<usize>> {
	match offset.checked_add(width) {
		Some(end) if end <= len => Ok(offset..end),
		Some(_) => {
			log_debug!("rejected {width}-byte access at offset {offset}, buffer is {len} bytes");
			Err(CodecError::OutOfBounds { offset, width, len })
		}
		None => {
			log_debug!("offset {offset} + {width} bytes overflows");
			Err(CodecError::LengthOverflow { count: 1, width })
		}
	}
}

/// Byte span of `count` elements of `width` bytes.
#[inline(always)]
pub(crate) fn span(count: usize, width: usize) -> Result<usize> {
	count.checked_mul(width).ok_or_else(|| {
		log_debug!("{count} x {width} bytes overflows");
		CodecError::LengthOverflow { count, width }
	})
}
