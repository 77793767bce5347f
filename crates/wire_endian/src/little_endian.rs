//! Little-endian codec family: the least significant byte is stored at the
//! lowest address.
//!
//! ```
//! use wire_endian::little_endian;
//!
//! let mut record = [0i8; 12];
//! little_endian::set_f32(&mut record, 0, 1.0)?;
//! little_endian::set_i64(&mut record, 4, -2)?;
//! assert_eq!(little_endian::get_f32(&record, 0)?, 1.0);
//! assert_eq!(little_endian::get_i64(&record, 4)?, -2);
//! # Ok::<(), wire_endian::CodecError>(())
//! ```

pub use crate::sizes::*;

codec_family!(LittleEndian, "little-endian");
