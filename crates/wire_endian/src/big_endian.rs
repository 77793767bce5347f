//! Big-endian codec family: the most significant byte is stored at the
//! lowest address. This is the byte order of most network protocols.
//!
//! ```
//! use wire_endian::big_endian;
//!
//! let mut frame = [0u8; 16];
//! let mut len = 0;
//! big_endian::set_u8_tracked(&mut frame, len, 0x7E, &mut len)?;
//! big_endian::set_u16_tracked(&mut frame, len, 0x0102, &mut len)?;
//! big_endian::set_u48_tracked(&mut frame, len, 0x0A0B_0C0D_0E0F, &mut len)?;
//! assert_eq!(len, 9);
//! assert_eq!(&frame[..len], &[0x7E, 0x01, 0x02, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F]);
//! assert_eq!(big_endian::get_u48(&frame, 3)?, 0x0A0B_0C0D_0E0F);
//! # Ok::<(), wire_endian::CodecError>(())
//! ```

pub use crate::sizes::*;

codec_family!(BigEndian, "big-endian");
