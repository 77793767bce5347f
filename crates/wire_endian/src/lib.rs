#![no_std]
#![allow(clippy::inline_always)]

//! Big- and little-endian scalar codec over caller-owned byte buffers.
//!
//! Reads and writes `u8`, `u16`, `u32`, `u48`, `u64`, their signed
//! counterparts, `f32` and `f64` at any byte offset of a `[u8]` or `[i8]`
//! buffer, in a byte order fixed by the wire format rather than by the host.
//! The 48-bit kinds are carried in `u64`/`i64` and occupy exactly six bytes.
//!
//! Two families share one operation set: [`big_endian`] and
//! [`little_endian`]. Both are thin instantiations of the order-generic
//! [`scalar`] and [`bulk`] modules.
//!
//! Every access is bounds-checked before any byte is touched and reports a
//! [`CodecError`] instead of reading or writing past the buffer. Nothing is
//! allocated and no state is kept between calls.
//!
//! With the `fast-path` feature (on by default) a naturally aligned field is
//! read or written with one native load or store plus a byte swap when the
//! orders differ. Unaligned fields are assembled byte by byte. Both routes
//! give identical results.
//!
//! ```
//! use wire_endian::big_endian;
//! use wire_endian::little_endian;
//!
//! let mut buf = [0u8; 8];
//! big_endian::set_u32(&mut buf, 2, 0xDEAD_BEEF)?;
//! assert_eq!(buf, [0x00, 0x00, 0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00]);
//!
//! little_endian::set_u32(&mut buf, 2, 0xDEAD_BEEF)?;
//! assert_eq!(buf, [0x00, 0x00, 0xEF, 0xBE, 0xAD, 0xDE, 0x00, 0x00]);
//!
//! assert!(big_endian::get_u64(&buf, 4).is_err());
//! # Ok::<(), wire_endian::CodecError>(())
//! ```

#[macro_use]
mod macros;

mod align;
pub mod big_endian;
pub mod bulk;
mod error;
pub mod little_endian;
mod octets;
mod order;
pub mod scalar;
pub mod sizes;
mod version;
pub mod word;

pub use bytemuck;

pub use crate::align::*;
pub use crate::error::CodecError;
pub use crate::error::Result;
pub use crate::octets::*;
pub use crate::order::*;
pub use crate::version::*;

#[cfg(test)]
extern crate std;
