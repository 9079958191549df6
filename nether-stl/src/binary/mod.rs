//! Binary STL encoding
//!
//! All multi-byte values are little-endian. The header carries no meaning and
//! is written as zeros.
//!
//! # File Structure
//!
//! ```text
//! 0x00: header [u8; 80]
//! 0x50: triangle_count u32
//! 0x54: triangle records (triangle_count * 50 bytes)
//!
//! Record:
//!   +0  normal    [f32; 3]
//!   +12 vertex0   [f32; 3]
//!   +24 vertex1   [f32; 3]
//!   +36 vertex2   [f32; 3]
//!   +48 attribute_byte_count u16 (written as 0, ignored on read)
//! ```

mod reader;
mod writer;

pub use reader::parse_binary;
pub use writer::BinaryWriter;
