//! Nether-STL: STL (stereolithography) mesh codec for Nethercore
//!
//! This crate reads and writes triangle meshes stored as STL files. STL comes
//! in two unrelated physical encodings that describe the same model, an
//! ordered list of triangles with one normal and three vertices each:
//!
//! - **ASCII**: a line-oriented `solid` / `facet` / `vertex` grammar
//! - **Binary**: an 80-byte header, a triangle count and fixed 50-byte records
//!
//! # Key Features
//!
//! - **Format detection**: the encoding is sniffed from the bytes, not the file name
//! - **Lenient ASCII**: tabs, repeated spaces, comma decimals, blank lines,
//!   missing or mismatched solid names are all accepted
//! - **Strict binary**: the declared triangle count is checked against the
//!   available bytes before anything is allocated
//! - **Stable output**: both writers are byte-deterministic
//!
//! # Usage
//!
//! ```ignore
//! use nether_stl::{read_stl, write_binary};
//!
//! let file = std::fs::File::open("part.stl")?;
//! let triangles = read_stl(file)?;
//! println!("Triangles: {}", triangles.len());
//!
//! let mut out = std::fs::File::create("part.bin.stl")?;
//! write_binary(&mut out, &triangles)?;
//! ```

mod ascii;
mod binary;
mod codec;
mod detect;
mod error;
mod types;

pub use ascii::{AsciiReader, AsciiSolid, AsciiWriter, parse_ascii};
pub use binary::{BinaryWriter, parse_binary};
pub use codec::{ReadOptions, decode_stl, decode_stl_with, read_stl, write_ascii, write_binary};
pub use detect::{StlFormat, detect_format};
pub use error::{Result, StlError};
pub use types::{BoundingBox, Point, Triangle, bounding_box};

// =============================================================================
// Binary Layout
// =============================================================================

/// Size of the free-form binary header
pub const HEADER_SIZE: usize = 80;

/// Size of the header plus the u32 triangle count
pub const BINARY_PRELUDE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one binary triangle record: 12 floats + u16 attribute byte count
pub const TRIANGLE_RECORD_SIZE: usize = 4 * 3 * 4 + 2;

/// Number of triangles serialized per write call by [`BinaryWriter`]
pub const WRITE_CHUNK_TRIANGLES: usize = 512;

// =============================================================================
// ASCII Layout
// =============================================================================

/// Number of leading bytes inspected for the `solid` keyword
pub const SNIFF_LEN: usize = 14;

/// Solid name emitted by [`AsciiWriter`]
pub const ASCII_SOLID_NAME: &str = "object";
