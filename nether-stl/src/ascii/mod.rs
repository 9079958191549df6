//! ASCII STL encoding
//!
//! ```text
//! solid [name]
//!   facet normal nx ny nz
//!     outer loop
//!       vertex x y z
//!       vertex x y z
//!       vertex x y z
//!     endloop
//!   endfacet
//! endsolid [name]
//! ```
//!
//! - `cursor` - Line splitting and whitespace normalization
//! - `reader` - Recursive descent parser
//! - `writer` - Fixed-precision writer
//! - `tests` - Regression fixtures from real-world files

mod cursor;
mod reader;
mod writer;


pub use reader::{AsciiReader, AsciiSolid, parse_ascii};
pub use writer::AsciiWriter;
