//! Format-agnostic entry points

use std::io::{Read, Write};

use crate::ascii::{AsciiWriter, parse_ascii};
use crate::binary::{BinaryWriter, parse_binary};
use crate::detect::{StlFormat, detect_format};
use crate::error::{Result, StlError};
use crate::types::Triangle;

/// Decoder settings
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Reject ASCII files whose `endsolid` name differs from the `solid` name
    ///
    /// Off by default: plenty of exporters write `endsolid` with no name or a
    /// different one.
    pub strict_solid_names: bool,
}

/// Read the whole source and decode it
///
/// The input is fully buffered before parsing starts.
pub fn read_stl<R: Read>(mut reader: R) -> Result<Vec<Triangle>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode_stl(&data)
}

/// Decode an in-memory STL file of either encoding
pub fn decode_stl(data: &[u8]) -> Result<Vec<Triangle>> {
    decode_stl_with(data, &ReadOptions::default())
}

/// Decode an in-memory STL file of either encoding with explicit options
pub fn decode_stl_with(data: &[u8], options: &ReadOptions) -> Result<Vec<Triangle>> {
    let format = detect_format(data);
    tracing::debug!("Decoding {} bytes as {} STL", data.len(), format);

    match format {
        StlFormat::Binary => parse_binary(data),
        StlFormat::Ascii => {
            let solid = parse_ascii(data)?;
            if options.strict_solid_names && !solid.names_match() {
                return Err(StlError::SolidNameMismatch {
                    start: solid.name,
                    end: solid.end_name.unwrap_or_default(),
                });
            }
            Ok(solid.triangles)
        }
    }
}

/// Encode `triangles` as ASCII STL
pub fn write_ascii<W: Write>(writer: W, triangles: &[Triangle]) -> Result<()> {
    AsciiWriter::new(writer).write_mesh(triangles)
}

/// Encode `triangles` as binary STL
pub fn write_binary<W: Write>(writer: W, triangles: &[Triangle]) -> Result<()> {
    BinaryWriter::new(writer).write_mesh(triangles)
}
