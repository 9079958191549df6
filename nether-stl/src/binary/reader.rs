//! Binary STL reader

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Result, StlError};
use crate::types::{Point, Triangle};
use crate::{BINARY_PRELUDE_SIZE, HEADER_SIZE, TRIANGLE_RECORD_SIZE};

/// Parse a complete binary STL buffer
///
/// The declared triangle count is checked against the body length in 64-bit
/// arithmetic before any triangle storage is reserved, so a corrupt count
/// fails with [`StlError::Truncated`] instead of allocating.
///
/// Bytes after the last declared record are ignored.
pub fn parse_binary(data: &[u8]) -> Result<Vec<Triangle>> {
    if data.len() < BINARY_PRELUDE_SIZE {
        return Err(StlError::TooShort {
            len: data.len(),
            min: BINARY_PRELUDE_SIZE,
        });
    }

    let count = LittleEndian::read_u32(&data[HEADER_SIZE..BINARY_PRELUDE_SIZE]);
    let body = &data[BINARY_PRELUDE_SIZE..];

    let required = u64::from(count) * TRIANGLE_RECORD_SIZE as u64;
    let available = body.len() as u64;
    if available < required {
        return Err(StlError::Truncated {
            required,
            available,
        });
    }
    if available > required {
        tracing::debug!(
            "Ignoring {} trailing bytes after {} binary STL records",
            available - required,
            count
        );
    }

    let mut triangles = Vec::with_capacity(count as usize);
    triangles.extend(
        body.chunks_exact(TRIANGLE_RECORD_SIZE)
            .take(count as usize)
            .map(read_record),
    );

    tracing::trace!("Parsed {} binary STL triangles", triangles.len());
    Ok(triangles)
}

/// Decode one 50-byte record; the trailing attribute field is skipped
fn read_record(record: &[u8]) -> Triangle {
    Triangle {
        normal: read_point(&record[0..12]),
        vertices: [
            read_point(&record[12..24]),
            read_point(&record[24..36]),
            read_point(&record[36..48]),
        ],
    }
}

fn read_point(bytes: &[u8]) -> Point {
    let mut xyz = [0f32; 3];
    LittleEndian::read_f32_into(bytes, &mut xyz);
    Point::from_array(xyz)
}
