//! Binary STL writer

use std::io::{self, Write};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::error::{Result, StlError};
use crate::types::Triangle;
use crate::{HEADER_SIZE, TRIANGLE_RECORD_SIZE, WRITE_CHUNK_TRIANGLES};

/// Writer for binary STL
///
/// Records are serialized [`WRITE_CHUNK_TRIANGLES`] at a time into one reused
/// buffer, so the sink sees one `write_all` per chunk.
pub struct BinaryWriter<W: Write> {
    writer: W,
    chunk: Vec<u8>,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a new binary writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk: Vec::with_capacity(WRITE_CHUNK_TRIANGLES * TRIANGLE_RECORD_SIZE),
        }
    }

    /// Write a complete mesh: zero header, count, then every record
    ///
    /// Output is exactly `84 + 50 * triangles.len()` bytes.
    pub fn write_mesh(&mut self, triangles: &[Triangle]) -> Result<()> {
        let count = u32::try_from(triangles.len())
            .map_err(|_| StlError::TooManyTriangles(triangles.len()))?;

        self.write_header(count)?;

        for chunk in triangles.chunks(WRITE_CHUNK_TRIANGLES) {
            self.chunk.clear();
            for triangle in chunk {
                self.chunk.extend_from_slice(&encode_record(triangle));
            }
            self.writer.write_all(&self.chunk)?;
        }

        self.writer.flush()?;
        tracing::trace!("Wrote {} binary STL triangles", count);
        Ok(())
    }

    /// Write the 80-byte zero header and the triangle count
    fn write_header(&mut self, count: u32) -> io::Result<()> {
        self.writer.write_all(&[0u8; HEADER_SIZE])?;
        self.writer.write_u32::<LittleEndian>(count)
    }

    /// Consume the writer and return the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn encode_record(triangle: &Triangle) -> [u8; TRIANGLE_RECORD_SIZE] {
    let mut record = [0u8; TRIANGLE_RECORD_SIZE];
    let points = [
        triangle.normal,
        triangle.vertices[0],
        triangle.vertices[1],
        triangle.vertices[2],
    ];
    for (dst, point) in record.chunks_exact_mut(12).zip(points) {
        LittleEndian::write_f32_into(&point.to_array(), dst);
    }
    // attribute byte count stays 0
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;
    use crate::BINARY_PRELUDE_SIZE;

    fn sample(i: usize) -> Triangle {
        let f = i as f32;
        Triangle::new(
            Point::new(0.0, 0.0, 1.0),
            [
                Point::new(f, 0.0, 0.0),
                Point::new(f, 1.0, 0.0),
                Point::new(f, 0.0, 1.0),
            ],
        )
    }

    /// Sink that records the size of every write call
    #[derive(Default)]
    struct CountingSink {
        data: Vec<u8>,
        writes: Vec<usize>,
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes.push(buf.len());
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Sink that fails every write
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_empty_mesh() {
        let mut buffer = Vec::new();
        BinaryWriter::new(&mut buffer).write_mesh(&[]).unwrap();

        assert_eq!(buffer.len(), BINARY_PRELUDE_SIZE);
        assert!(buffer[..HEADER_SIZE].iter().all(|&b| b == 0));
        assert_eq!(&buffer[80..84], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_write_layout() {
        let triangle = Triangle::new(
            Point::new(0.0, 0.0, 1.0),
            [
                Point::new(1.0, 2.0, 3.0),
                Point::new(4.0, 5.0, 6.0),
                Point::new(7.0, 8.0, 9.0),
            ],
        );
        let mut buffer = Vec::new();
        BinaryWriter::new(&mut buffer).write_mesh(&[triangle]).unwrap();

        assert_eq!(buffer.len(), 84 + 50);
        assert_eq!(&buffer[80..84], &1u32.to_le_bytes());
        assert_eq!(&buffer[84 + 8..84 + 12], &1.0f32.to_le_bytes());
        assert_eq!(&buffer[84 + 12..84 + 16], &1.0f32.to_le_bytes());
        assert_eq!(&buffer[84 + 44..84 + 48], &9.0f32.to_le_bytes());
        assert_eq!(&buffer[84 + 48..84 + 50], &[0, 0]);
    }

    #[test]
    fn test_chunked_writes() {
        let triangles: Vec<_> = (0..WRITE_CHUNK_TRIANGLES * 2 + 3).map(sample).collect();
        let mut writer = BinaryWriter::new(CountingSink::default());
        writer.write_mesh(&triangles).unwrap();
        let sink = writer.into_inner();

        // header, count, then one write per chunk
        assert_eq!(
            sink.writes,
            vec![
                HEADER_SIZE,
                4,
                WRITE_CHUNK_TRIANGLES * TRIANGLE_RECORD_SIZE,
                WRITE_CHUNK_TRIANGLES * TRIANGLE_RECORD_SIZE,
                3 * TRIANGLE_RECORD_SIZE,
            ]
        );
        assert_eq!(sink.data.len(), 84 + 50 * triangles.len());
    }

    #[test]
    fn test_output_is_deterministic() {
        let triangles: Vec<_> = (0..700).map(sample).collect();
        let mut first = Vec::new();
        let mut second = Vec::new();
        BinaryWriter::new(&mut first).write_mesh(&triangles).unwrap();
        BinaryWriter::new(&mut second).write_mesh(&triangles).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_io_error_propagates() {
        let err = BinaryWriter::new(BrokenSink).write_mesh(&[sample(0)]).unwrap_err();
        match err {
            StlError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
