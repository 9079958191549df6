//! ASCII STL writer

use std::io::{self, Write};

use crate::error::Result;
use crate::types::{Point, Triangle};
use crate::{ASCII_SOLID_NAME, WRITE_CHUNK_TRIANGLES};

/// Typical text size of one facet, used to presize the chunk buffer
const FACET_TEXT_HINT: usize = 256;

/// Writer for ASCII STL
///
/// Always names the solid [`ASCII_SOLID_NAME`] and prints every component with
/// six fractional digits, so identical meshes give identical text.
///
/// Facets are formatted [`WRITE_CHUNK_TRIANGLES`] at a time into one reused
/// buffer, so the sink sees one `write_all` per chunk. Nothing is buffered
/// between calls, so a failed write is never retried on drop.
pub struct AsciiWriter<W: Write> {
    writer: W,
    chunk: Vec<u8>,
}

impl<W: Write> AsciiWriter<W> {
    /// Create a new ASCII writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk: Vec::with_capacity(WRITE_CHUNK_TRIANGLES * FACET_TEXT_HINT),
        }
    }

    /// Write a complete solid and flush the sink
    pub fn write_mesh(&mut self, triangles: &[Triangle]) -> Result<()> {
        self.chunk.clear();
        writeln!(self.chunk, "solid {ASCII_SOLID_NAME}")?;

        for (i, triangle) in triangles.iter().enumerate() {
            if i > 0 && i % WRITE_CHUNK_TRIANGLES == 0 {
                self.writer.write_all(&self.chunk)?;
                self.chunk.clear();
            }
            write_facet(&mut self.chunk, triangle)?;
        }

        writeln!(self.chunk, "endsolid {ASCII_SOLID_NAME}")?;
        self.writer.write_all(&self.chunk)?;
        self.writer.flush()?;

        tracing::trace!("Wrote {} ASCII STL facets", triangles.len());
        Ok(())
    }

    /// Consume the writer and return the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn write_facet(out: &mut Vec<u8>, triangle: &Triangle) -> io::Result<()> {
    write_point(out, "facet normal", triangle.normal)?;
    writeln!(out, "  outer loop")?;
    for &vertex in &triangle.vertices {
        write_point(out, "    vertex", vertex)?;
    }
    writeln!(out, "  endloop")?;
    writeln!(out, "endfacet")
}

fn write_point(out: &mut Vec<u8>, keyword: &str, p: Point) -> io::Result<()> {
    writeln!(out, "{keyword} {:.6} {:.6} {:.6}", p.x, p.y, p.z)
}
