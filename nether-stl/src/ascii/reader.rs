//! ASCII STL reader
//!
//! Recursive descent over [`LineCursor`] values. Every rule takes the cursor it
//! starts at and returns the cursor after what it consumed; an alternative that
//! does not match leaves the caller's cursor untouched.

use super::cursor::{Line, LineCursor};
use crate::error::{Result, StlError};
use crate::types::{Point, Triangle};

const SOLID: &str = "solid";
const END_SOLID: &str = "endsolid";
const FACET_NORMAL: &str = "facet normal";
const OUTER_LOOP: &str = "outer loop";
const VERTEX: &str = "vertex";
const END_LOOP: &str = "endloop";
const END_FACET: &str = "endfacet";

type Parsed<'a, T> = Result<(T, LineCursor<'a>)>;

/// A decoded ASCII solid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AsciiSolid {
    /// Text after `solid`, trimmed (may be empty)
    pub name: String,
    /// Text after `endsolid`; `None` when the file ends without `endsolid`
    pub end_name: Option<String>,
    pub triangles: Vec<Triangle>,
}

impl AsciiSolid {
    /// Whether `endsolid` repeats the `solid` name exactly
    pub fn names_match(&self) -> bool {
        self.end_name.as_deref() == Some(self.name.as_str())
    }
}

/// Parse a complete ASCII STL buffer
///
/// Invalid UTF-8 is replaced rather than rejected; it can only end up in solid
/// names or fail number parsing.
pub fn parse_ascii(data: &[u8]) -> Result<AsciiSolid> {
    let text = String::from_utf8_lossy(data);
    AsciiReader::new(&text).read_solid()
}

/// Reader for the ASCII STL grammar
pub struct AsciiReader<'a> {
    start: LineCursor<'a>,
}

impl<'a> AsciiReader<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            start: LineCursor::new(src),
        }
    }

    /// `solid [name] facet* [endsolid [name]]`
    pub fn read_solid(self) -> Result<AsciiSolid> {
        let (header, mut cursor) = next_or_eof(self.start)?;
        let Some(name) = header.text.strip_prefix(SOLID) else {
            return Err(violation(&header, &[SOLID]));
        };
        let name = name.trim().to_string();

        let mut triangles = Vec::new();
        loop {
            if let Some((triangle, next)) = facet(cursor)? {
                triangles.push(triangle);
                cursor = next;
                continue;
            }
            if let Some((end_name, next)) = end_solid(cursor) {
                if end_name != name {
                    tracing::debug!("solid name '{}' closed by endsolid '{}'", name, end_name);
                }
                if next.next_line().0.is_some() {
                    tracing::debug!("Ignoring content after endsolid (line {})", next.line());
                }
                return Ok(AsciiSolid {
                    name,
                    end_name: Some(end_name),
                    triangles,
                });
            }
            return match cursor.next_line().0 {
                Some(line) => Err(violation(&line, &[FACET_NORMAL, END_SOLID])),
                None => {
                    tracing::debug!(
                        "ASCII solid '{}' ends without endsolid after {} facets",
                        name,
                        triangles.len()
                    );
                    Ok(AsciiSolid {
                        name,
                        end_name: None,
                        triangles,
                    })
                }
            };
        }
    }
}

/// One facet block, or `None` if the next line does not open one
fn facet(cursor: LineCursor<'_>) -> Result<Option<(Triangle, LineCursor<'_>)>> {
    let (line, after_header) = cursor.next_line();
    let Some(header) = line else {
        return Ok(None);
    };
    let Some(fields) = strip_keyword(&header.text, FACET_NORMAL) else {
        return Ok(None);
    };
    let normal = triple(&header, FACET_NORMAL, fields)?;

    let cursor = exact(after_header, OUTER_LOOP)?;
    let (v0, cursor) = vertex(cursor)?;
    let (v1, cursor) = vertex(cursor)?;
    let (v2, cursor) = vertex(cursor)?;
    let cursor = exact(cursor, END_LOOP)?;
    // trailing junk after endfacet shows up in real exports
    let (_, cursor) = prefixed(cursor, END_FACET)?;

    Ok(Some((Triangle::new(normal, [v0, v1, v2]), cursor)))
}

/// `endsolid [name]`, or `None` if the next line is something else
fn end_solid(cursor: LineCursor<'_>) -> Option<(String, LineCursor<'_>)> {
    let (line, next) = cursor.next_line();
    let name = line?.text.strip_prefix(END_SOLID)?.trim().to_string();
    Some((name, next))
}

fn vertex(cursor: LineCursor<'_>) -> Parsed<'_, Point> {
    let (line, next) = next_or_eof(cursor)?;
    let Some(fields) = strip_keyword(&line.text, VERTEX) else {
        return Err(violation(&line, &[VERTEX]));
    };
    Ok((triple(&line, VERTEX, fields)?, next))
}

/// A line that is exactly `keyword`
fn exact<'a>(cursor: LineCursor<'a>, keyword: &'static str) -> Result<LineCursor<'a>> {
    let (line, next) = next_or_eof(cursor)?;
    if line.text != keyword {
        return Err(violation(&line, &[keyword]));
    }
    Ok(next)
}

/// A line starting with `keyword`, anything may follow
fn prefixed<'a>(cursor: LineCursor<'a>, keyword: &'static str) -> Parsed<'a, Line<'a>> {
    let (line, next) = next_or_eof(cursor)?;
    if !line.text.starts_with(keyword) {
        return Err(violation(&line, &[keyword]));
    }
    Ok((line, next))
}

fn next_or_eof(cursor: LineCursor<'_>) -> Parsed<'_, Line<'_>> {
    match cursor.next_line() {
        (Some(line), next) => Ok((line, next)),
        (None, end) => Err(StlError::UnexpectedEnd { line: end.line() }),
    }
}

/// Text after `keyword` when the line starts with it as a whole word
fn strip_keyword<'t>(text: &'t str, keyword: &str) -> Option<&'t str> {
    let rest = text.strip_prefix(keyword)?;
    if rest.is_empty() || rest.starts_with(' ') {
        Some(rest)
    } else {
        None
    }
}

/// Exactly three numbers
fn triple(line: &Line<'_>, keyword: &'static str, fields: &str) -> Result<Point> {
    let mut tokens = fields.split_whitespace();
    let (Some(x), Some(y), Some(z), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(StlError::FieldCount {
            line: line.number,
            keyword,
            text: line.text.to_string(),
        });
    };
    Ok(Point::new(
        number(line.number, x)?,
        number(line.number, y)?,
        number(line.number, z)?,
    ))
}

/// Parse a float, retrying once with the first comma read as a decimal point
///
/// The error always reports the token as written.
fn number(line: usize, token: &str) -> Result<f32> {
    match token.parse::<f32>() {
        Ok(value) => Ok(value),
        Err(source) => token
            .replacen(',', ".", 1)
            .parse::<f32>()
            .map_err(|_| StlError::NumberFormat {
                line,
                text: token.to_string(),
                source,
            }),
    }
}

fn violation(line: &Line<'_>, expected: &[&'static str]) -> StlError {
    StlError::GrammarViolation {
        line: line.number,
        expected: expected.to_vec(),
        actual: line.text.to_string(),
    }
}
