//! Line cursor over ASCII STL text

use std::borrow::Cow;

/// Position in the source text
///
/// Plain value: parse functions take a cursor and hand back the advanced one,
/// so backtracking is just keeping the old copy.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineCursor<'a> {
    src: &'a str,
    offset: usize,
    /// 1-based number of the next raw line
    line: usize,
}

/// A non-blank, normalized source line
#[derive(Debug)]
pub(crate) struct Line<'a> {
    pub number: usize,
    pub text: Cow<'a, str>,
}

impl<'a> LineCursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            offset: 0,
            line: 1,
        }
    }

    /// Number of the line the cursor will read next
    ///
    /// At end of input this is one past the last line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next non-blank line
    ///
    /// Blank lines are skipped but still counted. Returns `None` with the cursor
    /// parked at the end of input when no line is left.
    pub fn next_line(mut self) -> (Option<Line<'a>>, Self) {
        while let Some(raw) = self.next_raw() {
            let text = normalize(raw);
            if !text.is_empty() {
                let number = self.line - 1;
                return (Some(Line { number, text }), self);
            }
        }
        (None, self)
    }

    /// Split off one raw line; `\n`, `\r\n` and a lone `\r` all end a line
    fn next_raw(&mut self) -> Option<&'a str> {
        let src = self.src;
        let rest = &src[self.offset..];
        if rest.is_empty() {
            return None;
        }
        let (raw, consumed) = match rest.find(['\n', '\r']) {
            Some(end) if rest[end..].starts_with("\r\n") => (&rest[..end], end + 2),
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.offset += consumed;
        self.line += 1;
        Some(raw)
    }
}

/// Tabs become spaces, space runs collapse to one, ends are trimmed
///
/// Borrows when the line is already normal.
pub(crate) fn normalize(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim();
    if !trimmed.contains('\t') && !trimmed.contains("  ") {
        return Cow::Borrowed(trimmed);
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut prev_space = false;
    for c in trimmed.chars() {
        let c = if c == '\t' { ' ' } else { c };
        if c == ' ' && prev_space {
            continue;
        }
        prev_space = c == ' ';
        out.push(c);
    }
    Cow::Owned(out)
}
