//! Physical encoding detection

use crate::SNIFF_LEN;

/// The two physical STL encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlFormat {
    Ascii,
    Binary,
}

impl StlFormat {
    pub fn name(self) -> &'static str {
        match self {
            StlFormat::Ascii => "ascii",
            StlFormat::Binary => "binary",
        }
    }
}

impl std::fmt::Display for StlFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify `data` as ASCII or binary STL
///
/// ASCII files start with `solid` (after optional whitespace) and contain no
/// control bytes besides `\t`, `\n` and `\r`. Binary headers are free-form, so
/// some binary files also begin with `solid`; the control byte scan catches
/// those. Anything shorter than [`SNIFF_LEN`] is treated as binary and left to
/// the binary reader's length check.
pub fn detect_format(data: &[u8]) -> StlFormat {
    if data.len() < SNIFF_LEN {
        return StlFormat::Binary;
    }
    if !data[..SNIFF_LEN].trim_ascii().starts_with(b"solid") {
        return StlFormat::Binary;
    }
    let has_control = data
        .iter()
        .any(|&b| b < 32 && !matches!(b, b'\n' | b'\r' | b'\t'));
    if has_control {
        StlFormat::Binary
    } else {
        StlFormat::Ascii
    }
}
