// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Error raised while building styled text or encoding an image.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the context that applies to it:
/// the attempted byte range and text length for range errors, the enclosing
/// UTF-8 character span for boundary errors, and the rejected value for style
/// errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
    boundary: Option<BoundaryInfo>,
    font_size: Option<f32>,
    message: Option<String>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the range provided by the caller.
    ///
    /// `None` unless [`Error::is_range_error`].
    pub fn start(&self) -> Option<usize> {
        self.is_range_error().then_some(self.start)
    }

    /// The end byte index of the range provided by the caller.
    ///
    /// `None` unless [`Error::is_range_error`].
    pub fn end(&self) -> Option<usize> {
        self.is_range_error().then_some(self.end)
    }

    /// The length in bytes of the text at the time of the error.
    ///
    /// `None` unless [`Error::is_range_error`].
    pub fn len(&self) -> Option<usize> {
        self.is_range_error().then_some(self.len)
    }

    /// Returns `true` if the error was raised while validating a byte range.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidBounds | ErrorKind::InvalidRange | ErrorKind::NotOnCharBoundary
        )
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    /// The rejected font size for [`ErrorKind::InvalidFontSize`].
    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    fn range_error(kind: ErrorKind, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind,
            start,
            end,
            len,
            boundary: None,
            font_size: None,
            message: None,
        }
    }

    // Errors without a range; the range fields stay zeroed and are not reported.
    fn style_error(kind: ErrorKind) -> Self {
        Self::range_error(kind, 0, 0, 0)
    }

    pub(crate) fn invalid_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::range_error(ErrorKind::InvalidBounds, start, end, len)
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::range_error(ErrorKind::InvalidRange, start, end, len)
    }

    pub(crate) fn not_on_char_boundary(
        text: &str,
        start: usize,
        end: usize,
        which: Endpoint,
        index: usize,
    ) -> Self {
        let (cs, ce) = enclosing_char_span(text, index).unwrap_or((index, index));
        Self {
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start: cs,
                char_end: ce,
            }),
            ..Self::range_error(ErrorKind::NotOnCharBoundary, start, end, text.len())
        }
    }

    pub(crate) fn invalid_font_size(size: f32) -> Self {
        Self {
            font_size: Some(size),
            ..Self::style_error(ErrorKind::InvalidFontSize)
        }
    }

    pub(crate) fn empty_font_family() -> Self {
        Self::style_error(ErrorKind::EmptyFontFamily)
    }

    #[cfg(feature = "png")]
    pub(crate) fn encode(message: String) -> Self {
        Self {
            message: Some(message),
            ..Self::style_error(ErrorKind::Encode)
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::NotOnCharBoundary => {
                if let Some(b) = self.boundary {
                    let which = match b.which {
                        Endpoint::Start => "start",
                        Endpoint::End => "end",
                    };
                    write!(
                        f,
                        "range {}..{}: {} index {} not on UTF-8 boundary (char {}..{})",
                        self.start, self.end, which, b.index, b.char_start, b.char_end
                    )
                } else {
                    write!(
                        f,
                        "range {}..{} not on UTF-8 boundary",
                        self.start, self.end
                    )
                }
            }
            ErrorKind::InvalidFontSize => match self.font_size {
                Some(size) => write!(f, "font size {size} must be finite and positive"),
                None => write!(f, "font size must be finite and positive"),
            },
            ErrorKind::EmptyFontFamily => write!(f, "font family name is empty"),
            ErrorKind::Encode => match &self.message {
                Some(message) => write!(f, "failed to encode image: {message}"),
                None => write!(f, "failed to encode image"),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Provided range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,

    /// A text style was given a font size that is zero, negative or not finite.
    InvalidFontSize,

    /// A text style was given an empty font family name.
    EmptyFontFamily,

    /// An image could not be encoded.
    Encode,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

/// Details about an offending index that was not on a UTF-8 character boundary.
///
/// Returned by [`Error::boundary`] when the error kind is
/// [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (`start` or `end`) was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing UTF-8 codepoint.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub char_end: usize,
}

fn enclosing_char_span(text: &str, index: usize) -> Option<(usize, usize)> {
    if index > text.len() {
        return None;
    }
    if text.is_char_boundary(index) {
        return Some((index, index));
    }
    // Index 0 is always a boundary, so this finds one within 3 bytes.
    let start = (0..index).rev().find(|&i| text.is_char_boundary(i))?;
    let end = (index + 1..=text.len())
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(text.len());
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{BoundaryInfo, Endpoint, Error, ErrorKind, enclosing_char_span};

    #[test]
    fn char_span_inside_multibyte_char() {
        // "é" occupies bytes 1..3.
        assert_eq!(enclosing_char_span("aé", 2), Some((1, 3)));
        assert_eq!(enclosing_char_span("aé", 1), Some((1, 1)));
        assert_eq!(enclosing_char_span("aé", 4), None);
    }

    #[test]
    fn boundary_error_reports_enclosing_char() {
        let err = Error::not_on_char_boundary("aé", 0, 2, Endpoint::End, 2);
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        assert!(err.is_range_error());
        assert_eq!((err.start(), err.end(), err.len()), (Some(0), Some(2), Some(3)));
        assert_eq!(
            err.boundary(),
            Some(BoundaryInfo {
                which: Endpoint::End,
                index: 2,
                char_start: 1,
                char_end: 3,
            })
        );
        assert_eq!(
            err.to_string(),
            "range 0..2: end index 2 not on UTF-8 boundary (char 1..3)"
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::invalid_bounds(2, 9, 4).to_string(),
            "range 2..9 out of bounds for len 4"
        );
        assert_eq!(
            Error::invalid_range(3, 1, 4).to_string(),
            "invalid range 3..1: start > end"
        );
        let err = Error::invalid_font_size(-1.0);
        assert_eq!(err.font_size(), Some(-1.0));
        assert!(!err.is_range_error());
        assert_eq!((err.start(), err.end(), err.len()), (None, None, None));
        let err = Error::empty_font_family();
        assert_eq!((err.start(), err.end(), err.len()), (None, None, None));
        assert_eq!(err.to_string(), "font size -1 must be finite and positive");
    }
}
