// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Endpoint, Error, TextStyle};

/// A validated byte range into a UTF-8 string.
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on UTF-8 codepoint boundaries
///
/// `TextRange` does not record which text it was validated against. Only reuse
/// it with the text it was created for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns a validated `TextRange` for the provided text.
    #[inline]
    pub fn new(text: &str, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Whether `index` falls inside this range.
    #[must_use]
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    let text_len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(range.start, range.end, text_len));
    }
    if range.start > text_len || range.end > text_len {
        return Err(Error::invalid_bounds(range.start, range.end, text_len));
    }
    if !text.is_char_boundary(range.start) {
        return Err(Error::not_on_char_boundary(
            text,
            range.start,
            range.end,
            Endpoint::Start,
            range.start,
        ));
    }
    if !text.is_char_boundary(range.end) {
        return Err(Error::not_on_char_boundary(
            text,
            range.start,
            range.end,
            Endpoint::End,
            range.end,
        ));
    }
    Ok(())
}

/// Text with a default style and styles applied to ranges within it.
///
/// Where spans overlap, the span applied last wins.
#[derive(Clone, Debug)]
pub struct StyledText {
    text: Arc<str>,
    default_style: TextStyle,
    spans: Vec<(TextRange, TextStyle)>,
}

impl StyledText {
    /// Create styled text where every character uses `default_style`.
    pub fn new(text: impl Into<Arc<str>>, default_style: TextStyle) -> Self {
        Self {
            text: text.into(),
            default_style,
            spans: Vec::new(),
        }
    }

    /// Borrow the underlying text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The style used wherever no span applies.
    pub fn default_style(&self) -> &TextStyle {
        &self.default_style
    }

    /// Apply `style` to a `range` within the text.
    pub fn apply_style(&mut self, range: Range<usize>, style: TextStyle) -> Result<(), Error> {
        let range = TextRange::new(&self.text, range)?;
        self.spans.push((range, style));
        Ok(())
    }

    /// Builder-style variant of [`StyledText::apply_style`].
    pub fn with_style(mut self, range: Range<usize>, style: TextStyle) -> Result<Self, Error> {
        self.apply_style(range, style)?;
        Ok(self)
    }

    /// Iterate over the applied spans in the order they were applied.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (TextRange, &TextStyle)> {
        self.spans.iter().map(|(range, style)| (*range, style))
    }

    /// The span style in effect at byte `index`, if any span covers it.
    pub fn span_style_at(&self, index: usize) -> Option<&TextStyle> {
        self.spans
            .iter()
            .rev()
            .find(|(range, _)| range.contains(index))
            .map(|(_, style)| style)
    }

    /// The style in effect at byte `index`.
    pub fn style_at(&self, index: usize) -> &TextStyle {
        self.span_style_at(index).unwrap_or(&self.default_style)
    }
}
