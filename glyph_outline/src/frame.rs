// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The laid-out form of styled text: lines, runs and positioned glyphs.

use alloc::vec::Vec;
use core::ops::Range;

use linebender_resource_handle::FontData;

use crate::StyledText;
use crate::kurbo::Size;
use crate::peniko::Color;

/// Something that can break styled text into lines of positioned glyphs.
pub trait TextLayouter {
    /// Lay out `text` into a frame of the given `region`.
    ///
    /// A non-finite region width disables line wrapping and a non-finite
    /// region height keeps every line. Lines are returned top line first;
    /// lines that do not fit vertically in the region are left out.
    fn layout(&mut self, text: &StyledText, region: Size) -> TextFrame;
}

/// Vertical metrics of a font at a particular size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyphs, as a
    /// positive value.
    pub descent: f32,
    /// Recommended additional space between lines.
    pub leading: f32,
}

impl FontMetrics {
    /// Height of one line set in this font.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }

    /// Offset of the baseline from the bottom of a line: line height minus ascent.
    pub fn baseline_offset(&self) -> f32 {
        self.line_height() - self.ascent
    }
}

/// A sized font instance shared by every glyph of a run.
#[derive(Clone, Debug)]
pub struct RunFont {
    /// The font file and its index within a collection.
    pub data: FontData,
    /// Font size in layout units per em.
    pub size: f32,
    /// Normalized variation coordinates, in F2DOT14 bits.
    pub normalized_coords: Vec<i16>,
    /// Vertical metrics at `size`.
    pub metrics: FontMetrics,
}

/// A glyph and its pen position relative to the line origin.
///
/// The y axis points up, as in font space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PositionedGlyph {
    /// The font-specific glyph identifier. This is *not* a Unicode code point.
    pub id: u32,
    /// Horizontal pen position.
    pub x: f32,
    /// Vertical pen position.
    pub y: f32,
}

/// A contiguous sequence of glyphs sharing one font and color.
#[derive(Clone, Debug)]
pub struct GlyphRun {
    /// The font of every glyph in the run.
    pub font: RunFont,
    /// The fill color of the run.
    pub color: Color,
    /// The glyphs in visual order.
    pub glyphs: Vec<PositionedGlyph>,
}

/// One line of a [`TextFrame`].
#[derive(Clone, Debug)]
pub struct FrameLine {
    /// The byte range of the source text covered by this line.
    pub text_range: Range<usize>,
    /// Typographic width of the line, excluding trailing whitespace.
    pub width: f32,
    /// Distance from the top of the frame to the baseline of this line.
    pub baseline: f32,
    /// The glyph runs of the line in visual order.
    pub runs: Vec<GlyphRun>,
}

/// Styled text laid out inside a region.
#[derive(Clone, Debug, Default)]
pub struct TextFrame {
    region: Size,
    lines: Vec<FrameLine>,
}

impl TextFrame {
    /// Creates a frame from lines ordered top line first.
    pub fn new(region: Size, lines: Vec<FrameLine>) -> Self {
        Self { region, lines }
    }

    /// The region the text was laid out in.
    pub fn region(&self) -> Size {
        self.region
    }

    /// The lines of the frame, top line first.
    pub fn lines(&self) -> &[FrameLine] {
        &self.lines
    }

    /// Returns `true` if the frame contains no glyph runs.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.runs.is_empty())
    }

    /// The first glyph run of the frame.
    pub fn first_run(&self) -> Option<&GlyphRun> {
        self.lines.iter().flat_map(|line| line.runs.iter()).next()
    }

    /// Baseline offset of the first run's font, or 0 if there are no runs.
    pub fn baseline(&self) -> f32 {
        self.first_run()
            .map_or(0.0, |run| run.font.metrics.baseline_offset())
    }
}
