// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converting laid-out text into a single vector path.

use log::trace;

use crate::kurbo::{Affine, BezPath, Rect, Size, Vec2};
use crate::{FrameLine, OutlineSource, StyledText, TextFrame, TextLayouter};

/// The region text is laid out in for `bounds`.
///
/// It is twice as tall as the bounds so that multi-line text that cannot be
/// measured up front is not clipped.
pub fn layout_region(bounds: Rect) -> Size {
    Size::new(bounds.width(), bounds.height() * 2.0)
}

/// Horizontal offset that aligns `line` within `flush_width`.
///
/// The alignment comes from the style at the first byte of the line. Lines
/// wider than `flush_width` and lines in an unbounded region are not shifted.
pub fn flush_offset(text: &StyledText, line: &FrameLine, flush_width: f64) -> f64 {
    let unused = (flush_width - f64::from(line.width)).max(0.0);
    if !unused.is_finite() {
        return 0.0;
    }
    let alignment = text.style_at(line.text_range.start).alignment();
    unused * alignment.flush_factor()
}

/// Lay out `text` within `bounds` and return the outline of every glyph.
///
/// The path is in font space (y up) with the bottom line of the text at
/// `y = 0`. `scale` is the scale the caller expects to draw at; it does not
/// change the path, which stays in layout units. Glyphs the font has no
/// outline for are skipped. Empty text produces an empty path.
pub fn extract_path(
    text: &StyledText,
    bounds: Rect,
    scale: f64,
    layouter: &mut impl TextLayouter,
    outlines: &mut impl OutlineSource,
) -> BezPath {
    trace!(
        "extracting path for {} bytes in {bounds:?}, expected scale {scale}",
        text.len()
    );
    let frame = layouter.layout(text, layout_region(bounds));
    frame_path(&frame, text, bounds.width(), outlines)
}

/// Assemble the glyph outlines of `frame` into one path.
///
/// Lines are stacked upward from the last one: the bottom line sits at
/// `y = 0` and each line above it is raised by one line height of its runs'
/// font.
pub fn frame_path(
    frame: &TextFrame,
    text: &StyledText,
    flush_width: f64,
    outlines: &mut impl OutlineSource,
) -> BezPath {
    let mut path = BezPath::new();
    for (line_index, line) in frame.lines().iter().rev().enumerate() {
        let flush = flush_offset(text, line, flush_width);
        for run in &line.runs {
            let metrics = run.font.metrics;
            let baseline = f64::from(metrics.baseline_offset());
            let line_offset = line_index as f64 * f64::from(metrics.line_height());
            for glyph in &run.glyphs {
                let Some(outline) = outlines.glyph_outline(&run.font, glyph.id) else {
                    trace!("no outline for glyph {}, skipping", glyph.id);
                    continue;
                };
                let position = Vec2::new(
                    f64::from(glyph.x) + flush,
                    f64::from(glyph.y) + line_offset + baseline,
                );
                append_path(&mut path, &outline, Affine::translate(position));
            }
        }
    }
    path
}

/// Lay out `text` on a single unbounded line and return its glyph outlines.
///
/// Each glyph sits at its pen position raised by its run's baseline offset.
/// No alignment or line stacking is applied, so text with hard line breaks
/// overlaps itself; use [`extract_path`] for multi-line text. Returns `None`
/// if the layout produced no glyph runs.
pub fn line_path(
    text: &StyledText,
    layouter: &mut impl TextLayouter,
    outlines: &mut impl OutlineSource,
) -> Option<BezPath> {
    let frame = layouter.layout(text, Size::new(f64::INFINITY, f64::INFINITY));
    if frame.is_empty() {
        return None;
    }
    let mut path = BezPath::new();
    for run in frame.lines().iter().flat_map(|line| line.runs.iter()) {
        let baseline = f64::from(run.font.metrics.baseline_offset());
        for glyph in &run.glyphs {
            let Some(outline) = outlines.glyph_outline(&run.font, glyph.id) else {
                continue;
            };
            let position = Vec2::new(f64::from(glyph.x), f64::from(glyph.y) + baseline);
            append_path(&mut path, &outline, Affine::translate(position));
        }
    }
    Some(path)
}

pub(crate) fn append_path(path: &mut BezPath, outline: &BezPath, transform: Affine) {
    path.extend(outline.elements().iter().map(|el| transform * *el));
}
