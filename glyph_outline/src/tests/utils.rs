// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic stand-ins for the layout engine and font outlines.

use std::collections::HashMap;
use std::sync::Arc;

use crate::kurbo::{BezPath, Rect, Shape, Size};
use crate::peniko::Color;
use crate::{
    Blob, FontData, FontMetrics, FrameLine, GlyphRun, OutlineSource, PositionedGlyph, RunFont,
    StyledText, TextFrame, TextLayouter,
};

/// Metrics used by every test run: line height 10, baseline offset 2.
pub(crate) const METRICS: FontMetrics = FontMetrics {
    ascent: 8.0,
    descent: 2.0,
    leading: 0.0,
};

/// Font data that no font parser accepts.
pub(crate) fn empty_font() -> FontData {
    FontData::new(Blob::new(Arc::new(Vec::<u8>::new())), 0)
}

pub(crate) fn run(glyphs: &[(u32, f32)], color: Color) -> GlyphRun {
    GlyphRun {
        font: RunFont {
            data: empty_font(),
            size: 10.0,
            normalized_coords: Vec::new(),
            metrics: METRICS,
        },
        color,
        glyphs: glyphs
            .iter()
            .map(|&(id, x)| PositionedGlyph { id, x, y: 0.0 })
            .collect(),
    }
}

pub(crate) fn line(
    text_range: core::ops::Range<usize>,
    width: f32,
    baseline: f32,
    runs: Vec<GlyphRun>,
) -> FrameLine {
    FrameLine {
        text_range,
        width,
        baseline,
        runs,
    }
}

/// A layouter that returns the same lines for every text, recording the regions it is asked for.
#[derive(Default)]
pub(crate) struct FixedLayouter {
    pub(crate) lines: Vec<FrameLine>,
    pub(crate) regions: Vec<Size>,
}

impl FixedLayouter {
    pub(crate) fn new(lines: Vec<FrameLine>) -> Self {
        Self {
            lines,
            regions: Vec::new(),
        }
    }
}

impl TextLayouter for FixedLayouter {
    fn layout(&mut self, _text: &StyledText, region: Size) -> TextFrame {
        self.regions.push(region);
        TextFrame::new(region, self.lines.clone())
    }
}

/// Outlines every known glyph as a rectangle in font space.
#[derive(Default)]
pub(crate) struct BoxOutlines {
    boxes: HashMap<u32, Rect>,
    pub(crate) requests: Vec<u32>,
}

impl BoxOutlines {
    pub(crate) fn new(boxes: &[(u32, Rect)]) -> Self {
        Self {
            boxes: boxes.iter().copied().collect(),
            requests: Vec::new(),
        }
    }
}

impl OutlineSource for BoxOutlines {
    fn glyph_outline(&mut self, _font: &RunFont, glyph_id: u32) -> Option<BezPath> {
        self.requests.push(glyph_id);
        self.boxes.get(&glyph_id).map(|rect| rect.to_path(0.1))
    }
}
