// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`TextLayouter`] backed by Parley.

use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use log::trace;
use parley::{
    Alignment, AlignmentOptions, FontContext, FontStack, GlyphRun as ParleyGlyphRun, Layout,
    LayoutContext, PositionedLayoutItem, StyleProperty,
};

use crate::kurbo::Size;
use crate::outline::font_metrics;
use crate::peniko::Color;
use crate::{
    FontMetrics, FrameLine, GlyphRun, PositionedGlyph, RunFont, StyledText, TextFrame,
    TextLayouter,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct ColorBrush(Color);

impl Default for ColorBrush {
    fn default() -> Self {
        Self(Color::BLACK)
    }
}

/// Lays out styled text with Parley.
///
/// Holds the Parley font and layout contexts, which cache fonts and scratch
/// space between calls. Create one and reuse it.
pub struct ParleyLayouter {
    font_cx: FontContext,
    layout_cx: LayoutContext<ColorBrush>,
}

impl Debug for ParleyLayouter {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyLayouter").finish_non_exhaustive()
    }
}

impl Default for ParleyLayouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyLayouter {
    /// Creates a layouter with a default font context.
    ///
    /// With the `system` feature the font context discovers system fonts.
    pub fn new() -> Self {
        Self::with_font_context(FontContext::new())
    }

    /// Creates a layouter around a prepared font context, for example one with
    /// registered fonts.
    pub fn with_font_context(font_cx: FontContext) -> Self {
        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
        }
    }

    /// The font context used for font selection.
    pub fn font_context_mut(&mut self) -> &mut FontContext {
        &mut self.font_cx
    }
}

impl TextLayouter for ParleyLayouter {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Parley lays out in f32; region widths are far below f32::MAX."
    )]
    fn layout(&mut self, text: &StyledText, region: Size) -> TextFrame {
        if text.is_empty() {
            return TextFrame::new(region, Vec::new());
        }
        let max_advance = region.width.is_finite().then_some(region.width as f32);

        let mut builder =
            self.layout_cx
                .ranged_builder(&mut self.font_cx, text.as_str(), 1.0, true);
        let default_style = text.default_style();
        builder.push_default(StyleProperty::FontStack(FontStack::from(
            default_style.font(),
        )));
        builder.push_default(StyleProperty::FontSize(default_style.font_size()));
        builder.push_default(StyleProperty::Brush(ColorBrush(default_style.color())));
        for (range, style) in text.spans() {
            let range = range.as_range();
            builder.push(
                StyleProperty::FontStack(FontStack::from(style.font())),
                range.clone(),
            );
            builder.push(StyleProperty::FontSize(style.font_size()), range.clone());
            builder.push(StyleProperty::Brush(ColorBrush(style.color())), range);
        }

        let mut layout: Layout<ColorBrush> = builder.build(text.as_str());
        layout.break_all_lines(max_advance);
        // Alignment is applied per line as a flush offset; keep Parley's lines at the start.
        layout.align(max_advance, Alignment::Start, AlignmentOptions::default());

        frame_from_layout(&layout, region)
    }
}

fn frame_from_layout(layout: &Layout<ColorBrush>, region: Size) -> TextFrame {
    let mut lines = Vec::new();
    let mut bottom = 0.0_f64;
    for line in layout.lines() {
        let metrics = line.metrics();
        bottom += f64::from(metrics.line_height);
        if bottom > region.height {
            trace!(
                "dropping lines from byte {}: they overflow a region of height {}",
                line.text_range().start,
                region.height
            );
            break;
        }
        let runs = line
            .items()
            .filter_map(|item| match item {
                PositionedLayoutItem::GlyphRun(glyph_run) => {
                    Some(glyph_run_from_parley(&glyph_run))
                }
                PositionedLayoutItem::InlineBox(_) => None,
            })
            .collect();
        lines.push(FrameLine {
            text_range: line.text_range(),
            width: metrics.advance - metrics.trailing_whitespace,
            baseline: metrics.baseline,
            runs,
        });
    }
    TextFrame::new(region, lines)
}

fn glyph_run_from_parley(glyph_run: &ParleyGlyphRun<'_, ColorBrush>) -> GlyphRun {
    let run = glyph_run.run();
    let data = run.font().clone();
    let size = run.font_size();
    let normalized_coords: Vec<i16> = run.normalized_coords().to_vec();
    let metrics = font_metrics(&data, size, &normalized_coords).unwrap_or_else(|| {
        let run_metrics = run.metrics();
        FontMetrics {
            ascent: run_metrics.ascent,
            descent: run_metrics.descent.abs(),
            leading: run_metrics.leading,
        }
    });

    // Pen positions are relative to the line origin, with y pointing up.
    let mut pen_x = glyph_run.offset();
    let glyphs = glyph_run
        .glyphs()
        .map(|glyph| {
            let positioned = PositionedGlyph {
                id: glyph.id,
                x: pen_x + glyph.x,
                y: -glyph.y,
            };
            pen_x += glyph.advance;
            positioned
        })
        .collect();

    GlyphRun {
        font: RunFont {
            data,
            size,
            normalized_coords,
            metrics,
        },
        color: glyph_run.style().brush.0,
        glyphs,
    }
}

