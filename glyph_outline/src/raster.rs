// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizing paths and laid-out text with Tiny-Skia.

#![allow(
    clippy::cast_possible_truncation,
    reason = "Tiny-Skia works in f32 and u32; coordinates and pixel sizes are checked or small enough."
)]

use log::{debug, trace};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::extract::{append_path, flush_offset, layout_region};
use crate::geometry::flip_vertical;
use crate::kurbo::{Affine, BezPath, PathEl, Rect, Shape, Size, Vec2};
use crate::peniko::Color;
use crate::{OutlineSource, StyledText, TextFrame, TextLayouter};

/// A scoped pixel drawing surface.
///
/// The surface owns its pixels and a current transform. Drawing operations take
/// the surface explicitly; [`Surface::into_image`] releases it and hands back
/// the captured pixels. Dropping a surface releases it without capturing.
#[derive(Debug)]
pub struct Surface {
    pixmap: Pixmap,
    size: Size,
    transform: Affine,
}

impl Surface {
    /// Creates a transparent surface covering `size` at `scale` device pixels per unit.
    ///
    /// The pixel size is `size * scale` rounded up, and the initial transform
    /// scales drawing by `scale`. Returns `None` for empty, negative or
    /// non-finite sizes and scales.
    pub fn new(size: Size, scale: f64) -> Option<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            trace!("cannot create a surface at scale {scale}");
            return None;
        }
        let width = pixel_extent(size.width * scale)?;
        let height = pixel_extent(size.height * scale)?;
        let Some(pixmap) = Pixmap::new(width, height) else {
            trace!("cannot allocate a {width}x{height} surface");
            return None;
        };
        Some(Self {
            pixmap,
            size,
            transform: Affine::scale(scale),
        })
    }

    /// Size in user units, before scaling.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The current transform from user space to pixels.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Concatenates `transform` onto the current transform.
    ///
    /// `transform` is applied to user coordinates before the existing transform.
    pub fn concat(&mut self, transform: Affine) {
        self.transform *= transform;
    }

    /// Fills `path` with `color` using the non-zero winding rule.
    ///
    /// Empty paths draw nothing.
    pub fn fill_path(&mut self, path: &BezPath, color: Color) {
        let Some(path) = to_tiny_skia_path(path) else {
            return;
        };
        let rgba = color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
        paint.anti_alias = true;
        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            to_tiny_skia_transform(self.transform),
            None,
        );
    }

    /// Borrows the pixels drawn so far.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Releases the surface and returns its pixels.
    pub fn into_image(self) -> Pixmap {
        self.pixmap
    }
}

fn pixel_extent(extent: f64) -> Option<u32> {
    let extent = extent.ceil();
    if !extent.is_finite() || extent < 1.0 || extent > f64::from(u32::MAX) {
        trace!("cannot create a surface with extent {extent}");
        return None;
    }
    Some(extent as u32)
}

fn to_tiny_skia_transform(transform: Affine) -> Transform {
    let [a, b, c, d, e, f] = transform.as_coeffs();
    Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
}

fn to_tiny_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => builder.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

/// Draws `path` on `surface` in y-up coordinates, filled with `fill` if given.
///
/// The surface is flipped vertically around its own height first, so the
/// path's origin ends up in the bottom-left corner. Without a fill color
/// nothing is drawn.
pub fn render_path(surface: &mut Surface, path: &BezPath, fill: Option<Color>) {
    surface.concat(flip_vertical(surface.size().height));
    if let Some(color) = fill {
        surface.fill_path(path, color);
    }
}

/// Rasterizes `path` into a new image of `size` pixels.
///
/// See [`render_path`] for how the path is placed. Returns `None` if the
/// surface cannot be created.
pub fn export_path_image(path: &BezPath, fill: Option<Color>, size: Size) -> Option<Pixmap> {
    debug!(
        "exporting path image: size {size:?}, bounding box {:?}",
        path.bounding_box()
    );
    let mut surface = Surface::new(size, 1.0)?;
    render_path(&mut surface, path, fill);
    Some(surface.into_image())
}

/// Draws the glyphs of `frame` on `surface` in frame coordinates.
///
/// Frame coordinates have y pointing up with the bottom of the frame's region
/// at `y = 0`, so each line's baseline sits at `region height - baseline`.
/// Lines are shifted by their flush offset within `flush_width` and every run
/// is filled with its own color.
pub fn draw_frame(
    surface: &mut Surface,
    frame: &TextFrame,
    text: &StyledText,
    flush_width: f64,
    outlines: &mut impl OutlineSource,
) {
    let top = frame.region().height;
    for line in frame.lines() {
        let flush = flush_offset(text, line, flush_width);
        let baseline = top - f64::from(line.baseline);
        for run in &line.runs {
            let mut run_path = BezPath::new();
            for glyph in &run.glyphs {
                let Some(outline) = outlines.glyph_outline(&run.font, glyph.id) else {
                    trace!("no outline for glyph {}, skipping", glyph.id);
                    continue;
                };
                let position = Vec2::new(
                    f64::from(glyph.x) + flush,
                    baseline + f64::from(glyph.y),
                );
                append_path(&mut run_path, &outline, Affine::translate(position));
            }
            surface.fill_path(&run_path, run.color);
        }
    }
}

/// Lay out `text` within `bounds` and rasterize it at `scale`.
///
/// The image covers `bounds.size()` at `scale` pixels per unit and shows the
/// top of the text at its top edge. Returns `None` if the surface cannot be
/// created.
pub fn extract_image(
    text: &StyledText,
    bounds: Rect,
    scale: f64,
    layouter: &mut impl TextLayouter,
    outlines: &mut impl OutlineSource,
) -> Option<Pixmap> {
    let region = layout_region(bounds);
    let frame = layouter.layout(text, region);
    let mut surface = Surface::new(bounds.size(), scale)?;
    surface.concat(flip_vertical(region.height));
    draw_frame(&mut surface, &frame, text, bounds.width(), outlines);
    Some(surface.into_image())
}

/// Encodes an image as PNG.
#[cfg(feature = "png")]
pub fn encode_png(image: &Pixmap) -> Result<alloc::vec::Vec<u8>, crate::Error> {
    image
        .encode_png()
        .map_err(|err| crate::Error::encode(alloc::string::ToString::to_string(&err)))
}
