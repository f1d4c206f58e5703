// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph Outline turns styled text into vector glyph paths and rasterized images.
//!
//! Text is laid out by a [`TextLayouter`] (Parley by default, see
//! [`ParleyLayouter`]) into a [`TextFrame`] of lines, runs and positioned
//! glyphs. [`extract_path`] collects the outline of every glyph into a single
//! [`BezPath`](kurbo::BezPath), and [`extract_image`] rasterizes the same
//! frame with Tiny-Skia. [`export_path_image`] rasterizes arbitrary paths.
//!
//! Paths are in font space, with y pointing up. Rasterization flips them onto
//! the y-down pixel grid.
//!
//! ```no_run
//! use glyph_outline::kurbo::Rect;
//! use glyph_outline::{
//!     Alignment, ParleyLayouter, SkrifaOutlines, StyledText, TextStyle, extract_path,
//! };
//!
//! let style = TextStyle::new("sans-serif", 24.0)?.with_alignment(Alignment::Center);
//! let text = StyledText::new("Hello,\nworld!", style);
//! let bounds = Rect::new(0.0, 0.0, 320.0, 80.0);
//!
//! let mut layouter = ParleyLayouter::new();
//! let mut outlines = SkrifaOutlines::new();
//! let path = extract_path(&text, bounds, 1.0, &mut layouter, &mut outlines);
//! # Ok::<(), glyph_outline::Error>(())
//! ```
//!
//! ## Features
//!
//! - `system` (enabled by default): Discover system fonts through Parley's font backends.
//! - `png` (enabled by default): Enables [`encode_png`].
//!
//! Logging goes through the [`log`] facade; no logger is installed.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub use parley;
pub use peniko;
pub use peniko::kurbo;
pub use tiny_skia;

mod error;
mod extract;
mod frame;
mod outline;
mod parley_layout;
mod raster;
mod style;
mod styled_text;

pub mod geometry;

#[cfg(test)]
mod tests;

pub use linebender_resource_handle::{Blob, FontData};

pub use error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use extract::{extract_path, flush_offset, frame_path, layout_region, line_path};
pub use frame::{
    FontMetrics, FrameLine, GlyphRun, PositionedGlyph, RunFont, TextFrame, TextLayouter,
};
pub use outline::{OutlineSource, SkrifaOutlines, font_metrics};
pub use parley_layout::ParleyLayouter;
#[cfg(feature = "png")]
pub use raster::encode_png;
pub use raster::{Surface, draw_frame, export_path_image, extract_image, render_path};
pub use style::{Alignment, TextStyle};
pub use styled_text::{StyledText, TextRange};
