// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph outlines in font space.

use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use hashbrown::HashMap;
use linebender_resource_handle::FontData;
use skrifa::instance::{LocationRef, NormalizedCoord, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::kurbo::BezPath;
use crate::{FontMetrics, RunFont};

/// Something that can produce the outline of a glyph.
pub trait OutlineSource {
    /// Returns the outline of `glyph_id` in `font`, or `None` if the font has
    /// no outline for it.
    ///
    /// Outlines are in font space (y up) and scaled to the font size, with the
    /// glyph origin at `(0, 0)`.
    fn glyph_outline(&mut self, font: &RunFont, glyph_id: u32) -> Option<BezPath>;
}

/// A path filled in by a Skrifa [`OutlinePen`].
#[derive(Clone, Default)]
pub(crate) struct OutlinePath(pub(crate) BezPath);

// Font space is kept as is; callers flip when drawing to a y-down surface.
impl OutlinePen for OutlinePath {
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to((x, y));
    }

    #[inline]
    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to((x, y));
    }

    #[inline]
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.0.curve_to((cx0, cy0), (cx1, cy1), (x, y));
    }

    #[inline]
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.0.quad_to((cx, cy), (x, y));
    }

    #[inline]
    fn close(&mut self) {
        self.0.close_path();
    }
}

fn location(coords: &[i16]) -> Vec<NormalizedCoord> {
    coords
        .iter()
        .map(|coord| NormalizedCoord::from_bits(*coord))
        .collect()
}

/// Reads the vertical metrics of `font` at `size` using Skrifa.
///
/// Returns `None` if the font data cannot be parsed.
pub fn font_metrics(font: &FontData, size: f32, normalized_coords: &[i16]) -> Option<FontMetrics> {
    let font_ref = FontRef::from_index(font.data.as_ref(), font.index).ok()?;
    let coords = location(normalized_coords);
    let metrics = font_ref.metrics(Size::new(size), LocationRef::new(&coords));
    Some(FontMetrics {
        ascent: metrics.ascent,
        descent: metrics.descent.abs(),
        leading: metrics.leading,
    })
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
struct OutlineKey {
    font_id: u64,
    font_index: u32,
    glyph_id: u32,
    size_bits: u32,
}

struct OutlineEntry {
    // `None` records a glyph the font has no outline for.
    path: Option<BezPath>,
    serial: u32,
}

/// An [`OutlineSource`] that extracts unhinted outlines with Skrifa.
///
/// Outlines are cached per font, glyph, size and variation coordinates. Call
/// [`SkrifaOutlines::maintain`] between renders to evict entries that have not
/// been used for a while.
#[derive(Default)]
pub struct SkrifaOutlines {
    static_map: HashMap<OutlineKey, OutlineEntry>,
    variable_map: HashMap<Vec<i16>, HashMap<OutlineKey, OutlineEntry>>,
    cached_count: usize,
    serial: u32,
    last_prune_serial: u32,
}

impl Debug for SkrifaOutlines {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SkrifaOutlines")
            .field("static_map", &self.static_map.len())
            .field("variable_map", &self.variable_map.len())
            .field("cached_count", &self.cached_count)
            .field("serial", &self.serial)
            .field("last_prune_serial", &self.last_prune_serial)
            .finish()
    }
}

impl SkrifaOutlines {
    /// Creates an empty outline cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached glyph lookups, including glyphs without an outline.
    pub fn cached_count(&self) -> usize {
        self.cached_count
    }

    /// Drops every cached outline.
    pub fn clear(&mut self) {
        self.static_map.clear();
        self.variable_map.clear();
        self.cached_count = 0;
    }

    /// Evicts outlines that have not been used for a number of renders.
    pub fn maintain(&mut self) {
        // Maximum number of renders where we'll retain an unused glyph
        const MAX_ENTRY_AGE: u32 = 64;
        // Maximum number of renders before we force a prune
        const PRUNE_FREQUENCY: u32 = 64;
        // Always prune if the cached count is greater than this value
        const CACHED_COUNT_THRESHOLD: usize = 256;

        let serial = self.serial;
        self.serial = self.serial.wrapping_add(1);
        if serial.wrapping_sub(self.last_prune_serial) < PRUNE_FREQUENCY
            && self.cached_count < CACHED_COUNT_THRESHOLD
        {
            return;
        }
        self.last_prune_serial = serial;
        let mut evicted = 0;
        let mut keep = |entry: &OutlineEntry| {
            let fresh = serial.wrapping_sub(entry.serial) <= MAX_ENTRY_AGE;
            if !fresh {
                evicted += 1;
            }
            fresh
        };
        self.static_map.retain(|_, entry| keep(entry));
        self.variable_map.retain(|_, map| {
            map.retain(|_, entry| keep(entry));
            !map.is_empty()
        });
        self.cached_count -= evicted;
    }
}

fn draw_outline(font: &RunFont, glyph_id: u32) -> Option<BezPath> {
    let font_ref = FontRef::from_index(font.data.data.as_ref(), font.data.index).ok()?;
    let outlines = font_ref.outline_glyphs();
    let glyph = outlines.get(GlyphId::new(glyph_id))?;
    let coords = location(&font.normalized_coords);
    let settings = DrawSettings::unhinted(Size::new(font.size), LocationRef::new(&coords));
    let mut pen = OutlinePath::default();
    glyph.draw(settings, &mut pen).ok()?;
    Some(pen.0)
}

impl OutlineSource for SkrifaOutlines {
    fn glyph_outline(&mut self, font: &RunFont, glyph_id: u32) -> Option<BezPath> {
        let key = OutlineKey {
            font_id: font.data.data.id(),
            font_index: font.data.index,
            glyph_id,
            size_bits: font.size.to_bits(),
        };
        let serial = self.serial;
        let map = if font.normalized_coords.is_empty() {
            &mut self.static_map
        } else {
            // Look up by slice first so cache hits don't allocate.
            if !self
                .variable_map
                .contains_key(font.normalized_coords.as_slice())
            {
                self.variable_map
                    .insert(font.normalized_coords.clone(), HashMap::new());
            }
            self.variable_map
                .get_mut(font.normalized_coords.as_slice())?
        };
        if let Some(entry) = map.get_mut(&key) {
            entry.serial = serial;
            return entry.path.clone();
        }
        let path = draw_outline(font, glyph_id);
        map.insert(
            key,
            OutlineEntry {
                path: path.clone(),
                serial,
            },
        );
        self.cached_count += 1;
        path
    }
}
