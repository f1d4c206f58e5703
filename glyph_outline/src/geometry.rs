// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometric helpers on Kurbo types.

use crate::kurbo::{Affine, BezPath, Point, Rect, Size};

/// The transform that mirrors y-up coordinates into a y-down space of the given height.
///
/// `(x, y)` maps to `(x, height - y)`. The transform is its own inverse.
pub fn flip_vertical(height: f64) -> Affine {
    Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, height])
}

/// Extra constructors for [`Rect`].
pub trait RectExt {
    /// A rectangle from its origin and size.
    fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self;
}

impl RectExt for Rect {
    fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_origin_size((x, y), (width, height))
    }
}

/// Aspect ratio predicates for [`Size`].
pub trait SizeExt {
    /// Whether the size has a 16:9 aspect ratio, in either orientation.
    fn is_sixteen_nine(&self) -> bool;

    /// Whether the size is taller than it is wide.
    fn is_portrait(&self) -> bool;

    /// Whether the size is wider than it is tall.
    fn is_landscape(&self) -> bool;

    /// Whether width and height are equal.
    fn is_square(&self) -> bool;
}

impl SizeExt for Size {
    fn is_sixteen_nine(&self) -> bool {
        self.width * 9.0 == self.height * 16.0 || self.width * 16.0 == self.height * 9.0
    }

    fn is_portrait(&self) -> bool {
        self.width < self.height
    }

    fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Distance and angle helpers for [`Point`].
pub trait PointExt {
    /// Euclidean distance to `other`.
    fn distance_to(&self, other: Point) -> f64;

    /// Angle of this point around `center`, in radians.
    ///
    /// In y-down coordinates the angle is zero directly above `center`, `±π`
    /// directly below it, and grows toward positive x.
    fn angle_with(&self, center: Point) -> f64;
}

impl PointExt for Point {
    fn distance_to(&self, other: Point) -> f64 {
        (other - *self).hypot()
    }

    fn angle_with(&self, center: Point) -> f64 {
        let delta_y = center.y - self.y;
        let delta_x = self.x - center.x;
        delta_x.atan2(delta_y)
    }
}

/// Transform helpers for [`BezPath`].
pub trait PathExt {
    /// A copy of the path scaled uniformly around the origin.
    #[must_use]
    fn scaled(&self, factor: f64) -> BezPath;
}

impl PathExt for BezPath {
    fn scaled(&self, factor: f64) -> BezPath {
        Affine::scale(factor) * self.clone()
    }
}
