// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed text styles.

use alloc::sync::Arc;

use crate::Error;
use crate::peniko::Color;

/// Horizontal alignment of the lines in a paragraph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Alignment follows the writing direction of the text.
    #[default]
    Natural,
    /// Lines are flush with the left edge.
    Left,
    /// Lines are centered.
    Center,
    /// Lines are flush with the right edge.
    Right,
    /// Lines are stretched to fill the width.
    Justified,
}

impl Alignment {
    /// The share of unused line width placed before the line.
    ///
    /// Only left, center and right alignment shift a line; every other value
    /// leaves it at the leading edge.
    pub fn flush_factor(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
            Self::Natural | Self::Justified => 0.0,
        }
    }
}

/// The style applied to a range of text.
///
/// A style is validated once when it is constructed, so every consumer can
/// rely on a non-empty font family and a finite, positive font size.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    font: Arc<str>,
    font_size: f32,
    alignment: Alignment,
    color: Color,
}

impl TextStyle {
    /// Creates a style for the given font family and size, black and naturally aligned.
    ///
    /// The family is a font family name or a CSS-style family list
    /// (for example `"Inter, system-ui"`), as understood by the layout engine.
    pub fn new(font: &str, font_size: f32) -> Result<Self, Error> {
        if font.trim().is_empty() {
            return Err(Error::empty_font_family());
        }
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(Error::invalid_font_size(font_size));
        }
        Ok(Self {
            font: Arc::from(font),
            font_size,
            alignment: Alignment::Natural,
            color: Color::BLACK,
        })
    }

    /// Returns this style with the given paragraph alignment.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Returns this style with the given foreground color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The font family.
    pub fn font(&self) -> &str {
        &self.font
    }

    /// The font size in layout units per em.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// The paragraph alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The foreground color.
    pub fn color(&self) -> Color {
        self.color
    }
}
