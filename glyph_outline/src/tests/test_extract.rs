// Copyright 2026 the Glyph Outline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::kurbo::{Rect, Shape, Size};
use crate::peniko::Color;
use crate::{Alignment, StyledText, TextStyle, extract_path, line_path};

use super::utils::{BoxOutlines, FixedLayouter, line, run};

const GLYPH: Rect = Rect::new(0.0, 0.0, 5.0, 7.0);

fn styled(text: &str, alignment: Alignment) -> StyledText {
    let style = TextStyle::new("serif", 10.0)
        .unwrap()
        .with_alignment(alignment);
    StyledText::new(text, style)
}

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 30.0)
}

#[test]
fn empty_text_yields_empty_path() {
    let text = styled("", Alignment::Natural);
    let mut layouter = FixedLayouter::default();
    let mut outlines = BoxOutlines::default();

    let path = extract_path(&text, bounds(), 1.0, &mut layouter, &mut outlines);

    assert!(path.elements().is_empty(), "expected no path elements");
    assert!(outlines.requests.is_empty(), "no glyphs should be requested");
}

#[test]
fn lays_out_in_a_double_height_region() {
    let text = styled("a", Alignment::Natural);
    let mut layouter = FixedLayouter::default();
    let mut outlines = BoxOutlines::default();

    extract_path(&text, bounds(), 1.0, &mut layouter, &mut outlines);

    assert_eq!(layouter.regions, vec![Size::new(100.0, 60.0)]);
}

#[test]
fn single_glyph_is_offset_by_baseline() {
    let text = styled("a", Alignment::Left);
    let mut layouter =
        FixedLayouter::new(vec![line(0..1, 5.0, 8.0, vec![run(&[(1, 3.0)], Color::BLACK)])]);
    let mut outlines = BoxOutlines::new(&[(1, GLYPH)]);

    let path = extract_path(&text, bounds(), 1.0, &mut layouter, &mut outlines);

    // Baseline offset is line height (10) minus ascent (8).
    assert_eq!(path.bounding_box(), Rect::new(3.0, 2.0, 8.0, 9.0));
}

#[test]
fn alignment_sets_flush_offset() {
    // Line of width 40 in bounds of width 100.
    for (alignment, flush) in [
        (Alignment::Left, 0.0),
        (Alignment::Center, 30.0),
        (Alignment::Right, 60.0),
        (Alignment::Natural, 0.0),
        (Alignment::Justified, 0.0),
    ] {
        let text = styled("abcd", alignment);
        let mut layouter = FixedLayouter::new(vec![line(
            0..4,
            40.0,
            8.0,
            vec![run(&[(1, 0.0), (1, 35.0)], Color::BLACK)],
        )]);
        let mut outlines = BoxOutlines::new(&[(1, GLYPH)]);

        let path = extract_path(&text, bounds(), 1.0, &mut layouter, &mut outlines);

        let bbox = path.bounding_box();
        assert_eq!(bbox.x0, flush, "unexpected flush offset for {alignment:?}");
        assert_eq!(bbox.x1, flush + 40.0, "unexpected line end for {alignment:?}");
    }
}

#[test]
fn overlong_lines_are_not_shifted() {
    let text = styled("abcd", Alignment::Right);
    let mut layouter = FixedLayouter::new(vec![line(
        0..4,
        140.0,
        8.0,
        vec![run(&[(1, 0.0)], Color::BLACK)],
    )]);
    let mut outlines = BoxOutlines::new(&[(1, GLYPH)]);

    let path = extract_path(&text, bounds(), 1.0, &mut layouter, &mut outlines);

    assert_eq!(path.bounding_box().x0, 0.0);
}

#[test]
fn alignment_comes_from_the_line_start() {
    let centered = TextStyle::new("serif", 10.0)
        .unwrap()
        .with_alignment(Alignment::Center);
    let text = styled("ab\ncd", Alignment::Natural)
        .with_style(3..5, centered)
        .unwrap();
    let mut layouter = FixedLayouter::new(vec![
        line(0..3, 10.0, 8.0, vec![run(&[(1, 0.0)], Color::BLACK)]),
        line(3..5, 10.0, 18.0, vec![run(&[(2, 0.0)], Color::BLACK)]),
    ]);
    let mut outlines = BoxOutlines::new(&[(1, GLYPH), (2, GLYPH)]);

    let path = extract_path(&text, bounds(), 1.0, &mut layouter, &mut outlines);

    // The first line has no alignment and stays put; the second is centered.
    let bbox = path.bounding_box();
    assert_eq!(bbox.x0, 0.0);
    assert_eq!(bbox.x1, 45.0 + 5.0);
}

#[test]
fn lines_stack_upward_from_the_last() {
    let text = styled("ab\ncd", Alignment::Left);
    let mut layouter = FixedLayouter::new(vec![
        line(0..3, 10.0, 8.0, vec![run(&[(1, 0.0)], Color::BLACK)]),
        line(3..5, 10.0, 18.0, vec![run(&[(2, 20.0)], Color::BLACK)]),
    ]);
    let mut outlines = BoxOutlines::new(&[(1, GLYPH), (2, GLYPH)]);

    let path = extract_path(&text, bounds(), 1.0, &mut layouter, &mut outlines);

    // The last line is processed first and sits on the bottom.
    assert_eq!(outlines.requests, vec![2, 1]);
    let mut segments = path.segments();
    let bottom = segments.next().map(|seg| seg.bounding_box());
    assert_eq!(bottom.map(|b| b.y0), Some(2.0));
    // The first line is one line height higher.
    assert_eq!(path.bounding_box(), Rect::new(0.0, 2.0, 25.0, 19.0));
}

#[test]
fn missing_outlines_are_skipped() {
    let text = styled("abc", Alignment::Left);
    let mut layouter = FixedLayouter::new(vec![line(
        0..3,
        30.0,
        8.0,
        vec![run(&[(1, 0.0), (99, 10.0), (2, 20.0)], Color::BLACK)],
    )]);
    let mut outlines = BoxOutlines::new(&[(1, GLYPH), (2, GLYPH)]);

    let path = extract_path(&text, bounds(), 1.0, &mut layouter, &mut outlines);

    assert_eq!(outlines.requests, vec![1, 99, 2]);
    let per_glyph = GLYPH.to_path(0.1).elements().len();
    assert_eq!(path.elements().len(), per_glyph * 2);
    assert_eq!(path.bounding_box(), Rect::new(0.0, 2.0, 25.0, 9.0));
}

#[test]
fn expected_scale_leaves_path_in_layout_units() {
    let text = styled("a", Alignment::Left);
    for scale in [1.0, 2.0, 3.0] {
        let mut layouter =
            FixedLayouter::new(vec![line(0..1, 5.0, 8.0, vec![run(&[(1, 3.0)], Color::BLACK)])]);
        let mut outlines = BoxOutlines::new(&[(1, GLYPH)]);

        let path = extract_path(&text, bounds(), scale, &mut layouter, &mut outlines);

        assert_eq!(
            path.bounding_box(),
            Rect::new(3.0, 2.0, 8.0, 9.0),
            "path changed at scale {scale}"
        );
        assert_eq!(layouter.regions, vec![Size::new(100.0, 60.0)]);
    }
}

#[test]
fn line_path_ignores_alignment_and_stacking() {
    let text = styled("ab\ncd", Alignment::Right);
    let mut layouter = FixedLayouter::new(vec![
        line(0..3, 10.0, 8.0, vec![run(&[(1, 0.0)], Color::BLACK)]),
        line(3..5, 10.0, 18.0, vec![run(&[(2, 20.0)], Color::BLACK)]),
    ]);
    let mut outlines = BoxOutlines::new(&[(1, GLYPH), (2, GLYPH)]);

    let path = line_path(&text, &mut layouter, &mut outlines).expect("glyph runs");

    assert_eq!(path.bounding_box(), Rect::new(0.0, 2.0, 25.0, 9.0));
    assert!(!layouter.regions[0].width.is_finite());
}

#[test]
fn line_path_of_empty_layout_is_none() {
    let text = styled("", Alignment::Natural);
    let mut layouter = FixedLayouter::default();
    let mut outlines = BoxOutlines::default();

    assert!(line_path(&text, &mut layouter, &mut outlines).is_none());
}

#[test]
fn frame_baseline() {
    let text = styled("a", Alignment::Natural);
    let mut layouter =
        FixedLayouter::new(vec![line(0..1, 5.0, 8.0, vec![run(&[(1, 0.0)], Color::BLACK)])]);
    let frame = crate::TextLayouter::layout(&mut layouter, &text, Size::new(10.0, 10.0));
    assert_eq!(frame.baseline(), 2.0);
    assert_eq!(crate::TextFrame::default().baseline(), 0.0);
}
