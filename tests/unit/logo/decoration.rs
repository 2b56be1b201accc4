use std::collections::hash_map::DefaultHasher;

use super::*;

fn hash_of(d: &LogoDecoration) -> u64 {
    let mut h = DefaultHasher::new();
    d.hash(&mut h);
    h.finish()
}

fn horizontal() -> LogoDecoration {
    LogoDecoration::new(LogoStyle::Horizontal)
        .with_color(Color::rgba8(10, 20, 30, 255))
        .with_text_color(Color::rgba8(200, 200, 200, 255))
        .with_margin(EdgeInsets::all(8.0))
}

fn stacked() -> LogoDecoration {
    LogoDecoration::new(LogoStyle::Stacked)
        .with_color(Color::rgba8(30, 20, 10, 255))
        .with_text_color(Color::rgba8(0, 0, 0, 255))
        .with_margin(EdgeInsets::all(4.0))
}

#[test]
fn construction_derives_position_and_full_opacity() {
    assert_eq!(LogoDecoration::new(LogoStyle::MarkOnly).position(), 0.0);
    assert_eq!(LogoDecoration::new(LogoStyle::Horizontal).position(), 1.0);
    assert_eq!(LogoDecoration::new(LogoStyle::Stacked).position(), -1.0);
    let d = LogoDecoration::default();
    assert_eq!(d.opacity(), 1.0);
    assert_eq!(d.color(), DEFAULT_COLOR);
    assert_eq!(d.text_color(), DEFAULT_TEXT_COLOR);
    assert_eq!(d.margin(), EdgeInsets::ZERO);
    assert!(d.is_settled());
}

#[test]
fn equality_ignores_style_and_margin() {
    let a = LogoDecoration::new(LogoStyle::MarkOnly);
    let b = LogoDecoration::from_parts(
        a.color(),
        a.text_color(),
        LogoStyle::Stacked,
        EdgeInsets::all(50.0),
        0.0,
        1.0,
    );
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    assert_ne!(a, a.with_text_color(Color::BLACK));
    assert_ne!(a, LogoDecoration::new(LogoStyle::Horizontal));
}

#[test]
fn negative_zero_position_hashes_like_zero() {
    let a = LogoDecoration::new(LogoStyle::MarkOnly);
    let b = LogoDecoration::from_parts(
        a.color(),
        a.text_color(),
        a.style(),
        a.margin(),
        -0.0,
        1.0,
    );
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn endpoints_return_inputs_unchanged() {
    let a = horizontal();
    let b = stacked();
    for (t, expected) in [(0.0, &a), (1.0, &b)] {
        let out = LogoDecoration::lerp(Some(&a), Some(&b), t).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(std::ptr::eq(out.as_ref(), expected));
    }
}

#[test]
fn same_reference_short_circuits_for_any_t() {
    let a = horizontal();
    for t in [-1.0, 0.0, 0.3, 1.0, 2.5] {
        let out = LogoDecoration::lerp(Some(&a), Some(&a), t).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(std::ptr::eq(out.as_ref(), &a));
    }
}

#[test]
fn equal_values_blend_to_an_equal_value() {
    let a = horizontal();
    let b = horizontal();
    for t in [0.1, 0.5, 0.9] {
        let out = LogoDecoration::lerp(Some(&a), Some(&b), t).unwrap();
        assert_eq!(*out, a);
        assert_eq!(out.margin(), a.margin());
        assert_eq!(out.style(), a.style());
    }
}

#[test]
fn both_absent_is_absent() {
    for t in [0.0, 0.5, 1.0, 3.0] {
        assert!(LogoDecoration::lerp(None, None, t).is_none());
    }
}

#[test]
fn fading_in_scales_opacity_by_t_and_margin_by_t() {
    let b = horizontal();
    let out = LogoDecoration::lerp(None, Some(&b), 0.25).unwrap();
    assert_eq!(out.opacity(), 0.25);
    assert_eq!(out.margin(), EdgeInsets::all(2.0));
    assert_eq!(out.position(), b.position());
    assert_eq!(out.color(), b.color());
    assert_eq!(out.text_color(), b.text_color());
    assert_eq!(out.style(), b.style());

    // t outside [0, 1] clamps the opacity factor only.
    let out = LogoDecoration::lerp(None, Some(&b), 1.5).unwrap();
    assert_eq!(out.opacity(), 1.0);
    assert_eq!(out.margin(), EdgeInsets::all(12.0));
}

#[test]
fn fading_out_scales_opacity_by_one_minus_t() {
    let a = stacked();
    let out = LogoDecoration::lerp(Some(&a), None, 0.25).unwrap();
    assert_eq!(out.opacity(), 0.75);
    assert_eq!(out.margin(), EdgeInsets::all(1.0));
    assert_eq!(out.position(), -1.0);
    assert_eq!(out.style(), LogoStyle::Stacked);

    let out = LogoDecoration::lerp(Some(&a), None, -0.5).unwrap();
    assert_eq!(out.opacity(), 1.0);
}

#[test]
fn general_case_interpolates_and_switches_style_at_half() {
    let a = horizontal();
    let b = stacked();

    let early = LogoDecoration::lerp(Some(&a), Some(&b), 0.25).unwrap();
    assert_eq!(early.style(), LogoStyle::Horizontal);
    assert!((early.position() - 0.5).abs() < 1e-12);
    assert_eq!(early.margin(), EdgeInsets::all(7.0));
    assert_eq!(early.color(), Color::rgba8(15, 20, 25, 255));

    let late = LogoDecoration::lerp(Some(&a), Some(&b), 0.5).unwrap();
    assert_eq!(late.style(), LogoStyle::Stacked);
    assert_eq!(late.position(), 0.0);
}

#[test]
fn position_overshoots_but_opacity_is_clamped() {
    let a = LogoDecoration::new(LogoStyle::MarkOnly);
    let b = LogoDecoration::new(LogoStyle::Horizontal);
    let out = LogoDecoration::lerp(Some(&a), Some(&b), 1.2).unwrap();
    assert!((out.position() - 1.2).abs() < 1e-12);
    assert_eq!(out.opacity(), 1.0);

    let faded = LogoDecoration::lerp(None, Some(&b), 0.5).unwrap().into_owned();
    for t in [-2.0, -0.5, 0.3, 1.7, 4.0] {
        let out = LogoDecoration::lerp(Some(&faded), Some(&b), t).unwrap();
        assert!((0.0..=1.0).contains(&out.opacity()), "t={t}");
    }
}

#[test]
fn mid_transition_is_not_settled() {
    let a = LogoDecoration::new(LogoStyle::MarkOnly);
    let b = LogoDecoration::new(LogoStyle::Horizontal);
    let mid = LogoDecoration::lerp(Some(&a), Some(&b), 0.4).unwrap();
    assert!(!mid.is_settled());
    let faded = LogoDecoration::lerp(None, Some(&b), 0.4).unwrap();
    assert!(!faded.is_settled());
}
