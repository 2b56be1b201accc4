use super::*;
use crate::foundation::geometry::EdgeInsets;
use crate::logo::style::LogoStyle;

const LABEL: Rect = Rect::new(0.0, 0.0, 300.0, 160.0);

fn at(position: f64) -> LogoDecoration {
    let d = LogoDecoration::default();
    LogoDecoration::from_parts(
        d.color(),
        d.text_color(),
        LogoStyle::MarkOnly,
        EdgeInsets::ZERO,
        position,
        1.0,
    )
}

fn close(a: Rect, b: Rect, eps: f64) -> bool {
    (a.x0 - b.x0).abs() < eps
        && (a.y0 - b.y0).abs() < eps
        && (a.x1 - b.x1).abs() < eps
        && (a.y1 - b.y1).abs() < eps
}

#[test]
fn intrinsic_size_snaps_on_sign() {
    assert_eq!(intrinsic_size(-1e-9), STACKED_SIZE);
    assert_eq!(intrinsic_size(0.0), MARK_ONLY_SIZE);
    assert_eq!(intrinsic_size(-0.0), MARK_ONLY_SIZE);
    assert_eq!(intrinsic_size(1e-9), HORIZONTAL_SIZE);
    assert_eq!(intrinsic_size(-0.7), STACKED_SIZE);
    assert_eq!(intrinsic_size(1.2), HORIZONTAL_SIZE);
}

#[test]
fn logo_square_is_continuous_across_zero() {
    let target = Rect::new(0.0, 0.0, 400.0, 300.0);
    let zero = LogoFrame::compute(&at(0.0), target, LABEL).unwrap();
    for eps in [1e-6, -1e-6] {
        let f = LogoFrame::compute(&at(eps), target, LABEL).unwrap();
        assert_ne!(f.intrinsic_size, zero.intrinsic_size);
        assert!(close(f.logo_square, f.center_square, 1e-3), "{:?}", f.logo_square);
        assert!(close(f.logo_square, zero.logo_square, 1e-3));
    }
}

#[test]
fn horizontal_target_square_hugs_left_edge() {
    let target = Rect::new(0.0, 0.0, 446.0, 112.0);
    let f = LogoFrame::compute(&LogoDecoration::new(LogoStyle::Horizontal), target, LABEL).unwrap();
    assert!(close(f.fitted, target, 1e-9));
    assert!(close(f.logo_target_square, Rect::new(0.0, 0.0, 112.0, 112.0), 1e-9));
    assert!(close(f.logo_square, f.logo_target_square, 1e-9));
}

#[test]
fn stacked_target_square_is_centered_and_top_aligned() {
    let target = Rect::new(0.0, 0.0, 290.0, 192.0);
    let f = LogoFrame::compute(&LogoDecoration::new(LogoStyle::Stacked), target, LABEL).unwrap();
    assert!(close(f.fitted, target, 1e-9));
    assert!(close(f.logo_target_square, Rect::new(89.0, 0.0, 201.0, 112.0), 1e-9));
}

#[test]
fn mark_only_uses_center_square() {
    let target = Rect::new(10.0, 20.0, 210.0, 120.0);
    let f = LogoFrame::compute(&LogoDecoration::default(), target, LABEL).unwrap();
    assert_eq!(f.center_square, Rect::new(60.0, 20.0, 160.0, 120.0));
    assert_eq!(f.logo_square, f.center_square);
    assert!(close(f.fitted, f.center_square, 1e-9));
}

#[test]
fn half_position_lands_midway() {
    let target = Rect::new(0.0, 0.0, 446.0, 112.0);
    let f = LogoFrame::compute(&at(0.5), target, LABEL).unwrap();
    let mid_x0 = (f.center_square.x0 + f.logo_target_square.x0) / 2.0;
    assert!((f.logo_square.x0 - mid_x0).abs() < 1e-9);
}

#[test]
fn margin_consuming_target_yields_nothing() {
    let d = LogoDecoration::default().with_margin(EdgeInsets::all(60.0));
    assert!(LogoFrame::compute(&d, Rect::new(0.0, 0.0, 100.0, 100.0), LABEL).is_none());
    assert!(LogoFrame::compute(&at(1.0), Rect::new(5.0, 5.0, 5.0, 50.0), LABEL).is_none());
}

#[test]
fn margin_deflates_canvas() {
    let d = LogoDecoration::default().with_margin(EdgeInsets {
        left: 10.0,
        top: 0.0,
        right: 0.0,
        bottom: 20.0,
    });
    let f = LogoFrame::compute(&d, Rect::new(0.0, 0.0, 100.0, 100.0), LABEL).unwrap();
    assert_eq!(f.canvas, Rect::new(10.0, 0.0, 100.0, 80.0));
}
