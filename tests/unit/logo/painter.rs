use super::*;
use crate::foundation::geometry::EdgeInsets;
use crate::logo::mark::ART_TO_NORMALIZED;
use crate::logo::style::LogoStyle;
use crate::render::display_list::DrawOp;

fn deco(style: LogoStyle, position: f64, opacity: f64) -> LogoDecoration {
    LogoDecoration::from_parts(
        Color::WHITE,
        Color::BLACK,
        style,
        EdgeInsets::ZERO,
        position,
        opacity,
    )
}

fn record(d: &LogoDecoration, target: Rect) -> DisplayList {
    let painter = LogoPainter::default();
    let mut list = DisplayList::new();
    painter.paint(d, target, &mut list);
    list
}

fn label_ops(list: &DisplayList) -> Vec<(Affine, Color)> {
    list.ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Label {
                transform, color, ..
            } => Some((*transform, *color)),
            _ => None,
        })
        .collect()
}

#[test]
fn zero_area_records_nothing() {
    let d = LogoDecoration::new(LogoStyle::Horizontal).with_margin(EdgeInsets::all(50.0));
    assert!(record(&d, Rect::new(0.0, 0.0, 100.0, 100.0)).is_empty());
    let half = deco(LogoStyle::Stacked, -0.5, 0.5);
    assert!(record(&half, Rect::new(0.0, 0.0, 0.0, 100.0)).is_empty());
}

#[test]
fn mark_only_at_reference_size_is_just_the_mark() {
    let d = LogoDecoration::new(LogoStyle::MarkOnly).with_color(Color::WHITE);
    let list = record(&d, Rect::new(0.0, 0.0, 112.0, 112.0));
    assert!(list.is_balanced());
    assert!(label_ops(&list).is_empty());
    assert!(
        list.ops()
            .iter()
            .all(|op| !matches!(op, DrawOp::SaveLayer { .. } | DrawOp::Clip { .. }))
    );

    let DrawOp::FillPath {
        transform, paint, ..
    } = &list.ops()[1]
    else {
        panic!("expected the first beam, got {:?}", list.ops()[1]);
    };
    assert_eq!(*transform, ART_TO_NORMALIZED);
    assert_eq!(*paint, Paint::solid(Color::WHITE));
}

#[test]
fn settled_horizontal_label_sits_at_final_offset() {
    let d = deco(LogoStyle::Horizontal, 1.0, 1.0);
    let list = record(&d, Rect::new(0.0, 0.0, 446.0, 112.0));
    assert!(list.is_balanced());
    assert!(list.ops().iter().all(|op| !matches!(op, DrawOp::Clip { .. })));

    let labels = label_ops(&list);
    assert_eq!(labels.len(), 1);
    let (transform, color) = labels[0];
    assert!((transform.translation().x - 155.0).abs() < 1e-9);
    assert_eq!(color, Color::BLACK);

    let [sx, _, _, sy, _, _] = transform.as_coeffs();
    assert!((sx - 2.0 * sy).abs() < 1e-12);
    assert!((sy - 2.0 / 3.0 * 112.0 / 100.0).abs() < 1e-12);
}

#[test]
fn horizontal_label_scales_with_target() {
    let d = deco(LogoStyle::Horizontal, 1.0, 1.0);
    let list = record(&d, Rect::new(100.0, 50.0, 100.0 + 892.0, 50.0 + 224.0));
    let (transform, _) = label_ops(&list)[0];
    assert!((transform.translation().x - (100.0 + 310.0)).abs() < 1e-9);
}

#[test]
fn horizontal_transition_clips_label_to_wedge() {
    let d = deco(LogoStyle::Horizontal, 0.5, 1.0);
    let list = record(&d, Rect::new(0.0, 0.0, 446.0, 112.0));
    assert!(list.is_balanced());
    let clip = list.ops().iter().position(|op| matches!(op, DrawOp::Clip { .. }));
    let label = list.ops().iter().position(|op| matches!(op, DrawOp::Label { .. }));
    assert!(matches!((clip, label), (Some(c), Some(l)) if c < l));
}

#[test]
fn horizontal_label_starts_centered() {
    let d = deco(LogoStyle::Horizontal, 1e-6, 1.0);
    let painter = LogoPainter::default();
    let mut list = DisplayList::new();
    painter.paint(&d, Rect::new(0.0, 0.0, 446.0, 112.0), &mut list);
    let (transform, _) = label_ops(&list)[0];
    let drawn = transform.transform_rect_bbox(painter.label().bounds);
    assert!((drawn.center().x - 223.0).abs() < 1e-3, "{drawn:?}");
}

#[test]
fn stacked_transition_masks_label_with_gradient() {
    let d = deco(LogoStyle::Stacked, -0.5, 1.0);
    let list = record(&d, Rect::new(0.0, 0.0, 290.0, 192.0));
    assert!(list.is_balanced());

    let layer = list
        .ops()
        .iter()
        .position(|op| matches!(op, DrawOp::SaveLayer { opacity, .. } if *opacity == 1.0))
        .expect("label layer");
    assert!(matches!(list.ops()[layer + 1], DrawOp::Label { .. }));
    let DrawOp::FillPath {
        paint: Paint::LinearGradient { stops, .. },
        blend,
        ..
    } = &list.ops()[layer + 2]
    else {
        panic!("expected the wipe mask");
    };
    assert_eq!(*blend, BlendMode::Modulate);
    let offsets: Vec<f32> = stops.iter().map(|s| s.offset).collect();
    assert_eq!(offsets.len(), 4);
    assert!((offsets[1] - 0.4).abs() < 1e-6);
    assert!((offsets[2] - 0.6).abs() < 1e-6);
    assert_eq!(stops[0].color.a, 255);
    assert_eq!(stops[3].color.a, 0);
    assert!(matches!(list.ops()[layer + 3], DrawOp::Restore));
}

#[test]
fn settled_stacked_label_is_bottom_aligned_without_mask() {
    let d = deco(LogoStyle::Stacked, -1.0, 1.0);
    let painter = LogoPainter::default();
    let mut list = DisplayList::new();
    painter.paint(&d, Rect::new(0.0, 0.0, 290.0, 192.0), &mut list);
    assert!(list.ops().iter().all(|op| !matches!(op, DrawOp::SaveLayer { .. })));

    let (transform, _) = label_ops(&list)[0];
    let drawn = transform.transform_rect_bbox(painter.label().bounds);
    assert!((drawn.y1 - 192.0).abs() < 1e-9);
    assert!((drawn.center().x - 145.0).abs() < 1e-9);
}

#[test]
fn translucent_frame_is_wrapped_in_one_layer() {
    let d = deco(LogoStyle::Horizontal, 0.3, 0.5);
    let target = Rect::new(0.0, 0.0, 446.0, 112.0);
    let list = record(&d, target);
    assert!(list.is_balanced());
    let DrawOp::SaveLayer {
        bounds, opacity, ..
    } = &list.ops()[0]
    else {
        panic!("expected an opacity layer first");
    };
    assert_eq!(*bounds, target);
    assert_eq!(*opacity, 0.5);
    assert!(matches!(list.ops().last(), Some(DrawOp::Restore)));
}

#[test]
fn label_is_shaped_once_per_painter() {
    let painter = LogoPainter::default();
    let a = Arc::clone(painter.label());
    let mut list = DisplayList::new();
    painter.paint(
        &deco(LogoStyle::Horizontal, 0.7, 1.0),
        Rect::new(0.0, 0.0, 200.0, 50.0),
        &mut list,
    );
    let DrawOp::Label { run, .. } = list
        .ops()
        .iter()
        .find(|op| matches!(op, DrawOp::Label { .. }))
        .unwrap()
    else {
        unreachable!()
    };
    assert!(Arc::ptr_eq(&a, run));
    assert!(Arc::ptr_eq(&a, painter.label()));
}

#[test]
fn painter_identity_follows_text_color_and_font() {
    let painter = LogoPainter::new(Color::BLACK, None);
    assert!(painter.serves(Color::BLACK, None));
    assert!(!painter.serves(Color::WHITE, None));
}
