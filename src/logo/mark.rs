//! The mark: fixed vector art drawn into a normalized 112×112 square.
//!
//! The art coordinates below come from the original artwork export, authored in a 202×202 box
//! with the 166-unit-wide drawing centered horizontally. [`ART_TO_NORMALIZED`] maps that box onto
//! the normalized square.

use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::render::display_list::{BlendMode, DisplayList, GradientStop, Paint};

/// Side of the normalized mark square.
pub const MARK_EXTENT: f64 = 112.0;

const ART_EXTENT: f64 = 202.0;
const ART_WIDTH: f64 = 166.0;

/// Art space to the normalized 112×112 square.
pub const ART_TO_NORMALIZED: Affine = Affine::new([
    MARK_EXTENT / ART_EXTENT,
    0.0,
    0.0,
    MARK_EXTENT / ART_EXTENT,
    (ART_EXTENT - ART_WIDTH) / 2.0 * (MARK_EXTENT / ART_EXTENT),
    0.0,
]);

// Rotation that places the overlap square between the middle and bottom beams.
const OVERLAP_TRANSFORM: Affine = Affine::new([0.7071, -0.7071, 0.7071, 0.7071, -77.697, 98.057]);
const OVERLAP_RECT: Rect = Rect::new(59.8, 123.1, 59.8 + 39.4, 123.1 + 39.4);

// Offset of both fold gradients in art space.
const GRADIENT_ORIGIN: (f64, f64) = (37.9092, 123.4389);

const TRIANGLE_GRADIENT: [(f32, u32); 9] = [
    (0.2690, 0xBFFF_FFFF),
    (0.4093, 0xBFFC_FCFC),
    (0.4972, 0xBFF4_F4F4),
    (0.5708, 0xBFE5_E5E5),
    (0.6364, 0xBFD1_D1D1),
    (0.6968, 0xBFB6_B6B6),
    (0.7533, 0xBF95_9595),
    (0.8058, 0xBF6E_6E6E),
    (0.8219, 0xBF61_6161),
];

const RECTANGLE_GRADIENT: [(f32, u32); 9] = [
    (0.4588, 0x80FF_FFFF),
    (0.5509, 0x80FC_FCFC),
    (0.6087, 0x80F4_F4F4),
    (0.6570, 0x80E5_E5E5),
    (0.7001, 0x80D1_D1D1),
    (0.7397, 0x80B6_B6B6),
    (0.7768, 0x8095_9595),
    (0.8113, 0x806E_6E6E),
    (0.8219, 0x8061_6161),
];

/// Darkening applied to the mark color for the overlap square.
pub const MEDIUM_DARKEN: f64 = 0.25;
/// Darkening applied to the mark color for the bottom beam.
pub const DARK_DARKEN: f64 = 0.6;

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut path = BezPath::new();
    let mut it = points.iter();
    if let Some(&first) = it.next() {
        path.move_to(first);
        for &p in it {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

fn gradient(start: (f64, f64), end: (f64, f64), stops: &[(f32, u32)]) -> Paint {
    let shift = |(x, y): (f64, f64)| Point::new(x + GRADIENT_ORIGIN.0, y + GRADIENT_ORIGIN.1);
    Paint::LinearGradient {
        start: shift(start),
        end: shift(end),
        stops: stops
            .iter()
            .map(|&(offset, argb)| GradientStop {
                offset,
                color: Color::from_argb32(argb),
            })
            .collect(),
    }
}

/// Transform mapping the normalized mark square onto `square`.
pub fn normalized_to(square: Rect) -> Affine {
    Affine::translate((square.x0, square.y0))
        * Affine::scale_non_uniform(square.width() / MARK_EXTENT, square.height() / MARK_EXTENT)
}

/// Record the mark into `square` using `color` for the light beams.
pub fn paint_mark(list: &mut DisplayList, square: Rect, color: Color) {
    let light = Paint::solid(color);
    let medium = Paint::solid(color.darken(MEDIUM_DARKEN));
    let dark = Paint::solid(color.darken(DARK_DARKEN));

    list.save(|list| {
        list.concat(normalized_to(square));
        list.concat(ART_TO_NORMALIZED);

        let top_beam = polygon(&[(37.7, 128.9), (9.8, 101.0), (100.4, 10.4), (156.2, 10.4)]);
        list.fill_path(top_beam, light.clone(), BlendMode::Normal);

        let middle_beam = polygon(&[(156.2, 94.0), (100.4, 94.0), (78.5, 115.9), (106.4, 143.8)]);
        list.fill_path(middle_beam, light, BlendMode::Normal);

        let bottom_beam = polygon(&[(79.5, 170.7), (100.4, 191.6), (156.2, 191.6), (107.4, 142.8)]);
        list.fill_path(bottom_beam, dark, BlendMode::Normal);

        list.save(|list| {
            list.concat(OVERLAP_TRANSFORM);
            list.fill_rect(OVERLAP_RECT, medium, BlendMode::Normal);
        });

        let triangle = polygon(&[(79.5, 170.7), (120.9, 156.4), (107.4, 142.8)]);
        list.fill_path(
            triangle,
            gradient((87.2623, 28.8384), (42.9205, 35.0952), &TRIANGLE_GRADIENT),
            BlendMode::Multiply,
        );

        let rectangle = polygon(&[(107.4, 142.8), (79.5, 170.7), (86.1, 177.3), (114.0, 149.4)]);
        list.fill_path(
            rectangle,
            gradient((62.3643, 40.135), (54.0376, 31.8083), &RECTANGLE_GRADIENT),
            BlendMode::Multiply,
        );
    });
}
