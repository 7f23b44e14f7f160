// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers: signed area and the strict containment predicate.

use kurbo::Rect;

/// Signed area of a corner-form rectangle: `width * height`, no clamping.
///
/// Zero and negative widths/heights flow straight through to the product.
/// Callers sort on this value as-is.
#[inline]
pub fn signed_area(r: &Rect) -> f64 {
    r.width() * r.height()
}

/// Whether `a` lies strictly inside `b`, on all four sides.
///
/// Strict means no shared edges and no equality: a rectangle is never inside
/// itself, and two identical rectangles are never inside each other. A
/// degenerate rectangle (zero or negative width/height) can satisfy this as
/// the inner rectangle but effectively never as the outer one, since
/// shrinking `b` only makes the `<` bounds harder to meet. That asymmetry is
/// the intended geometric behavior, not a case to special-case away.
///
/// Assumes no NaN coordinates.
#[inline]
pub fn is_strictly_inside(a: &Rect, b: &Rect) -> bool {
    a.x0 > b.x0 && a.y0 > b.y0 && a.x1 < b.x1 && a.y1 < b.y1
}
