//! Sweep-region clipping
//!
//! The canvas API only clips to rectangles, so the visible part of the
//! radar wedge is computed geometrically: the wedge is sampled into a
//! polygon and intersected with the flattened shield silhouette. The
//! wedge never exceeds 120° (see [`super::sweep`]), so it is convex and
//! Sutherland-Hodgman clipping against it is exact.

use iced::{Point, Size};

use super::SweepArc;

/// Arc sampling step in degrees
const ARC_STEP: f32 = 3.0;

/// Sample an elliptical pie slice into a polygon.
///
/// `radii` are the x/y half-extents of the oval the arc lies on. The
/// polygon starts at the oval center (the slice is always drawn with its
/// apex at the center) followed by the arc points. Returns an empty
/// polygon when the sweep has no extent.
pub fn wedge_polygon(center: Point, radii: Size, arc: SweepArc) -> Vec<Point> {
    if arc.sweep <= f32::EPSILON {
        return Vec::new();
    }

    let steps = (arc.sweep / ARC_STEP).ceil().max(1.0) as usize;
    let mut polygon = Vec::with_capacity(steps + 2);
    polygon.push(center);

    for i in 0..=steps {
        let angle = (arc.start + arc.sweep * i as f32 / steps as f32).to_radians();
        polygon.push(Point::new(
            center.x + radii.width * angle.cos(),
            center.y + radii.height * angle.sin(),
        ));
    }

    polygon
}

/// Intersect `subject` with the convex polygon `clip`.
///
/// Sutherland-Hodgman: the subject may be concave, the clip must be
/// convex. Returns the intersection polygon, which may be empty.
pub fn clip_polygon(subject: &[Point], clip: &[Point]) -> Vec<Point> {
    if subject.len() < 3 || clip.len() < 3 {
        return Vec::new();
    }

    // Normalize the inside test to the clip polygon's winding.
    let orientation = if signed_area(clip) >= 0.0 { 1.0 } else { -1.0 };

    let mut output = subject.to_vec();
    for i in 0..clip.len() {
        let edge_start = clip[i];
        let edge_end = clip[(i + 1) % clip.len()];

        let input = std::mem::take(&mut output);
        if input.is_empty() {
            break;
        }

        let mut previous = input[input.len() - 1];
        for &current in &input {
            let previous_inside = side(edge_start, edge_end, previous) * orientation >= 0.0;
            let current_inside = side(edge_start, edge_end, current) * orientation >= 0.0;

            if current_inside {
                if !previous_inside {
                    output.push(intersection(previous, current, edge_start, edge_end));
                }
                output.push(current);
            } else if previous_inside {
                output.push(intersection(previous, current, edge_start, edge_end));
            }

            previous = current;
        }
    }

    output
}

/// Twice the signed area of a polygon (shoelace).
fn signed_area(polygon: &[Point]) -> f32 {
    let mut area = 0.0;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        area += a.x * b.y - b.x * a.y;
    }
    area
}

/// Cross product sign of `p` relative to the directed edge `a -> b`.
fn side(a: Point, b: Point, p: Point) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Intersection of segment `p -> q` with the infinite line through `a -> b`.
fn intersection(p: Point, q: Point, a: Point, b: Point) -> Point {
    let segment = (q.x - p.x, q.y - p.y);
    let edge = (b.x - a.x, b.y - a.y);
    let denominator = segment.0 * edge.1 - segment.1 * edge.0;
    if denominator.abs() < f32::EPSILON {
        // Parallel within precision: either endpoint is on the edge.
        return q;
    }
    let t = ((a.x - p.x) * edge.1 - (a.y - p.y) * edge.0) / denominator;
    Point::new(p.x + segment.0 * t, p.y + segment.1 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::geometry::sweep;

    fn square(origin: f32, extent: f32) -> Vec<Point> {
        vec![
            Point::new(origin, origin),
            Point::new(origin + extent, origin),
            Point::new(origin + extent, origin + extent),
            Point::new(origin, origin + extent),
        ]
    }

    fn area(polygon: &[Point]) -> f32 {
        signed_area(polygon).abs() / 2.0
    }

    #[test]
    fn zero_sweep_yields_empty_wedge() {
        let closed = SweepArc {
            start: -90.0,
            sweep: 0.0,
        };
        let wedge = wedge_polygon(Point::new(100.0, 100.0), Size::new(50.0, 50.0), closed);
        assert!(wedge.is_empty());
    }

    #[test]
    fn wedge_vertices_lie_on_the_oval_or_center() {
        let center = Point::new(100.0, 120.0);
        let radii = Size::new(60.0, 80.0);
        let arc = sweep::sweep_angles(150.0);
        let wedge = wedge_polygon(center, radii, arc);

        assert_eq!(wedge[0], center);
        for point in &wedge[1..] {
            let nx = (point.x - center.x) / radii.width;
            let ny = (point.y - center.y) / radii.height;
            assert!((nx * nx + ny * ny - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn clipping_against_degenerate_polygons_is_empty() {
        let subject = square(0.0, 10.0);
        assert!(clip_polygon(&subject, &[]).is_empty());
        assert!(clip_polygon(&[], &subject).is_empty());
    }

    #[test]
    fn subject_inside_clip_is_unchanged_in_area() {
        let subject = square(4.0, 2.0);
        let clip = square(0.0, 10.0);
        let clipped = clip_polygon(&subject, &clip);
        assert!((area(&clipped) - area(&subject)).abs() < 1e-3);
    }

    #[test]
    fn overlapping_squares_intersect_to_the_shared_region() {
        let subject = square(0.0, 10.0);
        let clip = square(5.0, 10.0);
        let clipped = clip_polygon(&subject, &clip);
        // Shared region is the 5x5 square between (5,5) and (10,10).
        assert!((area(&clipped) - 25.0).abs() < 1e-3);
    }

    #[test]
    fn clip_winding_does_not_matter() {
        let subject = square(0.0, 10.0);
        let mut clip = square(5.0, 10.0);
        clip.reverse();
        let clipped = clip_polygon(&subject, &clip);
        assert!((area(&clipped) - 25.0).abs() < 1e-3);
    }

    #[test]
    fn disjoint_polygons_clip_to_nothing() {
        let subject = square(0.0, 4.0);
        let clip = square(100.0, 4.0);
        let clipped = clip_polygon(&subject, &clip);
        assert!(area(&clipped) < 1e-3);
    }

    #[test]
    fn clipped_region_stays_within_both_bounds() {
        let subject = square(0.0, 100.0);
        let center = Point::new(50.0, 50.0);
        let radii = Size::new(80.0, 80.0);
        let wedge = wedge_polygon(center, radii, sweep::sweep_angles(120.0));
        let clipped = clip_polygon(&subject, &wedge);

        assert!(clipped.len() >= 3);
        for point in &clipped {
            assert!(point.x >= -1e-3 && point.x <= 100.0 + 1e-3);
            assert!(point.y >= -1e-3 && point.y <= 100.0 + 1e-3);
            let nx = (point.x - center.x) / radii.width;
            let ny = (point.y - center.y) / radii.height;
            assert!(nx * nx + ny * ny <= 1.0 + 1e-2);
        }
    }
}
