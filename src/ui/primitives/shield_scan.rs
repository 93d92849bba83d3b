//! Animated shield scan primitive
//!
//! A shield silhouette with a radar-style sweep, a pulsing outline ring,
//! and a centered percent label, rendered with iced's Canvas.
//!
//! # Design
//!
//! This is a primitive component that implements the `canvas::Program`
//! trait. All geometry is precomputed by pure functions
//! ([`crate::ui::geometry`], [`crate::ui::animation`]); `draw` only maps
//! the results onto the frame. Every transform is applied inside a saved
//! frame scope and recomputed per call from the live bounds, so resizes
//! never accumulate error.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, Text};
use iced::{Color, Element, Pixels, Point, Renderer, Size, Theme, Vector, mouse};

use crate::ui::animation::PulseFrame;
use crate::ui::artwork::{ARTWORK, Artwork};
use crate::ui::geometry::{clip, sweep, transform};

/// Percent label height relative to the rendered shield height
const LABEL_FACTOR: f32 = 0.14;

/// Opacity of the shading overlays
const SHADE_ALPHA: f32 = 0.5;

/// Opacity of the sweep wedge
const SWEEP_ALPHA: f32 = 0.3;

/// Shield scan configuration
#[derive(Debug, Clone, Copy)]
pub struct ShieldScan {
    /// Percent shown in the label (0 - 100)
    pub percent: u8,
    /// Backdrop and wedge tint
    pub scan_color: Color,
    /// Pulse values for this frame
    pub pulse: PulseFrame,
}

impl ShieldScan {
    pub fn new(percent: u8, scan_color: Color, pulse: PulseFrame) -> Self {
        Self {
            percent: percent.min(100),
            scan_color,
            pulse,
        }
    }
}

impl<Message> Program<Message> for ShieldScan {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let artwork: &Artwork = &ARTWORK;

        // Backdrop tint behind the white silhouette
        frame.fill_rectangle(Point::ORIGIN, frame.size(), self.scan_color);

        // Shield body and shading, in body space
        let body = transform::fit(frame.size(), artwork.body_bounds);
        frame.with_save(|frame| {
            frame.scale(body.ratio);
            frame.translate(body.offset);
            draw_shield(frame, artwork);
        });

        // Sweep wedge and pulse ring share the clip space
        let silhouette = transform::fit(frame.size(), artwork.clip_bounds);
        frame.with_save(|frame| {
            frame.scale(silhouette.ratio);
            frame.translate(silhouette.offset);
            draw_sweep(frame, artwork, self.pulse.sweep_phase);
        });
        frame.with_save(|frame| {
            frame.scale(silhouette.ratio);
            frame.translate(silhouette.offset);
            draw_pulse_ring(frame, artwork, self.pulse);
        });

        // The label is positioned through the same mapping as the body so
        // it stays centered in the artwork at any surface size.
        let label_size = artwork.body_bounds.height * body.ratio * LABEL_FACTOR;
        frame.fill_text(Text {
            content: percent_text(self.percent),
            position: body.apply(artwork.body_center()),
            color: Color::WHITE,
            size: Pixels(label_size),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}

/// Fill the shield body and its two shading overlays.
fn draw_shield(frame: &mut Frame, artwork: &Artwork) {
    let shade = Color {
        a: SHADE_ALPHA,
        ..Color::WHITE
    };
    frame.fill(&canvas_path(&artwork.body), Color::WHITE);
    frame.fill(&canvas_path(&artwork.shade_lower), shade);
    frame.fill(&canvas_path(&artwork.shade_upper), shade);
}

/// Fill the part of the radar wedge that falls inside the silhouette.
fn draw_sweep(frame: &mut Frame, artwork: &Artwork, phase: f32) {
    let arc = sweep::wedge_for_phase(phase);
    if arc.sweep <= f32::EPSILON {
        return;
    }

    let bounds = artwork.clip_bounds;
    let inset = bounds.width.min(bounds.height) / 4.0;
    let radii = Size::new(bounds.width / 2.0 + inset, bounds.height / 2.0 + inset);

    let wedge = clip::wedge_polygon(artwork.clip_center(), radii, arc);
    let region = clip::clip_polygon(&artwork.clip_polygon, &wedge);
    if region.len() < 3 {
        return;
    }

    let overlay = Color {
        a: SWEEP_ALPHA,
        ..Color::WHITE
    };
    frame.fill(&polygon_path(&region), overlay);
}

/// Stroke the silhouette outline, expanding and fading over the cycle.
fn draw_pulse_ring(frame: &mut Frame, artwork: &Artwork, pulse: PulseFrame) {
    if pulse.ring_alpha <= 0.01 {
        return;
    }

    let pivot = artwork.clip_center();
    frame.translate(Vector::new(pivot.x, pivot.y));
    frame.scale(pulse.scale);
    frame.translate(Vector::new(-pivot.x, -pivot.y));

    let ring = Color {
        a: pulse.ring_alpha,
        ..Color::WHITE
    };
    frame.stroke(
        &canvas_path(&artwork.clip),
        Stroke::default()
            .with_width(pulse.stroke_width)
            .with_color(ring),
    );
}

/// Convert parsed artwork geometry into a canvas path.
fn canvas_path(path: &kurbo::BezPath) -> Path {
    Path::new(|builder| {
        for element in path.elements() {
            match element {
                kurbo::PathEl::MoveTo(p) => builder.move_to(to_point(*p)),
                kurbo::PathEl::LineTo(p) => builder.line_to(to_point(*p)),
                kurbo::PathEl::QuadTo(control, p) => {
                    builder.quadratic_curve_to(to_point(*control), to_point(*p));
                }
                kurbo::PathEl::CurveTo(control_a, control_b, p) => {
                    builder.bezier_curve_to(
                        to_point(*control_a),
                        to_point(*control_b),
                        to_point(*p),
                    );
                }
                kurbo::PathEl::ClosePath => builder.close(),
            }
        }
    })
}

/// Build a closed canvas path from polygon vertices.
fn polygon_path(polygon: &[Point]) -> Path {
    Path::new(|builder| {
        builder.move_to(polygon[0]);
        for point in &polygon[1..] {
            builder.line_to(*point);
        }
        builder.close();
    })
}

fn to_point(p: kurbo::Point) -> Point {
    Point::new(p.x as f32, p.y as f32)
}

/// Label rendered inside the shield.
fn percent_text(percent: u8) -> String {
    format!("{}%", percent)
}

/// Create a shield scan element with a square layout
pub fn view_shield_scan<'a, Message: 'a>(scan: ShieldScan, size: f32) -> Element<'a, Message> {
    Canvas::new(scan).width(size).height(size).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::progress;

    #[test]
    fn label_matches_the_progress_fraction() {
        assert_eq!(percent_text(progress::percent(0.54)), "54%");
        assert_eq!(percent_text(progress::percent(0.0)), "0%");
        assert_eq!(percent_text(progress::percent(1.0)), "100%");
    }

    #[test]
    fn percent_is_capped_by_construction() {
        let scan = ShieldScan::new(150, Color::WHITE, crate::ui::animation::pulse_frame(0.2));
        assert_eq!(scan.percent, 100);
    }
}
