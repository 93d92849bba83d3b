//! Static shield artwork
//!
//! Four fixed outlines authored as SVG path data: the shield body, two
//! shading overlays, and the slightly larger silhouette the radar sweep
//! is clipped to. They are parsed once into `kurbo` geometry at first use
//! and treated as immutable constants from then on; only the derived
//! bounds and the flattened clip polygon are consumed per frame.

use iced::{Point, Rectangle};
use kurbo::Shape;
use once_cell::sync::Lazy;

/// Curve flattening tolerance in artwork units
const FLATTEN_TOLERANCE: f64 = 0.25;

pub const SHIELD_BODY: &str = "M215.865,31.266C181.852,25.51 149.016,15.829 117.488,1.57C115.264,0.523 113.17,0 110.946,0C108.853,0 106.629,0.523 104.405,1.57C73.008,15.829 40.172,25.51 6.158,31.266C1.841,32.051 0.01,33.621 0.01,38.461C-0.252,74.699 4.719,110.152 17.802,144.035C34.808,188.645 62.673,224.359 104.798,248.168C107.022,249.477 109.115,250 111.077,250C113.04,250 115.133,249.346 117.357,248.168C159.481,224.359 187.215,188.645 204.353,144.035C217.304,110.021 222.276,74.699 222.145,38.461C222.014,33.621 220.313,32.051 215.865,31.266ZM214.688,64.103C212.726,94.061 206.577,123.103 194.672,150.706C178.581,187.86 154.248,218.08 119.45,239.665C116.31,241.627 113.694,242.543 110.946,242.543C108.199,242.543 105.583,241.627 102.443,239.665C67.775,218.08 43.312,187.991 27.221,150.706C15.447,123.103 9.298,94.191 7.336,64.103C6.812,56.907 6.289,49.843 6.158,42.517C6.158,39.116 7.205,37.546 10.868,36.892C44.358,30.612 76.802,21.193 107.807,7.064C108.984,6.541 110.031,6.41 111.077,6.541C112.124,6.541 113.04,6.672 114.217,7.195C145.222,21.324 177.796,30.874 211.156,37.022C214.688,37.677 215.865,39.116 215.865,42.648C215.735,49.843 215.211,56.907 214.688,64.103Z";

pub const SHADE_LOWER: &str = "M63.589,172.945C97.472,172.029 126.383,161.433 145.745,131.606C150.847,123.756 154.772,115.253 157.519,106.226C158.696,102.171 160.659,100.601 165.106,101.909C174.002,104.395 183.029,105.049 192.317,105.31C196.504,105.441 198.858,107.011 197.55,111.851C185.253,159.994 161.313,200.287 119.057,228.283C113.432,232.076 109.115,232.207 103.228,228.413C83.474,215.331 67.514,198.586 54.039,179.355C52.992,177.786 50.899,176.216 51.815,174.253C52.731,172.029 55.216,173.207 57.048,173.076C59.141,172.814 61.365,172.945 63.589,172.945Z";

pub const SHADE_UPPER: &str = "M205.923,57.823C205.269,63.71 204.353,73.26 203.437,82.81C203.176,86.211 201.475,87.781 197.943,87.781C187.477,87.912 177.142,86.604 166.807,84.38C164.06,83.726 162.752,82.548 163.013,79.409C164.322,66.85 165.368,54.291 164.06,41.601C163.406,35.845 165.761,34.929 170.994,36.368C180.805,39.377 190.748,41.601 200.821,43.432C206.185,44.479 206.185,44.741 205.923,57.823Z";

pub const SCAN_CLIP: &str = "M41.35,71.472C76.586,68.497 128.82,47.918 150.533,38C200.162,63.414 252.272,70.232 259.716,71.472C262.818,222.096 167.283,281.602 150.533,286.561C36.387,232.014 41.35,75.191 41.35,71.472Z";

/// Parsed shield artwork shared by every widget instance
pub static ARTWORK: Lazy<Artwork> =
    Lazy::new(|| Artwork::parse().expect("packaged shield path data parses"));

/// The four outlines plus their derived geometry.
#[derive(Debug, Clone)]
pub struct Artwork {
    pub body: kurbo::BezPath,
    pub shade_lower: kurbo::BezPath,
    pub shade_upper: kurbo::BezPath,
    pub clip: kurbo::BezPath,
    /// Axis-aligned bounds of the body outline
    pub body_bounds: Rectangle,
    /// Axis-aligned bounds of the clip outline
    pub clip_bounds: Rectangle,
    /// Clip outline flattened for sweep clipping
    pub clip_polygon: Vec<Point>,
}

impl Artwork {
    /// Parse the packaged path constants.
    pub fn parse() -> Result<Self, kurbo::SvgParseError> {
        let body = kurbo::BezPath::from_svg(SHIELD_BODY)?;
        let shade_lower = kurbo::BezPath::from_svg(SHADE_LOWER)?;
        let shade_upper = kurbo::BezPath::from_svg(SHADE_UPPER)?;
        let clip = kurbo::BezPath::from_svg(SCAN_CLIP)?;

        let body_bounds = to_rectangle(body.bounding_box());
        let clip_bounds = to_rectangle(clip.bounding_box());
        let clip_polygon = flatten(&clip, FLATTEN_TOLERANCE);

        Ok(Self {
            body,
            shade_lower,
            shade_upper,
            clip,
            body_bounds,
            clip_bounds,
            clip_polygon,
        })
    }

    /// Center of the body outline, where the percent label sits.
    pub fn body_center(&self) -> Point {
        center_of(self.body_bounds)
    }

    /// Center of the clip outline, the pivot of the pulse ring.
    pub fn clip_center(&self) -> Point {
        center_of(self.clip_bounds)
    }
}

/// Flatten a path into a polyline with the given tolerance.
pub fn flatten(path: &kurbo::BezPath, tolerance: f64) -> Vec<Point> {
    let mut points = Vec::new();
    path.flatten(tolerance, |element| match element {
        kurbo::PathEl::MoveTo(p) | kurbo::PathEl::LineTo(p) => {
            points.push(Point::new(p.x as f32, p.y as f32));
        }
        _ => {}
    });
    points
}

fn center_of(bounds: Rectangle) -> Point {
    Point::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0)
}

fn to_rectangle(rect: kurbo::Rect) -> Rectangle {
    Rectangle {
        x: rect.x0 as f32,
        y: rect.y0 as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}
