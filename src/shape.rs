// ============================================================================
// DECLARATIVE SHAPES
// ============================================================================

use crate::color::Color;

/// Which way +y points in the dial's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YAxis {
    /// +y is screen-down, north projects to negative y.
    #[default]
    Down,
    /// +y is up, for dials composed inside a coordinate-flipped transform.
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate clockwise on a y-down screen.
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Raster,
}

/// One drawable element. Coordinates are relative to the dial centre until a
/// [`Scene`] is flattened.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        color: Color,
    },
    Polygon {
        points: Vec<Point>,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        anchor: TextAnchor,
        font_size: f64,
        color: Color,
    },
    /// Placeholder for an externally supplied picture; never decoded here.
    Image {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        /// Clockwise rotation about the rectangle centre, set by flattening.
        rotation: f64,
        source: String,
        format: ImageFormat,
    },
}

impl Shape {
    /// Every coordinate pair the shape is positioned by.
    pub fn points(&self) -> Vec<Point> {
        match self {
            Shape::Line { x1, y1, x2, y2, .. } => vec![Point::new(*x1, *y1), Point::new(*x2, *y2)],
            Shape::Polygon { points, .. } => points.clone(),
            Shape::Circle { cx, cy, .. } => vec![Point::new(*cx, *cy)],
            Shape::Text { x, y, .. } => vec![Point::new(*x, *y)],
            Shape::Image { x, y, w, h, .. } => {
                vec![Point::new(*x, *y), Point::new(x + w, y + h)]
            }
        }
    }

    /// Map every anchor point through `f`. Sizes, widths and text stay as
    /// they are; images keep their extent and move by their centre.
    fn map_points(&self, f: impl Fn(Point) -> Point) -> Shape {
        match self {
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke_width,
                color,
            } => {
                let a = f(Point::new(*x1, *y1));
                let b = f(Point::new(*x2, *y2));
                Shape::Line {
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y,
                    stroke_width: *stroke_width,
                    color: *color,
                }
            }
            Shape::Polygon {
                points,
                fill,
                stroke,
            } => Shape::Polygon {
                points: points.iter().map(|p| f(*p)).collect(),
                fill: *fill,
                stroke: *stroke,
            },
            Shape::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
            } => {
                let c = f(Point::new(*cx, *cy));
                Shape::Circle {
                    cx: c.x,
                    cy: c.y,
                    r: *r,
                    fill: *fill,
                    stroke: *stroke,
                }
            }
            Shape::Text {
                x,
                y,
                content,
                anchor,
                font_size,
                color,
            } => {
                let p = f(Point::new(*x, *y));
                Shape::Text {
                    x: p.x,
                    y: p.y,
                    content: content.clone(),
                    anchor: *anchor,
                    font_size: *font_size,
                    color: *color,
                }
            }
            Shape::Image {
                x,
                y,
                w,
                h,
                rotation,
                source,
                format,
            } => {
                let c = f(Point::new(x + w / 2.0, y + h / 2.0));
                Shape::Image {
                    x: c.x - w / 2.0,
                    y: c.y - h / 2.0,
                    w: *w,
                    h: *h,
                    rotation: *rotation,
                    source: source.clone(),
                    format: *format,
                }
            }
        }
    }
}

// ============================================================================
// LAYERS AND SCENE
// ============================================================================

/// Shapes sharing one rotation about the dial centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    /// Clockwise degrees. Rotating layers carry the unwrapped cumulative
    /// angle so a transitioning surface animates along the short arc.
    pub rotation: f64,
    pub shapes: Vec<Shape>,
}

impl Layer {
    pub fn fixed(name: &'static str, shapes: Vec<Shape>) -> Self {
        Self::rotated(name, 0.0, shapes)
    }

    pub fn rotated(name: &'static str, rotation: f64, shapes: Vec<Shape>) -> Self {
        let rotation = if rotation.is_finite() { rotation } else { 0.0 };
        Self {
            name,
            rotation,
            shapes,
        }
    }
}

/// Output of one render pass, layers ordered back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub y_axis: YAxis,
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn new(width: f64, height: f64, y_axis: YAxis) -> Self {
        Self {
            width,
            height,
            y_axis,
            layers: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// All shapes in draw order, still in local coordinates.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.layers.iter().flat_map(|l| l.shapes.iter())
    }

    /// Resolve layer rotations, the y convention and the centre offset into
    /// absolute screen-space shapes (y-down, origin top-left).
    pub fn flatten(&self) -> Vec<Shape> {
        let center = self.center();
        let flip = self.y_axis == YAxis::Up;
        let mut out = Vec::with_capacity(self.shapes().count());
        for layer in &self.layers {
            let rotation = layer.rotation;
            for shape in &layer.shapes {
                let mut placed = shape.map_points(|p| {
                    let p = if flip { Point::new(p.x, -p.y) } else { p };
                    p.rotated(rotation).offset(center)
                });
                if let Shape::Image { rotation: r, .. } = &mut placed {
                    *r += rotation;
                }
                out.push(placed);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tip() -> Shape {
        Shape::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: -10.0,
            stroke_width: 1.0,
            color: Color::BLACK,
        }
    }

    #[test]
    fn clockwise_quarter_turn_moves_north_to_east() {
        let p = Point::new(0.0, -10.0).rotated(90.0);
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn flatten_applies_rotation_and_centre() {
        let mut scene = Scene::new(100.0, 60.0, YAxis::Down);
        scene.push(Layer::rotated("needle", 450.0, vec![tip()]));
        let flat = scene.flatten();
        let pts = flat[0].points();
        assert_relative_eq!(pts[0].x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(pts[0].y, 30.0, epsilon = 1e-9);
        assert_relative_eq!(pts[1].x, 60.0, epsilon = 1e-9);
        assert_relative_eq!(pts[1].y, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn flatten_flips_up_axis_before_rotating() {
        let mut scene = Scene::new(0.0, 0.0, YAxis::Up);
        let north_up = Shape::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 10.0,
            stroke_width: 1.0,
            color: Color::BLACK,
        };
        scene.push(Layer::rotated("needle", 90.0, vec![north_up]));
        let pts = scene.flatten()[0].points();
        assert_relative_eq!(pts[1].x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(pts[1].y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn image_keeps_extent_and_accumulates_rotation() {
        let mut scene = Scene::new(20.0, 20.0, YAxis::Down);
        let img = Shape::Image {
            x: -2.0,
            y: -5.0,
            w: 4.0,
            h: 10.0,
            rotation: 0.0,
            source: "needle.png".into(),
            format: ImageFormat::Raster,
        };
        scene.push(Layer::rotated("needle", 30.0, vec![img]));
        match &scene.flatten()[0] {
            Shape::Image {
                x, y, w, h, rotation, ..
            } => {
                assert_relative_eq!(*x, 8.0, epsilon = 1e-9);
                assert_relative_eq!(*y, 5.0, epsilon = 1e-9);
                assert_eq!((*w, *h), (4.0, 10.0));
                assert_relative_eq!(*rotation, 30.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_finite_rotation_is_zeroed() {
        assert_eq!(Layer::rotated("x", f64::NAN, vec![]).rotation, 0.0);
    }
}
