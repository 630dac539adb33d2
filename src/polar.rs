//! Polar geometry for the instrument face.
//!
//! Angles are compass degrees: 0° is north (up) and positive angles turn
//! clockwise. Everything is built around the dial centre at the origin and
//! scaled from the dial radius, so the same calls serve any panel size.

use crate::color::Color;
use crate::geometry::{LabelConfig, TickBand};
use crate::shape::{ImageFormat, Point, Shape, Stroke, TextAnchor, YAxis};

const CARDINALS: [&str; 4] = ["N", "E", "S", "W"];

const CAP_FILL: Color = Color::WHITE;
const CAP_STROKE: Color = Color::new(0x11, 0x18, 0x27);

/// Hull outline in its own 45-unit-tall frame, y-down, bow at the top.
const HULL_HEIGHT: f64 = 45.0;
const HULL_START: (f64, f64) = (0.0, -30.0);
const HULL: [HullSegment; 6] = [
    HullSegment::Quad((8.0, -25.0), (8.0, 0.0)),
    HullSegment::Line((8.0, 23.0)),
    HullSegment::Quad((8.0, 25.0), (0.0, 25.0)),
    HullSegment::Quad((-8.0, 25.0), (-8.0, 23.0)),
    HullSegment::Line((-8.0, 0.0)),
    HullSegment::Quad((-8.0, -25.0), (0.0, -30.0)),
];
const CURVE_STEPS: usize = 8;

enum HullSegment {
    Line((f64, f64)),
    Quad((f64, f64), (f64, f64)),
}

/// Visual style of the primary direction indicator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NeedleKind {
    /// Two-tone compass needle.
    #[default]
    Needle,
    Arrow,
    /// Top-down ship hull.
    Ship,
    /// External SVG picture, URL or data URI.
    SvgImage(String),
    /// External raster picture, URL or data URI.
    RasterImage(String),
}

impl NeedleKind {
    /// Resolve a style name and the optional picture sources into a kind.
    /// Unknown names, and picture styles without a source, give the plain
    /// needle.
    pub fn from_options(style: Option<&str>, svg: Option<&str>, png: Option<&str>) -> Self {
        let source = |s: Option<&str>| s.map(str::trim).filter(|s| !s.is_empty()).map(String::from);
        match style.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("arrow") => NeedleKind::Arrow,
            Some("ship") => NeedleKind::Ship,
            Some("svg") => source(svg).map_or(NeedleKind::Needle, NeedleKind::SvgImage),
            Some("png") => source(png).map_or(NeedleKind::Needle, NeedleKind::RasterImage),
            _ => NeedleKind::Needle,
        }
    }
}

/// Paint for needle-family shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedleColors {
    pub needle: Color,
    pub tail: Color,
    pub outline: Color,
}

/// Stateless geometry generator for one dial of a given radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarRenderer {
    radius: f64,
    y_axis: YAxis,
}

impl PolarRenderer {
    /// A radius that is not a positive finite number is treated as 0.
    pub fn new(radius: f64, y_axis: YAxis) -> Self {
        let radius = if radius.is_finite() && radius > 0.0 {
            radius
        } else {
            0.0
        };
        Self { radius, y_axis }
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }

    /// Polar to cartesian: `x = r·sin θ`, `y = ∓r·cos θ` depending on the
    /// y convention. A non-finite radius or angle counts as 0.
    pub fn project(&self, r: f64, degrees: f64) -> Point {
        let r = finite_or_zero(r);
        let (sin, cos) = finite_or_zero(degrees).to_radians().sin_cos();
        self.local(r * sin, r * cos)
    }

    /// Point `across` to the right of and `along` toward north of the centre.
    fn local(&self, across: f64, along: f64) -> Point {
        match self.y_axis {
            YAxis::Down => Point::new(across, -along),
            YAxis::Up => Point::new(across, along),
        }
    }

    /// Fixed screen placement relative to the centre, independent of the y
    /// convention once the scene is flattened.
    pub fn place(&self, right: f64, down: f64) -> Point {
        self.local(right, -down)
    }

    fn nudged(&self, p: Point, drop: f64) -> Point {
        let d = self.local(0.0, -finite_or_zero(drop));
        Point::new(p.x + d.x, p.y + d.y)
    }

    // ------------------------------------------------------------------------
    // Ticks and labels
    // ------------------------------------------------------------------------

    /// `count` radial lines, one every `360 / count` degrees from north,
    /// running from `outer_frac·r` to `inner_frac·r`. Indices for which
    /// `skip` returns true are left out; the rest keep index order.
    pub fn ticks(
        &self,
        count: usize,
        inner_frac: f64,
        outer_frac: f64,
        skip: Option<&dyn Fn(usize) -> bool>,
        stroke_width_frac: f64,
        color: Color,
    ) -> Vec<Shape> {
        if count == 0 {
            return Vec::new();
        }
        let step = 360.0 / count as f64;
        let (inner_frac, outer_frac) = (finite_or_zero(inner_frac), finite_or_zero(outer_frac));
        let stroke_width = self.radius * finite_or_zero(stroke_width_frac);
        (0..count)
            .filter(|&i| !skip.is_some_and(|skip| skip(i)))
            .map(|i| {
                let angle = i as f64 * step;
                let outer = self.project(self.radius * outer_frac, angle);
                let inner = self.project(self.radius * inner_frac, angle);
                Shape::Line {
                    x1: outer.x,
                    y1: outer.y,
                    x2: inner.x,
                    y2: inner.y,
                    stroke_width,
                    color,
                }
            })
            .collect()
    }

    pub fn tick_band(
        &self,
        band: &TickBand,
        skip: Option<&dyn Fn(usize) -> bool>,
        color: Color,
    ) -> Vec<Shape> {
        self.ticks(
            band.count,
            band.inner,
            band.outer,
            skip,
            band.stroke_width,
            color,
        )
    }

    pub fn cardinal_labels(&self, labels: &LabelConfig, color: Color) -> Vec<Shape> {
        CARDINALS
            .iter()
            .enumerate()
            .map(|(i, dir)| {
                let p = self.project(self.radius * labels.radius, i as f64 * 90.0);
                let p = self.nudged(p, self.radius * labels.nudge);
                Shape::Text {
                    x: p.x,
                    y: p.y,
                    content: dir.to_string(),
                    anchor: TextAnchor::Middle,
                    font_size: self.radius * finite_or_zero(labels.font_size),
                    color,
                }
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Needles
    // ------------------------------------------------------------------------

    /// Indicator pointing north, to be rotated by its layer. A zero radius
    /// yields nothing, since the size floors would otherwise leave a visible
    /// speck.
    pub fn needle(&self, kind: &NeedleKind, colors: &NeedleColors) -> Vec<Shape> {
        if self.is_degenerate() {
            return Vec::new();
        }
        match kind {
            NeedleKind::Needle => self.plain_needle(colors),
            NeedleKind::Arrow => self.arrow_needle(colors),
            NeedleKind::Ship => vec![self.ship(colors.needle, colors.outline)],
            NeedleKind::SvgImage(src) if !src.trim().is_empty() => {
                vec![self.image(src, 10.0, ImageFormat::Svg)]
            }
            NeedleKind::RasterImage(src) if !src.trim().is_empty() => {
                vec![self.image(src, 20.0, ImageFormat::Raster)]
            }
            NeedleKind::SvgImage(_) | NeedleKind::RasterImage(_) => self.plain_needle(colors),
        }
    }

    fn plain_needle(&self, colors: &NeedleColors) -> Vec<Shape> {
        let r = self.radius;
        let len_n = r * 0.7;
        let len_s = r * 0.45;
        let half_w = (r * 0.06).max(2.0);
        let notch = (r * 0.08).max(3.0);

        let north = vec![
            self.local(0.0, len_n),
            self.local(half_w, 0.0),
            self.local(0.0, notch),
            self.local(-half_w, 0.0),
        ];
        let south = vec![
            self.local(0.0, -len_s),
            self.local(half_w, 0.0),
            self.local(0.0, -notch),
            self.local(-half_w, 0.0),
        ];
        vec![
            Shape::Polygon {
                points: north,
                fill: colors.needle,
                stroke: None,
            },
            Shape::Polygon {
                points: south,
                fill: colors.tail,
                stroke: None,
            },
            self.cap((r * 0.05).max(2.0), CAP_STROKE),
        ]
    }

    fn arrow_needle(&self, colors: &NeedleColors) -> Vec<Shape> {
        let r = self.radius;
        let len = r * 0.7;
        let head = r * 0.25;
        let half_w = r * 0.05;
        let tip_w = r * 0.1;
        let shoulder = len - head;

        let points = vec![
            self.local(-half_w, -shoulder),
            self.local(-half_w, shoulder),
            self.local(-tip_w, shoulder),
            self.local(0.0, len),
            self.local(tip_w, shoulder),
            self.local(half_w, shoulder),
            self.local(half_w, -shoulder),
        ];
        vec![
            Shape::Polygon {
                points,
                fill: colors.needle,
                stroke: Some(self.outline(colors.outline)),
            },
            self.cap((r * 0.025).max(2.0), colors.outline),
        ]
    }

    fn ship(&self, fill: Color, outline: Color) -> Shape {
        let scale = self.radius * 0.9 / HULL_HEIGHT;
        let mut hull = vec![HULL_START];
        let mut from = HULL_START;
        for segment in &HULL {
            match *segment {
                HullSegment::Line(to) => {
                    hull.push(to);
                    from = to;
                }
                HullSegment::Quad(ctrl, to) => {
                    hull.extend((1..=CURVE_STEPS).map(|step| {
                        quad_point(from, ctrl, to, step as f64 / CURVE_STEPS as f64)
                    }));
                    from = to;
                }
            }
        }
        // the outline closes back onto its start
        if hull.len() > 1 && hull.last() == hull.first() {
            hull.pop();
        }

        Shape::Polygon {
            points: hull
                .into_iter()
                .map(|(x, y)| self.local(x * scale, -y * scale))
                .collect(),
            fill,
            stroke: Some(Stroke {
                color: outline,
                width: (self.radius * 0.005).max(0.5),
            }),
        }
    }

    /// Picture placeholder `units_wide` × 50 units, scaled by r/50 and
    /// centred on the pivot.
    fn image(&self, source: &str, units_wide: f64, format: ImageFormat) -> Shape {
        let scale = self.radius / 50.0;
        let (w, h) = (units_wide * scale, 50.0 * scale);
        Shape::Image {
            x: -w / 2.0,
            y: -h / 2.0,
            w,
            h,
            rotation: 0.0,
            source: source.to_string(),
            format,
        }
    }

    fn cap(&self, r: f64, stroke: Color) -> Shape {
        Shape::Circle {
            cx: 0.0,
            cy: 0.0,
            r,
            fill: CAP_FILL,
            stroke: Some(Stroke {
                color: stroke,
                width: (self.radius * 0.01).max(1.0),
            }),
        }
    }

    fn outline(&self, color: Color) -> Stroke {
        Stroke {
            color,
            width: (self.radius * 0.01).max(1.0),
        }
    }

    // ------------------------------------------------------------------------
    // Wind arrows
    // ------------------------------------------------------------------------

    /// Notched arrowhead from 0.4·r out to the rim at `angle_deg`, with
    /// `label` on the same ray at 0.75·r.
    pub fn wind_arrow(&self, angle_deg: f64, label: &str, fill: Color, text: Color) -> Vec<Shape> {
        const HALF_SPREAD_DEG: f64 = 0.1 * 180.0 / std::f64::consts::PI;
        let r = self.radius;
        let angle_deg = finite_or_zero(angle_deg);
        let inner = self.project(r * 0.4, angle_deg);
        let right = self.project(r * 0.9, angle_deg + HALF_SPREAD_DEG);
        let notch = self.project(r * 0.85, angle_deg);
        let left = self.project(r * 0.9, angle_deg - HALF_SPREAD_DEG);
        let anchor = self.nudged(self.project(r * 0.75, angle_deg), r * 0.025);

        vec![
            Shape::Polygon {
                points: vec![inner, right, notch, left],
                fill,
                stroke: Some(Stroke {
                    color: text,
                    width: if self.is_degenerate() { 0.0 } else { 1.0 },
                }),
            },
            Shape::Text {
                x: anchor.x,
                y: anchor.y,
                content: label.to_string(),
                anchor: TextAnchor::Middle,
                font_size: r * 0.075,
                color: text,
            },
        ]
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

fn quad_point(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64), t: f64) -> (f64, f64) {
    let u = 1.0 - t;
    (
        u * u * p0.0 + 2.0 * u * t * p1.0 + t * t * p2.0,
        u * u * p0.1 + 2.0 * u * t * p1.1 + t * t * p2.1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DialGeometry;
    use approx::assert_relative_eq;

    const COLORS: NeedleColors = NeedleColors {
        needle: Color::new(0xff, 0, 0),
        tail: Color::new(0x80, 0x80, 0x80),
        outline: Color::BLACK,
    };

    fn line_angle(shape: &Shape) -> f64 {
        match shape {
            Shape::Line { x1, y1, .. } => x1.atan2(-y1).to_degrees().rem_euclid(360.0),
            other => panic!("expected a line, got {other:?}"),
        }
    }

    fn all_coordinates(shapes: &[Shape]) -> Vec<f64> {
        shapes
            .iter()
            .flat_map(|s| s.points())
            .flat_map(|p| [p.x, p.y])
            .collect()
    }

    #[test]
    fn projection_conventions() {
        let down = PolarRenderer::new(100.0, YAxis::Down);
        let up = PolarRenderer::new(100.0, YAxis::Up);

        let n = down.project(10.0, 0.0);
        assert_relative_eq!(n.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(n.y, -10.0, epsilon = 1e-9);
        assert_relative_eq!(up.project(10.0, 0.0).y, 10.0, epsilon = 1e-9);

        for r in [&down, &up] {
            let e = r.project(10.0, 90.0);
            assert_relative_eq!(e.x, 10.0, epsilon = 1e-9);
            assert_relative_eq!(e.y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn ticks_cover_the_circle_in_index_order() {
        let r = PolarRenderer::new(100.0, YAxis::Down);
        let ticks = r.ticks(48, 0.8, 0.86, None, 0.01, Color::BLACK);
        assert_eq!(ticks.len(), 48);
        for (i, tick) in ticks.iter().enumerate() {
            let expected = i as f64 * 7.5;
            let got = line_angle(tick);
            let diff = (got - expected).abs();
            assert!(diff < 1e-6 || (diff - 360.0).abs() < 1e-6, "{i}: {got}");
        }
        match &ticks[0] {
            Shape::Line {
                y1, y2, stroke_width, ..
            } => {
                assert_relative_eq!(*y1, -86.0, epsilon = 1e-9);
                assert_relative_eq!(*y2, -80.0, epsilon = 1e-9);
                assert_relative_eq!(*stroke_width, 1.0, epsilon = 1e-9);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn skipped_ticks_are_omitted() {
        let r = PolarRenderer::new(100.0, YAxis::Down);
        let skip = |i: usize| i % 12 == 0;
        let ticks = r.ticks(48, 0.8, 0.86, Some(&skip), 0.01, Color::BLACK);
        assert_eq!(ticks.len(), 44);
        assert_relative_eq!(line_angle(&ticks[0]), 7.5, epsilon = 1e-6);
        assert!(r.ticks(0, 0.8, 0.86, None, 0.01, Color::BLACK).is_empty());
    }

    #[test]
    fn ticks_are_deterministic() {
        let r = PolarRenderer::new(123.4, YAxis::Up);
        let a = r.ticks(8, 0.72, 0.86, None, 0.02, Color::BLACK);
        let b = r.ticks(8, 0.72, 0.86, None, 0.02, Color::BLACK);
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_needle_kind_is_plain_needle() {
        let r = PolarRenderer::new(100.0, YAxis::Down);
        let plain = r.needle(&NeedleKind::Needle, &COLORS);
        for kind in [
            NeedleKind::from_options(Some("banana"), None, None),
            NeedleKind::from_options(None, None, None),
            NeedleKind::from_options(Some("svg"), None, None),
            NeedleKind::from_options(Some("png"), Some("x.svg"), Some("   ")),
        ] {
            assert_eq!(kind, NeedleKind::Needle);
            assert_eq!(r.needle(&kind, &COLORS), plain);
        }
        assert_eq!(r.needle(&NeedleKind::SvgImage(String::new()), &COLORS), plain);
    }

    #[test]
    fn needle_kinds_resolve_case_insensitively() {
        assert_eq!(NeedleKind::from_options(Some("Arrow"), None, None), NeedleKind::Arrow);
        assert_eq!(NeedleKind::from_options(Some("ship"), None, None), NeedleKind::Ship);
        assert_eq!(
            NeedleKind::from_options(Some("png"), None, Some(" data:image/png;base64,AA ")),
            NeedleKind::RasterImage("data:image/png;base64,AA".into())
        );
    }

    #[test]
    fn plain_needle_scales_with_radius() {
        let r = PolarRenderer::new(100.0, YAxis::Down);
        let shapes = r.needle(&NeedleKind::Needle, &COLORS);
        assert_eq!(shapes.len(), 3);
        match &shapes[0] {
            Shape::Polygon { points, fill, .. } => {
                assert_eq!(*fill, COLORS.needle);
                assert_relative_eq!(points[0].y, -70.0, epsilon = 1e-9);
                assert_relative_eq!(points[1].x, 6.0, epsilon = 1e-9);
            }
            _ => panic!("north half should be a polygon"),
        }
        match &shapes[1] {
            Shape::Polygon { points, fill, .. } => {
                assert_eq!(*fill, COLORS.tail);
                assert_relative_eq!(points[0].y, 45.0, epsilon = 1e-9);
            }
            _ => panic!("south half should be a polygon"),
        }
    }

    #[test]
    fn small_dials_keep_a_visible_needle() {
        let r = PolarRenderer::new(10.0, YAxis::Down);
        match &r.needle(&NeedleKind::Needle, &COLORS)[0] {
            Shape::Polygon { points, .. } => assert_relative_eq!(points[1].x, 2.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn arrow_tip_points_north() {
        let r = PolarRenderer::new(100.0, YAxis::Down);
        let shapes = r.needle(&NeedleKind::Arrow, &COLORS);
        match &shapes[0] {
            Shape::Polygon { points, .. } => {
                assert_eq!(points.len(), 7);
                let tip = points
                    .iter()
                    .min_by(|a, b| a.y.total_cmp(&b.y))
                    .copied()
                    .unwrap_or_default();
                assert_relative_eq!(tip.x, 0.0, epsilon = 1e-9);
                assert_relative_eq!(tip.y, -70.0, epsilon = 1e-9);
            }
            _ => panic!("arrow should be a polygon"),
        }
    }

    #[test]
    fn ship_hull_spans_its_scaled_height() {
        let r = PolarRenderer::new(90.0, YAxis::Down);
        let shapes = r.needle(&NeedleKind::Ship, &COLORS);
        assert_eq!(shapes.len(), 1);
        let ys: Vec<f64> = shapes[0].points().iter().map(|p| p.y).collect();
        let top = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        let bottom = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        // 90 * 0.9 / 45 = 1.8 px per hull unit
        assert_relative_eq!(top, -54.0, epsilon = 1e-9);
        assert_relative_eq!(bottom, 45.0, epsilon = 1e-9);
        assert_ne!(shapes[0].points().first(), shapes[0].points().last());
    }

    #[test]
    fn image_needles_are_centred_placeholders() {
        let r = PolarRenderer::new(100.0, YAxis::Down);
        let shapes = r.needle(&NeedleKind::RasterImage("needle.png".into()), &COLORS);
        assert_eq!(
            shapes,
            vec![Shape::Image {
                x: -20.0,
                y: -50.0,
                w: 40.0,
                h: 100.0,
                rotation: 0.0,
                source: "needle.png".into(),
                format: ImageFormat::Raster,
            }]
        );
        match &r.needle(&NeedleKind::SvgImage("n.svg".into()), &COLORS)[0] {
            Shape::Image { w, format, .. } => {
                assert_relative_eq!(*w, 20.0);
                assert_eq!(*format, ImageFormat::Svg);
            }
            _ => panic!("expected an image"),
        }
    }

    #[test]
    fn wind_arrow_points_along_its_ray() {
        let r = PolarRenderer::new(100.0, YAxis::Down);
        let shapes = r.wind_arrow(90.0, "T", Color::WHITE, Color::BLACK);
        match &shapes[0] {
            Shape::Polygon { points, .. } => {
                assert_relative_eq!(points[0].x, 40.0, epsilon = 1e-9);
                assert_relative_eq!(points[2].x, 85.0, epsilon = 1e-9);
                assert!(points[1].y > 0.0 && points[3].y < 0.0);
            }
            _ => panic!("expected the arrowhead first"),
        }
        match &shapes[1] {
            Shape::Text { x, y, content, .. } => {
                assert_eq!(content, "T");
                assert_relative_eq!(*x, 75.0, epsilon = 1e-9);
                assert_relative_eq!(*y, 2.5, epsilon = 1e-9);
            }
            _ => panic!("expected the label second"),
        }
    }

    #[test]
    fn labels_follow_the_compass_points() {
        let r = PolarRenderer::new(100.0, YAxis::Down);
        let geometry = DialGeometry::default().with_label_nudge(0.04);
        let labels = r.cardinal_labels(&geometry.labels, Color::BLACK);
        let content: Vec<_> = labels
            .iter()
            .map(|l| match l {
                Shape::Text { content, .. } => content.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(content, ["N", "E", "S", "W"]);
        match &labels[0] {
            Shape::Text { y, font_size, .. } => {
                assert_relative_eq!(*y, -76.0, epsilon = 1e-9);
                assert_relative_eq!(*font_size, 12.0, epsilon = 1e-9);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn degenerate_radius_never_panics() {
        for radius in [0.0, -25.0, f64::NAN, f64::NEG_INFINITY] {
            let r = PolarRenderer::new(radius, YAxis::Down);
            assert!(r.is_degenerate());

            let ticks = r.ticks(48, 0.8, 0.86, None, 0.01, Color::BLACK);
            assert_eq!(ticks.len(), 48);
            assert!(all_coordinates(&ticks).iter().all(|c| *c == 0.0));

            for kind in [NeedleKind::Needle, NeedleKind::Arrow, NeedleKind::Ship] {
                assert!(r.needle(&kind, &COLORS).is_empty());
            }

            let arrow = r.wind_arrow(123.0, "A", Color::WHITE, Color::BLACK);
            assert!(all_coordinates(&arrow).iter().all(|c| *c == 0.0));

            let labels = r.cardinal_labels(&DialGeometry::default().labels, Color::BLACK);
            assert!(all_coordinates(&labels).iter().all(|c| *c == 0.0));
        }
    }

    #[test]
    fn non_finite_inputs_never_reach_coordinates() {
        let r = PolarRenderer::new(100.0, YAxis::Down);
        let finite = |shapes: &[Shape]| all_coordinates(shapes).iter().all(|c| c.is_finite());

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let arrow = r.wind_arrow(bad, "T", Color::WHITE, Color::BLACK);
            assert!(finite(&arrow), "wind arrow at {bad}");
            // falls back to north
            assert_eq!(arrow, r.wind_arrow(0.0, "T", Color::WHITE, Color::BLACK));

            let ticks = r.ticks(8, bad, 0.86, None, bad, Color::BLACK);
            assert!(finite(&ticks), "ticks with {bad}");
            assert!(ticks.iter().all(|t| matches!(t, Shape::Line { stroke_width, .. } if *stroke_width == 0.0)));

            let p = r.project(bad, bad);
            assert_eq!((p.x, p.y), (0.0, 0.0));

            let labels = LabelConfig {
                radius: bad,
                font_size: bad,
                nudge: bad,
            };
            assert!(finite(&r.cardinal_labels(&labels, Color::BLACK)));
        }
    }
}
