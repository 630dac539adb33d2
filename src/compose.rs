// ============================================================================
// INSTRUMENT COMPOSITION
// ============================================================================
//
// Turns tracked angles plus static options into a layered scene. Composition
// holds no memory of its own; the only state is the unwrappers owned by the
// display types at the bottom of this file.

use std::collections::HashMap;

use bon::Builder;

use crate::color::{Color, ColorResolver};
use crate::geometry::DialGeometry;
use crate::polar::{NeedleColors, NeedleKind, PolarRenderer};
use crate::shape::{Layer, Scene, Shape, Stroke, TextAnchor, YAxis};
use crate::unwrap::AngleUnwrapper;

const DEFAULT_TEXT: &str = "#111827";
const DEFAULT_NEEDLE: &str = "red";
const DEFAULT_TAIL: &str = "gray";
const DEFAULT_DIAL: &str = "white";
const DEFAULT_BEZEL: &str = "#c6c6c6";
const DEFAULT_SHIP: &str = "red";
const DEFAULT_TRUE_WIND: &str = "blue";
const DEFAULT_APPARENT_WIND: &str = "yellow";

const BEZEL_RIM: Color = Color::new(0x9c, 0xa3, 0xaf);
// drops baseline-anchored labels onto the label circle
const LABEL_NUDGE: f64 = 0.04;

/// Which part of the wind rose turns with the ship's heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// North-up: the dial stays put and the ship turns.
    #[default]
    RotateShip,
    /// Bow-up: the ship points up and the dial turns beneath it.
    RotateDial,
}

impl RotationMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rotate-ship" | "ship" | "north-up" => Some(RotationMode::RotateShip),
            "rotate-dial" | "dial" | "bow-up" => Some(RotationMode::RotateDial),
            _ => None,
        }
    }
}

/// Host-provided options for either display.
#[derive(Debug, Clone, Builder)]
pub struct DialOptions {
    #[builder(into)]
    pub heading_field: Option<String>,
    #[builder(into)]
    pub true_wind_field: Option<String>,
    #[builder(into)]
    pub apparent_wind_field: Option<String>,

    // Colors, by name or hex
    #[builder(into)]
    pub text_color: Option<String>,
    #[builder(into)]
    pub needle_color: Option<String>,
    #[builder(into)]
    pub tail_color: Option<String>,
    #[builder(into)]
    pub dial_color: Option<String>,
    #[builder(into)]
    pub bezel_color: Option<String>,
    #[builder(into)]
    pub ship_color: Option<String>,
    #[builder(into)]
    pub true_wind_color: Option<String>,
    #[builder(into)]
    pub apparent_wind_color: Option<String>,

    #[builder(default = true)]
    pub show_labels: bool,
    #[builder(default = true)]
    pub show_heading_value: bool,

    // Needle style: needle, arrow, ship, svg or png
    #[builder(into)]
    pub needle_type: Option<String>,
    #[builder(into)]
    pub needle_svg: Option<String>,
    #[builder(into)]
    pub needle_png: Option<String>,

    #[builder(default)]
    pub rotation_mode: RotationMode,
    #[builder(default)]
    pub y_axis: YAxis,
}

impl Default for DialOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DialOptions {
    pub fn needle_kind(&self) -> NeedleKind {
        NeedleKind::from_options(
            self.needle_type.as_deref(),
            self.needle_svg.as_deref(),
            self.needle_png.as_deref(),
        )
    }

    pub fn colors(&self, resolver: &dyn ColorResolver) -> FaceColors {
        let pick = |value: &Option<String>, default: &str| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .and_then(|v| resolver.resolve(v))
                .or_else(|| resolver.resolve(default))
                .unwrap_or(Color::BLACK)
        };
        FaceColors {
            text: pick(&self.text_color, DEFAULT_TEXT),
            needle: pick(&self.needle_color, DEFAULT_NEEDLE),
            tail: pick(&self.tail_color, DEFAULT_TAIL),
            dial: pick(&self.dial_color, DEFAULT_DIAL),
            bezel: pick(&self.bezel_color, DEFAULT_BEZEL),
            ship: pick(&self.ship_color, DEFAULT_SHIP),
            true_wind: pick(&self.true_wind_color, DEFAULT_TRUE_WIND),
            apparent_wind: pick(&self.apparent_wind_color, DEFAULT_APPARENT_WIND),
        }
    }
}

/// Options resolved to concrete colors for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceColors {
    pub text: Color,
    pub needle: Color,
    pub tail: Color,
    pub dial: Color,
    pub bezel: Color,
    pub ship: Color,
    pub true_wind: Color,
    pub apparent_wind: Color,
}

// ============================================================================
// TRACKED ANGLES
// ============================================================================

/// A raw sample together with its unwrapped display angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing {
    /// As reported, used for the numeric readout.
    pub raw: f64,
    /// Unwrapped, used for rotation.
    pub display: f64,
}

impl Bearing {
    pub fn readout(&self) -> String {
        format_readout(self.raw)
    }
}

/// Integer degrees in [0, 360) followed by a degree sign.
pub fn format_readout(raw: f64) -> String {
    let raw = if raw.is_finite() { raw } else { 0.0 };
    let degrees = (((raw % 360.0) + 360.0) % 360.0).round() as i64 % 360;
    format!("{degrees}°")
}

/// One quantity followed across frames.
#[derive(Debug, Clone, Default)]
pub struct TrackedAngle {
    unwrapper: Option<AngleUnwrapper>,
    last: Option<Bearing>,
}

impl TrackedAngle {
    /// Feed this frame's sample. The first present sample seeds the
    /// unwrapper, an absent one detaches it, and a non-finite one leaves the
    /// previous bearing in place.
    pub fn observe(&mut self, raw: Option<f64>) -> Option<Bearing> {
        match raw {
            None => {
                self.unwrapper = None;
                self.last = None;
            }
            Some(raw) if !raw.is_finite() => {}
            Some(raw) => {
                let display = match self.unwrapper.as_mut() {
                    Some(unwrapper) => unwrapper.update(raw),
                    None => {
                        let unwrapper = AngleUnwrapper::new(raw);
                        self.unwrapper = Some(unwrapper);
                        unwrapper.cumulative()
                    }
                };
                self.last = Some(Bearing { raw, display });
            }
        }
        self.last
    }

    pub fn is_attached(&self) -> bool {
        self.unwrapper.is_some()
    }
}

/// Latest raw value for a named field, supplied by the host data layer.
pub trait AngleSource {
    fn latest(&self, field: &str) -> Option<f64>;
}

impl AngleSource for HashMap<String, f64> {
    fn latest(&self, field: &str) -> Option<f64> {
        self.get(field).copied()
    }
}

impl<F> AngleSource for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn latest(&self, field: &str) -> Option<f64> {
        self(field)
    }
}

fn sample(source: &dyn AngleSource, field: Option<&str>) -> Option<f64> {
    field.and_then(|f| source.latest(f))
}

// ============================================================================
// SHARED FACE
// ============================================================================

fn bezel_and_face(geometry: &DialGeometry, colors: &FaceColors) -> Vec<Shape> {
    vec![
        Shape::Circle {
            cx: 0.0,
            cy: 0.0,
            r: geometry.scaled(geometry.bezel),
            fill: colors.bezel,
            stroke: Some(Stroke {
                color: BEZEL_RIM,
                width: geometry.scaled(geometry.bezel_stroke),
            }),
        },
        Shape::Circle {
            cx: 0.0,
            cy: 0.0,
            r: geometry.scaled(geometry.face),
            fill: colors.dial,
            stroke: Some(Stroke {
                color: colors.text,
                width: geometry.scaled(geometry.face_stroke),
            }),
        },
    ]
}

/// Cardinal labels, then minor and major ticks. Major ticks under a shown
/// label are dropped.
fn dial_marks(
    renderer: &PolarRenderer,
    geometry: &DialGeometry,
    show_labels: bool,
    colors: &FaceColors,
) -> Vec<Shape> {
    let mut shapes = Vec::new();
    if show_labels {
        shapes.extend(renderer.cardinal_labels(&geometry.labels, colors.text));
    }
    let quarter_marks = |i: usize| i % 12 == 0;
    let under_label = |i: usize| show_labels && i % 2 == 0;
    shapes.extend(renderer.tick_band(&geometry.minor_ticks, Some(&quarter_marks), colors.text));
    shapes.extend(renderer.tick_band(&geometry.major_ticks, Some(&under_label), colors.text));
    shapes
}

fn readout(
    renderer: &PolarRenderer,
    geometry: &DialGeometry,
    right: f64,
    down: f64,
    bearing: &Bearing,
    anchor: TextAnchor,
    color: Color,
) -> Shape {
    let at = renderer.place(geometry.scaled(right), geometry.scaled(down));
    Shape::Text {
        x: at.x,
        y: at.y,
        content: bearing.readout(),
        anchor,
        font_size: geometry.scaled(geometry.readout.font_size),
        color,
    }
}

// ============================================================================
// COMPASS
// ============================================================================

/// Compass face: static dial, needle rotated by the unwrapped heading.
pub fn compose_compass(
    width: f64,
    height: f64,
    heading: Option<Bearing>,
    options: &DialOptions,
    resolver: &dyn ColorResolver,
) -> Scene {
    let geometry = DialGeometry::for_panel(width, height).with_label_nudge(LABEL_NUDGE);
    let renderer = PolarRenderer::new(geometry.radius, options.y_axis);
    let colors = options.colors(resolver);
    let needle_colors = NeedleColors {
        needle: colors.needle,
        tail: colors.tail,
        outline: colors.text,
    };

    let mut scene = Scene::new(width, height, options.y_axis);
    scene.push(Layer::fixed("face", bezel_and_face(&geometry, &colors)));
    scene.push(Layer::fixed(
        "dial",
        dial_marks(&renderer, &geometry, options.show_labels, &colors),
    ));
    scene.push(Layer::rotated(
        "needle",
        heading.map_or(0.0, |h| h.display),
        renderer.needle(&options.needle_kind(), &needle_colors),
    ));

    if let Some(heading) = heading.filter(|_| options.show_heading_value) {
        scene.push(Layer::fixed(
            "readout",
            vec![readout(
                &renderer,
                &geometry,
                0.0,
                geometry.readout.heading_y,
                &heading,
                TextAnchor::Middle,
                colors.text,
            )],
        ));
    }
    scene
}

// ============================================================================
// WIND ROSE
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindRoseAngles {
    pub heading: Option<Bearing>,
    pub true_wind: Option<Bearing>,
    pub apparent_wind: Option<Bearing>,
}

/// Wind rose: ship silhouette, dial, and independently rotating true and
/// apparent wind arrows.
pub fn compose_wind_rose(
    width: f64,
    height: f64,
    angles: &WindRoseAngles,
    options: &DialOptions,
    resolver: &dyn ColorResolver,
) -> Scene {
    let geometry = DialGeometry::for_panel(width, height).with_label_nudge(LABEL_NUDGE);
    let renderer = PolarRenderer::new(geometry.radius, options.y_axis);
    let colors = options.colors(resolver);
    let heading = angles.heading.map_or(0.0, |h| h.display);
    let bow_up = options.rotation_mode == RotationMode::RotateDial;

    let (ship_rotation, dial_rotation, wind_offset) = if bow_up {
        (0.0, -heading, -heading)
    } else {
        (heading, 0.0, 0.0)
    };
    let ship_colors = NeedleColors {
        needle: colors.ship,
        tail: colors.ship,
        outline: colors.text,
    };

    let mut scene = Scene::new(width, height, options.y_axis);
    scene.push(Layer::fixed("face", bezel_and_face(&geometry, &colors)));
    scene.push(Layer::rotated(
        "ship",
        ship_rotation,
        renderer.needle(&NeedleKind::Ship, &ship_colors),
    ));
    scene.push(Layer::rotated(
        "dial",
        dial_rotation,
        dial_marks(&renderer, &geometry, options.show_labels, &colors),
    ));

    let winds = [
        (
            "apparent_wind",
            options.apparent_wind_field.is_some(),
            angles.apparent_wind,
            colors.apparent_wind,
            "A",
        ),
        (
            "true_wind",
            options.true_wind_field.is_some(),
            angles.true_wind,
            colors.true_wind,
            "T",
        ),
    ];
    for (name, configured, bearing, fill, label) in winds {
        if let Some(bearing) = bearing.filter(|_| configured) {
            scene.push(Layer::rotated(
                name,
                bearing.display + wind_offset,
                renderer.wind_arrow(0.0, label, fill, colors.text),
            ));
        }
    }

    if options.show_heading_value {
        let r = &geometry.readout;
        let mut readouts = Vec::new();
        let rows = [
            (angles.heading, true, 0.0, r.heading_y, TextAnchor::Middle, colors.text),
            (
                angles.true_wind,
                options.true_wind_field.is_some(),
                -r.wind_x,
                r.wind_y,
                TextAnchor::End,
                colors.true_wind,
            ),
            (
                angles.apparent_wind,
                options.apparent_wind_field.is_some(),
                r.wind_x,
                r.wind_y,
                TextAnchor::Start,
                colors.apparent_wind,
            ),
        ];
        for (bearing, configured, right, down, anchor, color) in rows {
            if let Some(bearing) = bearing.filter(|_| configured) {
                readouts.push(readout(&renderer, &geometry, right, down, &bearing, anchor, color));
            }
        }
        if !readouts.is_empty() {
            scene.push(Layer::fixed("readout", readouts));
        }
    }
    scene
}

// ============================================================================
// DISPLAYS
// ============================================================================

/// Compass with its tracked heading.
#[derive(Debug, Clone, Default)]
pub struct CompassDisplay {
    options: DialOptions,
    heading: TrackedAngle,
}

impl CompassDisplay {
    pub fn new(options: DialOptions) -> Self {
        Self {
            options,
            heading: TrackedAngle::default(),
        }
    }

    pub fn options_mut(&mut self) -> &mut DialOptions {
        &mut self.options
    }

    pub fn frame(
        &mut self,
        source: &dyn AngleSource,
        width: f64,
        height: f64,
        resolver: &dyn ColorResolver,
    ) -> Scene {
        let was_attached = self.heading.is_attached();
        let heading = self
            .heading
            .observe(sample(source, self.options.heading_field.as_deref()));
        if was_attached && !self.heading.is_attached() {
            log::debug!("heading series detached");
        }
        compose_compass(width, height, heading, &self.options, resolver)
    }
}

/// Wind rose with its three tracked angles.
#[derive(Debug, Clone, Default)]
pub struct WindRoseDisplay {
    options: DialOptions,
    heading: TrackedAngle,
    true_wind: TrackedAngle,
    apparent_wind: TrackedAngle,
}

impl WindRoseDisplay {
    pub fn new(options: DialOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options_mut(&mut self) -> &mut DialOptions {
        &mut self.options
    }

    pub fn frame(
        &mut self,
        source: &dyn AngleSource,
        width: f64,
        height: f64,
        resolver: &dyn ColorResolver,
    ) -> Scene {
        let o = &self.options;
        let angles = WindRoseAngles {
            heading: self.heading.observe(sample(source, o.heading_field.as_deref())),
            true_wind: self.true_wind.observe(sample(source, o.true_wind_field.as_deref())),
            apparent_wind: self
                .apparent_wind
                .observe(sample(source, o.apparent_wind_field.as_deref())),
        };
        log::trace!("wind rose angles: {angles:?}");
        compose_wind_rose(width, height, &angles, o, resolver)
    }
}

/// Either display, as driven by the window surface.
#[derive(Debug, Clone)]
pub enum InstrumentDisplay {
    Compass(CompassDisplay),
    WindRose(WindRoseDisplay),
}

impl InstrumentDisplay {
    pub fn options_mut(&mut self) -> &mut DialOptions {
        match self {
            InstrumentDisplay::Compass(d) => d.options_mut(),
            InstrumentDisplay::WindRose(d) => d.options_mut(),
        }
    }

    pub fn frame(
        &mut self,
        source: &dyn AngleSource,
        width: f64,
        height: f64,
        resolver: &dyn ColorResolver,
    ) -> Scene {
        match self {
            InstrumentDisplay::Compass(d) => d.frame(source, width, height, resolver),
            InstrumentDisplay::WindRose(d) => d.frame(source, width, height, resolver),
        }
    }
}
