//! Radial layout constants for the instrument face, as fractions of the dial
//! radius.

/// A band of evenly spaced radial ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickBand {
    pub count: usize,
    pub inner: f64,
    pub outer: f64,
    pub stroke_width: f64,
}

/// Configuration for the cardinal N/E/S/W labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelConfig {
    pub radius: f64,
    pub font_size: f64,
    /// Extra drop toward the bottom of the face, for baseline-anchored text.
    pub nudge: f64,
}

/// Configuration for the numeric readouts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadoutConfig {
    pub heading_y: f64,
    pub wind_x: f64,
    pub wind_y: f64,
    pub font_size: f64,
}

impl Default for ReadoutConfig {
    fn default() -> Self {
        Self {
            heading_y: 0.65,
            wind_x: 0.6,
            wind_y: 0.95,
            font_size: 0.15,
        }
    }
}

/// Dial radius plus the ring fractions the face is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub radius: f64,
    pub bezel: f64,
    pub bezel_stroke: f64,
    pub face: f64,
    pub face_stroke: f64,
    pub minor_ticks: TickBand,
    pub major_ticks: TickBand,
    pub labels: LabelConfig,
    pub readout: ReadoutConfig,
}

impl DialGeometry {
    /// Geometry for a panel of the given pixel size. Non-finite or negative
    /// sizes collapse to a zero radius.
    pub fn for_panel(width: f64, height: f64) -> Self {
        let radius = width.min(height) / 2.0;
        Self {
            radius: if radius.is_finite() && radius > 0.0 {
                radius
            } else {
                0.0
            },
            ..Self::default()
        }
    }

    /// Variant used by the compass, whose labels sit on their baseline.
    pub fn with_label_nudge(mut self, nudge: f64) -> Self {
        self.labels.nudge = nudge;
        self
    }

    pub fn scaled(&self, fraction: f64) -> f64 {
        self.radius * fraction
    }
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self {
            radius: 0.0,
            bezel: 0.98,
            bezel_stroke: 0.01,
            face: 0.88,
            face_stroke: 0.015,
            minor_ticks: TickBand {
                count: 48,
                inner: 0.80,
                outer: 0.86,
                stroke_width: 0.01,
            },
            major_ticks: TickBand {
                count: 8,
                inner: 0.72,
                outer: 0.86,
                stroke_width: 0.02,
            },
            labels: LabelConfig {
                radius: 0.80,
                font_size: 0.12,
                nudge: 0.0,
            },
            readout: ReadoutConfig::default(),
        }
    }
}
