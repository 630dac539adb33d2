//! Compass and wind-rose instrument engine.
//!
//! Raw bearings go through an [`AngleUnwrapper`] so rotations always take the
//! short way round, and [`PolarRenderer`] turns the resulting angles into a
//! declarative, layered [`Scene`]. The [`Instrument`] type wraps both in a
//! window fed by a command channel.

// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod color;
pub mod compose;
pub mod error;
pub mod geometry;
pub mod input;
pub mod polar;
pub mod raster;
pub mod shape;
pub mod unwrap;

pub use color::{Color, ColorResolver, Palette};
pub use compose::{
    compose_compass, compose_wind_rose, format_readout, AngleSource, Bearing, CompassDisplay,
    DialOptions, FaceColors, InstrumentDisplay, RotationMode, TrackedAngle, WindRoseAngles,
    WindRoseDisplay,
};
pub use error::{InstrumentError, ReadingError};
pub use geometry::DialGeometry;
pub use polar::{NeedleColors, NeedleKind, PolarRenderer};
pub use shape::{ImageFormat, Layer, Point, Scene, Shape, Stroke, TextAnchor, YAxis};
pub use unwrap::{normalize_degrees, AngleUnwrapper};

// External crate imports
use bon::Builder;
use pixels::{Pixels, SurfaceTexture};

// Standard library imports
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Instant;

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use raster::Canvas;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Which instrument face to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayKind {
    #[default]
    Compass,
    WindRose,
}

/// Command enum for type-safe instrument updates
#[derive(Debug, Clone, PartialEq)]
pub enum InstrumentCommand {
    SetField(String, f64),
    ClearField(String),
    SetRotationMode(RotationMode),
    ShowLabels(bool),
    ShowHeadingValue(bool),
}

/// Main instrument struct - the primary public interface
#[derive(Debug, Clone)]
pub struct Instrument {
    config: InstrumentConfig,
    values: HashMap<String, f64>,
}

#[derive(Debug, Clone, Builder)]
pub struct InstrumentConfig {
    #[builder(default = "Compass".to_string(), into)]
    pub title: String,
    #[builder(default)]
    pub display: DisplayKind,
    #[builder(default)]
    pub options: DialOptions,

    // Window configuration
    #[builder(default = 300)]
    pub window_width: usize,
    #[builder(default = 300)]
    pub window_height: usize,
    #[builder(default = 60.0)]
    pub max_framerate: f64,

    pub background_color: Option<Color>,

    // Without a font, labels and readouts are not drawn
    #[builder(into)]
    pub font_path: Option<PathBuf>,
}

impl InstrumentConfig {
    pub fn make_display(&self) -> InstrumentDisplay {
        match self.display {
            DisplayKind::Compass => {
                InstrumentDisplay::Compass(CompassDisplay::new(self.options.clone()))
            }
            DisplayKind::WindRose => {
                InstrumentDisplay::WindRose(WindRoseDisplay::new(self.options.clone()))
            }
        }
    }
}

impl Instrument {
    pub fn new(config: InstrumentConfig) -> Self {
        Self {
            config,
            values: HashMap::new(),
        }
    }

    pub fn config(&self) -> &InstrumentConfig {
        &self.config
    }

    pub fn set_field(&mut self, field: impl Into<String>, value: f64) {
        self.values.insert(field.into(), value);
    }

    pub fn clear_field(&mut self, field: &str) {
        self.values.remove(field);
    }

    pub fn show(&mut self) -> Result<(), InstrumentError> {
        self.run_window(None)
    }

    pub fn show_with_commands(
        &mut self,
        receiver: Receiver<InstrumentCommand>,
    ) -> Result<(), InstrumentError> {
        self.run_window(Some(receiver))
    }

    fn run_window(&self, receiver: Option<Receiver<InstrumentCommand>>) -> Result<(), InstrumentError> {
        let font = match &self.config.font_path {
            Some(path) => Some(raster::load_font(path)?),
            None => {
                log::warn!("no font configured, labels and readouts will not be drawn");
                None
            }
        };
        let background = self.config.background_color.unwrap_or(Color::WHITE);

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ))
            .build(&event_loop)?;

        let window = std::sync::Arc::new(window);
        let window_clone = window.clone();
        let size = window.inner_size();
        let mut fb_width = size.width as usize;
        let mut fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let mut state = FrameState {
            display: self.config.make_display(),
            values: self.values.clone(),
        };
        let frame_duration = std::time::Duration::from_secs_f64(1.0 / self.config.max_framerate.max(1.0));
        let mut last_frame = Instant::now();
        log::info!(
            "showing {:?} at {}x{}",
            self.config.display,
            fb_width,
            fb_height
        );

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Poll);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        // minimised windows report a zero size
                        if new_size.width == 0 || new_size.height == 0 {
                            return;
                        }
                        fb_width = new_size.width as usize;
                        fb_height = new_size.height as usize;
                        if let Err(err) = pixels.resize_buffer(new_size.width, new_size.height) {
                            log::error!("failed to resize pixel buffer: {err}");
                        }
                        if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                            log::error!("failed to resize surface: {err}");
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        if let Some(ref receiver) = receiver {
                            state.apply_commands(receiver);
                        }
                        let scene = state.display.frame(
                            &state.values,
                            fb_width as f64,
                            fb_height as f64,
                            &Palette,
                        );
                        let mut canvas = Canvas::new(pixels.frame_mut(), fb_width, fb_height);
                        raster::render_scene(&mut canvas, &scene, font.as_ref(), background);
                        if let Err(err) = pixels.render() {
                            log::error!("render failed: {err}");
                            window_target.exit();
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

// ============================================================================
// INTERNAL STATE
// ============================================================================

struct FrameState {
    display: InstrumentDisplay,
    values: HashMap<String, f64>,
}

impl FrameState {
    fn apply(&mut self, command: InstrumentCommand) {
        match command {
            InstrumentCommand::SetField(field, value) => {
                self.values.insert(field, value);
            }
            InstrumentCommand::ClearField(field) => {
                self.values.remove(&field);
            }
            InstrumentCommand::SetRotationMode(mode) => {
                self.display.options_mut().rotation_mode = mode;
            }
            InstrumentCommand::ShowLabels(show) => {
                self.display.options_mut().show_labels = show;
            }
            InstrumentCommand::ShowHeadingValue(show) => {
                self.display.options_mut().show_heading_value = show;
            }
        }
    }

    fn apply_commands(&mut self, receiver: &Receiver<InstrumentCommand>) {
        // Drain whatever arrived since the last frame without blocking
        while let Ok(command) = receiver.try_recv() {
            self.apply(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn state(display: DisplayKind) -> FrameState {
        let config = InstrumentConfig::builder()
            .display(display)
            .options(DialOptions::builder().heading_field("heading").build())
            .build();
        FrameState {
            display: config.make_display(),
            values: HashMap::new(),
        }
    }

    #[test]
    fn commands_update_values_and_options() {
        let mut state = state(DisplayKind::WindRose);
        let (tx, rx) = mpsc::channel();
        tx.send(InstrumentCommand::SetField("heading".into(), 42.0)).unwrap();
        tx.send(InstrumentCommand::SetRotationMode(RotationMode::RotateDial))
            .unwrap();
        tx.send(InstrumentCommand::ShowLabels(false)).unwrap();
        state.apply_commands(&rx);

        assert_eq!(state.values.get("heading"), Some(&42.0));
        assert_eq!(
            state.display.options_mut().rotation_mode,
            RotationMode::RotateDial
        );

        let scene = state.display.frame(&state.values, 100.0, 100.0, &Palette);
        assert_eq!(scene.layer("dial").map(|l| l.rotation), Some(-42.0));

        tx.send(InstrumentCommand::ClearField("heading".into())).unwrap();
        state.apply_commands(&rx);
        assert!(state.values.is_empty());
    }

    #[test]
    fn config_builder_defaults() {
        let config = InstrumentConfig::builder().build();
        assert_eq!(config.display, DisplayKind::Compass);
        assert_eq!((config.window_width, config.window_height), (300, 300));
        assert!(config.font_path.is_none());
        assert!(matches!(config.make_display(), InstrumentDisplay::Compass(_)));
    }

    #[test]
    fn instrument_keeps_initial_values() {
        let mut instrument = Instrument::new(InstrumentConfig::builder().title("Rose").build());
        instrument.set_field("heading", 12.0);
        instrument.set_field("true_wind", 200.0);
        instrument.clear_field("true_wind");
        assert_eq!(instrument.values.len(), 1);
        assert_eq!(instrument.config().title, "Rose");
    }
}
