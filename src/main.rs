use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use compass_rose::{
    input, DialOptions, DisplayKind, Instrument, InstrumentConfig, RotationMode,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Face {
    Compass,
    WindRose,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rotation {
    /// North-up, the ship turns
    Ship,
    /// Bow-up, the dial turns
    Dial,
}

/// Live compass / wind rose. Reads `field=value` angle samples from stdin.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value = "compass")]
    display: Face,

    #[arg(long, default_value = "Instrument")]
    title: String,

    #[arg(long, default_value_t = 300)]
    width: usize,

    #[arg(long, default_value_t = 300)]
    height: usize,

    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// TrueType/OpenType font for labels and readouts
    #[arg(long)]
    font: Option<PathBuf>,

    /// needle, arrow, ship, svg or png
    #[arg(long)]
    needle: Option<String>,

    #[arg(long)]
    needle_svg: Option<String>,

    #[arg(long)]
    needle_png: Option<String>,

    #[arg(long, value_enum, default_value = "ship")]
    rotation: Rotation,

    #[arg(long)]
    no_labels: bool,

    #[arg(long)]
    no_value: bool,

    #[arg(long, default_value = "heading")]
    heading_field: String,

    #[arg(long, default_value = "true_wind")]
    true_wind_field: String,

    #[arg(long, default_value = "apparent_wind")]
    apparent_wind_field: String,

    #[arg(long)]
    text_color: Option<String>,

    #[arg(long)]
    needle_color: Option<String>,

    #[arg(long)]
    tail_color: Option<String>,

    #[arg(long)]
    dial_color: Option<String>,

    #[arg(long)]
    bezel_color: Option<String>,

    #[arg(long)]
    ship_color: Option<String>,

    #[arg(long)]
    true_wind_color: Option<String>,

    #[arg(long)]
    apparent_wind_color: Option<String>,
}

impl Args {
    fn options(&self) -> DialOptions {
        DialOptions::builder()
            .heading_field(self.heading_field.clone())
            .true_wind_field(self.true_wind_field.clone())
            .apparent_wind_field(self.apparent_wind_field.clone())
            .maybe_text_color(self.text_color.clone())
            .maybe_needle_color(self.needle_color.clone())
            .maybe_tail_color(self.tail_color.clone())
            .maybe_dial_color(self.dial_color.clone())
            .maybe_bezel_color(self.bezel_color.clone())
            .maybe_ship_color(self.ship_color.clone())
            .maybe_true_wind_color(self.true_wind_color.clone())
            .maybe_apparent_wind_color(self.apparent_wind_color.clone())
            .show_labels(!self.no_labels)
            .show_heading_value(!self.no_value)
            .maybe_needle_type(self.needle.clone())
            .maybe_needle_svg(self.needle_svg.clone())
            .maybe_needle_png(self.needle_png.clone())
            .rotation_mode(match self.rotation {
                Rotation::Ship => RotationMode::RotateShip,
                Rotation::Dial => RotationMode::RotateDial,
            })
            .build()
    }

    fn config(&self) -> InstrumentConfig {
        InstrumentConfig::builder()
            .title(self.title.clone())
            .display(match self.display {
                Face::Compass => DisplayKind::Compass,
                Face::WindRose => DisplayKind::WindRose,
            })
            .options(self.options())
            .window_width(self.width)
            .window_height(self.height)
            .max_framerate(self.fps)
            .maybe_font_path(self.font.clone())
            .build()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{args:?}");

    let mut instrument = Instrument::new(args.config());
    let (sender, receiver) = mpsc::channel();
    let default_field = args.heading_field.clone();

    // Forward stdin samples to the window until input ends or the window closes
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    log::error!("stdin: {err}");
                    break;
                }
            };
            for parsed in input::parse_line(&line, &default_field) {
                match parsed {
                    Ok(command) => {
                        if sender.send(command).is_err() {
                            return;
                        }
                    }
                    Err(err) => log::warn!("skipping input: {err}"),
                }
            }
        }
        log::info!("input closed");
    });

    instrument
        .show_with_commands(receiver)
        .context("instrument window failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_colors_reach_the_options() {
        let args = Args::parse_from([
            "compass-rose",
            "--display",
            "wind-rose",
            "--true-wind-color",
            "#00ff00",
            "--apparent-wind-color",
            "purple",
        ]);
        let options = args.options();
        assert_eq!(options.true_wind_color.as_deref(), Some("#00ff00"));
        assert_eq!(options.apparent_wind_color.as_deref(), Some("purple"));
        assert!(options.ship_color.is_none());

        let colors = options.colors(&compass_rose::Palette);
        assert_eq!(colors.true_wind, compass_rose::Color::new(0, 0xff, 0));
        assert_eq!(args.config().display, DisplayKind::WindRose);
    }
}
