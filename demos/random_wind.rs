use compass_rose::{
    DialOptions, DisplayKind, Instrument, InstrumentCommand, InstrumentConfig, RotationMode,
};
use rand::Rng;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = DialOptions::builder()
        .heading_field("heading")
        .true_wind_field("true_wind")
        .apparent_wind_field("apparent_wind")
        .rotation_mode(RotationMode::RotateDial)
        .build();
    let config = InstrumentConfig::builder()
        .title("Wind rose")
        .display(DisplayKind::WindRose)
        .options(options)
        .maybe_font_path(std::env::args().nth(1))
        .build();

    let mut instrument = Instrument::new(config);
    let (sender, receiver) = mpsc::channel();

    // Wander heading and wind, crossing north often
    thread::spawn(move || {
        let mut rng = rand::rng();
        let (mut heading, mut wind) = (350.0_f64, 10.0_f64);
        loop {
            heading = (heading + rng.random_range(-15.0..15.0)).rem_euclid(360.0);
            wind = (wind + rng.random_range(-20.0..20.0)).rem_euclid(360.0);
            let apparent = (wind - heading + rng.random_range(-5.0..5.0)).rem_euclid(360.0);

            let commands = [
                InstrumentCommand::SetField("heading".into(), heading),
                InstrumentCommand::SetField("true_wind".into(), wind),
                InstrumentCommand::SetField("apparent_wind".into(), apparent),
            ];
            if commands.into_iter().any(|cmd| sender.send(cmd).is_err()) {
                break;
            }

            thread::sleep(Duration::from_millis(250));
        }
    });

    println!("Showing a wind rose with wandering heading and wind, bow-up");
    println!("Pass a font path as the first argument to draw labels");
    println!("Press Ctrl+C to exit");

    instrument.show_with_commands(receiver)?;
    Ok(())
}
