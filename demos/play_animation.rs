//! Plays a position animation in the terminal.
//!
//! Run with: cargo run --example play_animation [curve] [seconds]

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use easewright::{PositionAnimation, TimingCurve};

const TRACK_WIDTH: usize = 60;
const FRAME_RATE: f64 = 30.0;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let curve: TimingCurve = match args.next() {
        Some(arg) => arg.parse().context("invalid timing curve")?,
        None => TimingCurve::default(),
    };
    let duration: f64 = match args.next() {
        Some(arg) => arg.parse().context("invalid duration")?,
        None => 2.0,
    };
    if !(0.0..=30.0).contains(&duration) {
        bail!("duration must be between 0 and 30 seconds, got {duration}");
    }

    println!("Playing {curve} over {duration} s");

    let animation = PositionAnimation::new(curve, TRACK_WIDTH as f64, duration);
    for frame in animation.frames(FRAME_RATE) {
        let column = frame.offset.round().clamp(0.0, TRACK_WIDTH as f64) as usize;
        print!("\r|{}#{}|", " ".repeat(column), " ".repeat(TRACK_WIDTH - column));
        std::io::Write::flush(&mut std::io::stdout())?;
        thread::sleep(Duration::from_secs_f64(1.0 / FRAME_RATE));
    }
    println!();

    Ok(())
}
