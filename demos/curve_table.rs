//! Prints the preset table with sampled progress values and SVG path data.
//!
//! Run with: cargo run --example curve_table [curve]
//!
//! `curve` may be a preset identifier or `cubic-bezier(x1, y1, x2, y2)`.

use anyhow::{Context, Result};
use easewright::{Preset, Rect, TimingCurve, presets};

const SAMPLE_TIMES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

fn print_curve(title: &str, curve: &TimingCurve) {
    let samples: Vec<String> = SAMPLE_TIMES
        .iter()
        .map(|&t| format!("{:.3}", curve.evaluate(t)))
        .collect();
    println!("{:<12} {:<36} {}", title, curve.to_string(), samples.join("  "));
}

fn main() -> Result<()> {
    println!("{:<12} {:<36} t = 0 / .25 / .5 / .75 / 1", "Preset", "Curve");
    for (name, curve) in presets() {
        print_curve(name, &curve);
    }

    if let Some(arg) = std::env::args().nth(1) {
        let curve: TimingCurve = arg
            .parse()
            .with_context(|| format!("could not read curve from '{arg}'"))?;

        println!();
        let title = Preset::matching(&curve).map_or("Custom", Preset::display_name);
        print_curve(title, &curve);

        let geometry = curve.project(Rect::from_size(200.0, 200.0));
        println!("curve:    {}", geometry.curve_path().to_svg_data());
        println!("tangents: {}", geometry.tangent_path().to_svg_data());
    }

    Ok(())
}
