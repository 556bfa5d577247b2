//! Demo entry point for autopanel.
//!
//! Builds two small objects, hosts an automatic panel for each, and draws
//! the shared panel host in an `eframe` window. Panels float next to each
//! other and wrap as the window narrows.
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

use anyhow::Result;
use autopanel::{shared, Bindable, PanelBuilder, ParamDescriptor};
use log::info;

/// A bouncing ball whose look and motion are slider-driven.
struct Ball {
    params: Vec<ParamDescriptor>,
    radius: f64,
    speed: f64,
}

impl Ball {
    fn new() -> Self {
        Self {
            params: vec![
                ParamDescriptor::new("radius", 1.0, 10.0, 5.0),
                ParamDescriptor::new("speed", 0.0, 100.0, 20.0).with_step(5.0),
            ],
            radius: 0.0,
            speed: 0.0,
        }
    }
}

impl Bindable for Ball {
    fn name(&self) -> &str {
        "Ball"
    }

    fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }

    fn update(&mut self, values: &[f64]) {
        self.radius = values[0];
        self.speed = values[1];
    }
}

/// A directional light with Euler angles and an intensity.
struct Light {
    params: Vec<ParamDescriptor>,
    angles: [f64; 2],
    intensity: f64,
}

impl Light {
    fn new() -> Self {
        Self {
            params: vec![
                ParamDescriptor::new("azimuth", 0.0, 360.0, 45.0).with_step(1.0),
                ParamDescriptor::new("elevation", -90.0, 90.0, 30.0).with_step(1.0),
                ParamDescriptor::new("intensity", 0.0, 2.0, 1.0),
            ],
            angles: [0.0; 2],
            intensity: 0.0,
        }
    }
}

impl Bindable for Light {
    fn name(&self) -> &str {
        "Light"
    }

    fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }

    fn update(&mut self, values: &[f64]) {
        self.angles = [values[0], values[1]];
        self.intensity = values[2];
    }
}

struct DemoApp;

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            autopanel::host().ui(ui);
        });
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Half-width panels pack two controls per row and float side by side.
    PanelBuilder::new(shared(Ball::new())).build_hosted()?;
    PanelBuilder::new(shared(Light::new()))
        .width(420.0)
        .width_divisor(2)
        .build_hosted()?;

    info!("hosting {} panels", autopanel::host().len());

    eframe::run_native(
        "autopanel demo",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(DemoApp))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
