/*
 * Application Module
 *
 * This module defines the nannou model for the boid simulation and wires the
 * window callbacks together. It handles the initialization and per-frame
 * update; drawing lives in the renderer and event handlers in the input module.
 *
 * Each frame the flock advances by the elapsed time, with the mouse cursor
 * acting as a predator while it is inside the window and not over the panel.
 */

use std::sync::Mutex;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::{debug, info};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::flock::{Command, Flock};
use crate::input::{key_pressed, mouse_exited, mouse_moved, raw_window_event, resized};
use crate::params::{BoidConfig, SimulationParams};
use crate::renderer::view;
use crate::ui;
use crate::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

// Longest step the simulation takes in one frame, in seconds
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Boid flocking simulation with predator avoidance", long_about = None)]
pub struct LaunchOptions {
    /// Number of boids at startup
    #[arg(short, long, default_value_t = 100)]
    pub boids: usize,

    /// Seed for the random source; a fresh seed is drawn when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    pub height: u32,

    /// Boids added or removed per command
    #[arg(long, default_value_t = 10)]
    pub batch: usize,

    /// Start with detection radii drawn
    #[arg(short, long)]
    pub debug: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Cursor position in simulation coordinates while inside the window
    pub pointer: Option<::glam::Vec2>,
}

impl Model {
    // The cursor only hunts when it is not hovering the control panel
    pub fn active_pointer(&self) -> Option<::glam::Vec2> {
        if self.egui.ctx().is_pointer_over_area() {
            None
        } else {
            self.pointer
        }
    }
}

struct Launch {
    flock: Flock,
    options: LaunchOptions,
}

// nannou builds the model from a plain fn, so the validated flock is parked here
static PENDING_LAUNCH: Mutex<Option<Launch>> = Mutex::new(None);

// Validate the options, build the flock and hand control to nannou
pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let bounds = ::glam::Vec2::new(options.width as f32, options.height as f32);
    let flock = Flock::new(BoidConfig::default(), bounds, options.boids, options.seed)
        .context("Invalid simulation configuration")?;

    *PENDING_LAUNCH
        .lock()
        .map_err(|_| anyhow!("Launch state lock poisoned"))? = Some(Launch { flock, options });

    nannou::app(model).update(update).run();
    Ok(())
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let Launch { flock, options } = PENDING_LAUNCH
        .lock()
        .ok()
        .and_then(|mut pending| pending.take())
        .expect("app::run prepares the flock before nannou starts");

    let window_id = app
        .new_window()
        .title("Boids")
        .size(options.width, options.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited)
        .resized(resized)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to create window");

    let window = app.window(window_id).expect("Window was just created");
    let egui = Egui::from_window(&window);

    let params = SimulationParams::new(options.batch, options.debug);

    info!(
        "Window {}x{} ready with {} boids",
        options.width,
        options.height,
        flock.len()
    );

    Model {
        flock,
        params,
        egui,
        debug_info: DebugInfo::default(),
        pointer: None,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    let commands = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info, model.flock.len());
    for command in commands {
        handle_command(app, model, command);
    }

    if !model.params.pause_simulation {
        let dt = update.since_last.as_secs_f32().min(MAX_FRAME_DT);
        let pointer = model.active_pointer();
        model.flock.step(dt, pointer);
    }

    model.debug_info.pointer_active = model.active_pointer().is_some();
    model
        .debug_info
        .record_frame(app.fps(), update.since_last, model.flock.last_stats());
}

// Route a command to the flock or handle it at the host level
pub fn handle_command(app: &App, model: &mut Model, command: Command) {
    debug!("Command {:?}", command);
    match command {
        Command::ToggleDebug => model.params.show_debug = !model.params.show_debug,
        Command::Quit => app.quit(),
        other => {
            model.flock.apply(other);
        }
    }
}
