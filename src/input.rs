/*
 * Input Module
 *
 * This module handles user input events for the boid simulation.
 *
 * Keys:
 * - R: randomize the flock
 * - Up / =: add a batch of boids
 * - Down / -: remove a batch of boids
 * - D: toggle detection radius drawing
 * - Escape / Q: quit
 *
 * The mouse cursor is tracked as a predator while it is inside the window.
 */

use log::warn;
use nannou::prelude::*;

use crate::app::{handle_command, Model};
use crate::flock::Command;
use crate::renderer::to_world;

// Map a key to a command; `batch` is the number of boids added or removed
pub fn command_for_key(key: Key, batch: usize) -> Option<Command> {
    match key {
        Key::R => Some(Command::Randomize),
        Key::Up | Key::Equals | Key::Plus | Key::NumpadAdd => Some(Command::AddBoids(batch)),
        Key::Down | Key::Minus | Key::NumpadSubtract => Some(Command::RemoveBoids(batch)),
        Key::D => Some(Command::ToggleDebug),
        Key::Escape | Key::Q => Some(Command::Quit),
        _ => None,
    }
}

pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    if let Some(command) = command_for_key(key, model.params.batch_size) {
        handle_command(app, model, command);
    }
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.pointer = Some(to_world(pos, app.window_rect()));
}

pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.pointer = None;
}

// Keep the simulation bounds in sync with the window
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    if let Err(err) = model.flock.resize(::glam::Vec2::new(size.x, size.y)) {
        warn!("Ignoring resize: {}", err);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
