/*
 * UI Module
 *
 * The egui control panel. Buttons produce the same commands as the keyboard
 * so the app routes both through one path.
 */

use log::debug;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::flock::Command;
use crate::params::SimulationParams;

// Update the UI and return the commands requested this frame
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    boid_count: usize,
) -> Vec<Command> {
    let mut commands = Vec::new();

    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.label(format!("Boids: {}", boid_count));
                ui.add(
                    egui::Slider::new(&mut params.batch_size, SimulationParams::get_batch_size_range())
                        .text("Batch Size"),
                );

                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        commands.push(Command::AddBoids(params.batch_size));
                    }
                    if ui.button("Remove").clicked() {
                        commands.push(Command::RemoveBoids(params.batch_size));
                    }
                    if ui.button("Randomize").clicked() {
                        commands.push(Command::Randomize);
                    }
                });
            });

            ui.collapsing("Steering", |ui| {
                let steering = &debug_info.steering;
                ui.label(format!("Fleeing: {}", steering.fleeing));
                ui.label(format!("Separating: {}", steering.separating));
                ui.label(format!("Aligning: {}", steering.aligning));
                ui.label(format!("Cohering: {}", steering.cohering));
                ui.label(format!("Wandering: {}", steering.wandering));
                ui.label(format!(
                    "Mouse predator: {}",
                    if debug_info.pointer_active { "hunting" } else { "away" }
                ));
            });

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));

            ui.checkbox(&mut params.show_debug, "Show Detection Radii");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    if params.detect_changes() {
        debug!(
            "Panel settings: batch {}, debug {}, paused {}",
            params.batch_size, params.show_debug, params.pause_simulation
        );
    }

    commands
}
