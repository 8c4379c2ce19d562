/*
 * Renderer Module
 *
 * This module draws the simulation: each boid as a hexagon with a direction
 * bar, optional translucent detection circles, predators as red discs and a
 * short help line.
 *
 * The simulation uses window coordinates with the origin in the top-left
 * corner and y growing downward; nannou draws around the window centre with
 * y growing upward. Everything crossing that boundary goes through
 * `to_screen` / `to_world`.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::params::BoidConfig;
use crate::predator::Predator;

const HELP_TEXT: &str = "R randomize | Up/Down add/remove | D debug | Esc quit";

// Simulation position to nannou screen point
pub fn to_screen(position: ::glam::Vec2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + position.x, window_rect.top() - position.y)
}

// nannou screen point to simulation position
pub fn to_world(point: Point2, window_rect: Rect) -> ::glam::Vec2 {
    ::glam::Vec2::new(point.x - window_rect.left(), window_rect.top() - point.y)
}

// Headings turn clockwise on screen, nannou rotations turn counterclockwise
fn screen_rotation(heading: f32) -> f32 {
    -heading.to_radians()
}

fn boid_color(color: [u8; 3], alpha: u8) -> Rgba {
    rgba(
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        alpha as f32 / 255.0,
    )
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let config = model.flock.config();

    draw_boids(&draw, model.flock.boids(), config, window_rect, model.params.show_debug);

    let predators = model.flock.frame_predators(model.active_pointer());
    draw_predators(&draw, &predators, window_rect);

    draw_status(&draw, model, window_rect);

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

pub fn draw_boids(draw: &Draw, boids: &[Boid], config: &BoidConfig, window_rect: Rect, show_debug: bool) {
    for boid in boids {
        if show_debug {
            draw_boid_debug_info(draw, boid, config, window_rect);
        }
        draw_boid(draw, boid, config.size, window_rect);
    }
}

// Cohesion, alignment and separation radii, more opaque as they shrink
fn draw_boid_debug_info(draw: &Draw, boid: &Boid, config: &BoidConfig, window_rect: Rect) {
    let center = to_screen(boid.position, window_rect);

    for (radius, alpha) in [
        (config.cohesion_distance(), 32),
        (config.alignment_distance(), 48),
        (config.separation_distance(), 48),
    ] {
        draw.ellipse()
            .xy(center)
            .radius(radius)
            .color(boid_color(boid.color, alpha));
    }
}

fn draw_boid(draw: &Draw, boid: &Boid, size: f32, window_rect: Rect) {
    let center = to_screen(boid.position, window_rect);
    let rotation = screen_rotation(boid.rotation);
    let color = boid_color(boid.color, 255);

    // Boid body
    let hexagon = (0..6).map(|i| {
        let angle = i as f32 * TAU / 6.0;
        pt2(angle.cos() * size, angle.sin() * size)
    });
    draw.polygon()
        .color(color)
        .points(hexagon)
        .xy(center)
        .rotate(rotation);

    // Direction indicator, a bar reaching `2 * size` ahead of the centre
    let line_width = size / 4.0;
    let ahead = vec2(boid.rotation.to_radians().sin(), boid.rotation.to_radians().cos()) * size;
    draw.rect()
        .xy(center + ahead)
        .w_h(line_width, size * 2.0)
        .rotate(rotation)
        .color(color);
}

pub fn draw_predators(draw: &Draw, predators: &[Predator], window_rect: Rect) {
    for predator in predators {
        draw.ellipse()
            .xy(to_screen(predator.position, window_rect))
            .radius(predator.radius)
            .color(RED);
    }
}

fn draw_status(draw: &Draw, model: &Model, window_rect: Rect) {
    let margin = 20.0;
    let status = format!("Boids: {}", model.flock.len());

    for (i, text) in [HELP_TEXT, status.as_str()].iter().enumerate() {
        draw.text(text)
            .x_y(window_rect.x(), window_rect.bottom() + margin + i as f32 * margin)
            .w(window_rect.w())
            .color(WHITE)
            .font_size(14);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_round_trip() {
        let window_rect = Rect::from_w_h(800.0, 600.0);

        let top_left = to_screen(::glam::Vec2::new(0.0, 0.0), window_rect);
        assert_eq!(top_left, pt2(-400.0, 300.0));

        let world = to_world(pt2(100.0, -50.0), window_rect);
        assert_eq!(world, ::glam::Vec2::new(500.0, 350.0));
    }

    #[test]
    fn test_screen_rotation_is_clockwise() {
        assert_eq!(screen_rotation(0.0), 0.0);
        assert!((screen_rotation(90.0) + PI / 2.0).abs() < 1e-5);
    }
}
