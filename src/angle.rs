/*
 * Angle Module
 *
 * Geometry helpers shared by the steering update.
 *
 * Headings are measured in degrees in screen space: 0° points up (towards
 * negative y), angles grow clockwise, and every stored heading lives in
 * [0, 360).
 */

use glam::Vec2;

// Wrap any angle into [0, 360)
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 {
        // -1e-6 % 360 + 360 rounds to exactly 360 in f32
        let shifted = wrapped + 360.0;
        if shifted >= 360.0 {
            0.0
        } else {
            shifted
        }
    } else {
        wrapped
    }
}

pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

pub fn rad_to_deg(radians: f32) -> f32 {
    radians.to_degrees()
}

// Mathematical bearing from one point to another (atan2 of the offset), in degrees
pub fn bearing_degrees(from: Vec2, to: Vec2) -> f32 {
    let offset = to - from;
    rad_to_deg(offset.y.atan2(offset.x))
}

// Heading that points from `from` towards `to`
pub fn heading_towards(from: Vec2, to: Vec2) -> f32 {
    normalize_degrees(bearing_degrees(from, to) + 90.0)
}

// Heading that points from `to` back past `from`, away from `to`
pub fn heading_away(from: Vec2, to: Vec2) -> f32 {
    normalize_degrees(bearing_degrees(from, to) - 90.0)
}

// Unit vector for a heading (0° = up)
pub fn forward(heading: f32) -> Vec2 {
    let (sin, cos) = deg_to_rad(heading).sin_cos();
    Vec2::new(sin, -cos)
}

// Unsigned arc from `current` to `target` measured in the positive direction, in [0, 360)
fn positive_delta(current: f32, target: f32) -> f32 {
    normalize_degrees(target - current)
}

// +1.0 to turn clockwise, -1.0 to turn counterclockwise, whichever arc is shorter
pub fn shortest_rotation_direction(current: f32, target: f32) -> f32 {
    if positive_delta(current, target) > 180.0 {
        -1.0
    } else {
        1.0
    }
}

// Length of the shorter arc between two headings, in [0, 180]
pub fn shortest_arc(current: f32, target: f32) -> f32 {
    let delta = positive_delta(current, target);
    if delta > 180.0 {
        360.0 - delta
    } else {
        delta
    }
}

// Circular mean of headings via summed sines and cosines
pub fn circular_mean_degrees<I>(headings: I) -> f32
where
    I: IntoIterator<Item = f32>,
{
    let (sin_sum, cos_sum) = headings
        .into_iter()
        .fold((0.0_f32, 0.0_f32), |(sin_sum, cos_sum), heading| {
            let (sin, cos) = deg_to_rad(heading).sin_cos();
            (sin_sum + sin, cos_sum + cos)
        });

    normalize_degrees(rad_to_deg(sin_sum.atan2(cos_sum)))
}

// Arithmetic mean of positions. Empty input yields the origin.
pub fn centroid<I>(points: I) -> Vec2
where
    I: IntoIterator<Item = Vec2>,
{
    let (sum, count) = points
        .into_iter()
        .fold((Vec2::ZERO, 0usize), |(sum, count), point| (sum + point, count + 1));

    if count == 0 {
        Vec2::ZERO
    } else {
        sum / count as f32
    }
}
