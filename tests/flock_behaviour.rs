use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use predator_boids::{update_boid, Boid, BoidConfig, Flock, FrameContext, Predator};

const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

fn quiet_config() -> BoidConfig {
    BoidConfig {
        jitter_degrees: 0,
        ..BoidConfig::default()
    }
}

fn boid_at(x: f32, y: f32, rotation: f32, config: &BoidConfig) -> Boid {
    Boid::new(Vec2::new(x, y), rotation, [120, 200, 255], config)
}

#[test]
fn headings_stay_canonical() {
    let mut flock = Flock::new(BoidConfig::default(), BOUNDS, 60, Some(2024)).unwrap();

    for frame in 0..200 {
        let pointer = Some(Vec2::new(400.0 + frame as f32, 300.0));
        flock.step(1.0 / 60.0, pointer);

        for boid in flock.boids() {
            assert!((0.0..360.0).contains(&boid.rotation), "rotation {}", boid.rotation);
            assert!(
                (0.0..360.0).contains(&boid.target_rotation),
                "target {}",
                boid.target_rotation
            );
            assert!(boid.position.x >= 0.0 && boid.position.x <= BOUNDS.x);
            assert!(boid.position.y >= 0.0 && boid.position.y <= BOUNDS.y);
        }
    }
}

#[test]
fn leaving_the_right_edge_reenters_at_zero() {
    let config = quiet_config();
    let boids = vec![boid_at(BOUNDS.x + 1.0, 300.0, 90.0, &config)];
    let mut flock = Flock::from_boids(config, BOUNDS, boids, 1).unwrap();

    flock.step(0.01, None);
    assert_eq!(flock.boids()[0].position.x, 0.0);
}

#[test]
fn rotation_takes_the_short_way_through_zero() {
    let config = quiet_config();
    let mut boid = boid_at(400.0, 300.0, 10.0, &config);
    boid.target_rotation = 350.0;
    let mut flock = Flock::from_boids(config, BOUNDS, vec![boid], 1).unwrap();

    flock.step(0.01, None);
    let rotation = flock.boids()[0].rotation;
    assert!((rotation - 6.4).abs() < 1e-3, "rotation {}", rotation);
}

#[test]
fn predator_in_range_suppresses_flocking_and_decay() {
    let config = quiet_config();
    let mut scared = boid_at(400.0, 300.0, 0.0, &config);
    scared.move_speed = 700.0;
    scared.rotation_speed = 1000.0;
    let neighbour = boid_at(405.0, 300.0, 0.0, &config);
    let mut flock = Flock::from_boids(config, BOUNDS, vec![scared, neighbour], 1).unwrap();
    flock.add_predator(Predator::new(Vec2::new(400.0, 330.0), 20.0));

    flock.step(0.01, None);

    let boid = &flock.boids()[0];
    assert!(boid.move_speed >= 700.0);
    assert!(boid.rotation_speed >= 1000.0);
    assert_eq!(flock.last_stats().fleeing, 2);
    assert_eq!(flock.last_stats().separating, 0);
}

#[test]
fn pointer_acts_as_predator() {
    let config = quiet_config();
    let boids = vec![boid_at(400.0, 300.0, 0.0, &config)];
    let mut flock = Flock::from_boids(config, BOUNDS, boids, 1).unwrap();

    flock.step(0.01, Some(Vec2::new(430.0, 298.0)));
    assert_eq!(flock.last_stats().fleeing, 1);

    flock.step(0.01, None);
    assert_eq!(flock.last_stats().fleeing, 0);
    assert_eq!(flock.last_stats().wandering, 1);
}

#[test]
fn separation_wins_over_alignment() {
    let config = quiet_config();
    let boids = vec![
        boid_at(400.0, 300.0, 0.0, &config),
        boid_at(410.0, 300.0, 180.0, &config),
        boid_at(450.0, 300.0, 90.0, &config),
    ];
    let mut flock = Flock::from_boids(config, BOUNDS, boids, 1).unwrap();

    flock.step(0.0, None);
    // Boids 0 and 1 crowd each other; boid 2 only sees them at alignment range
    assert_eq!(flock.last_stats().separating, 2);
    assert_eq!(flock.last_stats().aligning, 1);
}

#[test]
fn every_boid_reads_the_pre_frame_snapshot() {
    let config = quiet_config();

    // B races right towards A; A drifts down towards B
    let mut b = boid_at(500.0, 500.0, 90.0, &config);
    b.move_speed = 600.0;
    let a = boid_at(545.0, 480.0, 180.0, &config);
    let before = vec![b, a];

    let dt = 0.1;
    let frame = FrameContext {
        predators: &[],
        dt,
        bounds: Vec2::new(1000.0, 1000.0),
        config: &config,
    };
    let mut rng = StdRng::seed_from_u64(9);
    let (b_after, _) = update_boid(0, &before, &frame, &mut rng);

    // What A would decide if it saw B's already-updated state
    let sequential = vec![b_after, before[1].clone()];
    let (a_sequential, _) = update_boid(1, &sequential, &frame, &mut rng);

    let mut flock = Flock::from_boids(config, Vec2::new(1000.0, 1000.0), before, 9).unwrap();
    flock.step(dt, None);
    let a_synchronous = &flock.boids()[1];

    // Pre-frame B is 45 px away: alignment between headings 90 and 180
    assert!((a_synchronous.target_rotation - 135.0).abs() < 1e-3);
    assert!((a_sequential.target_rotation - 135.0).abs() > 1.0);
}

#[test]
fn removing_more_than_present_keeps_one() {
    let mut flock = Flock::new(BoidConfig::default(), BOUNDS, 5, Some(5)).unwrap();
    flock.remove_boids(10);
    assert_eq!(flock.len(), 1);
}

#[test]
fn malformed_config_is_rejected() {
    let config = BoidConfig {
        cohesion_distance_factor: 0.0,
        ..BoidConfig::default()
    };
    let err = Flock::new(config, BOUNDS, 10, Some(1)).err().unwrap();
    assert!(err.to_string().contains("Cohesion"));
}
