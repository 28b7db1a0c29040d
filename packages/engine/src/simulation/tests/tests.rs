use super::*;
use crate::rigid_body::{Body, Vec2, COLOR_WHITE};

#[test]
fn spawn_appends_bodies_with_config_colors() {
    let mut config = SimConfig::default();
    config.static_color = 0xFF00_00FF;
    let mut world = WorldCore::with_config(config);

    let a = world.spawn_body(10.0, 20.0, 20.0, 20.0, BodyKind::Static);
    let b = world.spawn_body(40.0, 20.0, 20.0, 20.0, BodyKind::Dynamic);
    let c = world.spawn_body_with_color(0.0, 0.0, 5.0, 5.0, BodyKind::Dynamic, 0x1234_5678);

    assert_eq!((a, b, c), (1, 2, 3));
    assert_eq!(world.body_count(), 3);
    assert_eq!(world.dynamic_body_count(), 2);

    let colors: Vec<u32> = world.bodies().iter().map(Body::color).collect();
    assert_eq!(colors, vec![0xFF00_00FF, COLOR_WHITE, 0x1234_5678]);
}

#[test]
fn pointer_down_uses_spawn_settings() {
    let mut world = WorldCore::new();

    let first = world.pointer_down(100.0, 50.0);
    assert_ne!(first, 0);
    let body = world.bodies().get(first).unwrap();
    assert_eq!(body.kind(), BodyKind::Dynamic);
    assert_eq!(*body.rect(), Rect::new(100.0, 50.0, 20.0, 20.0));

    world.set_spawn_kind(BodyKind::Static);
    world.set_spawn_size(64.0, 8.0);
    let second = world.pointer_down(0.0, 300.0);
    let body = world.bodies().get(second).unwrap();
    assert_eq!(body.kind(), BodyKind::Static);
    assert_eq!(*body.rect(), Rect::new(0.0, 300.0, 64.0, 8.0));

    world.set_spawn_enabled(false);
    assert_eq!(world.pointer_down(5.0, 5.0), 0);
    assert_eq!(world.body_count(), 2);
}

#[test]
fn step_advances_frame_and_moves_dynamic_bodies() {
    let mut world = WorldCore::new();
    let wall = world.spawn_body(200.0, 0.0, 20.0, 20.0, BodyKind::Static);
    let falling = world.spawn_body(0.0, 0.0, 20.0, 20.0, BodyKind::Dynamic);

    for _ in 0..10 {
        world.step();
    }

    assert_eq!(world.frame(), 10);
    assert_eq!(world.bodies().get(wall).unwrap().rect().y, 0.0);
    let falling = world.bodies().get(falling).unwrap();
    assert!(falling.rect().y > 0.0);
    assert_eq!(falling.rect().x, 0.0);
}

#[test]
fn landing_scenario_corrects_upward_and_reverses_velocity() {
    let mut world = WorldCore::new();
    let id = world.spawn_body(0.0, 0.0, 20.0, 20.0, BodyKind::Dynamic);
    world.spawn_body(0.0, 40.0, 20.0, 20.0, BodyKind::Static);

    let mut landed_at = None;
    for _ in 0..2000 {
        let before = *world.bodies().get(id).unwrap().rect();
        world.step();
        let body = world.bodies().get(id).unwrap();
        if body.velocity().y < 0.0 {
            assert!(body.rect().y < before.y);
            landed_at = Some(world.frame());
            break;
        }
    }

    // Roughly sqrt(2 * 20 / (9.81 / 30000)) steps of free fall.
    let frame = landed_at.expect("body never reached the floor");
    assert!((300..400).contains(&frame), "landed at frame {}", frame);
}

#[test]
fn settled_stack_keeps_body_above_floor() {
    let mut world = WorldCore::new();
    let id = world.spawn_body(0.0, 0.0, 20.0, 20.0, BodyKind::Dynamic);
    world.spawn_body(-50.0, 40.0, 120.0, 20.0, BodyKind::Static);

    for _ in 0..5000 {
        world.step();
    }

    let y = world.bodies().get(id).unwrap().rect().y;
    // Soft correction lets it sink slightly but never through the floor.
    assert!(y > 15.0 && y < 40.0, "y = {}", y);
}

#[test]
fn impulse_reaches_dynamic_bodies_only() {
    let mut world = WorldCore::new();
    let wall = world.spawn_body(0.0, 0.0, 20.0, 20.0, BodyKind::Static);
    let ball = world.spawn_body(50.0, 0.0, 20.0, 20.0, BodyKind::Dynamic);

    assert!(!world.apply_impulse(wall, 1.0, 0.0));
    assert!(world.apply_impulse(ball, 1.5, 0.0));

    world.step();
    let body = world.bodies().get(ball).unwrap();
    assert_eq!(body.rect().x, 51.5);
    assert_eq!(body.velocity().x, 1.5);
}

#[test]
fn perf_stats_only_fill_when_enabled() {
    let mut world = WorldCore::new();
    world.spawn_body(0.0, 0.0, 20.0, 20.0, BodyKind::Dynamic);
    world.spawn_body(10.0, 0.0, 20.0, 20.0, BodyKind::Dynamic);

    world.step();
    assert_eq!(world.get_perf_stats().body_count(), 0);
    assert_eq!(world.get_perf_stats().dynamic_bodies(), 0);

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.frame(), 1);
    assert_eq!(stats.body_count(), 2);
    assert_eq!(stats.dynamic_bodies(), 2);
    assert_eq!(stats.overlap_tests(), 4);
    assert_eq!(stats.x_corrections(), 2);
    assert!(stats.step_ms() >= 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats().body_count(), 0);
}

#[test]
fn extract_render_packs_bodies_in_registry_order() {
    let mut world = WorldCore::new();
    world.spawn_body_with_color(1.0, 2.0, 3.0, 4.0, BodyKind::Static, 7);
    world.spawn_body_with_color(5.0, 6.0, 7.0, 8.0, BodyKind::Static, 9);

    assert_eq!(world.extract_render(), 2);
    assert_eq!(world.render_rects(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    assert_eq!(world.render_colors(), &[7, 9]);

    world.clear();
    assert!(world.render_rects().is_empty());
    assert_eq!(world.extract_render(), 0);
}

#[test]
fn for_each_body_visits_rects_and_colors() {
    let mut world = WorldCore::new();
    world.spawn_body_with_color(1.0, 1.0, 2.0, 2.0, BodyKind::Dynamic, 3);
    world.spawn_body_with_color(9.0, 9.0, 2.0, 2.0, BodyKind::Static, 4);

    let mut seen = Vec::new();
    world.for_each_body(|rect, color| seen.push((rect.x, color)));
    assert_eq!(seen, vec![(1.0, 3), (9.0, 4)]);
}

#[test]
fn snapshot_json_describes_every_body() {
    let mut world = WorldCore::new();
    let id = world.spawn_body(3.0, 4.0, 20.0, 10.0, BodyKind::Dynamic);
    world.apply_impulse(id, 0.5, 0.0);
    world.spawn_body(0.0, 100.0, 50.0, 5.0, BodyKind::Static);

    let value: serde_json::Value = serde_json::from_str(&world.snapshot_json()).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["id"], 1);
    assert_eq!(arr[0]["kind"], "dynamic");
    assert_eq!(arr[0]["vx"], 0.5);
    assert_eq!(arr[1]["kind"], "static");
    assert_eq!(arr[1]["width"], 50.0);
}

#[test]
fn load_config_applies_and_resets_session() {
    let mut world = WorldCore::new();
    world.spawn_body(0.0, 0.0, 20.0, 20.0, BodyKind::Dynamic);
    world.step();

    world
        .load_config_json(r#"{ "gravity": 30000.0, "spawn": { "size": { "x": 4, "y": 6 } } }"#)
        .unwrap();

    assert_eq!(world.body_count(), 0);
    assert_eq!(world.frame(), 0);
    assert_eq!(world.config().gravity, 30000.0);

    let id = world.pointer_down(0.0, 0.0);
    world.step();
    let body = world.bodies().get(id).unwrap();
    assert_eq!(body.rect().size(), Vec2::new(4.0, 6.0));
    // 30000 * (1 / 30000) = 1, clamped to the 0.2 limit.
    assert_eq!(body.velocity().y, 0.2);
}

#[test]
fn bad_config_keeps_previous_state() {
    let mut world = WorldCore::new();
    world.spawn_body(0.0, 0.0, 20.0, 20.0, BodyKind::Dynamic);

    assert!(world.load_config_json("not json").is_err());
    assert_eq!(world.body_count(), 1);
    assert_eq!(*world.config(), SimConfig::default());
}

#[test]
fn setters_feed_the_next_step() {
    let mut world = WorldCore::new();
    let id = world.spawn_body(0.0, 0.0, 20.0, 20.0, BodyKind::Dynamic);

    world.set_gravity(2.0);
    world.set_gravity_step_fraction(0.5);
    world.set_max_fall_speed(5.0);
    world.step();

    assert_eq!(world.bodies().get(id).unwrap().velocity().y, 1.0);

    world.set_bounciness(0.5);
    world.set_resolution_scale(0.1);
    assert_eq!(world.config().bounciness, 0.5);
    assert_eq!(world.config().resolution_scale, 0.1);
}
