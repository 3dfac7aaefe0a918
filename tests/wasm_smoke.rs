#![cfg(target_arch = "wasm32")]

use negen_physics::World;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn world_steps_under_wasm() {
    let mut world = World::new();
    let ground = world.spawn_static_box(400.0, 575.0, 800.0, 50.0);
    let id = world.spawn_box(400.0, 500.0, 20.0, 20.0);
    assert_ne!(ground, 0);
    assert_ne!(id, 0);

    for _ in 0..60 {
        world.step(1.0 / 60.0).unwrap();
    }

    let y = world.body_y(id).expect("body exists");
    assert!(y > 500.0 && y <= 541.0);
}

#[wasm_bindgen_test]
fn facade_maps_errors_to_js() {
    let mut world = World::new();
    assert!(world.step(0.0).is_err());
    assert!(world.step(f32::NAN).is_err());
    assert!(world
        .spawn_polygon(0.0, 0.0, &[0.0, 0.0, 10.0], false)
        .is_err());
    assert!(world.load_config_json("not json".to_string()).is_err());
    assert!(world.set_gravity(f32::NAN).is_err());
}
