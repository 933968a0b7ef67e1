use std::f32::consts::PI;

use wavefield_wasm::camera::{Camera, Viewport};
use wavefield_wasm::config::{CameraConfig, OrbitLimits};
use wavefield_wasm::intro::Backdrop;
use wavefield_wasm::intro::IntroScene;

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

fn camera(width: f32, height: f32) -> Camera {
    let mut camera = Camera::new(CameraConfig::default(), OrbitLimits::default());
    camera.set_viewport_size(width, height);
    camera
}

#[test]
fn viewport_height_is_independent_of_aspect() {
    let wide = camera(1920.0, 1080.0).viewport();
    let tall = camera(1080.0, 1920.0).viewport();
    assert!(approx_eq(wide.height, tall.height, 1e-5));
    assert!(approx_eq(wide.width / wide.height, 1920.0 / 1080.0, 1e-5));
    assert!(approx_eq(tall.width / tall.height, 1080.0 / 1920.0, 1e-5));

    // Default camera sits sqrt(148) units from the origin with a 45 degree fov.
    let expected = 2.0 * (22.5_f32).to_radians().tan() * 148.0_f32.sqrt();
    assert!(approx_eq(wide.height, expected, 1e-4));
}

#[test]
fn backdrop_blobs_follow_the_viewport() {
    let scene = IntroScene::default();
    let backdrop: &Backdrop = &scene.backdrop;
    let mut quads = Vec::new();

    let small = Viewport::at_distance(45.0, 1.0, 10.0);
    let large = Viewport::at_distance(45.0, 2.0, 10.0);
    backdrop.quads(small, &mut quads);
    let small_quads = quads.clone();
    backdrop.quads(large, &mut quads);

    assert_eq!(quads.len(), 5);
    // Base plane first and solid, blobs soft.
    assert!(!quads[0].soft);
    assert!(quads[1..].iter().all(|q| q.soft));
    for (a, b) in small_quads.iter().zip(&quads).skip(1) {
        assert!(approx_eq(b.size.x, a.size.x * 2.0, 1e-4));
        assert!(approx_eq(b.center.y, a.center.y, 1e-4));
    }
    // Blob opacity carries its base opacity.
    assert!(approx_eq(quads[1].opacity, 0.6, 1e-6));
}

#[test]
fn orbit_is_clamped_to_the_polar_band() {
    let mut cam = camera(800.0, 600.0);
    let polar = cam.polar();
    assert!(polar > PI / 3.0 && polar < PI / 2.0);

    cam.orbit_drag(0.0, 10_000.0, 600.0);
    assert!(approx_eq(cam.polar(), PI / 3.0, 1e-6));
    cam.orbit_drag(0.0, -10_000.0, 600.0);
    assert!(approx_eq(cam.polar(), PI / 2.0, 1e-6));

    // Orbit never changes the distance to the target.
    let before = cam.position().length();
    cam.orbit_drag(250.0, 30.0, 600.0);
    assert!(approx_eq(cam.position().length(), before, 1e-4));
}

#[test]
fn default_camera_matches_its_configured_position() {
    let cam = camera(800.0, 600.0);
    let p = cam.position();
    assert!(approx_eq(p.x, 0.0, 1e-5));
    assert!(approx_eq(p.y, 2.0, 1e-4));
    assert!(approx_eq(p.z, 12.0, 1e-4));
}
