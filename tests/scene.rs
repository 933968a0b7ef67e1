use wavefield_wasm::config::{SceneConfig, WaveFieldConfig};
use wavefield_wasm::scroll::ComponentId;
use wavefield_wasm::{ConfigError, FrameInput, Scene};

fn frame(time: f32, scroll_progress: f32) -> FrameInput {
    FrameInput {
        time,
        scroll_progress,
    }
}

#[test]
fn default_scene_builds() {
    let scene = Scene::new(SceneConfig::default()).unwrap();
    assert_eq!(scene.field().lines().len(), 64);
    assert_eq!(scene.intro().liquids.shapes().len(), 3);
    assert_eq!(scene.intro().backdrop.blobs().len(), 4);
}

#[test]
fn misconfiguration_fails_at_construction() {
    let config = SceneConfig {
        wave: WaveFieldConfig {
            points_per_line: 0,
            ..WaveFieldConfig::default()
        },
        ..SceneConfig::default()
    };
    assert_eq!(Scene::new(config).err(), Some(ConfigError::TooFewPoints(0)));

    let mut config = SceneConfig::default();
    config.camera.fov_y = 0.0;
    assert_eq!(Scene::new(config).err(), Some(ConfigError::InvalidFov(0.0)));

    let mut config = SceneConfig::default();
    config.fog.far = 1.0;
    assert!(matches!(Scene::new(config), Err(ConfigError::InvalidFog { .. })));
}

#[test]
fn top_of_page_shows_only_the_intro() {
    let mut scene = Scene::new(SceneConfig::default()).unwrap();
    let map = scene.update(frame(1.0, 0.0));
    assert_eq!(map.get(ComponentId::Intro), 1.0);
    assert_eq!(map.get(ComponentId::WaveField), 0.0);
    assert!(!scene.field().is_visible());
    assert!(scene.intro().liquids.is_visible());
    assert!(scene.intro().backdrop.is_visible());
    assert!(!scene.overlay().style().interactive);
}

#[test]
fn bottom_of_page_shows_only_the_waves_and_overlay() {
    let mut scene = Scene::new(SceneConfig::default()).unwrap();
    scene.update(frame(2.0, 1.0));
    assert!(scene.field().is_visible());
    assert_eq!(scene.field().opacity(), 1.0);
    assert!(!scene.intro().liquids.is_visible());
    assert!(!scene.intro().backdrop.is_visible());
    assert!(scene.overlay().style().interactive);

    let mut instances = Vec::new();
    scene.intro().liquids.instances(2.0, &mut instances);
    assert!(instances.is_empty());
}

#[test]
fn between_the_windows_nothing_animates() {
    let mut scene = Scene::new(SceneConfig::default()).unwrap();
    let map = scene.update(frame(0.5, 0.6));
    assert_eq!(map.get(ComponentId::Intro), 0.0);
    assert_eq!(map.get(ComponentId::WaveField), 0.0);
    assert!(!scene.field().is_visible());
}

#[test]
fn repeated_frames_are_identical() {
    let mut scene = Scene::new(SceneConfig::default()).unwrap();
    let a = scene.update(frame(12.5, 0.9));
    let lines = scene.field().lines().to_vec();
    scene.update(frame(13.0, 0.95));
    let b = scene.update(frame(12.5, 0.9));
    assert_eq!(a, b);
    assert_eq!(scene.field().lines(), &lines[..]);
}

#[test]
fn half_faded_intro_drifts_up_and_grows() {
    let mut scene = Scene::new(SceneConfig::default()).unwrap();
    let time = 1.5;

    scene.update(frame(time, 0.0));
    let mut resting = Vec::new();
    scene.intro().liquids.instances(time, &mut resting);

    let map = scene.update(frame(time, 0.25));
    assert!((map.get(ComponentId::Intro) - 0.5).abs() < 1e-6);
    let mut drifted = Vec::new();
    scene.intro().liquids.instances(time, &mut drifted);

    assert_eq!(resting.len(), 3);
    assert_eq!(drifted.len(), 3);
    for (a, b) in resting.iter().zip(&drifted) {
        assert!((b.center.y - (a.center.y * 1.1 + 4.0)).abs() < 1e-4);
        assert!((b.center.x - a.center.x * 1.1).abs() < 1e-4);
        assert!((b.radius - a.radius * 1.1).abs() < 1e-5);
        assert!((b.opacity - 0.5).abs() < 1e-6);
    }
}
