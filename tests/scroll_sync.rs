use wavefield_wasm::overlay::Overlay;
use wavefield_wasm::scroll::{
    progress_from_offsets, ComponentId, FadeDirection, FadeSchedule, FadeWindow, Fadeable,
    IntroTransform, OverlayStyle, ScrollSync, ScrollTracker,
};
use wavefield_wasm::ConfigError;

struct Probe {
    id: ComponentId,
    opacity: Option<f32>,
}

impl Fadeable for Probe {
    fn component(&self) -> ComponentId {
        self.id
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = Some(opacity);
    }
}

fn steps() -> impl Iterator<Item = f32> {
    (0..=200).map(|i| i as f32 / 200.0)
}

#[test]
fn intro_fades_out_over_the_first_half() {
    let sync = ScrollSync::default();
    for p in steps() {
        let o = sync.opacities(p).get(ComponentId::Intro);
        if p <= 0.5 {
            assert!((o - (1.0 - p / 0.5)).abs() < 1e-6, "p={p} o={o}");
        } else {
            assert_eq!(o, 0.0);
        }
        assert_eq!(o, sync.opacities(p).get(ComponentId::Backdrop));
    }
}

#[test]
fn wave_and_overlay_fade_in_over_the_last_quarter() {
    let sync = ScrollSync::default();
    for p in steps() {
        let map = sync.opacities(p);
        let o = map.get(ComponentId::WaveField);
        if p < 0.75 {
            assert_eq!(o, 0.0);
        } else {
            assert!((o - (p - 0.75) / 0.25).abs() < 1e-6, "p={p} o={o}");
        }
        assert_eq!(o, map.get(ComponentId::Overlay));
    }
    assert_eq!(sync.opacities(1.0).get(ComponentId::WaveField), 1.0);
}

#[test]
fn progress_outside_the_page_is_clamped() {
    let sync = ScrollSync::default();
    assert_eq!(sync.opacities(-3.0), sync.opacities(0.0));
    assert_eq!(sync.opacities(4.0), sync.opacities(1.0));
}

#[test]
fn apply_pushes_opacity_into_each_component() {
    let mut sync = ScrollSync::default();
    let mut intro = Probe {
        id: ComponentId::Intro,
        opacity: None,
    };
    let mut wave = Probe {
        id: ComponentId::WaveField,
        opacity: None,
    };
    let components: &mut [&mut dyn Fadeable] = &mut [&mut intro, &mut wave];
    let map = sync.apply(0.875, components);
    assert_eq!(intro.opacity, Some(0.0));
    assert_eq!(wave.opacity, Some(0.5));
    assert_eq!(map.get(ComponentId::WaveField), 0.5);
}

#[test]
fn unscheduled_components_stay_opaque() {
    let schedule = FadeSchedule::new(vec![(
        ComponentId::WaveField,
        FadeWindow::new(ComponentId::WaveField, 0.2, 0.4, FadeDirection::In).unwrap(),
    )])
    .unwrap();
    let map = schedule.evaluate(0.3);
    assert_eq!(map.get(ComponentId::Intro), 1.0);
    assert!((map.get(ComponentId::WaveField) - 0.5).abs() < 1e-6);
}

#[test]
fn bad_windows_are_rejected() {
    assert!(matches!(
        FadeWindow::new(ComponentId::Overlay, 0.8, 0.8, FadeDirection::In),
        Err(ConfigError::InvertedWindow { .. })
    ));
    assert!(matches!(
        FadeWindow::new(ComponentId::Overlay, 0.9, 0.1, FadeDirection::Out),
        Err(ConfigError::InvertedWindow { .. })
    ));
    assert!(matches!(
        FadeWindow::new(ComponentId::Overlay, -0.5, 0.5, FadeDirection::Out),
        Err(ConfigError::WindowOutOfRange { .. })
    ));

    let w = FadeWindow::new(ComponentId::Intro, 0.0, 0.5, FadeDirection::Out).unwrap();
    assert_eq!(
        FadeSchedule::new(vec![(ComponentId::Intro, w), (ComponentId::Intro, w)]).err(),
        Some(ConfigError::DuplicateComponent("intro"))
    );
}

#[test]
fn intro_drifts_up_and_grows_as_it_fades() {
    let start = IntroTransform::from_opacity(1.0);
    assert_eq!((start.offset_y, start.scale, start.visible), (0.0, 1.0, true));

    let half = IntroTransform::from_opacity(0.5);
    assert!((half.offset_y - 4.0).abs() < 1e-6);
    assert!((half.scale - 1.1).abs() < 1e-6);

    let gone = IntroTransform::from_opacity(0.0);
    assert_eq!((gone.offset_y, gone.scale, gone.visible), (8.0, 1.2, false));
    assert!(!IntroTransform::from_opacity(0.01).visible);
}

#[test]
fn overlay_is_interactive_only_when_mostly_opaque() {
    assert!(!OverlayStyle::from_opacity(0.5).interactive);
    assert!(!OverlayStyle::from_opacity(0.8).interactive);
    assert!(OverlayStyle::from_opacity(0.81).interactive);

    let shown = OverlayStyle::from_opacity(1.0);
    assert_eq!(shown.css_transform(), "translateY(0.00px) scale(1.0000)");
    assert_eq!(shown.css_pointer_events(), "auto");

    let hidden = OverlayStyle::from_opacity(0.0);
    assert_eq!(hidden.css_transform(), "translateY(40.00px) scale(0.9500)");
    assert_eq!(hidden.css_pointer_events(), "none");
    assert_eq!(hidden.css_visibility(), "hidden");
}

#[test]
fn overlay_reports_only_changed_styles() {
    let mut overlay = Overlay::new();
    assert!(overlay.take_changed().is_some());
    assert!(overlay.take_changed().is_none());

    overlay.set_opacity(0.0);
    assert!(overlay.take_changed().is_none());

    overlay.set_opacity(0.9);
    let style = overlay.take_changed().unwrap();
    assert!(style.interactive);
    assert!(overlay.take_changed().is_none());
}

#[test]
fn page_offsets_map_to_progress() {
    assert_eq!(progress_from_offsets(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(progress_from_offsets(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(progress_from_offsets(2500.0, 3000.0, 1000.0), 1.0);
    assert_eq!(progress_from_offsets(100.0, 800.0, 1000.0), 0.0);
}

#[test]
fn tracker_eases_toward_the_page_and_lands_exactly() {
    let mut snap = ScrollTracker::new(0.0);
    snap.set_target(0.4);
    assert_eq!(snap.advance(0.016), 0.4);

    let mut tracker = ScrollTracker::new(0.25);
    tracker.set_target(1.0);
    let mut prev = tracker.progress();
    for _ in 0..30 {
        let p = tracker.advance(1.0 / 60.0);
        assert!(p > prev && p < 1.0);
        prev = p;
    }
    for _ in 0..2000 {
        tracker.advance(1.0 / 60.0);
    }
    assert_eq!(tracker.progress(), 1.0);
}
