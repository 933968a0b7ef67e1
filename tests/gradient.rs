use wavefield_wasm::color::{ColorStop, Gradient, Rgb};
use wavefield_wasm::ConfigError;

fn max_channel_diff(a: Rgb, b: Rgb) -> f32 {
    (a.r - b.r).abs().max((a.g - b.g).abs()).max((a.b - b.b).abs())
}

#[test]
fn sampling_is_continuous_across_a_stop() {
    let g = Gradient::brand();
    let boundary = g.stops()[1].offset;
    for eps in [1e-2_f32, 1e-3, 1e-4] {
        let diff = max_channel_diff(g.sample(boundary - eps), g.sample(boundary + eps));
        assert!(diff < 4.0 * eps, "jump of {diff} for eps {eps}");
    }
}

#[test]
fn sampling_clamps_outside_the_stops() {
    let g = Gradient::brand();
    let first = g.stops()[0].color;
    let last = g.stops()[3].color;
    assert_eq!(g.sample(-0.5), first);
    assert_eq!(g.sample(0.0), first);
    assert_eq!(g.sample(1.0), last);
    assert_eq!(g.sample(7.0), last);
    assert_eq!(g.sample(f32::NAN), first);
}

#[test]
fn sampling_hits_stop_colors_exactly() {
    let g = Gradient::aurora();
    assert!(max_channel_diff(g.sample(0.5), g.stops()[1].color) < 1e-6);
    let quarter = g.sample(0.25);
    let expected = g.stops()[0].color.lerp(g.stops()[1].color, 0.5);
    assert!(max_channel_diff(quarter, expected) < 1e-6);
}

#[test]
fn segments_are_found_by_offset() {
    let g = Gradient::brand();
    assert_eq!(g.segment_of(0.1), 0);
    assert_eq!(g.segment_of(0.5), 1);
    assert_eq!(g.segment_of(0.9), 2);
    assert_eq!(g.segment_of(1.0), 2);
}

#[test]
fn malformed_stop_lists_are_rejected() {
    let red = Rgb::new(1.0, 0.0, 0.0);
    assert_eq!(
        Gradient::new(vec![ColorStop::new(0.0, red)]).err(),
        Some(ConfigError::TooFewStops(1))
    );
    assert_eq!(
        Gradient::new(vec![ColorStop::new(0.0, red), ColorStop::new(1.5, red)]).err(),
        Some(ConfigError::StopOutOfRange {
            index: 1,
            offset: 1.5
        })
    );
    assert_eq!(
        Gradient::new(vec![
            ColorStop::new(0.0, red),
            ColorStop::new(0.6, red),
            ColorStop::new(0.4, red),
        ])
        .err(),
        Some(ConfigError::StopsUnordered {
            index: 2,
            offset: 0.4
        })
    );
    assert!(matches!(
        Gradient::from_hex_stops(&[(0.0, "#000000"), (1.0, "#nothex")]),
        Err(ConfigError::InvalidHex(_))
    ));
}
