use glyphfield_core::pointer::perturb;
use glyphfield_core::{render, Palette, PalettePreset, Pattern, PatternParams, PointerState};

#[test]
fn engaged_pointer_changes_the_frame() {
    let params = PatternParams {
        width: 20,
        height: 10,
        density: 1.0,
        ..PatternParams::default()
    };
    let palette = Palette::from(PalettePreset::Ascii);

    // frame 11 -> t = 0.55, sin(3t) ~ 0.997: near-maximal pulse.
    let plain = render(Pattern::Ripples, 11, &params, &palette, None).unwrap();
    let engaged = render(
        Pattern::Ripples,
        11,
        &params,
        &palette,
        Some(PointerState::new(10.0, 5.0, true)),
    )
    .unwrap();

    assert_ne!(plain.as_str(), engaged.as_str());
}

#[test]
fn disengaged_pointer_renders_like_no_pointer() {
    let params = PatternParams::default();
    let palette = Palette::from(PalettePreset::Blocks);

    let none = render(Pattern::Spiral, 30, &params, &palette, None).unwrap();
    let idle = render(
        Pattern::Spiral,
        30,
        &params,
        &palette,
        Some(PointerState::new(5.0, 5.0, false)),
    )
    .unwrap();

    assert_eq!(none.as_str(), idle.as_str());
}

#[test]
fn perturbation_is_strongest_at_the_pointer_cell() {
    let ptr = PointerState::new(7.0, 3.0, true);
    let t = 0.55;
    let at_pointer = (perturb(0.0, 7.0, 3.0, ptr, t)).abs();
    for (x, y) in [(8.0, 3.0), (7.0, 6.0), (0.0, 0.0)] {
        let elsewhere = (perturb(0.0, x, y, ptr, t)).abs();
        assert!(at_pointer >= elsewhere);
    }
    // Coincident cell: decay factor is exactly exp(0) = 1.
    assert_eq!(at_pointer, (0.5 * (t * 3.0).sin()).abs());
}
