use glyphfield_core::{
    render, render_at, AnimationClock, Palette, PalettePreset, Pattern, PatternParams, TIME_SCALE,
};

#[test]
fn n_ticks_advance_frame_by_n() {
    let mut clock = AnimationClock::new();
    for _ in 0..240 {
        clock.tick();
    }
    assert_eq!(clock.frame(), 240);
}

#[test]
fn stopped_clock_ignores_ticks() {
    let mut clock = AnimationClock::new();
    for _ in 0..10 {
        clock.tick();
    }
    clock.set_running(false);
    for _ in 0..100 {
        clock.tick();
    }
    assert_eq!(clock.frame(), 10);
}

#[test]
fn resume_continues_from_where_it_left_off() {
    let mut clock = AnimationClock::new();
    for _ in 0..5 {
        clock.tick();
    }
    clock.set_running(false);
    clock.tick();
    clock.set_running(true);
    clock.tick();
    assert_eq!(clock.frame(), 6);
}

#[test]
fn initial_state_is_configurable() {
    let mut clock = AnimationClock::stopped();
    assert!(!clock.is_running());
    clock.tick();
    assert_eq!(clock.frame(), 0);
}

#[test]
fn time_is_frame_times_scale() {
    let mut clock = AnimationClock::new();
    for _ in 0..20 {
        clock.tick();
    }
    assert_eq!(clock.time(), 20.0 * TIME_SCALE);

    let mut slow = AnimationClock::new().with_time_scale(0.01);
    slow.tick();
    assert_eq!(slow.time(), 0.01);
}

#[test]
fn rescaled_clock_drives_rendering_through_render_at() {
    let params = PatternParams::default();
    let palette = Palette::from(PalettePreset::Blocks);

    // time_scale 0.1 after 5 ticks is t = 0.5, the same field time the
    // default scale reaches at frame 10.
    let mut clock = AnimationClock::new().with_time_scale(0.1);
    for _ in 0..5 {
        clock.tick();
    }
    let rescaled = render_at(Pattern::Ripples, clock.time(), &params, &palette, None).unwrap();
    let default = render(Pattern::Ripples, 10, &params, &palette, None).unwrap();
    assert_eq!(rescaled.as_str(), default.as_str());

    // And a different scale lands on a different frame.
    let other = render(Pattern::Ripples, 60, &params, &palette, None).unwrap();
    assert_ne!(rescaled.as_str(), other.as_str());
}
