use super::*;

#[test]
fn hidden_style_offsets_and_hides() {
    let style = entrance_style(Entrance::SECTION, false);
    assert!(style.starts_with("opacity: 0; transform: translateY(16px) scale(1);"));
    assert!(style.contains("opacity 600ms ease-out 0ms"));
}

#[test]
fn revealed_style_clears_transform_and_keeps_timing() {
    let style = entrance_style(Entrance::SECTION.with_delay(120), true);
    assert!(style.starts_with("opacity: 1; transform: none;"));
    assert!(style.contains("transform 600ms ease-out 120ms"));
}

#[test]
fn header_entrance_slides_down_from_above() {
    let style = entrance_style(Entrance::HEADER, false);
    assert!(style.contains("translateY(-8px)"));
}

#[test]
fn reveal_fires_once_on_first_threshold_crossing() {
    let mut state = RevealState::default();
    assert!(!state.observe(0.1, true));
    assert!(!state.revealed);
    assert!(state.observe(0.25, true));
    assert!(state.revealed);
    assert!(!state.observe(0.9, true));
    assert!(!state.observe(0.0, false));
    assert!(!state.observe(0.5, true));
    assert!(state.revealed);
}

#[test]
fn reveal_ignores_non_intersecting_entries() {
    let mut state = RevealState::new(0.2);
    assert!(!state.observe(0.5, false));
    assert!(!state.revealed);
}

#[test]
fn reveal_threshold_is_inclusive() {
    let mut state = RevealState::new(0.2);
    assert!(state.observe(0.2, true));
}

#[test]
fn threshold_is_clamped_into_unit_range() {
    assert_eq!(RevealState::new(2.0).threshold(), 1.0);
    assert_eq!(RevealState::new(-1.0).threshold(), 0.0);
    assert_eq!(RevealState::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
}
