//! Integration tests for the hue wheel

mod common;
use common::*;

use rgb_colour_wheel::{HsvColour, WHEEL, WheelError};

#[test]
fn next_wraps_from_last_to_first() {
    let last = WHEEL.get(12).unwrap();
    assert_eq!(WHEEL.next(&last), Ok(WHEEL.get(0).unwrap()));
}

#[test]
fn previous_wraps_from_first_to_last() {
    let first = WHEEL.get(0).unwrap();
    assert_eq!(WHEEL.previous(&first), Ok(WHEEL.get(12).unwrap()));
}

#[test]
fn next_and_previous_step_by_thirty_degrees() {
    let orange = WHEEL.get(1).unwrap();
    assert_eq!(WHEEL.next(&orange).unwrap().hue(), 60.0);
    assert_eq!(WHEEL.previous(&orange).unwrap().hue(), 0.0);
}

#[test]
fn navigation_matches_on_hue_only() {
    // A dim orange is still at the orange position
    let dim_orange = HsvColour::new(30.0, 40.0, 10.0);
    assert_eq!(WHEEL.next(&dim_orange).unwrap().name(), "Yellow");
}

#[test]
fn full_lap_visits_every_position() {
    let mut colour = WHEEL.get(0).unwrap();
    for i in 1..=WHEEL.len() {
        colour = WHEEL.next(&colour).unwrap();
        assert_eq!(colour, WHEEL.get(i % WHEEL.len()).unwrap());
    }
}

#[test]
fn off_wheel_hue_is_an_error() {
    let colour = HsvColour::from_hue(45.0);
    assert_eq!(WHEEL.next(&colour), Err(WheelError::NotOnWheel { hue: 45.0 }));
    assert_eq!(
        WHEEL.previous(&colour),
        Err(WheelError::NotOnWheel { hue: 45.0 })
    );
}

#[test]
fn by_name_is_case_insensitive() {
    let yellow = WHEEL.by_name("Yellow").unwrap();
    assert_eq!(yellow.hue(), 60.0);
    assert_eq!(WHEEL.by_name("yellow"), Ok(yellow));
    assert_eq!(WHEEL.by_name("MAROON").unwrap().hue(), 330.0);
}

#[test]
fn red_resolves_to_the_first_red_entry() {
    assert_eq!(WHEEL.by_name("red").unwrap().hue(), 0.0);
}

#[test]
fn by_name_miss_carries_the_name() {
    match WHEEL.by_name("Nonexistent") {
        Err(WheelError::NotFound { name }) => assert_eq!(name.as_str(), "Nonexistent"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn get_out_of_range() {
    assert!(matches!(
        WHEEL.get(99),
        Err(WheelError::IndexOutOfRange { index: 99, len: 13 })
    ));
}

#[test]
fn random_picks_are_wheel_members_and_cover_the_wheel() {
    let mut rng = seeded_rng(7);
    let mut seen = [false; 13];

    for _ in 0..1000 {
        let colour = WHEEL.random(&mut rng);
        let index = WHEEL.position(&colour).expect("random pick must be on the wheel");
        seen[index] = true;
    }

    assert!(seen.iter().all(|&s| s));
}

#[test]
fn name_listing() {
    let listing = WHEEL.names("", ",").to_string();
    assert_eq!(
        listing,
        "Red,Orange,Yellow,Lime,Green,Aqua,Blue,Purple,Magenta,Pink,Crimson,Maroon,Red"
    );

    let pretty = WHEEL.names("- ", "\n").to_string();
    assert!(pretty.starts_with("- Red\n- Orange\n"));
    assert!(pretty.ends_with("- Maroon\n- Red"));
}
