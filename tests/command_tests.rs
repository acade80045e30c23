//! Integration tests for serial command interpretation

mod common;
use common::*;

use rgb_colour_wheel::{
    Command, HsvColour, Interpretation, ParseError, RgbColour, Usage, WHEEL, interpret, parse,
};

#[test]
fn rgb_with_internal_whitespace() {
    let command = parse("RGB(10, 20, 30)", &WHEEL).unwrap();
    assert_eq!(command, Command::Rgb(RgbColour::new(10, 20, 30)));
}

#[test]
fn rgb_target_is_the_converted_colour() {
    let command = parse("RGB(255,255,0)", &WHEEL).unwrap();
    assert_eq!(command.target().to_rgb(), RgbColour::new(255, 255, 0));
}

#[test]
fn hsv_forms() {
    assert_eq!(
        parse("HSV(60)", &WHEEL),
        Ok(Command::Hsv(HsvColour::new(60.0, 100.0, 100.0)))
    );
    assert_eq!(
        parse("HSV(60,50,25)", &WHEEL),
        Ok(Command::Hsv(HsvColour::new(60.0, 50.0, 25.0)))
    );
    assert_eq!(
        parse("HSV(999,-1,101)", &WHEEL),
        Ok(Command::Hsv(HsvColour::new(360.0, 0.0, 100.0)))
    );
}

#[test]
fn colour_names() {
    let command = parse("crimson", &WHEEL).unwrap();
    assert!(matches!(command, Command::Named(_)));
    assert_eq!(command.target().hue(), 300.0);
}

#[test]
fn malformed_lines() {
    assert_eq!(parse("bogus", &WHEEL), Err(ParseError::UnknownName));
    assert_eq!(parse("RGB(1;2;3)", &WHEEL).unwrap_err(), ParseError::WrongArity {
        expected: "3",
        found: 1,
    });
    assert_eq!(parse("HSV(x)", &WHEEL), Err(ParseError::InvalidNumber));
    assert_eq!(parse("\r\n", &WHEEL), Err(ParseError::Empty));
}

#[test]
fn bogus_input_falls_back_to_a_wheel_colour() {
    let mut rng = seeded_rng(42);

    for _ in 0..50 {
        let interpretation = interpret("bogus", &WHEEL, &mut rng);
        assert!(interpretation.is_fallback());
        assert!(WHEEL.position(&interpretation.target()).is_some());
    }
}

#[test]
fn fallback_records_the_reason() {
    let mut rng = seeded_rng(1);
    match interpret("RGB(1,2)", &WHEEL, &mut rng) {
        Interpretation::Fallback { error, .. } => {
            assert_eq!(error, ParseError::WrongArity { expected: "3", found: 2 });
        }
        other => panic!("expected a fallback, got {:?}", other),
    }
}

#[test]
fn valid_input_is_not_randomised() {
    let mut rng = seeded_rng(3);
    let interpretation = interpret("HSV(90)", &WHEEL, &mut rng);
    assert!(!interpretation.is_fallback());
    assert_eq!(interpretation.target(), HsvColour::from_hue(90.0));
    assert_eq!(interpretation.to_string(), "H: 90 S: 100 V: 100");
}

#[test]
fn usage_text() {
    let usage = Usage::new(&WHEEL).to_string();
    assert!(usage.contains("  - RGB([0-255],[0-255],[0-255])\n"));
    assert!(usage.contains("  - HSV([0-360],[0-100],[0-100])\n"));
    assert!(usage.contains("     Maroon,\n"));
}
