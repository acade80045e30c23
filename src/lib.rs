#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RgbColour`**: 8-bit RGB colour with palette name lookup and conversion to HSV
//! - **`HsvColour`**: Hue (degrees) / saturation / value (percent) colour with conversion to RGB
//! - **`names`**: The basic and extended named-colour palettes
//! - **`HsvWheel`**: Ring of thirteen hues (0, 30, ..., 360) used for auto-cycling and name lookup
//! - **`command`**: Parser for the serial protocol (`RGB(r,g,b)`, `HSV(h[,s,v])`, colour names)
//! - **`ColourCycler`**: Control loop that applies commands and cycles the wheel when idle
//! - **`RgbLed`**: Trait to implement for your PWM hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Components are clamped on construction: RGB channels to 0-255, hue to
//! 0-360 and saturation/value to 0-100.

pub mod rgb;
pub mod hsv;
pub mod names;
pub mod wheel;
pub mod command;
pub mod time;
pub mod cycler;

pub use rgb::RgbColour;
pub use hsv::HsvColour;
pub use wheel::{HsvWheel, WHEEL, WheelError};
pub use command::{Command, Interpretation, ParseError, Usage, interpret, parse};
pub use time::{TimeInstant, TimeSource};
pub use cycler::{ColourCycler, CyclerConfig, CyclerMode, RgbLed, Status};

/// All channels off.
pub const COLOUR_OFF: RgbColour = RgbColour::new(0, 0, 0);
