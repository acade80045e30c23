//! Hue/saturation/value colours.
//!
//! Hue is expressed in degrees (0-360), saturation and value in percent
//! (0-100). Components are kept as fixed-point hundredths, so inverting and
//! reflecting are exact. The conversion to RGB normalises to fractions
//! internally and returns 8-bit channels.

use core::fmt;
use core::ops::{Add, Sub};

use palette::{FromColor, Hsv, Srgb};

use crate::rgb::RgbColour;

/// Upper bound of the hue range in degrees.
pub const MAX_HUE: f32 = 360.0;

/// Upper bound of saturation and value in percent.
pub const MAX_PERCENT: f32 = 100.0;

/// Stored steps per degree or percent point.
const SCALE: f32 = 100.0;

const MAX_HUE_CENTI: u16 = 36_000;
const MAX_PERCENT_CENTI: u16 = 10_000;

/// A colour in HSV form.
///
/// All components are clamped into range on construction, so every value of
/// this type is displayable.
///
/// Inputs are rounded to the nearest hundredth of a degree or percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HsvColour {
    hue: u16,
    saturation: u16,
    value: u16,
}

impl HsvColour {
    /// Creates a colour, clamping hue to 0-360 and saturation/value to 0-100.
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue: clamp_component(hue, MAX_HUE),
            saturation: clamp_component(saturation, MAX_PERCENT),
            value: clamp_component(value, MAX_PERCENT),
        }
    }

    /// Creates a fully saturated, full brightness colour of the given hue.
    pub fn from_hue(hue: f32) -> Self {
        Self::new(hue, MAX_PERCENT, MAX_PERCENT)
    }

    /// Builds a colour from hundredths already known to be in range.
    pub(crate) const fn from_centi(hue: u16, saturation: u16, value: u16) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    #[inline]
    pub fn hue(&self) -> f32 {
        self.hue as f32 / SCALE
    }

    #[inline]
    pub fn saturation(&self) -> f32 {
        self.saturation as f32 / SCALE
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value as f32 / SCALE
    }

    /// Label from the hue-name table. See [`hue_name`].
    pub fn name(&self) -> &'static str {
        hue_name(self.hue())
    }

    /// Reflects every component across its range.
    pub fn invert(&self) -> Self {
        Self::from_centi(
            MAX_HUE_CENTI - self.hue,
            MAX_PERCENT_CENTI - self.saturation,
            MAX_PERCENT_CENTI - self.value,
        )
    }

    /// Converts to 8-bit RGB.
    ///
    /// Hue 360 produces the same channels as hue 0.
    pub fn to_rgb(&self) -> RgbColour {
        let hsv: Hsv = Hsv::new(
            self.hue(),
            self.saturation() / MAX_PERCENT,
            self.value() / MAX_PERCENT,
        );
        let rgb: Srgb = Srgb::from_color(hsv);
        let rgb: Srgb<u8> = rgb.into_format();

        RgbColour::new(rgb.red, rgb.green, rgb.blue)
    }
}

/// Maps a hue to its wheel label.
///
/// Only exact multiples of 30 between 30 and 330 have their own label; every
/// other hue, including 0 and 360, is `"Red"`.
pub fn hue_name(hue: f32) -> &'static str {
    let whole = hue as u32;
    if whole as f32 != hue {
        return "Red";
    }

    match whole {
        30 => "Orange",
        60 => "Yellow",
        90 => "Lime",
        120 => "Green",
        150 => "Aqua",
        180 => "Blue",
        210 => "Purple",
        240 => "Magenta",
        270 => "Pink",
        300 => "Crimson",
        330 => "Maroon",
        _ => "Red",
    }
}

fn clamp_component(component: f32, max: f32) -> u16 {
    if component.is_nan() {
        0
    } else {
        libm::roundf(component.clamp(0.0, max) * SCALE) as u16
    }
}

fn saturating_sum(a: u16, b: u16, max: u16) -> u16 {
    (a as u32 + b as u32).min(max as u32) as u16
}

impl Add for HsvColour {
    type Output = HsvColour;

    fn add(self, other: Self) -> Self {
        Self::from_centi(
            saturating_sum(self.hue, other.hue, MAX_HUE_CENTI),
            saturating_sum(self.saturation, other.saturation, MAX_PERCENT_CENTI),
            saturating_sum(self.value, other.value, MAX_PERCENT_CENTI),
        )
    }
}

impl Sub for HsvColour {
    type Output = HsvColour;

    fn sub(self, other: Self) -> Self {
        Self::from_centi(
            self.hue.saturating_sub(other.hue),
            self.saturation.saturating_sub(other.saturation),
            self.value.saturating_sub(other.value),
        )
    }
}

impl From<RgbColour> for HsvColour {
    fn from(rgb: RgbColour) -> Self {
        rgb.to_hsv()
    }
}

/// Prints whole degrees and percent, rounded to nearest.
impl fmt::Display for HsvColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            whole(self.hue),
            whole(self.saturation),
            whole(self.value)
        )
    }
}

fn whole(centi: u16) -> u16 {
    (centi + 50) / 100
}
