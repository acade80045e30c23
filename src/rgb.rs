//! 8-bit-per-channel RGB colour values.

use core::fmt;
use core::ops::{Add, Sub};

use palette::{FromColor, Hsv, Srgb};

use crate::hsv::HsvColour;
use crate::names;

/// Name reported for colours found in neither palette.
pub const UNKNOWN_NAME: &str = "Unknown";

/// An RGB colour with one byte per channel.
///
/// Channels map directly onto 8-bit PWM duty values. A colour may carry a
/// caller-supplied name; otherwise [`RgbColour::name`] resolves one from the
/// static palettes in [`crate::names`]. The name never takes part in
/// equality.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbColour {
    red: u8,
    green: u8,
    blue: u8,
    name: Option<&'static str>,
}

impl RgbColour {
    /// Creates a colour whose name is resolved by palette lookup.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            name: None,
        }
    }

    /// Creates a colour with a fixed name. No palette lookup is done.
    #[inline]
    pub const fn named(name: &'static str, red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            name: Some(name),
        }
    }

    /// Creates a colour from wide integers, clamping each channel to 0-255.
    pub fn from_clamped(red: i32, green: i32, blue: i32) -> Self {
        Self::new(clamp_channel(red), clamp_channel(green), clamp_channel(blue))
    }

    /// Clamping constructor that also attaches a fixed name.
    pub fn from_clamped_named(name: &'static str, red: i32, green: i32, blue: i32) -> Self {
        Self::named(
            name,
            clamp_channel(red),
            clamp_channel(green),
            clamp_channel(blue),
        )
    }

    #[inline]
    pub const fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub const fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Channel values in red, green, blue order.
    #[inline]
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// The name supplied at construction, if any.
    #[inline]
    pub const fn given_name(&self) -> Option<&'static str> {
        self.name
    }

    /// Returns the colour's name.
    ///
    /// A name supplied at construction takes precedence. Otherwise the basic
    /// palette and then the extended palette are searched for an exact
    /// channel match, falling back to `"Unknown"`.
    pub fn name(&self) -> &'static str {
        self.name
            .or_else(|| names::find_name(self))
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Returns the complementary colour.
    pub fn invert(&self) -> Self {
        Self::new(255 - self.red, 255 - self.green, 255 - self.blue)
    }

    /// Converts to HSV with hue in degrees and saturation/value in percent.
    ///
    /// Grey colours (including black and white) get hue 0.
    pub fn to_hsv(&self) -> HsvColour {
        let rgb: Srgb<f32> = Srgb::new(self.red, self.green, self.blue).into_format();
        let hsv: Hsv = Hsv::from_color(rgb);

        HsvColour::new(
            hsv.hue.into_positive_degrees(),
            hsv.saturation * 100.0,
            hsv.value * 100.0,
        )
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

impl PartialEq for RgbColour {
    fn eq(&self, other: &Self) -> bool {
        self.channels() == other.channels()
    }
}

impl Eq for RgbColour {}

impl Add for RgbColour {
    type Output = RgbColour;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.red.saturating_add(other.red),
            self.green.saturating_add(other.green),
            self.blue.saturating_add(other.blue),
        )
    }
}

impl Sub for RgbColour {
    type Output = RgbColour;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.red.saturating_sub(other.red),
            self.green.saturating_sub(other.green),
            self.blue.saturating_sub(other.blue),
        )
    }
}

impl From<HsvColour> for RgbColour {
    fn from(hsv: HsvColour) -> Self {
        hsv.to_rgb()
    }
}

impl fmt::Display for RgbColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({},{},{})", self.red, self.green, self.blue)
    }
}
