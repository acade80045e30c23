//! The hue wheel: a fixed ring of thirteen representative hues.
//!
//! The wheel holds fully saturated, full brightness colours at every 30
//! degrees from 0 to 360 inclusive. Both 0 and 360 are kept as separate
//! positions, so stepping forward from 330 visits red at 360 before wrapping
//! round to red at 0.

use core::fmt;

use heapless::String;
use rand::Rng;

use crate::hsv::HsvColour;

/// Number of positions on the wheel.
pub const WHEEL_LEN: usize = 13;

/// Longest name kept in a [`WheelError::NotFound`]; longer names are truncated.
pub const MAX_NAME_LEN: usize = 24;

/// The standard hue wheel shared by the whole program.
pub static WHEEL: HsvWheel = HsvWheel::standard();

/// Errors from wheel lookups and navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    /// Index past the end of the wheel.
    IndexOutOfRange { index: usize, len: usize },

    /// No wheel colour has this name.
    NotFound { name: String<MAX_NAME_LEN> },

    /// The colour's hue does not match any wheel position.
    NotOnWheel { hue: f32 },
}

impl WheelError {
    fn not_found(name: &str) -> Self {
        let mut kept = String::new();
        for c in name.chars() {
            if kept.push(c).is_err() {
                break;
            }
        }
        WheelError::NotFound { name: kept }
    }
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::IndexOutOfRange { index, len } => {
                write!(f, "wheel index {} out of range (wheel has {} colours)", index, len)
            }
            WheelError::NotFound { name } => {
                write!(f, "colour {{{}}} not found", name)
            }
            WheelError::NotOnWheel { hue } => {
                write!(f, "hue {} is not on the wheel", hue)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WheelError {}

#[cfg(feature = "defmt")]
impl defmt::Format for WheelError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            WheelError::IndexOutOfRange { index, len } => {
                defmt::write!(f, "IndexOutOfRange {{ index: {}, len: {} }}", index, len)
            }
            WheelError::NotFound { name } => {
                defmt::write!(f, "NotFound {{ name: {=str} }}", name.as_str())
            }
            WheelError::NotOnWheel { hue } => {
                defmt::write!(f, "NotOnWheel {{ hue: {} }}", hue)
            }
        }
    }
}

/// An ordered, wrapping ring of wheel colours.
#[derive(Debug, Clone)]
pub struct HsvWheel {
    colours: [HsvColour; WHEEL_LEN],
}

impl HsvWheel {
    /// Builds the standard wheel at 0, 30, ..., 360 degrees.
    pub const fn standard() -> Self {
        let mut colours = [HsvColour::from_centi(0, 10_000, 10_000); WHEEL_LEN];
        let mut i = 0;
        while i < WHEEL_LEN {
            colours[i] = HsvColour::from_centi((i * 3_000) as u16, 10_000, 10_000);
            i += 1;
        }
        Self { colours }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        WHEEL_LEN
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the wheel in order.
    pub fn iter(&self) -> impl Iterator<Item = &HsvColour> {
        self.colours.iter()
    }

    /// Returns the colour at `index`.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index` is 13 or more
    pub fn get(&self, index: usize) -> Result<HsvColour, WheelError> {
        self.colours
            .get(index)
            .copied()
            .ok_or(WheelError::IndexOutOfRange {
                index,
                len: WHEEL_LEN,
            })
    }

    /// Finds the first colour whose name matches, ignoring ASCII case.
    ///
    /// # Errors
    /// * `NotFound` - no wheel colour has this name
    pub fn by_name(&self, name: &str) -> Result<HsvColour, WheelError> {
        self.colours
            .iter()
            .find(|colour| colour.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| WheelError::not_found(name))
    }

    /// Picks a colour uniformly at random.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> HsvColour {
        self.colours[rng.gen_range(0..WHEEL_LEN)]
    }

    /// Position of the first entry with exactly the colour's hue.
    pub fn position(&self, colour: &HsvColour) -> Option<usize> {
        self.colours
            .iter()
            .position(|entry| entry.hue() == colour.hue())
    }

    /// Returns the entry after `colour`, wrapping from the last to the first.
    ///
    /// # Errors
    /// * `NotOnWheel` - `colour`'s hue is not a wheel position
    pub fn next(&self, colour: &HsvColour) -> Result<HsvColour, WheelError> {
        let index = self.locate(colour)?;
        Ok(self.colours[(index + 1) % WHEEL_LEN])
    }

    /// Returns the entry before `colour`, wrapping from the first to the last.
    ///
    /// # Errors
    /// * `NotOnWheel` - `colour`'s hue is not a wheel position
    pub fn previous(&self, colour: &HsvColour) -> Result<HsvColour, WheelError> {
        let index = self.locate(colour)?;
        Ok(self.colours[(index + WHEEL_LEN - 1) % WHEEL_LEN])
    }

    /// First entry with a hue strictly greater than `hue`, or the first entry
    /// if there is none.
    pub fn following(&self, hue: f32) -> HsvColour {
        self.colours
            .iter()
            .find(|entry| entry.hue() > hue)
            .copied()
            .unwrap_or(self.colours[0])
    }

    /// Lists every wheel name, each preceded by `prefix` and separated by
    /// `separator`.
    pub fn names<'a>(&'a self, prefix: &'a str, separator: &'a str) -> NameList<'a> {
        NameList {
            wheel: self,
            prefix,
            separator,
        }
    }

    fn locate(&self, colour: &HsvColour) -> Result<usize, WheelError> {
        self.position(colour)
            .ok_or(WheelError::NotOnWheel { hue: colour.hue() })
    }
}

impl Default for HsvWheel {
    fn default() -> Self {
        Self::standard()
    }
}

/// Display adaptor returned by [`HsvWheel::names`].
#[derive(Debug, Clone, Copy)]
pub struct NameList<'a> {
    wheel: &'a HsvWheel,
    prefix: &'a str,
    separator: &'a str,
}

impl fmt::Display for NameList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, colour) in self.wheel.iter().enumerate() {
            if i > 0 {
                f.write_str(self.separator)?;
            }
            write!(f, "{}{}", self.prefix, colour.name())?;
        }
        Ok(())
    }
}
