//! The LED control loop.
//!
//! Provides [`ColourCycler`], which owns the active colour and the LED. It
//! applies colours requested over the serial link and, when no input
//! arrives, steps round the hue wheel. Also defines the [`RgbLed`] trait
//! for the PWM hardware.

use core::fmt;

use rand::RngCore;

use crate::command::{Interpretation, Usage, interpret};
use crate::hsv::HsvColour;
use crate::rgb::RgbColour;
use crate::time::{TimeInstant, TimeSource};
use crate::wheel::{HsvWheel, WHEEL};

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your PWM peripheral. Each channel is an 8-bit duty
/// value where 0 is off and 255 is fully on. Handle any hardware errors
/// internally - this method cannot fail.
pub trait RgbLed {
    fn set_channels(&mut self, red: u8, green: u8, blue: u8);
}

/// Timing for the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CyclerConfig {
    /// How long each wheel colour is shown while cycling.
    pub step_millis: u64,

    /// How long a colour requested over serial is held before cycling
    /// resumes.
    pub input_hold_millis: u64,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            step_millis: 100,
            input_hold_millis: 10_000,
        }
    }
}

/// What the cycler is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclerMode {
    /// Stepping round the wheel.
    Cycling,
    /// Showing a colour that was requested over serial.
    Holding,
}

/// Status line reporting the active colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status {
    colour: HsvColour,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set Colour to: {}", self.colour)
    }
}

/// Drives a single RGB LED from serial commands and the hue wheel.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source and wheel references
/// * `L` - LED implementation type
/// * `T` - Time source implementation type
/// * `R` - Random number generator used for fallback picks
pub struct ColourCycler<'t, L: RgbLed, T: TimeSource, R: RngCore> {
    led: L,
    time_source: &'t T,
    wheel: &'t HsvWheel,
    rng: R,
    config: CyclerConfig,
    current: HsvColour,
    mode: CyclerMode,
    changed_at: T::Instant,
}

impl<'t, L: RgbLed, T: TimeSource, R: RngCore> ColourCycler<'t, L, T, R> {
    /// Creates a cycler on the standard wheel, starting at a random wheel
    /// colour which is written to the LED immediately.
    pub fn new(led: L, time_source: &'t T, config: CyclerConfig, rng: R) -> Self {
        Self::with_wheel(led, time_source, &WHEEL, config, rng)
    }

    /// Like [`ColourCycler::new`] but cycles round the given wheel.
    pub fn with_wheel(
        led: L,
        time_source: &'t T,
        wheel: &'t HsvWheel,
        config: CyclerConfig,
        mut rng: R,
    ) -> Self {
        let initial = wheel.random(&mut rng);
        let mut cycler = Self {
            led,
            time_source,
            wheel,
            rng,
            config,
            current: initial,
            mode: CyclerMode::Cycling,
            changed_at: time_source.now(),
        };
        cycler.show(initial, CyclerMode::Cycling);
        cycler
    }

    /// Interprets a serial line and displays the result.
    ///
    /// A well-formed command is held for `input_hold_millis`. Malformed input
    /// shows a random wheel colour and cycling carries on from there.
    pub fn handle_line(&mut self, line: &str) -> Interpretation {
        let interpretation = interpret(line, self.wheel, &mut self.rng);

        match interpretation {
            Interpretation::Parsed(_) => {
                self.show(interpretation.target(), CyclerMode::Holding);
            }
            Interpretation::Fallback {
                error: _error,
                colour,
            } => {
                #[cfg(feature = "defmt")]
                defmt::warn!("invalid input ({}), falling back to {}", _error, colour);

                self.show(colour, CyclerMode::Cycling);
            }
        }

        interpretation
    }

    /// Steps to the next wheel colour. This is the no-input path.
    ///
    /// If the active colour is not on the wheel (e.g. an arbitrary RGB
    /// request), cycling resumes at the first wheel hue above it.
    pub fn advance(&mut self) -> HsvColour {
        let next = match self.wheel.next(&self.current) {
            Ok(next) => next,
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{}, resuming from the following hue", _err);
                self.wheel.following(self.current.hue())
            }
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("wheel advanced to {=str}", next.name());

        self.show(next, CyclerMode::Cycling);
        next
    }

    /// Advances the wheel if the current colour has been shown long enough.
    ///
    /// # Returns
    /// Milliseconds until the next call is due.
    pub fn service(&mut self) -> u64 {
        let interval = match self.mode {
            CyclerMode::Cycling => self.config.step_millis,
            CyclerMode::Holding => self.config.input_hold_millis,
        };
        let elapsed = self.time_source.now().millis_since(self.changed_at);

        if elapsed >= interval {
            self.advance();
            self.config.step_millis
        } else {
            interval - elapsed
        }
    }

    /// Displays a colour chosen by the caller and holds it like serial input.
    pub fn set_colour(&mut self, colour: HsvColour) {
        self.show(colour, CyclerMode::Holding);
    }

    fn show(&mut self, colour: HsvColour, mode: CyclerMode) {
        let rgb = colour.to_rgb();
        self.led.set_channels(rgb.red(), rgb.green(), rgb.blue());

        self.current = colour;
        self.mode = mode;
        self.changed_at = self.time_source.now();
    }

    /// Returns the colour being displayed.
    pub fn current(&self) -> HsvColour {
        self.current
    }

    /// Returns the channel values last written to the LED.
    pub fn current_rgb(&self) -> RgbColour {
        self.current.to_rgb()
    }

    pub fn mode(&self) -> CyclerMode {
        self.mode
    }

    pub fn config(&self) -> CyclerConfig {
        self.config
    }

    /// Status line for the active colour.
    pub fn status(&self) -> Status {
        Status {
            colour: self.current,
        }
    }

    /// Help text for the serial prompt.
    pub fn usage(&self) -> Usage<'t> {
        Usage::new(self.wheel)
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    /// Consumes the cycler, returning the LED.
    pub fn into_led(self) -> L {
        self.led
    }
}
