//! Serial command interpretation.
//!
//! A command line is one of:
//!
//! - `RGB(r,g,b)` with integer channels, clamped to 0-255
//! - `HSV(h)` or `HSV(h,s,v)`, clamped to 0-360 / 0-100 / 0-100
//! - a wheel colour name such as `yellow`
//!
//! The `RGB`/`HSV` prefix is case-insensitive, the parentheses are optional
//! and whitespace around arguments is ignored. [`parse`] reports why a line
//! was rejected; [`interpret`] never fails and substitutes a random wheel
//! colour instead.

use core::fmt;
use core::num::IntErrorKind;

use heapless::Vec;
use rand::Rng;

use crate::hsv::HsvColour;
use crate::rgb::RgbColour;
use crate::wheel::HsvWheel;

/// Names this short are treated as line noise rather than looked up.
const MIN_NAME_LEN: usize = 3;

/// A successfully parsed command.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `RGB(r,g,b)`.
    Rgb(RgbColour),
    /// `HSV(h)` or `HSV(h,s,v)`.
    Hsv(HsvColour),
    /// A wheel colour name.
    Named(HsvColour),
}

impl Command {
    /// The colour this command asks for.
    pub fn target(&self) -> HsvColour {
        match self {
            Command::Rgb(rgb) => rgb.to_hsv(),
            Command::Hsv(hsv) | Command::Named(hsv) => *hsv,
        }
    }
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Nothing but whitespace.
    Empty,

    /// Not an `RGB`/`HSV` form and too short to be a colour name.
    Unrecognised,

    /// Wrong number of comma-separated arguments.
    WrongArity {
        /// Description of the accepted counts, e.g. "3" or "1 or 3"
        expected: &'static str,
        found: usize,
    },

    /// An argument is not a finite number.
    InvalidNumber,

    /// Looks like a name but no wheel colour has it.
    UnknownName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty input"),
            ParseError::Unrecognised => write!(f, "unrecognised input"),
            ParseError::WrongArity { expected, found } => {
                write!(f, "expected {} values, found {}", expected, found)
            }
            ParseError::InvalidNumber => write!(f, "invalid number"),
            ParseError::UnknownName => write!(f, "unknown colour name"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Parses one command line.
///
/// # Errors
/// See [`ParseError`] for the rejection reasons.
pub fn parse(line: &str, wheel: &HsvWheel) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(args) = strip_form(line, "RGB") {
        let [r, g, b] = parse_args::<i32, 3>(args, "3")?;
        return Ok(Command::Rgb(RgbColour::from_clamped(r, g, b)));
    }

    if let Some(args) = strip_form(line, "HSV") {
        let values = parse_args::<f32, 3>(args, "1 or 3").or_else(|err| match err {
            ParseError::WrongArity { found: 1, .. } => {
                parse_args::<f32, 1>(args, "1 or 3").map(|[h]| [h, 100.0, 100.0])
            }
            other => Err(other),
        })?;
        let [h, s, v] = values;
        return Ok(Command::Hsv(HsvColour::new(h, s, v)));
    }

    if line.chars().count() < MIN_NAME_LEN {
        return Err(ParseError::Unrecognised);
    }

    wheel
        .by_name(line)
        .map(Command::Named)
        .map_err(|_| ParseError::UnknownName)
}

/// Strips a case-insensitive form prefix and any surrounding parentheses.
fn strip_form<'a>(line: &'a str, form: &str) -> Option<&'a str> {
    let prefix = line.get(..form.len())?;
    if !prefix.eq_ignore_ascii_case(form) {
        return None;
    }

    let rest = line[form.len()..].trim();
    let rest = rest.strip_prefix('(').unwrap_or(rest);
    let rest = rest.strip_suffix(')').unwrap_or(rest);
    Some(rest)
}

fn parse_args<T, const N: usize>(args: &str, expected: &'static str) -> Result<[T; N], ParseError>
where
    T: Argument + Copy + Default,
{
    let found = args.split(',').count();
    if found != N {
        return Err(ParseError::WrongArity { expected, found });
    }

    let mut values: Vec<T, N> = Vec::new();
    for arg in args.split(',') {
        let value = T::parse_arg(arg.trim()).ok_or(ParseError::InvalidNumber)?;
        values
            .push(value)
            .map_err(|_| ParseError::WrongArity { expected, found })?;
    }

    let mut out = [T::default(); N];
    out.copy_from_slice(&values);
    Ok(out)
}

/// Numbers accepted as command arguments. Values too large for the type
/// saturate, and the colour constructors clamp them afterwards.
trait Argument: Sized {
    fn parse_arg(arg: &str) -> Option<Self>;
}

impl Argument for i32 {
    fn parse_arg(arg: &str) -> Option<Self> {
        match arg.parse::<i32>() {
            Ok(value) => Some(value),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Some(i32::MAX),
                IntErrorKind::NegOverflow => Some(i32::MIN),
                _ => None,
            },
        }
    }
}

impl Argument for f32 {
    /// Spelled-out `inf` and `NaN` are rejected; digits that overflow to
    /// infinity are kept.
    fn parse_arg(arg: &str) -> Option<Self> {
        if !arg.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
        arg.parse::<f32>().ok().filter(|value| !value.is_nan())
    }
}

/// The outcome of interpreting a line: either what was asked for, or the
/// random substitute chosen because the line was malformed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interpretation {
    Parsed(Command),
    Fallback { error: ParseError, colour: HsvColour },
}

impl Interpretation {
    /// The colour to display.
    pub fn target(&self) -> HsvColour {
        match self {
            Interpretation::Parsed(command) => command.target(),
            Interpretation::Fallback { colour, .. } => *colour,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Interpretation::Fallback { .. })
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpretation::Parsed(Command::Rgb(rgb)) => {
                write!(f, "R: {} G: {} B: {}", rgb.red(), rgb.green(), rgb.blue())
            }
            Interpretation::Parsed(Command::Hsv(hsv)) => write!(
                f,
                "H: {} S: {} V: {}",
                hsv.hue(),
                hsv.saturation(),
                hsv.value()
            ),
            Interpretation::Parsed(Command::Named(hsv)) => write!(f, "Name: {}", hsv.name()),
            Interpretation::Fallback { error, colour } => {
                write!(f, "Invalid input ({}), picked {}", error, colour.name())
            }
        }
    }
}

/// Interprets a line, falling back to a random wheel colour on bad input.
pub fn interpret<R: Rng + ?Sized>(line: &str, wheel: &HsvWheel, rng: &mut R) -> Interpretation {
    match parse(line, wheel) {
        Ok(command) => Interpretation::Parsed(command),
        Err(error) => Interpretation::Fallback {
            error,
            colour: wheel.random(rng),
        },
    }
}

/// Help text describing the accepted input forms and wheel names.
#[derive(Debug, Clone, Copy)]
pub struct Usage<'a> {
    wheel: &'a HsvWheel,
}

impl<'a> Usage<'a> {
    pub fn new(wheel: &'a HsvWheel) -> Self {
        Self { wheel }
    }
}

impl fmt::Display for Usage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Valid values are:")?;
        writeln!(f)?;
        writeln!(f, "  - RGB([0-255],[0-255],[0-255])")?;
        writeln!(f)?;
        writeln!(f, "  - HSV([0-360])")?;
        writeln!(f, "  - HSV([0-360],[0-100],[0-100])")?;
        writeln!(f)?;
        writeln!(f, "  - Colour names: ")?;
        writeln!(f, "{}", self.wheel.names("     ", ",\n"))
    }
}
