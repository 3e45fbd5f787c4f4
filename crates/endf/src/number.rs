//! Legacy numeric notation
//!
//! ENDF writes floats into 11 columns by dropping the exponent marker, so a
//! mantissa runs straight into a signed exponent.
//!
//! ```text
//!  1.234567-5  =>  1.234567e-5
//! -2.500000+6  => -2.500000e+6
//! ```
//!
//! Fields are normalised by inserting the marker back and then validated
//! against a strict literal grammar. Nothing is ever evaluated.

// nom parser combinators
use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::number::complete::recognize_float;
use nom::sequence::pair;
use nom::IResult;

/// Insert an exponent marker before any sign directly preceded by a digit
///
/// A leading sign is left alone, as is a sign that already follows an `e` or
/// `E`.
///
/// ```rust
/// # use xstools_endf::normalize;
/// assert_eq!(normalize("1.5-3"), "1.5e-3");
/// assert_eq!(normalize("1.5+3"), "1.5e+3");
/// assert_eq!(normalize("-1.5"), "-1.5");
/// assert_eq!(normalize("-1.5E-3"), "-1.5E-3");
/// ```
pub fn normalize(field: &str) -> String {
    let mut normalized = String::with_capacity(field.len() + 1);
    let mut previous: Option<char> = None;

    for (position, c) in field.chars().enumerate() {
        if position > 0 && matches!(c, '+' | '-') && previous.is_some_and(|p| p.is_ascii_digit())
        {
            normalized.push('e');
        }
        normalized.push(c);
        previous = Some(c);
    }

    normalized
}

/// Floating point literal, e.g. `-1.0e+03`, `12`, `.5`
///
/// No `inf`/`nan` keywords are accepted.
pub(crate) fn float(i: &str) -> IResult<&str, f64> {
    map_res(recognize_float, |s: &str| s.parse::<f64>())(i)
}

/// Signed integer literal, trimming nothing
pub(crate) fn integer(i: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i64>()
    })(i)
}

/// Convert a whole numeric column to a value
///
/// Blank columns are `Ok(None)`, anything that does not fully parse is
/// `Err(())` and left for the caller to turn into a proper error.
pub(crate) fn parse_float_field(field: &str) -> Result<Option<f64>, ()> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let normalized = normalize(trimmed);
    let parsed = all_consuming(float)(normalized.as_str());
    match parsed {
        Ok((_, value)) => Ok(Some(value)),
        Err(_) => Err(()),
    }
}

/// Convert a whole integer column to a value
pub(crate) fn parse_integer_field(field: &str) -> Result<Option<i64>, ()> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match all_consuming(integer)(trimmed) {
        Ok((_, value)) => Ok(Some(value)),
        Err(_) => Err(()),
    }
}

/// Format a float into 11 columns of legacy ENDF notation
///
/// Seven significant figures are kept whenever the exponent fits in a single
/// digit, one fewer for each extra exponent digit.
///
/// ```rust
/// # use xstools_endf::format_float;
/// assert_eq!(format_float(1.234567e-5), " 1.234567-5");
/// assert_eq!(format_float(-2.5e6), "-2.500000+6");
/// assert_eq!(format_float(1.0e-10), " 1.00000-10");
/// assert_eq!(format_float(0.0), " 0.000000+0");
/// ```
pub fn format_float(value: f64) -> String {
    let sign = if value.is_sign_negative() && value != 0.0 {
        '-'
    } else {
        ' '
    };

    // rounding can push the exponent up a digit, so settle the precision first
    let mut precision = 6;
    let (mantissa, exponent) = loop {
        let text = format!("{:.precision$e}", value.abs(), precision = precision);
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or_default();
        let digits = exponent.unsigned_abs().to_string().len();
        if precision + digits <= 7 || precision == 0 {
            break (mantissa.to_string(), exponent);
        }
        precision = 7usize.saturating_sub(digits);
    };

    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{sign}{mantissa}{exponent_sign}{}",
        exponent.unsigned_abs()
    )
}
