//! Fixed-column card layout
//!
//! Every physical line of an ENDF-style file is an 80 column card:
//!
//! ```text
//! | C1 | C2 | C3 | C4 | C5 | C6 | MAT | MF | MT |  NS |
//! | 11 | 11 | 11 | 11 | 11 | 11 |  4  |  2 |  3 |  5  |
//! ```
//!
//! The six wide columns hold numbers in legacy notation (see
//! [normalize()](crate::normalize)), the trailing four are integer
//! identifiers.

// crate modules
use crate::error::{Error, Result};
use crate::number::{format_float, parse_float_field, parse_integer_field};

/// Column widths, left to right
pub const WIDTHS: [usize; 10] = [11, 11, 11, 11, 11, 11, 4, 2, 3, 5];

/// Total width of a card
pub const LINE_WIDTH: usize = 80;

/// Number of numeric columns on a card
pub const VALUES_PER_LINE: usize = 6;

/// One tokenized physical line
///
/// Blank columns are kept as `None` rather than being read as zero.
///
/// ```rust
/// # use xstools_endf::Card;
/// let line = " 9.223500+4 2.330248+2          0          1          0          19228 1451    1";
/// let card = Card::parse(line).unwrap();
///
/// assert_eq!(card.values[0], Some(92235.0));
/// assert_eq!(card.values[1], Some(233.0248));
/// assert_eq!(card.mat, Some(9228));
/// assert_eq!(card.mf, Some(1));
/// assert_eq!(card.mt, Some(451));
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Card {
    /// The six numeric columns
    pub values: [Option<f64>; VALUES_PER_LINE],
    /// Material number
    pub mat: Option<i64>,
    /// File number
    pub mf: Option<i64>,
    /// Section number
    pub mt: Option<i64>,
    /// Line sequence number
    pub ns: Option<i64>,
}

impl Card {
    /// Split a physical line into its ten columns
    ///
    /// Short lines are read as though padded with blanks and anything past
    /// column 80 is ignored. Errors report the 1-based column number with a
    /// line number of zero, the [CardReader](crate::CardReader) fills in the
    /// real line.
    pub fn parse(line: &str) -> Result<Self> {
        let mut card = Card::default();
        let mut start = 0;

        for (column, width) in WIDTHS.iter().enumerate() {
            let text = column_text(line, start, *width, column)?;

            if column < VALUES_PER_LINE {
                card.values[column] =
                    parse_float_field(text).map_err(|_| malformed(column, text))?;
            } else {
                let value = parse_integer_field(text).map_err(|_| malformed(column, text))?;
                match column {
                    6 => card.mat = value,
                    7 => card.mf = value,
                    8 => card.mt = value,
                    _ => card.ns = value,
                }
            }

            start += width;
        }

        Ok(card)
    }

    /// Numeric column by 0-based index, `None` if blank or out of range
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Sum of the MF, MT and NS columns, blanks counting as zero
    ///
    /// Section and file terminators carry zeros in all three.
    pub fn trailer_sum(&self) -> i64 {
        [self.mf, self.mt, self.ns]
            .iter()
            .map(|v| v.unwrap_or_default())
            .sum()
    }

    /// Write the card back out as an 80 column line
    ///
    /// Integral values are right aligned as plain integers, everything else
    /// uses the legacy float notation.
    ///
    /// ```rust
    /// # use xstools_endf::Card;
    /// let card = Card {
    ///     values: [Some(1.5e-3), None, Some(2.0), None, None, None],
    ///     mat: Some(9228),
    ///     mf: Some(3),
    ///     mt: Some(1),
    ///     ns: Some(1),
    /// };
    /// let line = card.to_line();
    ///
    /// assert_eq!(line.len(), 80);
    /// assert_eq!(Card::parse(&line).unwrap(), card);
    /// ```
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(LINE_WIDTH);

        for value in &self.values {
            line.push_str(&format_field(*value));
        }

        line.push_str(&format_integer(self.mat, WIDTHS[6]));
        line.push_str(&format_integer(self.mf, WIDTHS[7]));
        line.push_str(&format_integer(self.mt, WIDTHS[8]));
        line.push_str(&format_integer(self.ns, WIDTHS[9]));
        line
    }
}

/// Format an optional value into one 11 character numeric column
pub fn format_field(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1.0e10 => format!("{:>11}", v as i64),
        Some(v) => format_float(v),
        None => " ".repeat(WIDTHS[0]),
    }
}

fn format_integer(value: Option<i64>, width: usize) -> String {
    match value {
        Some(v) => format!("{v:>width$}"),
        None => " ".repeat(width),
    }
}

/// Text of one column, blank if the line is too short to reach it
fn column_text(line: &str, start: usize, width: usize, column: usize) -> Result<&str> {
    let end = (start + width).min(line.len());
    if start >= line.len() {
        return Ok("");
    }

    line.get(start..end)
        .ok_or_else(|| malformed(column, &String::from_utf8_lossy(&line.as_bytes()[start..end])))
}

fn malformed(column: usize, text: &str) -> Error {
    Error::MalformedNumericField {
        line: 0,
        column: column + 1,
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        let scale = a.abs().max(b.abs()).max(1.0);
        assert!((a - b).abs() <= 1e-9 * scale, "{a} != {b}");
    }

    #[test]
    fn tokenize_control_line() {
        let line = " 2.936000+2 0.000000+0          3          2         42          09228 3  1    2";
        let card = Card::parse(line).unwrap();

        assert_eq!(card.value(0), Some(293.6));
        assert_eq!(card.value(1), Some(0.0));
        assert_eq!(card.value(2), Some(3.0));
        assert_eq!(card.value(3), Some(2.0));
        assert_eq!(card.value(4), Some(42.0));
        assert_eq!(card.value(5), Some(0.0));
        assert_eq!(card.mat, Some(9228));
        assert_eq!(card.mf, Some(3));
        assert_eq!(card.mt, Some(1));
        assert_eq!(card.ns, Some(2));
    }

    #[test]
    fn blank_columns_are_absent() {
        let line = format!(" 1.000000+0{}9228 3  1    3", " ".repeat(55));
        let card = Card::parse(&line).unwrap();

        assert_eq!(card.value(0), Some(1.0));
        for i in 1..VALUES_PER_LINE {
            assert_eq!(card.value(i), None);
        }
    }

    #[test]
    fn short_lines_are_padded() {
        let card = Card::parse(" 1.000000+0 2.000000+0").unwrap();
        assert_eq!(card.value(1), Some(2.0));
        assert_eq!(card.value(2), None);
        assert_eq!(card.mat, None);
        assert_eq!(card.trailer_sum(), 0);
    }

    #[test]
    fn malformed_column_reports_position() {
        let line = " 1.000000+0 2.0000x0+0";
        match Card::parse(line) {
            Err(Error::MalformedNumericField { column, text, .. }) => {
                assert_eq!(column, 2);
                assert_eq!(text, " 2.0000x0+0");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn malformed_integer_column() {
        let line = format!("{}92x8 3  1    1", " ".repeat(66));
        assert!(matches!(
            Card::parse(&line),
            Err(Error::MalformedNumericField { column: 7, .. })
        ));
    }

    #[test]
    fn encoded_values_decode() {
        let values = [
            Some(1.234567e-5),
            Some(-2.5e6),
            None,
            Some(42.0),
            Some(6.02214e23),
            Some(-1.0e-100),
        ];
        let card = Card {
            values,
            mat: Some(125),
            mf: Some(6),
            mt: Some(2),
            ns: Some(99999),
        };

        let decoded = Card::parse(&card.to_line()).unwrap();
        for (a, b) in values.iter().zip(decoded.values.iter()) {
            match (a, b) {
                (Some(a), Some(b)) => assert_close(*a, *b),
                (None, None) => (),
                _ => panic!("blank mismatch {a:?} {b:?}"),
            }
        }
        assert_eq!(decoded.mat, Some(125));
        assert_eq!(decoded.ns, Some(99999));
    }

    #[test]
    fn trailer_sum_of_terminators() {
        let send = Card {
            mat: Some(9228),
            mf: Some(3),
            mt: Some(0),
            ns: Some(99999),
            ..Default::default()
        };
        assert_eq!(send.trailer_sum(), 100002);

        let fend = Card {
            mat: Some(9228),
            mf: Some(0),
            mt: Some(0),
            ns: Some(0),
            ..Default::default()
        };
        assert_eq!(fend.trailer_sum(), 0);
    }
}
