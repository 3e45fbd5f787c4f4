// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

// crate modules
use crate::card::{Card, VALUES_PER_LINE};
use crate::error::{Error, Result};

// external crates
use log::trace;

/// Forward-only reader of cards and logical records
///
/// Wraps any buffered input so that, at most, a single physical line is held
/// in memory. Logical records that spill over several lines are reassembled
/// by [CardReader::read_fields()].
///
/// ```rust
/// # use xstools_endf::CardReader;
/// let text = [
///     " 1.000000+0 2.000000+0 3.000000+0 4.000000+0 5.000000+0 6.000000+09228 3  1    1",
///     " 7.000000+0 8.000000+0                                            9228 3  1    2",
/// ]
/// .join("\n");
///
/// let mut reader = CardReader::new(text.as_bytes());
/// let fields = reader.read_fields(8).unwrap();
///
/// assert_eq!(fields.len(), 8);
/// assert_eq!(fields[7], Some(8.0));
/// assert_eq!(reader.line_number(), 2);
/// ```
#[derive(Debug)]
pub struct CardReader<R> {
    lines: Lines<R>,
    line_number: usize,
    cached_line: String,
}

impl CardReader<BufReader<File>> {
    /// Open a file for reading with a buffered input stream
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CardReader<R> {
    /// Create a new reader over any buffered input
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            cached_line: String::new(),
        }
    }

    /// Number of physical lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Most recently read physical line
    pub fn current_line(&self) -> &str {
        &self.cached_line
    }

    /// Advances to the next line, saving it to the cache and returning a ref
    pub fn next_line(&mut self) -> Result<&str> {
        self.cached_line = self.lines.next().ok_or(Error::TruncatedStream {
            line: self.line_number,
            expected: 1,
        })??;
        self.line_number += 1;
        Ok(self.cached_line.as_str())
    }

    /// Read and tokenize the next physical line
    pub fn next_card(&mut self) -> Result<Card> {
        self.next_line()?;
        let card = Card::parse(&self.cached_line).map_err(|e| e.at_line(self.line_number))?;
        trace!("{:>6}: {:?}", self.line_number, card);
        Ok(card)
    }

    /// Read a logical record of `n` numeric fields
    ///
    /// Consumes exactly `ceil(n/6)` lines and returns exactly `n` values,
    /// dropping any padding left over on the final line.
    ///
    /// Storage grows with the lines actually read, so a corrupt count from
    /// the file ends in [Error::TruncatedStream].
    pub fn read_fields(&mut self, n: usize) -> Result<Vec<Option<f64>>> {
        let n_lines = n.div_ceil(VALUES_PER_LINE);
        let mut fields = Vec::new();

        for consumed in 0..n_lines {
            let card = self.next_card().map_err(|e| match e {
                Error::TruncatedStream { line, .. } => Error::TruncatedStream {
                    line,
                    expected: n_lines - consumed,
                },
                other => other,
            })?;
            fields.extend(card.values);
        }

        fields.truncate(n);
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Lines of sequential values, six per card
    fn numbered_lines(n_lines: usize) -> String {
        (0..n_lines)
            .map(|l| {
                let values = std::array::from_fn(|i| Some((l * VALUES_PER_LINE + i + 1) as f64));
                Card {
                    values,
                    mat: Some(9228),
                    mf: Some(3),
                    mt: Some(1),
                    ns: Some(l as i64 + 1),
                }
                .to_line()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    #[rstest]
    #[case(1, 1)]
    #[case(6, 1)]
    #[case(7, 2)]
    #[case(12, 2)]
    #[case(13, 3)]
    fn lines_consumed(#[case] n: usize, #[case] expected_lines: usize) {
        let text = numbered_lines(4);
        let mut reader = CardReader::new(text.as_bytes());

        let fields = reader.read_fields(n).unwrap();
        assert_eq!(fields.len(), n);
        assert_eq!(reader.line_number(), expected_lines);

        // values continue across line breaks in order
        for (i, field) in fields.iter().enumerate() {
            assert_eq!(*field, Some((i + 1) as f64));
        }
    }

    #[test]
    fn zero_fields_reads_nothing() {
        let text = numbered_lines(1);
        let mut reader = CardReader::new(text.as_bytes());
        assert!(reader.read_fields(0).unwrap().is_empty());
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn truncated_logical_record() {
        let text = numbered_lines(2);
        let mut reader = CardReader::new(text.as_bytes());

        match reader.read_fields(19) {
            Err(Error::TruncatedStream { line, expected }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn oversized_count_is_truncated() {
        let text = numbered_lines(2);
        let mut reader = CardReader::new(text.as_bytes());

        assert!(matches!(
            reader.read_fields(usize::MAX),
            Err(Error::TruncatedStream { line: 2, .. })
        ));
    }

    #[test]
    fn malformed_fields_carry_line_numbers() {
        let text = format!("{}\n 1.0000x0+0", numbered_lines(1));
        let mut reader = CardReader::new(text.as_bytes());

        assert!(reader.next_card().is_ok());
        assert!(matches!(
            reader.next_card(),
            Err(Error::MalformedNumericField {
                line: 2,
                column: 1,
                ..
            })
        ));
    }
}
