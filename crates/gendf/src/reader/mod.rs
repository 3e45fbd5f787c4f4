mod header;
mod section;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// xstools modules
use xstools_endf::CardReader;

// crate modules
use crate::core::{Header, Section};
use crate::error::{Error, Result};

/// Streaming reader for GENDF files
///
/// The header is read as soon as the reader is created. Sections are then
/// assembled one at a time, either with [Reader::read_section()] or by
/// iterating over the reader, so that only a single section is ever held in
/// memory.
///
/// ```rust, no_run
/// # use xstools_gendf::Reader;
/// let mut reader = Reader::from_file("/path/to/file.gendf").unwrap();
/// println!("{} groups", reader.header().n_neutron_groups);
///
/// for section in &mut reader {
///     let section = section.unwrap();
///     println!("MF{} MT{}", section.file_type, section.reaction);
/// }
/// ```
#[derive(Debug)]
pub struct Reader<R> {
    cards: CardReader<R>,
    header: Header,
    finished: bool,
}

impl Reader<BufReader<File>> {
    /// Open a GENDF file and read its header
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_cards(CardReader::open(path)?)
    }
}

impl<R: BufRead> Reader<R> {
    /// Read the header from any buffered input
    pub fn new(input: R) -> Result<Self> {
        Self::from_cards(CardReader::new(input))
    }

    fn from_cards(mut cards: CardReader<R>) -> Result<Self> {
        let header = header::read_header(&mut cards)?;
        Ok(Self {
            cards,
            header,
            finished: false,
        })
    }

    /// Header information for the file
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Consume the reader, keeping only the header
    pub fn into_header(self) -> Header {
        self.header
    }

    /// Assemble the next section, `None` once the end marker is reached
    pub fn read_section(&mut self) -> Result<Option<Section>> {
        if self.finished {
            return Ok(None);
        }

        let section = section::read_section(&mut self.cards);
        if !matches!(section, Ok(Some(_))) {
            self.finished = true;
        }
        section
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<Section>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_section().transpose()
    }
}

// ! Field conversions shared by the header and section readers

/// Value that must not be blank
fn required(value: Option<f64>, name: &str, line: usize) -> Result<f64> {
    value.ok_or_else(|| Error::MissingValue {
        name: name.to_string(),
        line,
    })
}

/// Integral value stored in a numeric column
fn integer(value: Option<f64>, name: &str, line: usize) -> Result<i64> {
    let value = required(value, name, line)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(Error::InvalidSectionGeometry(format!(
            "{name} = {value} is not an integer (line {line})"
        )));
    }
    Ok(value as i64)
}

/// Non-negative integral value stored in a numeric column
fn count(value: Option<f64>, name: &str, line: usize) -> Result<usize> {
    let value = integer(value, name, line)?;
    usize::try_from(value).map_err(|_| {
        Error::InvalidSectionGeometry(format!("{name} = {value} is negative (line {line})"))
    })
}

/// Group number or identifier stored in a numeric column
///
/// Group numbers are renumbered as signed values, so anything past
/// `i32::MAX` is rejected along with negative values.
fn number(value: Option<f64>, name: &str, line: usize) -> Result<u32> {
    let value = count(value, name, line)?;
    i32::try_from(value)
        .map(i32::unsigned_abs)
        .map_err(|_| {
            Error::InvalidSectionGeometry(format!(
                "{name} = {value} is out of range (line {line})"
            ))
        })
}

/// Non-negative identifier from one of the integer columns
fn identifier(value: Option<i64>, name: &str, line: usize) -> Result<u32> {
    let value = value.ok_or_else(|| Error::MissingValue {
        name: name.to_string(),
        line,
    })?;
    u32::try_from(value).map_err(|_| {
        Error::InvalidSectionGeometry(format!("{name} = {value} is out of range (line {line})"))
    })
}

/// Every value of a logical record must be present
fn all_required(fields: &[Option<f64>], name: &str, line: usize) -> Result<Vec<f64>> {
    fields
        .iter()
        .map(|field| required(*field, name, line))
        .collect()
}
