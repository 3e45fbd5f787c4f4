// standard library
use std::io::BufRead;
use std::path::Path;

// crate modules
use crate::archive::{init_archive, Archive};
use crate::core::Header;
use crate::error::{Error, Result};
use crate::reader::Reader;
use crate::reorganize::reorganize;

// external crates
use log::{debug, info, warn};

/// Convert a GENDF stream into an archive with default options
///
/// ```rust, no_run
/// # use xstools_gendf::{convert, MemoryArchive};
/// # use std::fs::File;
/// # use std::io::BufReader;
/// let file = File::open("/path/to/file.gendf").unwrap();
/// let mut archive = MemoryArchive::new();
///
/// let header = convert(BufReader::new(file), &mut archive).unwrap();
/// ```
pub fn convert<R: BufRead, A: Archive + ?Sized>(input: R, archive: &mut A) -> Result<Header> {
    Converter::new().convert(input, archive)
}

/// Convert a GENDF file into an archive with default options
///
/// ```rust, no_run
/// # use xstools_gendf::{convert_file, MemoryArchive};
/// let mut archive = MemoryArchive::new();
/// convert_file("/path/to/file.gendf", &mut archive).unwrap();
/// archive.write_json("/path/to/file.json").unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, A: Archive + ?Sized>(path: P, archive: &mut A) -> Result<Header> {
    Converter::new().convert_file(path, archive)
}

/// Configurable GENDF to archive conversion
///
/// Sections are read, reorganised, and written one at a time so that memory
/// use does not grow with the size of the file.
///
/// ```rust, no_run
/// # use xstools_gendf::{Converter, MemoryArchive};
/// // Only keep total and elastic, error on unexpected file types
/// let mut converter = Converter::new();
/// converter.set_target_reactions(&[1, 2]);
/// converter.skip_unsupported(false);
///
/// let mut archive = MemoryArchive::new();
/// converter.convert_file("/path/to/file.gendf", &mut archive).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    /// Optionally convert only specific reactions
    target_reactions: Option<Vec<u32>>,
    /// Skip file types without a table layout instead of failing
    skip_unsupported: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            target_reactions: None,
            skip_unsupported: true,
        }
    }
}

impl Converter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Only convert sections for these reaction types (MT)
    pub fn set_target_reactions(&mut self, reactions: &[u32]) {
        self.target_reactions = Some(reactions.to_vec());
    }

    /// Convert every reaction type (default)
    pub fn clear_target_reactions(&mut self) {
        self.target_reactions = None;
    }

    /// Skip unsupported file types with a warning (default), or fail
    pub fn skip_unsupported(&mut self, skip: bool) {
        self.skip_unsupported = skip;
    }

    /// Convert a GENDF file
    pub fn convert_file<P: AsRef<Path>, A: Archive + ?Sized>(
        &self,
        path: P,
        archive: &mut A,
    ) -> Result<Header> {
        info!("Reading {:?}", path.as_ref());
        self.run(Reader::from_file(path)?, archive)
    }

    /// Convert any buffered GENDF stream
    pub fn convert<R: BufRead, A: Archive + ?Sized>(
        &self,
        input: R,
        archive: &mut A,
    ) -> Result<Header> {
        self.run(Reader::new(input)?, archive)
    }

    fn run<R: BufRead, A: Archive + ?Sized>(
        &self,
        mut reader: Reader<R>,
        archive: &mut A,
    ) -> Result<Header> {
        init_archive(archive)?;

        for section in &mut reader {
            let section = section?;

            if !self.is_target(section.reaction) {
                debug!("Skipping MF{} MT{}", section.file_type, section.reaction);
                continue;
            }

            match reorganize(&section)? {
                Some(table) => table.store(archive)?,
                None if self.skip_unsupported => {
                    warn!(
                        "Skipping MF{} MT{}, file type is not supported",
                        section.file_type, section.reaction
                    );
                }
                None => return Err(Error::UnsupportedFileType(section.file_type)),
            }
        }

        Ok(reader.into_header())
    }

    fn is_target(&self, reaction: u32) -> bool {
        self.target_reactions
            .as_ref()
            .map_or(true, |targets| targets.contains(&reaction))
    }
}
