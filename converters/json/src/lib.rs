//! JSON fixture emitter for precompile test vectors.
//!
//! Each fixture family is converted independently: read the family's CSV
//! from the vectors directory, slice every row into its typed case record,
//! serialize the whole sequence as a pretty-printed JSON array (2-space
//! indent, declaration-order keys), and write it to the family's fixed
//! file name under the fixtures directory.
//!
//! The write is all-or-nothing: the array is rendered to memory first and
//! the output file is only created once rendering succeeded, so a failing
//! row never leaves a partial fixture behind.
//!
//! # Example
//!
//! ```ignore
//! use pairfix_converters_json::{Options, Processor};
//! use pairfix_vectors::FixtureKind;
//!
//! let processor = Processor::new(Options::default());
//! for kind in FixtureKind::ALL {
//!     processor.convert(kind)?;
//! }
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pairfix_vectors::{
    FixtureKind, G1AddCase, G1MulCase, G2AddCase, G2MulCase, PairingCase, read_cases,
};

mod error;

pub use error::Error;

/// Converter options: where the vector CSVs live and where the JSON
/// fixtures land.
///
/// Use [`Options::builder()`] to construct an instance. The defaults
/// reproduce the historical layout: CSVs in the current directory,
/// fixtures in `../fixtures`.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Options {
    vectors_dir: PathBuf,
    fixtures_dir: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            vectors_dir: PathBuf::from("."),
            fixtures_dir: PathBuf::from("../fixtures"),
        }
    }
}

impl Options {
    /// Create a new builder with default values.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Directory the vector CSV files are read from.
    #[must_use]
    pub fn vectors_dir(&self) -> &Path {
        &self.vectors_dir
    }

    /// Directory the JSON fixture files are written to.
    #[must_use]
    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }
}

/// Builder for [`Options`].
#[derive(Debug, Default, Clone)]
pub struct OptionsBuilder {
    vectors_dir: Option<PathBuf>,
    fixtures_dir: Option<PathBuf>,
}

impl OptionsBuilder {
    /// Set the directory the vector CSV files are read from.
    #[must_use]
    pub fn vectors_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.vectors_dir = Some(dir.into());
        self
    }

    /// Set the directory the JSON fixture files are written to.
    #[must_use]
    pub fn fixtures_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.fixtures_dir = Some(dir.into());
        self
    }

    /// Build the [`Options`] instance.
    #[must_use]
    pub fn build(self) -> Options {
        let defaults = Options::default();
        Options {
            vectors_dir: self.vectors_dir.unwrap_or(defaults.vectors_dir),
            fixtures_dir: self.fixtures_dir.unwrap_or(defaults.fixtures_dir),
        }
    }
}

/// JSON fixture converter.
#[derive(Debug, Clone)]
pub struct Processor {
    options: Options,
}

impl Processor {
    /// Create a new converter with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Name of the JSON fixture file for `kind`.
    ///
    /// `pairing2.json` is the historical name the downstream suite loads;
    /// the other four match their CSV stems.
    #[must_use]
    pub const fn fixture_file_name(kind: FixtureKind) -> &'static str {
        match kind {
            FixtureKind::G1Add => "g1_add.json",
            FixtureKind::G1Mul => "g1_mul.json",
            FixtureKind::G2Add => "g2_add.json",
            FixtureKind::G2Mul => "g2_mul.json",
            FixtureKind::Pairing => "pairing2.json",
        }
    }

    /// Full path the fixture for `kind` is written to.
    #[must_use]
    pub fn fixture_path(&self, kind: FixtureKind) -> PathBuf {
        self.options
            .fixtures_dir
            .join(Self::fixture_file_name(kind))
    }

    /// Read `kind`'s CSV and serialize every case into `writer` as a
    /// pretty-printed JSON array, returning the number of cases written.
    ///
    /// # Errors
    ///
    /// Returns an error when the CSV cannot be read, a row does not fit
    /// `kind`'s layout, or `writer` fails.
    pub fn write_to<W: Write>(&self, kind: FixtureKind, writer: W) -> Result<usize, Error> {
        let input = self.options.vectors_dir.join(kind.csv_file_name());
        match kind {
            FixtureKind::G1Add => {
                let cases: Vec<G1AddCase> = read_cases(&input)?;
                serde_json::to_writer_pretty(writer, &cases)?;
                Ok(cases.len())
            }
            FixtureKind::G1Mul => {
                let cases: Vec<G1MulCase> = read_cases(&input)?;
                serde_json::to_writer_pretty(writer, &cases)?;
                Ok(cases.len())
            }
            FixtureKind::G2Add => {
                let cases: Vec<G2AddCase> = read_cases(&input)?;
                serde_json::to_writer_pretty(writer, &cases)?;
                Ok(cases.len())
            }
            FixtureKind::G2Mul => {
                let cases: Vec<G2MulCase> = read_cases(&input)?;
                serde_json::to_writer_pretty(writer, &cases)?;
                Ok(cases.len())
            }
            FixtureKind::Pairing => {
                let cases: Vec<PairingCase> = read_cases(&input)?;
                serde_json::to_writer_pretty(writer, &cases)?;
                Ok(cases.len())
            }
        }
    }

    /// Convert one fixture family: render the JSON array in memory, then
    /// create (or truncate) the fixture file and write the whole buffer in
    /// one operation. Returns the written path.
    ///
    /// Nothing is written when reading or rendering fails.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Processor::write_to`], plus
    /// [`Error::Io`] when the fixture file cannot be created or written.
    pub fn convert(&self, kind: FixtureKind) -> Result<PathBuf, Error> {
        let mut buffer = Vec::new();
        let cases = self.write_to(kind, &mut buffer)?;
        let path = self.fixture_path(kind);
        fs::write(&path, &buffer)?;
        tracing::debug!(kind = %kind, cases, path = %path.display(), "wrote fixture");
        Ok(path)
    }
}
