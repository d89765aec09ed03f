//! Precompile test-vector model and CSV reader.
//!
//! EIP-2537 exercise vectors arrive as two-column CSV files with no header
//! row: column 0 carries the concatenated operation input, column 1 the
//! expected output, both as fixed-width big-endian hex with no separators.
//! This crate slices those blobs into named fields at fixed character
//! offsets and hands back typed case records, one per CSV row, in row
//! order.
//!
//! Every fixed-width field is one base-field element: 64 bytes, so 128 hex
//! characters ([`FP_HEX`]). G2 coordinates are extension-field elements and
//! occupy two adjacent windows (`a0`, then `a1`). Scalars are the
//! variable-length tail left after a record's fixed prefix.
//!
//! The hex content itself is opaque to this crate: there is no validation
//! of hex characters, no point-on-curve check, and no curve arithmetic.
//! The only failure slicing can produce is a column shorter than its
//! layout requires, which surfaces as [`Error::Truncated`].

use std::path::Path;

mod blob;
mod error;
mod kind;
mod model;
mod reader;

pub use blob::{FP_HEX, TERM_HEX};
pub use error::{Column, Error};
pub use kind::FixtureKind;
pub use model::{FromRow, G1AddCase, G1MulCase, G2AddCase, G2MulCase, PairingCase, PairingTerm};
pub use reader::{VectorRow, rows_from_path, rows_from_reader};

/// Read every row of the CSV file at `path` and slice each into a `T`
/// record, preserving row order.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or read, when the CSV
/// is structurally invalid, or when a column is shorter than `T`'s layout
/// requires. The first failing row aborts the whole read.
pub fn read_cases<T: FromRow>(path: &Path) -> Result<Vec<T>, Error> {
    let rows = rows_from_path(path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "read vector rows");
    rows.iter()
        .enumerate()
        .map(|(index, row)| T::from_row(row, index))
        .collect()
}
