//! Case record types for the five precompile fixture families.
//!
//! Each type mirrors one row shape of the vector CSVs. Construction slices
//! the row's two columns at fixed character offsets; the field names are
//! the JSON keys the downstream pairing test suite loads, so both the
//! names and their declaration order are load-bearing and must not change.
//!
//! Layouts, in 128-character field-element windows:
//!
//! | type | input | expected |
//! |---|---|---|
//! | [`G1AddCase`] | p1 (x, y), p2 (x, y) | result (x, y) |
//! | [`G1MulCase`] | p1 (x, y), then the scalar tail | result (x, y) |
//! | [`G2AddCase`] | p1, p2 (x_a0, x_a1, y_a0, y_a1 each) | result (4 windows) |
//! | [`G2MulCase`] | p1 (4 windows), then the scalar tail | result (4 windows) |
//! | [`PairingCase`] | one 768-character segment per term | passed through unsplit |

use serde::{Deserialize, Serialize};

use crate::blob::{self, FP_HEX, TERM_HEX};
use crate::error::{Column, Error};
use crate::reader::VectorRow;

/// A record type constructible from one two-column vector row.
pub trait FromRow: Sized {
    /// Slice `row` into this record type. `index` is the zero-based row
    /// position, used only to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Truncated`] when a column is shorter than this
    /// type's fixed layout requires.
    fn from_row(row: &VectorRow, index: usize) -> Result<Self, Error>;
}

/// One column of one row, slicing with errors that carry the row position.
struct Blob<'a> {
    text: &'a str,
    row: usize,
    column: Column,
}

impl<'a> Blob<'a> {
    fn input(row: &'a VectorRow, index: usize) -> Self {
        Self {
            text: &row.input,
            row: index,
            column: Column::Input,
        }
    }

    fn expected(row: &'a VectorRow, index: usize) -> Self {
        Self {
            text: &row.expected,
            row: index,
            column: Column::Expected,
        }
    }

    /// The `index`-th 128-character field-element window.
    fn limb(&self, index: usize) -> Result<String, Error> {
        blob::limb(self.text, index)
            .map(str::to_owned)
            .ok_or_else(|| self.truncated((index + 1) * FP_HEX))
    }

    /// The variable-length remainder after `offset` fixed characters.
    fn tail(&self, offset: usize) -> Result<String, Error> {
        blob::tail(self.text, offset)
            .map(str::to_owned)
            .ok_or_else(|| self.truncated(offset))
    }

    fn truncated(&self, need: usize) -> Error {
        Error::Truncated {
            row: self.row,
            column: self.column,
            len: self.text.len(),
            need,
        }
    }
}

/// A G1 addition case: two input points and the expected sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct G1AddCase {
    pub p1x: String,
    pub p1y: String,
    pub p2x: String,
    pub p2y: String,
    pub rsx: String,
    pub rsy: String,
}

impl FromRow for G1AddCase {
    fn from_row(row: &VectorRow, index: usize) -> Result<Self, Error> {
        let input = Blob::input(row, index);
        let expected = Blob::expected(row, index);
        Ok(Self {
            p1x: input.limb(0)?,
            p1y: input.limb(1)?,
            p2x: input.limb(2)?,
            p2y: input.limb(3)?,
            rsx: expected.limb(0)?,
            rsy: expected.limb(1)?,
        })
    }
}

/// A G1 scalar-multiplication case. The scalar is whatever follows the
/// point, so its length is the input length minus 256.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct G1MulCase {
    pub p1x: String,
    pub p1y: String,
    pub scalar: String,
    pub rsx: String,
    pub rsy: String,
}

impl FromRow for G1MulCase {
    fn from_row(row: &VectorRow, index: usize) -> Result<Self, Error> {
        let input = Blob::input(row, index);
        let expected = Blob::expected(row, index);
        Ok(Self {
            p1x: input.limb(0)?,
            p1y: input.limb(1)?,
            scalar: input.tail(2 * FP_HEX)?,
            rsx: expected.limb(0)?,
            rsy: expected.limb(1)?,
        })
    }
}

/// A G2 addition case. Every coordinate is an extension-field element,
/// split into its `a0` and `a1` components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct G2AddCase {
    pub p1x_a0: String,
    pub p1x_a1: String,
    pub p1y_a0: String,
    pub p1y_a1: String,
    pub p2x_a0: String,
    pub p2x_a1: String,
    pub p2y_a0: String,
    pub p2y_a1: String,
    pub rsx_a0: String,
    pub rsx_a1: String,
    pub rsy_a0: String,
    pub rsy_a1: String,
}

impl FromRow for G2AddCase {
    fn from_row(row: &VectorRow, index: usize) -> Result<Self, Error> {
        let input = Blob::input(row, index);
        let expected = Blob::expected(row, index);
        Ok(Self {
            p1x_a0: input.limb(0)?,
            p1x_a1: input.limb(1)?,
            p1y_a0: input.limb(2)?,
            p1y_a1: input.limb(3)?,
            p2x_a0: input.limb(4)?,
            p2x_a1: input.limb(5)?,
            p2y_a0: input.limb(6)?,
            p2y_a1: input.limb(7)?,
            rsx_a0: expected.limb(0)?,
            rsx_a1: expected.limb(1)?,
            rsy_a0: expected.limb(2)?,
            rsy_a1: expected.limb(3)?,
        })
    }
}

/// A G2 scalar-multiplication case. Scalar length is the input length
/// minus 512.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct G2MulCase {
    pub p1x_a0: String,
    pub p1x_a1: String,
    pub p1y_a0: String,
    pub p1y_a1: String,
    pub scalar: String,
    pub rsx_a0: String,
    pub rsx_a1: String,
    pub rsy_a0: String,
    pub rsy_a1: String,
}

impl FromRow for G2MulCase {
    fn from_row(row: &VectorRow, index: usize) -> Result<Self, Error> {
        let input = Blob::input(row, index);
        let expected = Blob::expected(row, index);
        Ok(Self {
            p1x_a0: input.limb(0)?,
            p1x_a1: input.limb(1)?,
            p1y_a0: input.limb(2)?,
            p1y_a1: input.limb(3)?,
            scalar: input.tail(4 * FP_HEX)?,
            rsx_a0: expected.limb(0)?,
            rsx_a1: expected.limb(1)?,
            rsy_a0: expected.limb(2)?,
            rsy_a1: expected.limb(3)?,
        })
    }
}

/// One (G1 point, G2 point) input pair within a pairing case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingTerm {
    pub p1x: String,
    pub p1y: String,
    pub q1x_a0: String,
    pub q1x_a1: String,
    pub q1y_a0: String,
    pub q1y_a1: String,
}

/// A multi-term pairing case: the ordered input terms plus the expected
/// textual result, passed through unsplit.
///
/// The result serializes under the historical `resault` key; the
/// downstream suite loads it by that name, misspelling included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingCase {
    pub points: Vec<PairingTerm>,
    #[serde(rename = "resault")]
    pub result: String,
}

impl FromRow for PairingCase {
    fn from_row(row: &VectorRow, index: usize) -> Result<Self, Error> {
        let input = Blob::input(row, index);
        // Term count is the floor; trailing characters short of a full
        // 768-character term are ignored.
        let terms = row.input.len() / TERM_HEX;
        let mut points = Vec::with_capacity(terms);
        for term in 0..terms {
            points.push(PairingTerm {
                p1x: input.limb(term * 6)?,
                p1y: input.limb(term * 6 + 1)?,
                q1x_a0: input.limb(term * 6 + 2)?,
                q1x_a1: input.limb(term * 6 + 3)?,
                q1y_a0: input.limb(term * 6 + 4)?,
                q1y_a1: input.limb(term * 6 + 5)?,
            });
        }
        Ok(Self {
            points,
            result: row.expected.clone(),
        })
    }
}
