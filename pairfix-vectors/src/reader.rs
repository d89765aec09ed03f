//! Two-column CSV row reading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Column, Error};

/// One raw CSV row: the operation input blob and the expected output blob,
/// exactly as they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorRow {
    /// Column 0: concatenated operation input hex.
    pub input: String,
    /// Column 1: expected output hex, or the textual pairing result.
    pub expected: String,
}

/// Read all rows from `reader`, in order.
///
/// Vector CSVs carry no header row. Blank lines are skipped; rows must all
/// have the same number of columns, and every row needs at least the two
/// documented ones.
///
/// # Errors
///
/// Returns [`Error::Csv`] for structurally invalid CSV (including ragged
/// rows) and [`Error::MissingColumn`] when a row has fewer than two
/// columns.
pub fn rows_from_reader<R: Read>(reader: R) -> Result<Vec<VectorRow>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let input = field(&record, index, Column::Input)?;
        let expected = field(&record, index, Column::Expected)?;
        rows.push(VectorRow { input, expected });
    }
    Ok(rows)
}

/// Read all rows of the CSV file at `path`, in order.
///
/// # Errors
///
/// Returns [`Error::Open`] when the file cannot be opened, otherwise the
/// same errors as [`rows_from_reader`].
pub fn rows_from_path(path: &Path) -> Result<Vec<VectorRow>, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    rows_from_reader(BufReader::new(file))
}

fn field(record: &csv::StringRecord, row: usize, column: Column) -> Result<String, Error> {
    let position = match column {
        Column::Input => 0,
        Column::Expected => 1,
    };
    record
        .get(position)
        .map(str::to_owned)
        .ok_or(Error::MissingColumn { row, column })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{VectorRow, rows_from_reader};
    use crate::error::{Column, Error};

    fn row(input: &str, expected: &str) -> VectorRow {
        VectorRow {
            input: input.to_owned(),
            expected: expected.to_owned(),
        }
    }

    #[test]
    fn reads_rows_in_order() -> Result<(), Error> {
        let rows = rows_from_reader("aa,bb\ncc,dd\n".as_bytes())?;
        assert_eq!(rows, vec![row("aa", "bb"), row("cc", "dd")]);
        Ok(())
    }

    #[test]
    fn empty_input_yields_no_rows() -> Result<(), Error> {
        assert!(rows_from_reader("".as_bytes())?.is_empty());
        assert!(rows_from_reader("\n\n".as_bytes())?.is_empty());
        Ok(())
    }

    #[test]
    fn single_column_row_is_missing_the_expected_column() {
        let err = rows_from_reader("deadbeef\n".as_bytes());
        assert!(matches!(
            err,
            Err(Error::MissingColumn {
                row: 0,
                column: Column::Expected,
            })
        ));
    }

    #[test]
    fn ragged_rows_are_a_csv_error() {
        let err = rows_from_reader("aa,bb\ncc\n".as_bytes());
        assert!(matches!(err, Err(Error::Csv(_))));
    }
}
