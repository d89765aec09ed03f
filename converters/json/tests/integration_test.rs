use std::fs;
use std::path::{Path, PathBuf};

use pairfix_converters_json::{Options, Processor};
use pairfix_vectors::FixtureKind;

type Error = Box<dyn std::error::Error>;

fn kind_for(stem: &str) -> Option<FixtureKind> {
    match stem {
        "g1_add" => Some(FixtureKind::G1Add),
        "g1_mul" => Some(FixtureKind::G1Mul),
        "g2_add" => Some(FixtureKind::G2Add),
        "g2_mul" => Some(FixtureKind::G2Mul),
        "pairing" => Some(FixtureKind::Pairing),
        _ => None,
    }
}

fn temp_dir(tag: &str) -> Result<PathBuf, Error> {
    let dir = std::env::temp_dir().join(format!("pairfix-json-{tag}-{}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Renders each source CSV and compares against the expected fixture JSON.
/// The first `g1_add.csv` row is a real EIP-2537 addition vector.
#[rstest::rstest]
#[tracing_test::traced_test]
fn convert_source_fixtures(
    #[files("tests/fixtures/source/*.csv")] path: PathBuf,
) -> Result<(), Error> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or("invalid fixture file name")?;
    let kind = kind_for(stem).ok_or_else(|| format!("no fixture kind for {stem}"))?;

    let vectors_dir = path.parent().ok_or("fixture has no parent directory")?;
    let processor = Processor::new(Options::builder().vectors_dir(vectors_dir).build());

    let mut output = Vec::new();
    processor.write_to(kind, &mut output)?;
    let actual = String::from_utf8(output)?;

    let expected_path = Path::new("tests")
        .join("fixtures")
        .join("expected")
        .join(Processor::fixture_file_name(kind));
    let expected = fs::read_to_string(&expected_path)?;

    pretty_assertions::assert_eq!(
        expected.trim_end(),
        actual.trim_end(),
        "fixture mismatch for: {stem}",
    );
    Ok(())
}

/// Every family renders an empty CSV as an empty JSON array.
#[test]
fn empty_csv_renders_an_empty_array() -> Result<(), Error> {
    let processor = Processor::new(
        Options::builder()
            .vectors_dir("tests/fixtures/empty")
            .build(),
    );
    for kind in FixtureKind::ALL {
        let mut output = Vec::new();
        processor.write_to(kind, &mut output)?;
        pretty_assertions::assert_eq!(String::from_utf8(output)?, "[]");
    }
    Ok(())
}

/// A full run writes one fixture file per family, named per the fixed
/// layout, and each record count matches its CSV row count.
#[test]
fn convert_writes_every_fixture_file() -> Result<(), Error> {
    let fixtures_dir = temp_dir("all")?;
    let processor = Processor::new(
        Options::builder()
            .vectors_dir("tests/fixtures/source")
            .fixtures_dir(&fixtures_dir)
            .build(),
    );

    for kind in FixtureKind::ALL {
        let path = processor.convert(kind)?;
        assert_eq!(path, fixtures_dir.join(Processor::fixture_file_name(kind)));
        assert!(path.exists(), "missing fixture file: {}", path.display());
    }

    // Spot-check one file parses back with the source row count.
    let raw = fs::read_to_string(fixtures_dir.join("g1_add.json"))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(value.as_array().map(Vec::len), Some(2));

    fs::remove_dir_all(&fixtures_dir)?;
    Ok(())
}

/// A row shorter than its layout aborts the conversion before the fixture
/// file is created.
#[test]
fn truncated_row_aborts_without_output() -> Result<(), Error> {
    let fixtures_dir = temp_dir("bad")?;
    let processor = Processor::new(
        Options::builder()
            .vectors_dir("tests/fixtures/bad")
            .fixtures_dir(&fixtures_dir)
            .build(),
    );

    let result = processor.convert(FixtureKind::G1Add);
    assert!(result.is_err());
    assert!(!fixtures_dir.join("g1_add.json").exists());

    fs::remove_dir_all(&fixtures_dir)?;
    Ok(())
}

/// A missing CSV file surfaces as an error naming the path.
#[test]
fn missing_csv_file_is_an_error() {
    let processor = Processor::new(
        Options::builder()
            .vectors_dir("tests/fixtures/nonexistent")
            .build(),
    );
    let mut output = Vec::new();
    let err = processor.write_to(FixtureKind::G1Add, &mut output);
    assert!(err.is_err());
}
