//! End-to-end tests: load an IERS-style delta time table from disk and
//! interpolate it to Modified Julian Day epochs.

use approx::assert_relative_eq;
use ndarray::{array, Array1};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::tempdir;

use tidetime::{delta_time, delta_time_at, modified_julian_day, DeltaTimeTable, TidetimeError};

/// Monthly records in the layout of the published `deltat.data` files.
const DELTAT_DATA: &str = "\
 1973  2  1  43.4724
 1973  3  1  43.5648
 1973  4  1  43.6737
 1973  5  1  43.7782
";

fn write_table(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("deltat.data");
    let mut file = File::create(&path).unwrap();
    file.write_all(DELTAT_DATA.as_bytes()).unwrap();
    path
}

#[test]
fn table_dates_convert_to_known_mjds() {
    // 1973-02-01 is JD 2441714.5.
    assert_eq!(modified_julian_day(1973.0, 2.0, 1.0), 41_714.0);
    assert_eq!(modified_julian_day(1973.0, 3.0, 1.0), 41_742.0);
    assert_eq!(modified_julian_day(1973.0, 5.0, 1.0), 41_803.0);
}

#[test]
fn interpolates_a_realistic_table() {
    let dir = tempdir().unwrap();
    let path = write_table(dir.path());

    let table = DeltaTimeTable::from_file(&path).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.mjd_span(), (41_714.0, 41_803.0));

    // Exact at the tabulated epochs.
    assert_relative_eq!(table.interpolate_at(41_714.0), 43.4724, epsilon = 1e-12);
    assert_relative_eq!(table.interpolate_at(41_803.0), 43.7782, epsilon = 1e-12);

    // Halfway through February the estimate is the segment midpoint.
    assert_relative_eq!(table.interpolate_at(41_728.0), 43.5186, epsilon = 1e-9);
}

#[test]
fn one_shot_function_matches_table_queries() {
    let dir = tempdir().unwrap();
    let path = write_table(dir.path());

    let queries: Array1<f64> = array![41_714.0, 41_728.0, 41_742.0];
    let from_function = delta_time(&path, &queries).unwrap();
    let from_table = DeltaTimeTable::from_file(&path).unwrap().interpolate(&queries);

    assert_eq!(from_function.len(), queries.len());
    for i in 0..queries.len() {
        assert_eq!(from_function[i], from_table[i]);
    }
}

#[test]
fn extrapolates_with_edge_segment_slopes() {
    let dir = tempdir().unwrap();
    let path = write_table(dir.path());

    // 14 days before the first record, along the first segment's slope
    // (0.0924 s over 28 days) -- not clamped to 43.4724.
    let below = delta_time_at(&path, 41_700.0).unwrap();
    assert_relative_eq!(below, 43.4724 - 0.0924 * 14.0 / 28.0, epsilon = 1e-9);

    // 30 days past the last record, along the last segment's slope
    // (0.1045 s over 30 days).
    let above = delta_time_at(&path, 41_833.0).unwrap();
    assert_relative_eq!(above, 43.7782 + 0.1045, epsilon = 1e-9);
}

#[test]
fn scalar_and_one_element_array_queries_agree() {
    let dir = tempdir().unwrap();
    let path = write_table(dir.path());

    let scalar = delta_time_at(&path, 41_750.25).unwrap();
    let batch = delta_time(&path, &array![41_750.25]).unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(scalar, batch[0]);
}

#[test]
fn missing_table_propagates_an_io_error() {
    let dir = tempdir().unwrap();
    let err = delta_time_at(dir.path().join("no-such-file.data"), 41_714.0).unwrap_err();
    assert!(matches!(err, TidetimeError::IoError(_)));
}

#[test]
fn malformed_table_propagates_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corrupt.data");
    let mut file = File::create(&path).unwrap();
    writeln!(file, " 1973  2  1  43.4724").unwrap();
    writeln!(file, " not a data row").unwrap();

    let err = delta_time_at(&path, 41_714.0).unwrap_err();
    assert!(matches!(err, TidetimeError::ParseError(_)));
}
