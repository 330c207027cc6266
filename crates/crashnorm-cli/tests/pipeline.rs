//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use crashnorm_cli::pipeline::{
    NormalizeResult, RecordFormat, normalize_records, read_records, write_records,
};
use crashnorm_core::Limits;
use crashnorm_model::{Borough, NormalizedCrash, ZipCode};

/// Two feed rows: one fully populated with known-messy values, one with a
/// missing borough, a short zip, blank coordinates, and an unparseable
/// casualty count.
const FEED_CSV: &str = "\
unique_key,crash_date,crash_time,borough,zip_code,latitude,longitude,on_street_name,off_street_name,cross_street_name,number_of_persons_injured,number_of_persons_killed,number_of_pedestrians_injured,number_of_pedestrians_killed,number_of_cyclist_injured,number_of_cyclist_killed,number_of_motorist_injured,number_of_motorist_killed
4455123,2021-09-14T00:00:00.000,18:5,BROOKLYN,NY11211,40.7081,-73.9571,McGuinness  Boulevard,49street,long island expressway,1,0,0,0,1,0,0,0
4455124,09/15/2021,2:3,,1234,,,ocean pky pky,,,not-a-number,0,0,0,0,0,0,0
";

#[test]
fn read_csv_accepts_historical_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crashes.csv");
    fs::write(&path, FEED_CSV).unwrap();

    let records = read_records(&path).unwrap();

    assert_eq!(records.len(), 2);
    // crash_date/crash_time and the singular cyclist column are aliases.
    assert_eq!(records[0].date.as_deref(), Some("2021-09-14T00:00:00.000"));
    assert_eq!(records[0].time.as_deref(), Some("18:5"));
    assert_eq!(records[0].number_of_cyclists_injured.as_deref(), Some("1"));
    // Empty CSV fields come through as absent, not as empty strings.
    assert_eq!(records[1].borough, None);
    assert_eq!(records[1].latitude, None);
}

#[test]
fn read_json_accepts_oldest_revision_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crashes.json");
    fs::write(
        &path,
        r#"[
            {
                "unique_key": "12345",
                "accident_date": "07/09/2019",
                "accident_time": "18:00",
                "borough": "QUEENS",
                "on_street_name": "queens boulevard"
            }
        ]"#,
    )
    .unwrap();

    let records = read_records(&path).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].unique_key.as_deref(), Some("12345"));
    assert_eq!(records[0].date.as_deref(), Some("07/09/2019"));
    assert_eq!(records[0].borough.as_deref(), Some("QUEENS"));
}

#[test]
fn format_detection_is_case_insensitive_and_closed() {
    assert_eq!(
        RecordFormat::from_path(Path::new("crashes.CSV")).unwrap(),
        RecordFormat::Csv
    );
    assert_eq!(
        RecordFormat::from_path(Path::new("crashes.Json")).unwrap(),
        RecordFormat::Json
    );
    assert!(RecordFormat::from_path(Path::new("crashes.parquet")).is_err());
    assert!(RecordFormat::from_path(Path::new("crashes")).is_err());
}

#[test]
fn normalize_counts_match_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crashes.csv");
    fs::write(&path, FEED_CSV).unwrap();
    let raw = read_records(&path).unwrap();

    let NormalizeResult { records, counts } = normalize_records(&raw, &Limits::default());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].borough, Some(Borough::Brooklyn));
    assert_eq!(
        records[0].zip_code.as_ref().map(ZipCode::as_str),
        Some("11211")
    );
    assert_eq!(records[0].timestamp.as_deref(), Some("2021-09-14T18:50:00"));
    assert_eq!(records[0].on_street.as_deref(), Some("mcguinness blvd"));
    assert_eq!(records[0].off_street.as_deref(), Some("49 st"));
    assert_eq!(records[0].cross_street.as_deref(), Some("lie"));
    // A missing borough field still maps, to Unknown; a bad zip does not.
    assert_eq!(records[1].borough, Some(Borough::Unknown));
    assert_eq!(records[1].zip_code, None);
    assert_eq!(records[1].timestamp.as_deref(), Some("2021-09-15T02:30:00"));
    assert_eq!(records[1].on_street.as_deref(), Some("ocean pky"));

    assert_eq!(counts.unique_key, 2);
    assert_eq!(counts.timestamp, 2);
    assert_eq!(counts.borough, 2);
    assert_eq!(counts.zip_code, 1);
    assert_eq!(counts.latitude, 1);
    assert_eq!(counts.longitude, 1);
    assert_eq!(counts.on_street, 2);
    assert_eq!(counts.off_street, 1);
    assert_eq!(counts.cross_street, 1);
    assert_eq!(counts.persons_injured, 1);
    assert_eq!(counts.persons_killed, 2);
    assert_eq!(counts.cyclists_injured, 2);
}

#[test]
fn csv_in_json_out_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("crashes.csv");
    fs::write(&input, FEED_CSV).unwrap();
    let raw = read_records(&input).unwrap();
    let NormalizeResult { records, .. } = normalize_records(&raw, &Limits::default());

    let output = dir.path().join("normalized.json");
    write_records(&output, &records).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    // Boroughs serialize as their codes.
    assert!(text.contains("\"borough\": \"bn\""));
    assert!(text.contains("\"zip_code\": \"11211\""));
    let back: Vec<NormalizedCrash> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, records);
}

#[test]
fn csv_output_is_flat() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("crashes.csv");
    fs::write(&input, FEED_CSV).unwrap();
    let raw = read_records(&input).unwrap();
    let NormalizeResult { records, .. } = normalize_records(&raw, &Limits::default());

    let output = dir.path().join("normalized.csv");
    write_records(&output, &records).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("unique_key,timestamp,borough,zip_code"));
    let first = text.lines().nth(1).unwrap();
    assert!(first.contains(",bn,11211,"));
}
