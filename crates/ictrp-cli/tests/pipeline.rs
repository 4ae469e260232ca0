//! End-to-end pipeline tests over temporary CSV fixtures.

use std::fs;
use std::io::Write;

use chrono::NaiveDate;
use serde_json::Value;
use tempfile::TempDir;

use ictrp_cli::pipeline::{OutputFormat, RunOptions, run_feed};

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    path
}

fn fixture_options(dir: &TempDir, output: Option<&str>) -> RunOptions {
    let feed = write_fixture(
        dir,
        "feed.csv",
        "TrialID,Source Register,Scientific title,Countries,Phase\n\
         ChiCTR2000029953,ChiCTR,A remdesivir trial,China,Phase 2\n\
         NCT04280705,ClinicalTrials.gov,Excluded trial,United States of America,Phase 3\n\
         IRCT20200318046812N1,IRCT,A favipiravir trial,Iran,Phase 1/Phase 2\n",
    );
    let countries = write_fixture(
        dir,
        "countries.csv",
        "name,country_name,country_iso3\n\
         china,China,CHN\n\
         iran,Iran,IRN\n",
    );
    RunOptions {
        feed,
        countries,
        output: output.map(|name| dir.path().join(name)),
        format: OutputFormat::Ndjson,
        dry_run: false,
        curation_date: NaiveDate::from_ymd_opt(2020, 7, 6).expect("valid date"),
    }
}

#[test]
fn run_writes_one_document_per_line() {
    let dir = TempDir::new().expect("temp dir");
    let options = fixture_options(&dir, Some("out.ndjson"));
    let result = run_feed(&options).expect("run pipeline");
    assert_eq!(result.rows_read, 3);
    assert_eq!(result.excluded, 1);
    assert_eq!(result.documents, 2);
    assert!(result.duplicates.is_empty());

    let output = fs::read_to_string(dir.path().join("out.ndjson")).expect("read output");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: Value = serde_json::from_str(lines[0]).expect("parse first line");
    assert_eq!(first["identifier"], "ChiCTR2000029953");
    assert_eq!(first["studyLocation"][0]["studyLocationCountry"], "China");
    let second: Value = serde_json::from_str(lines[1]).expect("parse second line");
    assert_eq!(second["studyDesign"]["phaseNumber"], serde_json::json!([1, 2]));
}

#[test]
fn dry_run_skips_the_sink() {
    let dir = TempDir::new().expect("temp dir");
    let mut options = fixture_options(&dir, Some("out.ndjson"));
    options.dry_run = true;
    let result = run_feed(&options).expect("run pipeline");
    assert_eq!(result.documents, 2);
    assert!(!dir.path().join("out.ndjson").exists());
}

#[test]
fn json_format_writes_an_array() {
    let dir = TempDir::new().expect("temp dir");
    let mut options = fixture_options(&dir, Some("out.json"));
    options.format = OutputFormat::Json;
    run_feed(&options).expect("run pipeline");
    let output = fs::read_to_string(dir.path().join("out.json")).expect("read output");
    let value: Value = serde_json::from_str(&output).expect("parse array");
    assert_eq!(value.as_array().expect("array").len(), 2);
}
