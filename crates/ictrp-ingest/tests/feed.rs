//! Feed and country reference ingestion tests.

use std::io::Write;

use ictrp_model::columns;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn feed_rows_are_keyed_by_header() {
    let feed = write_temp(
        "TrialID,Source Register,Scientific title,Phase\n\
         ChiCTR2000029953,ChiCTR,A trial of something,Phase 2\n\
         IRCT20200318046812N1,IRCT,Another trial,\n",
    );
    let rows = ictrp_ingest::read_feed(feed.path()).expect("read feed");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].trial_id(), Some("ChiCTR2000029953"));
    assert_eq!(rows[0].get(columns::PHASE), Some("Phase 2"));
    // Blank cells never materialize as values.
    assert_eq!(rows[1].get(columns::PHASE), None);
}

#[test]
fn blank_lines_and_padding_are_dropped() {
    let feed = write_temp(
        "TrialID, Source Register \n\
         ,\n\
         NCT04280705 , ClinicalTrials.gov \n",
    );
    let rows = ictrp_ingest::read_feed(feed.path()).expect("read feed");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].trial_id(), Some("NCT04280705"));
    assert_eq!(rows[0].source_register(), Some("ClinicalTrials.gov"));
}

#[test]
fn country_table_loads_and_lowercases_keys() {
    let reference = write_temp(
        "name,country_name,country_iso3\n\
         france,France,FRA\n\
         iran,Iran,IRN\n\
         united states of america,United States of America,USA\n",
    );
    let table = ictrp_ingest::load_country_table(reference.path()).expect("load table");
    assert_eq!(table.len(), 3);
    let record = table.lookup(" France ").expect("france");
    assert_eq!(record.name, "France");
    assert_eq!(record.iso3, "FRA");
}

#[test]
fn missing_reference_column_is_a_hard_error() {
    let reference = write_temp("name,iso\nfrance,FRA\n");
    let error = ictrp_ingest::load_country_table(reference.path()).unwrap_err();
    assert!(error.to_string().contains("country_name"));
}
