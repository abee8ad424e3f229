// End-to-end pipeline over the fixture datasets:
//   topology + education load, join, render, atomic write, audit, download.

use std::path::PathBuf;

use choropleth::{
    audit, download_datasets, join, load_counties, load_education, parse_counties, render,
    write_output, ClassScheme, DataIntegrityError, FipsCode, OutputFormat, RenderOptions, Source,
};

fn fixture(name: &str) -> Source {
    Source::Path(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name))
}

#[test]
fn loads_counties_in_topology_order() {
    let features = load_counties(&fixture("counties.json"), "counties").unwrap();
    let ids: Vec<_> = features.iter().map(|f| f.id.to_string()).collect();
    assert_eq!(ids, vec!["01001", "01003", "01005", "02013"]);
    assert_eq!(features[3].geometry.0.len(), 2);

    let bounds = features[1].bounds().unwrap();
    assert_eq!((bounds.min().x, bounds.max().x), (10.0, 20.0));
    assert_eq!((bounds.min().y, bounds.max().y), (0.0, 10.0));
}

#[test]
fn unknown_object_is_fatal() {
    let err = load_counties(&fixture("counties.json"), "states").unwrap_err();
    assert!(format!("{err:#}").contains("counties"));
}

#[test]
fn joins_and_classifies_fixture() {
    let features = load_counties(&fixture("counties.json"), "counties").unwrap();
    let records = load_education(&fixture("education.json")).unwrap();
    let counties = join(&features, &records, &ClassScheme::education()).unwrap();

    let buckets: Vec<_> = counties.iter().map(|c| c.bucket.index()).collect();
    assert_eq!(buckets, vec![0, 2, 3, 4]);
    assert_eq!(counties[3].record.area_name, "Aleutians East Borough");
}

#[test]
fn renders_html_file() {
    let features = load_counties(&fixture("counties.json"), "counties").unwrap();
    let records = load_education(&fixture("education.json")).unwrap();
    let scheme = ClassScheme::education();
    let counties = join(&features, &records, &scheme).unwrap();

    let html = render(&counties, &scheme, &RenderOptions::default(), OutputFormat::Html).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("choropleth.html");
    write_output(&path, &html, false).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.matches(r#"<path class="county""#).count(), 4);
    assert!(written.contains(r##"fill="#FDFCDC" data-fips="01003" data-education="26""##));
    assert!(written.contains("<title>Barbour County, AL: 39%</title>"));
    assert!(written.contains(r#"id="legend""#));

    assert!(write_output(&path, &html, false).is_err());
}

#[test]
fn missing_statistics_abort_the_join() {
    let features = load_counties(&fixture("counties.json"), "counties").unwrap();
    let mut records = load_education(&fixture("education.json")).unwrap();
    records.retain(|r| r.fips != FipsCode::new(1005));

    let err = join(&features, &records, &ClassScheme::education()).unwrap_err();
    assert_eq!(err, DataIntegrityError::MissingRecord { fips: FipsCode::new(1005) });
}

#[test]
fn audit_of_fixture_is_clean_with_one_unused_record() {
    let features = load_counties(&fixture("counties.json"), "counties").unwrap();
    let records = load_education(&fixture("education.json")).unwrap();
    let report = audit(&features, &records);

    assert!(report.is_clean());
    assert_eq!(report.unused_records, vec![FipsCode::new(56045)]);
}

#[test]
fn download_copies_validated_datasets() {
    let dir = tempfile::tempdir().unwrap();
    download_datasets(&fixture("counties.json"), &fixture("education.json"), "counties", dir.path(), false).unwrap();

    let topology = std::fs::read(dir.path().join("counties.json")).unwrap();
    assert_eq!(parse_counties(&topology, "counties").unwrap().len(), 4);
    assert!(dir.path().join("for_user_education.json").exists());

    // the topology is not valid education data, so neither file is written
    let other = tempfile::tempdir().unwrap();
    assert!(download_datasets(&fixture("counties.json"), &fixture("counties.json"), "counties", other.path(), false).is_err());
    assert!(!other.path().join("counties.json").exists());
    assert!(!other.path().join("for_user_education.json").exists());

    // a rejected download leaves the directory retryable without --force
    download_datasets(&fixture("counties.json"), &fixture("education.json"), "counties", other.path(), false).unwrap();
    assert!(other.path().join("counties.json").exists());
}

#[test]
fn download_refuses_to_overwrite_either_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("for_user_education.json"), b"[]").unwrap();

    let err = download_datasets(&fixture("counties.json"), &fixture("education.json"), "counties", dir.path(), false).unwrap_err();
    assert!(err.to_string().contains("for_user_education.json"));
    assert!(!dir.path().join("counties.json").exists());

    download_datasets(&fixture("counties.json"), &fixture("education.json"), "counties", dir.path(), true).unwrap();
    assert!(dir.path().join("counties.json").exists());
}
