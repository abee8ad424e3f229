// Classification and join behavior over in-memory records:
//   bucket boundaries, first-match tie-break, order independence, missing ids.

use choropleth::{
    classify, Bucket, ClassScheme, DataIntegrityError, EducationRecord, FipsCode, GeoFeature,
};
use geo::MultiPolygon;

fn feature(code: &str) -> GeoFeature {
    GeoFeature::new(code.parse().unwrap(), MultiPolygon::new(vec![]))
}

fn record(code: &str, value: f64) -> EducationRecord {
    EducationRecord::new(code.parse().unwrap(), "AL", "Test County", value)
}

#[test]
fn value_below_thirteen_is_lowest_bucket() {
    let bucket = classify(&feature("01001"), &[record("01001", 12.5)]).unwrap();
    assert_eq!(bucket, Bucket::new(0));
    assert_eq!(ClassScheme::education().label(bucket), Some("Less than 13%"));
}

#[test]
fn boundary_value_moves_to_next_bucket() {
    assert_eq!(classify(&feature("01001"), &[record("01001", 26.0)]), Ok(Bucket::new(2)));
    for (value, expected) in [(13.0, 1), (26.0, 2), (39.0, 3), (52.0, 4)] {
        assert_eq!(classify(&feature("01001"), &[record("01001", value)]), Ok(Bucket::new(expected)));
    }
}

#[test]
fn value_above_fifty_two_is_highest_bucket() {
    let bucket = classify(&feature("01001"), &[record("01001", 60.0)]).unwrap();
    assert_eq!(bucket, Bucket::new(4));
    assert_eq!(ClassScheme::education().label(bucket), Some("More than 52%"));
}

#[test]
fn first_encountered_duplicate_wins() {
    let records = [record("01001", 5.0), record("01001", 45.0)];
    assert_eq!(classify(&feature("01001"), &records), Ok(Bucket::new(0)));

    let records = [record("01001", 45.0), record("01001", 5.0)];
    assert_eq!(classify(&feature("01001"), &records), Ok(Bucket::new(3)));
}

#[test]
fn result_is_independent_of_record_order() {
    let mut records: Vec<_> = (0..60)
        .map(|i| record(&format!("{:05}", 1001 + 2 * i), i as f64))
        .collect();
    let features: Vec<_> = records.iter().map(|r| GeoFeature::new(r.fips, MultiPolygon::new(vec![]))).collect();

    let expected: Vec<_> = features.iter().map(|f| classify(f, &records).unwrap()).collect();
    records.reverse();
    let reversed: Vec<_> = features.iter().map(|f| classify(f, &records).unwrap()).collect();
    records.rotate_left(17);
    let rotated: Vec<_> = features.iter().map(|f| classify(f, &records).unwrap()).collect();

    assert_eq!(expected, reversed);
    assert_eq!(expected, rotated);
    let scheme = ClassScheme::education();
    for (i, bucket) in expected.iter().enumerate() {
        assert_eq!(*bucket, scheme.bucket_for(i as f64));
    }
}

#[test]
fn missing_record_is_a_data_integrity_error() {
    let err = classify(&feature("01001"), &[record("01003", 30.0)]).unwrap_err();
    assert_eq!(err, DataIntegrityError::MissingRecord { fips: FipsCode::new(1001) });
    assert!(err.to_string().contains("01001"));
}
