use ahash::AHashMap;
use tracing::debug;

use crate::data::{EducationRecord, FipsCode, GeoFeature};

use super::{Bucket, ClassScheme};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataIntegrityError {
    #[error("no education record for county {fips}")]
    MissingRecord { fips: FipsCode },
}

/// Classify one feature under the education scheme by scanning `records` for
/// the first entry with a matching FIPS code.
pub fn classify(feature: &GeoFeature, records: &[EducationRecord]) -> Result<Bucket, DataIntegrityError> {
    ClassScheme::education().classify(feature, records)
}

impl ClassScheme {
    /// Linear-scan lookup of the first matching record, then classify its value.
    pub fn classify(&self, feature: &GeoFeature, records: &[EducationRecord]) -> Result<Bucket, DataIntegrityError> {
        let record = records.iter()
            .find(|record| record.fips == feature.id)
            .ok_or(DataIntegrityError::MissingRecord { fips: feature.id })?;

        Ok(self.bucket_for(record.bachelors_or_higher))
    }
}

/// Records keyed by FIPS code. When a code repeats, the first record in
/// source order is kept.
#[derive(Debug, Clone)]
pub struct RecordIndex<'a> {
    by_fips: AHashMap<FipsCode, &'a EducationRecord>,
    duplicates: Vec<FipsCode>,
}

impl<'a> RecordIndex<'a> {
    pub fn new(records: &'a [EducationRecord]) -> Self {
        let mut by_fips = AHashMap::with_capacity(records.len());
        let mut duplicates = Vec::new();

        for record in records {
            if by_fips.contains_key(&record.fips) {
                duplicates.push(record.fips);
            } else {
                by_fips.insert(record.fips, record);
            }
        }

        duplicates.sort_unstable();
        duplicates.dedup();

        Self { by_fips, duplicates }
    }

    pub fn get(&self, fips: FipsCode) -> Option<&'a EducationRecord> {
        self.by_fips.get(&fips).copied()
    }

    pub fn len(&self) -> usize { self.by_fips.len() }

    pub fn is_empty(&self) -> bool { self.by_fips.is_empty() }

    /// FIPS codes that appeared more than once, ascending.
    pub fn duplicates(&self) -> &[FipsCode] { &self.duplicates }
}

/// One feature joined to its record and class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedCounty<'a> {
    pub feature: &'a GeoFeature,
    pub record: &'a EducationRecord,
    pub bucket: Bucket,
}

/// Join every feature to its record, in feature order. Fails on the first
/// feature with no record.
pub fn join<'a>(
    features: &'a [GeoFeature],
    records: &'a [EducationRecord],
    scheme: &ClassScheme,
) -> Result<Vec<ClassifiedCounty<'a>>, DataIntegrityError> {
    let index = RecordIndex::new(records);
    if !index.duplicates().is_empty() {
        debug!(count = index.duplicates().len(), "duplicate education records, keeping first of each");
    }

    let counties = features.iter()
        .map(|feature| {
            let record = index.get(feature.id)
                .ok_or(DataIntegrityError::MissingRecord { fips: feature.id })?;
            Ok(ClassifiedCounty { feature, record, bucket: scheme.bucket_for(record.bachelors_or_higher) })
        })
        .collect::<Result<Vec<_>, DataIntegrityError>>()?;

    debug!(counties = counties.len(), records = records.len(), "joined features to records");
    Ok(counties)
}

/// Join diagnostics between the two datasets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinReport {
    pub features: usize,
    pub records: usize,
    /// Feature ids with no record, in feature order.
    pub unmatched_features: Vec<FipsCode>,
    /// Record codes no feature refers to, in record order.
    pub unused_records: Vec<FipsCode>,
    /// Codes with more than one record, ascending.
    pub duplicate_records: Vec<FipsCode>,
}

impl JoinReport {
    /// Every feature has exactly one record. Unused records do not affect
    /// the rendered map and are not counted against it.
    pub fn is_clean(&self) -> bool {
        self.unmatched_features.is_empty() && self.duplicate_records.is_empty()
    }
}

/// Compare the two datasets without failing.
pub fn audit(features: &[GeoFeature], records: &[EducationRecord]) -> JoinReport {
    let index = RecordIndex::new(records);
    let feature_ids = features.iter().map(|f| f.id).collect::<ahash::AHashSet<_>>();

    let unmatched_features = features.iter()
        .map(|f| f.id)
        .filter(|&id| index.get(id).is_none())
        .collect();

    let unused_records = records.iter()
        .map(|r| r.fips)
        .filter(|fips| !feature_ids.contains(fips))
        .collect();

    JoinReport {
        features: features.len(),
        records: records.len(),
        unmatched_features,
        unused_records,
        duplicate_records: index.duplicates().to_vec(),
    }
}
