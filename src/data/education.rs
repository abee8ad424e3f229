use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer};

use super::FipsCode;

/// Educational attainment statistics for one county.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EducationRecord {
    pub fips: FipsCode,
    pub state: String,
    pub area_name: String,
    /// Percentage of adults 25+ holding a bachelor's degree or higher.
    #[serde(rename = "bachelorsOrHigher", deserialize_with = "number_or_numeric_text")]
    pub bachelors_or_higher: f64,
}

impl EducationRecord {
    pub fn new(fips: FipsCode, state: &str, area_name: &str, bachelors_or_higher: f64) -> Self {
        Self {
            fips,
            state: state.to_string(),
            area_name: area_name.to_string(),
            bachelors_or_higher,
        }
    }

    /// Tooltip text, e.g. `Autauga County, AL: 21.9%`.
    pub fn summary(&self) -> String {
        format!("{}, {}: {}%", self.area_name, self.state, self.bachelors_or_higher)
    }
}

/// Accept `12.5` as well as `"12.5"`.
fn number_or_numeric_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

/// Parse a flat JSON array of education records, preserving source order.
pub fn parse_education(bytes: &[u8]) -> Result<Vec<EducationRecord>> {
    let records: Vec<EducationRecord> = serde_json::from_slice(bytes)
        .context("[education] failed to parse education records")?;

    if let Some(bad) = records.iter().find(|r| !r.bachelors_or_higher.is_finite()) {
        bail!("[education] non-finite bachelorsOrHigher for county {}", bad.fips);
    }

    Ok(records)
}
