//! Loading of the two input datasets from URLs or local files.

use std::{fmt, convert::Infallible, path::{Path, PathBuf}, str::FromStr};

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::{
    data::{parse_education, EducationRecord, GeoFeature, Topology},
    io::write_atomic,
};

/// Where a dataset comes from: `http(s)://` locators are fetched, anything
/// else is a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Path(PathBuf),
}

impl Source {
    /// Read the whole resource.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Url(url) => fetch(url),
            Self::Path(path) => std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else {
            Ok(Self::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(feature = "download")]
fn fetch(url: &str) -> Result<Vec<u8>> { crate::common::fetch_bytes(url) }

#[cfg(not(feature = "download"))]
fn fetch(url: &str) -> Result<Vec<u8>> {
    anyhow::bail!("cannot fetch {url}: built without the `download` feature")
}

/// Decode the named topology object into county features, in source order.
pub fn parse_counties(bytes: &[u8], object: &str) -> Result<Vec<GeoFeature>> {
    let topology = Topology::from_slice(bytes)?;
    Ok(topology.features(object)?)
}

/// Load and decode the county topology.
pub fn load_counties(source: &Source, object: &str) -> Result<Vec<GeoFeature>> {
    let bytes = source.read()?;
    let features = parse_counties(&bytes, object)
        .with_context(|| format!("[counties] failed to decode {source}"))?;
    info!(%source, object, features = features.len(), "loaded counties");
    Ok(features)
}

/// Load the education records.
pub fn load_education(source: &Source) -> Result<Vec<EducationRecord>> {
    let bytes = source.read()?;
    let records = parse_education(&bytes)
        .with_context(|| format!("[education] failed to decode {source}"))?;
    info!(%source, records = records.len(), "loaded education records");
    Ok(records)
}

/// Copy both datasets into `out_dir` as `counties.json` and
/// `for_user_education.json`. Both payloads are read and validated before
/// either file is written.
pub fn download_datasets(counties: &Source, education: &Source, object: &str, out_dir: &Path, force: bool) -> Result<()> {
    let topology = counties.read()?;
    parse_counties(&topology, object)
        .with_context(|| format!("[counties] failed to decode {counties}"))?;

    let records = education.read()?;
    parse_education(&records)
        .with_context(|| format!("[education] failed to decode {education}"))?;

    let targets = [
        (out_dir.join("counties.json"), &topology, counties),
        (out_dir.join("for_user_education.json"), &records, education),
    ];
    if !force {
        if let Some((path, ..)) = targets.iter().find(|(path, ..)| path.exists()) {
            bail!("Refusing to overwrite existing file: {} (use --force)", path.display());
        }
    }

    for (path, bytes, source) in &targets {
        write_atomic(path, bytes, force)?;
        info!(%source, path = %path.display(), "stored dataset");
    }

    Ok(())
}
