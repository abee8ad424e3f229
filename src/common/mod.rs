#[cfg(feature = "download")]
mod download;

#[cfg(feature = "download")]
pub(crate) use download::*;
