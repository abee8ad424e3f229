//! Join geographic features to their statistics and classify the values
//! into ordered color buckets.

mod join;
mod scheme;

pub use join::{audit, classify, join, ClassifiedCounty, DataIntegrityError, JoinReport, RecordIndex};
pub use scheme::{Bucket, ClassBreak, ClassScheme, SchemeError};
