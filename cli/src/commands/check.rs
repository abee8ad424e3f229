use anyhow::{bail, Result};
use choropleth::{audit, load_counties, load_education, FipsCode};

use crate::cli::{CheckArgs, Cli};

/// Most ids listed per category before the list is truncated.
const MAX_LISTED: usize = 20;

pub fn run(cli: &Cli, args: &CheckArgs) -> Result<()> {
    let features = load_counties(&args.datasets.counties, &args.datasets.object)?;
    let records = load_education(&args.datasets.education)?;

    let report = audit(&features, &records);

    println!("features: {}", report.features);
    println!("records:  {}", report.records);
    print_ids("features without a record", &report.unmatched_features, cli.verbose);
    print_ids("fips codes with duplicate records", &report.duplicate_records, cli.verbose);
    print_ids("records without a feature", &report.unused_records, cli.verbose);

    if !report.is_clean() {
        bail!(
            "join is not clean: {} unmatched feature(s), {} duplicated fips code(s)",
            report.unmatched_features.len(),
            report.duplicate_records.len(),
        );
    }

    println!("ok");
    Ok(())
}

/// Print a count and the ids; every id is listed at -v and above.
fn print_ids(heading: &str, ids: &[FipsCode], verbose: u8) {
    println!("{heading}: {}", ids.len());
    let limit = if verbose > 0 { ids.len() } else { MAX_LISTED };
    for id in ids.iter().take(limit) {
        println!("  - {id}");
    }
    if ids.len() > limit {
        println!("  ... and {} more", ids.len() - limit);
    }
}
