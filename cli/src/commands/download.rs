use anyhow::Result;
use choropleth::download_datasets;

use crate::cli::{Cli, DownloadArgs};

pub fn run(cli: &Cli, args: &DownloadArgs) -> Result<()> {
    let out_dir = &args.output.clone().unwrap_or(".".into());
    let datasets = &args.datasets;

    download_datasets(&datasets.counties, &datasets.education, &datasets.object, out_dir, args.force)?;

    if cli.verbose > 0 {
        eprintln!("Downloaded datasets into {}", out_dir.display());
    }

    Ok(())
}
