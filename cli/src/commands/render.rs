use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use choropleth::{
    join, load_counties, load_education, render, write_output, ClassScheme, OutputFormat,
    Projection, RenderOptions,
};

use crate::cli::{Cli, FormatArg, ProjectionArg, RenderArgs};

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let format = resolve_format(args.format, args.output.as_deref());
    let output = args.output.clone()
        .unwrap_or_else(|| PathBuf::from(format!("choropleth.{}", format.extension())));

    // Topology first, then statistics; nothing is drawn unless both load.
    let features = load_counties(&args.datasets.counties, &args.datasets.object)?;
    let records = load_education(&args.datasets.education)?;

    let scheme = ClassScheme::education();
    let counties = join(&features, &records, &scheme)
        .context("education records do not cover every county")?;

    let options = RenderOptions {
        width: args.width,
        height: args.height,
        projection: match args.projection {
            ProjectionArg::Identity => Projection::Identity,
            ProjectionArg::Fit => Projection::Fit,
        },
        ..RenderOptions::default()
    };
    let document = render(&counties, &scheme, &options, format)?;
    write_output(&output, &document, args.force)?;

    if cli.verbose > 0 {
        eprintln!("Rendered {} counties into {}", counties.len(), output.display());
    }

    Ok(())
}

/// Explicit flag, else the output extension, else HTML.
fn resolve_format(flag: Option<FormatArg>, output: Option<&Path>) -> OutputFormat {
    match flag {
        Some(FormatArg::Html) => OutputFormat::Html,
        Some(FormatArg::Svg) => OutputFormat::Svg,
        None => output
            .and_then(|path| path.extension())
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or_default(),
    }
}
