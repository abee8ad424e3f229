use std::path::PathBuf;

use choropleth::{Source, DEFAULT_COUNTIES_OBJECT, DEFAULT_COUNTIES_URL, DEFAULT_EDUCATION_URL};

/// US educational attainment choropleth CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "choropleth", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Fetch both datasets, join them and write the map
    Render(RenderArgs),

    /// Report mismatches between the topology and the education records
    Check(CheckArgs),

    /// Store both datasets locally for offline rendering
    Download(DownloadArgs),
}

/// Locations of the two input datasets (URL or local path).
#[derive(clap::Args, Debug)]
pub struct DatasetArgs {
    /// County topology (TopoJSON)
    #[arg(long, env = "CHOROPLETH_COUNTIES", default_value = DEFAULT_COUNTIES_URL)]
    pub counties: Source,

    /// Education records (JSON array)
    #[arg(long, env = "CHOROPLETH_EDUCATION", default_value = DEFAULT_EDUCATION_URL)]
    pub education: Source,

    /// Topology object holding the county geometries
    #[arg(long, default_value = DEFAULT_COUNTIES_OBJECT)]
    pub object: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Html,
    Svg,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub enum ProjectionArg {
    /// Coordinates are already screen coordinates
    #[default]
    Identity,
    /// Scale longitude/latitude to the viewport
    Fit,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub datasets: DatasetArgs,

    /// Output file, defaults to "./choropleth.html" (or ".svg")
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Map width in pixels
    #[arg(long, default_value_t = 1000.0)]
    pub width: f64,

    /// Map height in pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,

    /// How geometry coordinates are mapped to the viewport
    #[arg(long, value_enum, default_value_t)]
    pub projection: ProjectionArg,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub datasets: DatasetArgs,
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    #[command(flatten)]
    pub datasets: DatasetArgs,

    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn render_defaults_to_published_datasets() {
        let cli = Cli::try_parse_from(["choropleth", "render"]).unwrap();
        let Commands::Render(args) = cli.command else { panic!("expected render") };
        assert_eq!(args.datasets.counties, Source::Url(DEFAULT_COUNTIES_URL.to_string()));
        assert_eq!(args.datasets.object, "counties");
        assert_eq!(args.width, 1000.0);
        assert!(args.format.is_none());
        assert!(!args.force);
    }

    #[test]
    fn local_sources_and_verbosity() {
        let cli = Cli::try_parse_from([
            "choropleth", "-vv", "check",
            "--counties", "data/counties.json",
            "--education", "data/education.json",
        ]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Check(args) = cli.command else { panic!("expected check") };
        assert_eq!(args.datasets.education, Source::Path("data/education.json".into()));
    }

    #[test]
    fn schema_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
