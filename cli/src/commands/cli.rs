use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryArg {
    Points,
    Lines,
    Polygons,
}

#[derive(Parser, Debug)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct RunArgs {
    /// Override the viewer program from the configuration.
    #[arg(long)]
    pub viewer: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct DownloadArgs {
    /// Overpass QL query, given inline. Must request `[out:json]` output.
    #[arg(long, group = "query_input")]
    pub query: Option<String>,

    /// Read the Overpass QL query from a file instead.
    #[arg(long, group = "query_input")]
    pub query_file: Option<String>,

    /// Geometry to assemble from the response.
    /// - points: one feature per node
    /// - lines: one linestring per way
    /// - polygons: one closed ring per way
    #[arg(long, value_enum, default_value_t = GeometryArg::Lines)]
    pub kind: GeometryArg,

    /// Output GeoJSON file path.
    #[arg(long, short = 'o')]
    pub out: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the preparation steps, then launch the viewer (the default).
    Run(RunArgs),
    /// Fetch OpenStreetMap data through the Overpass API into GeoJSON.
    Download(DownloadArgs),
}
