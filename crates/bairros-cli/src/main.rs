use bairros_core::{PipelineConfig, RunReport};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Pipeline(#[from] bairros_core::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "bairros", version)]
#[command(about = "Build a neighborhood adjacency graph from CSV rows and rank neighborhoods by degree")]
struct Cli {
    /// Adjacency CSV, one street-ordered list of neighborhoods per row ('-' for stdin)
    input: Option<PathBuf>,

    /// Edge-list CSV to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of neighborhoods listed in the degree ranking
    #[arg(long)]
    top: Option<usize>,

    /// Treat the first input row as a header instead of data
    #[arg(long)]
    has_headers: bool,

    /// Link label template; {origin} and {destination} are substituted
    #[arg(long)]
    link_template: Option<String>,

    /// JSON config file; explicit flags override its values
    #[arg(long, env = "BAIRROS_CONFIG")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn pipeline_config(&self) -> Result<PipelineConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_json_file(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }
        if self.has_headers {
            config.load.has_headers = true;
        }
        if let Some(template) = &self.link_template {
            config.export.link_template = template.clone();
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn write_text_report(out: &mut impl Write, report: &RunReport) -> std::io::Result<()> {
    writeln!(out, "Neighborhoods found:")?;
    for name in &report.neighborhoods {
        writeln!(out, "- {name}")?;
    }
    writeln!(out)?;
    writeln!(out, "Total neighborhoods found: {}", report.neighborhoods.len())?;
    writeln!(out, "Total connections found: {}", report.raw_connection_count)?;
    writeln!(out)?;
    writeln!(out, "Saved {}", report.output_path.display())?;
    writeln!(out)?;
    writeln!(out, "Graph analysis:")?;
    writeln!(out, "Neighborhoods (vertices): {}", report.degrees.vertex_count)?;
    writeln!(out, "Connections (edges): {}", report.degrees.edge_count)?;
    writeln!(out)?;
    writeln!(out, "Most connected neighborhoods:")?;
    for ranked in &report.degrees.top {
        writeln!(out, "{}: {} connections", ranked.name, ranked.degree)?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.pipeline_config()?;
    tracing::debug!(?config, "resolved config");

    let report = bairros_core::run(&config)?;

    let mut out = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Text => write_text_report(&mut out, &report)?,
        OutputFormat::Json => {
            if cli.pretty {
                serde_json::to_writer_pretty(&mut out, &report)?;
            } else {
                serde_json::to_writer(&mut out, &report)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
