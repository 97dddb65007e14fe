use clap::Parser;
use netstats_plot::Error;
use netstats_plot::chart::{self, ChartLayout, ChartSpec};
use netstats_plot::plot;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "delay-plot",
    about = "Render bundle delivery delay charts from testbed [NetStats] logs"
)]
struct Args {
    /// Path to the chart spec (chart.json)
    #[arg(long)]
    chart: PathBuf,

    /// Directory holding the log files (defaults to the current directory)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Override the output path from the spec
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override the chart title from the spec
    #[arg(long)]
    title: Option<String>,

    /// One chart per simulation instead of a single combined chart
    #[arg(long)]
    each: bool,
}

fn run(args: Args) -> Result<(), Error> {
    let mut spec = ChartSpec::load(&args.chart)?;
    if let Some(out) = args.out {
        spec.output = out;
    }
    if let Some(title) = args.title {
        spec.title = title;
    }
    if args.each {
        spec.layout = Some(ChartLayout::Each);
    }
    let log_dir = args.log_dir.unwrap_or_else(|| PathBuf::from("."));

    match spec.layout() {
        ChartLayout::Combined => {
            let series = chart::build_series(&spec, &log_dir)?;
            plot::render_chart(&spec.output, &spec.title, &series)?;
            info!(path = %spec.output.display(), "wrote chart");
        }
        ChartLayout::Each => {
            let mut written = 0_usize;
            for sim in &spec.simulations {
                let mut single = spec.clone();
                single.simulations = vec![sim.clone()];
                let series = match chart::build_series(&single, &log_dir) {
                    Ok(series) => series,
                    // build_series already warned about the empty log.
                    Err(Error::EmptyChart { .. }) => continue,
                    Err(err) => return Err(err),
                };
                let out = spec.output_for(&sim.label);
                plot::render_chart(&out, &spec.title_for(&sim.label), &series)?;
                info!(sim = %sim.label, path = %out.display(), "wrote chart");
                written += 1;
            }
            if written == 0 {
                return Err(Error::EmptyChart {
                    title: spec.title.clone(),
                });
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        error!(%err, "delay-plot failed");
        std::process::exit(1);
    }
}
