use clap::Parser;
use render::{FigureModel, FigureRenderer};
use std::path::PathBuf;
use tworaycore::BandSet;
use workflow::config::{ScenarioOverrides, WorkflowConfig};
use workflow::report::WorkflowReport;
use workflow::runner::Runner;

mod render;
mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compare two-ray, u-factor and free-space path loss over distance"
)]
struct Args {
    /// Load the workflow (scenario, band sets, output directory) from YAML
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Transmitter height (m)
    #[arg(long)]
    tx_height: Option<f64>,
    /// Receiver height (m)
    #[arg(long)]
    rx_height: Option<f64>,
    /// Ground reflection coefficient Γ
    #[arg(long, allow_hyphen_values = true)]
    reflection: Option<f64>,
    #[arg(long)]
    u_factor: Option<f64>,
    #[arg(long)]
    max_distance: Option<f64>,
    #[arg(long)]
    samples: Option<usize>,
    /// Comma-separated carrier frequencies in MHz; repeat for several panels
    #[arg(long = "band-set")]
    band_sets: Vec<BandSet>,
    /// Directory receiving the figure
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Write a JSON summary of every band set
    #[arg(long)]
    report: Option<PathBuf>,
    /// Include distances and normalized curves in the JSON report
    #[arg(long, default_value_t = false)]
    report_curves: bool,
    /// Skip figure rendering
    #[arg(long, default_value_t = false)]
    no_plot: bool,
}

impl Args {
    fn overrides(&self) -> ScenarioOverrides {
        ScenarioOverrides {
            tx_height: self.tx_height,
            rx_height: self.rx_height,
            reflection: self.reflection,
            u_factor: self.u_factor,
            max_distance: self.max_distance,
            samples: self.samples,
            band_sets: self.band_sets.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let overrides = args.overrides();
    let workflow_config = if let Some(path) = args.scenario.as_ref() {
        let mut config = WorkflowConfig::load(path)?;
        config.apply(&overrides);
        config
    } else {
        WorkflowConfig::from_args(&overrides)
    };

    let runner = Runner::new(workflow_config);
    let result = runner.execute()?;

    for comparison in &result.comparisons {
        let summary = &comparison.summary;
        println!(
            "Bands={} -> u-model at/above analytical {:.2}%, mean(u - two-ray) {:+.1}dB, mean(FSPL - two-ray) {:+.1}dB",
            comparison.bands,
            summary.u_model_at_or_above_pct,
            summary.mean_u_minus_two_ray_db,
            summary.mean_fspl_minus_two_ray_db
        );
    }

    if !args.no_plot {
        let figure = FigureModel::from_result(&result);
        let figure_path = runner.config().figure_path();
        FigureRenderer::default().render_to_file(&figure, &figure_path)?;
        println!("Figure saved to {}", figure_path.display());
    }

    if let Some(path) = args.report.as_ref() {
        WorkflowReport::from_result(&result, args.report_curves).write(path)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
