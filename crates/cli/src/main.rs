use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bnos_core::dashboard;
use bnos_core::domain::inputs::BusinessInputs;

/// Computes the dashboard summary for a set of business inputs and prints it
/// as JSON. Handy for inspecting the engine output without running the API.
#[derive(Debug, Parser)]
#[command(name = "bnos_cli")]
struct Args {
    /// Path to a JSON file with the business inputs. Defaults to the built-in
    /// sample dataset.
    #[arg(long)]
    inputs: Option<std::path::PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,

    /// Print only the recommendations instead of the full summary.
    #[arg(long)]
    recommendations_only: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = bnos_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "run failed");
        return Err(err);
    }

    Ok(())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let inputs = match &args.inputs {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<BusinessInputs>(&raw)
                .with_context(|| format!("{} is not a valid inputs file", path.display()))?
        }
        None => BusinessInputs::sample(),
    };

    let summary = dashboard::summarize(&inputs)?;

    let value = if args.recommendations_only {
        serde_json::to_value(&summary.recommendations)?
    } else {
        serde_json::to_value(&summary)?
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{rendered}");

    tracing::info!(
        overall_score = summary.global_roi.overall_score,
        recommendations = summary.recommendations.len(),
        "summary computed"
    );

    Ok(())
}

fn init_sentry(settings: &bnos_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
