use nearly_equal::cli::{CliError, NearlyEqArgs};
use ortho_config::OrthoConfig;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn run() -> Result<bool, CliError> {
    let args = NearlyEqArgs::load()?;
    Ok(args.evaluate()?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    match run() {
        Ok(equal) => {
            println!("{equal}");
            if equal {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "comparison failed");
            eprintln!("nearlyeq: {err}");
            ExitCode::from(2)
        }
    }
}
