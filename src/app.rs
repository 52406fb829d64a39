use anyhow::Context;
use csv_split::cli::parse_config;
use log::info;

/// Exit status when the split stops on an I/O or CSV error. Configuration
/// errors are reported by clap, which exits with status 2.
pub const EXIT_SPLIT_FAILURE: u8 = 1;

pub fn run() -> anyhow::Result<()> {
    // Configured by RUST_LOG; progress messages are shown unless it says otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_config(std::env::args_os().skip(1)).unwrap_or_else(|err| err.exit());

    let summary = csv_split::run(&config)
        .with_context(|| format!("Failed to split {}", config.input_path.display()))?;

    info!(
        "wrote {} records to {} files",
        summary.total_rows,
        summary.outputs.len()
    );
    Ok(())
}
