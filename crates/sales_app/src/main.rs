use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};

use sales_core::{GeneratorConfig, SampleError, logging};
use sales_docs::SampleDataWriter;

/// Exit status for failures that carry no [`SampleError`].
const GENERIC_FAILURE: u8 = 1;

fn run() -> anyhow::Result<()> {
    let config = GeneratorConfig::from_env()?;
    let _log_guard = logging::init_logging(config.log_dir.as_deref())?;
    info!(
        "Generating sample sales workbook at {}",
        config.output_path.display()
    );

    let writer = SampleDataWriter::new(config);
    let stdout = std::io::stdout();
    let report = writer
        .generate_and_write(&mut stdout.lock())
        .inspect_err(|e| error!("Sample data generation failed: {e}"))
        .with_context(|| {
            format!(
                "Failed to create {}",
                writer.config().output_path.display()
            )
        })?;

    info!(
        "Done: {} rows x {} columns, {} bytes",
        report.rows, report.columns, report.bytes
    );
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<SampleError>()
                .map(SampleError::exit_code)
                .unwrap_or(GENERIC_FAILURE);
            ExitCode::from(code)
        }
    }
}
