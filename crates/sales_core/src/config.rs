use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, SampleError};

/// File written when neither the command line nor the environment names one.
pub const DEFAULT_OUTPUT_PATH: &str = "sample_sales_data.xlsx";
/// Name of the single worksheet in the generated workbook.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Environment variable overriding the output path.
pub const OUTPUT_PATH_ENV: &str = "SAMPLE_SALES_OUTPUT";
/// Environment variable enabling a rotating log file in the given directory.
pub const LOG_DIR_ENV: &str = "SAMPLE_SALES_LOG_DIR";

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Runtime settings for the sample data generator.
///
/// Every field has a default matching the reference run: write
/// `sample_sales_data.xlsx` in the working directory, no log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_path: PathBuf,
    pub sheet_name: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            log_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Resolve configuration from the real process arguments and environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Layer settings: positional argument, then environment, then defaults.
    ///
    /// `args` excludes the program name. `env` looks up a variable by name;
    /// empty values are treated as unset.
    pub fn resolve<I, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = lookup(OUTPUT_PATH_ENV) {
            debug!("{OUTPUT_PATH_ENV} overrides output path: {path}");
            config.output_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup(LOG_DIR_ENV) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        let mut args = args.into_iter();
        if let Some(arg) = args.next() {
            if arg.starts_with('-') {
                return Err(SampleError::Config(format!("unrecognized option: {arg}")));
            }
            if arg.is_empty() {
                return Err(SampleError::Config("output path must not be empty".into()));
            }
            config.output_path = PathBuf::from(arg);
        }
        if let Some(extra) = args.next() {
            return Err(SampleError::Config(format!(
                "unexpected argument: {extra} (usage: sample-sales-data [OUTPUT_PATH])"
            )));
        }

        Ok(config)
    }
}
