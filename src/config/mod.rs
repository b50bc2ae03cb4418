pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::classifier::Thresholds;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::{error::ErrorKind, CommandFactory, Parser};
#[cfg(feature = "cli")]
use std::ffi::OsString;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::{ThresholdOverrides, TomlConfig};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "package-sorter")]
#[command(about = "Sort packages into STANDARD, SPECIAL or REJECTED stacks")]
pub struct CliConfig {
    /// Package width
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "batch",
        conflicts_with = "batch"
    )]
    pub width: Option<f64>,

    /// Package height
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "batch",
        conflicts_with = "batch"
    )]
    pub height: Option<f64>,

    /// Package length
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "batch",
        conflicts_with = "batch"
    )]
    pub length: Option<f64>,

    /// Package mass
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "batch",
        conflicts_with = "batch"
    )]
    pub mass: Option<f64>,

    /// CSV manifest with width,height,length,mass columns
    #[arg(long)]
    pub batch: Option<PathBuf>,

    /// Where to write the sorted manifest (stdout when omitted)
    #[arg(long, requires = "batch")]
    pub output: Option<PathBuf>,

    /// TOML file with a [thresholds] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the bulky-by-volume threshold (default 1000000)
    #[arg(long, allow_negative_numbers = true)]
    pub min_bulky_volume: Option<f64>,

    /// Override the bulky-by-dimension threshold (default 150)
    #[arg(long, allow_negative_numbers = true)]
    pub min_bulky_dimension: Option<f64>,

    /// Override the heavy-by-mass threshold (default 20)
    #[arg(long, allow_negative_numbers = true)]
    pub min_heavy_mass: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Parses the process arguments, exiting with a usage error on bad input.
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Like `try_parse_from`, plus the cross-mode checks clap does not apply.
    pub fn try_parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let config = Self::try_parse_from(args)?;
        if config.output.is_some() && config.batch.is_none() {
            return Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "--output can only be used together with --batch",
            ));
        }
        Ok(config)
    }

    /// Defaults, then the config file, then command-line flags.
    pub fn thresholds(&self) -> Result<Thresholds> {
        let base = match &self.config {
            Some(path) => {
                tracing::debug!("Loading thresholds from {}", path.display());
                TomlConfig::from_file(path)?.thresholds()
            }
            None => Thresholds::default(),
        };

        let flags = ThresholdOverrides {
            min_bulky_volume: self.min_bulky_volume,
            min_bulky_dimension: self.min_bulky_dimension,
            min_heavy_mass: self.min_heavy_mass,
        };
        let thresholds = flags.apply(base);
        thresholds.validate()?;
        Ok(thresholds)
    }
}
