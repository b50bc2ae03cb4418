use package_sorter::utils::logger;
use package_sorter::{classify_csv, Classifier, CliConfig, Measurement, SorterError};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

fn main() {
    let config = CliConfig::parse_args();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ {} (exit code {})", e, e.exit_code());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), SorterError> {
    let classifier = Classifier::new(config.thresholds()?)?;
    tracing::debug!("Using thresholds: {:?}", classifier.thresholds());

    match &config.batch {
        Some(path) => {
            tracing::info!("📁 Sorting manifest: {}", path.display());
            let reader = BufReader::new(File::open(path)?);

            let summary = match &config.output {
                Some(out) => {
                    let writer = BufWriter::new(File::create(out)?);
                    let summary = classify_csv(&classifier, reader, writer)?;
                    tracing::info!("📁 Sorted manifest saved to: {}", out.display());
                    summary
                }
                None => classify_csv(&classifier, reader, io::stdout().lock())?,
            };

            // stdout may carry the manifest itself
            if config.json {
                eprintln!("{}", serde_json::to_string(&summary)?);
            }
        }
        None => {
            // clap requires all four when --batch is absent
            let measurement = Measurement::new(
                config.width.unwrap_or_default(),
                config.height.unwrap_or_default(),
                config.length.unwrap_or_default(),
                config.mass.unwrap_or_default(),
            );
            let category = classifier.classify_measurement(&measurement)?;

            let mut stdout = io::stdout().lock();
            if config.json {
                // non-finite values serialize as null
                let mut value = serde_json::to_value(measurement)?;
                value["category"] = serde_json::to_value(category)?;
                writeln!(stdout, "{}", value)?;
            } else {
                writeln!(stdout, "{}", category)?;
            }
        }
    }

    Ok(())
}
