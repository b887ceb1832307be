use clap::Parser;
use nis_calc::adapters::renderer_for;
use nis_calc::core::{ConfigProvider, Renderer};
use nis_calc::utils::error::NisError;
use nis_calc::utils::logger;
use nis_calc::{CliConfig, IntensityEvaluator, Session, TomlConfig};
use std::io::{self, Write};

const EXIT_FAULT: i32 = 1;
const EXIT_REJECTED: i32 = 2;

fn main() {
    let cli = CliConfig::parse();

    // Logging settings may come from the config file, so resolve first.
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            init_logger(cli.verbose, cli.log_json);
            tracing::error!("❌ Configuration validation failed: {}", e);
            report(&e);
            std::process::exit(EXIT_FAULT);
        }
    };

    init_logger(config.logging.verbose, config.logging.json);
    tracing::info!("Starting nis-calc");
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }
    tracing::debug!("Resolved config: {:?}", config);

    match run(&cli, &config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(
                "❌ nis-calc failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            report(&e);
            std::process::exit(EXIT_FAULT);
        }
    }
}

fn init_logger(verbose: bool, json: bool) {
    if json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
}

fn report(e: &NisError) {
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

fn run(cli: &CliConfig, config: &TomlConfig) -> nis_calc::Result<i32> {
    let evaluator = IntensityEvaluator::new(config);
    let renderer = renderer_for(config.output_format());
    tracing::debug!(
        "Limits: reference={:e}, min={:e}, max={:e}, decimals={}",
        config.limits().reference_intensity,
        config.limits().min_intensity,
        config.limits().max_intensity,
        config.decimals()
    );

    match &cli.intensity {
        Some(raw) => {
            let evaluation = evaluator.evaluate(raw);
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", renderer.render(&evaluation)?)?;

            if evaluation.decibels.is_some() {
                Ok(0)
            } else {
                Ok(EXIT_REJECTED)
            }
        }
        None => {
            tracing::info!("Reading intensities from stdin (one per line, 'quit' to stop)");
            let session = Session::new(evaluator, renderer);
            session.run(io::stdin().lock(), io::stdout().lock())?;
            Ok(0)
        }
    }
}
