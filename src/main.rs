use clap::Parser;
use whitehouse_actions::config::LogFormat;
use whitehouse_actions::core::ConfigProvider;
use whitehouse_actions::utils::error::ErrorSeverity;
use whitehouse_actions::utils::{logger, validation, validation::Validate};
use whitehouse_actions::{CliConfig, EtlEngine, EtlError, ScrapePipeline, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting whitehouse-actions");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                let config =
                    config.with_store_fallback(cli.supabase_url.clone(), cli.supabase_key.clone());
                run(config, &cli).await
            }
            Err(e) => Err(e),
        },
        None => run(cli.clone(), &cli).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run<C: ConfigProvider + Validate>(config: C, cli: &CliConfig) -> Result<(), EtlError> {
    config.validate()?;

    if !cli.dry_run {
        for warning in validation::store_config_warnings(config.store_url(), config.store_key()) {
            tracing::warn!("⚠️  {}", warning);
        }
    }

    let pipeline = ScrapePipeline::from_config(&config)?;
    let engine = EtlEngine::new(pipeline)
        .dry_run(cli.dry_run)
        .export_csv(cli.export_csv.clone());

    let summary = engine.run().await?;
    tracing::info!(
        "✅ Done: {} scraped, {} stored, {} failed",
        summary.scraped,
        summary.stored,
        summary.failed
    );

    Ok(())
}
