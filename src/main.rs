use clap::Parser;
use email_finder::core::ConfigProvider;
use email_finder::utils::error::{ErrorSeverity, FinderError};
use email_finder::utils::{logger, validation::Validate};
use email_finder::{CliConfig, ContactPipeline, EtlEngine, HttpPageFetcher, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting email-finder CLI");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let result = match args.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            if let Some(input) = args.input.clone() {
                config.set_input_path(input);
            }
            let monitor = args.monitor || config.monitoring_enabled();
            run(config, monitor).await
        }
        None => {
            let monitor = args.monitor;
            run(args, monitor).await
        }
    };

    match result {
        Ok(output_path) => {
            println!("✅ Contact discovery completed successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Contact discovery failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

async fn run<C>(config: C, monitor: bool) -> Result<String, FinderError>
where
    C: ConfigProvider + Validate + 'static,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }

    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let fetcher = HttpPageFetcher::new(config.fetch_timeout_seconds(), config.user_agent())?;
    let pipeline = ContactPipeline::new(LocalStorage::default(), config, fetcher);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor);

    engine.run().await
}
