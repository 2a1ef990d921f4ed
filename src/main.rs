use clap::Parser;
use rated_extremes::core::ConfigProvider;
use rated_extremes::utils::{logger, validation::Validate};
use rated_extremes::{
    CliConfig, EtlEngine, EtlError, LocalStorage, RatedLevelPipeline, RunConfig, RunReport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting rated-extremes");
    tracing::debug!("CLI flags: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::default();
    let pipeline = RatedLevelPipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be written");
        match engine.preview().await {
            Ok(outcome) => {
                for name in &outcome.names {
                    println!("{}", name);
                }
                tracing::info!(
                    "Would write {} of {} rows to {}",
                    outcome.rows_matched(),
                    outcome.rows_considered,
                    engine.pipeline().config().output_path()
                );
                return Ok(());
            }
            Err(e) => exit_with(e),
        }
    }

    match engine.run_with_outcome().await {
        Ok((summary, outcome)) => {
            let config: &RunConfig = engine.pipeline().config();
            if let Some(report_path) = &config.report_path {
                let report = RunReport::new(config, &summary, &outcome);
                if let Err(e) = report.write(engine.pipeline().storage(), report_path).await {
                    exit_with(e);
                }
                tracing::info!("📝 Report saved to: {}", report_path);
            }

            tracing::info!("✅ Done in {:?}", summary.elapsed);
            println!(
                "✅ {} levels tagged '{}' written to {}",
                summary.rows_matched,
                config.tag(),
                summary.output_path
            );
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: EtlError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
