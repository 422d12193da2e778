use clap::Parser;
use loan_qualifier::utils::{logger, validation::Validate};
use loan_qualifier::{
    CliConfig, ConsolePrompter, LocalStorage, QualifierEngine, QualifierPipeline, Settings,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting loan-qualifier CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(3);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let prompter = ConsolePrompter::new();
    let pipeline = QualifierPipeline::new(storage, prompter, settings);
    let engine = QualifierEngine::new(pipeline);

    match engine.run() {
        Ok(Some(path)) => {
            tracing::info!("✅ Qualifying loans saved to: {}", path);
            println!("✅ Qualifying loans saved to: {}", path);
        }
        Ok(None) => {
            tracing::info!("Finished without writing an output file");
        }
        Err(e) => {
            tracing::error!(
                "❌ Loan qualification failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                loan_qualifier::utils::error::ErrorSeverity::Low => 0,
                loan_qualifier::utils::error::ErrorSeverity::Medium => 2,
                loan_qualifier::utils::error::ErrorSeverity::High => 1,
                loan_qualifier::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    println!("Thank you for using the loan qualifier.");
    Ok(())
}
