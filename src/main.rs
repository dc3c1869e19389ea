use clap::Parser;
use katas::app;
use katas::config::Command;
use katas::utils::{logger, validation::Validate};
use katas::{CliConfig, KataConfig, KataError};

fn load_config(cli: &CliConfig) -> Result<KataConfig, KataError> {
    let mut config = match &cli.config {
        Some(path) => KataConfig::from_file(path)?,
        None => KataConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(&config.logging.level, config.logging.format, cli.verbose);
    tracing::info!("Starting katas CLI");
    tracing::debug!("Effective config: {:?}", config);

    let exit_code = match &cli.command {
        Command::Order(_) => {
            let outcome = app::run_order(&config);
            println!("{}", outcome);
            app::order_exit_code(outcome)
        }
        Command::Data(args) => {
            let status = app::run_data(&config, args.format, args.data.as_deref());
            println!("{}", status);
            app::data_exit_code(status)
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
