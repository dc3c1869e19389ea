pub mod toml_config;

pub use toml_config::{KataConfig, LoggingConfig, OrderConfig, StorageConfig, StorageKind};

#[cfg(feature = "cli")]
pub use cli_args::{CliConfig, Command, DataArgs, OrderArgs};

#[cfg(feature = "cli")]
mod cli_args {
    use super::{KataConfig, StorageKind};
    use crate::core::formats::DataFormatKind;
    use clap::{Args, Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "katas")]
    #[command(about = "Guard-clause order processing and template-method data processing katas")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "Path to a TOML configuration file")]
        pub config: Option<PathBuf>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Process one order against the configured checks
        Order(OrderArgs),
        /// Validate, transform and store one payload
        Data(DataArgs),
    }

    #[derive(Debug, Clone, Args)]
    pub struct OrderArgs {
        #[arg(long, help = "Treat the payment method as invalid")]
        pub invalid_payment: bool,

        #[arg(long, help = "Treat the items as out of stock")]
        pub out_of_stock: bool,

        #[arg(long, help = "Treat the shipping address as invalid")]
        pub invalid_address: bool,
    }

    #[derive(Debug, Clone, Args)]
    pub struct DataArgs {
        #[arg(long, value_enum, ignore_case = true)]
        pub format: DataFormatKind,

        #[arg(long, value_enum, ignore_case = true)]
        pub storage: Option<StorageKind>,

        #[arg(long)]
        pub output_path: Option<String>,

        #[arg(
            long,
            help = "Make the in-memory storage report failure (rejected together with local storage)"
        )]
        pub fail_storage: bool,

        /// Payload to process; omitted means no payload at all
        pub data: Option<String>,
    }

    impl CliConfig {
        /// 命令列參數覆蓋設定檔
        pub fn apply_overrides(&self, config: &mut KataConfig) {
            match &self.command {
                Command::Order(args) => {
                    if args.invalid_payment {
                        config.order.payment_method_valid = false;
                    }
                    if args.out_of_stock {
                        config.order.items_in_stock = false;
                    }
                    if args.invalid_address {
                        config.order.shipping_address_valid = false;
                    }
                }
                Command::Data(args) => {
                    if let Some(kind) = args.storage {
                        config.storage.kind = kind;
                    }
                    if let Some(path) = &args.output_path {
                        config.storage.output_path = path.clone();
                    }
                    if args.fail_storage {
                        config.storage.fail = true;
                    }
                }
            }
            if self.verbose {
                config.logging.level = "debug".to_string();
            }
        }
    }

}
