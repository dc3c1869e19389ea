use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn default_filter(level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("katas=debug,info")
        } else {
            EnvFilter::new(format!("katas={}", level))
        }
    })
}

/// 初始化日誌，`RUST_LOG` 優先於設定檔
pub fn init_logger(level: &str, format: LogFormat, verbose: bool) {
    let filter = default_filter(level, verbose);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    // try_init: a second call (e.g. from tests) must not panic
    let result = match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Logger already initialized: {}", e);
    }
}
