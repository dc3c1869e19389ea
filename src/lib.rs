pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{InMemoryStorage, LocalStorage, StaticOrderService};
pub use crate::config::KataConfig;
pub use crate::core::{
    data_processor::DataProcessor,
    formats::{CsvFormat, DataFormat, DataFormatKind, JsonFormat, TransformError},
    order::Order,
};
pub use crate::domain::model::{OrderOutcome, ProcessingStatus, StorageResult};
pub use crate::domain::ports::{DataStorage, OrderService};
pub use crate::utils::error::{KataError, Result};
