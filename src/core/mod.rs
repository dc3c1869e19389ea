pub mod data_processor;
pub mod formats;
pub mod order;

pub use crate::domain::model::{OrderOutcome, ProcessingStatus, StorageResult};
pub use crate::domain::ports::{DataStorage, OrderService};
pub use crate::utils::error::Result;
