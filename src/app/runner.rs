use crate::config::KataConfig;
use crate::core::data_processor::DataProcessor;
use crate::core::formats::DataFormatKind;
use crate::core::order::Order;
use crate::domain::model::{OrderOutcome, ProcessingStatus};
use std::sync::Arc;

/// Builds a `StaticOrderService` from config and processes one order with it.
pub fn run_order(config: &KataConfig) -> OrderOutcome {
    let service = Arc::new(config.build_order_service());
    let order = Order::with_service(service.clone());

    let outcome = order.process_order();
    tracing::debug!("Finalize calls: {}", service.finalized_count());
    outcome
}

pub fn run_data(config: &KataConfig, format: DataFormatKind, data: Option<&str>) -> ProcessingStatus {
    tracing::debug!(
        "Processing {} payload with {:?} storage",
        format,
        config.storage.kind
    );
    let processor = DataProcessor::new(config.build_storage());
    processor.process_with_format(format, data)
}

pub fn order_exit_code(outcome: OrderOutcome) -> i32 {
    if outcome.is_processed() {
        0
    } else {
        1
    }
}

pub fn data_exit_code(status: ProcessingStatus) -> i32 {
    if status.is_success() {
        return 0;
    }
    match status {
        ProcessingStatus::StorageFailed => 3,
        _ => 2,
    }
}
