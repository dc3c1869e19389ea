use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single `process_*_data` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    ValidationFailed,
    TransformationFailed,
    StorageFailed,
    Success,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::ValidationFailed => "VALIDATION_FAILED",
            ProcessingStatus::TransformationFailed => "TRANSFORMATION_FAILED",
            ProcessingStatus::StorageFailed => "STORAGE_FAILED",
            ProcessingStatus::Success => "SUCCESS",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessingStatus::Success)
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageResult {
    Success,
    Failure,
}

impl From<StorageResult> for ProcessingStatus {
    fn from(result: StorageResult) -> Self {
        match result {
            StorageResult::Success => ProcessingStatus::Success,
            StorageResult::Failure => ProcessingStatus::StorageFailed,
        }
    }
}

/// Result of `Order::process_order`; the first failing guard, or success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderOutcome {
    InvalidPaymentMethod,
    ItemsOutOfStock,
    InvalidShippingAddress,
    Processed,
}

impl OrderOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderOutcome::InvalidPaymentMethod => "Invalid payment method.",
            OrderOutcome::ItemsOutOfStock => "One or more items are out of stock.",
            OrderOutcome::InvalidShippingAddress => "Invalid shipping address.",
            OrderOutcome::Processed => "Order processed successfully.",
        }
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, OrderOutcome::Processed)
    }
}

impl fmt::Display for OrderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
