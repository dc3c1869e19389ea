// Adapters layer: concrete collaborators for the order and data katas.

pub mod order_service;
pub mod storage;

pub use order_service::StaticOrderService;
pub use storage::{InMemoryStorage, LocalStorage};
