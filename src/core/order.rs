use crate::domain::model::OrderOutcome;
use crate::domain::ports::OrderService;
use crate::utils::error::{KataError, Result};
use std::fmt;
use std::sync::Arc;

pub const MISSING_ORDER_SERVICE: &str = "OrderService cannot be null.";

/// One precondition of order processing and the outcome reported when it fails.
struct Guard {
    name: &'static str,
    check: fn(&dyn OrderService, &Order) -> bool,
    on_failure: OrderOutcome,
}

fn payment_method_valid(service: &dyn OrderService, order: &Order) -> bool {
    service.is_payment_method_valid(order)
}

fn items_in_stock(service: &dyn OrderService, order: &Order) -> bool {
    service.are_items_in_stock(order)
}

fn shipping_address_valid(service: &dyn OrderService, order: &Order) -> bool {
    service.is_shipping_address_valid(order)
}

// Evaluated in order; the first failing guard decides the outcome.
const GUARDS: [Guard; 3] = [
    Guard {
        name: "payment_method",
        check: payment_method_valid,
        on_failure: OrderOutcome::InvalidPaymentMethod,
    },
    Guard {
        name: "stock",
        check: items_in_stock,
        on_failure: OrderOutcome::ItemsOutOfStock,
    },
    Guard {
        name: "shipping_address",
        check: shipping_address_valid,
        on_failure: OrderOutcome::InvalidShippingAddress,
    },
];

pub struct Order {
    order_service: Arc<dyn OrderService>,
}

impl Order {
    /// Fails with `KataError::InvalidArgument` when no service is supplied.
    pub fn new(order_service: Option<Arc<dyn OrderService>>) -> Result<Self> {
        match order_service {
            Some(service) => Ok(Self::with_service(service)),
            None => Err(KataError::invalid_argument(MISSING_ORDER_SERVICE)),
        }
    }

    pub fn with_service(order_service: Arc<dyn OrderService>) -> Self {
        Self { order_service }
    }

    /// Runs the payment, stock and shipping checks in that order.
    ///
    /// `finalize_order` is called exactly once, and only when every check passes.
    pub fn process_order(&self) -> OrderOutcome {
        let service = self.order_service.as_ref();

        let failed = GUARDS.iter().find(|guard| {
            let passed = (guard.check)(service, self);
            tracing::debug!("Order guard '{}' passed: {}", guard.name, passed);
            !passed
        });

        if let Some(guard) = failed {
            tracing::info!("Order rejected by '{}' guard: {}", guard.name, guard.on_failure);
            return guard.on_failure;
        }

        service.finalize_order(self);
        tracing::info!("Order finalized");
        OrderOutcome::Processed
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order").finish_non_exhaustive()
    }
}
