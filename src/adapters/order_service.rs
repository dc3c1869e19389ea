use crate::core::order::Order;
use crate::domain::ports::OrderService;
use std::cell::Cell;

/// Answers every check from fixed flags, typically taken from config or CLI.
#[derive(Debug)]
pub struct StaticOrderService {
    payment_method_valid: bool,
    items_in_stock: bool,
    shipping_address_valid: bool,
    finalized: Cell<usize>,
}

impl StaticOrderService {
    pub fn new(payment_method_valid: bool, items_in_stock: bool, shipping_address_valid: bool) -> Self {
        Self {
            payment_method_valid,
            items_in_stock,
            shipping_address_valid,
            finalized: Cell::new(0),
        }
    }

    pub fn finalized_count(&self) -> usize {
        self.finalized.get()
    }
}

impl Default for StaticOrderService {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

impl OrderService for StaticOrderService {
    fn is_payment_method_valid(&self, _order: &Order) -> bool {
        self.payment_method_valid
    }

    fn are_items_in_stock(&self, _order: &Order) -> bool {
        self.items_in_stock
    }

    fn is_shipping_address_valid(&self, _order: &Order) -> bool {
        self.shipping_address_valid
    }

    fn finalize_order(&self, _order: &Order) {
        self.finalized.set(self.finalized.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OrderOutcome;
    use std::sync::Arc;

    #[test]
    fn test_default_service_finalizes_once() {
        let service = Arc::new(StaticOrderService::default());
        let order = Order::with_service(service.clone());

        assert_eq!(order.process_order(), OrderOutcome::Processed);
        assert_eq!(service.finalized_count(), 1);
    }

    #[test]
    fn test_failing_flag_skips_finalize() {
        let service = Arc::new(StaticOrderService::new(true, true, false));
        let order = Order::with_service(service.clone());

        assert_eq!(order.process_order(), OrderOutcome::InvalidShippingAddress);
        assert_eq!(service.finalized_count(), 0);
    }
}
