use crate::core::order::Order;
use crate::domain::model::StorageResult;

/// Checks and side effects an `Order` delegates to while it is processed.
pub trait OrderService {
    fn is_payment_method_valid(&self, order: &Order) -> bool;

    fn are_items_in_stock(&self, order: &Order) -> bool;

    fn is_shipping_address_valid(&self, order: &Order) -> bool;

    fn finalize_order(&self, order: &Order);
}

pub trait DataStorage {
    fn store_data(&self, data: &str) -> StorageResult;
}

impl<T: DataStorage + ?Sized> DataStorage for &T {
    fn store_data(&self, data: &str) -> StorageResult {
        (**self).store_data(data)
    }
}

impl<T: DataStorage + ?Sized> DataStorage for Box<T> {
    fn store_data(&self, data: &str) -> StorageResult {
        (**self).store_data(data)
    }
}
