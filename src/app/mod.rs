pub mod runner;

pub use runner::{data_exit_code, order_exit_code, run_data, run_order};
