pub mod health;
pub mod sales;

pub use health::health_check;
pub use sales::get_sales;
