pub mod aggregate;
pub mod filter;
pub mod integration;
pub mod sample_data;

pub use aggregate::{PaymentMode, PaymentStats, PaymentStatus, Transaction, TransactionId};
pub use filter::{DateWindow, TransactionFilter};
pub use integration::{GatewayIntegration, DEFAULT_WEBHOOK_URL};
pub use sample_data::sample_transactions;
