pub mod dashboard;
pub mod transaction;
