pub mod dashboard;
pub mod transaction;

pub use self::dashboard::FindTopDrivers;
pub use self::transaction::FindTransactionsPage;
