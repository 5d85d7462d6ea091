pub mod dashboard;
pub mod driver;
pub mod merchant;
pub mod transaction;
