pub mod driver;
pub mod merchant;
pub mod transaction;
