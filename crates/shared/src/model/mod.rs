pub mod driver;
pub mod merchant;
pub mod status;
pub mod transaction;
