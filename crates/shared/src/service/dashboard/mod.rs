pub mod stats;
pub mod topdrivers;
