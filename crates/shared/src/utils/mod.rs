mod change;
mod gracefull;
mod logs;
mod month_window;
mod parse_datetime;

pub use self::change::compute_change;
pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::month_window::{
    CreatedAt, MonthWindow, created_before, current_month_window, filter_by_window,
    previous_month_window,
};
pub use self::parse_datetime::parse_datetime;
