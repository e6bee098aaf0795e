// Service exports
pub mod catalog;
pub mod clock;

pub use catalog::{Catalog, CatalogError};
pub use clock::{format_time, now_in_timezone, parse_time, parse_timezone, time_in_timezone, ClockError};
