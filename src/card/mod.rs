//! Module turning a location fix into ordered card rows.
mod logic;
pub mod structs;
pub use logic::format_fix;
pub use structs::{CardRow, LocationCard};
