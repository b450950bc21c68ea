pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{decimal_comma, hours2readable};
