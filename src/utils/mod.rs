pub mod formatting;

pub use formatting::truncate_value;
