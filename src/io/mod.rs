pub mod csv;
pub mod json;

pub use csv::{write_series, write_series_file};
pub use json::{write_summary, write_summary_file, FlightSummary};
