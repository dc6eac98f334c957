pub mod params;
pub mod record;
pub mod runner;

pub use params::{simulate, simulate_with, RunParams};
pub use record::{Sample, Series};
pub use runner::{FlightPhase, Landing, Simulator};
