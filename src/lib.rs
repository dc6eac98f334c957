pub mod dynamics;
pub mod control;
pub mod sim;
pub mod io;
pub mod error;

// Flat re-exports for the common path: build a body, run it, read the series.
pub use control::{Controller, PidController};
pub use dynamics::{Body, BodyBuilder, ForceCommand, NetAccel, SimConfig};
pub use error::SimError;
pub use sim::{simulate, simulate_with, FlightPhase, Landing, RunParams, Series, Simulator};
