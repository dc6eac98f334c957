pub mod controller;
pub mod integral;
pub mod pid;

pub use controller::Controller;
pub use integral::{IntegralTerms, Integrals, ResetIntegral, RESET_THRESHOLD};
pub use pid::{saturate, PidController};
