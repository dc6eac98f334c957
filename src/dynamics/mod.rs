pub mod angle;
pub mod body;
pub mod forces;
pub mod state;

pub use body::{Body, BodyBuilder};
pub use forces::accelerate;
pub use state::{ErrorTerms, ForceCommand, NetAccel, SimConfig, GRAVITY};
