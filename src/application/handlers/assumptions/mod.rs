//! Financing assumptions handlers.

mod get_assumptions;
mod save_assumptions;

pub use get_assumptions::GetAssumptionsHandler;
pub use save_assumptions::{SaveAssumptionsCommand, SaveAssumptionsHandler};
