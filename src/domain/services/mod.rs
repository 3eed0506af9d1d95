pub mod actions;
mod app_state;
pub mod events;
mod notifications;
mod screens;

pub use app_state::*;
pub use notifications::*;
pub use screens::*;
