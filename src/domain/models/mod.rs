mod action;
mod answer;
mod event;
mod guess_service;
mod loading;
mod notification;
mod session;

pub use action::*;
pub use answer::*;
pub use event::*;
pub use guess_service::*;
pub use loading::*;
pub use notification::*;
pub use session::*;
