// Interaction layer. `session` is the composition root; everything else is a
// binder plus the state changes its actions perform.

pub mod animations;
pub mod events;
pub mod filter;
pub mod keyboard;
pub mod navigator;
pub mod project_modal;
pub mod session;
pub mod shell;
pub mod testimonials;
pub mod theme;
pub mod timeline;
pub mod typing;

pub use events::{Target, UiEvent};
pub use session::ViewSession;
pub use theme::{MemoryStore, Theme};
