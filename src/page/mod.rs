// The live page: document state, host events and the controller that drives them.

pub mod controller;
pub mod document;
pub mod events;

pub use controller::{MenuChangeOutcome, PageController, RefreshOutcome};
pub use document::{Listener, Page, ToggleOutcome, DEFAULT_MENU_ID};
pub use events::{ChangeEvent, ClickEvent};
