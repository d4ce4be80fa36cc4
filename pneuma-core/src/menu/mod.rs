//! Settings menu

pub mod controller;
pub mod events;

pub use controller::{Menu, MenuItem, MENU_LEN};
pub use events::{MenuAction, NavigationEvent};
