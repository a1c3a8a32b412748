//! Independent view effects: each reacts to one kind of browser event.

pub mod cards;
pub mod hover;
pub mod menu;
pub mod navigation;
pub mod scroll;

pub use cards::CardGroup;
pub use hover::HoverEvent;
pub use menu::MenuIcon;
pub use navigation::anchor_target;
pub use scroll::{NavbarShadow, ScrollEffect, ScrollMetrics};
