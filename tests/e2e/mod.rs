pub mod background;
pub mod contact;
pub mod journey;
pub mod navigation;
pub mod terminal_panel;
