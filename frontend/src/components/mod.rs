pub mod bills;
pub mod config_error;
pub mod form_message;
pub mod forms;
pub mod header;
pub mod tabs_container;
pub mod theme_toggle;
