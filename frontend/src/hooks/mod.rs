pub mod use_client_directory;
pub mod use_pending_bills;
pub mod use_theme;
