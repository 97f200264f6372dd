pub mod app;
pub mod center_panel;
pub mod left_panel;
pub mod logo;
pub mod settings;
pub mod settings_io;
