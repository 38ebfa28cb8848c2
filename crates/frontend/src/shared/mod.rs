pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod dialogs;
pub mod file_utils;
pub mod icons;
pub mod modal;
