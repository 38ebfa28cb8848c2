pub mod api_error;
pub mod date_key;
pub mod validation;
pub mod serde_utils;
