pub mod aggregate;
pub mod archive;
pub mod request;
