pub mod aggregate;
pub mod calendar;
pub mod request;
pub mod response;
pub mod schedule;
pub mod today;
