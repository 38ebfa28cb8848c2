//! Job role editor (MVVM):
//! - view_model.rs: form state, stage list commands, save
//! - view.rs: modal form

mod view;
mod view_model;

pub use view::JobRoleDetails;
pub use view_model::JobRoleDetailsViewModel;
