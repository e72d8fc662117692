//! Parameter Editor UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (save)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::ParamEditorDetails;
pub use view_model::ParamEditorVm;
