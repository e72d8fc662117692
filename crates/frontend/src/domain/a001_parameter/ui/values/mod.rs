//! Minimal parameter values editor: one input per parameter, no validation.

mod view;
mod view_model;

pub use view::ParamValuesEditor;
pub use view_model::ParamValuesVm;
