pub mod aggregate;
pub mod editor;
pub mod values;

pub use aggregate::{Color, ParamModel, Parameter, ParameterId, ParameterValue, PARAM_TYPE_STRING};
pub use editor::{NameError, ParamEditorState, Snapshot, SnapshotRow};
pub use values::ParamValues;
