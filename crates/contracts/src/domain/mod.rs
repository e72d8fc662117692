pub mod a001_parameter;
pub mod common;
