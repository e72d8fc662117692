pub mod details;
pub mod values;
