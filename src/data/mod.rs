//! Data loading: CSV sample files and the built-in demo field.

mod reader;

pub use reader::{demo_field, FieldReader};
