//! All data types for the congraph library.

pub mod error;
pub mod value;

pub use error::{GraphError, GraphResult};
pub use value::AttrValue;
