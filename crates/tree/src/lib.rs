mod flatten;
mod unique;

pub use flatten::{ChildField, Children, FieldFns, FlattenOptions, Nested, Order, flatten, flatten_one};
pub use unique::{Keep, unique};
