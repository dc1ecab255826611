//! Parameter type tags and their default values.

mod descriptor;
mod value;

pub use descriptor::{TypeDef, TypeDefInfo, TypeDefSub, TypeDescriptor, UnknownTag};
pub use value::DefaultValue;
