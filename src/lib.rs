//! txparams — typed default values and payload builders for chain
//! transaction parameters.
//!
//! Parameter input widgets are seeded from the declared type of each
//! parameter. This crate owns that mapping and the non-UI half of the
//! content metadata editor.
//!
//! # Architecture
//!
//! - **`types`** — Registry type tags (`TypeDescriptor`, `TypeDef`) and `DefaultValue`
//! - **`resolver`** — Type-to-default resolution and call parameter seeding
//! - **`content`** — Content metadata values, validation, and the add-metadata payload
//! - **`error`** — The crate error type

pub mod content;
pub mod error;
pub mod resolver;
pub mod types;

pub use error::{FieldError, ParamError};
pub use resolver::{RawParam, init_params, resolve, resolve_descriptor, resolve_type_name};
pub use types::{DefaultValue, TypeDef, TypeDefInfo, TypeDefSub, TypeDescriptor, UnknownTag};
