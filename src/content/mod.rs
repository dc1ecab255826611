//! Content metadata editing: form values, validation and the update payload.

mod update;
mod values;

pub use update::{
    ADD_METADATA_TX, ContentId, ContentMetadataUpdate, ContentVisibility, DEFAULT_SCHEMA_ID,
    MetadataTx, SchemaId, build_tx_params,
};
pub use values::{MetadataValues, ValidationLimits};
