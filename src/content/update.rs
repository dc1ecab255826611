//! Content metadata update payload and the transaction that carries it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::values::{MetadataValues, ValidationLimits};
use crate::error::ParamError;

/// Extrinsic that attaches metadata to uploaded content.
pub const ADD_METADATA_TX: &str = "dataDirectory.addMetadata";

/// Schema id the metadata JSON is written against.
pub const DEFAULT_SCHEMA_ID: SchemaId = SchemaId(1);

/// Identifier of an uploaded content object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub [u8; 32]);

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaId(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentVisibility {
    #[default]
    Draft,
    Public,
}

/// A partial update of content metadata. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetadataUpdate {
    pub children_ids: Option<Vec<ContentId>>,
    pub visibility: Option<ContentVisibility>,
    pub schema: Option<SchemaId>,
    pub json: Option<String>,
}

/// Parameters for an [`ADD_METADATA_TX`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTx {
    pub method: &'static str,
    pub content_id: ContentId,
    pub update: ContentMetadataUpdate,
}

/// Validates `values` and builds the add-metadata transaction parameters.
///
/// New metadata is always written as a `Draft` against the default schema.
// TODO: set only the changed fields once updateMetadata replaces addMetadata for edits.
pub fn build_tx_params(
    content_id: ContentId,
    values: &MetadataValues,
    limits: &ValidationLimits,
) -> Result<MetadataTx, ParamError> {
    values.validate(limits)?;
    let json = values.to_json()?;

    tracing::debug!(%content_id, json_len = json.len(), "built metadata update");

    Ok(MetadataTx {
        method: ADD_METADATA_TX,
        content_id,
        update: ContentMetadataUpdate {
            children_ids: None,
            visibility: Some(ContentVisibility::Draft),
            schema: Some(DEFAULT_SCHEMA_ID),
            json: Some(json),
        },
    })
}
