//! Default value resolution for declared parameter types.
//!
//! Each recognized [`TypeDescriptor`] maps to exactly one [`DefaultValue`]:
//!
//! - `Balance` starts at 1,
//! - unsigned widths and index/counter types start at 0,
//! - `bool`, `String`, `Timestamp` and `VoteThreshold` get their natural zero,
//! - opaque and structured types have no safe zero and resolve to
//!   [`DefaultValue::Absent`].
//!
//! Anything else is a registry tag this crate does not know and resolves to
//! [`ParamError::UnrecognizedType`].

use chrono::{DateTime, Utc};

use crate::error::ParamError;
use crate::types::{DefaultValue, TypeDef, TypeDescriptor};

/// Resolves the default value for a registry type definition.
pub fn resolve(def: &TypeDef) -> Result<DefaultValue, ParamError> {
    default_for(&def.ty).ok_or_else(|| unrecognized(def))
}

/// Resolves the default value for a bare type tag.
pub fn resolve_descriptor(ty: &TypeDescriptor) -> Result<DefaultValue, ParamError> {
    default_for(ty).ok_or_else(|| unrecognized(&TypeDef::plain(ty.clone())))
}

/// Resolves the default value for a type given by its wire name.
pub fn resolve_type_name(name: &str) -> Result<DefaultValue, ParamError> {
    resolve(&TypeDef::plain(name))
}

fn default_for(ty: &TypeDescriptor) -> Option<DefaultValue> {
    use TypeDescriptor as T;

    let value = match ty {
        T::Balance => DefaultValue::BigInt(1),

        T::AccountIndex
        | T::BlockNumber
        | T::Index
        | T::ParachainId
        | T::PropIndex
        | T::ReferendumIndex
        | T::SessionKey
        | T::U32
        | T::U64
        | T::U128
        | T::VoteIndex => DefaultValue::BigInt(0),

        T::Bool => DefaultValue::Boolean(false),
        T::Text => DefaultValue::String(String::new()),
        T::Timestamp => DefaultValue::Timestamp(DateTime::<Utc>::UNIX_EPOCH),
        T::VoteThreshold => DefaultValue::Integer(0),

        T::AccountId
        | T::Bytes
        | T::Call
        | T::CandidateReceipt
        | T::Code
        | T::Digest
        | T::Hash
        | T::Header
        | T::KeyValue
        | T::StorageKeyValue
        | T::MisbehaviorReport
        | T::Proposal
        | T::Signature => DefaultValue::Absent,

        T::Other(_) => return None,
    };
    tracing::trace!(ty = %ty, default = %value, "resolved parameter default");
    Some(value)
}

fn unrecognized(def: &TypeDef) -> ParamError {
    let descriptor = match serde_json::to_string(def) {
        Ok(json) => json,
        Err(_) => def.ty.to_string(),
    };
    tracing::warn!(%descriptor, "no default for parameter type");
    ParamError::UnrecognizedType { descriptor }
}

/// A parameter's raw input value and whether it can be submitted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParam {
    pub is_valid: bool,
    pub value: DefaultValue,
}

impl RawParam {
    fn seeded(value: DefaultValue) -> Self {
        Self {
            is_valid: !value.is_absent(),
            value,
        }
    }
}

/// Seeds the raw values for every parameter of a call, in order.
///
/// Fails on the first parameter whose type has no known default.
pub fn init_params(params: &[TypeDef]) -> Result<Vec<RawParam>, ParamError> {
    let raw = params
        .iter()
        .map(|def| resolve(def).map(RawParam::seeded))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = raw.len(), "initialised call parameters");
    Ok(raw)
}
