//! Type tags and type definitions as handed out by the chain type registry.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A tag naming a declared parameter's wire type.
///
/// The registry can produce tags outside the recognized set; those parse to
/// [`TypeDescriptor::Other`] rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeDescriptor {
    // Unsigned widths
    U32,
    U64,
    U128,
    // Scalars
    Bool,
    Text,
    Timestamp,
    Balance,
    VoteThreshold,
    // Counters and indices
    AccountIndex,
    BlockNumber,
    Index,
    ParachainId,
    PropIndex,
    ReferendumIndex,
    SessionKey,
    VoteIndex,
    // Opaque and structured
    AccountId,
    Bytes,
    Call,
    CandidateReceipt,
    Code,
    Digest,
    Hash,
    Header,
    KeyValue,
    MisbehaviorReport,
    Proposal,
    Signature,
    StorageKeyValue,
    /// A tag this crate has no mapping for.
    Other(UnknownTag),
}

/// Name of a registry tag outside the recognized set.
///
/// Only built by parsing, so a recognized name never ends up here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownTag(String);

impl UnknownTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TypeDescriptor {
    /// Returns the wire name of this tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Bool => "bool",
            Self::Text => "String",
            Self::Timestamp => "Timestamp",
            Self::Balance => "Balance",
            Self::VoteThreshold => "VoteThreshold",
            Self::AccountIndex => "AccountIndex",
            Self::BlockNumber => "BlockNumber",
            Self::Index => "Index",
            Self::ParachainId => "ParachainId",
            Self::PropIndex => "PropIndex",
            Self::ReferendumIndex => "ReferendumIndex",
            Self::SessionKey => "SessionKey",
            Self::VoteIndex => "VoteIndex",
            Self::AccountId => "AccountId",
            Self::Bytes => "Bytes",
            Self::Call => "Call",
            Self::CandidateReceipt => "CandidateReceipt",
            Self::Code => "Code",
            Self::Digest => "Digest",
            Self::Hash => "Hash",
            Self::Header => "Header",
            Self::KeyValue => "KeyValue",
            Self::MisbehaviorReport => "MisbehaviorReport",
            Self::Proposal => "Proposal",
            Self::Signature => "Signature",
            Self::StorageKeyValue => "StorageKeyValue",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Returns `true` unless this is an [`Other`](Self::Other) tag.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for TypeDescriptor {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "u32" => Self::U32,
            "u64" => Self::U64,
            "u128" => Self::U128,
            "bool" => Self::Bool,
            "String" => Self::Text,
            "Timestamp" => Self::Timestamp,
            "Balance" => Self::Balance,
            "VoteThreshold" => Self::VoteThreshold,
            "AccountIndex" => Self::AccountIndex,
            "BlockNumber" => Self::BlockNumber,
            "Index" => Self::Index,
            "ParachainId" => Self::ParachainId,
            "PropIndex" => Self::PropIndex,
            "ReferendumIndex" => Self::ReferendumIndex,
            "SessionKey" => Self::SessionKey,
            "VoteIndex" => Self::VoteIndex,
            "AccountId" => Self::AccountId,
            "Bytes" => Self::Bytes,
            "Call" => Self::Call,
            "CandidateReceipt" => Self::CandidateReceipt,
            "Code" => Self::Code,
            "Digest" => Self::Digest,
            "Hash" => Self::Hash,
            "Header" => Self::Header,
            "KeyValue" => Self::KeyValue,
            "MisbehaviorReport" => Self::MisbehaviorReport,
            "Proposal" => Self::Proposal,
            "Signature" => Self::Signature,
            "StorageKeyValue" => Self::StorageKeyValue,
            other => Self::Other(UnknownTag(other.to_owned())),
        })
    }
}

impl From<&str> for TypeDescriptor {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(descriptor) => descriptor,
            Err(never) => match never {},
        }
    }
}

impl From<String> for TypeDescriptor {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<TypeDescriptor> for String {
    fn from(d: TypeDescriptor) -> Self {
        match d {
            TypeDescriptor::Other(tag) => tag.0,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a registry type around its tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDefInfo {
    #[default]
    Plain,
    Compact,
    Option,
    Tuple,
    Vec,
}

/// A parameter type definition from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    #[serde(default)]
    pub info: TypeDefInfo,
    /// Declared parameter or field name, when the registry supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Nested definition(s) for Compact, Option, Vec and Tuple shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<TypeDefSub>,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl TypeDef {
    /// Creates a plain, unnamed definition for `ty`.
    pub fn plain(ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            info: TypeDefInfo::Plain,
            name: None,
            sub: None,
            ty: ty.into(),
        }
    }

    /// Attaches a parameter name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the shape info.
    pub fn with_info(mut self, info: TypeDefInfo) -> Self {
        self.info = info;
        self
    }

    /// Sets the nested definition(s).
    pub fn with_sub(mut self, sub: impl Into<TypeDefSub>) -> Self {
        self.sub = Some(sub.into());
        self
    }
}

/// Nested definitions of a wrapped type: one for Compact/Option/Vec, many
/// for Tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeDefSub {
    Single(Box<TypeDef>),
    Many(Vec<TypeDef>),
}

impl From<TypeDef> for TypeDefSub {
    fn from(def: TypeDef) -> Self {
        Self::Single(Box::new(def))
    }
}

impl From<Vec<TypeDef>> for TypeDefSub {
    fn from(defs: Vec<TypeDef>) -> Self {
        Self::Many(defs)
    }
}

impl From<TypeDescriptor> for TypeDef {
    fn from(ty: TypeDescriptor) -> Self {
        Self::plain(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tags() {
        assert_eq!(TypeDescriptor::from("u64"), TypeDescriptor::U64);
        assert_eq!(TypeDescriptor::from("String"), TypeDescriptor::Text);
        assert_eq!(TypeDescriptor::from("bool"), TypeDescriptor::Bool);
        assert_eq!(
            TypeDescriptor::from("StorageKeyValue"),
            TypeDescriptor::StorageKeyValue
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        // Registry names are exact; "Bool" and "string" are not the primitives.
        assert!(matches!(
            TypeDescriptor::from("Bool"),
            TypeDescriptor::Other(ref tag) if tag.as_str() == "Bool"
        ));
        assert!(!TypeDescriptor::from("string").is_recognized());
    }

    #[test]
    fn wire_name_survives_parse() {
        for name in ["u32", "Balance", "VoteThreshold", "Signature", "Foo"] {
            assert_eq!(TypeDescriptor::from(name).as_str(), name);
        }
    }

    #[test]
    fn type_def_serializes_like_the_registry() {
        let def = TypeDef::plain("Foo");
        assert_eq!(
            serde_json::to_string(&def).unwrap(),
            r#"{"info":"Plain","type":"Foo"}"#
        );

        let named = TypeDef::plain(TypeDescriptor::Balance)
            .named("value")
            .with_info(TypeDefInfo::Compact);
        assert_eq!(
            serde_json::to_string(&named).unwrap(),
            r#"{"info":"Compact","name":"value","type":"Balance"}"#
        );
    }

    #[test]
    fn recognized_names_never_parse_to_other() {
        for name in ["u32", "u64", "u128", "bool", "String", "Balance", "Hash"] {
            assert!(TypeDescriptor::from(name).is_recognized(), "{name}");
        }
    }

    #[test]
    fn json_round_trip_is_exact() {
        for name in ["u64", "Balance", "StorageKeyValue", "Foo", "Vec<u8>"] {
            let ty = TypeDescriptor::from(name);
            let json = serde_json::to_string(&ty).unwrap();
            let back: TypeDescriptor = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty, "{name}");
        }
    }

    #[test]
    fn sub_definitions_serialize_nested() {
        let vec = TypeDef::plain("Vec<Foo>")
            .with_info(TypeDefInfo::Vec)
            .with_sub(TypeDef::plain("Foo"));
        assert_eq!(
            serde_json::to_string(&vec).unwrap(),
            r#"{"info":"Vec","sub":{"info":"Plain","type":"Foo"},"type":"Vec<Foo>"}"#
        );

        let tuple = TypeDef::plain("(u32, Foo)")
            .with_info(TypeDefInfo::Tuple)
            .with_sub(vec![TypeDef::plain("u32"), TypeDef::plain("Foo")]);
        let json = serde_json::to_string(&tuple).unwrap();
        let back: TypeDef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuple);
    }

    #[test]
    fn type_def_deserializes_without_info() {
        let def: TypeDef = serde_json::from_str(r#"{"type":"Hash"}"#).unwrap();
        assert_eq!(def, TypeDef::plain(TypeDescriptor::Hash));
    }
}
