//! Content metadata form values and their validation rules.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{FieldError, ParamError};

/// Length limits applied when validating metadata values.
///
/// Every limit is optional; the default imposes none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationLimits {
    pub min_name_len: Option<usize>,
    pub max_name_len: Option<usize>,
    pub min_desc_len: Option<usize>,
    pub max_desc_len: Option<usize>,
    pub max_thumb_len: Option<usize>,
    pub max_keywords_len: Option<usize>,
}

impl ValidationLimits {
    /// Creates limits that accept any length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum and maximum name length.
    pub fn name_len(mut self, min: usize, max: usize) -> Self {
        self.min_name_len = Some(min);
        self.max_name_len = Some(max);
        self
    }

    /// Sets the minimum and maximum description length.
    pub fn description_len(mut self, min: usize, max: usize) -> Self {
        self.min_desc_len = Some(min);
        self.max_desc_len = Some(max);
        self
    }

    /// Sets the maximum thumbnail URL length.
    pub fn max_thumbnail_len(mut self, max: usize) -> Self {
        self.max_thumb_len = Some(max);
        self
    }

    /// Sets the maximum keywords length.
    pub fn max_keywords_len(mut self, max: usize) -> Self {
        self.max_keywords_len = Some(max);
        self
    }
}

/// Values edited in the content metadata form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataValues {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    /// Comma-separated keywords.
    pub keywords: String,
}

impl MetadataValues {
    /// Initial values for a freshly uploaded file: the name is the file name.
    pub fn for_file(file_name: impl Into<String>) -> Self {
        Self {
            name: file_name.into(),
            ..Self::default()
        }
    }

    /// Checks every field, reporting all failures together.
    pub fn validate(&self, limits: &ValidationLimits) -> Result<(), ParamError> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else {
            check_len(
                &mut errors,
                "name",
                "Name is",
                &self.name,
                limits.min_name_len,
                limits.max_name_len,
            );
        }

        if !self.description.is_empty() {
            check_len(
                &mut errors,
                "description",
                "Description is",
                &self.description,
                limits.min_desc_len,
                limits.max_desc_len,
            );
        }

        if self.thumbnail.is_empty() {
            errors.push(FieldError::new("thumbnail", "Thumbnail is required"));
        } else if !is_valid_url(&self.thumbnail) {
            errors.push(FieldError::new(
                "thumbnail",
                "Thumbnail must be a valid URL of an image.",
            ));
        } else {
            check_len(
                &mut errors,
                "thumbnail",
                "Thumbnail is",
                &self.thumbnail,
                None,
                limits.max_thumb_len,
            );
        }

        check_len(
            &mut errors,
            "keywords",
            "Keywords are",
            &self.keywords,
            None,
            limits.max_keywords_len,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(failures = errors.len(), "metadata validation failed");
            Err(ParamError::Validation(errors))
        }
    }

    /// Serializes the values as the JSON text stored on chain.
    pub fn to_json(&self) -> Result<String, ParamError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn check_len(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    subject: &str,
    value: &str,
    min: Option<usize>,
    max: Option<usize>,
) {
    let len = value.chars().count();
    if let Some(min) = min
        && len < min
    {
        errors.push(FieldError::new(
            field,
            format!("{subject} too short. Minimum length is {min} chars."),
        ));
    }
    if let Some(max) = max
        && len > max
    {
        errors.push(FieldError::new(
            field,
            format!("{subject} too long. Maximum length is {max} chars."),
        ));
    }
}

fn is_valid_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https" | "ftp")
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> MetadataValues {
        MetadataValues {
            name: "Sintel".to_string(),
            description: "An open movie".to_string(),
            thumbnail: "https://example.com/sintel.png".to_string(),
            keywords: "blender,movie".to_string(),
        }
    }

    #[test]
    fn for_file_seeds_name_only() {
        let v = MetadataValues::for_file("clip.mp4");
        assert_eq!(v.name, "clip.mp4");
        assert!(v.description.is_empty());
        assert!(v.thumbnail.is_empty());
        assert!(v.keywords.is_empty());
    }

    #[test]
    fn valid_values_pass() {
        assert!(valid().validate(&ValidationLimits::default()).is_ok());
    }

    #[test]
    fn description_and_keywords_are_optional() {
        let v = MetadataValues {
            description: String::new(),
            keywords: String::new(),
            ..valid()
        };
        assert!(v.validate(&ValidationLimits::default()).is_ok());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let err = MetadataValues::default()
            .validate(&ValidationLimits::default())
            .unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[
                FieldError::new("name", "Name is required"),
                FieldError::new("thumbnail", "Thumbnail is required"),
            ]
        );
    }

    #[test]
    fn thumbnail_must_be_a_url() {
        for bad in ["not a url", "image.png", "mailto:me@example.com", "file:///tmp/a.png"] {
            let v = MetadataValues {
                thumbnail: bad.to_string(),
                ..valid()
            };
            let err = v.validate(&ValidationLimits::default()).unwrap_err();
            assert_eq!(
                err.field_errors(),
                &[FieldError::new(
                    "thumbnail",
                    "Thumbnail must be a valid URL of an image."
                )],
                "{bad}"
            );
        }
    }

    #[test]
    fn limits_are_enforced_in_chars() {
        let limits = ValidationLimits::new()
            .name_len(3, 5)
            .description_len(1, 4)
            .max_keywords_len(3);
        let v = MetadataValues {
            name: "ab".to_string(),
            description: "éééé".to_string(),
            keywords: "a,b,c".to_string(),
            ..valid()
        };
        let err = v.validate(&limits).unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[
                FieldError::new("name", "Name is too short. Minimum length is 3 chars."),
                FieldError::new(
                    "keywords",
                    "Keywords are too long. Maximum length is 3 chars."
                ),
            ]
        );
    }

    #[test]
    fn empty_description_skips_minimum_length() {
        // An empty optional description is accepted even with a minimum set;
        // only a non-empty one is held to the limit.
        let limits = ValidationLimits::new().description_len(5, 100);
        let empty = MetadataValues {
            description: String::new(),
            ..valid()
        };
        assert!(empty.validate(&limits).is_ok());

        let short = MetadataValues {
            description: "abc".to_string(),
            ..valid()
        };
        assert_eq!(
            short.validate(&limits).unwrap_err().field_errors(),
            &[FieldError::new(
                "description",
                "Description is too short. Minimum length is 5 chars."
            )]
        );
    }

    #[test]
    fn long_thumbnail_rejected() {
        let limits = ValidationLimits::new().max_thumbnail_len(10);
        let err = valid().validate(&limits).unwrap_err();
        assert_eq!(err.field_errors()[0].field, "thumbnail");
    }

    #[test]
    fn json_has_form_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&valid().to_json().unwrap()).unwrap();
        assert_eq!(json["name"], "Sintel");
        assert_eq!(json["description"], "An open movie");
        assert_eq!(json["thumbnail"], "https://example.com/sintel.png");
        assert_eq!(json["keywords"], "blender,movie");
    }
}
