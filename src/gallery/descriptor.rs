// SPDX-License-Identifier: MPL-2.0
//! Image descriptors as delivered by the gallery service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw EXIF tags keyed by their service-side name (e.g. `"EXIF LensModel"`).
pub type ExifInfo = BTreeMap<String, Value>;

/// One photo in the remote catalog.
///
/// Descriptors are kept exactly as received; `file_name` is the unique key
/// used for previews, downloads and selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub file_name: String,
    #[serde(default)]
    pub exif_info: ExifInfo,
}

impl ImageDescriptor {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            exif_info: ExifInfo::new(),
        }
    }

    /// Adds one EXIF tag; handy when building fixtures.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>, value: impl Into<Value>) -> Self {
        self.exif_info.insert(tag.into(), value.into());
        self
    }
}

/// Body of `GET /images`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub images: Vec<ImageDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_payload_verbatim() {
        let body = r#"{
            "images": [
                {
                    "file_name": "DSC_0001.jpg",
                    "exif_info": {
                        "EXIF LensModel": "NIKKOR Z 24-70mm f/4 S",
                        "EXIF ExifImageWidth": 6048,
                        "Image Tag 0xC6FE": null
                    }
                },
                { "file_name": "DSC_0002.jpg", "exif_info": {} }
            ]
        }"#;

        let catalog: CatalogResponse = serde_json::from_str(body).expect("valid payload");
        assert_eq!(catalog.images.len(), 2);
        let first = &catalog.images[0];
        assert_eq!(first.file_name, "DSC_0001.jpg");
        assert_eq!(
            first.exif_info.get("EXIF ExifImageWidth"),
            Some(&Value::from(6048))
        );
        assert_eq!(first.exif_info.get("Image Tag 0xC6FE"), Some(&Value::Null));
        assert!(catalog.images[1].exif_info.is_empty());
    }

    #[test]
    fn missing_exif_info_defaults_to_empty() {
        let descriptor: ImageDescriptor =
            serde_json::from_str(r#"{ "file_name": "a.png" }"#).expect("valid descriptor");
        assert_eq!(descriptor, ImageDescriptor::new("a.png"));
    }

    #[test]
    fn missing_file_name_is_rejected() {
        let result = serde_json::from_str::<ImageDescriptor>(r#"{ "exif_info": {} }"#);
        assert!(result.is_err());
    }
}
