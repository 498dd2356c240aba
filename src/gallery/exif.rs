// SPDX-License-Identifier: MPL-2.0
//! EXIF detail fields shown in the side panel.
//!
//! The service forwards raw tags whose names depend on the camera vendor, so
//! each displayed field lists the tags that may carry it, in priority order.
//! [`DETAIL_FIELDS`] is the complete table; [`first_present`] is the only
//! lookup rule.
//!
//! A tag counts as present when it exists and holds a meaningful value:
//! `null`, `false`, `0` and the empty string are treated as missing.

use super::descriptor::{ExifInfo, ImageDescriptor};
use serde_json::Value;

/// Where a detail field takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// First present tag of the list.
    Chain(&'static [&'static str]),
    /// The descriptor's file name.
    FileName,
    /// `"<width>x<height>"`, each side resolved through its own chain.
    Dimensions {
        width: &'static [&'static str],
        height: &'static [&'static str],
    },
    /// All listed tags joined by `separator`; every tag is required.
    Joined {
        keys: &'static [&'static str],
        separator: &'static str,
    },
}

/// One row of the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailField {
    /// i18n key of the row title.
    pub label_key: &'static str,
    pub source: FieldSource,
}

pub const LENS: DetailField = DetailField {
    label_key: "detail-lens",
    source: FieldSource::Chain(&["EXIF LensModel", "MakerNote LensType"]),
};

pub const LENS_AF: DetailField = DetailField {
    label_key: "detail-lens-af",
    source: FieldSource::Chain(&["MakerNote FocusMode"]),
};

pub const CAPTURE_TIME: DetailField = DetailField {
    label_key: "detail-capture-time",
    source: FieldSource::Chain(&["Image DateTime", "MakerNote DateTimeOriginal"]),
};

pub const ISO: DetailField = DetailField {
    label_key: "detail-iso",
    source: FieldSource::Chain(&["MakerNote ISOInfo"]),
};

pub const SPEED_RATING: DetailField = DetailField {
    label_key: "detail-speed-rating",
    source: FieldSource::Chain(&["EXIF ISOSpeedRatings", "MakerNote ISOInfo"]),
};

pub const APERTURE: DetailField = DetailField {
    label_key: "detail-aperture",
    source: FieldSource::Chain(&[
        "MakerNote LensMinMaxFocalMaxAperture",
        "EXIF ApertureValue",
        "EXIF MaxApertureValue",
        "Image MaxApertureValue",
    ]),
};

pub const FILE_NAME: DetailField = DetailField {
    label_key: "detail-file-name",
    source: FieldSource::FileName,
};

pub const IMAGE_SIZE: DetailField = DetailField {
    label_key: "detail-image-size",
    source: FieldSource::Dimensions {
        width: &["Image ImageWidth", "EXIF ExifImageWidth"],
        height: &["Image ImageLength", "EXIF ExifImageLength"],
    },
};

pub const WHITE_BALANCE: DetailField = DetailField {
    label_key: "detail-white-balance",
    source: FieldSource::Chain(&["EXIF WhiteBalance"]),
};

pub const FLASH: DetailField = DetailField {
    label_key: "detail-flash",
    source: FieldSource::Chain(&["EXIF Flash"]),
};

pub const COPYRIGHT: DetailField = DetailField {
    label_key: "detail-copyright",
    source: FieldSource::Chain(&["Image Copyright", "Image Tag 0xC6FE"]),
};

pub const CAMERA: DetailField = DetailField {
    label_key: "detail-camera",
    source: FieldSource::Joined {
        keys: &["Image Make", "Image Model"],
        separator: " ",
    },
};

/// Rows of the detail panel, top to bottom.
pub const DETAIL_FIELDS: &[DetailField] = &[
    LENS,
    LENS_AF,
    CAPTURE_TIME,
    ISO,
    SPEED_RATING,
    APERTURE,
    FILE_NAME,
    IMAGE_SIZE,
    WHITE_BALANCE,
    FLASH,
    COPYRIGHT,
    CAMERA,
];

impl DetailField {
    /// Resolves the field for a descriptor; `None` means "Not Available".
    #[must_use]
    pub fn resolve(&self, descriptor: &ImageDescriptor) -> Option<String> {
        let exif = &descriptor.exif_info;
        match self.source {
            FieldSource::Chain(keys) => first_present(exif, keys),
            FieldSource::FileName => {
                Some(descriptor.file_name.clone()).filter(|name| !name.is_empty())
            }
            FieldSource::Dimensions { width, height } => {
                let width = first_present(exif, width)?;
                let height = first_present(exif, height)?;
                Some(format!("{width}x{height}"))
            }
            FieldSource::Joined { keys, separator } => {
                let parts = keys
                    .iter()
                    .map(|key| exif.get(*key).filter(|v| is_present(v)).map(display_value))
                    .collect::<Option<Vec<_>>>()?;
                Some(parts.join(separator))
            }
        }
    }
}

/// Returns the display text of the first present tag among `keys`.
#[must_use]
pub fn first_present(exif: &ExifInfo, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| exif.get(*key))
        .find(|value| is_present(value))
        .map(display_value)
}

/// Whether a raw tag value carries information.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text shown for a raw tag value.
///
/// Strings are shown verbatim, arrays as their elements joined by commas,
/// everything else as JSON text.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Resolves every detail row for the current selection.
///
/// Without a selection every row is unavailable.
#[must_use]
pub fn resolve_all(
    descriptor: Option<&ImageDescriptor>,
) -> Vec<(&'static DetailField, Option<String>)> {
    DETAIL_FIELDS
        .iter()
        .map(|field| (field, descriptor.and_then(|d| field.resolve(d))))
        .collect()
}
