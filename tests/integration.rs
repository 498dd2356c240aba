// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::config::{self, Config, DEFAULT_BASE_URL};
use iced_gallery::app::i18n::fluent::I18n;
use iced_gallery::gallery::{self, exif, CatalogResponse, Effect};
use tempfile::tempdir;

/// Catalog as the service sends it, with vendor-specific tag names.
const CATALOG_JSON: &str = r#"{
  "images": [
    {
      "file_name": "DSC_0001.NEF",
      "exif_info": {
        "EXIF LensModel": "NIKKOR Z 24-70mm f/4 S",
        "MakerNote FocusMode": "AF-S",
        "Image DateTime": "2023:06:14 18:22:01",
        "MakerNote ISOInfo": "ISO 400",
        "EXIF ISOSpeedRatings": 400,
        "EXIF ApertureValue": "4",
        "Image ImageWidth": 6048,
        "Image ImageLength": 4024,
        "EXIF WhiteBalance": "Auto",
        "EXIF Flash": "Flash did not fire",
        "Image Copyright": "Jane Doe",
        "Image Make": "NIKON CORPORATION",
        "Image Model": "NIKON Z 6"
      }
    },
    {
      "file_name": "IMG_0002.CR2",
      "exif_info": {
        "MakerNote LensType": "EF50mm f/1.8 STM",
        "MakerNote DateTimeOriginal": "2022:12:24 09:00:00",
        "MakerNote LensMinMaxFocalMaxAperture": "1.8",
        "EXIF ExifImageWidth": 5472,
        "EXIF ExifImageLength": 3648,
        "Image Tag 0xC6FE": "John Roe",
        "Image Make": "Canon",
        "Image Model": ""
      }
    },
    { "file_name": "scan.png" }
  ]
}"#;

fn loaded_gallery() -> gallery::State {
    let catalog: CatalogResponse = serde_json::from_str(CATALOG_JSON).expect("valid catalog");
    let mut state = gallery::State::default();
    state.update(gallery::Message::CatalogLoaded(Ok(catalog.images)));
    state
}

fn field_value(state: &gallery::State, field: &exif::DetailField) -> Option<String> {
    exif::resolve_all(state.selected())
        .into_iter()
        .find(|(candidate, _)| candidate.label_key == field.label_key)
        .and_then(|(_, value)| value)
}

#[test]
fn language_follows_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("detail-not-available"), "Non disponible");

    // CLI wins over config.
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.tr("detail-not-available"), "Not Available");
}

#[test]
fn broken_settings_file_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[service\nbase_url = 3")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(loaded.base_url(), DEFAULT_BASE_URL);
    assert_eq!(warning.as_deref(), Some("warning-config-load"));
}

#[test]
fn every_detail_label_is_translated() {
    let config = Config::default();
    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), &config);
        for field in exif::DETAIL_FIELDS {
            let label = i18n.tr(field.label_key);
            assert!(!label.starts_with("MISSING"), "{locale}: {label}");
        }
    }
}

#[test]
fn first_image_details_use_primary_tags() {
    let state = loaded_gallery();
    assert!(state.is_selected("DSC_0001.NEF"));

    assert_eq!(
        field_value(&state, &exif::LENS).as_deref(),
        Some("NIKKOR Z 24-70mm f/4 S")
    );
    assert_eq!(
        field_value(&state, &exif::CAPTURE_TIME).as_deref(),
        Some("2023:06:14 18:22:01")
    );
    assert_eq!(field_value(&state, &exif::SPEED_RATING).as_deref(), Some("400"));
    assert_eq!(
        field_value(&state, &exif::IMAGE_SIZE).as_deref(),
        Some("6048x4024")
    );
    assert_eq!(
        field_value(&state, &exif::CAMERA).as_deref(),
        Some("NIKON CORPORATION NIKON Z 6")
    );
}

#[test]
fn selecting_another_image_uses_fallback_tags() {
    let mut state = loaded_gallery();
    let effect = state.update(gallery::Message::Select("IMG_0002.CR2".to_string()));
    assert_eq!(
        effect,
        Effect::Selected {
            index: 1,
            scroll_into_view: true
        }
    );

    assert_eq!(
        field_value(&state, &exif::LENS).as_deref(),
        Some("EF50mm f/1.8 STM")
    );
    assert_eq!(
        field_value(&state, &exif::CAPTURE_TIME).as_deref(),
        Some("2022:12:24 09:00:00")
    );
    assert_eq!(field_value(&state, &exif::APERTURE).as_deref(), Some("1.8"));
    assert_eq!(
        field_value(&state, &exif::IMAGE_SIZE).as_deref(),
        Some("5472x3648")
    );
    assert_eq!(
        field_value(&state, &exif::COPYRIGHT).as_deref(),
        Some("John Roe")
    );
    // An empty model counts as missing.
    assert_eq!(field_value(&state, &exif::CAMERA), None);
}

#[test]
fn image_without_exif_shows_only_its_file_name() {
    let mut state = loaded_gallery();
    state.update(gallery::Message::Select("scan.png".to_string()));

    for (field, value) in exif::resolve_all(state.selected()) {
        if field.label_key == exif::FILE_NAME.label_key {
            assert_eq!(value.as_deref(), Some("scan.png"));
        } else {
            assert_eq!(value, None, "{} should be unavailable", field.label_key);
        }
    }
}

#[test]
fn collapsed_layout_selects_without_scrolling() {
    let mut state = loaded_gallery();
    state.update(gallery::Message::ToggleLayout);

    let effect = state.update(gallery::Message::Select("scan.png".to_string()));

    assert_eq!(
        effect,
        Effect::Selected {
            index: 2,
            scroll_into_view: false
        }
    );
    assert_eq!(state.displayed_count(), 2);
}
