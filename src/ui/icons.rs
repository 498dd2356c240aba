// SPDX-License-Identifier: MPL-2.0
//! SVG icons embedded at compile time.
//!
//! Handles are created once on first access and cloned afterwards. Arrow
//! icons are monochrome and tinted through the `svg` style so they follow
//! the active theme.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// Defines a function returning an [`Svg`] backed by a cached handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/", $path));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(logo, "branding/logo.svg", "Application logo shown in the top bar.");
define_icon!(
    down_arrow,
    "icons/down_arrow.svg",
    "Chevron pointing down: collapses the filmstrip."
);
define_icon!(
    up_arrow,
    "icons/up_arrow.svg",
    "Chevron pointing up: expands the filmstrip."
);
define_icon!(
    right_arrow,
    "icons/right_arrow.svg",
    "Chevron pointing right, shown before the selected file name."
);
define_icon!(
    image_placeholder,
    "icons/image_placeholder.svg",
    "Framed landscape shown while a preview is not available."
);

/// Resizes an icon to a square of `size` pixels.
#[must_use]
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints a monochrome icon with the theme text color.
#[must_use]
pub fn themed(icon: Svg<'_>) -> Svg<'_> {
    icon.style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(theme.palette().text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load() {
        let _ = logo();
        let _ = down_arrow();
        let _ = up_arrow();
        let _ = right_arrow();
        let _ = image_placeholder();
    }

    #[test]
    fn handles_are_cached() {
        let _ = logo();
        let _ = logo();
    }

    #[test]
    fn sized_helper_works() {
        let _ = sized(up_arrow(), 24.0);
        let _ = themed(down_arrow());
    }
}
