// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at runtime from the embedded logo SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

const LOGO_SVG: &[u8] = include_bytes!("../assets/branding/logo.svg");
const ICON_SIZE: u32 = 128;

/// Renders the logo to a square RGBA icon.
///
/// Returns `None` (and the platform default icon is used) if the SVG cannot
/// be parsed or rendered.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = render_logo(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE)
        .map_err(|err| log::warn!("Invalid window icon: {err}"))
        .ok()
}

/// Rasterizes the logo into a `size` x `size` RGBA buffer.
fn render_logo(size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(LOGO_SVG, &usvg::Options::default())
        .map_err(|err| log::warn!("Unable to parse window icon: {err}"))
        .ok()?;

    #[allow(clippy::cast_precision_loss)]
    let target = size as f32;
    let source = tree.size();
    let transform =
        tiny_skia::Transform::from_scale(target / source.width(), target / source.height());

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_renders_to_square_buffer() {
        let rgba = render_logo(32).expect("logo should render");
        assert_eq!(rgba.len(), 32 * 32 * 4);
        assert!(rgba.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn window_icon_is_available() {
        assert!(load_window_icon().is_some());
    }
}
