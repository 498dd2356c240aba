// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: catalog, selection, layout and loading state.
//!
//! The controller is synchronous. [`State::update`] applies a [`Message`]
//! and returns an [`Effect`] describing the side effect the application has
//! to run (scrolling the filmstrip, fetching previews, downloading a file).
//! Rendering only reads the state.

pub mod descriptor;
pub mod exif;
pub mod preview_cache;

pub use descriptor::{CatalogResponse, ExifInfo, ImageDescriptor};
pub use preview_cache::{PreviewCache, PreviewEntry};

use crate::error::Error;

/// Messages handled by the gallery controller.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the one-time catalog fetch.
    CatalogLoaded(Result<Vec<ImageDescriptor>, Error>),
    /// A thumbnail was clicked.
    Select(String),
    /// The filmstrip expand/collapse control was clicked.
    ToggleLayout,
    /// The download button was clicked.
    Download,
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The catalog arrived; previews around `around` are worth fetching.
    Prefetch { around: usize },
    /// The selection moved to `index`. `scroll_into_view` is set when the
    /// filmstrip is visible and should bring the thumbnail into view.
    Selected { index: usize, scroll_into_view: bool },
    /// Fetch the binary content of `file_name` and save it under that name.
    Download { file_name: String },
}

/// Complete gallery state.
///
/// `selected` is an index into `images`, so a selection always refers to a
/// descriptor received from the service.
#[derive(Debug, Clone)]
pub struct State {
    images: Vec<ImageDescriptor>,
    selected: Option<usize>,
    layout_expanded: bool,
    loading: bool,
    catalog_received: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(true)
    }
}

impl State {
    /// Empty, loading gallery with the given initial layout.
    #[must_use]
    pub fn new(layout_expanded: bool) -> Self {
        Self {
            images: Vec::new(),
            selected: None,
            layout_expanded,
            loading: true,
            catalog_received: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::CatalogLoaded(result) => self.apply_catalog(result),
            Message::Select(file_name) => self.select(&file_name),
            Message::ToggleLayout => {
                self.layout_expanded = !self.layout_expanded;
                Effect::None
            }
            Message::Download => match self.selected() {
                Some(descriptor) => Effect::Download {
                    file_name: descriptor.file_name.clone(),
                },
                None => Effect::None,
            },
        }
    }

    fn apply_catalog(&mut self, result: Result<Vec<ImageDescriptor>, Error>) -> Effect {
        if self.catalog_received {
            log::debug!("Ignoring catalog result received after the first one");
            return Effect::None;
        }
        self.catalog_received = true;
        self.loading = false;

        match result {
            Ok(images) => {
                log::info!("Loaded catalog with {} images", images.len());
                self.images = images;
                self.selected = if self.images.is_empty() { None } else { Some(0) };
                match self.selected {
                    Some(index) => Effect::Prefetch { around: index },
                    None => Effect::None,
                }
            }
            Err(err) => {
                log::error!("Error fetching images: {err}");
                Effect::None
            }
        }
    }

    fn select(&mut self, file_name: &str) -> Effect {
        let Some(index) = self.index_of(file_name) else {
            log::debug!("Ignoring selection of unknown image {file_name}");
            return Effect::None;
        };
        self.selected = Some(index);
        Effect::Selected {
            index,
            scroll_into_view: self.layout_expanded,
        }
    }

    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ImageDescriptor> {
        self.selected.and_then(|index| self.images.get(index))
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, file_name: &str) -> bool {
        self.selected()
            .is_some_and(|descriptor| descriptor.file_name == file_name)
    }

    #[must_use]
    pub fn index_of(&self, file_name: &str) -> Option<usize> {
        self.images
            .iter()
            .position(|descriptor| descriptor.file_name == file_name)
    }

    #[must_use]
    pub fn layout_expanded(&self) -> bool {
        self.layout_expanded
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number shown in the "Showing N photos" label.
    ///
    /// The label has always displayed one less than the catalog size, so an
    /// empty catalog shows `-1`.
    #[must_use]
    pub fn displayed_count(&self) -> i64 {
        i64::try_from(self.images.len()).unwrap_or(i64::MAX) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;

    fn catalog(names: &[&str]) -> Vec<ImageDescriptor> {
        names.iter().map(|name| ImageDescriptor::new(*name)).collect()
    }

    fn loaded(names: &[&str]) -> State {
        let mut state = State::default();
        state.update(Message::CatalogLoaded(Ok(catalog(names))));
        state
    }

    #[test]
    fn starts_empty_and_loading() {
        let state = State::default();
        assert!(state.is_loading());
        assert!(state.images().is_empty());
        assert!(state.selected().is_none());
        assert!(state.layout_expanded());
    }

    #[test]
    fn catalog_selects_first_image_and_stops_loading() {
        let mut state = State::default();
        let effect = state.update(Message::CatalogLoaded(Ok(catalog(&["a", "b", "c"]))));

        assert_eq!(effect, Effect::Prefetch { around: 0 });
        assert!(!state.is_loading());
        assert_eq!(state.images().len(), 3);
        assert_eq!(state.selected().map(|d| d.file_name.as_str()), Some("a"));
        assert_eq!(state.displayed_count(), 2);
    }

    #[test]
    fn empty_catalog_leaves_selection_unset() {
        let state = loaded(&[]);
        assert!(!state.is_loading());
        assert!(state.selected().is_none());
        assert_eq!(state.displayed_count(), -1);
    }

    #[test]
    fn failed_catalog_stops_loading_with_empty_state() {
        let mut state = State::default();
        let effect = state.update(Message::CatalogLoaded(Err(Error::Http(
            HttpError::Status(500),
        ))));

        assert_eq!(effect, Effect::None);
        assert!(!state.is_loading());
        assert!(state.images().is_empty());
        assert!(state.selected().is_none());
    }

    #[test]
    fn catalog_is_populated_only_once() {
        let mut state = loaded(&["a"]);
        let effect = state.update(Message::CatalogLoaded(Ok(catalog(&["x", "y"]))));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.images().len(), 1);
    }

    #[test]
    fn selecting_marks_image_and_scrolls_when_expanded() {
        let mut state = loaded(&["a", "b", "c"]);
        let effect = state.update(Message::Select("c".to_string()));

        assert_eq!(
            effect,
            Effect::Selected {
                index: 2,
                scroll_into_view: true
            }
        );
        assert!(state.is_selected("c"));
        assert!(!state.is_selected("a"));
    }

    #[test]
    fn selecting_while_collapsed_does_not_scroll() {
        let mut state = loaded(&["a", "b"]);
        state.update(Message::ToggleLayout);
        let effect = state.update(Message::Select("b".to_string()));
        assert_eq!(
            effect,
            Effect::Selected {
                index: 1,
                scroll_into_view: false
            }
        );
    }

    #[test]
    fn selecting_unknown_name_keeps_selection() {
        let mut state = loaded(&["a", "b"]);
        let effect = state.update(Message::Select("zzz".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(state.is_selected("a"));
    }

    #[test]
    fn toggling_twice_restores_layout() {
        let mut state = loaded(&["a"]);
        let initial = state.layout_expanded();
        state.update(Message::ToggleLayout);
        assert_ne!(state.layout_expanded(), initial);
        state.update(Message::ToggleLayout);
        assert_eq!(state.layout_expanded(), initial);
    }

    #[test]
    fn download_without_selection_is_noop() {
        let mut state = loaded(&[]);
        assert_eq!(state.update(Message::Download), Effect::None);
    }

    #[test]
    fn download_targets_selected_file() {
        let mut state = loaded(&["a.jpg", "b.jpg"]);
        state.update(Message::Select("b.jpg".to_string()));
        assert_eq!(
            state.update(Message::Download),
            Effect::Download {
                file_name: "b.jpg".to_string()
            }
        );
    }

    #[test]
    fn repeated_downloads_are_not_deduplicated() {
        let mut state = loaded(&["a.jpg"]);
        let first = state.update(Message::Download);
        let second = state.update(Message::Download);
        assert_eq!(first, second);
        assert!(matches!(first, Effect::Download { .. }));
    }
}
