// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each
//! component takes a `ViewContext` borrowing the application state and
//! emits its own messages, which the application maps.
//!
//! # Components
//!
//! - [`topbar`] - Logo and welcome text
//! - [`stage`] - Photo count and main preview
//! - [`filmstrip`] - Info strip, layout toggle and thumbnails
//! - [`detail_panel`] - EXIF details and download button
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`widgets`] - Custom widgets (loading spinner)
//! - [`icons`] - Embedded SVG icons
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod detail_panel;
pub mod filmstrip;
pub mod icons;
pub mod stage;
pub mod styles;
pub mod theming;
pub mod topbar;
pub mod widgets;
