//! UI module for the shield scan application
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Geometry** (`geometry`): Pure math behind the widget
//! - **Artwork** (`artwork`): The fixed vector silhouettes
//! - **Animation** (`animation`): Loop phases and eased pulse values
//! - **Primitives** (`primitives`): Low-level `canvas::Program` implementations
//! - **Widgets** (`widgets`): Composable UI patterns without business logic

pub mod animation;
pub mod artwork;
pub mod geometry;
pub mod primitives;
pub mod theme;
pub mod widgets;
