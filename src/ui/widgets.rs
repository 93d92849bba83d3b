//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI
//! patterns. They should not contain any business logic or depend on
//! `crate::app` directly.

mod toast;

pub use toast::{Toast, ToastStyle, view_toast};
