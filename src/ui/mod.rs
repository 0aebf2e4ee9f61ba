//! UI components.

pub mod widgets;
