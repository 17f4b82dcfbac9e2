//! UI Widgets - modular, reusable UI components

pub mod grid;
