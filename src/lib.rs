//! Scatter plot of protein measurements grouped by KEGG pathway.
//!
//! The data layer ([`data`]) and the render model ([`state`]) are free of any
//! window system; the desktop renderer lives in the binary.

pub mod color;
pub mod data;
pub mod state;
