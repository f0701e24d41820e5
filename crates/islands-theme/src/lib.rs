#![forbid(unsafe_code)]

//! Theme generation for the Monokai Islands IDE themes.
//!
//! # Role in the workspace
//! `islands-theme` turns palettes (role name → color) into theme documents
//! and checks palettes against WCAG thresholds. All inputs are explicit
//! values: catalogs of derived colors and UI bindings are passed in rather
//! than read from module-level tables, so several variants can be generated
//! in one process without interfering with each other.
//!
//! # This crate provides
//! - [`Palette`] loading and serialization.
//! - [`LightConversion`] for deriving a light palette from a dark one.
//! - [`build_color_table`] and [`assemble_ui_tree`], the two halves of a
//!   [`ThemeDocument`].
//! - [`validate_palette`] for contrast checks.

pub mod binding;
pub mod catalog;
pub mod convert;
pub mod document;
pub mod error;
pub mod palette;
pub mod table;
pub mod tree;
pub mod validate;
pub mod variant;

pub use binding::{BindingValue, FlatTable, UiBindings, resolve_bindings};
pub use catalog::ThemeCatalog;
pub use convert::{LightConversion, convert_palette_to_light};
pub use document::{ThemeDocument, generate_theme};
pub use error::{Result, ThemeError};
pub use palette::Palette;
pub use table::{ColorTable, DerivedColor, DerivedColors, build_color_table};
pub use tree::{PropertyNode, PropertyTree, assemble_ui_tree};
pub use validate::{
    ContrastRequirement, ValidationReport, Violation, default_requirements, validate_palette,
};
pub use variant::{ThemeMetadata, ThemeVariant};
