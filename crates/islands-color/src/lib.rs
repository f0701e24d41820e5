#![forbid(unsafe_code)]

//! Color primitives for Monokai Islands theme tooling.
//!
//! # Role in the workspace
//! `islands-color` is the arithmetic layer underneath palette derivation,
//! theme assembly and contrast validation. It has no I/O and no global
//! state: every function is a pure transform over [`Color`] values or unit
//! RGB/HLS triples.
//!
//! # This crate provides
//! - [`Color`], a 24-bit or 32-bit RGB(A) value with a canonical lowercase
//!   `#rrggbb` / `#rrggbbaa` text form.
//! - Hex conversions ([`hex_to_rgb`], [`rgb_to_hex`]).
//! - HLS conversions compatible with the classic `colorsys` formulas
//!   ([`rgb_to_hls`], [`hls_to_rgb`]).
//! - Channel adjustments ([`Color::lighten`], [`Color::darken`],
//!   [`Color::adjust_hls`], [`Color::with_hls_lightness`],
//!   [`Color::with_alpha`]).
//! - WCAG 2.1 luminance and contrast utilities.

/// WCAG relative luminance and contrast ratio.
pub mod contrast;
/// Error type shared by the parsing entry points.
pub mod error;
/// The [`Color`] value type and hex conversions.
pub mod hex;
/// HLS color space conversions.
pub mod hls;

mod adjust;

pub use contrast::{
    WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT, contrast_ratio, relative_luminance,
    relative_luminance_rgb,
};
pub use error::{ColorError, Result};
pub use hex::{Color, hex_to_rgb, rgb_to_hex};
pub use hls::{Hls, hls_to_rgb, rgb_to_hls};
