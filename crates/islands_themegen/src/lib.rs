#![forbid(unsafe_code)]

pub mod cli;
pub mod convert;
pub mod error;
pub mod generate;
pub mod pipeline;
pub mod util;
pub mod validate;

pub use cli::run_from_env;
pub use error::{Result, ThemegenError};
