//! Client for the Straddle payments API.
//!
//! Every model keeps the JSON it was built from: fields the crate does not
//! know about survive a round trip, and an explicit `null` stays distinct from
//! an absent key. Enum values the crate does not know are kept as strings.

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{ClientConfig, Environment};
pub use crate::core::{RequestOptions, StraddleClient};
pub use domain::enums::{ApiEnum, KnownEnum};
pub use domain::models;
pub use domain::ports::{ApiRequest, ApiResponse, Transport};
pub use domain::raw::{FieldState, RawFields, RawModel, ToRaw};
pub use utils::error::{ErrorCategory, Result, StraddleError};
pub use utils::validation::Validate;
