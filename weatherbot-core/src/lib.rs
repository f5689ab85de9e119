//! Core library for the `weatherbot` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The conversation state machine (city prompt → disambiguation → report)
//! - Geocoding and current-weather lookups against Open-Meteo
//! - Plain-text report formatting
//!
//! It is used by `weatherbot-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod conversation;
pub mod farewell;
pub mod model;
pub mod provider;
pub mod report;

pub use config::Config;
pub use conversation::{CheckAnother, Conversation, Step, SubmitError, Turn};
pub use farewell::{FarewellGenerator, StaticFarewell};
pub use model::{Location, LocationCandidate, WeatherSnapshot};
pub use provider::open_meteo::OpenMeteoClient;
pub use provider::{GeocodeError, GeocodeOutcome, Geocoder, WeatherError, WeatherSource};
