//! medipost: turn meditation transcripts into short social posts with
//! generated artwork.
//!
//! The library is split the hexagonal way: `domain` holds the parsing,
//! selection, and composition logic; `ports` declares one trait per external
//! collaborator (LLM CLIs, transcript fetch, shortener, clipboard, file
//! manager, JSON state store); `adapters` implements them; `app` wires the
//! interactive workflows behind the CLI.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::AppContext;
pub use domain::AppError;
