//! Shared library for the Kids Classic Books Lex skill.
//!
//! This crate provides the Lex dialog contract, the canned message catalog,
//! configuration, error types, and the Goodreads metadata client used by the
//! skill's Lambda function.

pub mod config;
pub mod dialog;
pub mod error;
pub mod goodreads;
pub mod messages;

pub use config::Config;
pub use dialog::{DialogAction, DialogResponse, FulfillmentState, LexEvent, Message};
pub use error::{Error, Result};
pub use goodreads::{BookMetadata, GoodreadsClient, MetadataDecodeError};
