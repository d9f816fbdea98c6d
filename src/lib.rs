//! # gigline
//!
//! A parser for free-text event listings.
//!
//! Web pages for small venues often publish their calendar as loosely
//! formatted text: a human-readable date header followed by lines like
//! `"Band Name. 7:30PM, $15 @ Venue"`. This crate parses those lines into
//! structured records and groups them under their governing date.
//!
//! The crate is organized bottom-up:
//! - [`matcher`]: composable text-matching primitives and combinators.
//! - [`event`]: the event-line grammar, producing [`EventRecord`]s.
//! - [`date`]: the `"Weekday, Month Day, Year"` header grammar.
//! - [`assemble`]: groups parsed events per date into a [`Schedule`].
//!
//! Fetching pages, selecting text nodes out of the markup, and presenting
//! results are left to callers; the core consumes plain text nodes already
//! classified as header or body and is pure and thread-safe throughout.

pub mod assemble;
pub mod date;
pub mod event;
pub mod matcher;

pub use assemble::{group_events, Node, NodeKind, Schedule};
pub use date::{parse_date, DateError};
pub use event::{parse_event, EventRecord};
