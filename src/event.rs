//! Event-line grammar.
//!
//! Parses one free-text listing line of the shape
//! `PERFORMERS. TIME, PRICE @ LOCATION` (with ` - ` accepted as an
//! alternative performers/time separator) into an [`EventRecord`].
//!
//! The grammar, applied left to right:
//! 1. Scan for the first `". "` or `" - "` immediately followed by a time
//!    token; the skipped prefix is the performers field.
//! 2. Consume that separator.
//! 3. Time token: digits, optional `:` + digits, mandatory `AM`/`PM`;
//!    optionally repeated once after `-` to form a range.
//! 4. Consume `", "`.
//! 5. Price token: `$` then `FREE` or digits; optionally repeated once
//!    after `-` to form a range.
//! 6. Consume `" @ "`.
//! 7. The rest of the line is the location.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::matcher::{
    alternation, any, digit, literal, one_or_more, optional, scan_until, sequence, Matcher,
};

/// One parsed event listing. All fields are opaque trimmed substrings of
/// the original line; no further structural decomposition is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Free text naming the act(s), everything before the time separator.
    pub performers: String,
    /// Time of day, possibly a range such as `9AM-12PM`.
    pub time: String,
    /// Price, numeric (`$15`), ranged (`$10-$20`), or the literal `$FREE`.
    pub price: String,
    /// Venue, the remainder of the line.
    pub location: String,
}

/// Compiled matchers for the event-line grammar, built once and shared.
struct EventGrammar {
    /// Scan target: a separator immediately followed by a time token.
    separator_at_time: Matcher,
    separator: Matcher,
    time: Matcher,
    field_sep: Matcher,
    price: Matcher,
    venue_sep: Matcher,
    location: Matcher,
}

static GRAMMAR: Lazy<EventGrammar> = Lazy::new(|| {
    let separator = alternation(vec![literal(". "), literal(" - ")]);
    EventGrammar {
        separator_at_time: sequence(vec![separator.clone(), time_token()]),
        separator,
        time: ranged(time_token()),
        field_sep: literal(", "),
        price: ranged(price_token()),
        venue_sep: literal(" @ "),
        location: any(),
    }
});

/// `H[:MM](AM|PM)`: one or more digits, optional colon and minutes, then a
/// mandatory meridiem literal.
fn time_token() -> Matcher {
    sequence(vec![
        one_or_more(digit()),
        optional(sequence(vec![literal(":"), one_or_more(digit())])),
        alternation(vec![literal("AM"), literal("PM")]),
    ])
}

/// `$FREE` or `$` followed by one or more digits.
fn price_token() -> Matcher {
    sequence(vec![
        literal("$"),
        alternation(vec![literal("FREE"), one_or_more(digit())]),
    ])
}

/// A token optionally repeated once more after a literal `-`, so ranges
/// like `9AM-12PM` and `$10-$20` come through as a single field.
fn ranged(token: Matcher) -> Matcher {
    sequence(vec![
        token.clone(),
        optional(sequence(vec![literal("-"), token])),
    ])
}

/// Parse one free-text event line into an [`EventRecord`].
///
/// Leading and trailing whitespace is trimmed first. Returns `None` for a
/// blank line and for any line that does not match the full grammar;
/// callers are expected to skip such lines silently.
///
/// Known limitation: the performers field is delimited by scanning for the
/// first `". "` or `" - "` followed by something that parses as a time
/// token. A performer name that itself contains such a substring (for
/// example `"DJ Set - 9PM Warmup"`) makes the scan stop early and the line
/// parse incorrectly or not at all.
pub fn parse_event(line: &str) -> Option<EventRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let g = &*GRAMMAR;

    let (performers, rest) = scan_until(&g.separator_at_time, line).ok()?;
    let (_, rest) = g.separator.apply(rest).ok()?;
    let (time, rest) = g.time.apply(rest).ok()?;
    let (_, rest) = g.field_sep.apply(rest).ok()?;
    let (price, rest) = g.price.apply(rest).ok()?;
    let (_, rest) = g.venue_sep.apply(rest).ok()?;
    let (location, rest) = g.location.apply(rest).ok()?;
    if !rest.is_empty() {
        return None;
    }

    Some(EventRecord {
        performers: performers.trim().to_string(),
        time: time.trim().to_string(),
        price: price.trim().to_string(),
        location: location.trim().to_string(),
    })
}
