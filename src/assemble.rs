//! Assembler: groups parsed event lines under their governing date header.
//!
//! The markup layer upstream hands over an ordered sequence of plain text
//! nodes, each already classified as a date header or an event body line.
//! This module walks that sequence, pairing each run of header nodes with
//! the run of body nodes that follows it, and builds an insertion-ordered
//! schedule keyed by calendar date. Unparseable lines and undated groups
//! are skipped; nothing here aborts the document scan.

use chrono::NaiveDate;
use serde::Serialize;

use crate::date::parse_date;
use crate::event::{parse_event, EventRecord};

/// External classification of a text node, decided by the markup layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A date-bearing line such as `"Monday, January 6, 2025"`.
    Header,
    /// A free-text event description line.
    Body,
}

/// One classified text node in document order.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub text: String,
}

impl Node {
    pub fn header(text: impl Into<String>) -> Self {
        Node {
            kind: NodeKind::Header,
            text: text.into(),
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Node {
            kind: NodeKind::Body,
            text: text.into(),
        }
    }
}

/// Events for one calendar date, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEvents {
    pub date: NaiveDate,
    pub events: Vec<EventRecord>,
}

/// An insertion-ordered mapping from calendar date to the events listed
/// under it. Dates appear in the order their headers appear in the
/// document; a date whose header recurs later in the document keeps its
/// original position and the later group's events are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    days: Vec<DayEvents>,
}

impl Schedule {
    pub fn new() -> Self {
        Schedule::default()
    }

    /// Append events under `date`, merging into an existing entry if the
    /// date is already present.
    pub fn add(&mut self, date: NaiveDate, events: Vec<EventRecord>) {
        match self.days.iter_mut().find(|day| day.date == date) {
            Some(day) => day.events.extend(events),
            None => self.days.push(DayEvents { date, events }),
        }
    }

    /// Events for `date`, if any group resolved to it.
    pub fn get(&self, date: NaiveDate) -> Option<&[EventRecord]> {
        self.days
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.events.as_slice())
    }

    /// Iterate `(date, events)` in document order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[EventRecord])> {
        self.days.iter().map(|day| (day.date, day.events.as_slice()))
    }

    /// Number of distinct dates in the schedule.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Group classified text nodes into a per-date schedule.
///
/// The sequence is partitioned into maximal runs of same-kind nodes; each
/// header run is paired with the body run that follows it. Only the first
/// node of a header run is parsed as a date. A pair whose header is blank
/// or fails to parse is dropped whole, as are body nodes that do not match
/// the event grammar. Body runs before the first header have no governing
/// date and are dropped.
pub fn group_events(nodes: &[Node]) -> Schedule {
    let mut schedule = Schedule::new();
    let runs = partition_runs(nodes);

    let mut i = 0;
    while i < runs.len() {
        let run = runs[i];
        i += 1;
        if run[0].kind != NodeKind::Header {
            continue;
        }
        let header = &run[0].text;

        // Runs alternate in kind, so the run after a header run is the
        // body run for this group, unless the document ends first.
        let body: &[Node] = if i < runs.len() && runs[i][0].kind == NodeKind::Body {
            let body = runs[i];
            i += 1;
            body
        } else {
            &[]
        };

        // A blank header means the group has no date; a header that does
        // not parse drops its group the same way.
        let date = match parse_date(header) {
            Ok(Some(date)) => date,
            Ok(None) | Err(_) => continue,
        };

        let events: Vec<EventRecord> = body
            .iter()
            .filter_map(|node| parse_event(&node.text))
            .collect();
        schedule.add(date, events);
    }

    schedule
}

/// Split the node sequence into maximal runs of consecutive nodes sharing
/// the same classification. A run boundary occurs exactly where the
/// classification changes.
fn partition_runs(nodes: &[Node]) -> Vec<&[Node]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..nodes.len() {
        if nodes[i].kind != nodes[start].kind {
            runs.push(&nodes[start..i]);
            start = i;
        }
    }
    if start < nodes.len() {
        runs.push(&nodes[start..]);
    }
    runs
}
