//! Command-line interface for gigline
//! This binary stands in for the surrounding scraper pipeline: it reads a
//! dump of pre-classified text nodes and prints the grouped schedule.
//!
//! Usage:
//!   gigline group `<path>` [--format `<format>`]  - Group a node dump into a schedule
//!   gigline parse-line `<text>`                 - Parse a single event line
//!
//! The node-dump format is one node per line, tab-separated: an `H` tag
//! for a date header node or a `B` tag for an event body node, then the
//! node text. This is the shape the markup-selection layer hands over.

use clap::{Arg, Command};

use gigline::{group_events, parse_event, Node, Schedule};

fn main() {
    let matches = Command::new("gigline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing free-text event listings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("group")
                .about("Group a classified node dump into a per-date schedule")
                .arg(
                    Arg::new("path")
                        .help("Path to the node dump file (H/B tab-separated lines)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("parse-line")
                .about("Parse a single event line and print the record")
                .arg(
                    Arg::new("text")
                        .help("The event line to parse")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("group", group_matches)) => {
            let path = group_matches.get_one::<String>("path").unwrap();
            let format = group_matches.get_one::<String>("format").unwrap();
            handle_group_command(path, format);
        }
        Some(("parse-line", parse_matches)) => {
            let text = parse_matches.get_one::<String>("text").unwrap();
            handle_parse_line_command(text);
        }
        _ => unreachable!(),
    }
}

/// Handle the group command
fn handle_group_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let nodes = read_node_dump(&source).unwrap_or_else(|e| {
        eprintln!("Error in node dump: {}", e);
        std::process::exit(1);
    });

    let schedule = group_events(&nodes);
    match format {
        "text" => print_schedule(&schedule),
        "json" => {
            let json = serde_json::to_string_pretty(&schedule).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Unknown format '{}', expected 'text' or 'json'", other);
            std::process::exit(1);
        }
    }
}

/// Handle the parse-line command
fn handle_parse_line_command(text: &str) {
    match parse_event(text) {
        Some(record) => println!("{:#?}", record),
        None => {
            eprintln!("Line did not match the event grammar");
            std::process::exit(1);
        }
    }
}

/// Parse the node-dump format: one `H<TAB>text` or `B<TAB>text` node per
/// line. Blank lines are skipped; any other tag is an error.
fn read_node_dump(source: &str) -> Result<Vec<Node>, String> {
    let mut nodes = Vec::new();
    for (lineno, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (tag, text) = line
            .split_once('\t')
            .ok_or_else(|| format!("line {}: missing tab after node tag", lineno + 1))?;
        match tag {
            "H" => nodes.push(Node::header(text)),
            "B" => nodes.push(Node::body(text)),
            other => {
                return Err(format!(
                    "line {}: unknown node tag {:?}, expected 'H' or 'B'",
                    lineno + 1,
                    other
                ))
            }
        }
    }
    Ok(nodes)
}

fn print_schedule(schedule: &Schedule) {
    for (date, events) in schedule.iter() {
        println!("{}", date);
        for event in events {
            println!(
                "  {} | {} | {} | {}",
                event.performers, event.time, event.price, event.location
            );
        }
    }
}
