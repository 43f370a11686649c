//! Command dispatch for the pharos binary. Returns process exit codes so
//! main stays a one-liner and tests can drive the compiled binary.

use std::env;
use std::path::Path;

use crate::data::export::export_all;
use crate::data::loader::{
    load_essay_content, load_lighthouse_stats, load_lighthouses, load_resources,
    search_lighthouses, StderrSink, DEFAULT_DATA_DIR,
};
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Validate,
    Export,
    Search,
    Stats,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("validate") => Some(Command::Validate),
        Some("export") => Some(Command::Export),
        Some("search") => Some(Command::Search),
        Some("stats") => Some(Command::Stats),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Validate) => handle_validate(),
        Some(Command::Export) => handle_export(),
        Some(Command::Search) => handle_search(args),
        Some(Command::Stats) => handle_stats(),
        None => {
            eprintln!("usage: pharos <serve|validate|export|search|stats>");
            2
        }
    }
}

fn data_dir() -> &'static Path {
    Path::new(DEFAULT_DATA_DIR)
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("PHAROS_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

/// Same checks as the validate_data bin: the full dataset must read, parse
/// and pass entity validation.
fn handle_validate() -> i32 {
    match crate::data::verify_dataset(data_dir()) {
        Ok(report) => {
            println!("{report}");
            if report.passed() {
                0
            } else {
                1
            }
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

fn handle_export() -> i32 {
    let sink = StderrSink;
    let export = load_lighthouses(data_dir(), &sink)
        .and_then(|lighthouses| {
            let resources = load_resources(data_dir(), &sink)?;
            let essay = load_essay_content(data_dir(), &sink)?;
            let stats = load_lighthouse_stats(data_dir(), &sink)?;
            Ok(export_all(lighthouses, resources, essay, stats))
        });

    let export = match export {
        Ok(export) => export,
        Err(err) => {
            eprintln!("export failed: {err}");
            return 1;
        }
    };

    match serde_json::to_string_pretty(&export) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize export: {err}");
            1
        }
    }
}

fn handle_search(args: &[String]) -> i32 {
    let Some(query) = args.get(2) else {
        eprintln!("usage: pharos search <query>");
        return 2;
    };

    match search_lighthouses(data_dir(), query, &StderrSink) {
        Ok(matches) => match serde_json::to_string_pretty(&matches) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize matches: {err}");
                1
            }
        },
        Err(err) => {
            eprintln!("search failed: {err}");
            1
        }
    }
}

fn handle_stats() -> i32 {
    match load_lighthouse_stats(data_dir(), &StderrSink) {
        Ok(stats) => match serde_json::to_string_pretty(&stats) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize stats: {err}");
                1
            }
        },
        Err(err) => {
            eprintln!("stats failed: {err}");
            1
        }
    }
}
