use std::path::{Path, PathBuf};

use bgpkit_updates::encoder::export_entries_to_file;
use bgpkit_updates::{build_tables, open_mrt_file, JsonEntryReader, UpdateTables, UpdatesError};
use clap::Parser;
use log::info;

/// bgpkit-updates builds time-indexed announcement and withdrawal tables from a MRT updates file
/// and walks them in chronological order.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    /// File path to a MRT file, local or remote.
    #[clap(name = "FILE")]
    file_path: PathBuf,

    /// Read FILE as JSON exported with --json-out instead of MRT
    #[clap(long)]
    from_json: bool,

    /// Export the decoded entries of FILE to this JSON file
    #[clap(short, long)]
    json_out: Option<PathBuf>,

    /// Only report the totals, do not walk the batches
    #[clap(short, long)]
    summary_only: bool,
}

fn build(file_path: &str, from_json: bool) -> Result<UpdateTables, UpdatesError> {
    match from_json {
        true => build_tables(JsonEntryReader::open(file_path)?),
        false => build_tables(open_mrt_file(file_path)?),
    }
}

fn export(file_path: &str, from_json: bool, json_out: &Path) -> Result<usize, UpdatesError> {
    // a second, independent pass over the input
    match from_json {
        true => export_entries_to_file(JsonEntryReader::open(file_path)?, json_out),
        false => export_entries_to_file(open_mrt_file(file_path)?, json_out),
    }
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let file_path = opts.file_path.to_string_lossy().to_string();

    let tables = match build(file_path.as_str(), opts.from_json) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    if let Some(json_out) = &opts.json_out {
        if let Err(err) = export(file_path.as_str(), opts.from_json, json_out) {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }

    let time_range = [
        tables.announcements.time_range(),
        tables.withdrawals.time_range(),
    ]
    .into_iter()
    .flatten()
    .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1)));
    if let Some((first, last)) = time_range {
        info!("Updates span from {} to {}", first, last);
    }

    if opts.summary_only {
        return;
    }

    for batch in tables.updates() {
        match batch.timestamp {
            Some(ts) => info!(
                "At timestamp: {} | {} announcements | {} withdrawals",
                ts,
                batch.announcements.len(),
                batch.withdrawals.len()
            ),
            None => {
                info!("No more updates to process in file: {}", file_path);
                break;
            }
        }
    }
}
