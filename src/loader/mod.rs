//! Source file loading
//!
//! Every source is a text file of `left|right` records, one per line:
//! - link maps (`id|display name`) name the people and the works;
//! - the membership map (`work id|person id`) lists who appeared in what.
//!
//! A malformed line is logged and skipped; it never aborts the load.
//! Only failing to open or read a file is fatal.

pub mod builder;

pub use builder::{build_graph, load_graph};

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Short id -> display name
pub type LinkMap = BTreeMap<String, String>;

/// Work id -> ids of the people who appeared in it
pub type MembershipMap = BTreeMap<String, BTreeSet<String>>;

/// Loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be opened or read
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line that is not exactly two non-empty `|`-separated fields
    #[error("Malformed record at line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Counters from scanning one source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub accepted: usize,
    pub skipped: usize,
}

/// Split one line into its two fields. `line` is 1-based and only used for the error.
pub fn parse_record(line: usize, content: &str) -> LoadResult<(&str, &str)> {
    let mut pieces = content.split('|');
    match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(left), Some(right), None) => {
            let (left, right) = (left.trim(), right.trim());
            if left.is_empty() || right.is_empty() {
                Err(LoadError::MalformedRecord {
                    line,
                    content: content.to_string(),
                })
            } else {
                Ok((left, right))
            }
        }
        _ => Err(LoadError::MalformedRecord {
            line,
            content: content.to_string(),
        }),
    }
}

/// Feed every well-formed record of `reader` to `accept`
fn scan_records<R, F>(reader: R, source: &str, mut accept: F) -> io::Result<LoadReport>
where
    R: BufRead,
    F: FnMut(&str, &str),
{
    let mut report = LoadReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.trim_end_matches('\r');
        if content.trim().is_empty() {
            continue;
        }

        match parse_record(idx + 1, content) {
            Ok((left, right)) => {
                accept(left, right);
                report.accepted += 1;
            }
            Err(e) => {
                warn!("{}: skipping record: {}", source, e);
                report.skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} records from {} ({} skipped)",
        report.accepted, source, report.skipped
    );
    Ok(report)
}

/// Read `id|name` records. A repeated id keeps its last name.
pub fn read_link_map<R: BufRead>(reader: R, source: &str) -> io::Result<LinkMap> {
    let mut links = LinkMap::new();
    scan_records(reader, source, |id, name| {
        if let Some(previous) = links.insert(id.to_string(), name.to_string()) {
            debug!("{}: id {} renamed from {:?} to {:?}", source, id, previous, name);
        }
    })?;
    Ok(links)
}

/// Read `work id|person id` records, grouping people by work
pub fn read_membership_map<R: BufRead>(reader: R, source: &str) -> io::Result<MembershipMap> {
    let mut members = MembershipMap::new();
    scan_records(reader, source, |work, person| {
        members
            .entry(work.to_string())
            .or_default()
            .insert(person.to_string());
    })?;
    Ok(members)
}

fn open(path: &Path) -> LoadResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

pub fn load_link_map(path: &Path) -> LoadResult<LinkMap> {
    let reader = open(path)?;
    read_link_map(reader, &path.display().to_string()).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_membership_map(path: &Path) -> LoadResult<MembershipMap> {
    let reader = open(path)?;
    read_membership_map(reader, &path.display().to_string()).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
