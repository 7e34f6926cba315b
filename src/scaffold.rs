//! Scaffolding the next day's solution module.
//!
//! The new module is rendered from a template and registered in the solutions registry below its
//! `IMPORT SUBMODULES HERE` and `MATCH SOLUTIONS HERE` markers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

const DAY_TEMPLATE: &str = include_str!("templates/day.rs.tmpl");
const IMPORT_MARKER: &str = "// --- IMPORT SUBMODULES HERE ---";
const MATCH_MARKER: &str = "// --- MATCH SOLUTIONS HERE ---";
const LAST_DAY: u8 = 25;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("i/o failure at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("solutions registry is missing the marker {0:?}")]
    MissingMarker(&'static str),

    #[error("day {0} already exists")]
    AlreadyExists(u8),

    #[error("no puzzle days left after day {LAST_DAY}")]
    NoDaysLeft,
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ScaffoldError + '_ {
    move |source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// The day after the highest `dayNN.rs` found in `dir`, or day 1 in an empty directory.
///
/// # Errors
///
/// If the directory cannot be read, or every day already exists.
pub fn next_day(dir: &Path) -> Result<u8, ScaffoldError> {
    let day_file = Regex::new(r"^day(\d{2})\.rs$").expect("pattern should be valid");
    let mut last_day = 0;
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        let file_name = entry.file_name();
        let Some(captures) = file_name.to_str().and_then(|name| day_file.captures(name)) else {
            continue;
        };
        if let Ok(day) = captures[1].parse::<u8>() {
            last_day = last_day.max(day);
        }
    }
    tracing::debug!(last_day, dir = %dir.display(), "found last day");

    if last_day >= LAST_DAY {
        Err(ScaffoldError::NoDaysLeft)
    } else {
        Ok(last_day + 1)
    }
}

/// Render the module template for a day.
#[must_use]
pub fn render_day(day: u8) -> String {
    DAY_TEMPLATE
        .replace("{{day02}}", &format!("{day:02}"))
        .replace("{{day}}", &day.to_string())
}

/// Insert `line` after the marker and the run of lines directly below it that belong to the
/// same block, using the marker's indentation.
fn insert_after_block(
    source: &str,
    marker: &'static str,
    line: &str,
    in_block: impl Fn(&str) -> bool,
) -> Result<String, ScaffoldError> {
    let lines: Vec<&str> = source.lines().collect();
    let marker_index = lines
        .iter()
        .position(|l| l.trim() == marker)
        .ok_or(ScaffoldError::MissingMarker(marker))?;
    let indent: String = lines[marker_index]
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect();

    let mut insert_at = marker_index + 1;
    while insert_at < lines.len() && in_block(lines[insert_at].trim()) {
        insert_at += 1;
    }

    let new_line = format!("{indent}{line}");
    let mut patched: Vec<&str> = lines;
    patched.insert(insert_at, &new_line);
    let mut output = patched.join("\n");
    if source.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Register a day's module and `run_day` match arm in the registry source.
///
/// # Errors
///
/// [`ScaffoldError::MissingMarker`] if either marker is absent.
pub fn register_day(registry: &str, day: u8) -> Result<String, ScaffoldError> {
    let with_module = insert_after_block(registry, IMPORT_MARKER, &format!("mod day{day:02};"), |l| {
        l.starts_with("mod day")
    })?;
    insert_after_block(
        &with_module,
        MATCH_MARKER,
        &format!("{day} => AdventOfCode2025::<{day}>::run(input, reporter, timed),"),
        |l| l.starts_with(|c: char| c.is_ascii_digit()),
    )
}

/// Create the next day's module in `dir` and register it in the `registry` file.
///
/// Returns the path of the created module.
///
/// # Errors
///
/// If the day already exists, no days are left, a marker is missing, or on any i/o failure.
pub fn new_day(dir: &Path, registry: &Path) -> Result<PathBuf, ScaffoldError> {
    let day = next_day(dir)?;
    let module_path = dir.join(format!("day{day:02}.rs"));
    if module_path.exists() {
        return Err(ScaffoldError::AlreadyExists(day));
    }

    let registry_source = fs::read_to_string(registry).map_err(io_error(registry))?;
    let patched = register_day(&registry_source, day)?;

    fs::write(&module_path, render_day(day)).map_err(io_error(&module_path))?;
    fs::write(registry, patched).map_err(io_error(registry))?;
    tracing::info!(day, path = %module_path.display(), "created new day");

    Ok(module_path)
}
