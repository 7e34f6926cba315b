#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_support::PartKind;
use aoc_support::runner::Reporter;
use clap::{ArgAction, Parser, Subcommand};

use crate::site::{SiteClient, SubmitOutcome};

mod checked_math;
mod logger;
mod scaffold;
mod screenshot;
mod site;
mod solutions;

/// Advent of Code 2025 puzzle solver.
#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// File holding the website session cookie, e.g. `session=53616c...`.
    #[arg(long, global = true, env = "AOC_COOKIE_FILE", default_value = ".env")]
    cookie_file: PathBuf,

    /// The puzzle year on the website.
    #[arg(long, global = true, env = "AOC_YEAR", default_value_t = 2025)]
    year: u16,

    /// Log debug details to stderr.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a day's solution.
    Run {
        /// The day's solution to run (e.g. 1, 2, etc).
        day: u8,

        /// Sets an alternative input file to use over default input.
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Measure and print the durations of parsing and solving parts.
        #[arg(short, long, action = ArgAction::SetTrue)]
        timed: bool,

        /// Minimum duration (in milliseconds) required to print timing.
        /// 0 = always print.
        #[arg(long, value_name = "NUMBER", default_value_t)]
        min_timing_ms: u64,
    },

    /// Download a day's input into the default input file.
    Download {
        /// The day to download.
        day: u8,
    },

    /// Submit an answer read from stdin.
    Submit {
        /// The day the answer is for.
        day: u8,

        /// The part the answer is for (1 or 2).
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: u8,
    },

    /// Create the next day's solution module from the template.
    NewDay {
        /// Directory holding the `dayNN.rs` modules.
        #[arg(long, default_value = "src/solutions")]
        dir: PathBuf,
    },

    /// Save a cropped screenshot of the year's calendar for the README badge.
    Screenshot {
        /// Where to write the PNG.
        #[arg(short, long, default_value = "screenshots/aoc-screenshot.png")]
        output: PathBuf,

        /// CSS selector of the page element to capture.
        #[arg(long, default_value = screenshot::DEFAULT_SELECTOR)]
        selector: String,
    },
}

/// The default input file of a day.
fn default_input_path(day: u8) -> PathBuf {
    PathBuf::from("inputs").join(format!("day{day:02}.txt"))
}

/// Read the default input file for a day to a string.
fn get_default_input(day: u8) -> Result<String> {
    let path = default_input_path(day);

    fs::read_to_string(&path).with_context(|| {
        format!(
            "default input file missing: {}\n\n\
            please download it or provide the input file argument",
            path.display()
        )
    })
}

/// Read the given input file to a string.
fn get_input(input_file: &Path) -> Result<String> {
    fs::read_to_string(input_file)
        .with_context(|| format!("could not read input file at: {}", input_file.display()))
}

struct CliReporter {
    /// A minimum duration to filter any outputs of duration by.
    min_duration: Duration,
}

impl CliReporter {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    fn format_duration(duration: Duration) -> String {
        const ONE_SECOND: Duration = Duration::from_secs(1);
        const ONE_MILLISECOND: Duration = Duration::from_millis(1);
        const ONE_MICROSECOND: Duration = Duration::from_micros(1);
        const DECIMAL_PLACES: usize = 3;

        if duration >= ONE_SECOND {
            format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f32())
        } else {
            let nanos = duration.subsec_nanos();
            if duration >= ONE_MILLISECOND {
                format!("{:.*} milliseconds", DECIMAL_PLACES, f64::from(nanos) / 1e6)
            } else if duration >= ONE_MICROSECOND {
                format!("{:.*} microseconds", DECIMAL_PLACES, f64::from(nanos) / 1e3)
            } else {
                format!("{nanos} nanoseconds")
            }
        }
    }

    fn format_duration_above_min(&self, duration: Option<Duration>) -> Option<String> {
        duration
            .filter(|d| *d >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl Reporter for CliReporter {
    fn puzzle_title(&mut self, title: &str) {
        println!("= {title} =");
    }

    fn parse_start(&mut self) {
        tracing::debug!("parsing input");
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(formatted_duration) = self.format_duration_above_min(duration_opt) {
            println!("Input parsed in {formatted_duration}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_answer(&mut self, _part: PartKind, answer: &dyn Display, duration_opt: Option<Duration>) {
        if let Some(formatted_duration) = self.format_duration_above_min(duration_opt) {
            println!("{answer} ({formatted_duration})");
        } else {
            println!("{answer}");
        }
    }
}

fn run(day: u8, input: Option<&Path>, timed: bool, min_timing_ms: u64) -> Result<()> {
    let input_str = input.map_or_else(|| get_default_input(day), get_input)?;
    let mut reporter = CliReporter::new(Duration::from_millis(min_timing_ms));
    solutions::run_day(day, &input_str, &mut reporter, timed).map_err(|dyn_error| {
        let anyhow_error = Error::from_boxed(dyn_error);
        anyhow_error.context("failed to run solution")
    })
}

/// The lines shown after downloading, so a wrong input is noticed early.
fn input_preview(input: &str) -> String {
    const PREVIEW_LINES: usize = 10;
    const PREVIEW_CHARS: usize = 80;

    let lines: Vec<&str> = input.lines().collect();
    let mut preview = if lines.len() > PREVIEW_LINES {
        lines[..PREVIEW_LINES].join("\n")
    } else {
        lines
            .first()
            .map(|line| line.chars().take(PREVIEW_CHARS).collect())
            .unwrap_or_default()
    };
    preview.push_str("\n...");
    preview
}

fn download(client: &SiteClient, year: u16, day: u8) -> Result<()> {
    let input = client.fetch_input(year, day)?;
    let path = default_input_path(day);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create directory: {}", parent.display()))?;
    }
    fs::write(&path, &input)
        .with_context(|| format!("could not write input file: {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = input.len(), "saved input");

    println!("{}", input_preview(&input));
    Ok(())
}

fn submit(client: &SiteClient, year: u16, day: u8, part: u8) -> Result<ExitCode> {
    let mut answer_str = String::new();
    std::io::stdin()
        .read_to_string(&mut answer_str)
        .context("could not read answer from stdin")?;
    let answer: u64 = answer_str
        .trim()
        .parse()
        .with_context(|| format!("answer is not an integer: {:?}", answer_str.trim()))?;

    println!("answer: {answer}");
    let outcome = client.submit_answer(year, day, part, answer)?;
    match &outcome {
        SubmitOutcome::Right(message) => println!("\x1b[42m{message}\x1b[m"),
        SubmitOutcome::Wrong(message)
        | SubmitOutcome::TooQuick(message)
        | SubmitOutcome::AlreadyDone(message) => println!("\x1b[41m{message}\x1b[m"),
        SubmitOutcome::Unexpected(body) => println!("{body}"),
    }

    Ok(if outcome.is_right() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    logger::init_cli_logger(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    match args.command {
        Command::Run {
            day,
            input,
            timed,
            min_timing_ms,
        } => run(day, input.as_deref(), timed, min_timing_ms).map(|()| ExitCode::SUCCESS),
        Command::Download { day } => {
            let client = SiteClient::from_cookie_file(&args.cookie_file)?;
            download(&client, args.year, day).map(|()| ExitCode::SUCCESS)
        }
        Command::Submit { day, part } => {
            let client = SiteClient::from_cookie_file(&args.cookie_file)?;
            submit(&client, args.year, day, part)
        }
        Command::NewDay { dir } => {
            let created = scaffold::new_day(&dir, Path::new("src/solutions.rs"))?;
            println!("Created {}", created.display());
            Ok(ExitCode::SUCCESS)
        }
        Command::Screenshot { output, selector } => {
            let cookie = site::read_cookie(&args.cookie_file)?;
            screenshot::take_screenshot(args.year, &cookie, &selector, &output)?;
            println!("Saved {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_shows_first_ten_lines_of_long_input() {
        let input: String = (1..=12).map(|n| format!("{n}\n")).collect();
        let preview = input_preview(&input);
        assert_eq!(preview, "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n...");
    }

    #[test]
    fn preview_truncates_single_line() {
        let input = "x".repeat(100);
        let preview = input_preview(&input);
        assert_eq!(preview, format!("{}\n...", "x".repeat(80)));
    }

    #[test]
    fn durations_pick_readable_units() {
        assert_eq!(
            CliReporter::format_duration(Duration::from_millis(1500)),
            "1.500 seconds"
        );
        assert_eq!(
            CliReporter::format_duration(Duration::from_micros(2500)),
            "2.500 milliseconds"
        );
        assert_eq!(
            CliReporter::format_duration(Duration::from_nanos(42)),
            "42 nanoseconds"
        );
    }

    #[test]
    fn cli_parses_run_command() {
        let cli = Cli::try_parse_from(["aoc-2025", "run", "7", "--timed"]).unwrap();
        assert!(matches!(cli.command, Command::Run { day: 7, timed: true, .. }));
        assert_eq!(cli.year, 2025);
    }

    #[test]
    fn cli_parses_screenshot_defaults() {
        let cli = Cli::try_parse_from(["aoc-2025", "screenshot", "--year", "2024"]).unwrap();
        let Command::Screenshot { output, selector } = cli.command else {
            panic!("expected the screenshot command");
        };
        assert_eq!(output, Path::new("screenshots/aoc-screenshot.png"));
        assert_eq!(selector, "body > main > pre");
        assert_eq!(cli.year, 2024);
    }

    #[test]
    fn cli_rejects_part_three() {
        assert!(Cli::try_parse_from(["aoc-2025", "submit", "1", "--part", "3"]).is_err());
    }
}
