//! Authenticated access to the puzzle website: downloading inputs and submitting answers.
//!
//! Requests carry the user's session cookie, read from a local file and sent verbatim as the
//! `Cookie` header.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::thread;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue, InvalidHeaderValue};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Downloads started before the input unlocks are retried.
const FETCH_ATTEMPTS: u32 = 5;
const FETCH_RETRY_DELAY: Duration = Duration::from_secs(1);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("could not read session cookie file: {}", .path.display())]
    CookieFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("session cookie file is empty: {}", .0.display())]
    EmptyCookie(PathBuf),

    #[error("session cookie is not a valid header value")]
    InvalidCookie(#[source] InvalidHeaderValue),

    #[error("could not build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("timed out after {attempts} attempts to download input")]
    TimedOut {
        attempts: u32,
        #[source]
        last_error: reqwest::Error,
    },

    #[error("request to the puzzle website failed")]
    Request(#[from] reqwest::Error),
}

/// The website's verdict on a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Right(String),
    Wrong(String),
    TooQuick(String),
    AlreadyDone(String),
    /// None of the known messages were found; holds the whole response body.
    Unexpected(String),
}

static WRONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"That's not the right answer.*?\.").expect("pattern should be valid")
});
static TOO_QUICK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"You gave an answer too recently.*to wait\.").expect("pattern should be valid")
});
static ALREADY_DONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"You don't seem to be solving.*\?").expect("pattern should be valid")
});
const RIGHT: &str = "That's the right answer!";

impl SubmitOutcome {
    /// Classify a response page. Error messages are looked for before the success message.
    #[must_use]
    pub fn classify(body: &str) -> Self {
        let error_kinds: [(&Regex, fn(String) -> Self); 3] = [
            (&*WRONG, Self::Wrong),
            (&*TOO_QUICK, Self::TooQuick),
            (&*ALREADY_DONE, Self::AlreadyDone),
        ];
        for (regex, outcome) in error_kinds {
            if let Some(found) = regex.find(body) {
                return outcome(found.as_str().to_string());
            }
        }

        if body.contains(RIGHT) {
            Self::Right(RIGHT.to_string())
        } else {
            Self::Unexpected(body.to_string())
        }
    }

    #[must_use]
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }
}

/// Read the session cookie from a file, trimmed of surrounding whitespace.
///
/// # Errors
///
/// [`SiteError::CookieFile`] if the file cannot be read, [`SiteError::EmptyCookie`] if it holds
/// only whitespace.
pub fn read_cookie(path: &Path) -> Result<String, SiteError> {
    let contents = fs::read_to_string(path).map_err(|source| SiteError::CookieFile {
        path: path.to_path_buf(),
        source,
    })?;
    let cookie = contents.trim();
    if cookie.is_empty() {
        return Err(SiteError::EmptyCookie(path.to_path_buf()));
    }
    Ok(cookie.to_string())
}

/// A client for one session on the puzzle website.
pub struct SiteClient {
    base_url: String,
    http: Client,
    retry_delay: Duration,
}

impl SiteClient {
    /// Create a client sending `cookie` (e.g. `session=53616c...`) with each request.
    ///
    /// # Errors
    ///
    /// If the cookie is not a valid header value or the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, cookie: &str) -> Result<Self, SiteError> {
        let mut cookie_value = HeaderValue::from_str(cookie).map_err(SiteError::InvalidCookie)?;
        cookie_value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie_value);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(SiteError::Client)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            retry_delay: FETCH_RETRY_DELAY,
        })
    }

    /// Create a client for the real website, reading the cookie from a file.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or holds no cookie, or for the errors of [`SiteClient::new`].
    pub fn from_cookie_file(path: &Path) -> Result<Self, SiteError> {
        Self::new(DEFAULT_BASE_URL, &read_cookie(path)?)
    }

    /// Change the pause between download attempts.
    #[cfg(test)]
    #[must_use]
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    fn day_url(&self, year: u16, day: u8) -> String {
        format!("{}/{year}/day/{day}", self.base_url)
    }

    fn try_fetch_input(&self, url: &str) -> Result<String, reqwest::Error> {
        self.http.get(url).send()?.error_for_status()?.text()
    }

    /// Download a day's puzzle input.
    ///
    /// # Errors
    ///
    /// [`SiteError::TimedOut`] once every attempt has failed.
    pub fn fetch_input(&self, year: u16, day: u8) -> Result<String, SiteError> {
        let url = format!("{}/input", self.day_url(year, day));
        let mut attempt = 1;
        loop {
            tracing::debug!(%url, attempt, "fetching input");
            match self.try_fetch_input(&url) {
                Ok(input) => return Ok(input),
                Err(error) if attempt >= FETCH_ATTEMPTS => {
                    return Err(SiteError::TimedOut {
                        attempts: attempt,
                        last_error: error,
                    });
                }
                Err(error) => {
                    tracing::warn!(%error, attempt, "input not ready yet");
                    thread::sleep(self.retry_delay);
                    attempt += 1;
                }
            }
        }
    }

    /// Submit an answer for a part (`1` or `2`) and classify the response.
    ///
    /// # Errors
    ///
    /// [`SiteError::Request`] if the request fails or the response is an HTTP error.
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: u64,
    ) -> Result<SubmitOutcome, SiteError> {
        let url = format!("{}/answer", self.day_url(year, day));
        tracing::info!(%url, part, answer, "submitting answer");
        let body = self
            .http
            .post(&url)
            .form(&[("level", part.to_string()), ("answer", answer.to_string())])
            .send()?
            .error_for_status()?
            .text()?;
        let outcome = SubmitOutcome::classify(&body);
        tracing::debug!(?outcome, "classified response");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use httpmock::prelude::*;

    use super::*;

    const COOKIE: &str = "session=53616c7465645f5f";

    fn client(server: &MockServer) -> SiteClient {
        SiteClient::new(server.base_url(), COOKIE)
            .unwrap()
            .with_retry_delay(Duration::ZERO)
    }

    #[test]
    fn fetches_input_with_cookie() {
        let server = MockServer::start();
        let input_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/2025/day/3/input")
                .header("cookie", COOKIE);
            then.status(200).body("987654321111111\n");
        });

        let input = client(&server).fetch_input(2025, 3).unwrap();

        input_mock.assert();
        assert_eq!(input, "987654321111111\n");
    }

    #[test]
    fn gives_up_after_repeated_failures() {
        let server = MockServer::start();
        let input_mock = server.mock(|when, then| {
            when.method(GET).path("/2025/day/12/input");
            then.status(404).body("Please don't repeatedly request this endpoint");
        });

        let error = client(&server).fetch_input(2025, 12).unwrap_err();

        input_mock.assert_hits(5);
        assert!(matches!(error, SiteError::TimedOut { attempts: 5, .. }));
    }

    #[test]
    fn submits_answer_as_form() {
        let server = MockServer::start();
        let answer_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/2025/day/1/answer")
                .header("cookie", COOKIE)
                .body("level=2&answer=6");
            then.status(200)
                .body("<article><p>That's the right answer! You are one gold star closer.</p>");
        });

        let outcome = client(&server).submit_answer(2025, 1, 2, 6).unwrap();

        answer_mock.assert();
        assert_eq!(outcome, SubmitOutcome::Right(RIGHT.to_string()));
        assert!(outcome.is_right());
    }

    #[test]
    fn classifies_error_messages() {
        let wrong = "<p>That's not the right answer; your answer is too low. If you're stuck...";
        assert_eq!(
            SubmitOutcome::classify(wrong),
            SubmitOutcome::Wrong("That's not the right answer; your answer is too low.".into())
        );

        let too_quick = "You gave an answer too recently; you have to wait after submitting an \
            answer before trying again. You have 41s left to wait.";
        assert!(matches!(
            SubmitOutcome::classify(too_quick),
            SubmitOutcome::TooQuick(_)
        ));

        let done = "You don't seem to be solving the right level.  Did you already complete it?";
        assert!(matches!(
            SubmitOutcome::classify(done),
            SubmitOutcome::AlreadyDone(_)
        ));

        assert_eq!(
            SubmitOutcome::classify("<html></html>"),
            SubmitOutcome::Unexpected("<html></html>".into())
        );
    }

    #[test]
    fn reads_trimmed_cookie_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  {COOKIE}  ").unwrap();
        assert_eq!(read_cookie(file.path()).unwrap(), COOKIE);
        assert!(SiteClient::from_cookie_file(file.path()).is_ok());

        let empty = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            SiteClient::from_cookie_file(empty.path()),
            Err(SiteError::EmptyCookie(_))
        ));
    }
}
