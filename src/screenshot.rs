//! Screenshot of the year's calendar on the puzzle website, used as the README badge image.
//!
//! A headless Chrome loads the year page with the session cookie, captures the calendar element
//! and the capture is cropped to the badge size.

use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageResult};

use crate::site::DEFAULT_BASE_URL;

/// The calendar on a year page.
pub const DEFAULT_SELECTOR: &str = "body > main > pre";

const WINDOW_SIZE: (u32, u32) = (1920, 1080);
const ELEMENT_TIMEOUT: Duration = Duration::from_secs(10);
const BADGE_WIDTH: u32 = 640;
const BADGE_HEIGHT: u32 = 621;

/// The `Cookie` header for a session cookie given with or without its `session=` name.
fn session_cookie_header(cookie: &str) -> String {
    let value = cookie.strip_prefix("session=").unwrap_or(cookie);
    format!("session={value}")
}

/// Crop the top left badge area out of a PNG capture. Captures smaller than the badge are kept
/// whole.
fn crop_badge(png: &[u8]) -> ImageResult<DynamicImage> {
    let capture = image::load_from_memory_with_format(png, ImageFormat::Png)?;
    let (width, height) = capture.dimensions();
    Ok(capture.crop_imm(0, 0, width.min(BADGE_WIDTH), height.min(BADGE_HEIGHT)))
}

fn encode_png(image: &DynamicImage) -> ImageResult<Vec<u8>> {
    let mut encoded = Cursor::new(Vec::new());
    image.write_to(&mut encoded, ImageFormat::Png)?;
    Ok(encoded.into_inner())
}

/// Capture the element matching `selector` on `url` as PNG bytes.
fn capture_element(url: &str, cookie: &str, selector: &str) -> Result<Vec<u8>> {
    let options = LaunchOptions::default_builder()
        .headless(true)
        .window_size(Some(WINDOW_SIZE))
        .build()
        .map_err(anyhow::Error::msg)
        .context("invalid browser launch options")?;
    let browser = Browser::new(options).context("could not launch headless Chrome")?;
    let tab = browser.new_tab().context("could not open a browser tab")?;

    let cookie_header = session_cookie_header(cookie);
    tab.set_extra_http_headers(HashMap::from([("Cookie", cookie_header.as_str())]))
        .context("could not set the session cookie")?;
    tab.set_default_timeout(ELEMENT_TIMEOUT);

    tracing::debug!(%url, "loading page");
    tab.navigate_to(url)
        .and_then(|tab| tab.wait_until_navigated())
        .with_context(|| format!("could not load {url}"))?;
    let element = tab
        .wait_for_element(selector)
        .with_context(|| format!("no element matching {selector:?} on {url}"))?;
    element
        .capture_screenshot(CaptureScreenshotFormatOption::Png)
        .context("could not capture the element")
}

/// Screenshot the year page's element matching `selector`, crop it to the badge and write it to
/// `output`.
///
/// # Errors
///
/// If the browser cannot load the page or find the element, or the badge cannot be written.
pub fn take_screenshot(year: u16, cookie: &str, selector: &str, output: &Path) -> Result<()> {
    let url = format!("{DEFAULT_BASE_URL}/{year}");
    let capture = capture_element(&url, cookie, selector)?;
    let badge = crop_badge(&capture).context("could not decode the captured PNG")?;
    let encoded = encode_png(&badge).context("could not encode the badge PNG")?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create directory: {}", parent.display()))?;
    }
    fs::write(output, encoded)
        .with_context(|| format!("could not write screenshot: {}", output.display()))?;
    tracing::info!(
        path = %output.display(),
        width = badge.width(),
        height = badge.height(),
        "saved screenshot"
    );
    Ok(())
}
