//! Chrome-backed renderer: browser lifecycle, content injection, capture.

use std::ffi::OsStr;
use std::time::Instant;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use tracing::debug;

use crate::error::{RenderError, Result};
use crate::{RenderOptions, Slide};

/// Render an HTML document into a PNG slide.
///
/// Launches a dedicated headless Chrome, injects `html` as the page
/// content, waits for the load to settle, and captures a screenshot
/// clipped to the viewport at the configured device scale. The browser
/// process is torn down before returning, on success and failure alike.
pub fn render_html(html: &str, options: &RenderOptions) -> Result<Slide> {
    if html.trim().is_empty() {
        return Err(RenderError::EmptyHtml);
    }

    let launch_options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(false)
        .window_size(Some((options.viewport.width, options.viewport.height)))
        .args(vec![
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--disable-gpu"),
        ])
        .build()
        .map_err(|e| RenderError::Launch(format!("Failed to build launch options: {}", e)))?;

    // One browser process per render. Dropping `Browser` kills the child,
    // so every early return below tears it down as well.
    let browser = Browser::new(launch_options).map_err(|e| RenderError::Launch(e.to_string()))?;

    let tab = browser
        .new_tab()
        .map_err(|e| RenderError::Launch(format!("Failed to create tab: {}", e)))?;
    tab.set_default_timeout(options.load_timeout);

    debug!(bytes = html.len(), "loading html content");
    tab.navigate_to(&data_url(html))
        .map_err(|e| RenderError::Navigation(e.to_string()))?;

    let started = Instant::now();
    if let Err(e) = tab.wait_until_navigated() {
        if started.elapsed() >= options.load_timeout {
            return Err(RenderError::Timeout(options.load_timeout.as_secs()));
        }
        return Err(RenderError::Navigation(e.to_string()));
    }

    // Settle window after the load event; stands in for a network-idle wait.
    std::thread::sleep(options.settle_delay);

    let clip = Page::Viewport {
        x: 0.0,
        y: 0.0,
        width: options.viewport.width as f64,
        height: options.viewport.height as f64,
        scale: options.scale,
    };
    let png = tab
        .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, Some(clip), true)
        .map_err(|e| RenderError::Capture(e.to_string()))?;

    debug!(bytes = png.len(), "captured screenshot");

    Ok(Slide {
        png,
        width: options.viewport.width,
        height: options.viewport.height,
        scale: options.scale,
    })
}

/// Encode an HTML document as a base64 `data:` URL for content injection.
fn data_url(html: &str) -> String {
    format!("data:text/html;base64,{}", STANDARD.encode(html))
}
