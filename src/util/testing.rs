// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteSurface;
use crate::domain::position::to_position;
use crate::domain::{Appearance, Position, StyleKind};

/// Shared mock surface for testing use cases that depend on NoteSurface
///
/// This mock behaves like a minimal rich-text widget: it holds a buffer,
/// remembers styled regions as native positions, and records the lifecycle
/// signals (refresh, confirmation prompt, window close) the use cases send,
/// eliminating the need for each test file to define its own mock.
///
/// # Examples
///
/// ```
/// use stickypad::util::testing::MockSurface;
/// use stickypad::domain::StyleKind;
///
/// let surface = MockSurface::builder()
///     .with_text("groceries: milk, eggs")
///     .with_span(StyleKind::Bold, 0, 9)
///     .with_confirm(false)
///     .build();
/// ```
pub struct MockSurface {
    text: String,
    regions: HashMap<StyleKind, Vec<(Position, Position)>>,
    appearance: Appearance,
    confirm_answer: bool,
    confirm_requests: usize,
    refreshes: usize,
    closed: bool,
}

impl MockSurface {
    pub fn builder() -> MockSurfaceBuilder {
        MockSurfaceBuilder::new()
    }

    /// How many times the use cases asked for a re-render.
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// True once a confirmed delete told the window to close.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// How many times the confirmation prompt was shown.
    pub fn confirm_requests(&self) -> usize {
        self.confirm_requests
    }

    /// Move the end of every recorded region for `style` to the start of
    /// `line`, which may lie far outside the buffer.
    ///
    /// Simulates the stale widget references a real surface can hand back
    /// after text around a styled run was deleted.
    pub fn displace_region_end(&mut self, style: StyleKind, line: usize) {
        if let Some(regions) = self.regions.get_mut(&style) {
            for (_, end) in regions.iter_mut() {
                *end = Position::new(line, 0);
            }
        }
    }
}

impl NoteSurface for MockSurface {
    fn buffer_text(&self) -> String {
        self.text.clone()
    }

    fn style_regions(&self, style: StyleKind) -> Vec<(Position, Position)> {
        self.regions.get(&style).cloned().unwrap_or_default()
    }

    /// Replacing the buffer drops all recorded regions, as deleting text
    /// drops tag ranges in a real widget.
    fn set_buffer_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.regions.clear();
    }

    fn add_style_region(&mut self, style: StyleKind, start: Position, end: Position) {
        let regions = self.regions.entry(style).or_default();
        if !regions.contains(&(start, end)) {
            regions.push((start, end));
        }
    }

    fn appearance(&self) -> Appearance {
        self.appearance.clone()
    }

    fn set_appearance(&mut self, appearance: &Appearance) {
        self.appearance = appearance.clone();
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }

    fn confirm_delete(&mut self) -> bool {
        self.confirm_requests += 1;
        self.confirm_answer
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Builder for MockSurface
///
/// Provides a fluent interface for configuring the initial buffer. Spans
/// are given as character offsets and converted to native positions when
/// the surface is built, so they can be declared in any order relative to
/// the text.
pub struct MockSurfaceBuilder {
    text: String,
    spans: Vec<(StyleKind, usize, usize)>,
    appearance: Appearance,
    confirm_answer: bool,
}

impl MockSurfaceBuilder {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            spans: Vec::new(),
            appearance: Appearance::default(),
            confirm_answer: true,
        }
    }

    /// Set the initial buffer content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Pre-style the `[start, end)` character range with `style`
    pub fn with_span(mut self, style: StyleKind, start: usize, end: usize) -> Self {
        self.spans.push((style, start, end));
        self
    }

    /// Set the initial window colors and pin state
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Configure the answer the confirmation prompt will give (default: yes)
    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    pub fn build(self) -> MockSurface {
        let mut regions: HashMap<StyleKind, Vec<(Position, Position)>> = HashMap::new();
        for (style, start, end) in self.spans {
            let start = to_position(&self.text, start)
                .expect("Mock span start must lie inside the configured text");
            let end = to_position(&self.text, end)
                .expect("Mock span end must lie inside the configured text");
            regions.entry(style).or_default().push((start, end));
        }

        MockSurface {
            text: self.text,
            regions,
            appearance: self.appearance,
            confirm_answer: self.confirm_answer,
            confirm_requests: 0,
            refreshes: 0,
            closed: false,
        }
    }
}

impl Default for MockSurfaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
