//! contrib3d
//!
//! Fetches the public GitHub contributions page for a user and renders the
//! per-day activity as a stylized "3D" SVG calendar: a 53x7 grid of raised
//! blocks whose height and color encode contribution intensity.
//!
//! One-shot batch generator: a single linear pipeline (resolve owner,
//! fetch, extract, lay out, render, write) with one top-level failure
//! boundary in the binary that writes a fixed fallback document instead.
//!
//! # Example
//!
//! ```no_run
//! use contrib3d::GeneratorConfig;
//!
//! # fn main() -> contrib3d::Result<()> {
//! let config = GeneratorConfig {
//!     owner: "octocat".to_string(),
//!     ..Default::default()
//! };
//! contrib3d::generate(&config)?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

// Owner identity resolution from the environment
pub mod source;

// HTTP fetch of the contributions page
pub mod fetch;

// Pattern-based day-record extraction
pub mod extract;

// Positional week/day grid
pub mod layout;

// SVG assembly (blocks + fallback document)
pub mod render;

// Artifact writer
pub mod output;

/// Configuration for one generator run.
///
/// The defaults match the deployed tool: the public GitHub host, the fixed
/// `calendar-generator` user agent, and the `dist/` output path. `host` is
/// a plain base URL so tests can point the fetcher at a local server.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// GitHub user whose contributions are fetched
    pub owner: String,
    /// Base URL of the upstream host
    pub host: String,
    /// User agent sent with the fetch
    pub user_agent: String,
    /// Where the SVG artifact is written
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            owner: source::DEFAULT_OWNER.to_string(),
            host: "https://github.com".to_string(),
            user_agent: "calendar-generator".to_string(),
            output_path: PathBuf::from("dist/profile-3d-contrib.svg"),
        }
    }
}

/// Run the whole pipeline: fetch, extract, lay out, render, write.
///
/// Errors from any stage propagate unchanged; nothing is retried. The
/// caller decides what a failure means (the binary writes the fallback
/// document and exits non-zero).
pub fn generate(config: &GeneratorConfig) -> Result<()> {
    let html = fetch::fetch_contributions(config)?;
    let days = extract::extract_days(&html)?;
    log::info!("extracted {} day records for {}", days.len(), config.owner);
    let grid = layout::Grid::from_records(days);
    let svg = render::render_svg(&grid);
    output::write_artifact(&config.output_path, &svg)
}
