//! # SpaceKit
//!
//! Virtual Space Designer: a grid-snapped 2D room-layout editor core.
//!
//! ## Architecture
//!
//! SpaceKit is organized as a workspace with multiple crates:
//!
//! 1. **spacekit-core** - Error types, constants, and the event bus
//! 2. **spacekit-settings** - Editor, view, and UI configuration
//! 3. **spacekit-designer** - Entity model, scene store, history, interaction,
//!    serialization, and the designer session
//! 4. **spacekit** - Logging setup and a headless command-script runner
//!
//! ## Scripts
//!
//! The binary replays designer commands, one per line. Blank lines and lines
//! starting with `#` are skipped:
//!
//! ```text
//! # two chairs around a table
//! add table 0 0
//! add chair -64 0
//! add chair 64 0
//! rotate 180
//! show
//! ```

use std::io::{BufRead, Write};

pub use spacekit_core::{Error, Result};
pub use spacekit_designer as designer;
pub use spacekit_designer::{ComponentType, DesignerCommand, DesignerState, Entity};
pub use spacekit_settings::{Config, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, so script output on stdout stays clean
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Replays a command script against `state`.
///
/// Output of `show` commands goes to `out`. A line that fails to parse or
/// execute is reported to `out` with its line number and the run continues.
pub fn run_script<R, W>(
    state: &mut DesignerState,
    script: R,
    out: &mut W,
) -> anyhow::Result<ScriptSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ScriptSummary::default();

    for (index, line) in script.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = line
            .parse::<DesignerCommand>()
            .map_err(anyhow::Error::from)
            .and_then(|command| state.execute(&command));

        match result {
            Ok(output) => {
                summary.executed += 1;
                if let Some(text) = output {
                    writeln!(out, "{}", text)?;
                }
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!("Line {}: {:#}", index + 1, e);
                writeln!(out, "error on line {}: {:#}", index + 1, e)?;
            }
        }
    }

    Ok(summary)
}
