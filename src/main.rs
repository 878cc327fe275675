use anyhow::Context;
use clap::Parser;
use spacekit::{init_logging, run_script, DesignerState, SettingsManager, BUILD_DATE, VERSION};
use spacekit_designer::TracingRenderer;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spacekit")]
#[command(about = "Replay SpaceKit designer commands against a room layout")]
#[command(version)]
struct Args {
    /// Command script to run; reads stdin when omitted
    script: Option<PathBuf>,

    /// Settings file (.json or .toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Layout to open before running the script
    #[arg(short, long)]
    open: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging()?;
    tracing::info!("SpaceKit {} (built {})", VERSION, BUILD_DATE);

    let mut settings = match &args.config {
        Some(path) => SettingsManager::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => SettingsManager::load_default()?,
    };

    let mut state = DesignerState::from_config(settings.config());
    state.attach_renderer(Box::new(TracingRenderer));

    if let Some(path) = &args.open {
        state.load_from_file(path)?;
        settings.config_mut().add_recent_file(path.clone());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run_script(&mut state, BufReader::new(file), &mut out)?
        }
        None => run_script(&mut state, io::stdin().lock(), &mut out)?,
    };

    if let Some(path) = &state.current_file_path {
        settings.config_mut().add_recent_file(path.clone());
    }
    if let Err(e) = settings.save() {
        tracing::warn!("Could not save settings: {}", e);
    }

    tracing::info!(
        "Ran {} commands, {} failed",
        summary.executed,
        summary.failed
    );
    if summary.failed > 0 {
        anyhow::bail!("{} command(s) failed", summary.failed);
    }
    Ok(())
}
