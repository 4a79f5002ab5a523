use anyhow::{Context, Result};
use notify::event::ModifyKind;
use notify::{Config as NotifyConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::channel;
use tracing::{debug, info, warn};

use crate::cli::ConfigOptions;
use crate::context::{build_manager, watched_paths};
use crate::display::print_summary;

pub fn check_command(options: &ConfigOptions, watch: bool) -> Result<()> {
    let outcome = run_check(options);
    if !watch {
        return outcome;
    }

    if let Err(e) = &outcome {
        eprintln!("❌ {e:#}");
    }

    watch_paths(&watched_paths(options), || {
        if let Err(e) = run_check(options) {
            eprintln!("❌ {e:#}");
        }
    })
}

fn run_check(options: &ConfigOptions) -> Result<()> {
    let manager = build_manager(options)?;
    let config = manager
        .resolve()
        .context("The backend configuration is invalid")?;
    print_summary(&config);
    Ok(())
}

fn is_relevant(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_)
            | EventKind::Remove(_)
            | EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any | ModifyKind::Name(_))
    )
}

fn watch_paths(paths: &[PathBuf], mut on_change: impl FnMut()) -> Result<()> {
    let (event_tx, event_rx) = channel();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            let _ = event_tx.send(res);
        },
        NotifyConfig::default(),
    )?;

    for path in paths {
        let mode = if path.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(path, mode)
            .with_context(|| format!("Failed to watch {}", path.display()))?;
        debug!("Watching {:?}", path);
    }

    info!("Watching {} paths for changes", paths.len());
    println!("👀 Watching for changes (Ctrl-C to stop)");

    for res in event_rx {
        match res {
            Ok(event) if is_relevant(&event.kind) => {
                debug!("Change detected: {:?}", event.paths);
                on_change();
            }
            Ok(_) => {}
            Err(e) => warn!("Watch error: {}", e),
        }
    }

    Ok(())
}
