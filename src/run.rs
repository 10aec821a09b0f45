use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use tracing::{debug, error, info};

use crate::{
    config::RunConfig,
    output::{file_name, provision_dir, write_file},
    progress::Progress,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub dir: PathBuf,
    pub written: usize,
    pub failed: usize,
}

/// Writes `config.count` files for every requested size, in order. A file
/// that cannot be written is logged and skipped; only a failure to provision
/// the output directory aborts the run.
pub fn run(config: &RunConfig, progress: &mut Progress) -> anyhow::Result<RunSummary> {
    let dir = provision_dir(config.output.as_deref(), &config.base_dir, &Local::now())
        .context("failed to create the output directory")?;
    info!("[{:<9}] {}", "START", env!("CARGO_PKG_NAME"));
    info!("[{:<9}] {}", "OUT_DIR", dir.display());

    let mut pattern = config.mode.pattern();
    let reuse = pattern.is_deterministic();
    let mut summary = RunSummary {
        dir,
        written: 0,
        failed: 0,
    };
    for &size in &config.sizes {
        info!(
            "[{:<9}] {:0>10} bytes x {} files",
            "MAKE_FILE", size, config.count
        );
        progress.start_group(config.count);
        let shared = reuse.then(|| pattern.generate(size));
        for index in 1..=config.count {
            let fresh;
            let data: &[u8] = match &shared {
                Some(buf) => buf,
                None => {
                    fresh = pattern.generate(size);
                    &fresh
                }
            };
            let path = summary.dir.join(file_name(size, index));
            match write_file(&path, data) {
                Ok(()) => {
                    debug!(path = %path.display(), "wrote {} bytes", data.len());
                    summary.written += 1;
                }
                Err(err) => {
                    progress.suspend(|| error!(path = %err.path().display(), "{err}"));
                    summary.failed += 1;
                }
            }
            progress.set(index);
        }
        progress.finish();
    }

    info!(
        "[{:<9}] {} files written, {} failed",
        "END", summary.written, summary.failed
    );
    Ok(summary)
}
