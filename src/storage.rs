//! Local data directory helpers.
//!
//! The workbench itself stores nothing durable except figures received
//! from a run (so the user can open them in an image viewer) and the
//! log file. Named code files live on the backend.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

/// Get the base data directory for the application.
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    let data_dir = base.join("codebench");
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).wrap_err("Failed to create data directory")?;
    }
    Ok(data_dir)
}

/// Get the directory figures are written to.
pub fn get_figures_dir() -> Result<PathBuf> {
    let figures_dir = get_data_dir()?.join("figures");
    if !figures_dir.exists() {
        fs::create_dir_all(&figures_dir).wrap_err("Failed to create figures directory")?;
    }
    Ok(figures_dir)
}

/// Path of the log file written by the tracing subscriber.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("codebench.log"))
}

/// Write one figure's PNG bytes to disk.
///
/// Figures are named by run sequence and position, so figures from a
/// newer run never clobber the ones being viewed from the current run.
pub fn save_figure(run_seq: u64, index: usize, bytes: &[u8]) -> Result<PathBuf> {
    let path = get_figures_dir()?.join(figure_file_name(run_seq, index));
    fs::write(&path, bytes).wrap_err_with(|| format!("Failed to write figure to {:?}", path))?;
    Ok(path)
}

fn figure_file_name(run_seq: u64, index: usize) -> String {
    format!("run{:04}_fig{}.png", run_seq, index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_file_name_shape() {
        assert_eq!(figure_file_name(7, 0), "run0007_fig1.png");
        assert_eq!(figure_file_name(12, 2), "run0012_fig3.png");
    }
}
