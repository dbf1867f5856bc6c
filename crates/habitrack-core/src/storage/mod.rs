mod config;
mod store;

pub use config::{AdvisorConfig, Config};
pub use store::HabitStore;

use std::path::PathBuf;

/// Returns `~/.config/habitrack[-dev]/` based on HABITRACK_ENV.
///
/// Set HABITRACK_ENV=dev to use the development data directory, or
/// HABITRACK_DATA_DIR to point at an explicit directory (used by tests).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var("HABITRACK_DATA_DIR") {
        Ok(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HABITRACK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("habitrack-dev")
            } else {
                base_dir.join("habitrack")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
