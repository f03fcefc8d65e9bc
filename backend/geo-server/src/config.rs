use crate::error::{Result as ServerErrorResult, ServerError};

use geo_config::Config;

use std::path::PathBuf;

/// Load and validate configuration. Any problem is fatal at startup.
pub fn load_config() -> ServerErrorResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

/// Resolve the log file path and make sure its directory exists
pub fn prepare_log_file(config: &Config) -> ServerErrorResult<Option<PathBuf>> {
    let Some(path) = config.log_file_path()? else {
        return Ok(None);
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ServerError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    Ok(Some(path))
}
