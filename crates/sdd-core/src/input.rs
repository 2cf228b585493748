use crate::error::{Result, SddError};
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Resolve exactly one input source: `--file` wins over `--text`, which wins
/// over piped stdin. With no file, no text, and a terminal on stdin the
/// caller gets `NoInput` instead of a hang.
///
/// Bytes from files and stdin decode lossily, so undecodable input becomes
/// non-matching content rather than an error.
pub fn resolve(file: Option<&Path>, text: Option<&str>) -> Result<String> {
    if let Some(path) = file {
        if !path.exists() {
            return Err(SddError::FileNotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path)?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    if let Some(t) = text {
        return Ok(t.to_string());
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(SddError::NoInput);
    }
    let mut bytes = Vec::new();
    stdin.lock().read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
