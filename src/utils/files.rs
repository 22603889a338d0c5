use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::TriviarrResult;

/// Read a JSON array artifact from disk.
pub fn read_json<T: DeserializeOwned>(path: &str) -> TriviarrResult<T> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write a JSON artifact, pretty-printed, UTF-8 with non-ASCII text kept
/// literal (serde_json never escapes to ASCII codepoints).
pub fn write_json<T: Serialize>(path: &str, value: &T) -> TriviarrResult<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let raw = serde_json::to_string_pretty(value)?;
    std::fs::write(path, raw)?;
    debug!("Wrote '{path}'");
    Ok(())
}
