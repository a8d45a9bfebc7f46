//! Input processing and environment configuration utilities
//!
//! Reads JSON documents from files or stdin and picks up settings from the
//! environment.

use crate::error::{CliError, InputError};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Environment variable configuration reader
pub struct EnvConfigReader;

impl EnvConfigReader {
    /// Read UTILKIT_PRETTY environment variable
    pub fn read_pretty() -> Option<bool> {
        std::env::var("UTILKIT_PRETTY")
            .ok()
            .and_then(|s| parse_flag(&s))
    }

    /// Read UTILKIT_DEEP_MERGE environment variable
    pub fn read_deep_merge() -> Option<bool> {
        std::env::var("UTILKIT_DEEP_MERGE")
            .ok()
            .and_then(|s| parse_flag(&s))
    }
}

/// Parse a boolean flag the way settings are written on the command line
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse JSON text, naming where it came from in the error
pub fn parse_json(text: &str, source_name: &str) -> crate::Result<Value> {
    serde_json::from_str(text).map_err(|e| {
        InputError::InvalidJson {
            source_name: source_name.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Read and parse a JSON document from a file
pub fn read_json_file<P: AsRef<Path>>(path: P) -> crate::Result<Value> {
    let path = path.as_ref();
    let source_name = path.to_string_lossy().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        source_name: source_name.clone(),
        source,
    })?;
    parse_json(&text, &source_name)
}

/// Read and parse a JSON document from any reader
pub fn read_json<R: Read>(mut reader: R, source_name: &str) -> crate::Result<Value> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| InputError::Read {
            source_name: source_name.to_string(),
            source,
        })?;
    parse_json(&text, source_name)
}

/// Parse an operand given on the command line
///
/// `@path` reads a file, anything else is parsed as inline JSON. Text that is
/// not valid JSON is taken as a plain string.
pub fn parse_operand(raw: &str) -> crate::Result<Value> {
    if let Some(path) = raw.strip_prefix('@') {
        if path.is_empty() {
            return Err(CliError::InvalidArguments(
                "'@' must be followed by a file path".to_string(),
            )
            .into());
        }
        return read_json_file(path);
    }
    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

/// Run `f` with `name` set to `value`, restoring the previous value afterwards
///
/// Tests touching `UTILKIT_*` variables go through here so they do not race.
#[cfg(test)]
pub(crate) fn with_env_var<F: FnOnce()>(name: &str, value: &str, f: F) {
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let original = std::env::var(name).ok();
    unsafe {
        std::env::set_var(name, value);
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    unsafe {
        match original {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    }

    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}
