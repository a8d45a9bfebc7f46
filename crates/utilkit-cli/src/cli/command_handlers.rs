use crate::cli::main_types::ConfigCommands;
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use utilkit_core::error::{AppError, CliError, InputError};
use utilkit_core::storage::config::{CONFIG_KEYS, Config};
use utilkit_core::utils::input::parse_operand;
use utilkit_core::utils::logging::{VerboseLogger, print_verbose};
use utilkit_core::value::merge::{MergeMode, extend_with};
use utilkit_core::value::path::{KeyPath, Segment, get, has, unset};

/// Writes JSON values to stdout
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, value: &Value) -> Result<String, AppError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.map_err(|e| InputError::Write(e.to_string()).into())
    }

    pub fn emit(&self, value: &Value) -> Result<(), AppError> {
        let rendered = self.render(value)?;
        writeln!(std::io::stdout().lock(), "{}", rendered)
            .map_err(|e| InputError::Write(e.to_string()))?;
        Ok(())
    }
}

pub struct ValueHandler {
    output: JsonOutput,
    logger: VerboseLogger,
}

impl ValueHandler {
    pub fn new(output: JsonOutput, verbose: bool) -> Self {
        Self {
            output,
            logger: VerboseLogger::new(verbose),
        }
    }

    pub fn get(&self, doc: &Value, path: Vec<String>) -> Result<(), AppError> {
        let key_path = KeyPath::from(path);
        self.logger.log(&format!("Resolving '{}'", key_path));

        match get(doc, &key_path) {
            Some(value) => self.output.emit(value),
            None => Err(CliError::PathNotFound {
                path: key_path.to_string(),
            }
            .into()),
        }
    }

    pub fn has(&self, doc: &Value, path: Vec<String>) -> Result<(), AppError> {
        let key_path = KeyPath::from(path);
        self.logger.log(&format!("Checking '{}'", key_path));
        self.output.emit(&Value::Bool(has(doc, &key_path)))
    }

    pub fn unset(&self, mut doc: Value, key: String) -> Result<(), AppError> {
        let segment = Segment::from(key);
        if unset(&mut doc, segment.clone()).is_none() {
            self.logger.log(&format!("Nothing to remove at '{}'", segment));
        }
        self.output.emit(&doc)
    }

    pub fn extend(
        &self,
        mut doc: Value,
        operands: &[String],
        mode: MergeMode,
    ) -> Result<(), AppError> {
        let parsed = operands
            .iter()
            .map(|raw| parse_operand(raw))
            .collect::<Result<Vec<_>, _>>()?;
        self.logger.log(&format!(
            "Merging {} operand(s) ({:?})",
            parsed.len(),
            mode
        ));

        extend_with(&mut doc, parsed, mode);
        self.output.emit(&doc)
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config: &mut Config,
        config_path: Option<PathBuf>,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command");

                println!("Current Configuration:");
                println!("=====================");
                for key in CONFIG_KEYS {
                    let value = match key {
                        "pretty" => config.pretty,
                        _ => config.deep_merge,
                    };
                    match value {
                        Some(flag) => println!("{}: {}", key, flag),
                        None => println!("{}: (not set)", key),
                    }
                }
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                print_verbose(
                    verbose,
                    &format!("Attempting config set - key: {}, value: {}", key, value),
                );

                config.set(&key, &value)?;
                config.save(config_path)?;

                println!("✅ Set {} to {}", key, value);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_compact_and_pretty() {
        let value = json!({"a": [1, 2]});
        assert_eq!(
            JsonOutput::new(false).render(&value).ok().as_deref(),
            Some(r#"{"a":[1,2]}"#)
        );
        let pretty = JsonOutput::new(true).render(&value).unwrap_or_default();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_get_missing_path_is_error() {
        let handler = ValueHandler::new(JsonOutput::new(false), false);
        let result = handler.get(&json!({"a": 1}), vec!["b".to_string()]);
        assert!(matches!(
            result,
            Err(AppError::Cli(CliError::PathNotFound { ref path })) if path == "b"
        ));
    }

    #[test]
    fn test_config_set_rejects_unknown_key() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = Config::default();
        let result = ConfigHandler::new().handle(
            ConfigCommands::Set {
                key: "colour".to_string(),
                value: "true".to_string(),
            },
            &mut config,
            Some(temp_dir.path().join("config.toml")),
            false,
        );
        assert!(result.is_err());
        assert!(!temp_dir.path().join("config.toml").exists());
    }
}
