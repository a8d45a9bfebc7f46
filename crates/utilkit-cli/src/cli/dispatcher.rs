use crate::cli::command_handlers::{ConfigHandler, JsonOutput, ValueHandler};
use crate::cli::main_types::Commands;
use serde_json::Value;
use std::path::PathBuf;
use utilkit_core::error::AppError;
use utilkit_core::storage::config::Config;
use utilkit_core::utils::input::{read_json, read_json_file};
use utilkit_core::utils::logging::print_verbose;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    verbose: bool,
    pretty: bool,
    input: Option<PathBuf>,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        verbose: bool,
        pretty: bool,
        input: Option<PathBuf>,
    ) -> Self {
        Self {
            config,
            config_path,
            verbose,
            pretty,
            input,
        }
    }

    // Document from --input, falling back to stdin
    fn read_document(&self) -> Result<Value, AppError> {
        match &self.input {
            Some(path) => {
                self.log_verbose(&format!("Reading document from {}", path.display()));
                read_json_file(path)
            }
            None => {
                self.log_verbose("Reading document from stdin");
                read_json(std::io::stdin().lock(), "stdin")
            }
        }
    }

    fn create_value_handler(&self) -> ValueHandler {
        let output = JsonOutput::new(self.config.effective_pretty(self.pretty));
        ValueHandler::new(output, self.verbose)
    }

    pub fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Config { command } => {
                let mut config = self.config.clone();
                ConfigHandler::new().handle(
                    command,
                    &mut config,
                    self.config_path.clone(),
                    self.verbose,
                )
            }
            Commands::Get { path } => {
                let doc = self.read_document()?;
                self.create_value_handler().get(&doc, path)
            }
            Commands::Has { path } => {
                let doc = self.read_document()?;
                self.create_value_handler().has(&doc, path)
            }
            Commands::Unset { key } => {
                let doc = self.read_document()?;
                self.create_value_handler().unset(doc, key)
            }
            Commands::Extend { operands, deep } => {
                let doc = self.read_document()?;
                let mode = self.config.merge_mode(deep);
                self.create_value_handler().extend(doc, &operands, mode)
            }
        }
    }
}
