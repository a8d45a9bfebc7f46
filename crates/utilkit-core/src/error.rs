use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("InputError: {0}")]
    Input(#[from] InputError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("No value at path '{path}'")]
    PathNotFound { path: String },
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        source: std::io::Error,
    },
    #[error("Invalid JSON in {source_name}: {message}")]
    InvalidJson {
        source_name: String,
        message: String,
    },
    #[error("Failed to write output: {0}")]
    Write(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error in {path}: {message}")]
    ConfigParseError { path: String, message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "warning",
            ErrorSeverity::Low => "info",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(cli_error) => match cli_error {
                CliError::PathNotFound { .. } => ErrorSeverity::Low,
                CliError::InvalidArguments(_) => ErrorSeverity::Medium,
            },
            AppError::Input(input_error) => match input_error {
                InputError::Write(_) => ErrorSeverity::Critical,
                _ => ErrorSeverity::High,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Cli(CliError::PathNotFound { path }) => {
                format!("Nothing found at '{}'", path)
            }
            AppError::Input(InputError::InvalidJson { source_name, .. }) => {
                format!("{} is not valid JSON", source_name)
            }
            AppError::Config(ConfigError::UnknownKey { key }) => {
                format!("Unknown setting '{}'", key)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Cli(CliError::PathNotFound { .. }) => {
                Some("'utilkit has <path>' checks a path without failing".to_string())
            }
            AppError::Input(InputError::InvalidJson { .. }) => {
                Some("Pass --input <file> or pipe a JSON document on stdin".to_string())
            }
            AppError::Config(ConfigError::UnknownKey { .. }) => {
                Some("Known settings: pretty, deep_merge".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { path, .. }) => {
                Some(format!("Fix or remove {}", path))
            }
            _ => None,
        }
    }
}
