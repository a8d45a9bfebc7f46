pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("Verbose: {}", msg);
    }
    log::debug!("{}", msg);
}

pub fn log_error(msg: &str) {
    eprintln!("Error: {}", msg);
}

pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log(&self, msg: &str) {
        print_verbose(self.enabled, msg);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_logger_flag() {
        assert!(VerboseLogger::new(true).is_enabled());
        assert!(!VerboseLogger::new(false).is_enabled());
    }
}
