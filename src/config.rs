pub struct Config {
    /// Bot name / user agent
    pub bot_name: String,
    /// The amount of time (in secs) that the fetcher should wait between
    /// consecutive page downloads.
    pub download_delay: f32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Config {
    pub fn sanity_check(&self) {
        if self.bot_name.is_empty() {
            panic!("config.bot_name cannot be empty");
        }
        if self.download_delay < 0.0 {
            panic!("config.download_delay must be positive");
        }
        if self.timeout_secs == 0 {
            panic!("config.timeout_secs cannot be zero");
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_name: "gleanerbot".to_owned(),
            download_delay: 1.0,
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_sanity_check() {
        Config::default().sanity_check();
    }

    #[test]
    #[should_panic]
    fn negative_download_delay_is_rejected() {
        let config = Config {
            download_delay: -1.0,
            ..Config::default()
        };
        config.sanity_check();
    }
}
