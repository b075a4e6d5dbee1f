use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit hex dumps of every request and response at trace level.
    #[serde(default)]
    pub dump_packets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dump_packets: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
