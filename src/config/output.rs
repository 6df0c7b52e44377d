use serde::{Deserialize, Serialize};

use super::OutputMode;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Print matched records instead of statistics
    pub raw: bool,

    /// Print matched records as JSON, takes precedence over `raw`
    pub json: bool,
}

impl Config {
    pub fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.raw {
            OutputMode::Raw
        } else {
            OutputMode::Summary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_precedence() {
        assert_eq!(Config::default().mode(), OutputMode::Summary);

        let raw = Config {
            raw: true,
            json: false,
        };
        assert_eq!(raw.mode(), OutputMode::Raw);

        let both = Config {
            raw: true,
            json: true,
        };
        assert_eq!(both.mode(), OutputMode::Json);
    }
}
