use serde::{Serialize, Deserialize};

/// Hyperparameters for a training run.
///
/// # Fields
/// - `learning_rate` — scale applied to every weight delta, typically in (0, 1]
/// - `max_epoch`     — number of full passes over the example set; training
///                     never stops early
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub max_epoch: usize,
}

impl TrainConfig {
    pub fn new(learning_rate: f64, max_epoch: usize) -> Self {
        TrainConfig { learning_rate, max_epoch }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> crate::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> crate::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(1.0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("backprop-net-config-{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        let config = TrainConfig::new(0.25, 40);
        config.save_json(path).unwrap();
        let loaded = TrainConfig::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let err = TrainConfig::load_json("/nonexistent/backprop-net/config.json").unwrap_err();
        assert!(matches!(err, crate::NetworkError::Io(_)));
    }

    #[test]
    fn load_reports_bad_json() {
        let path = std::env::temp_dir().join(format!("backprop-net-bad-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        std::fs::write(path, "{\"learning_rate\": 0.5}").unwrap();
        let err = TrainConfig::load_json(path).unwrap_err();
        std::fs::remove_file(path).unwrap();
        assert!(matches!(err, crate::NetworkError::Json(_)));
    }
}
