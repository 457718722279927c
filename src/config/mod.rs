use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| format!("PORT must be a valid port number, got {:?}", port))?,
            None => 8080,
        };

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            Some(flag) => !matches!(flag.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"),
            None => true,
        };

        Ok(Config { host, port, seed_sample_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(
            config_from(&[]).unwrap(),
            Config {
                host: "127.0.0.1".to_string(),
                port: 8080,
                seed_sample_data: true,
            }
        );
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[("HOST", "0.0.0.0"), ("PORT", "5000"), ("SEED_SAMPLE_DATA", "false")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }
}
