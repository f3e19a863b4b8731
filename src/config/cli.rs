use crate::config::{ServerConfig, DEFAULT_PORT};
use crate::utils::error::Result;
use crate::utils::validation::{validate_ip_addr, validate_path, validate_required_field, Validate};
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "adelphi-results")]
#[command(about = "Serves a pass/fail summary of gemini and cassandra-diff results")]
pub struct CliConfig {
    #[arg(long, env = "DATA_PATH", help = "Base directory of the result artifacts")]
    pub data_path: Option<String>,

    #[arg(long, env = "ADELPHI_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn server_config(&self) -> Result<ServerConfig> {
        self.validate()?;

        let data_path = validate_required_field("DATA_PATH", &self.data_path)?;
        let ip = validate_ip_addr("host", &self.host)?;

        Ok(ServerConfig::new(data_path, SocketAddr::new(ip, self.port)))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let data_path = validate_required_field("DATA_PATH", &self.data_path)?;
        validate_path("data_path", data_path)?;
        validate_ip_addr("host", &self.host)?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ResultsError;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["adelphi-results"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_server_config_from_flags() {
        let config = parse(&["--data-path", "/data/results", "--port", "8080", "--host", "127.0.0.1"]);

        let server = config.server_config().unwrap();
        assert_eq!(server.data_path, std::path::PathBuf::from("/data/results"));
        assert_eq!(server.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_host_reads_service_specific_env_var() {
        use clap::CommandFactory;

        let command = CliConfig::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().into_owned())
        };

        assert_eq!(env_of("host").as_deref(), Some("ADELPHI_HOST"));
        assert_eq!(env_of("port").as_deref(), Some("PORT"));
        assert_eq!(env_of("data_path").as_deref(), Some("DATA_PATH"));
    }

    #[test]
    fn test_port_defaults_to_3000() {
        let config = CliConfig {
            data_path: Some("/data".to_string()),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            verbose: false,
            json_logs: false,
        };

        assert_eq!(config.server_config().unwrap().bind_addr.port(), 3000);
    }

    #[test]
    fn test_missing_data_path_is_rejected() {
        let config = CliConfig {
            data_path: None,
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            verbose: false,
            json_logs: false,
        };

        let err = config.server_config().unwrap_err();
        assert!(matches!(err, ResultsError::MissingConfigError { .. }));
        assert!(err.is_config_error());
        assert!(err.user_friendly_message().contains("DATA_PATH"));
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let config = CliConfig {
            data_path: Some("/data".to_string()),
            host: "not-an-ip".to_string(),
            port: DEFAULT_PORT,
            verbose: false,
            json_logs: false,
        };

        assert!(matches!(
            config.validate(),
            Err(ResultsError::InvalidConfigValueError { .. })
        ));
    }
}
