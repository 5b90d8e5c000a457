//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use tracing::{error, info};

use crate::http_server::observability_routes::endpoint_index;
use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::{init_logging, log_event, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            serve(config)
        }
        Command::Routes => routes(),
    }
}

/// Build the server config: file (or defaults), then flag overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(config: ServerConfig) -> CliResult<()> {
    init_logging(&config.log_level, config.log_format)?;
    log_event(Event::BootStart);
    info!(
        event = Event::ConfigLoaded.as_str(),
        addr = %config.socket_addr(),
        log_format = config.log_format.as_str(),
        "lifecycle"
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            error!(event = Event::BootFailed.as_str(), error = %e, "lifecycle");
            CliError::boot_failed(format!("HTTP server failed: {}", e))
        })
    })
}

/// Print the endpoint index
pub fn routes() -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &endpoint_index())?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(None, None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"host": "0.0.0.0", "port": 7000}"#).unwrap();

        let config = resolve_config(Some(file.path()), None, Some(7100)).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 7100);
    }

    #[test]
    fn test_hostname_host_accepted() {
        let config = resolve_config(None, Some("localhost".to_string()), Some(5001)).unwrap();
        assert_eq!(config.socket_addr(), "localhost:5001");
    }

    #[test]
    fn test_zero_port_flag_rejected() {
        let err = resolve_config(None, None, Some(0)).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
