use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DOCS_DIR: &str = "docs";
const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";

#[derive(Parser, Debug)]
#[command(name = "dokdocs-mcpd", version, about = "Dokploy docs MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "DOKDOCS_DOCS_DIR", default_value = DEFAULT_DOCS_DIR)]
    docs_dir: PathBuf,

    #[arg(
        long = "http",
        env = "DOKDOCS_SERVE_HTTP",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    serve_http: bool,

    #[arg(long, env = "DOKDOCS_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct DokdocsConfig {
    pub docs_dir: PathBuf,
    pub serve_http: bool,
    pub mcp_http_addr: SocketAddr,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value:?}")
            }
        }
    }
}

impl Error for ConfigError {}

impl DokdocsConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for DokdocsConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.docs_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "DOKDOCS_DOCS_DIR",
                value: args.docs_dir.display().to_string(),
            });
        }

        Ok(Self {
            docs_dir: args.docs_dir,
            serve_http: args.serve_http,
            mcp_http_addr: args.mcp_http_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            serve_http: false,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
        }
    }

    #[test]
    fn defaults_parse_into_a_stdio_config() {
        let config = DokdocsConfig::try_from(base_args()).expect("config should parse");
        assert!(!config.serve_http);
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
    }

    #[test]
    fn empty_docs_dir_is_rejected() {
        let mut args = base_args();
        args.docs_dir = PathBuf::new();

        let err = DokdocsConfig::try_from(args).expect_err("empty docs dir should fail");
        assert!(err.to_string().contains("DOKDOCS_DOCS_DIR"));
    }
}
