use anyhow::{Context, bail};
use clap::{ArgAction, Parser, builder::BoolishValueParser};
use std::net::SocketAddr;

/// Runtime configuration for the `cpfgen-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file is loaded first), with defaults that mirror a local development
/// server.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cpfgen-server",
    version,
    about = "An HTTP challenge target that echoes input and hands out CPF-style IDs"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Example: "127.0.0.1:5000" or "0.0.0.0:8080"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("127.0.0.1:5000"))]
    pub server_addr: String,

    /// Debug mode: lowers the default log level to `debug` and switches to
    /// multi-line log output.
    ///
    /// Accepts `--debug` alone or `--debug=<bool>`, where `1/0`, `yes/no`,
    /// `on/off` and `true/false` all work.
    ///
    /// Environment variable: `DEBUG`
    #[arg(
        short,
        long,
        env = "DEBUG",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub debug: bool,

    /// Maximum number of identifiers a single `/api/cpf` call may request.
    ///
    /// Environment variable: `MAX_API_IDS`
    #[arg(long, env = "MAX_API_IDS", default_value_t = 100)]
    pub max_api_ids: usize,

    /// Seed for a deterministic digit source. When unset, every request draws
    /// from the thread-local RNG.
    ///
    /// Environment variable: `CPF_SEED`
    #[arg(long, env = "CPF_SEED")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: SocketAddr,
    pub debug: bool,
    pub max_api_ids: usize,
    pub seed: Option<u64>,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.max_api_ids == 0 {
            bail!("MAX_API_IDS must be greater than 0");
        }

        let server_addr = args
            .server_addr
            .parse()
            .with_context(|| format!("invalid SERVER_ADDR `{}`", args.server_addr))?;

        Ok(Self {
            server_addr,
            debug: args.debug,
            max_api_ids: args.max_api_ids,
            seed: args.seed,
        })
    }
}
