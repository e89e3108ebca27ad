use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

use cityguide_adapters::DEFAULT_PORT;
use cityguide_directory::{DEFAULT_TIMEOUT, DEFAULT_UPSTREAM_URL};

mod commands;
use commands::{
    execute_check_recipe_command, execute_lookup_command, execute_serve_command, LookupArgs,
    ServeArgs, UpstreamOptions,
};

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "cityguide=info,tower_http=debug,warn";

#[derive(Parser)]
#[command(name = "cityguide")]
#[command(about = "Cityguide - city infos, weather forecasts and recipes over HTTP")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeCommandArgs),
    /// Print a city and its two-day forecast as JSON
    Lookup(LookupCommandArgs),
    /// Check recipe text against the content rules
    CheckRecipe(CheckRecipeArgs),
}

#[derive(Args)]
pub struct UpstreamArgs {
    /// Base URL of the upstream city/weather API
    #[arg(long, env = "CITYGUIDE_UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: Url,
    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,
    /// Answer from a JSON fixtures file instead of the upstream API
    #[arg(long)]
    pub fixtures: Option<PathBuf>,
}

impl From<UpstreamArgs> for UpstreamOptions {
    fn from(args: UpstreamArgs) -> Self {
        UpstreamOptions {
            upstream_url: args.upstream_url,
            timeout: Duration::from_secs(args.timeout_secs),
            fixtures: args.fixtures,
        }
    }
}

#[derive(Args)]
pub struct ServeCommandArgs {
    /// Host to bind (ignored when a public URL is set)
    #[arg(long, env = "HOST", default_value = "localhost")]
    pub host: String,
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Externally visible URL; binds 0.0.0.0 and is advertised in the API docs
    #[arg(long, env = "RENDER_EXTERNAL_URL")]
    pub public_url: Option<Url>,
    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

#[derive(Args)]
pub struct LookupCommandArgs {
    /// City identifier
    pub city_id: String,
    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

#[derive(Args)]
pub struct CheckRecipeArgs {
    /// Recipe text
    pub content: String,
}

/// Install the global tracing subscriber
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Serve(args) => {
            let serve_args = ServeArgs {
                host: args.host,
                port: args.port,
                public_url: args.public_url,
                upstream: args.upstream.into(),
            };
            execute_serve_command(serve_args).await
        }
        Commands::Lookup(args) => {
            let lookup_args = LookupArgs {
                city_id: args.city_id,
                upstream: args.upstream.into(),
            };
            execute_lookup_command(lookup_args).await
        }
        Commands::CheckRecipe(args) => execute_check_recipe_command(&args.content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["cityguide", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.upstream.upstream_url.as_str(), "https://api-ugi2pflmha-ew.a.run.app/");
                assert_eq!(args.port, 3000);
                assert_eq!(args.upstream.timeout_secs, 10);
                assert!(args.upstream.fixtures.is_none());
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "cityguide",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--public-url",
            "https://cityguide.example.com",
            "--fixtures",
            "cities.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "127.0.0.1");
                assert_eq!(args.port, 8080);
                assert_eq!(
                    args.public_url.unwrap().as_str(),
                    "https://cityguide.example.com/"
                );
                assert_eq!(args.upstream.fixtures, Some(PathBuf::from("cities.json")));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(Cli::try_parse_from(["cityguide", "serve", "--port", "99999"]).is_err());
        assert!(Cli::try_parse_from(["cityguide", "serve", "--upstream-url", "not a url"]).is_err());
        assert!(Cli::try_parse_from(["cityguide", "lookup"]).is_err());
    }

    #[test]
    fn test_default_log_filter() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert!(DEFAULT_LOG_FILTER.contains("tower_http=debug"));
    }

    #[test]
    fn test_parse_check_recipe() {
        let cli = Cli::try_parse_from(["cityguide", "check-recipe", "Boil pasta for ten minutes."]).unwrap();
        match cli.command {
            Commands::CheckRecipe(args) => assert_eq!(args.content, "Boil pasta for ten minutes."),
            _ => panic!("expected check-recipe command"),
        }
    }
}
