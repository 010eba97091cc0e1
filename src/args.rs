use std::num::NonZeroUsize;

use clap::Parser;

use crate::errors::StartupError;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(env = "HOST", long, default_value_t = String::from("0.0.0.0"))]
    pub host: String,

    #[arg(env = "PORT", long, default_value_t = 3000)]
    pub port: u16,

    /// Origin allowed to call the API from a browser, e.g. https://example.github.io
    #[arg(env = "CORS_ORIGIN", long)]
    pub cors_origin: Option<String>,

    /// Maximum number of requests handled at the same time
    #[arg(env = "CONCURRENCY_LIMIT", long, default_value = "1024")]
    pub concurrency_limit: NonZeroUsize,
}

impl Args {
    pub fn load() -> Result<Args, StartupError> {
        // A missing .env is fine, Render passes everything through the environment
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(error) if error.not_found() => {}
            Err(error) => return Err(error.into()),
        }

        Ok(Args::parse())
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
impl Args {
    /// Loopback config that ignores the process environment.
    pub fn local(port: u16, cors_origin: Option<&str>) -> Args {
        Args {
            host: String::from("127.0.0.1"),
            port,
            cors_origin: cors_origin.map(String::from),
            concurrency_limit: NonZeroUsize::new(1024).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(limit: &str) -> Result<Args, clap::Error> {
        Args::try_parse_from([
            "render-backend",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--cors-origin",
            "https://rooflessjoe.github.io",
            "--concurrency-limit",
            limit,
        ])
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse("16").unwrap();

        assert_eq!(args.address(), "127.0.0.1:8080");
        assert_eq!(
            args.cors_origin.as_deref(),
            Some("https://rooflessjoe.github.io")
        );
        assert_eq!(args.concurrency_limit.get(), 16);
    }

    #[test]
    fn rejects_zero_concurrency_limit() {
        assert!(parse("0").is_err());
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Args::try_parse_from(["render-backend", "--port", "70000"]).is_err());
    }
}
