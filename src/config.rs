use clap::Parser;

/// Command-line options, parsed once and shared read-only by both phases.
#[derive(Debug, Clone, Parser)]
#[command(name = "murl")]
#[command(about = "Issue one HTTP request, then repeat it over a raw TCP socket")]
#[command(version)]
pub struct Config {
    /// Target URL
    pub url: Option<String>,

    /// HTTP method (GET, POST, DELETE, PUT)
    #[arg(short = 'X', default_value = "GET")]
    pub method: String,

    /// Data payload for POST or PUT requests
    #[arg(short = 'd', default_value = "")]
    pub data: String,

    /// Additional header, formatted as 'Key: Value'
    #[arg(short = 'H', default_value = "")]
    pub header: String,

    /// Verbose output
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Level of diagnostic logs written to stderr
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: tracing::Level,
}

impl Config {
    pub fn load() -> Self {
        Config::parse()
    }
}
