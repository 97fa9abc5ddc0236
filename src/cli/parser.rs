use clap::Parser;

/// Command-line interface definition for standup-timesheet
#[derive(Parser, Debug)]
#[command(
    name = "standup-timesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn your daily Geekbot standup answers on Slack into timesheet entries (JSON)",
    long_about = None
)]
pub struct Cli {
    /// Slack workspace name (the `<name>` in `<name>.slack.com`)
    #[arg(long)]
    pub workspace: Option<String>,

    /// Slack web token (xoxc-...)
    #[arg(long, help = "Auth token [default: xoxc-xxx]")]
    pub token: Option<String>,

    /// Value of the `d` session cookie (d=<auth_cookie>)
    #[arg(long = "auth-cookie", alias = "auth_cookie", value_name = "VALUE")]
    pub auth_cookie: Option<String>,

    /// First day to read (YYYY-MM-DD). Default: one month ago
    #[arg(long, value_name = "DATE", help = "From date, example: 2021-01-31")]
    pub from: Option<String>,

    /// Write the JSON to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Override configuration file path
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Verbose logging on stderr (RUST_LOG takes precedence)
    #[arg(long, short)]
    pub verbose: bool,
}
