use clap::Parser;

/// Banter — a terminal chat client for OpenAI-compatible models.
#[derive(Parser, Debug)]
#[command(name = "banter", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. `debug`, `banter_ai=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model identifier override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Number of trailing turns sent with each request.
    #[arg(short = 'w', long)]
    pub window: Option<u32>,
}

pub fn parse() -> Args {
    Args::parse()
}
