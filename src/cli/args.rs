use clap::{Parser, Subcommand};

/// CLI arguments. Running with no subcommand starts the interactive session;
/// inside it, input is either `/add <path>`, `exit`/`quit`, or a message for
/// the assistant.
#[derive(Parser, Debug, PartialEq, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Subcommand to execute instead of starting a session.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Commands {
    /// Manage configuration options.
    Config {
        /// Set the API key for DeepSeek.
        #[arg(long)]
        set_api_key: Option<String>,

        /// Set the chat model name.
        #[arg(long)]
        set_model: Option<String>,

        /// Set the sampling temperature (0.0 to 2.0).
        #[arg(long)]
        set_temperature: Option<f32>,

        /// Set the log level (debug, info, warn, error, off).
        #[arg(long)]
        set_log_level: Option<String>,
    },
}
