use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "anser")]
#[command(about = "Anser conversational query-answering service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Server port
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Development mode: permissive CORS and detailed error responses
        #[arg(long)]
        dev: bool,
    },
}
