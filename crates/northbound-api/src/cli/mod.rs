//! CLI command definitions for the `northbound` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Northbound Studio's retrieval-backed chat assistant.
#[derive(Parser)]
#[command(name = "northbound", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only errors in the log; `ask` prints the bare reply, `serve` no banner.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the TOML configuration file (default: ./northbound.toml).
    #[arg(long, global = true, env = "NORTHBOUND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP chat server.
    Serve {
        /// Interface to bind (overrides `[server] host`).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides `[server] port`).
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Answer a single message from the knowledge base and exit.
    ///
    /// Nothing is written to conversation memory.
    Ask {
        /// The question to answer.
        message: String,

        /// Use the RAG fallback wording when nothing relevant is found.
        #[arg(long)]
        rag: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::try_parse_from(["northbound", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(8080));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn parses_ask_with_global_flags() {
        let cli = Cli::try_parse_from([
            "northbound",
            "ask",
            "What services do you offer?",
            "--rag",
            "--json",
            "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Ask { message, rag } => {
                assert_eq!(message, "What services do you offer?");
                assert!(rag);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn ask_requires_a_message() {
        assert!(Cli::try_parse_from(["northbound", "ask"]).is_err());
    }
}
