//! CLI command definitions for the `pagesmith` binary.

pub mod site;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Generate landing pages with an LLM and publish them under short links.
#[derive(Parser)]
#[command(name = "pagesmith", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit log events as JSON lines.
    #[arg(long, global = true, env = "PAGESMITH_LOG_JSON")]
    pub log_json: bool,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true, env = "PAGESMITH_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on.
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,

        /// Host address to bind to.
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
    },

    /// Generate a page for a topic and print it.
    Generate {
        /// What the landing page is about.
        topic: String,

        /// Write the HTML to this file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Publish an HTML file and print its link.
    Publish {
        /// Path to the HTML file.
        file: PathBuf,

        /// Project title (used for the slug).
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Show a published site's details.
    Show {
        /// Site slug.
        slug: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_publish_with_title() {
        let cli = Cli::try_parse_from(["pagesmith", "--json", "publish", "page.html", "-t", "My Shop"])
            .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Publish { file, title } => {
                assert_eq!(file, PathBuf::from("page.html"));
                assert_eq!(title.as_deref(), Some("My Shop"));
            }
            _ => panic!("expected publish"),
        }
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["pagesmith", "-vv", "show", "my-shop-abc1234"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
