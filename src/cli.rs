use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Storefront catalog toolkit for laptops on a hosted backend
#[derive(Parser, Debug)]
#[command(name = "intech-storefront")]
#[command(version)]
#[command(
    about = "Assemble laptop product pages and manage the storefront catalog",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./intech.config.yml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Serve data from a JSON fixture instead of the hosted backend
    #[arg(long, global = true, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// Only print errors and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load one laptop with every configurable option and its images
    Laptop {
        /// Laptop identifier
        id: String,

        /// Output format: json or markdown
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render the product page configuration (sorted options and defaults)
        #[arg(long)]
        configure: bool,
    },

    /// List the laptops shown on the catalog page
    TopPicks {
        /// Number of laptops (defaults to top_picks_limit from the config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: json or markdown
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Sign in and check administrator permissions
    Login {
        #[arg(short, long)]
        email: String,

        /// Password (read from INTECH_ADMIN_PASSWORD when omitted)
        #[arg(long, env = "INTECH_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create a laptop from a YAML draft (administrators only)
    AddLaptop {
        /// Draft file; image paths inside it are relative to this file
        #[arg(short, long, value_name = "FILE")]
        draft: PathBuf,

        #[arg(short, long)]
        email: String,

        /// Password (read from INTECH_ADMIN_PASSWORD when omitted)
        #[arg(long, env = "INTECH_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
