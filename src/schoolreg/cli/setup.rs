use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "schoolreg", bin_name = "schoolreg", version)]
#[command(about = "Register schools and browse the local school directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the registry (defaults to $SCHOOLREG_HOME, then the user data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new school
    #[command(alias = "a")]
    Add {
        /// School name (at least 2 characters)
        #[arg(long, default_value = "")]
        name: String,

        /// Street address (at least 5 characters)
        #[arg(long, default_value = "")]
        address: String,

        /// City (at least 2 characters)
        #[arg(long, default_value = "")]
        city: String,

        /// State (at least 2 characters)
        #[arg(long, default_value = "")]
        state: String,

        /// Contact number (at least 10 digits, numbers only)
        #[arg(long, default_value = "")]
        contact: String,

        /// Email address
        #[arg(long = "email", default_value = "")]
        email: String,

        /// School image (PNG, JPG or JPEG)
        #[arg(long, value_name = "FILE")]
        image: Option<PathBuf>,
    },

    /// List schools, optionally searched, filtered and sorted
    #[command(alias = "ls")]
    List {
        /// Match name, city, state or address (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only schools in this state (exact match, "all" for every state)
        #[arg(long)]
        state: Option<String>,

        /// Sort order: name-asc, name-desc, city-asc, city-desc, state-asc, state-desc
        #[arg(long)]
        sort: Option<String>,
    },

    /// List the distinct states in the directory
    States,

    /// Get or set configuration
    Config {
        /// Configuration key (default-sort, placeholder-image)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
