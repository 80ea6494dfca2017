//! Command-line arguments for `tailor`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tailor a résumé and CV to a job posting
#[derive(Parser, Debug)]
#[command(name = "tailor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace root (holds profile/, data/, templates/, outputs/)
    #[arg(long, global = true, env = "TAILOR_HOME")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the primary-style résumé plus a CV
    Build {
        /// balanced, executive, ats, human or cv (unknown names mean balanced)
        #[arg(long, short, default_value = "balanced")]
        style: String,

        /// Company name; its slug names the output folder
        #[arg(long, short, default_value = "Generic")]
        company: String,

        /// Job posting text file (default: data/job_posting.txt)
        #[arg(long)]
        jd_file: Option<PathBuf>,
    },

    /// Show which profile skills a posting keeps or drops, without writing
    Preview {
        /// Job posting text file (default: data/job_posting.txt)
        #[arg(long)]
        jd_file: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer clarifying questions raised by a posting
    Ask {
        #[arg(long, short, default_value = "Generic")]
        company: String,

        /// Job posting text file (default: data/job_posting.txt)
        #[arg(long)]
        jd_file: Option<PathBuf>,

        /// Build the résumé pair afterwards in this style
        #[arg(long)]
        build: Option<String>,
    },

    /// Tidy saved summary additions into single crisp sentences
    Curate,

    /// Sanity-check the profile
    LintProfile,

    /// Serve the JSON API
    Serve {
        /// Overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
}
