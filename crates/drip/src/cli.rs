//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use drip_core::types::ProjectKind;

/// drip - package manager for Droplet projects
#[derive(Parser, Debug)]
#[command(name = "drip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project directory (defaults to $DRIP_PROJECT_DIR, then the current directory)
    #[arg(short = 'C', long, global = true)]
    pub project: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new Droplet project
    Init(InitArgs),

    /// Install a module and its dependencies
    Install(InstallArgs),

    /// Remove an installed module
    Remove(RemoveArgs),

    /// List installed modules
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project name (also the directory created)
    pub name: String,

    /// Project kind
    #[arg(long, value_enum, default_value_t = KindArg::Normal)]
    pub kind: KindArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Normal,
    PlatformVariant,
}

impl From<KindArg> for ProjectKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Normal => ProjectKind::Normal,
            KindArg::PlatformVariant => ProjectKind::PlatformVariant,
        }
    }
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Module locator (git URL or local path)
    pub locator: String,

    /// Branch or tag to install (shallow clone)
    #[arg(long, value_name = "REF")]
    pub version: Option<String>,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Module name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
