//! Command line surface.

pub mod commands;
pub mod manifest;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lj_core::payment::PaymentPage;
use lj_core::PlanKind;

#[derive(Parser)]
#[command(name = "love-journey")]
#[command(about = "Build and share a couple's timeline", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/love-journey/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk the wizard with a manifest and publish the journey
    Create {
        /// Manifest file (TOML)
        #[arg(short, long)]
        manifest: PathBuf,
        /// Plan, overriding the config file
        #[arg(short, long, value_enum)]
        plan: Option<PlanArg>,
    },
    /// Print a published timeline
    Show {
        journey_id: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check the payment status of a journey
    Payment {
        journey_id: String,
        /// Page the gateway redirected to
        #[arg(long, value_enum, default_value_t = PageArg::Success)]
        page: PageArg,
    },
    /// Regenerate the share link and QR code
    Qr { journey_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanArg {
    Free,
    Premium,
    Legacy,
}

impl From<PlanArg> for PlanKind {
    fn from(value: PlanArg) -> Self {
        match value {
            PlanArg::Free => PlanKind::Free,
            PlanArg::Premium => PlanKind::Premium,
            PlanArg::Legacy => PlanKind::Legacy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    Success,
    Pending,
}

impl From<PageArg> for PaymentPage {
    fn from(value: PageArg) -> Self {
        match value {
            PageArg::Success => PaymentPage::Success,
            PageArg::Pending => PaymentPage::Pending,
        }
    }
}
