//! CLI argument definitions for the `megamenu` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use megamenu_cli::script::Event;
use megamenu_model::Orientation;

#[derive(Parser)]
#[command(
    name = "megamenu",
    version,
    about = "Storefront mega menu - render, resolve links and replay interactions",
    long_about = "Drive the storefront mega menu engine from the command line.\n\n\
                  Renders a menus document in either orientation, resolves\n\
                  category links and replays pointer/click scripts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a menus document as a table (or JSON).
    Render(RenderArgs),

    /// Resolve a slug against an origin.
    Resolve(ResolveArgs),

    /// Replay an interaction script and print the state after each event.
    Simulate(SimulateArgs),
}

/// Options shared by commands that mount a menu.
#[derive(Parser)]
pub struct MenuArgs {
    /// Menus document (`{ "menus": [...] }`).
    #[arg(value_name = "MENUS_JSON")]
    pub menus: PathBuf,

    /// Separate document served to the vertical (mobile) layout.
    #[arg(long = "mobile-menus", value_name = "PATH")]
    pub mobile_menus: Option<PathBuf>,

    /// Mount configuration (TOML, or JSON by extension).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force an orientation (overrides the config file).
    #[arg(long = "orientation", value_enum)]
    pub orientation: Option<OrientationArg>,

    /// Page origin links are resolved against.
    #[arg(long = "origin", default_value = "https://localhost")]
    pub origin: String,

    /// Department name to activate after loading.
    #[arg(long = "active", value_name = "NAME")]
    pub active: Option<String>,
}

#[derive(Parser)]
pub struct RenderArgs {
    #[command(flatten)]
    pub menu: MenuArgs,

    /// Expand these nodes before rendering (hover in horizontal, click in vertical).
    #[arg(long = "open", value_name = "ID")]
    pub open: Vec<String>,

    /// Print the derived view as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Page origin, e.g. https://store.com
    #[arg(value_name = "ORIGIN")]
    pub origin: String,

    /// Node slug; may itself carry a full URL.
    #[arg(value_name = "SLUG")]
    pub slug: String,
}

#[derive(Parser)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub menu: MenuArgs,

    /// Events to replay in order: enter:ID, leave, click:ID, outside, trigger.
    #[arg(long = "event", value_name = "EVENT", required = true)]
    pub events: Vec<Event>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    Horizontal,
    Vertical,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Horizontal => Orientation::Horizontal,
            OrientationArg::Vertical => Orientation::Vertical,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
