mod menu;
mod terminal;

use clap::Parser;
use rollcall_common::config::Config;
use rollcall_core::registration::RegistrationSystem;
use terminal::{logging, print};

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "An interactive course registration manager.")]
pub struct CommandLine {
    /// Reduce decoration; repeat to hide listing bodies as well
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();

    logging::init_logging();
    print::initialize();

    if args.plain {
        colored::control::set_override(false);
    }

    let cfg = Config {
        quiet: args.quiet,
        no_banner: args.no_banner,
        plain: args.plain,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let mut system = RegistrationSystem::new();
    menu::run(&mut system, &cfg)
}
