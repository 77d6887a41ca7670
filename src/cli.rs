use std::path::PathBuf;

use clap::Parser;

use crate::wizard::Viewport;

/// Collect business-branding answers step by step and preview the
/// generated website in the terminal.
#[derive(Parser, Debug)]
#[command(name = "sitewright", version, about)]
pub struct Args {
    /// Logo image to preload into the branding step
    #[arg(short, long)]
    pub logo: Option<PathBuf>,

    /// Start the preview on this template (1-3) instead of the industry default
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub template: Option<u8>,

    /// Initial preview viewport (desktop if omitted)
    #[arg(long, value_enum)]
    pub viewport: Option<ViewportArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewportArg {
    Desktop,
    Tablet,
    Mobile,
}

impl From<ViewportArg> for Viewport {
    fn from(arg: ViewportArg) -> Self {
        match arg {
            ViewportArg::Desktop => Viewport::Desktop,
            ViewportArg::Tablet => Viewport::Tablet,
            ViewportArg::Mobile => Viewport::Mobile,
        }
    }
}
