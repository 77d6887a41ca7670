use anyhow::Result;
use clap::Parser;

use sitewright::cli::Args;
use sitewright::template::TemplateId;
use sitewright::tui::{self, App};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut app = App::new();
    if let Some(viewport) = args.viewport {
        app.session.viewport = viewport.into();
    }
    if let Some(number) = args.template {
        if let Some(id) = TemplateId::from_number(number) {
            app.template_choice.choose(id);
        }
    }
    if let Some(path) = args.logo {
        app.request_logo_load(path);
    }

    tui::run(app)
}
