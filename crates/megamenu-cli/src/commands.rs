use anyhow::{Context, Result};
use tracing::info;

use megamenu_cli::script::Simulation;
use megamenu_cli::summary::{state_line, view_table};
use megamenu_core::{JsonFileSource, MegaMenu, MenuView, Presenter};
use megamenu_model::GlobalConfig;

use crate::cli::{MenuArgs, RenderArgs, ResolveArgs, SimulateArgs};

fn load_config(args: &MenuArgs) -> Result<GlobalConfig> {
    let mut config = match &args.config {
        Some(path) => GlobalConfig::load_from(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => GlobalConfig::default(),
    };
    if let Some(orientation) = args.orientation {
        config.open_only = Some(orientation.into());
    }
    if let Some(name) = &args.active {
        config.default_department_active = Some(name.clone());
    }
    Ok(config)
}

fn mount(args: &MenuArgs) -> Result<MegaMenu> {
    let config = load_config(args)?;
    let mut source = JsonFileSource::new(&args.menus);
    if let Some(path) = &args.mobile_menus {
        source = source.with_mobile(path);
    }
    let menu = MegaMenu::mount(&source, config, &args.origin)
        .with_context(|| format!("load menus {}", args.menus.display()))?;
    info!(
        orientation = %menu.config().orientation(),
        departments = menu.store().borrow().tree().len(),
        "mounted menu"
    );
    Ok(menu)
}

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let mut menu = mount(&args.menu)?;
    for id in &args.open {
        match menu.presenter_mut() {
            Presenter::Horizontal(horizontal) => {
                horizontal.pointer_enter(id);
            }
            Presenter::Vertical(vertical) => {
                vertical.click(id);
            }
        }
    }

    let view = menu.view();
    if args.json {
        let json = serde_json::to_string_pretty(&view).context("serialize view")?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", menu.config().title);
    if let MenuView::Horizontal(horizontal) = &view
        && let Some(image) = horizontal.panel.as_ref().and_then(|p| p.image_url.as_deref())
    {
        println!("Panel image: {image}");
    }
    println!("{}", view_table(&view));
    Ok(())
}

pub fn run_resolve(args: &ResolveArgs) -> String {
    megamenu_core::resolve(&args.origin, &args.slug)
}

pub fn run_simulate(args: &SimulateArgs) -> Result<()> {
    let menu = mount(&args.menu)?;
    let mut simulation = Simulation::new(menu);
    let state = state_line(simulation.menu().store().borrow().state());
    println!("{:<16} {:<40} {state}", "start", "");
    for event in &args.events {
        let label = event.to_string();
        let outcome = simulation.apply(event);
        let state = state_line(simulation.menu().store().borrow().state());
        println!("{label:<16} {outcome:<40} {state}");
    }
    simulation.finish();
    Ok(())
}
