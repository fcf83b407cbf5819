use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use content::{ContentCatalog, DisplaySettings, resolve_source};
use dioxus::LaunchBuilder;
use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::tao::window::Fullscreen;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use learn_core::Clock;
use learn_core::model::LearningModule;
use tracing_subscriber::EnvFilter;
use ui::{App, DesktopWindow, UiApp, WindowRef, build_app_context};

const DEFAULT_CONFIG_PATH: &str = "content/colors.yaml";
const WINDOW_TITLE: &str = "Toddler Learning";

/// A gentle repeat-and-advance learning screen for toddlers.
#[derive(Debug, Parser)]
#[command(name = "toddler-learn", version, about)]
struct Args {
    /// Content file to load. Defaults to `content/colors.yaml`, then the built-in catalog.
    #[arg(short, long, env = "TODDLER_CONFIG")]
    config: Option<PathBuf>,

    /// Module to learn. Defaults to the catalog's default module.
    #[arg(short, long, env = "TODDLER_MODULE")]
    module: Option<String>,

    /// Print the available modules and exit.
    #[arg(long)]
    list_modules: bool,

    /// Open fullscreen, overriding the content file.
    #[arg(long)]
    fullscreen: bool,
}

struct DesktopApp {
    module: Arc<LearningModule>,
    display: DisplaySettings,
    window: WindowRef,
}

impl UiApp for DesktopApp {
    fn module(&self) -> Arc<LearningModule> {
        Arc::clone(&self.module)
    }

    fn display(&self) -> DisplaySettings {
        self.display
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn window(&self) -> WindowRef {
        Arc::clone(&self.window)
    }
}

fn load_catalog(args: &Args) -> Result<ContentCatalog, Box<dyn std::error::Error>> {
    let source = resolve_source(args.config.as_deref(), Path::new(DEFAULT_CONFIG_PATH));
    tracing::info!(source = %source.describe(), "loading content");
    Ok(source.load()?)
}

fn module_listing(catalog: &ContentCatalog) -> Vec<String> {
    let default_key = catalog.default_module().key();
    catalog
        .modules()
        .iter()
        .map(|module| {
            let marker = if module.key() == default_key { " (default)" } else { "" };
            let noun = if module.item_count() == 1 { "item" } else { "items" };
            format!(
                "{}: {}, {} {noun}, {} repeats{marker}",
                module.key(),
                module.display_name(),
                module.item_count(),
                module.repeat_threshold()
            )
        })
        .collect()
}

fn window_config(display: &DisplaySettings) -> DesktopConfig {
    let fullscreen = display.fullscreen.then(|| Fullscreen::Borderless(None));
    DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                f64::from(display.window_width),
                f64::from(display.window_height),
            ))
            .with_fullscreen(fullscreen)
            .with_always_on_top(false),
    )
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(&args)?;

    if args.list_modules {
        for line in module_listing(&catalog) {
            println!("{line}");
        }
        return Ok(());
    }

    let module = catalog.select(args.module.as_deref())?.clone();
    let mut display = *catalog.display();
    display.fullscreen |= args.fullscreen;

    let fullscreen = display.fullscreen;
    tracing::info!(
        module = module.key(),
        items = module.item_count(),
        fullscreen = fullscreen,
        "launching"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        module: Arc::new(module),
        display,
        window: Arc::new(DesktopWindow),
    });
    let context = build_app_context(&app);

    LaunchBuilder::desktop()
        .with_cfg(window_config(&display))
        .with_context(context)
        .launch(App);
    Ok(())
}

/// `RUST_LOG` when it parses, `warn` otherwise.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        // Binary glue: report once and exit non-zero.
        tracing::error!(%err, "failed to start");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
