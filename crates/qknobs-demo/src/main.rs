//! QKnobs demo application.

use clap::Parser;
use eframe::egui;
use qknobs_config::{PanelLayout, get_factory_layout, resolve_layout};
use qknobs_demo::{DemoError, DemoState, QKnobsApp, View};
use qknobs_gui_core::StyleKind;

/// Audio-mixer style knobs and faders.
#[derive(Parser, Debug)]
#[command(name = "qknobs-demo")]
#[command(about = "Demo panels for the QKnobs controls")]
#[command(version)]
struct Args {
    /// Bundled panel to show
    #[arg(long, value_enum, default_value_t = View::Amplifier)]
    view: View,

    /// Painting style (basic, modern, wood); defaults to the layout's style
    #[arg(long)]
    style: Option<StyleKind>,

    /// Layout name or TOML file to load instead of the bundled panel.
    ///
    /// Values are snapshotted using the field names of `--view`.
    #[arg(long)]
    layout: Option<String>,
}

fn load(args: &Args) -> Result<(PanelLayout, StyleKind), DemoError> {
    let layout = match &args.layout {
        Some(name) => resolve_layout(name)?,
        None => {
            let name = args.view.layout_name();
            get_factory_layout(name)
                .ok_or_else(|| qknobs_config::ConfigError::LayoutNotFound(name.to_string()))?
        }
    };
    let style = match args.style {
        Some(style) => style,
        None => layout.style.parse()?,
    };
    Ok((layout, style))
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Bridge log:: calls from eframe/egui into tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();
    tracing::info!(view = ?args.view, "starting QKnobs demo");

    let setup = load(&args).and_then(|(layout, style)| DemoState::new(args.view, &layout, style));
    let state = match setup {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "could not set up the demo");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 420.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title("QKnobs"),
        ..Default::default()
    };

    eframe::run_native(
        "QKnobs",
        options,
        Box::new(move |cc| Ok(Box::new(QKnobsApp::new(cc, state)))),
    )
}
