use teamtracker::App;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("teamtracker=info")),
        )
        .init();

    tracing::info!("starting TeamTracker");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("TeamTracker"),
        ..Default::default()
    };

    eframe::run_native(
        "TeamTracker",
        options,
        Box::new(|cc| {
            teamtracker::ui::theme::apply(&cc.egui_ctx);
            Ok(Box::new(App::new()))
        }),
    )
}
