use nifti_mpr::{app::MprApp, config::ViewerConfig};

fn main() -> eframe::Result {
    tracing_subscriber::fmt().with_env_filter("nifti_mpr=info").init();

    let config = ViewerConfig::default();
    tracing::info!(title = %config.window_title, "starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(egui::vec2(1200.0, 800.0))
            .with_maximized(config.start_maximized),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(MprApp::new(cc, config)))),
    )
}
