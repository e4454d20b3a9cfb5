mod app;
mod settings;

use tracing_subscriber::EnvFilter;

fn main() {
    // Respects RUST_LOG; the desktop runtime may already own a subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    dioxus::LaunchBuilder::new()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::tao::window::WindowBuilder::new().with_title("Game list"),
                )
                .with_menu(None),
        )
        .launch(app::App);
}
