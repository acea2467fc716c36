//! Keepsake player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "keepsake_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        std::panic::set_hook(Box::new(|info| {
            tracing::error!("Player panicked: {}", info);
        }));
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Keepsake Player");

    let platform = keepsake_player::infrastructure::platform::create_platform();
    let config = keepsake_player::infrastructure::config_loader::load_config();
    tracing::info!(
        tracks = config.tracks.len(),
        slides = config.slides.len(),
        "Experience config loaded"
    );

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!("<style>{}</style>", include_str!("../assets/style.css"));
        let window = dioxus_desktop::WindowBuilder::new().with_title(config.title.clone());
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(config)
        .launch(keepsake_player::ui::app);
}
