use dioxus::prelude::*;
use keepsake_domain::ExperienceConfig;

use crate::infrastructure::document_input::forward_document_input;
use crate::infrastructure::particles::CONFETTI_SCRIPT_URL;
use crate::infrastructure::{spawn_task, EventDispatcher};
use crate::ports::outbound::ExperienceEvent;
use crate::state::Platform;

mod host;
pub mod presentation;

use presentation::components::{LockScreen, Slideshow, VideoScreen};
use presentation::state::ViewState;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// Hook returning a copyable sender into the experience event queue.
pub fn use_emit() -> Callback<ExperienceEvent> {
    let dispatcher = use_context::<EventDispatcher>();
    use_callback(move |event: ExperienceEvent| dispatcher.send(event))
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let config = use_context::<ExperienceConfig>();
    let platform = use_platform();

    // Must be created inside an active Dioxus runtime.
    let view = use_context_provider(ViewState::new);
    let dispatcher =
        use_context_provider(|| host::start_experience(&config, platform.clone(), view));

    use_hook({
        let dispatcher = dispatcher.clone();
        move || spawn_task(forward_document_input(dispatcher))
    });
    use_drop(move || dispatcher.send(ExperienceEvent::Dispose));

    rsx! {
        document::Title { "{config.title}" }
        document::Stylesheet {
            href: asset!("/assets/style.css"),
        }
        document::Script {
            src: CONFETTI_SCRIPT_URL.to_string(),
        }

        main {
            class: "experience",
            LockScreen { hint: config.hint.clone() }
            VideoScreen { src: config.intro_video.clone() }
            Slideshow { slides: config.slides.clone() }
        }
    }
}
