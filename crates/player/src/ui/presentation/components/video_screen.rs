//! Intro video surface

use dioxus::prelude::*;

use super::region_class;
use crate::infrastructure::media::VIDEO_ELEMENT_ID;
use crate::ports::outbound::{ExperienceEvent, MediaError, VideoSignal};
use crate::ui::presentation::state::ViewState;
use crate::ui::use_emit;

/// Props for the VideoScreen component
#[derive(Props, Clone, PartialEq)]
pub struct VideoScreenProps {
    pub src: String,
}

#[component]
pub fn VideoScreen(props: VideoScreenProps) -> Element {
    let view = use_context::<ViewState>();
    let emit = use_emit();
    let visible = *view.video_visible.read();

    rsx! {
        section {
            class: region_class("video-screen", visible),
            video {
                id: VIDEO_ELEMENT_ID,
                src: "{props.src}",
                preload: "auto",
                "playsinline": "true",
                onended: move |_| emit.call(ExperienceEvent::Video(VideoSignal::Ended)),
                onerror: move |_| {
                    emit.call(ExperienceEvent::Video(VideoSignal::Failed(MediaError::element(
                        "intro video failed to load",
                    ))))
                },
            }
        }
    }
}
