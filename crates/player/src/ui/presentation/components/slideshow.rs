//! Slideshow: slides, progress, day counter and navigation
//!
//! Every slide image is rendered up front so the browser fetches them all
//! before they are shown; only the active one is visible.

use dioxus::prelude::*;
use keepsake_domain::slides::auto_loop_label;
use keepsake_domain::{Command, SlideCommand, Slide};

use super::{region_class, MusicControls};
use crate::ports::outbound::ExperienceEvent;
use crate::ui::presentation::state::ViewState;
use crate::ui::use_emit;

/// Props for the Slideshow component
#[derive(Props, Clone, PartialEq)]
pub struct SlideshowProps {
    pub slides: Vec<Slide>,
}

#[component]
pub fn Slideshow(props: SlideshowProps) -> Element {
    let view = use_context::<ViewState>();
    let emit = use_emit();
    let visible = *view.slideshow_visible.read();
    let active = *view.active_slide.read();
    let progress = *view.progress_percent.read();
    let countdown = view.countdown.read().clone();
    let (loop_icon, loop_text) = auto_loop_label(*view.auto_loop.read());

    let command = move |command: SlideCommand| emit.call(ExperienceEvent::Command(Command::Slides(command)));

    rsx! {
        section {
            class: region_class("slideshow", visible),

            div {
                class: "slides",
                for (index, slide) in props.slides.iter().enumerate() {
                    figure {
                        key: "{index}",
                        class: if index == active { "slide active" } else { "slide" },
                        img {
                            src: "{slide.image}",
                            alt: "{slide.caption}",
                            "loading": "eager",
                        }
                        if !slide.caption.is_empty() {
                            figcaption { "{slide.caption}" }
                        }
                    }
                }
            }

            div {
                class: "progress",
                div { class: "progress-bar", style: "width: {progress}%;" }
            }

            p { class: "countdown", "{countdown}" }

            div {
                class: "slide-controls",
                button {
                    class: "slide-button",
                    aria_label: "Previous slide",
                    onclick: move |_| command(SlideCommand::Prev),
                    "◀"
                }
                button {
                    class: "slide-button loop-toggle",
                    onclick: move |_| command(SlideCommand::ToggleAutoLoop),
                    "{loop_icon} {loop_text}"
                }
                button {
                    class: "slide-button",
                    aria_label: "Next slide",
                    onclick: move |_| command(SlideCommand::Next),
                    "▶"
                }
            }

            MusicControls {}
        }
    }
}
