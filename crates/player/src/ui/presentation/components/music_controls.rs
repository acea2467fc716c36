//! Background music element and its controls

use dioxus::prelude::*;
use keepsake_domain::{AudioCommand, Command};

use crate::infrastructure::media::AUDIO_ELEMENT_ID;
use crate::ports::outbound::{AudioSignal, ExperienceEvent, MediaError};
use crate::ui::presentation::state::ViewState;
use crate::ui::use_emit;

#[component]
pub fn MusicControls() -> Element {
    let view = use_context::<ViewState>();
    let emit = use_emit();
    let play_state = *view.play_state.read();
    let track_info = view.track_info.read().clone();

    let send_audio = move |signal: AudioSignal| emit.call(ExperienceEvent::Audio(signal));
    let command = move |command: AudioCommand| emit.call(ExperienceEvent::Command(Command::Audio(command)));

    rsx! {
        // Sources are swapped in by the audio adapter
        audio {
            id: AUDIO_ELEMENT_ID,
            preload: "auto",
            onloadstart: move |_| send_audio(AudioSignal::LoadStart),
            oncanplay: move |_| send_audio(AudioSignal::CanPlay),
            onended: move |_| send_audio(AudioSignal::Ended),
            onpause: move |_| send_audio(AudioSignal::Paused),
            onerror: move |_| send_audio(AudioSignal::Error(MediaError::element("audio source failed"))),
        }

        div {
            class: "music-controls",
            button {
                class: "music-button",
                aria_label: "Previous track",
                onclick: move |_| command(AudioCommand::Prev),
                "⏮️"
            }
            button {
                class: "music-button play-toggle",
                aria_label: "{play_state.label()}",
                onclick: move |_| command(AudioCommand::TogglePlayPause),
                span { class: "music-icon", "{play_state.icon()}" }
                span { class: "music-label", "{play_state.label()}" }
            }
            button {
                class: "music-button",
                aria_label: "Next track",
                onclick: move |_| command(AudioCommand::Next),
                "⏭️"
            }
            p { class: "track-info", "{track_info}" }
        }
    }
}
