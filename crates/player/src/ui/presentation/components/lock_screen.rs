//! Lock screen: lock icon, masked PIN, hint and keypad

use dioxus::prelude::*;

use super::{region_class, Keypad};
use crate::ui::presentation::state::ViewState;

/// Props for the LockScreen component
#[derive(Props, Clone, PartialEq)]
pub struct LockScreenProps {
    /// Shown after repeated wrong attempts
    pub hint: String,
}

#[component]
pub fn LockScreen(props: LockScreenProps) -> Element {
    let view = use_context::<ViewState>();
    let visible = *view.lock_visible.read();
    let shaking = *view.shaking.read();
    let icon = view.lock_icon.read().glyph();
    let pin = view.pin_mask.read().clone();

    rsx! {
        section {
            class: region_class("lock-screen", visible),

            div { class: "lock-icon", "{icon}" }

            div {
                class: if shaking { "pin-display shake" } else { "pin-display" },
                aria_live: "polite",
                "{pin}"
            }

            if *view.hint_visible.read() && !props.hint.is_empty() {
                p { class: "hint", "{props.hint}" }
            }

            Keypad {}

            if *view.loading_visible.read() {
                div { class: "loading", "Unlocking..." }
            }
        }
    }
}
