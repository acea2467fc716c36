//! Phone-style PIN keypad
//!
//! `*` and `#` are drawn for the look of a phone keypad but send nothing.

use dioxus::prelude::*;
use keepsake_domain::input::{KeypadKey, KEYPAD_LAYOUT};
use keepsake_domain::{Command, PinCommand};

use crate::ports::outbound::ExperienceEvent;
use crate::ui::use_emit;

#[component]
pub fn Keypad() -> Element {
    let emit = use_emit();

    rsx! {
        div {
            class: "keypad",
            role: "group",
            aria_label: "PIN keypad",

            for (index, cell) in KEYPAD_LAYOUT.iter().enumerate() {
                KeypadButton {
                    key: "{cell.label}",
                    cell: *cell,
                    focus_on_mount: index == 0,
                }
            }
        }

        div {
            class: "keypad-actions",
            button {
                class: "keypad-action",
                aria_label: "Delete last digit",
                onclick: move |_| emit.call(ExperienceEvent::Command(Command::Pin(PinCommand::Backspace))),
                "⌫"
            }
            button {
                class: "keypad-action confirm",
                aria_label: "Confirm PIN",
                onclick: move |_| emit.call(ExperienceEvent::Command(Command::Pin(PinCommand::Confirm))),
                "OK"
            }
        }
    }
}

/// Props for the KeypadButton component
#[derive(Props, Clone, PartialEq)]
pub struct KeypadButtonProps {
    pub cell: KeypadKey,
    /// Take keyboard focus when first rendered
    #[props(default = false)]
    pub focus_on_mount: bool,
}

#[component]
pub fn KeypadButton(props: KeypadButtonProps) -> Element {
    let emit = use_emit();
    let cell = props.cell;
    let digit = cell.digit();
    let focus_on_mount = props.focus_on_mount;

    rsx! {
        button {
            class: if digit.is_some() { "keypad-key" } else { "keypad-key decorative" },
            aria_label: "{cell.aria_label()}",
            onmounted: move |evt: MountedEvent| async move {
                if focus_on_mount {
                    if let Err(e) = evt.set_focus(true).await {
                        tracing::debug!("Keypad focus failed: {:?}", e);
                    }
                }
            },
            onclick: move |_| {
                if let Some(digit) = digit {
                    emit.call(ExperienceEvent::Command(Command::Pin(PinCommand::Digit(digit))));
                }
            },

            span { class: "keypad-digit", "{cell.label}" }
            if !cell.letters.is_empty() {
                span { class: "keypad-letters", "{cell.letters}" }
            }
        }
    }
}
