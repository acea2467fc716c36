//! Document-level keyboard and touch input
//!
//! Listeners are installed once on `document` so keys work no matter which
//! element has focus. Raw messages are translated into experience events.

use keepsake_domain::KeyInput;
use serde::Deserialize;

use crate::infrastructure::EventDispatcher;
use crate::ports::outbound::ExperienceEvent;

const LISTENER_SCRIPT: &str = r#"
let touchStartX = null;
document.addEventListener("keydown", (e) => {
    if (e.key === " " || e.key === "Enter" || e.key.startsWith("Arrow")) {
        e.preventDefault();
    }
    dioxus.send({ kind: "key", key: e.key });
});
document.addEventListener("touchstart", (e) => {
    touchStartX = e.changedTouches[0].screenX;
}, { passive: true });
document.addEventListener("touchend", (e) => {
    if (touchStartX === null) { return; }
    dioxus.send({ kind: "swipe", start_x: touchStartX, end_x: e.changedTouches[0].screenX });
    touchStartX = null;
}, { passive: true });
await new Promise(() => {});
"#;

/// Message posted by the listener script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentInput {
    Key { key: String },
    Swipe { start_x: f64, end_x: f64 },
}

impl DocumentInput {
    /// `None` for keys the experience does not react to.
    pub fn into_event(self) -> Option<ExperienceEvent> {
        match self {
            Self::Key { key } => KeyInput::from_key_name(&key).map(ExperienceEvent::Key),
            Self::Swipe { start_x, end_x } => Some(ExperienceEvent::Swipe { start_x, end_x }),
        }
    }
}

/// Install the listeners and forward their messages until the page goes away.
pub async fn forward_document_input(dispatcher: EventDispatcher) {
    let mut eval = dioxus::document::eval(LISTENER_SCRIPT);
    tracing::debug!("Document input listeners installed");

    loop {
        let message = match eval.recv::<serde_json::Value>().await {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("Document input bridge closed: {:?}", e);
                break;
            }
        };

        match serde_json::from_value::<DocumentInput>(message) {
            Ok(input) => {
                if let Some(event) = input.into_event() {
                    dispatcher.send(event);
                }
            }
            Err(e) => tracing::debug!("Ignoring malformed input message: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_domain::Digit;

    fn parse(json: &str) -> DocumentInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn keys_translate_to_key_events() {
        let input = parse(r#"{"kind": "key", "key": "7"}"#);
        assert_eq!(
            input.into_event(),
            Some(ExperienceEvent::Key(KeyInput::Digit(
                Digit::try_from('7').unwrap()
            )))
        );
        assert_eq!(
            parse(r#"{"kind": "key", "key": " "}"#).into_event(),
            Some(ExperienceEvent::Key(KeyInput::Space))
        );
    }

    #[test]
    fn unknown_keys_are_dropped() {
        assert_eq!(parse(r#"{"kind": "key", "key": "Shift"}"#).into_event(), None);
        assert_eq!(parse(r#"{"kind": "key", "key": "*"}"#).into_event(), None);
    }

    #[test]
    fn swipes_carry_coordinates() {
        let input = parse(r#"{"kind": "swipe", "start_x": 320.5, "end_x": 120}"#);
        assert_eq!(
            input.into_event(),
            Some(ExperienceEvent::Swipe {
                start_x: 320.5,
                end_x: 120.0
            })
        );
    }

    #[test]
    fn unknown_kinds_fail_to_parse() {
        assert!(serde_json::from_str::<DocumentInput>(r#"{"kind": "scroll"}"#).is_err());
    }
}
