//! Media element adapters
//!
//! Drive the `<video>` and `<audio>` elements rendered by the presentation
//! layer through page scripts. Play requests report their outcome back
//! through the [`EventDispatcher`] once the browser resolves them.

use keepsake_domain::Track;

use crate::infrastructure::script::{js_string, run_script};
use crate::infrastructure::{spawn_task, EventDispatcher};
use crate::ports::outbound::{
    AudioPort, AudioSignal, ExperienceEvent, MediaError, VideoPort, VideoSignal,
};

pub const VIDEO_ELEMENT_ID: &str = "intro-video";
pub const AUDIO_ELEMENT_ID: &str = "bg-music";

/// Script that calls `play()` and returns `null` on success, or the
/// rejection reason.
pub fn play_script(element_id: &str) -> String {
    format!(
        r#"const el = document.getElementById({id});
if (!el) {{ return "element not found"; }}
try {{
    await el.play();
    return null;
}} catch (e) {{
    return e && e.name ? `${{e.name}}: ${{e.message}}` : String(e);
}}"#,
        id = js_string(element_id)
    )
}

pub fn pause_script(element_id: &str) -> String {
    format!(
        "const el = document.getElementById({id}); if (el) {{ el.pause(); }}",
        id = js_string(element_id)
    )
}

/// Replace the element's sources with the track's and reload it.
///
/// Source errors fire on the `<source>` nodes, not the element, so a
/// failure of the last candidate is re-raised on the element itself.
pub fn load_script(element_id: &str, track: &Track) -> String {
    format!(
        r#"const el = document.getElementById({id});
if (!el) {{ return; }}
el.replaceChildren();
let source = null;
for (const [src, type] of [[{primary}, "audio/mpeg"], [{fallback}, "audio/ogg"]]) {{
    source = document.createElement("source");
    source.src = src;
    source.type = type;
    el.appendChild(source);
}}
source.addEventListener("error", () => el.dispatchEvent(new Event("error")), {{ once: true }});
el.load();"#,
        id = js_string(element_id),
        primary = js_string(track.primary_source()),
        fallback = js_string(track.fallback_source()),
    )
}

/// Outcome of a play request as returned by [`play_script`].
async fn request_play(element_id: &'static str) -> Result<(), MediaError> {
    let eval = dioxus::document::eval(&play_script(element_id));
    match eval.join::<Option<String>>().await {
        Ok(None) => Ok(()),
        Ok(Some(reason)) => Err(MediaError::play_refused(reason)),
        Err(e) => Err(MediaError::bridge(format!("{e:?}"))),
    }
}

/// `<video id="intro-video">`
#[derive(Clone)]
pub struct EvalVideoPort {
    dispatcher: EventDispatcher,
}

impl EvalVideoPort {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self { dispatcher }
    }
}

impl VideoPort for EvalVideoPort {
    fn play(&self) {
        let dispatcher = self.dispatcher.clone();
        spawn_task(async move {
            let signal = match request_play(VIDEO_ELEMENT_ID).await {
                Ok(()) => VideoSignal::Started,
                Err(e) => VideoSignal::Failed(e),
            };
            dispatcher.send(ExperienceEvent::Video(signal));
        });
    }

    fn stop(&self) {
        run_script(pause_script(VIDEO_ELEMENT_ID));
    }
}

/// `<audio id="bg-music">`
#[derive(Clone)]
pub struct EvalAudioPort {
    dispatcher: EventDispatcher,
}

impl EvalAudioPort {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self { dispatcher }
    }
}

impl AudioPort for EvalAudioPort {
    fn load(&self, track: &Track) {
        run_script(load_script(AUDIO_ELEMENT_ID, track));
    }

    fn play(&self) {
        let dispatcher = self.dispatcher.clone();
        spawn_task(async move {
            let signal = match request_play(AUDIO_ELEMENT_ID).await {
                Ok(()) => AudioSignal::PlayStarted,
                Err(e) => AudioSignal::PlayRejected(e),
            };
            dispatcher.send(ExperienceEvent::Audio(signal));
        });
    }

    fn pause(&self) {
        run_script(pause_script(AUDIO_ELEMENT_ID));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_script_lists_both_sources_in_order() {
        let track = Track::new("music/a\"b.mp3", "music/a.ogg", "A");
        let js = load_script(AUDIO_ELEMENT_ID, &track);

        assert!(js.contains(r#"getElementById("bg-music")"#));
        let mp3 = js.find(r#""music/a\"b.mp3", "audio/mpeg""#).unwrap();
        let ogg = js.find(r#""music/a.ogg", "audio/ogg""#).unwrap();
        assert!(mp3 < ogg);
        assert!(js.trim_end().ends_with("el.load();"));
        assert!(js.contains(r#"el.dispatchEvent(new Event("error"))"#));
    }

    #[test]
    fn play_script_reports_rejection_reason() {
        let js = play_script(VIDEO_ELEMENT_ID);
        assert!(js.contains(r#"getElementById("intro-video")"#));
        assert!(js.contains("await el.play();"));
        assert!(js.contains("return null;"));
    }

    #[test]
    fn pause_script_guards_missing_element() {
        assert_eq!(
            pause_script(AUDIO_ELEMENT_ID),
            r#"const el = document.getElementById("bg-music"); if (el) { el.pause(); }"#
        );
    }
}
