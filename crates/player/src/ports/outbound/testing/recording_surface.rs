//! Surface fake that tracks what would be on screen

use std::cell::RefCell;
use std::collections::HashMap;

use keepsake_domain::{PlayState, SlideView};

use crate::ports::outbound::{LockIcon, Region, SurfacePort};

/// Every surface call, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Visible(Region, bool),
    Pin(String),
    Shake(bool),
    LockIcon(LockIcon),
    Slide(SlideView),
    AutoLoop(bool),
    Countdown(String),
    TrackInfo(String),
    PlayState(PlayState),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: RefCell<Vec<SurfaceCall>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Latest visibility per region, for regions that were ever set.
    pub fn visibility(&self) -> HashMap<Region, bool> {
        let mut regions = HashMap::new();
        for call in self.calls.borrow().iter() {
            if let SurfaceCall::Visible(region, visible) = call {
                regions.insert(*region, *visible);
            }
        }
        regions
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.visibility().get(&region).copied().unwrap_or(false)
    }

    pub fn pin(&self) -> Option<String> {
        self.last(|c| match c {
            SurfaceCall::Pin(mask) => Some(mask.clone()),
            _ => None,
        })
    }

    pub fn shaking(&self) -> bool {
        self.last(|c| match c {
            SurfaceCall::Shake(on) => Some(*on),
            _ => None,
        })
        .unwrap_or(false)
    }

    pub fn lock_icon(&self) -> LockIcon {
        self.last(|c| match c {
            SurfaceCall::LockIcon(icon) => Some(*icon),
            _ => None,
        })
        .unwrap_or_default()
    }

    pub fn slide(&self) -> Option<SlideView> {
        self.last(|c| match c {
            SurfaceCall::Slide(view) => Some(*view),
            _ => None,
        })
    }

    pub fn slides_shown(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Slide(_)))
            .count()
    }

    pub fn auto_loop(&self) -> Option<bool> {
        self.last(|c| match c {
            SurfaceCall::AutoLoop(on) => Some(*on),
            _ => None,
        })
    }

    pub fn countdown(&self) -> Option<String> {
        self.last(|c| match c {
            SurfaceCall::Countdown(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn track_info(&self) -> Option<String> {
        self.last(|c| match c {
            SurfaceCall::TrackInfo(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn play_state(&self) -> Option<PlayState> {
        self.last(|c| match c {
            SurfaceCall::PlayState(state) => Some(*state),
            _ => None,
        })
    }

    fn last<T>(&self, pick: impl Fn(&SurfaceCall) -> Option<T>) -> Option<T> {
        self.calls.borrow().iter().rev().find_map(pick)
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl SurfacePort for RecordingSurface {
    fn set_visible(&self, region: Region, visible: bool) {
        self.record(SurfaceCall::Visible(region, visible));
    }

    fn render_pin(&self, masked: &str) {
        self.record(SurfaceCall::Pin(masked.to_string()));
    }

    fn set_shake(&self, shaking: bool) {
        self.record(SurfaceCall::Shake(shaking));
    }

    fn set_lock_icon(&self, icon: LockIcon) {
        self.record(SurfaceCall::LockIcon(icon));
    }

    fn show_slide(&self, view: SlideView) {
        self.record(SurfaceCall::Slide(view));
    }

    fn set_auto_loop(&self, enabled: bool) {
        self.record(SurfaceCall::AutoLoop(enabled));
    }

    fn set_countdown(&self, text: &str) {
        self.record(SurfaceCall::Countdown(text.to_string()));
    }

    fn set_track_info(&self, text: &str) {
        self.record(SurfaceCall::TrackInfo(text.to_string()));
    }

    fn set_play_state(&self, state: PlayState) {
        self.record(SurfaceCall::PlayState(state));
    }
}
