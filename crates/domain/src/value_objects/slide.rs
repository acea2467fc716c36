//! Slideshow entry.

use serde::{Deserialize, Serialize};

/// Rendering data for one slide. Slides are identified by position only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub image: String,
    #[serde(default)]
    pub caption: String,
}

impl Slide {
    pub fn new(image: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            caption: caption.into(),
        }
    }
}
