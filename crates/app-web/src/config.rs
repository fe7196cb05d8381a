// Scene configuration produced by the UI layer and consumed by the frame
// loop. Pure Rust (also included by the host-side test suite).

/// Which shape the particle field forms. The set is closed; matching is
/// exhaustive everywhere it is consumed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayMode {
    Heart,
    Text,
    Image,
}

impl DisplayMode {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "heart" => Some(Self::Heart),
            "text" => Some(Self::Text),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

/// The configuration value handed over by the UI chrome. Any change to any
/// field requires a full resample.
#[derive(Clone, PartialEq, Debug)]
pub struct SceneConfig {
    pub mode: DisplayMode,
    pub theme_id: String,
    pub text: String,
    pub image_url: Option<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Heart,
            theme_id: "love".to_string(),
            text: String::new(),
            image_url: None,
        }
    }
}

/// Live config plus a dirty flag. Actual changes request a resample; equal
/// assignments do not.
#[derive(Default)]
pub struct ConfigCell {
    config: SceneConfig,
    dirty: bool,
}

impl ConfigCell {
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        if self.config.mode != mode {
            self.config.mode = mode;
            self.dirty = true;
        }
    }

    pub fn set_theme_id(&mut self, id: &str) {
        if self.config.theme_id != id {
            self.config.theme_id = id.to_string();
            self.dirty = true;
        }
    }

    pub fn set_text(&mut self, text: &str) {
        if self.config.text != text {
            self.config.text = text.to_string();
            self.dirty = true;
        }
    }

    pub fn set_image_url(&mut self, url: Option<String>) {
        if self.config.image_url != url {
            self.config.image_url = url;
            self.dirty = true;
        }
    }

    /// One resample per change burst: true once after any dirtying, then
    /// false until the next change.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
