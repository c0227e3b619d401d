/// Arrangement of a slide's content. Unknown values decode to [`LayoutType::Content`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Centered title with an optional subtitle.
    Title,
    /// Title plus bulleted list.
    #[default]
    Content,
    /// Pull quote.
    Quote,
    /// Value/label grid.
    Statistics,
    /// Ordered milestones.
    Timeline,
    /// Image-led slide.
    Image,
    /// Side-by-side comparison.
    Comparison,
    /// Closing slide with a tag cloud.
    Conclusion,
}

impl LayoutType {
    /// Map a wire name to a layout; unknown names become [`LayoutType::Content`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "title" => Self::Title,
            "quote" => Self::Quote,
            "statistics" => Self::Statistics,
            "timeline" => Self::Timeline,
            "image" => Self::Image,
            "comparison" => Self::Comparison,
            "conclusion" => Self::Conclusion,
            _ => Self::Content,
        }
    }
}

/// One slide as produced by the content service.
///
/// Rendering and assembly only ever borrow a slide; drivers may attach audio before assembly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Slide heading.
    pub title: String,
    /// Layout template.
    #[serde(default, deserialize_with = "layout_or_default")]
    pub layout_type: LayoutType,
    /// Bullet strings, in display order.
    #[serde(default)]
    pub bullets: Vec<String>,
    /// Narration text read aloud for this slide.
    #[serde(default)]
    pub speaker_notes: String,
    /// Flat background color (`#rrggbb`).
    #[serde(default = "default_background")]
    pub background_color: String,
    /// Text color (`#rrggbb`).
    #[serde(default = "default_text")]
    pub text_color: String,
    /// Accent color (`#rrggbb`).
    #[serde(default = "default_accent")]
    pub accent_color: String,
    /// Free-form CSS gradient; hex colors are extracted from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Raw markup override used by web front-ends; ignored by the raster renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    /// Embedded audio: a `data:` URL, bare base64, or a storage locator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Explicit slide duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Slide {
    /// Create a slide with the given title and default styling.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layout_type: LayoutType::default(),
            bullets: Vec::new(),
            speaker_notes: String::new(),
            background_color: default_background(),
            text_color: default_text(),
            accent_color: default_accent(),
            gradient: None,
            subtitle: None,
            description: None,
            image_url: None,
            icon: None,
            html_content: None,
            audio_url: None,
            duration: None,
        }
    }

    pub fn with_layout(mut self, layout: LayoutType) -> Self {
        self.layout_type = layout;
        self
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_speaker_notes(mut self, notes: impl Into<String>) -> Self {
        self.speaker_notes = notes.into();
        self
    }

    /// Number of whitespace-separated words in the narration text.
    pub fn narration_word_count(&self) -> usize {
        self.speaker_notes.split_whitespace().count()
    }

    /// Explicit duration, if one was declared and is usable (finite and positive).
    pub fn declared_duration(&self) -> Option<f64> {
        self.duration.filter(|d| d.is_finite() && *d > 0.0)
    }
}

/// Optional brand overlay applied to every slide.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandKit {
    /// Stamped uppercased as a watermark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Overrides each slide's accent color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

fn default_background() -> String {
    "#0a0a0f".to_string()
}

fn default_text() -> String {
    "#ffffff".to_string()
}

fn default_accent() -> String {
    "#ec4899".to_string()
}

// `null` is treated like an absent field.
fn layout_or_default<'de, D>(deserializer: D) -> Result<LayoutType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.as_deref().map(LayoutType::from_name).unwrap_or_default())
}
