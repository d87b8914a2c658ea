//! On-brand generation backed by the Gemini API.

pub mod gemini;
pub mod studio;

pub use gemini::GeminiClient;

use clap::ValueEnum;

/// Output size for generated renders. Always 16:9.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Resolution {
    #[default]
    #[value(name = "1k")]
    OneK,
    #[value(name = "2k")]
    TwoK,
    #[value(name = "4k")]
    FourK,
}

impl Resolution {
    pub fn all() -> &'static [Resolution] {
        &[Resolution::OneK, Resolution::TwoK, Resolution::FourK]
    }

    /// Value of `imageConfig.imageSize` in the request.
    pub fn image_size(&self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CopyKind {
    Email,
    #[default]
    Social,
    Description,
}

impl CopyKind {
    pub fn all() -> &'static [CopyKind] {
        &[CopyKind::Social, CopyKind::Email, CopyKind::Description]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Social => "social",
            Self::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Client Email",
            Self::Social => "Instagram Caption",
            Self::Description => "Project Description",
        }
    }
}

pub const ASPECT_RATIO: &str = "16:9";
pub const THINKING_BUDGET: u32 = 32768;
pub const EMPTY_COPY_FALLBACK: &str = "Could not generate text.";

/// Wrap a subject in the studio's architectural render direction.
pub fn enhance_image_prompt(subject: &str) -> String {
    format!(
        "Architectural render, photorealistic, cinematic lighting.\n\
         Style: Modern minimal, clean lines, precise geometry, warm minimalism.\n\
         Materials: Concrete, stone, wood, matte finishes.\n\
         Lighting: Soft morning or afternoon light, warm tones (3000K), clear highlights, soft intentional shadows.\n\
         Composition: Symmetrical or rule of thirds, straight architectural lines.\n\
         Subject: {}.\n\
         No clutter, no noise, high contrast.",
        subject.trim()
    )
}

/// System instruction carrying the brand voice for copy generation.
pub fn brand_voice_instruction(topic: &str, kind: CopyKind) -> String {
    format!(
        "You are the Brand Director for OAStudio (Origin Architecture Studio).\n\
         \n\
         BRAND VOICE & TONE:\n\
         - Primary Tone: Architectural-Tech Minimalism (Confident, Intelligent, Precise, Modern, Minimal).\n\
         - Secondary Tone: Warm Professionalism (Bold, Structured, Human).\n\
         \n\
         DO:\n\
         - Speak with clarity and confidence.\n\
         - Use short sentences and powerful statements.\n\
         - Use architectural language (space, proportion, light, structure, flow).\n\
         - Speak with intention. No unnecessary words.\n\
         \n\
         DON'T:\n\
         - Don't over-explain.\n\
         - Don't use emotional exaggeration (\"amazing\", \"super\").\n\
         - Don't sound corporate or bureaucratic.\n\
         - Don't talk too much. Silence and simplicity = premium.\n\
         \n\
         VOCABULARY:\n\
         Clarity, Proportion, Minimal, Refined, Structure, Flow, Materiality, Geometry, Function.\n\
         \n\
         Task: Write a {} about: {}.",
        kind.name(),
        topic.trim()
    )
}
