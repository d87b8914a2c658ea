use anyhow::Result;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use super::{CopyKind, GeminiClient, Resolution};
use crate::theme::Theme;

/// A request running on a worker thread.
struct Job<T> {
    rx: Receiver<Result<T>>,
}

impl<T: Send + 'static> Job<T> {
    fn spawn(ctx: &egui::Context, work: impl FnOnce() -> Result<T> + Send + 'static) -> Self {
        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(work());
            ctx.request_repaint();
        });
        Self { rx }
    }

    fn poll(&self) -> Option<Result<T>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(anyhow::anyhow!("Request worker stopped"))),
        }
    }
}

#[derive(Default)]
struct ImagePanel {
    prompt: String,
    resolution: Resolution,
    pending: Option<Job<Vec<u8>>>,
    bytes: Option<Vec<u8>>,
    texture: Option<egui::TextureHandle>,
}

impl ImagePanel {
    fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn can_generate(&self) -> bool {
        !self.is_loading() && !self.prompt.trim().is_empty()
    }
}

#[derive(Default)]
struct CopyPanel {
    topic: String,
    kind: CopyKind,
    pending: Option<Job<String>>,
    output: Option<String>,
}

impl CopyPanel {
    fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn can_generate(&self) -> bool {
        !self.is_loading() && !self.topic.trim().is_empty()
    }
}

/// The floating window holding the image and copy generators.
pub struct AiStudio {
    pub open: bool,
    client: Option<GeminiClient>,
    image: ImagePanel,
    copy: CopyPanel,
}

impl AiStudio {
    pub fn new(client: Option<GeminiClient>) -> Self {
        Self {
            open: false,
            client,
            image: ImagePanel::default(),
            copy: CopyPanel::default(),
        }
    }

    pub fn has_key(&self) -> bool {
        self.client.is_some()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_busy(&self) -> bool {
        self.image.is_loading() || self.copy.is_loading()
    }

    fn start_image(&mut self, ctx: &egui::Context) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let prompt = self.image.prompt.clone();
        let resolution = self.image.resolution;
        self.image.pending = Some(Job::spawn(ctx, move || {
            client.generate_image(&prompt, resolution)
        }));
    }

    fn start_copy(&mut self, ctx: &egui::Context) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let topic = self.copy.topic.clone();
        let kind = self.copy.kind;
        self.copy.output = None;
        self.copy.pending = Some(Job::spawn(ctx, move || client.generate_copy(&topic, kind)));
    }

    /// Collect finished requests. Returns messages to surface as toasts.
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<String> {
        let mut notices = Vec::new();

        if let Some(result) = self.image.pending.as_ref().and_then(Job::poll) {
            self.image.pending = None;
            match result.and_then(|bytes| decode_texture(ctx, &bytes).map(|tex| (bytes, tex))) {
                Ok((bytes, texture)) => {
                    tracing::info!(bytes = bytes.len(), "image ready");
                    self.image.bytes = Some(bytes);
                    self.image.texture = Some(texture);
                }
                Err(e) => {
                    tracing::warn!("image generation failed: {e:#}");
                    notices.push("Failed to generate image. Please try again.".to_string());
                }
            }
        }

        if let Some(result) = self.copy.pending.as_ref().and_then(Job::poll) {
            self.copy.pending = None;
            match result {
                Ok(text) => {
                    tracing::info!(chars = text.len(), "copy ready");
                    self.copy.output = Some(text);
                }
                Err(e) => {
                    tracing::warn!("copy generation failed: {e:#}");
                    notices.push("Error generating content.".to_string());
                }
            }
        }

        notices
    }

    /// Draw the studio window. Returns messages to surface as toasts.
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Vec<String> {
        let mut notices = Vec::new();
        if !self.open {
            return notices;
        }

        let mut open = self.open;
        egui::Window::new("AI Studio")
            .open(&mut open)
            .default_width(520.0)
            .resizable(true)
            .collapsible(false)
            .show(ctx, |ui| {
                if !self.has_key() {
                    ui.colored_label(
                        theme.accent,
                        "No API key found. Run `brandeck ai init` or set GEMINI_API_KEY.",
                    );
                    ui.add_space(8.0);
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.image_section(ui, theme, &mut notices);
                    ui.separator();
                    self.copy_section(ui, theme, &mut notices);
                });
            });
        self.open = open;

        notices
    }

    fn image_section(&mut self, ui: &mut egui::Ui, theme: &Theme, notices: &mut Vec<String>) {
        ui.label(egui::RichText::new("IMAGE GENERATION").color(theme.accent).strong());
        ui.add(
            egui::TextEdit::multiline(&mut self.image.prompt)
                .hint_text("Describe the space...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            for resolution in Resolution::all() {
                ui.selectable_value(
                    &mut self.image.resolution,
                    *resolution,
                    resolution.image_size(),
                );
            }
            ui.add_space(12.0);
            let enabled = self.has_key() && self.image.can_generate();
            if ui
                .add_enabled(enabled, egui::Button::new("Generate Render"))
                .clicked()
            {
                self.start_image(ui.ctx());
            }
            if self.image.is_loading() {
                ui.spinner();
            }
        });

        if let Some(texture) = &self.image.texture {
            ui.add_space(8.0);
            ui.add(egui::Image::new(texture).max_width(ui.available_width()));
            if let Some(bytes) = &self.image.bytes {
                if ui.button("Save").clicked() {
                    match save_render(bytes) {
                        Ok(path) => notices.push(format!("Saved {}", path.display())),
                        Err(e) => notices.push(format!("Save failed: {e}")),
                    }
                }
            }
        }
    }

    fn copy_section(&mut self, ui: &mut egui::Ui, theme: &Theme, notices: &mut Vec<String>) {
        ui.label(egui::RichText::new("COPYWRITER").color(theme.accent).strong());

        egui::ComboBox::from_id_salt("copy-kind")
            .selected_text(self.copy.kind.label())
            .show_ui(ui, |ui| {
                for kind in CopyKind::all() {
                    ui.selectable_value(&mut self.copy.kind, *kind, kind.label());
                }
            });

        ui.add(
            egui::TextEdit::singleline(&mut self.copy.topic)
                .hint_text("e.g. Launch of the Brutalist Sea Villa...")
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            let enabled = self.has_key() && self.copy.can_generate();
            if ui
                .add_enabled(enabled, egui::Button::new("Draft Copy"))
                .clicked()
            {
                self.start_copy(ui.ctx());
            }
            if self.copy.is_loading() {
                ui.spinner();
            }
        });

        if let Some(text) = &self.copy.output {
            ui.add_space(8.0);
            ui.label(text.as_str());
            if ui.button("Copy").clicked() {
                ui.ctx().copy_text(text.clone());
                notices.push("Copied to clipboard".to_string());
            }
        }
    }
}

fn decode_texture(ctx: &egui::Context, bytes: &[u8]) -> Result<egui::TextureHandle> {
    let rgba = image::load_from_memory(bytes)?.into_rgba8();
    let (w, h) = rgba.dimensions();
    let color_image =
        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw());
    Ok(ctx.load_texture("ai-render", color_image, egui::TextureOptions::LINEAR))
}

/// Write a render next to the user's pictures, named by timestamp.
fn save_render(bytes: &[u8]) -> Result<PathBuf> {
    let dir = dirs::picture_dir().unwrap_or_else(|| PathBuf::from("."));
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let path = dir.join(format!("oastudio-render-{stamp}.{}", image_extension(bytes)));
    std::fs::write(&path, bytes)?;
    Ok(path)
}

pub(crate) fn image_extension(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or("png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn wait<T: Send + 'static>(job: &Job<T>) -> Result<T> {
        for _ in 0..200 {
            if let Some(result) = job.poll() {
                return result;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("job did not finish");
    }

    #[test]
    fn test_job_delivers_result() {
        let ctx = egui::Context::default();
        let job = Job::spawn(&ctx, || Ok(21 * 2));
        assert_eq!(wait(&job).unwrap(), 42);
    }

    #[test]
    fn test_job_delivers_error() {
        let ctx = egui::Context::default();
        let job: Job<()> = Job::spawn(&ctx, || anyhow::bail!("quota exceeded"));
        assert!(wait(&job).unwrap_err().to_string().contains("quota"));
    }

    #[test]
    fn test_generate_needs_prompt() {
        let mut panel = ImagePanel::default();
        assert!(!panel.can_generate());
        panel.prompt = "   ".to_string();
        assert!(!panel.can_generate());
        panel.prompt = "glass atrium".to_string();
        assert!(panel.can_generate());
    }

    #[test]
    fn test_studio_without_key() {
        let mut studio = AiStudio::new(None);
        assert!(!studio.has_key());
        assert!(!studio.is_busy());
        studio.toggle();
        assert!(studio.open);

        // Starting without a client is a no-op
        let ctx = egui::Context::default();
        studio.copy.topic = "opening".to_string();
        studio.start_copy(&ctx);
        assert!(!studio.copy.is_loading());
    }

    #[test]
    fn test_image_extension_sniffing() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(image_extension(&png), "png");
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(image_extension(&jpeg), "jpg");
        assert_eq!(image_extension(b"unknown"), "png");
    }
}
