use std::path::{Path, PathBuf};

use eframe::egui;
use egui::Layout;
use tracing::warn;

use crate::engine::llm_client::OpenAiClient;
use crate::model::message::{ChatMessage, Role};
use crate::model::session::Session;
use crate::ui::center_panel::draw_center_panel;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::logo::load_logo;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io::load_settings;

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub(super) struct UiState {
    pub(super) input_text: String,
    pub(super) last_error: Option<String>,
    pub(super) connection_status: Option<String>,
    pub(super) should_auto_scroll: bool,
    pub(super) dataset_path: PathBuf,
}

pub(super) struct Logo {
    pub(super) texture: Option<egui::TextureHandle>,
    pub(super) file_name: String,
}

/* =========================
   App
   ========================= */

pub struct TravelApp {
    pub(super) session: Session,
    pub(super) client: OpenAiClient,
    pub(super) settings: UiSettings,
    pub(super) logo: Logo,
    pub(super) ui: UiState,
}

impl TravelApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        session: Session,
        client: OpenAiClient,
        logo_path: &Path,
        dataset_path: PathBuf,
    ) -> Self {
        let texture = match load_logo(logo_path) {
            Ok(img) => Some(cc.egui_ctx.load_texture("logo", img, egui::TextureOptions::default())),
            Err(e) => {
                warn!(path = %logo_path.display(), error = %e, "logo unavailable");
                None
            }
        };

        Self {
            session,
            client,
            settings: load_settings(),
            logo: Logo {
                texture,
                file_name: logo_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            },
            ui: UiState {
                dataset_path,
                ..Default::default()
            },
        }
    }

    pub(super) fn draw_message(&self, ui: &mut egui::Ui, msg: &ChatMessage) {
        let (right, text) = match msg.role {
            Role::User => (true, format!("You: {}", msg.content)),
            Role::Assistant => (false, msg.content.clone()),
            Role::System => return,
        };
        let bg = self.settings.color(msg.role);

        ui.add_space(6.0);

        if right {
            ui.with_layout(Layout::right_to_left(egui::Align::TOP), |ui| {
                bubble(ui, bg, &text);
            });
        } else {
            bubble(ui, bg, &text);
        }
    }
}

impl Drop for TravelApp {
    fn drop(&mut self) {
        self.session.close();
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for TravelApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        if self.session.condition().hide_controls {
            draw_top_logo(ctx, &self.logo);
        } else {
            draw_left_panel(ctx, self);
        }

        draw_center_panel(ctx, self);

        self.ui.should_auto_scroll = false;
    }
}

/* =========================
   UI Helpers
   ========================= */

/// Participant mode: no side panel, logo above the chat. A missing logo
/// is simply left out.
fn draw_top_logo(ctx: &egui::Context, logo: &Logo) {
    let Some(texture) = &logo.texture else {
        return;
    };

    egui::TopBottomPanel::top("logo").show(ctx, |ui| {
        ui.add(egui::Image::from_texture(texture).max_height(48.0));
    });
}

fn bubble(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
        });
}
