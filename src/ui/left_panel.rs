use eframe::egui;

use crate::model::condition::{AttributeFilter, InteractionStyle};
use crate::model::message::Role;
use crate::model::travel::load_dataset;
use crate::ui::settings_io::save_settings;

use super::app::TravelApp;

/// Researcher controls. Widgets write straight into a copy of the active
/// condition, which the session only acts on when it actually differs.
pub fn draw_left_panel(ctx: &egui::Context, app: &mut TravelApp) {
    egui::SidePanel::left("researcher")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            match &app.logo.texture {
                Some(texture) => {
                    ui.add(egui::Image::from_texture(texture).max_width(ui.available_width()));
                    ui.label("Fitlab");
                }
                None => {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!("Logo ({}) missing", app.logo.file_name),
                    );
                }
            }

            ui.heading("🔬 Researcher settings");
            ui.label(format!("Group: {}", app.session.group()));
            ui.separator();

            let mut condition = app.session.condition();

            ui.checkbox(&mut condition.use_grounding, "Use ontology data");

            ui.label("Information attribute");
            for filter in AttributeFilter::ALL {
                ui.radio_value(&mut condition.attribute_filter, filter, filter.label());
            }

            ui.label("Interaction");
            for style in InteractionStyle::ALL {
                ui.radio_value(&mut condition.interaction_style, style, style.label());
            }

            app.session.set_condition(condition);

            if ui.button("Reset conversation").clicked() {
                app.session.reset_conversation();
                app.ui.last_error = None;
            }

            ui.separator();

            /* -------- Dataset -------- */

            ui.label(format!(
                "Dataset: {} ({} entries)",
                app.ui.dataset_path.display(),
                app.session.dataset().len()
            ));
            if ui.button("Load dataset…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .pick_file()
                {
                    app.session.replace_dataset(load_dataset(&path));
                    app.ui.dataset_path = path;
                }
            }

            /* -------- Connection -------- */

            ui.label(format!("Model: {}", app.client.model()));
            if ui.button("Test connection").clicked() {
                app.ui.connection_status = Some(match app.client.test_connection() {
                    Ok(status) => status,
                    Err(e) => format!("Connection failed: {e}"),
                });
            }
            if let Some(status) = &app.ui.connection_status {
                ui.label(status);
            }

            ui.separator();

            /* -------- Appearance -------- */

            ui.label("UI Scale");
            let mut changed = ui
                .add(egui::Slider::new(&mut app.settings.ui_scale, 0.75..=2.0))
                .changed();

            ui.collapsing("Bubble colours", |ui| {
                for (role, label) in [(Role::User, "You"), (Role::Assistant, "Guide")] {
                    let mut color = app.settings.color(role);
                    ui.horizontal(|ui| {
                        ui.label(label);
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            app.settings.set_color(role, color);
                            changed = true;
                        }
                    });
                }
            });

            if changed {
                save_settings(&app.settings);
            }
        });
}
