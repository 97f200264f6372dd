use eframe::egui;

use super::app::TravelApp;

pub fn draw_center_panel(ctx: &egui::Context, app: &mut TravelApp) {
    match app.session.selected_city().map(str::to_string) {
        None => draw_city_picker(ctx, app),
        Some(city) => draw_chat(ctx, app, &city),
    }
}

fn draw_city_picker(ctx: &egui::Context, app: &mut TravelApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("✈️ My Travel Co-Creator");
        ui.add_space(8.0);
        ui.label("Pick the destination you'd like to visit");
        ui.add_space(8.0);

        let cities: Vec<String> = app
            .session
            .picker_cities()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut picked: Option<&str> = None;

        egui::Grid::new("city_grid").spacing([8.0, 8.0]).show(ui, |ui| {
            for (i, city) in cities.iter().enumerate() {
                if ui.add_sized([160.0, 36.0], egui::Button::new(city.as_str())).clicked() {
                    picked = Some(city.as_str());
                }
                if i % 4 == 3 {
                    ui.end_row();
                }
            }
        });

        if let Some(city) = picked {
            app.session.select_city(city);
            app.ui.last_error = None;
        }
    });
}

fn draw_chat(ctx: &egui::Context, app: &mut TravelApp, city: &str) {
    let input_id = egui::Id::new("chat_input_box");

    // ---------- Input bar ----------
    egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
        let mut send_now = false;

        ui.horizontal(|ui| {
            let response = ui.add_sized(
                [ui.available_width() - 60.0, 36.0],
                egui::TextEdit::singleline(&mut app.ui.input_text)
                    .id(input_id)
                    .hint_text("Ask me anything about the trip!"),
            );

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                send_now = true;
            }

            if ui.button("Send").clicked() {
                send_now = true;
            }
        });

        if send_now {
            let text = app.ui.input_text.trim().to_string();

            if !text.is_empty() {
                app.ui.input_text.clear();

                // Blocks the frame until the service answers.
                app.ui.last_error = app
                    .session
                    .submit(&text, &app.client)
                    .err()
                    .map(|e| format!("Error: {e}"));
                app.ui.should_auto_scroll = true;
            }

            ui.memory_mut(|m| m.request_focus(input_id));
        }
    });

    // ---------- Header + history ----------
    let mut change_city = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("Selected city: {city}")).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Change city").clicked() {
                    change_city = true;
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .stick_to_bottom(app.ui.should_auto_scroll)
            .show(ui, |ui| {
                if let Some(conversation) = app.session.conversation() {
                    for msg in conversation.visible() {
                        app.draw_message(ui, msg);
                    }
                }

                if let Some(err) = &app.ui.last_error {
                    ui.add_space(6.0);
                    ui.colored_label(egui::Color32::RED, err);
                }
            });
    });

    if change_city {
        app.session.change_city();
        app.ui.last_error = None;
    }
}
