use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing::error;

use travel_cocreator::config::{load_secrets_from_env, LaunchArgs};
use travel_cocreator::engine::llm_client::OpenAiClient;
use travel_cocreator::logging;
use travel_cocreator::model::condition::{resolve_group, DEFAULT_GROUP};
use travel_cocreator::model::session::Session;
use travel_cocreator::model::travel::load_dataset;
use travel_cocreator::ui::app::TravelApp;

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = LaunchArgs::parse();

    let secrets = match load_secrets_from_env(&args.secrets) {
        Ok(secrets) => secrets,
        Err(e) => {
            error!(error = %e, "API credential missing, refusing to start");
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("Travel Co-Creator")
                .set_description(e.dialog_text())
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
            return Err(e).context("cannot start without an API credential");
        }
    };

    let group = args.group_tag();
    let condition = resolve_group(group.as_deref());
    let dataset = load_dataset(&args.data);

    let session = Session::new(
        group.unwrap_or_else(|| DEFAULT_GROUP.to_string()),
        condition,
        dataset,
    );
    let client = OpenAiClient::new(&args.api_base, &args.model, secrets.api_key().to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };

    let logo = args.logo.clone();
    let data = args.data.clone();

    eframe::run_native(
        "Travel Co-Creator",
        options,
        Box::new(move |cc| {
            Ok(Box::new(TravelApp::new(cc, session, client, &logo, data)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window closed with an error: {e}"))
}
