use eframe::egui::{self, Color32, RichText, Slider, Ui};

use spectrum_broadener::IngestMode;

use crate::state::{AppState, StatusLevel};

// ---------------------------------------------------------------------------
// Left side panel – transform controls
// ---------------------------------------------------------------------------

/// Render the parameter controls. Any change re-runs the pipeline.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Broadening");
    ui.separator();

    let loaded = state.store.is_loaded();
    if !loaded {
        ui.label("No spectrum loaded.");
    }

    let mut changed = ui
        .add_enabled_ui(loaded, |ui: &mut Ui| {
            let params = &mut state.params;
            let bounds = &state.bounds;
            let mut changed = false;

            changed |= ui
                .add(
                    Slider::new(&mut params.fwhm, bounds.fwhm.clone())
                        .step_by(0.1)
                        .text("FWHM"),
                )
                .changed();
            changed |= ui
                .add(
                    Slider::new(&mut params.max_energy, bounds.max_energy.clone())
                        .step_by(1.0)
                        .text("Max Energy"),
                )
                .changed();
            changed |= ui
                .add(
                    Slider::new(&mut params.shift, bounds.shift.clone())
                        .step_by(1.0)
                        .text("Energy Shift"),
                )
                .changed();
            changed
        })
        .inner;

    ui.separator();
    ui.strong("Components");

    let components = state.components_available();
    changed |= ui
        .add_enabled(components, egui::Checkbox::new(&mut state.params.show_fc, "Show FC"))
        .changed();
    changed |= ui
        .add_enabled(components, egui::Checkbox::new(&mut state.params.show_ht, "Show HT"))
        .changed();

    if changed {
        state.on_parameter_changed();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.store.is_loaded(), egui::Button::new("Save…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label("Format:");
        egui::ComboBox::from_id_salt("ingest_mode")
            .selected_text(state.mode.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for mode in IngestMode::ALL {
                    ui.selectable_value(&mut state.mode, mode, mode.to_string());
                }
            });

        ui.separator();

        if let Some(result) = &state.result {
            ui.label(format!(
                "{} samples loaded, {} shown",
                state.store.current().len(),
                result.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let text = RichText::new(&msg.text);
            let text = match msg.level {
                StatusLevel::Error => text.color(Color32::RED),
                StatusLevel::Info => text,
            };
            ui.label(text);
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open spectrum table")
        .pick_file();

    match file {
        Some(path) => state.load_path(&path),
        None => state.open_cancelled(),
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save convolved spectrum")
        .add_filter("CSV files", &["csv"])
        .set_file_name("convolved_spectrum.csv")
        .save_file();

    match file {
        Some(mut path) => {
            if path.extension().is_none() {
                path.set_extension("csv");
            }
            state.export_to(&path);
        }
        None => log::info!("Save cancelled"),
    }
}
