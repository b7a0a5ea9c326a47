use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::data::export::export_csv;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the loop.
    let products = dataset.products.clone();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Product selection ----
            let n_selected = state.criteria.products.len();
            ui.strong(format!("Products  ({n_selected}/{})", products.len()));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_products();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_products();
                }
            });

            for product in &products {
                let mut checked = state.criteria.products.contains(product);
                let swatch = state.colors.color_for(product);
                let text = RichText::new(product).color(swatch);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_product(product);
                }
            }

            ui.separator();

            // ---- Date range ----
            ui.strong("Date range");
            match &mut state.criteria.range {
                Some(range) => {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.label("From");
                        if ui
                            .add(DatePickerButton::new(&mut range.start).id_salt("range_start"))
                            .changed()
                        {
                            changed = true;
                        }
                    });
                    ui.horizontal(|ui: &mut Ui| {
                        ui.label("To");
                        if ui
                            .add(DatePickerButton::new(&mut range.end).id_salt("range_end"))
                            .changed()
                        {
                            changed = true;
                        }
                    });
                }
                None => {
                    ui.label("No parseable dates in this file.");
                }
            }

            ui.separator();

            // ---- Export ----
            if ui.button("Download filtered data (.csv)").clicked() {
                save_filtered_csv(state);
            }
        });

    if changed {
        state.recompute();
    }
}

// ---------------------------------------------------------------------------
// Central panel – summary table and metric
// ---------------------------------------------------------------------------

/// Render the filtered-rows table with the total-revenue metric above it.
pub fn summary_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.heading("Summary");
    ui.label(
        RichText::new(format!("Total Revenue: {:.2}", state.summary.total))
            .size(18.0)
            .strong(),
    );
    ui.add_space(4.0);

    ScrollArea::vertical()
        .id_salt("summary_table")
        .max_height(220.0)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("filtered_rows")
                .striped(true)
                .min_col_width(70.0)
                .show(ui, |ui: &mut Ui| {
                    for col in &dataset.columns {
                        ui.strong(col);
                    }
                    ui.strong("Revenue");
                    ui.end_row();

                    for &i in &state.visible_indices {
                        let r = &dataset.records[i];
                        for col in &dataset.columns {
                            match col.as_str() {
                                "Date" => {
                                    let text = r
                                        .date
                                        .map(|d| d.format("%Y-%m-%d").to_string())
                                        .unwrap_or_else(|| "—".to_string());
                                    ui.label(text);
                                }
                                "Product" => {
                                    ui.label(&r.product);
                                }
                                "Quantity" => {
                                    ui.label(r.quantity.to_string());
                                }
                                "Price" => {
                                    ui.label(format!("{:.2}", r.price));
                                }
                                other => {
                                    let pos = dataset
                                        .extra_columns
                                        .iter()
                                        .position(|c| c == other);
                                    let text = pos
                                        .and_then(|p| r.extras.get(p))
                                        .map(String::as_str)
                                        .unwrap_or("");
                                    ui.label(text);
                                }
                            }
                        }
                        ui.label(format!("{:.2}", r.revenue));
                        ui.end_row();
                    }
                });
        });
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
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sales data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

fn save_filtered_csv(state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let target = rfd::FileDialog::new()
        .set_title("Save filtered data")
        .set_file_name("filtered_sales.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = target {
        let result = export_csv(dataset, &state.visible_indices)
            .and_then(|bytes| std::fs::write(&path, bytes).map_err(Into::into));
        match result {
            Ok(()) => log::info!(
                "exported {} filtered rows to {}",
                state.visible_indices.len(),
                path.display()
            ),
            Err(e) => log::error!("export failed: {e:#}"),
        }
    }
}
