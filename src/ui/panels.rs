use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: cuisine selector, cost range, rating floor.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Preferences");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the domains so we can mutate criteria inside the widgets.
    let cuisine_options = dataset.cuisine_options.clone();
    let max_cost = dataset.max_cost;

    // ---- Cuisine selector ----
    ui.strong("Cuisine");
    let current = state.criteria.cuisine.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("cuisine_select")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &cuisine_options {
                if ui.selectable_label(current == *option, option).clicked() {
                    state.criteria.cuisine = Some(option.clone());
                }
            }
        });
    ui.add_space(8.0);

    // ---- Cost range (two coupled sliders, lo <= hi) ----
    ui.strong("Average Cost for Two");
    let (mut lo, mut hi) = state.criteria.cost_range;
    if ui
        .add(Slider::new(&mut lo, 0..=max_cost).text("min"))
        .changed()
    {
        hi = hi.max(lo);
    }
    if ui
        .add(Slider::new(&mut hi, 0..=max_cost).text("max"))
        .changed()
    {
        lo = lo.min(hi);
    }
    state.criteria.cost_range = (lo, hi);
    ui.add_space(8.0);

    // ---- Minimum rating ----
    ui.strong("Minimum Rating");
    ui.add(
        Slider::new(&mut state.criteria.min_rating, 0.0..=5.0)
            .step_by(0.1)
            .fixed_decimals(1),
    );

    // Recompute matches after any widget change.
    state.refilter();
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
                "{} restaurants loaded, {} matching",
                ds.len(),
                state.matching_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Open a native file dialog and load the picked CSV. A failed load leaves
/// the previously loaded dataset untouched.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open restaurant data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} restaurants, {} cuisine options, max cost {}",
                    dataset.len(),
                    dataset.cuisine_options.len(),
                    dataset.max_cost
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}
