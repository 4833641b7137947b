use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::present::Listing;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results list (central panel)
// ---------------------------------------------------------------------------

/// Render the matching restaurants in the central panel, in original
/// dataset order.
pub fn results_panel(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a restaurant CSV to get started  (File → Open…)");
            });
            return;
        }
    };

    ui.heading(format!("🍴 {} Restaurants Found", state.matching_indices.len()));
    ui.add_space(4.0);

    if state.matching_indices.is_empty() {
        // Explicit zero-match notice, never a silently empty list.
        ui.label(
            RichText::new("No restaurants match your criteria.")
                .color(Color32::from_rgb(0xb0, 0x8a, 0x00))
                .strong(),
        );
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for &idx in &state.matching_indices {
                let listing = Listing::from_restaurant(&dataset.restaurants[idx]);
                listing_card(ui, &listing);
            }
        });
}

fn listing_card(ui: &mut Ui, listing: &Listing) {
    ui.separator();
    ui.heading(&listing.name);
    ui.label(format!("Cuisine: {}", listing.cuisine));
    ui.label(format!("Cost for Two: {}", listing.cost_label));
    ui.label(format!("Rating: {} ⭐", listing.rating_label));
    ui.hyperlink_to("📍 View on Google Maps", &listing.maps_url);
    ui.add_space(6.0);
}
