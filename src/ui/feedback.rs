use eframe::egui::{Color32, RichText, Slider, Ui};

use crate::feedback::StrategyVariant;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Feedback panel (bottom) – evaluation form + JSON echo
// ---------------------------------------------------------------------------

/// Render the evaluation form. Submitting echoes the record back as JSON;
/// nothing is persisted.
pub fn feedback_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("📝 Evaluation");

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Strategy:");
        for variant in StrategyVariant::ALL {
            ui.radio_value(&mut state.feedback.variant, variant, variant.label());
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Satisfaction:");
        ui.add(Slider::new(&mut state.feedback.satisfaction, 1..=5));
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Were the recommendations relevant?");
        ui.radio_value(&mut state.feedback.relevant, true, "Yes");
        ui.radio_value(&mut state.feedback.relevant, false, "No");
    });

    ui.label("Usability feedback:");
    ui.text_edit_multiline(&mut state.feedback.comment);

    if ui.button("Submit Feedback").clicked() {
        state.submit_feedback();
    }

    if let Some(record) = &state.submitted_feedback {
        ui.label(
            RichText::new("✅ Thank you for your feedback!").color(Color32::DARK_GREEN),
        );
        ui.code(record.to_pretty_json());
    }
}
