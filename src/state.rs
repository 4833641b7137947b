use crate::data::filter::{matching_indices, FilterCriteria};
use crate::data::model::Dataset;
use crate::feedback::{FeedbackForm, FeedbackRecord};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session context, independent of rendering: the loaded dataset,
/// the current filter criteria, and the feedback form. Created fresh on
/// startup; the dataset and criteria are replaced wholesale on re-upload.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<Dataset>,

    /// Current filter selections.
    pub criteria: FilterCriteria,

    /// Indices of restaurants passing the current filters (cached).
    pub matching_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    /// In-progress feedback form.
    pub feedback: FeedbackForm,

    /// Last submitted feedback record, echoed back in the UI.
    pub submitted_feedback: Option<FeedbackRecord>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria::default(),
            matching_indices: Vec::new(),
            status_message: None,
            loading: false,
            feedback: FeedbackForm::default(),
            submitted_feedback: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, reset criteria to clamped defaults,
    /// and recompute the matches. Replaces any previous session dataset.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.criteria = FilterCriteria::for_dataset(&dataset);
        self.matching_indices = matching_indices(&dataset, &self.criteria);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `matching_indices` after a criteria change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.matching_indices = matching_indices(ds, &self.criteria);
        }
    }

    /// Submit the feedback form: snapshot it into a record for the echo.
    pub fn submit_feedback(&mut self) {
        self.submitted_feedback = Some(self.feedback.to_record());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Dataset, Restaurant};

    fn dataset() -> Dataset {
        Dataset::from_restaurants(vec![Restaurant {
            name: "A".to_string(),
            cuisines: "north indian".to_string(),
            cost_for_two: Some(300.0),
            rating: Some(4.2),
            votes: 10,
        }])
    }

    #[test]
    fn loading_a_dataset_resets_criteria_and_matches() {
        let mut state = AppState::default();
        state.criteria.min_rating = 5.0;
        state.status_message = Some("Error: old failure".to_string());

        state.set_dataset(dataset());

        assert_eq!(state.criteria.cuisine.as_deref(), Some("north indian"));
        // Defaults clamp to the dataset's max cost of 300.
        assert_eq!(state.criteria.cost_range, (100, 300));
        assert_eq!(state.matching_indices, vec![0]);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn refilter_tracks_criteria_changes() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.criteria.min_rating = 4.5;
        state.refilter();
        assert!(state.matching_indices.is_empty());

        state.criteria.min_rating = 4.0;
        state.refilter();
        assert_eq!(state.matching_indices, vec![0]);
    }

    #[test]
    fn submitting_feedback_snapshots_the_form() {
        let mut state = AppState::default();
        state.feedback.satisfaction = 5;
        state.submit_feedback();
        let record = state.submitted_feedback.as_ref().unwrap();
        assert_eq!(record.satisfaction_score, 5);
    }
}
