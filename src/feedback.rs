use serde::Serialize;

// ---------------------------------------------------------------------------
// Recommendation-strategy variants (A/B evaluation)
// ---------------------------------------------------------------------------

/// Which recommendation strategy the user is evaluating. Two fixed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrategyVariant {
    BasicFiltering,
    AlternateRanking,
}

impl StrategyVariant {
    pub const ALL: [StrategyVariant; 2] =
        [StrategyVariant::BasicFiltering, StrategyVariant::AlternateRanking];

    pub fn label(self) -> &'static str {
        match self {
            StrategyVariant::BasicFiltering => "Strategy A: Basic Filtering",
            StrategyVariant::AlternateRanking => "Strategy B: Alternate Ranking",
        }
    }
}

// ---------------------------------------------------------------------------
// Feedback form and record
// ---------------------------------------------------------------------------

/// In-progress feedback form state.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackForm {
    pub variant: StrategyVariant,
    /// Satisfaction score on a 1–5 Likert scale.
    pub satisfaction: u8,
    /// Did the recommendations seem relevant?
    pub relevant: bool,
    /// Free-text usability comment.
    pub comment: String,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        FeedbackForm {
            variant: StrategyVariant::BasicFiltering,
            satisfaction: 3,
            relevant: true,
            comment: String::new(),
        }
    }
}

impl FeedbackForm {
    /// Snapshot the form into a submittable record.
    pub fn to_record(&self) -> FeedbackRecord {
        FeedbackRecord {
            version: self.variant.label().to_string(),
            satisfaction_score: self.satisfaction,
            relevance: self.relevant,
            usability_feedback: self.comment.clone(),
        }
    }
}

/// A submitted feedback record. Not persisted anywhere; serialized only to
/// echo it back to the user as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRecord {
    pub version: String,
    pub satisfaction_score: u8,
    pub relevance: bool,
    pub usability_feedback: String,
}

impl FeedbackRecord {
    /// Pretty JSON for the echo panel.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_echoes_all_four_fields_as_json() {
        let form = FeedbackForm {
            variant: StrategyVariant::AlternateRanking,
            satisfaction: 4,
            relevant: false,
            comment: "sliders feel cramped".to_string(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&form.to_record().to_pretty_json()).unwrap();
        assert_eq!(json["version"], "Strategy B: Alternate Ranking");
        assert_eq!(json["satisfaction_score"], 4);
        assert_eq!(json["relevance"], false);
        assert_eq!(json["usability_feedback"], "sliders feel cramped");
    }

    #[test]
    fn default_form_is_midpoint_satisfaction() {
        let form = FeedbackForm::default();
        assert_eq!(form.satisfaction, 3);
        assert_eq!(form.variant, StrategyVariant::BasicFiltering);
    }
}
