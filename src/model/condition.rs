use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Tag used when no group is supplied at launch.
pub const DEFAULT_GROUP: &str = "researcher";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttributeFilter {
    #[default]
    All,
    High,
    Low,
}

impl AttributeFilter {
    pub const ALL: [AttributeFilter; 3] = [Self::All, Self::High, Self::Low];

    /// Label shown on the researcher panel radio button.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::High => "High (Popularity)",
            Self::Low => "Low (Serendipity)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionStyle {
    #[default]
    Response,
    Clarifying,
}

impl InteractionStyle {
    pub const ALL: [InteractionStyle; 2] = [Self::Response, Self::Clarifying];

    pub fn label(self) -> &'static str {
        match self {
            Self::Response => "Response (passive)",
            Self::Clarifying => "Clarifying (counter-questions)",
        }
    }
}

/// The configuration tuple an experiment group maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentCondition {
    pub use_grounding: bool,
    pub attribute_filter: AttributeFilter,
    pub interaction_style: InteractionStyle,
    pub hide_controls: bool,
}

impl ExperimentCondition {
    /// Researcher mode: grounding on, everything unfiltered, controls visible.
    pub const RESEARCHER: ExperimentCondition = ExperimentCondition {
        use_grounding: true,
        attribute_filter: AttributeFilter::All,
        interaction_style: InteractionStyle::Response,
        hide_controls: false,
    };

    const fn participant(
        use_grounding: bool,
        attribute_filter: AttributeFilter,
        interaction_style: InteractionStyle,
    ) -> Self {
        Self {
            use_grounding,
            attribute_filter,
            interaction_style,
            hide_controls: true,
        }
    }
}

impl Default for ExperimentCondition {
    fn default() -> Self {
        Self::RESEARCHER
    }
}

/* =========================
   Group table
   ========================= */

use AttributeFilter::{All, High, Low};
use InteractionStyle::{Clarifying, Response};

/// Every participant-facing group. Study 1 compares media, study 2 the
/// information attribute, study 3 is the 2x2 of attribute and interaction.
pub static GROUP_TABLE: &[(&str, ExperimentCondition)] = &[
    ("S1_Basic", ExperimentCondition::participant(false, All, Response)),
    ("S1_Ontology", ExperimentCondition::participant(true, All, Response)),
    ("S2_Pop", ExperimentCondition::participant(true, High, Response)),
    ("S2_Seren", ExperimentCondition::participant(true, Low, Response)),
    ("S3_Pop_Resp", ExperimentCondition::participant(true, High, Response)),
    ("S3_Pop_Clar", ExperimentCondition::participant(true, High, Clarifying)),
    ("S3_Seren_Resp", ExperimentCondition::participant(true, Low, Response)),
    ("S3_Seren_Clar", ExperimentCondition::participant(true, Low, Clarifying)),
];

/// Resolve a group tag to its condition. Matching is exact and
/// case-sensitive; a missing or unknown tag yields researcher mode.
pub fn resolve_group(tag: Option<&str>) -> ExperimentCondition {
    let tag = tag.unwrap_or(DEFAULT_GROUP);

    GROUP_TABLE
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, condition)| *condition)
        .unwrap_or_default()
}

/// Pull the `group` value out of a launcher query string such as
/// `group=S2_Pop&lang=en`. Values are form-url-decoded; a leading `?` is
/// tolerated.
pub fn group_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "group")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
