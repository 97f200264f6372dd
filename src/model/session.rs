use tracing::{info, warn};

use crate::engine::llm_client::{CompletionClient, RemoteServiceError};
use crate::engine::prompt_builder::{PromptBuilder, PromptRequest};
use crate::model::condition::ExperimentCondition;
use crate::model::conversation::Conversation;
use crate::model::travel::{Dataset, TravelEntry};

/// Destinations offered on the city picker when no dataset is loaded.
pub const FALLBACK_CITIES: [&str; 7] = [
    "Tokyo",
    "Paris",
    "Las Vegas",
    "Los Angeles",
    "Sydney",
    "Beijing",
    "New York",
];

#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("no city selected")]
    NoCitySelected,
    #[error(transparent)]
    Remote(#[from] RemoteServiceError),
}

#[derive(Debug, Clone)]
struct ActiveChat {
    city: String,
    conversation: Conversation,
}

/// State owned by one participant session.
///
/// The system instruction is built when a city is picked or the
/// conversation is reset, and rewritten in place when the condition or
/// the dataset changes. Nothing else touches index 0 of the history.
#[derive(Debug)]
pub struct Session {
    group: String,
    condition: ExperimentCondition,
    dataset: Dataset,
    chat: Option<ActiveChat>,
}

impl Session {
    pub fn new(group: impl Into<String>, condition: ExperimentCondition, dataset: Dataset) -> Self {
        let group = group.into();
        info!(
            group = %group,
            grounding = condition.use_grounding,
            filter = ?condition.attribute_filter,
            style = ?condition.interaction_style,
            hide_controls = condition.hide_controls,
            "session started"
        );

        Self {
            group,
            condition,
            dataset,
            chat: None,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn condition(&self) -> ExperimentCondition {
        self.condition
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.chat.as_ref().map(|c| c.city.as_str())
    }

    pub fn conversation(&self) -> Option<&Conversation> {
        self.chat.as_ref().map(|c| &c.conversation)
    }

    /// Cities offered on the picker. The dataset's own `city` keys are
    /// used so a pick always matches its entries.
    pub fn picker_cities(&self) -> Vec<&str> {
        let cities = self.dataset.cities();
        if cities.is_empty() {
            FALLBACK_CITIES.to_vec()
        } else {
            cities
        }
    }

    /// Data the model would be grounded on for `city` under the current
    /// condition.
    pub fn filtered_data(&self, city: &str) -> Vec<&TravelEntry> {
        self.dataset.filter(city, self.condition.attribute_filter)
    }

    pub fn system_prompt_for(&self, city: &str) -> String {
        let data = if self.condition.use_grounding {
            self.filtered_data(city)
        } else {
            Vec::new()
        };

        PromptBuilder::build(&PromptRequest {
            city,
            use_grounding: self.condition.use_grounding,
            data: &data,
            interaction_style: self.condition.interaction_style,
        })
    }

    /* -------- lifecycle -------- */

    pub fn select_city(&mut self, city: &str) {
        let prompt = self.system_prompt_for(city);
        info!(city, "city selected");

        self.chat = Some(ActiveChat {
            city: city.to_string(),
            conversation: Conversation::new(prompt),
        });
    }

    /// Back to the city picker. The history goes with the city.
    pub fn change_city(&mut self) {
        if let Some(chat) = self.chat.take() {
            info!(city = %chat.city, turns = chat.conversation.turn_count(), "city cleared");
        }
    }

    /// Apply a new condition. Returns whether anything changed. Existing
    /// history is kept; only the system entry is rewritten.
    pub fn set_condition(&mut self, condition: ExperimentCondition) -> bool {
        if condition == self.condition {
            return false;
        }

        info!(
            grounding = condition.use_grounding,
            filter = ?condition.attribute_filter,
            style = ?condition.interaction_style,
            "condition changed"
        );
        self.condition = condition;
        self.refresh_system_prompt();
        true
    }

    pub fn replace_dataset(&mut self, dataset: Dataset) {
        info!(entries = dataset.len(), "dataset replaced");
        self.dataset = dataset;
        self.refresh_system_prompt();
    }

    /// Clear the history of the current city, keeping the city.
    pub fn reset_conversation(&mut self) {
        let Some(city) = self.selected_city().map(str::to_string) else {
            return;
        };
        let prompt = self.system_prompt_for(&city);

        if let Some(chat) = self.chat.as_mut() {
            chat.conversation.reset(prompt);
            info!(city = %city, "conversation reset");
        }
    }

    /// End the session. The selected city and its history are dropped.
    pub fn close(&mut self) {
        let turns = self.chat.take().map_or(0, |c| c.conversation.turn_count());
        info!(group = %self.group, turns, "session closed");
    }

    fn refresh_system_prompt(&mut self) {
        let Some(city) = self.selected_city().map(str::to_string) else {
            return;
        };
        let prompt = self.system_prompt_for(&city);

        if let Some(chat) = self.chat.as_mut() {
            chat.conversation.refresh_system_prompt(prompt);
        }
    }

    /* -------- turns -------- */

    /// Run one user turn. On failure the user message stays in the
    /// history and no assistant entry is added.
    pub fn submit(
        &mut self,
        text: &str,
        client: &dyn CompletionClient,
    ) -> Result<String, TurnError> {
        let chat = self.chat.as_mut().ok_or(TurnError::NoCitySelected)?;

        chat.conversation.append_user(text);

        match client.complete(chat.conversation.messages()) {
            Ok(reply) => {
                chat.conversation.append_assistant(reply.clone());
                Ok(reply)
            }
            Err(e) => {
                warn!(city = %chat.city, error = %e, "completion failed");
                Err(e.into())
            }
        }
    }
}
