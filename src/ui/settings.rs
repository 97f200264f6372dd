use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::model::message::Role;

/// Persisted look of the chat window. Missing keys take their defaults,
/// so older settings files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,
    pub bubbles: BubbleColors,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            bubbles: BubbleColors::default(),
        }
    }
}

/// Bubble fill per visible role, keyed by the role's wire name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleColors {
    pub user: [u8; 4],
    pub assistant: [u8; 4],
}

impl Default for BubbleColors {
    fn default() -> Self {
        Self {
            user: [40, 70, 120, 255],
            assistant: [40, 90, 60, 255],
        }
    }
}

impl BubbleColors {
    fn slot(&mut self, role: Role) -> Option<&mut [u8; 4]> {
        match role {
            Role::User => Some(&mut self.user),
            Role::Assistant => Some(&mut self.assistant),
            Role::System => None,
        }
    }
}

impl UiSettings {
    /// The system entry is never drawn; it gets a neutral gray.
    pub fn color(&self, role: Role) -> Color32 {
        let [r, g, b, a] = match role {
            Role::User => self.bubbles.user,
            Role::Assistant => self.bubbles.assistant,
            Role::System => return Color32::DARK_GRAY,
        };
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    pub fn set_color(&mut self, role: Role, color: Color32) {
        if let Some(slot) = self.bubbles.slot(role) {
            *slot = color.to_srgba_unmultiplied();
        }
    }
}
