use crate::model::condition::InteractionStyle;
use crate::model::travel::TravelEntry;

/// Everything the system instruction depends on.
#[derive(Debug, Clone, Copy)]
pub struct PromptRequest<'a> {
    pub city: &'a str,
    pub use_grounding: bool,
    pub data: &'a [&'a TravelEntry],
    pub interaction_style: InteractionStyle,
}

/// Builds the system instruction sent at index 0 of every request.
/// Only formats text: same request, same bytes.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(request: &PromptRequest<'_>) -> String {
        if request.use_grounding {
            GroundedPromptBuilder::build(request)
        } else {
            GuidePromptBuilder::build(request)
        }
    }
}

/// Open-domain guide with no dataset. Interaction style does not apply.
struct GuidePromptBuilder;

impl GuidePromptBuilder {
    fn build(request: &PromptRequest<'_>) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!("You are a travel guide for '{}'.\n", request.city));
        prompt.push_str(
            "Recommend places based on general knowledge available on the internet.\n",
        );
        push_tone(&mut prompt);

        prompt
    }
}

struct GroundedPromptBuilder;

impl GroundedPromptBuilder {
    fn build(request: &PromptRequest<'_>) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "You are a travel optimization AI for '{}'.\n\n",
            request.city
        ));
        push_core_guidelines(&mut prompt);
        push_provided_data(&mut prompt, request.data);
        push_interaction_style(&mut prompt, request.interaction_style);

        prompt
    }
}

fn push_tone(prompt: &mut String) {
    prompt.push_str("Talk casually and informally, the way a close friend would.\n");
}

fn push_core_guidelines(prompt: &mut String) {
    prompt.push_str(
        "[Core guidelines]\n\
1. Place selection: recommend ONLY places that appear in the [Provided data] list below.\n\
2. Explanation: treat the [Provided data] as the skeleton, then flesh it out richly with what you already know \
(history, insider tips, places to eat nearby). One-line answers are not allowed.\n\
3. ",
    );
    push_tone(prompt);
    prompt.push('\n');
}

fn push_provided_data(prompt: &mut String, data: &[&TravelEntry]) {
    // Map-backed entries cannot fail to serialize.
    let json = serde_json::to_string(data).unwrap_or_else(|_| "[]".to_string());

    prompt.push_str("[Provided data]\n");
    prompt.push_str(&json);
    prompt.push('\n');
}

fn push_interaction_style(prompt: &mut String, style: InteractionStyle) {
    match style {
        InteractionStyle::Response => prompt.push_str(
            "\n[Conversation style: passive response mode]\n\
1. When the user asks, give the recommended places right away without hesitating.\n\
2. Do not ask questions back or drag the conversation out. Deliver the requested information crisply.\n",
        ),
        InteractionStyle::Clarifying => prompt.push_str(
            "\n[Conversation style: clarifying question mode]\n\
1. Do not give a list of recommendations in reply to the user's first question.\n\
2. First ask 2-3 clarifying questions, such as \"Who are you going with?\" or \"What kind of atmosphere do you like?\", \
to understand the user's situation.\n\
3. Once the user answers, recommend with a co-creation feel, for example \"Given your situation, this is the spot for you!\", \
and refer back to the preferences the user told you.\n",
        ),
    }
}
