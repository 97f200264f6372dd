//! System instruction composition.

use travel_cocreator::engine::prompt_builder::{PromptBuilder, PromptRequest};
use travel_cocreator::model::condition::{AttributeFilter, InteractionStyle};
use travel_cocreator::model::travel::Dataset;

const DATA: &str = r#"[
  {"city": "Tokyo", "name": "Senso-ji", "popularity": "High", "note": "浅草寺 at dawn"},
  {"city": "Tokyo", "name": "Yanaka Ginza", "popularity": "Low"}
]"#;

fn dataset() -> Dataset {
    Dataset::from_json_str(DATA).expect("fixture")
}

fn build(ds: &Dataset, grounding: bool, style: InteractionStyle) -> String {
    let data = ds.filter("Tokyo", AttributeFilter::All);
    PromptBuilder::build(&PromptRequest {
        city: "Tokyo",
        use_grounding: grounding,
        data: &data,
        interaction_style: style,
    })
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let ds = dataset();
    for grounding in [false, true] {
        for style in InteractionStyle::ALL {
            assert_eq!(build(&ds, grounding, style), build(&ds, grounding, style));
        }
    }
}

#[test]
fn guide_prompt_has_no_data_block() {
    let prompt = build(&dataset(), false, InteractionStyle::Response);

    assert!(prompt.contains("travel guide for 'Tokyo'"));
    assert!(prompt.contains("casually"));
    assert!(!prompt.contains("[Provided data]"));
    assert!(!prompt.contains("Senso-ji"));
    assert!(!prompt.contains("[Conversation style"));
}

#[test]
fn grounding_switches_persona_and_adds_data() {
    let ds = dataset();
    let off = build(&ds, false, InteractionStyle::Response);
    let on = build(&ds, true, InteractionStyle::Response);

    assert!(!off.contains("optimization AI"));
    assert!(on.contains("travel optimization AI for 'Tokyo'"));
    assert!(on.contains("ONLY places that appear in the [Provided data]"));
    assert!(on.contains("One-line answers are not allowed"));
    assert!(on.contains("[Provided data]"));
}

#[test]
fn data_block_is_verbatim_json() {
    let prompt = build(&dataset(), true, InteractionStyle::Response);
    assert!(prompt.contains(
        r#"[{"city":"Tokyo","name":"Senso-ji","popularity":"High","note":"浅草寺 at dawn"},{"city":"Tokyo","name":"Yanaka Ginza","popularity":"Low"}]"#
    ));
}

#[test]
fn style_only_changes_the_trailing_block() {
    let ds = dataset();
    let response = build(&ds, true, InteractionStyle::Response);
    let clarifying = build(&ds, true, InteractionStyle::Clarifying);

    let split = |p: &str| -> (String, String) {
        let at = p.find("\n[Conversation style").expect("style block");
        (p[..at].to_string(), p[at..].to_string())
    };
    let (head_r, tail_r) = split(&response);
    let (head_c, tail_c) = split(&clarifying);

    assert_eq!(head_r, head_c);
    assert_ne!(tail_r, tail_c);
    assert!(tail_r.contains("right away"));
    assert!(tail_c.contains("2-3 clarifying questions"));
    assert!(tail_c.contains("co-creation"));
}

#[test]
fn empty_data_still_references_provided_data() {
    let prompt = PromptBuilder::build(&PromptRequest {
        city: "Atlantis",
        use_grounding: true,
        data: &[],
        interaction_style: InteractionStyle::Response,
    });
    assert!(prompt.contains("[Provided data]\n[]"));
}
