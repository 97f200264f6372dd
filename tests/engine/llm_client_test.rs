//! Completion wire format.

use travel_cocreator::engine::llm_client::{parse_reply, ChatCompletionRequest, RemoteServiceError};
use travel_cocreator::model::message::ChatMessage;

#[test]
fn request_carries_model_and_ordered_messages() {
    let messages = vec![
        ChatMessage::system("be a guide"),
        ChatMessage::user("recommend a place"),
    ];
    let req = ChatCompletionRequest {
        model: "gpt-4o",
        messages: &messages,
    };

    let json = serde_json::to_value(&req).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": "be a guide"},
                {"role": "user", "content": "recommend a place"}
            ]
        })
    );
}

#[test]
fn first_choice_text_is_returned() {
    let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"Try Montmartre."},"finish_reason":"stop"}]}"#;
    assert_eq!(parse_reply(body).expect("reply"), "Try Montmartre.");
}

#[test]
fn null_content_is_an_empty_reply() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
    assert!(matches!(parse_reply(body), Err(RemoteServiceError::EmptyReply)));
}

#[test]
fn no_choices_is_an_empty_reply() {
    assert!(matches!(
        parse_reply(r#"{"choices":[]}"#),
        Err(RemoteServiceError::EmptyReply)
    ));
}

#[test]
fn garbage_body_is_a_parse_error() {
    assert!(matches!(
        parse_reply("<html>bad gateway</html>"),
        Err(RemoteServiceError::Parse(_))
    ));
}
