//! History store behaviour.

use travel_cocreator::model::conversation::Conversation;
use travel_cocreator::model::message::{ChatMessage, Role};

#[test]
fn reset_leaves_only_the_system_entry() {
    let mut conv = Conversation::new("first");
    conv.append_user("hi");
    conv.append_assistant("hello");

    conv.reset("second");

    assert_eq!(conv.messages(), &[ChatMessage::system("second")]);
    assert_eq!(conv.visible().count(), 0);
}

#[test]
fn refresh_rewrites_index_zero_only() {
    let mut conv = Conversation::new("old prompt");
    conv.append_user("where to eat?");
    conv.append_assistant("try the market");
    let before: Vec<ChatMessage> = conv.messages()[1..].to_vec();

    conv.refresh_system_prompt("new prompt");

    assert_eq!(conv.messages().len(), 3);
    assert_eq!(conv.messages()[0].role, Role::System);
    assert_eq!(conv.system_prompt(), "new prompt");
    assert_eq!(&conv.messages()[1..], before.as_slice());
}

#[test]
fn appends_keep_order_and_hide_system_entry() {
    let mut conv = Conversation::new("prompt");
    conv.append_user("a");
    conv.append_assistant("b");
    conv.append_user("c");

    let visible: Vec<(Role, &str)> = conv
        .visible()
        .map(|m| (m.role, m.content.as_str()))
        .collect();
    assert_eq!(
        visible,
        vec![(Role::User, "a"), (Role::Assistant, "b"), (Role::User, "c")]
    );
}

#[test]
fn roles_serialize_lowercase() {
    let json = serde_json::to_string(&ChatMessage::assistant("ok")).expect("serialize");
    assert_eq!(json, r#"{"role":"assistant","content":"ok"}"#);
}

#[test]
fn turn_count_excludes_the_system_entry() {
    let mut conv = Conversation::new("prompt");
    assert_eq!(conv.turn_count(), 0);
    assert_eq!(conv.messages().len(), 1);

    conv.append_user("a");
    conv.append_assistant("b");
    assert_eq!(conv.turn_count(), 2);

    conv.reset("again");
    assert_eq!(conv.turn_count(), 0);
    assert_eq!(conv.messages()[0].role, Role::System);
}
