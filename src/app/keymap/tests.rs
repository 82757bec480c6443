use super::*;

#[test]
fn default_bindings_match_draw_commands() {
    let keymap = DrawKeymap::default();

    assert_eq!(keymap.action_for(Key::Backspace), Some(DrawAction::Undo));
    assert_eq!(keymap.action_for(Key::Delete), Some(DrawAction::Cancel));
    assert_eq!(keymap.action_for(Key::Escape), Some(DrawAction::Finish));
    assert_eq!(keymap.action_for(Key::Enter), Some(DrawAction::Finish));
    assert_eq!(keymap.action_for(Key::Shift), None);
    assert_eq!(keymap.action_for(Key::Other), None);
}

#[test]
fn actions_map_to_events() {
    assert_eq!(DrawAction::Undo.event(), DrawEvent::Undo);
    assert_eq!(DrawAction::Cancel.event(), DrawEvent::Cancel);
    assert_eq!(DrawAction::Finish.event(), DrawEvent::Finish);
}

#[test]
fn rebinding_overrides_previous_action() {
    let mut keymap = DrawKeymap::default();
    keymap.bind(Key::Delete, DrawAction::Undo);

    assert_eq!(keymap.action_for(Key::Delete), Some(DrawAction::Undo));
    assert_eq!(keymap.keys_for(DrawAction::Undo), vec![Key::Backspace, Key::Delete]);
    assert!(keymap.keys_for(DrawAction::Cancel).is_empty());
}

#[test]
fn unbind_removes_key() {
    let mut keymap = DrawKeymap::default();
    assert_eq!(keymap.unbind(Key::Enter), Some(DrawAction::Finish));
    assert_eq!(keymap.action_for(Key::Enter), None);
    assert_eq!(keymap.unbind(Key::Enter), None);
}

#[test]
fn label_lists_symbols_in_binding_order() {
    let keymap = DrawKeymap::default();
    assert_eq!(keymap.label_for(DrawAction::Finish), "⎋ ↩");
    assert_eq!(DrawKeymap::empty().label_for(DrawAction::Undo), "");
}
