//! Navigation and form lifecycle through the master/detail shell.

use std::collections::HashSet;

use level_config::config::AppSettings;
use level_config::panels::{DetailContent, TreeItem};
use level_config::records::FieldValue;
use level_config::schema::{FieldKind, RecordKind, LEVEL_SCHEMA};
use level_config::widgets::{ControlId, FormControl};
use level_config::{MasterDetailShell, ShellState};

fn shell() -> MasterDetailShell {
    MasterDetailShell::new(&AppSettings::default())
}

fn control_ids(shell: &MasterDetailShell) -> HashSet<ControlId> {
    shell
        .detail()
        .form()
        .map(|set| set.control_ids().into_iter().collect())
        .unwrap_or_default()
}

#[test]
fn starts_with_placeholder() {
    let shell = shell();
    assert_eq!(shell.state(), ShellState::NoSelection);
    assert!(matches!(
        shell.detail().content(),
        Some(DetailContent::Placeholder)
    ));
    assert_eq!(shell.tree().selected(), None);
}

#[test]
fn level_selection_builds_full_form() {
    let mut shell = shell();
    shell.select_label("Level");

    assert_eq!(shell.state(), ShellState::ShowingLevelForm);
    let set = shell.detail().form().expect("level form");

    let names: Vec<_> = set.names().collect();
    let unique: HashSet<_> = names.iter().copied().collect();
    assert_eq!(names.len(), 25);
    assert_eq!(unique.len(), 25);
    assert_eq!(unique, LEVEL_SCHEMA.names().collect::<HashSet<_>>());

    for control in set.iter() {
        let kind = control.descriptor().kind;
        let ok = match control.control() {
            FormControl::Toggle(_) => kind == FieldKind::Boolean,
            FormControl::List(_) => kind == FieldKind::StringList,
            FormControl::Text(_) => matches!(kind, FieldKind::String | FieldKind::Integer),
        };
        assert!(ok, "{} has the wrong control", control.descriptor().name);
    }
}

#[test]
fn transitions_follow_selection() {
    let mut shell = shell();

    shell.select(TreeItem::Record(RecordKind::Transmitter));
    assert_eq!(shell.state(), ShellState::ShowingTransmitterForm);
    assert_eq!(shell.detail().form().map(|s| s.len()), Some(2));

    shell.select(TreeItem::Root);
    assert_eq!(shell.state(), ShellState::NoSelection);
    assert!(shell.detail().form().is_none());

    shell.select_label("Pump");
    assert_eq!(shell.state(), ShellState::NoSelection);
    assert!(matches!(
        shell.detail().content(),
        Some(DetailContent::Placeholder)
    ));
}

#[test]
fn switching_discards_edits_and_controls() {
    let mut shell = shell();
    shell.select_label("Level");

    let form = shell.detail_mut().form_mut().expect("level form");
    if let Some(FormControl::Text(name)) = form.get_mut("name").map(|c| c.control_mut()) {
        name.push_str("Tank A");
    }
    if let Some(FormControl::List(addr)) = form.get_mut("plc_addr").map(|c| c.control_mut()) {
        addr.add_entry("%MW100");
    }
    if let Some(FormControl::Toggle(nc)) = form.get_mut("LL_NC").map(|c| c.control_mut()) {
        *nc = true;
    }
    let before = control_ids(&shell);

    shell.select_label("Transmitter");
    let during = control_ids(&shell);
    assert!(before.is_disjoint(&during));

    shell.select_label("Level");
    let after = control_ids(&shell);
    assert!(before.is_disjoint(&after));
    assert!(during.is_disjoint(&after));

    let values = shell.detail().form().expect("level form").values();
    assert_eq!(values.get("name"), Some(&FieldValue::Text(String::new())));
    assert_eq!(values.get("plc_addr"), Some(&FieldValue::List(Vec::new())));
    assert_eq!(values.get("LL_NC"), Some(&FieldValue::Flag(false)));
}

#[test]
fn reselecting_same_item_rebuilds() {
    let mut shell = shell();
    shell.select_label("Transmitter");
    let first = control_ids(&shell);

    shell.select_label("Transmitter");
    assert_eq!(shell.state(), ShellState::ShowingTransmitterForm);
    assert!(first.is_disjoint(&control_ids(&shell)));
}

#[test]
fn list_edits_inside_form_request_relayout() {
    let mut shell = shell();
    shell.select_label("Transmitter");
    shell.relayout().take();

    let form = shell.detail_mut().form_mut().expect("transmitter form");
    if let Some(FormControl::List(valves)) =
        form.get_mut("primary_valve").map(|c| c.control_mut())
    {
        let id = valves.add_entry("V-101");
        valves.remove_entry(id);
        valves.remove_entry(id);
    }

    assert_eq!(shell.relayout().pending(), 2);
}
