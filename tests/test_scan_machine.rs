use nexscan::nexus::{ScanMachine, ScanState, TreeExtraction};
use nexscan::parser::LineCursor;

#[test]
fn test_state_sequence() {
    let lines = [
        ("#NEXUS", ScanState::SeekBlock),
        ("begin taxa;", ScanState::SeekBlock),
        ("end;", ScanState::SeekBlock),
        ("begin trees;", ScanState::InBlock),
        ("translate", ScanState::InTranslate),
        ("1 Kea,", ScanState::InTranslate),
        ("", ScanState::InTranslate),
        ("2 Kaka", ScanState::InTranslate),
        (";", ScanState::InBlock),
        ("", ScanState::InBlock),
        ("tree parrots = (1,2);", ScanState::InBlock),
        ("end;", ScanState::Done),
        ("begin trees;", ScanState::Done),
    ];

    let mut machine = ScanMachine::new(TreeExtraction::default());
    for (line, expected) in lines {
        assert_eq!(machine.feed(line), expected, "after line {line:?}");
    }

    let result = machine.finish();
    assert_eq!(result.trees(), &["(1,2);"]);
    assert_eq!(result.translation().len(), 2);
    assert!(result.block_closed());
}

#[test]
fn test_second_translate_extends_table() {
    let mut machine = ScanMachine::new(TreeExtraction::default());
    for line in [
        "begin trees;",
        "translate",
        "1 Kea,",
        ";",
        "translate",
        "1 Kakapo,",
        "2 Kaka,",
        ";",
    ] {
        machine.feed(line);
    }

    let pairs: Vec<(&str, &str)> = machine.translation().iter().collect();
    assert_eq!(pairs, vec![("1", "Kakapo"), ("2", "Kaka")]);
}

#[test]
fn test_cursor_stops_at_block_end() {
    let lines = ["begin trees;", "tree a = (A,B);", "end;", "tree b = (C,D);", "end;"];
    let mut cursor = LineCursor::new(lines);
    let mut machine = ScanMachine::new(TreeExtraction::LastField);

    while !machine.is_done() {
        let Some(line) = cursor.next_line() else {
            break;
        };
        machine.feed(line);
    }

    assert_eq!(cursor.line_number(), 3);
    assert!(!cursor.is_exhausted());
    assert_eq!(cursor.next_line(), Some("tree b = (C,D);"));
    assert_eq!(machine.trees(), &["(A,B);"]);
}
