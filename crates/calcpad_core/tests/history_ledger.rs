use calcpad_core::{Calculator, HistoryEntry, HistoryLedger, Operator};

#[test]
fn clear_then_record_leaves_exactly_one_entry() {
    let mut ledger = HistoryLedger::new();
    ledger.record(HistoryEntry::new("1 + 1", "2"));
    ledger.record(HistoryEntry::new("2 + 2", "4"));

    ledger.clear();
    assert!(ledger.is_empty());

    let entry = HistoryEntry::new("3 × 3", "9");
    ledger.record(entry.clone());
    assert_eq!(ledger.entries().cloned().collect::<Vec<_>>(), vec![entry]);
}

#[test]
fn recall_feeds_result_back_into_engine() {
    let mut calculator = Calculator::new();
    calculator.append_digit("6");
    calculator.choose_operator(Operator::Divide);
    calculator.append_digit("4");
    calculator.calculate();
    calculator.clear();

    let recalled = calculator.recall(0).expect("entry should exist");
    assert_eq!(recalled, "1.5");
    assert_eq!(calculator.current(), "1.5");
    assert_eq!(calculator.history().len(), 1);
}

#[test]
fn recalled_result_can_start_a_new_calculation() {
    let mut calculator = Calculator::new();
    calculator.append_digit("2");
    calculator.choose_operator(Operator::Multiply);
    calculator.append_digit("8");
    calculator.calculate();

    let entry = calculator.history().get(0).cloned().expect("entry");
    calculator.load_operand(HistoryLedger::recall(&entry));
    calculator.choose_operator(Operator::Add);
    calculator.append_digit("1");
    calculator.calculate();

    assert_eq!(calculator.current(), "17");
    assert_eq!(calculator.history().len(), 2);
}

#[test]
fn engine_clear_does_not_touch_history() {
    let mut calculator = Calculator::new();
    calculator.append_digit("5");
    calculator.choose_operator(Operator::Add);
    calculator.append_digit("5");
    calculator.calculate();
    calculator.clear();
    assert_eq!(calculator.history().len(), 1);

    calculator.clear_history();
    assert!(calculator.history().is_empty());
    assert_eq!(calculator.current(), "0");
}

#[test]
fn history_entry_serializes_expression_and_result() {
    let entry = HistoryEntry::from_operands("5", Operator::Multiply, "4", "20");

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["expression"], "5 × 4");
    assert_eq!(json["result"], "20");

    let decoded: HistoryEntry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn operator_serializes_as_action_name() {
    assert_eq!(serde_json::to_value(Operator::Subtract).unwrap(), "subtract");
    let decoded: Operator = serde_json::from_value(serde_json::json!("percentage")).unwrap();
    assert_eq!(decoded, Operator::Percentage);
}
