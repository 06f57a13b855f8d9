use csv_query::command_interpreter::{CommandInterpreter, CommandOutcome};
use csv_query::{CsvLoader, QueryDispatcher, QueryError, SemanticCellType, Table, TableError};

fn people() -> Table {
    Table::from_lines(["Name,Age", "Ann,30", "Bob,41"]).unwrap()
}

#[test]
fn test_name_age_scenario() {
    let table = people();
    assert_eq!(table.column_type("Age"), Ok(SemanticCellType::Integer));

    let rows = QueryDispatcher::query(&table, "Age", "30").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].to_string(), "Ann,30");

    let rows = QueryDispatcher::query(&table, "Age", "xx").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_shape_invariant() {
    let lines = [
        "a,b,c",
        r#"1,"two, three",4"#,
        r#""","",x"#,
        "5,6,7",
    ];
    let table = Table::from_lines(lines).unwrap();
    assert_eq!(table.row_count(), lines.len() - 1);
    assert!(table.rows().iter().all(|r| r.len() == table.column_count()));
}

#[test]
fn test_quoted_delimiter_row() {
    let table = Table::from_lines(["x,y,z", r#"a,"b,c",d"#]).unwrap();
    let texts: Vec<&str> = table.rows()[0]
        .fields()
        .iter()
        .map(|f| f.text.as_str())
        .collect();
    assert_eq!(texts, vec!["a", "b,c", "d"]);
}

#[test]
fn test_conflicting_column_widens_and_integer_query_is_empty() {
    let table = Table::from_lines(["v", "5", "hello"]).unwrap();
    assert_eq!(table.column_type("v"), Ok(SemanticCellType::Text));

    // "05" is the same integer as "5" but not the same text
    assert!(QueryDispatcher::query(&table, "v", "05").unwrap().is_empty());
}

#[test]
fn test_thousands_separated_amounts_are_text() {
    let table = Table::from_lines(["Amount", r#""1,000""#, r#""3,000""#]).unwrap();
    assert_eq!(table.column_type("Amount"), Ok(SemanticCellType::Text));

    let rows = QueryDispatcher::query(&table, "Amount", "1,000").unwrap();
    assert_eq!(rows.len(), 1);
    assert!(QueryDispatcher::query(&table, "Amount", "1,0")
        .unwrap()
        .is_empty());
}

#[test]
fn test_unknown_column() {
    let table = people();
    assert_eq!(
        QueryDispatcher::query(&table, "Salary", "1"),
        Err(QueryError::UnknownColumn("Salary".to_string()))
    );

    let interpreter = CommandInterpreter::new(table);
    match interpreter.execute(r#"query("Salary" 1)"#) {
        CommandOutcome::Diagnostic(msg) => assert!(msg.contains("Salary")),
        other => panic!("Expected diagnostic, got {:?}", other),
    }
}

#[test]
fn test_empty_and_header_only_input() {
    let none: Vec<String> = Vec::new();
    assert_eq!(Table::from_lines(none), Err(TableError::EmptyInput));

    let table = Table::from_lines(["Name,Age"]).unwrap();
    assert_eq!(table.row_count(), 0);
    assert!(table
        .header()
        .iter()
        .all(|h| h.data_type == SemanticCellType::Undetermined));
}

#[test]
fn test_loader_to_interpreter() {
    let csv = "City,Pop,Capital,Where\r\n\
               Oslo,709000,yes,\"59.91,10.75\"\r\n\
               Bergen,285000,no,\"60.39,5.32\"\r\n\
               Lima,10000000,yes,\"-12.05,-77.04\"\r\n";
    let table = CsvLoader::load_str(csv).unwrap();
    let interpreter = CommandInterpreter::new(table);

    assert_eq!(
        interpreter.execute(r#"query("Capital" "YES")"#),
        CommandOutcome::Output(
            "City,Pop,Capital,Where\nOslo,709000,yes,59.91,10.75\nLima,10000000,yes,-12.05,-77.04\n2 rows found"
                .to_string()
        )
    );
    assert_eq!(
        interpreter.execute(r#"query("Where" "60.39, 5.32")"#),
        CommandOutcome::Output(
            "City,Pop,Capital,Where\nBergen,285000,no,60.39,5.32\n1 rows found".to_string()
        )
    );
    assert_eq!(
        interpreter.execute(r#"query("Pop" 285000)"#),
        CommandOutcome::Output(
            "City,Pop,Capital,Where\nBergen,285000,no,60.39,5.32\n1 rows found".to_string()
        )
    );
}

#[test]
fn test_malformed_inputs_fail_construction() {
    assert!(matches!(
        CsvLoader::load_str("a,b\n1,2\n3\n")
            .unwrap_err()
            .downcast_ref::<TableError>(),
        Some(TableError::MalformedRow { line: 3, .. })
    ));
    assert!(matches!(
        CsvLoader::load_str("a,a\n1,2\n")
            .unwrap_err()
            .downcast_ref::<TableError>(),
        Some(TableError::DuplicateColumnName { .. })
    ));
}
