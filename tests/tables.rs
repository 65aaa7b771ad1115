// tests/tables.rs
use sum_of_ranks::error::LoadError;
use sum_of_ranks::tables::{Bundle, Table};

#[test]
fn cells_come_back_in_request_order() {
    let t = Table::parse("Events", "id\tname\trank\n333\tCube\t10\n222\tTwo\t20\n").unwrap();
    let sel = t.select("rank id").unwrap();
    assert_eq!(sel.columns(), &["rank", "id"]);

    let got: Vec<(i64, &str)> = sel.records().map(|r| (r.int(0).unwrap(), r.text(1))).collect();
    assert_eq!(got, vec![(10, "333"), (20, "222")]);
}

#[test]
fn missing_column_is_reported_with_its_table() {
    let t = Table::parse("Persons", "id\tsubid\tname\n").unwrap();
    match t.select("id gender") {
        Err(LoadError::MissingColumn { table, column }) => {
            assert_eq!(table, "Persons");
            assert_eq!(column, "gender");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn bad_integer_names_cell_and_line() {
    let t = Table::parse("RanksSingle", "personId\tworldRank\nA\t1\nB\tx\n").unwrap();
    let sel = t.select("worldRank").unwrap();
    let results: Vec<_> = sel.records().map(|r| r.uint(0)).collect();
    assert_eq!(results[0].as_ref().ok(), Some(&1));
    match &results[1] {
        Err(LoadError::BadInt { table, column, line, value }) => {
            assert_eq!(table, "RanksSingle");
            assert_eq!(column, "worldRank");
            assert_eq!(*line, 3);
            assert_eq!(value, "x");
        }
        other => panic!("expected BadInt, got {other:?}"),
    }
}

#[test]
fn negative_rank_is_not_a_rank() {
    let t = Table::parse("RanksSingle", "worldRank\n-1\n").unwrap();
    let sel = t.select("worldRank").unwrap();
    let r = sel.records().next().unwrap();
    assert_eq!(r.int(0).unwrap(), -1);
    assert!(r.uint(0).is_err());
}

#[test]
fn short_row_fails_only_when_a_wanted_cell_is_missing() {
    let t = Table::parse("T", "a\tb\tc\n1\t2\n").unwrap();
    assert_eq!(t.select("a b").unwrap().len(), 1);
    assert!(matches!(t.select("c"), Err(LoadError::ShortRow { line: 2, .. })));
}

#[test]
fn header_only_table_has_no_rows() {
    let t = Table::parse("T", "a\tb\n").unwrap();
    let sel = t.select("b a").unwrap();
    assert!(sel.is_empty());
    assert_eq!(sel.records().count(), 0);
}

#[test]
fn crlf_and_blank_lines_are_tolerated() {
    let t = Table::parse("T", "a\tb\r\n\r\n1\t2\r\n\r\n3\t4\r\n").unwrap();
    let sel = t.select("b").unwrap();
    let got: Vec<(usize, &str)> = sel.records().map(|r| (r.line(), r.text(0))).collect();
    assert_eq!(got, vec![(3, "2"), (5, "4")]);
}

#[test]
fn bundle_reports_missing_tables() {
    let b = Bundle::from_tables([("Events", "id\n333\n")]);
    assert!(b.contains("Events"));
    assert!(!b.contains("Persons"));
    assert!(matches!(b.table("Persons"), Err(LoadError::MissingTable(t)) if t == "Persons"));
    assert_eq!(b.load("Events", "id").unwrap().len(), 1);
}

#[test]
fn errors_read_as_sentences() {
    let t = Table::parse("Persons", "id\tsubid\n").unwrap();
    let err = t.select("name").unwrap_err();
    assert_eq!(err.to_string(), "table Persons has no column 'name'");

    let io: LoadError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert_eq!(io.to_string(), "I/O error: gone");
    assert!(std::error::Error::source(&io).is_some());
}
