// tests/dataset.rs
mod common;

use sum_of_ranks::dataset::{Dataset, Stat};
use sum_of_ranks::error::LoadError;
use sum_of_ranks::tables::Bundle;

#[test]
fn events_are_singles_then_averages_by_canonical_rank() {
    let ds = common::dataset();
    let ids: Vec<&str> = ds.events().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["333", "222", "333bf", "333A", "222A"]);

    let avg = &ds.events()[3];
    assert_eq!(avg.key.base, "333");
    assert_eq!(avg.key.stat, Stat::Average);
    assert_eq!(avg.name, "3x3x3");
}

#[test]
fn events_without_rank_records_are_not_known() {
    let ds = common::dataset();
    assert_eq!(ds.event_index("444"), None);
    assert_eq!(ds.event_index("333bfA"), None);
    assert_eq!(ds.event_index("222A"), Some(4));
}

#[test]
fn default_rank_is_record_count_plus_one() {
    let ds = common::dataset();
    assert_eq!(ds.default_ranks(), &[4, 3, 2, 3, 2]);
}

#[test]
fn rank_vectors_cover_every_event() {
    let ds = common::dataset();
    let got: Vec<(&str, &[u32])> =
        ds.people().iter().map(|p| (p.id.as_str(), p.ranks.as_slice())).collect();
    let want: [(&str, &[u32]); 5] = [
        ("2003BRUC01", &[4, 2, 2, 3, 2]),
        ("2005AKKE01", &[3, 3, 1, 3, 2]),
        ("2007VALK01", &[2, 1, 2, 2, 2]),
        ("2009ZEMD01", &[1, 3, 2, 1, 2]),
        ("2010NONA01", &[4, 3, 2, 3, 1]),
    ];
    assert_eq!(got, want);
    for p in ds.people() {
        assert_eq!(p.ranks.len(), ds.events().len());
    }
}

#[test]
fn names_come_from_primary_person_rows() {
    let ds = common::dataset();
    let bruc = ds.people().iter().find(|p| p.id == "2003BRUC01").unwrap();
    assert_eq!(bruc.name, "Ron van Bruchem");

    // only a subid 2 row → shown by id
    let nona = ds.people().iter().find(|p| p.id == "2010NONA01").unwrap();
    assert_eq!(nona.name, "2010NONA01");
}

#[test]
fn event_lines_pair_singles_with_averages() {
    let ds = common::dataset();
    let lines = ds.event_lines();
    let got: Vec<(&str, Option<usize>, Option<usize>)> =
        lines.iter().map(|l| (l.base.as_str(), l.single, l.average)).collect();
    let want: [(&str, Option<usize>, Option<usize>); 3] =
        [("333", Some(0), Some(3)), ("222", Some(1), Some(4)), ("333bf", Some(2), None)];
    assert_eq!(got, want);
    assert_eq!(lines[2].name, "3x3 blindfolded");
}

#[test]
fn average_only_event_gets_its_own_line() {
    let bundle = Bundle::from_tables([
        ("Events", "id\tcellName\trank\n333\t3x3x3\t10\n333mbf\tMulti\t80\n"),
        ("Persons", "id\tsubid\tname\nA\t1\tAnn\n"),
        ("RanksSingle", "personId\teventId\tworldRank\nA\t333\t1\n"),
        ("RanksAverage", "personId\teventId\tworldRank\nA\t333mbf\t1\n"),
    ]);
    let ds = Dataset::from_bundle(&bundle).unwrap();
    let lines = ds.event_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].base, "333mbf");
    assert_eq!(lines[1].single, None);
    assert_eq!(lines[1].average, ds.event_index("333mbfA"));
}

#[test]
fn indices_of_splits_by_statistic() {
    let ds = common::dataset();
    assert_eq!(ds.indices_of(Stat::Single), [0, 1, 2]);
    assert_eq!(ds.indices_of(Stat::Average), [3, 4]);
}

#[test]
fn rank_for_unknown_event_fails_the_load() {
    let bundle = Bundle::from_tables([
        ("Events", common::EVENTS),
        ("Persons", common::PERSONS),
        ("RanksSingle", "personId\teventId\tworldRank\nX\t555\t1\n"),
        ("RanksAverage", common::RANKS_AVERAGE),
    ]);
    match Dataset::from_bundle(&bundle) {
        Err(LoadError::UnknownEvent(id)) => assert_eq!(id, "555"),
        other => panic!("expected UnknownEvent, got {other:?}"),
    }
}

#[test]
fn missing_column_fails_the_load() {
    let bundle = Bundle::from_tables([
        ("Events", common::EVENTS),
        ("Persons", common::PERSONS),
        ("RanksSingle", "personId\teventId\tbest\nX\t333\t1\n"),
        ("RanksAverage", common::RANKS_AVERAGE),
    ]);
    match Dataset::from_bundle(&bundle) {
        Err(LoadError::MissingColumn { table, column }) => {
            assert_eq!(table, "RanksSingle");
            assert_eq!(column, "worldRank");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn missing_table_fails_the_load() {
    let bundle = Bundle::from_tables([
        ("Events", common::EVENTS),
        ("RanksSingle", common::RANKS_SINGLE),
        ("RanksAverage", common::RANKS_AVERAGE),
    ]);
    assert!(matches!(Dataset::from_bundle(&bundle), Err(LoadError::MissingTable(t)) if t == "Persons"));
}

#[test]
fn no_rank_records_is_an_empty_dataset() {
    let bundle = Bundle::from_tables([
        ("Events", common::EVENTS),
        ("Persons", common::PERSONS),
        ("RanksSingle", "personId\teventId\tworldRank\n"),
        ("RanksAverage", "personId\teventId\tworldRank\n"),
    ]);
    let ds = Dataset::from_bundle(&bundle).unwrap();
    assert!(ds.is_empty());
    assert!(ds.people().is_empty());
    assert!(ds.event_lines().is_empty());
}
