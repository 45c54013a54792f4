//! Integration tests for aggregation over a directory of log fixtures.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vinarun_report::{AggregatedDataset, ResultAggregator, Row, export, write_tsv};

const ROUND_ONE_LOG: &str = "\
Reading input ... done.
Performing search ... done.

mode |   affinity | dist from best mode
     | (kcal/mol) | rmsd l.b.| rmsd u.b.
-----+------------+----------+----------
   1         -7.5      0.000      0.000
   2         -7.2      1.931      2.911
   3         -6.9      2.223      3.540
Writing output ... done.
";

const ROUND_THREE_LOG: &str = "\
mode |   affinity | dist from best mode
     | (kcal/mol) | rmsd l.b.| rmsd u.b.
-----+------------+----------+----------
   1         -6.8      0.000      0.000
";

fn write_log(dir: &Path, round: u32, content: &str) {
    fs::write(dir.join(format!("output_docking_{round}.log")), content).unwrap();
}

/// (round label, mode, affinity) triples from a dataset, separators skipped.
fn triples(dataset: &AggregatedDataset) -> Vec<(String, u32, f64)> {
    dataset
        .records()
        .map(|rec| (rec.round.clone(), rec.mode, rec.affinity))
        .collect()
}

#[test]
fn missing_round_is_skipped_entirely() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), 1, ROUND_ONE_LOG);
    write_log(dir.path(), 3, ROUND_THREE_LOG);
    // Round 2 has no log file.

    let dataset = ResultAggregator::new().aggregate(dir.path(), 3).unwrap();

    assert_eq!(
        triples(&dataset),
        vec![
            ("1".to_string(), 1, -7.5),
            ("".to_string(), 2, -7.2),
            ("".to_string(), 3, -6.9),
            ("3".to_string(), 1, -6.8),
        ]
    );

    // One separator per round that contributed, none for round 2.
    let separators = dataset
        .rows
        .iter()
        .filter(|row| matches!(row, Row::Separator))
        .count();
    assert_eq!(separators, 2);
    assert_eq!(dataset.rows.last(), Some(&Row::Separator));
}

#[test]
fn only_first_record_of_a_group_is_labeled() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), 1, ROUND_ONE_LOG);

    let dataset = ResultAggregator::new().aggregate(dir.path(), 1).unwrap();

    let labels: Vec<&str> = dataset.records().map(|rec| rec.round.as_str()).collect();
    assert_eq!(labels, vec!["1", "", ""]);
}

#[test]
fn present_log_without_matches_still_emits_a_separator() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), 1, "Performing search ... done.\n");

    let dataset = ResultAggregator::new().aggregate(dir.path(), 1).unwrap();

    assert_eq!(dataset.rows, vec![Row::Separator]);
}

#[test]
fn empty_directory_yields_empty_dataset() {
    let dir = TempDir::new().unwrap();

    let dataset = ResultAggregator::new().aggregate(dir.path(), 5).unwrap();

    assert!(dataset.is_empty());
}

#[test]
fn zero_rounds_yields_empty_dataset() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), 1, ROUND_ONE_LOG);

    let dataset = ResultAggregator::new().aggregate(dir.path(), 0).unwrap();

    assert!(dataset.is_empty());
}

#[test]
fn exported_report_round_trips() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), 1, ROUND_ONE_LOG);
    write_log(dir.path(), 2, ROUND_THREE_LOG);

    let dataset = ResultAggregator::new().aggregate(dir.path(), 2).unwrap();
    let report_path = dir.path().join("output_results.txt");
    export(&dataset, &report_path).unwrap();

    let text = fs::read_to_string(&report_path).unwrap();
    assert_eq!(text, write_tsv(&dataset));

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Round\tMode\tAffinity"));

    // Re-parse the data lines; blank labels are a display artifact, so only
    // compare the (mode, affinity) pairs and the non-empty labels.
    let mut reparsed = Vec::new();
    for line in lines.filter(|line| !line.is_empty()) {
        let mut fields = line.split('\t');
        let round = fields.next().unwrap().to_string();
        let mode: u32 = fields.next().unwrap().parse().unwrap();
        let affinity: f64 = fields.next().unwrap().parse().unwrap();
        reparsed.push((round, mode, affinity));
    }
    assert_eq!(reparsed, triples(&dataset));
}

#[test]
fn export_overwrites_existing_report() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("output_results.txt");
    fs::write(&report_path, "stale content\n").unwrap();

    export(&AggregatedDataset::default(), &report_path).unwrap();

    assert_eq!(
        fs::read_to_string(&report_path).unwrap(),
        "Round\tMode\tAffinity\n"
    );
}
