use clap::Parser;
use grade_estimator::cli::Cli;
use grade_estimator::{CutoffTable, Distribution, ErrorKind, GradeError, run};

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("grade_estimator").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn grade_error(err: &anyhow::Error) -> &GradeError {
    err.downcast_ref::<GradeError>()
        .expect("error should wrap a GradeError")
}

#[test]
fn test_full_pipeline() {
    let out = run_args(&["300", "536"]).unwrap();
    assert!(out.starts_with("Estimated grade for percentile 0.559701492537"));
    assert_eq!(out.trim_end().rsplit_once(": ").unwrap().1, "B");
}

#[test]
fn test_verbose_pipeline() {
    let out = run_args(&["-v", "300", "536"]).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 12);

    let letters: Vec<_> = lines[..11]
        .iter()
        .map(|l| l.split_once(": ").unwrap().0)
        .collect();
    assert_eq!(
        letters,
        ["A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D", "F"]
    );

    let cutoffs: Vec<f64> = lines[..11]
        .iter()
        .map(|l| l.split_once(": ").unwrap().1.parse().unwrap())
        .collect();
    assert!(cutoffs.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(lines[1], "A: 0.2244");
    assert_eq!(lines[6], "C+: 0.8977");
    assert_eq!(lines[9], "D: 0.9858");
    assert!(lines[11].ends_with(": B"));
}

#[test]
fn test_json_pipeline() {
    let out = run_args(&["--json", "0", "536"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["grade"], "A+");
    assert_eq!(value["percentile"], 0.0);
    assert_eq!(value["distribution"], "CS 161 Spring 2014");
}

#[test]
fn test_zero_total_fails() {
    let err = run_args(&["3", "0"]).unwrap_err();
    assert_eq!(grade_error(&err).kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_rank_above_total_fails() {
    let err = run_args(&["537", "536"]).unwrap_err();
    assert_eq!(
        grade_error(&err),
        &GradeError::IndexExceedsTotal {
            index: 537,
            total: 536
        }
    );
    assert!(format!("{err:#}").contains("must not exceed"));
}

#[test]
fn test_negative_rank_fails() {
    let err = run_args(&["-1", "10"]).unwrap_err();
    assert_eq!(grade_error(&err).kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_alternate_distribution() {
    let d = Distribution::new("curve", [("A", 1), ("B", 2), ("C", 1)]);
    let table = CutoffTable::from_distribution(&d).unwrap();
    assert_eq!(table.lookup(0.25).unwrap(), "A");
    assert_eq!(table.lookup(0.26).unwrap(), "B");
    assert_eq!(table.lookup(0.75).unwrap(), "B");
    assert_eq!(table.lookup(0.76).unwrap(), "C");
    assert_eq!(table.lookup(1.0).unwrap(), "C");
}

#[test]
fn test_failed_estimate_writes_nothing() {
    for args in [["-v", "3", "0"], ["-v", "537", "536"]] {
        let cli = Cli::try_parse_from(std::iter::once("grade_estimator").chain(args)).unwrap();
        let mut out = Vec::new();
        assert!(run(&cli, &mut out).is_err(), "{args:?}");
        assert!(out.is_empty(), "{args:?} wrote {:?}", String::from_utf8_lossy(&out));
    }
}

#[test]
fn test_binary_exit_status() {
    let bin = env!("CARGO_BIN_EXE_grade_estimator");

    let ok = std::process::Command::new(bin)
        .args(["300", "536"])
        .output()
        .unwrap();
    assert!(ok.status.success());
    assert!(String::from_utf8_lossy(&ok.stdout).trim_end().ends_with(": B"));

    let failed = std::process::Command::new(bin)
        .args(["-v", "3", "0"])
        .output()
        .unwrap();
    assert!(!failed.status.success());
    assert!(failed.stdout.is_empty());
    assert!(String::from_utf8_lossy(&failed.stderr).contains("bad input for total"));
}
