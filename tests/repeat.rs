use raptor_features::repeat::{dotplot_count, dotplot_scan, DotPlotScanner, RepeatCounter};

#[test]
fn test_no_repeat_of_window_length() {
    // No substring of length 6 occurs twice
    let contigs = ["ACGTTGCA", "GATTACACCGTAGGCT", "ACGTAC"];
    for seq in contigs {
        assert_eq!(dotplot_count(seq, 6), 0, "unexpected repeat in {}", seq);
    }
}

#[test]
fn test_tandem_duplication_detected() {
    let patterns = ["ACGTTG", "ACGTTGCAT", "GATTACA"];
    for pattern in patterns {
        let seq = format!("{}{}", pattern, pattern);
        assert!(dotplot_count(&seq, 6) >= 1, "missed tandem repeat in {}", seq);
    }
}

#[test]
fn test_run_lengths_accumulate() {
    let summary = dotplot_scan(b"AAGCTTAAGCTTC", 6);
    assert_eq!(summary.runs, 2);
    assert_eq!(summary.total_run_length, 12);
}

#[test]
fn test_higher_threshold_counts_fewer_runs() {
    let seq = "AAAAAAAAAAAA";
    let low = dotplot_count(seq, 3);
    let high = dotplot_count(seq, 6);
    assert!(high < low);
    assert_eq!(dotplot_count(seq, 20), 0);
}

#[test]
fn test_scanner_as_trait_object() {
    let scanner: Box<dyn RepeatCounter> = Box::new(DotPlotScanner::new(6).unwrap());
    assert_eq!(scanner.name(), "dotplot");
    assert_eq!(scanner.count_repeats("c1", "ACGTTGACGTTG").unwrap(), Some(1));
}
