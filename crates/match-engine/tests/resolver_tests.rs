//! Tests for earliest-start slot assignment.

use chrono::NaiveTime;
use match_engine::resolver::earliest_window;
use match_engine::{assign, solve, CompatibilityGraph, Interval, Matching, Participant, SkippedPair};

fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn with_windows(p: Participant, windows: &[(&str, &str)]) -> Participant {
    windows
        .iter()
        .fold(p, |p, (s, e)| p.with_interval(Interval::parse(s, e).unwrap()))
}

#[test]
fn earliest_overlap_is_chosen() {
    let recruiter = with_windows(
        Participant::recruiter("R1"),
        &[("09:00", "10:00"), ("13:00", "14:00")],
    );
    let candidate = with_windows(
        Participant::candidate("C1"),
        &[("09:30", "09:45"), ("13:10", "13:50")],
    );

    let window = earliest_window(&recruiter, &candidate).unwrap();
    assert_eq!(window.start(), t(9, 30));
    assert_eq!(window.end(), t(9, 45));
}

#[test]
fn earliest_overlap_wins_regardless_of_input_order() {
    let recruiter = with_windows(
        Participant::recruiter("R1"),
        &[("13:00", "14:00"), ("09:00", "10:00")],
    );
    let candidate = with_windows(
        Participant::candidate("C1"),
        &[("13:10", "13:50"), ("09:30", "09:45")],
    );

    let window = earliest_window(&recruiter, &candidate).unwrap();
    assert_eq!(window.start(), t(9, 30));
}

#[test]
fn tied_starts_keep_first_combination() {
    let recruiter = with_windows(
        Participant::recruiter("R1"),
        &[("09:00", "09:30"), ("09:00", "11:00")],
    );
    let candidate = with_windows(Participant::candidate("C1"), &[("09:00", "12:00")]);

    let window = earliest_window(&recruiter, &candidate).unwrap();
    assert_eq!(window.end(), t(9, 30));
}

#[test]
fn overnight_window_is_reported_on_original_clock() {
    let recruiter = with_windows(Participant::recruiter("R1"), &[("22:00", "02:00")]);
    let candidate = with_windows(Participant::candidate("C1"), &[("23:30", "01:00")]);
    let graph = CompatibilityGraph::build(vec![recruiter], vec![candidate]);
    let matching = solve(&graph);

    let assignment = assign(&matching, graph.recruiters(), graph.candidates());

    assert_eq!(assignment.entries.len(), 1);
    let entry = &assignment.entries[0];
    assert_eq!(entry.start, t(23, 30));
    assert_eq!(entry.end, t(1, 0));
    assert_eq!(entry.interval().unwrap().duration_minutes(), 90);
}

#[test]
fn every_matched_pair_receives_a_contained_window() {
    let recruiters = vec![
        with_windows(Participant::recruiter("R1"), &[("09:00", "10:00")]),
        with_windows(Participant::recruiter("R2"), &[("08:00", "12:00")]),
    ];
    let candidates = vec![
        with_windows(Participant::candidate("C1"), &[("09:30", "11:00")]),
        with_windows(Participant::candidate("C2"), &[("07:00", "08:30"), ("11:00", "13:00")]),
    ];
    let graph = CompatibilityGraph::build(recruiters, candidates);
    let matching = solve(&graph);
    assert_eq!(matching.len(), 2);

    let assignment = assign(&matching, graph.recruiters(), graph.candidates());

    assert_eq!(assignment.entries.len(), 2);
    assert!(assignment.skipped.is_empty());
    for entry in &assignment.entries {
        let window = entry.interval().unwrap();
        let r = graph.recruiter_index(&entry.recruiter_id).unwrap();
        let c = graph.candidate_index(&entry.candidate_id).unwrap();
        assert!(graph.recruiters()[r].intervals.iter().any(|i| i.contains(&window)));
        assert!(graph.candidates()[c].intervals.iter().any(|i| i.contains(&window)));
    }

    // R2 and C2 share 08:00-08:30 and 11:00-12:00; the earlier one wins.
    let r2 = assignment
        .entries
        .iter()
        .find(|e| e.recruiter_id == "R2")
        .unwrap();
    assert_eq!((r2.candidate_id.as_str(), r2.start, r2.end), ("C2", t(8, 0), t(8, 30)));
}

#[test]
fn pair_without_common_window_is_skipped() {
    // Match against one graph, then resolve against participants whose windows
    // no longer overlap (e.g. normalization drifted between the two steps).
    let graph = CompatibilityGraph::build(
        vec![with_windows(Participant::recruiter("R1"), &[("09:00", "10:00")])],
        vec![with_windows(Participant::candidate("C1"), &[("09:30", "10:30")])],
    );
    let matching = solve(&graph);
    assert_eq!(matching.len(), 1);

    let drifted = vec![with_windows(Participant::candidate("C1"), &[("10:00", "10:30")])];
    let assignment = assign(&matching, graph.recruiters(), &drifted);

    assert!(assignment.entries.is_empty());
    assert_eq!(
        assignment.skipped,
        vec![SkippedPair {
            recruiter_id: "R1".to_string(),
            candidate_id: "C1".to_string(),
        }]
    );
}

#[test]
fn pair_with_missing_participant_is_counted_as_skipped() {
    let graph = CompatibilityGraph::build(
        vec![with_windows(Participant::recruiter("R1"), &[("09:00", "10:00")])],
        vec![with_windows(Participant::candidate("C1"), &[("09:30", "10:30")])],
    );
    let matching = solve(&graph);

    let assignment = assign(&matching, graph.recruiters(), &[]);

    assert!(assignment.entries.is_empty());
    assert_eq!(
        assignment.skipped,
        vec![SkippedPair {
            recruiter_id: "R1".to_string(),
            candidate_id: "#0".to_string(),
        }]
    );
}

#[test]
fn empty_matching_assigns_nothing() {
    let graph = CompatibilityGraph::build(vec![], vec![]);
    let assignment = assign(&Matching::default(), graph.recruiters(), graph.candidates());
    assert_eq!(assignment, Default::default());
}

#[test]
fn schedule_entry_serializes_clock_times() {
    let graph = CompatibilityGraph::build(
        vec![with_windows(Participant::recruiter("r@x"), &[("09:00", "10:00")])],
        vec![with_windows(Participant::candidate("c@x"), &[("09:15", "09:45")])],
    );
    let assignment = assign(&solve(&graph), graph.recruiters(), graph.candidates());

    let json = serde_json::to_string(&assignment.entries[0]).unwrap();
    assert_eq!(
        json,
        r#"{"recruiter_id":"r@x","candidate_id":"c@x","start":"09:15","end":"09:45"}"#
    );
}
