use super::*;

#[test]
fn empty_and_whitespace_feedback_is_rejected() {
    assert!(feedback_is_empty(""));
    assert!(feedback_is_empty("   "));
    assert!(feedback_is_empty("\n\t "));
    assert!(!feedback_is_empty("water pressure is low"));
}

#[test]
fn summary_splits_on_blank_lines() {
    let paragraphs = summary_paragraphs("Good.\n\nNeeds work.");
    assert_eq!(paragraphs, vec!["Good.".to_owned(), "Needs work.".to_owned()]);
}

#[test]
fn summary_with_single_paragraph_stays_whole() {
    assert_eq!(summary_paragraphs("All fine.\nMostly."), vec!["All fine.\nMostly.".to_owned()]);
}

#[test]
fn summary_drops_blank_segments() {
    assert_eq!(summary_paragraphs("A.\n\n\n\nB."), vec!["A.".to_owned(), "B.".to_owned()]);
    assert!(summary_paragraphs("").is_empty());
    assert!(summary_paragraphs("\n\n").is_empty());
}

#[test]
fn only_the_latest_fetch_ticket_may_publish() {
    let mut tracker = FetchTracker::default();
    let first = tracker.begin();
    let second = tracker.begin();

    // Whichever order the network resolves in, only the newest wins.
    assert!(!tracker.may_publish(first));
    assert!(tracker.may_publish(second));
}

#[test]
fn invalidate_supersedes_everything_in_flight() {
    let mut tracker = FetchTracker::default();
    let ticket = tracker.begin();
    tracker.invalidate();
    assert!(!tracker.may_publish(ticket));
}

#[test]
fn fresh_tracker_publishes_nothing() {
    let tracker = FetchTracker::default();
    assert!(!tracker.may_publish(1));
}
