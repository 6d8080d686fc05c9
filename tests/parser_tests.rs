use shiftledger::core::parser::{ParseOutcome, parse};
use shiftledger::models::shift::Shift;

fn accepted(text: &str) -> (Shift, String, bool) {
    match parse(text) {
        ParseOutcome::Accepted(p) => (p.shift, p.page_key, p.is_cover),
        other => panic!("expected Accepted, got {:?}", other),
    }
}

#[test]
fn basic_clock_in() {
    let (shift, page, cover) = accepted("CLOCK IN\n#clockinprime\n#islafree");
    assert_eq!(shift, Shift::Prime);
    assert_eq!(page, "islafree");
    assert!(!cover);
}

#[test]
fn marker_is_case_insensitive_and_order_free() {
    let (shift, page, _) = accepted("#islapaid\nclock in\n#clockinmid");
    assert_eq!(shift, Shift::Mid);
    assert_eq!(page, "islapaid");
}

#[test]
fn cover_tag_sets_flag() {
    let (shift, page, cover) = accepted("CLOCK IN\n#clockinnight\n#cover\n#bronwinfree");
    assert_eq!(shift, Shift::Night);
    assert_eq!(page, "bronwinfree");
    assert!(cover);
}

#[test]
fn tags_are_normalized() {
    let (_, page, _) = accepted("CLOCK IN\n#clockinprime\n#Kissing_Cousins / X Valerie VIP");
    assert_eq!(page, "kissingcousinsvalerievip");
}

#[test]
fn last_page_tag_wins() {
    let (_, page, _) = accepted("CLOCK IN\n#clockinprime\n#islafree\n#islapaid");
    assert_eq!(page, "islapaid");
}

#[test]
fn missing_shift_is_malformed() {
    assert_eq!(parse("CLOCK IN\n#islafree"), ParseOutcome::Malformed);
}

#[test]
fn missing_page_is_malformed() {
    assert_eq!(parse("CLOCK IN\n#clockinprime"), ParseOutcome::Malformed);
}

#[test]
fn no_marker_is_not_attendance() {
    assert_eq!(
        parse("#clockinprime\n#islafree"),
        ParseOutcome::NotAttendance
    );
    assert_eq!(parse("good morning everyone"), ParseOutcome::NotAttendance);
}

#[test]
fn legacy_clockin_tag_is_not_a_page() {
    // "#clockin" was the old marker hashtag; it must never be taken as the
    // page candidate
    assert_eq!(
        parse("CLOCK IN\n#clockin\n#clockinprime"),
        ParseOutcome::Malformed
    );

    let (_, page, _) = accepted("CLOCK IN\n#clockin\n#clockinprime\n#livv");
    assert_eq!(page, "livv");
}

#[test]
fn blank_and_padded_lines_are_tolerated() {
    let (shift, page, _) = accepted("  CLOCK IN  \n\n   #clockinprime\n\n  #gracefree  \n");
    assert_eq!(shift, Shift::Prime);
    assert_eq!(page, "gracefree");
}
