use chrono::{NaiveTime, TimeZone};
use chrono_tz::Asia::Manila;
use chrono_tz::Tz;
use shiftledger::core::engine::Engine;
use shiftledger::models::shift::Shift;
use shiftledger::report;

mod common;
use common::{setup_test_db, small_config, test_config};

fn at(h: u32, min: u32, s: u32) -> chrono::DateTime<Tz> {
    Manila.with_ymd_and_hms(2026, 8, 26, h, min, s).unwrap()
}

fn cutoff(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

#[test]
fn end_to_end_two_page_catalog() {
    let db = setup_test_db("report_e2e");
    let engine = Engine::new(&small_config(&db)).unwrap();
    let ts = at(7, 0, 0);

    engine
        .ingest("CLOCK IN\n#clockinprime\n#a", "Ana", ts)
        .unwrap();

    let (day, snapshot) = engine.snapshot(Shift::Prime, ts).unwrap();
    let chunks = report::status_table(&snapshot, Shift::Prime, day, 1, 20, false);
    let text = chunks.join("\n");

    assert!(text.contains("Page A"));
    assert!(text.contains("Page B"));
    let a_line = text.lines().find(|l| l.contains("Page A")).unwrap();
    let b_line = text.lines().find(|l| l.contains("Page B")).unwrap();
    assert!(a_line.contains("✅"));
    assert!(b_line.contains("🚫"));

    // clock-in at 07:00 with an 08:00 cutoff: nobody is late
    let (day, entries) = engine.entries(Shift::Prime, ts).unwrap();
    let late = report::late_report(&entries, Shift::Prime, day, cutoff("08:00"));
    assert_eq!(late, "✅ No late clock-ins.");
}

#[test]
fn lateness_is_strictly_after_cutoff() {
    let db = setup_test_db("report_late_boundary");
    let engine = Engine::new(&small_config(&db)).unwrap();

    engine
        .ingest("CLOCK IN\n#clockinprime\n#a", "OnTime", at(8, 0, 0))
        .unwrap();
    engine
        .ingest("CLOCK IN\n#clockinprime\n#b", "Late", at(8, 0, 1))
        .unwrap();

    let (day, entries) = engine.entries(Shift::Prime, at(9, 0, 0)).unwrap();
    let text = report::late_report(&entries, Shift::Prime, day, cutoff("08:00"));

    assert!(text.contains("Late"));
    assert!(text.contains("08:00:01"));
    assert!(!text.contains("OnTime"));
    // page "a" has no late people and is omitted entirely
    assert!(!text.contains("#a"));
}

#[test]
fn late_report_includes_covers() {
    let db = setup_test_db("report_late_cover");
    let engine = Engine::new(&small_config(&db)).unwrap();

    engine
        .ingest("CLOCK IN\n#clockinprime\n#cover\n#a", "Bea", at(9, 30, 0))
        .unwrap();

    let (day, entries) = engine.entries(Shift::Prime, at(10, 0, 0)).unwrap();
    let text = report::late_report(&entries, Shift::Prime, day, cutoff("08:00"));
    assert!(text.contains("Bea (cover)"));
}

#[test]
fn page_number_clamps_into_range() {
    let db = setup_test_db("report_clamp");
    let engine = Engine::new(&test_config(&db)).unwrap();
    let ts = at(7, 0, 0);

    let (day, snapshot) = engine.snapshot(Shift::Prime, ts).unwrap();

    // far out of range both ways; page size 10 over the full catalog
    let over = report::status_table(&snapshot, Shift::Prime, day, 999, 10, false);
    let under = report::status_table(&snapshot, Shift::Prime, day, 0, 10, false);

    let total_pages = snapshot.len().div_ceil(10);
    assert!(over[0].contains(&format!("(page {}/{})", total_pages, total_pages)));
    assert!(under[0].contains(&format!("(page 1/{})", total_pages)));
}

#[test]
fn missing_only_filters_rows() {
    let db = setup_test_db("report_missing_only");
    let engine = Engine::new(&small_config(&db)).unwrap();
    let ts = at(7, 0, 0);

    engine
        .ingest("CLOCK IN\n#clockinprime\n#a", "Ana", ts)
        .unwrap();

    let (day, snapshot) = engine.snapshot(Shift::Prime, ts).unwrap();
    let text = report::status_table(&snapshot, Shift::Prime, day, 1, 20, true).join("\n");
    assert!(!text.contains("Page A"));
    assert!(text.contains("Page B"));
}

#[test]
fn chunks_split_at_line_boundaries() {
    let line = "x".repeat(100);
    let text = vec![line.clone(); 100].join("\n"); // ~10k chars

    let chunks = report::chunk_lines(&text);
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.len() <= report::MAX_MESSAGE_LEN);
        // never a partial row
        for l in chunk.lines() {
            assert_eq!(l, line);
        }
    }
    let total: usize = chunks.iter().map(|c| c.lines().count()).sum();
    assert_eq!(total, 100);
}
