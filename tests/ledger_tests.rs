use chrono::TimeZone;
use chrono_tz::Asia::Manila;
use chrono_tz::Tz;
use shiftledger::core::engine::{Engine, IngestReply};
use shiftledger::db::store::Store;
use shiftledger::models::attendance_day::AttendanceDay;
use shiftledger::models::shift::Shift;

mod common;
use common::{setup_test_db, small_config, test_config};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::DateTime<Tz> {
    Manila.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

#[test]
fn recording_same_name_twice_stays_one_entry() {
    let db = setup_test_db("ledger_idempotent");
    let engine = Engine::new(&test_config(&db)).unwrap();

    let first = at(2026, 8, 26, 7, 0, 0);
    let second = at(2026, 8, 26, 7, 45, 0);
    engine
        .ingest("CLOCK IN\n#clockinprime\n#islafree", "Ana", first)
        .unwrap();
    engine
        .ingest("CLOCK IN\n#clockinprime\n#islafree", "Ana", second)
        .unwrap();

    let (_, snapshot) = engine.snapshot(Shift::Prime, second).unwrap();
    let row = snapshot.iter().find(|r| r.key == "islafree").unwrap();
    assert_eq!(row.user_count, 1);
    assert!(!row.missing);

    // last write wins on the timestamp
    let (_, entries) = engine.entries(Shift::Prime, second).unwrap();
    let (_, entry) = entries.iter().find(|(k, _)| k == "islafree").unwrap();
    assert_eq!(entry.users["Ana"], second);
}

#[test]
fn cover_and_user_are_tracked_separately() {
    let db = setup_test_db("ledger_cover");
    let engine = Engine::new(&test_config(&db)).unwrap();
    let ts = at(2026, 8, 26, 7, 0, 0);

    engine
        .ingest("CLOCK IN\n#clockinprime\n#islafree", "Ana", ts)
        .unwrap();
    engine
        .ingest("CLOCK IN\n#clockinprime\n#cover\n#islafree", "Bea", ts)
        .unwrap();

    let (_, snapshot) = engine.snapshot(Shift::Prime, ts).unwrap();
    let row = snapshot.iter().find(|r| r.key == "islafree").unwrap();
    assert_eq!(row.user_count, 1);
    assert_eq!(row.cover_count, 1);
}

#[test]
fn snapshot_is_in_catalog_order_with_missing_pages() {
    let db = setup_test_db("ledger_order");
    let engine = Engine::new(&small_config(&db)).unwrap();
    let ts = at(2026, 8, 26, 7, 0, 0);

    engine
        .ingest("CLOCK IN\n#clockinprime\n#b", "Ana", ts)
        .unwrap();

    let (_, snapshot) = engine.snapshot(Shift::Prime, ts).unwrap();
    let keys: Vec<&str> = snapshot.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["a", "b"]);
    assert!(snapshot[0].missing);
    assert!(!snapshot[1].missing);
}

#[test]
fn unknown_page_records_nothing_and_suggests() {
    let db = setup_test_db("ledger_unknown");
    let engine = Engine::new(&test_config(&db)).unwrap();
    let ts = at(2026, 8, 26, 7, 0, 0);

    let reply = engine
        .ingest("CLOCK IN\n#clockinprime\n#islafre", "Ana", ts)
        .unwrap();
    match reply {
        IngestReply::UnknownPage { tag, suggestion } => {
            assert_eq!(tag, "islafre");
            assert_eq!(suggestion.as_deref(), Some("islafree"));
        }
        other => panic!("expected UnknownPage, got {:?}", other),
    }

    let (_, snapshot) = engine.snapshot(Shift::Prime, ts).unwrap();
    assert!(snapshot.iter().all(|r| r.missing));
}

#[test]
fn rollover_swaps_days_and_keeps_both_in_storage() {
    let db = setup_test_db("ledger_rollover");
    let cfg = small_config(&db);
    let engine = Engine::new(&cfg).unwrap();

    let day_d = at(2026, 8, 25, 9, 0, 0);
    let day_d1 = at(2026, 8, 26, 9, 0, 0);

    engine
        .ingest("CLOCK IN\n#clockinprime\n#a", "Ana", day_d)
        .unwrap();
    // Event on D+1 forces the rollover
    engine
        .ingest("CLOCK IN\n#clockinprime\n#b", "Bea", day_d1)
        .unwrap();

    let (day, snapshot) = engine.snapshot(Shift::Prime, day_d1).unwrap();
    assert_eq!(day, AttendanceDay(day_d1.date_naive()));
    let a = snapshot.iter().find(|r| r.key == "a").unwrap();
    let b = snapshot.iter().find(|r| r.key == "b").unwrap();
    assert!(a.missing, "day D entries must not leak into D+1");
    assert!(!b.missing);

    // Both days remain independently retrievable from storage
    let store = Store::open(&db).unwrap();
    let d_records = store.load_day(AttendanceDay(day_d.date_naive())).unwrap();
    let d1_records = store.load_day(AttendanceDay(day_d1.date_naive())).unwrap();
    assert_eq!(d_records.len(), 1);
    assert_eq!(d_records[0].name, "Ana");
    assert_eq!(d1_records.len(), 1);
    assert_eq!(d1_records[0].name, "Bea");
}

#[test]
fn restart_reloads_active_day_from_storage() {
    let db = setup_test_db("ledger_restart");
    let cfg = small_config(&db);
    let ts = at(2026, 8, 26, 7, 0, 0);

    {
        let engine = Engine::new(&cfg).unwrap();
        engine
            .ingest("CLOCK IN\n#clockinprime\n#a", "Ana", ts)
            .unwrap();
    }

    // Fresh engine, same DB: the day's records come back
    let engine = Engine::new(&cfg).unwrap();
    let (_, snapshot) = engine.snapshot(Shift::Prime, ts).unwrap();
    let a = snapshot.iter().find(|r| r.key == "a").unwrap();
    assert_eq!(a.user_count, 1);
    assert!(!a.missing);
}

#[test]
fn tick_fires_once_per_day() {
    let db = setup_test_db("ledger_tick");
    let engine = Engine::new(&test_config(&db)).unwrap();

    let morning = at(2026, 8, 26, 7, 0, 0);
    assert!(engine.tick(morning).unwrap());
    assert!(!engine.tick(morning).unwrap());
    assert!(!engine.tick(at(2026, 8, 26, 23, 0, 0)).unwrap());

    // next attendance day starts at the 06:00 cutoff on the 27th
    assert!(!engine.tick(at(2026, 8, 27, 5, 59, 59)).unwrap());
    assert!(engine.tick(at(2026, 8, 27, 6, 0, 0)).unwrap());
    assert_eq!(
        engine.active_day(),
        AttendanceDay::parse("2026-08-27")
    );
}

#[test]
fn reset_clears_one_shift_only() {
    let db = setup_test_db("ledger_reset_shift");
    let engine = Engine::new(&small_config(&db)).unwrap();
    let ts = at(2026, 8, 26, 7, 0, 0);

    engine
        .ingest("CLOCK IN\n#clockinprime\n#a", "Ana", ts)
        .unwrap();
    engine
        .ingest("CLOCK IN\n#clockinmid\n#a", "Bea", ts)
        .unwrap();

    engine.reset(Some(Shift::Prime), ts).unwrap();

    let (_, prime) = engine.snapshot(Shift::Prime, ts).unwrap();
    let (_, mid) = engine.snapshot(Shift::Mid, ts).unwrap();
    assert!(prime.iter().all(|r| r.missing));
    assert_eq!(
        mid.iter().find(|r| r.key == "a").unwrap().user_count,
        1
    );

    // storage agrees after a reload
    let engine2 = Engine::new(&small_config(&db)).unwrap();
    let (_, prime2) = engine2.snapshot(Shift::Prime, ts).unwrap();
    assert!(prime2.iter().all(|r| r.missing));
}

#[test]
fn memory_only_mode_on_broken_storage() {
    // A directory path cannot be opened as a SQLite database
    let dir = std::env::temp_dir().join("shiftledger_not_a_db");
    std::fs::create_dir_all(&dir).unwrap();

    let cfg = small_config(&dir.to_string_lossy());
    let engine = Engine::new(&cfg).unwrap();
    let ts = at(2026, 8, 26, 7, 0, 0);

    // still records and reports, just without persistence
    engine
        .ingest("CLOCK IN\n#clockinprime\n#a", "Ana", ts)
        .unwrap();
    let (_, snapshot) = engine.snapshot(Shift::Prime, ts).unwrap();
    assert!(!snapshot.iter().find(|r| r.key == "a").unwrap().missing);
}
