// tests/schedule_export.rs
use std::fs;

use greenmen_bot::align::filter_by_date;
use greenmen_bot::events::EventRecord;
use greenmen_bot::file::{read_events_csv, write_events_csv};

fn record(teams: &str, date: &str, location: &str) -> EventRecord {
    EventRecord {
        teams: teams.into(),
        date: date.into(),
        time: "5:00 PM".into(),
        location: location.into(),
        sport: "Baseball".into(),
    }
}

#[test]
fn export_has_header_and_no_index_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/aurora_city_schools_events.csv");
    let records = vec![
        record("Aurora City Schools vs Kent", "Fri 4/11", "Aurora HS"),
        record("Solon vs Aurora City Schools", "Sat 4/12", "Solon HS, Field 2"),
    ];

    write_events_csv(&path, &records).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Teams,Date,Time,Location,Sport"));
    assert_eq!(lines.next(), Some("Aurora City Schools vs Kent,Fri 4/11,5:00 PM,Aurora HS,Baseball"));

    // Commas inside a cell survive the trip.
    let back = read_events_csv(&path).unwrap();
    assert_eq!(back, records);
}

#[test]
fn cached_schedule_filters_like_a_live_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.csv");
    let records = vec![
        record("Aurora City Schools vs Kent", "Fri 4/11", "Aurora HS"),
        record("Aurora City Schools vs Hudson", "Tue 4/1", "Hudson HS"),
    ];
    write_events_csv(&path, &records).unwrap();

    let cached = read_events_csv(&path).unwrap();
    // Plain substring: "4/1" also hits "4/11".
    assert_eq!(filter_by_date(&cached, " 4/1 ").len(), 2);
    assert_eq!(filter_by_date(&cached, "4/11").len(), 1);
    assert!(filter_by_date(&cached, "5/2").is_empty());
}
