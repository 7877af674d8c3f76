use chrono::{NaiveDate, NaiveDateTime};
use home_study::clock::FixedClock;
use home_study::roster::{
    order_students, sort_students, sort_students_at, RosterOrdering, StudentId, StudentRecord,
};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("valid instant")
}

fn student(id: &str, name: &str, course: &str, class_name: &str, end: &str) -> StudentRecord {
    StudentRecord {
        id: StudentId::new(id),
        name: name.to_string(),
        course: course.to_string(),
        class_name: class_name.to_string(),
        start_date: Some("2025-01-06".to_string()),
        end_date: Some(end.to_string()),
        registered_by: None,
        registered_at: Some("2025-01-06T08:00:00".to_string()),
        last_record_at: None,
    }
}

fn ids(records: &[StudentRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}

fn roster() -> Vec<StudentRecord> {
    vec![
        student("ended", "Carla", "Enfermagem", "ENF-2A", "2025-02-28"),
        student("soon", "Bruno", "Administração", "ADM-1A", "2025-03-14"),
        student("late", "Diego", "Engenharia", "ENG-3B", "2025-05-16"),
        student("early", "Ana", "Administração", "ADM-1A", "2025-03-28"),
        student("broken", "Elisa", "Enfermagem", "ENF-2A", "not-a-date"),
    ]
}

#[test]
fn status_first_groups_active_then_ending_soon_then_ended() {
    let sorted = sort_students_at(&roster(), now());
    assert_eq!(ids(&sorted), vec!["early", "late", "soon", "ended", "broken"]);
}

#[test]
fn sorting_twice_at_the_same_instant_is_identical() {
    let records = roster();
    let clock = FixedClock(now());
    let first = sort_students(&records, &clock);
    let second = sort_students(&records, &clock);
    assert_eq!(first, second);
}

#[test]
fn tie_break_chain_falls_through_activity_course_class_and_name() {
    let mut recent = student("recent", "Zeca", "Engenharia", "ENG-1A", "2025-04-30");
    recent.last_record_at = Some("2025-03-09T18:00:00".to_string());
    let records = vec![
        student("eng", "Ana", "Engenharia", "ENG-1A", "2025-04-30"),
        student("adm-b", "Bia", "Administração", "ADM-1B", "2025-04-30"),
        student("adm-a2", "Caio", "Administração", "ADM-1A", "2025-04-30"),
        student("adm-a1", "Ana", "Administração", "ADM-1A", "2025-04-30"),
        recent,
    ];

    let sorted = sort_students_at(&records, now());
    assert_eq!(ids(&sorted), vec!["recent", "adm-a1", "adm-a2", "adm-b", "eng"]);
}

#[test]
fn unreadable_activity_sorts_last_within_its_tier() {
    let mut unregistered = student("unregistered", "Bia", "Administração", "ADM-1A", "2025-04-30");
    unregistered.registered_at = None;
    let mut garbled = student("garbled", "Caio", "Administração", "ADM-1A", "2025-04-30");
    garbled.last_record_at = Some("sometime last week".to_string());
    let dated = student("dated", "Zeca", "Engenharia", "ENG-3B", "2025-04-30");

    let sorted = sort_students_at(&[garbled, unregistered, dated], now());
    assert_eq!(ids(&sorted), vec!["dated", "unregistered", "garbled"]);
}

#[test]
fn sorting_leaves_input_untouched() {
    let records = roster();
    let before = ids(&records).into_iter().map(str::to_string).collect::<Vec<_>>();

    let _ = sort_students_at(&records, now());
    let _ = order_students(&records, RosterOrdering::DeadlineFirst, now());

    let after = ids(&records).into_iter().map(str::to_string).collect::<Vec<_>>();
    assert_eq!(before, after);
}

#[test]
fn deadline_first_ignores_status() {
    let sorted = order_students(&roster(), RosterOrdering::DeadlineFirst, now());
    assert_eq!(ids(&sorted), vec!["ended", "soon", "early", "late", "broken"]);
}

#[test]
fn as_provided_keeps_input_order() {
    let sorted = order_students(&roster(), RosterOrdering::AsProvided, now());
    assert_eq!(ids(&sorted), ids(&roster()));
}

#[test]
fn empty_roster_sorts_to_empty() {
    assert!(sort_students_at(&[], now()).is_empty());
}
