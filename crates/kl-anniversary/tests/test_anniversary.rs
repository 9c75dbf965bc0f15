//! End-to-end: config in, anniversaries and reminders out.

use kl_anniversary::{
    Anniversary, AnniversaryDate, AnniversaryKind, Config, ListReminder, ReminderBoard,
};
use kl_calendar::day_count::MIN_ORDINAL;
use kl_calendar::{LunarDate, SolarDate};
use proptest::prelude::*;

fn solar(y: i32, m: u32, d: u32) -> SolarDate {
    SolarDate::new(y, m, d).unwrap()
}

const CONFIG: &str = r#"{
    "anniversaries": {
        "dad": { "date": "1985-08-15", "lunar": true, "type": "birth", "name": "아빠 생신" },
        "wedding": { "date": "2015-10-19", "kind": "wedding", "name": "결혼기념일" },
        "grandma": { "date": "2023-02-10", "lunar": true, "intercalation": true, "kind": "memorial" }
    },
    "reminders": { "lookahead_days": 3 }
}"#;

#[test]
fn config_to_board() {
    let cfg: Config = serde_json::from_str(CONFIG).unwrap();
    let anniversaries = cfg.anniversaries().unwrap();
    let names: Vec<&str> = anniversaries.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["아빠 생신", "grandma", "결혼기념일"]);

    let today = solar(2026, 10, 16);
    let mut board = ReminderBoard::new();
    for a in &anniversaries {
        board.record_anniversary(a, &today).unwrap();
    }
    let chuseok: ListReminder = "음0906 오늘 할 일".parse().unwrap();
    board.record(chuseok.name.clone(), chuseok.d_day(&today).unwrap().days);

    assert_eq!(board.get("아빠 생신"), Some(334));
    assert_eq!(board.get("결혼기념일"), Some(3));
    assert_eq!(
        board.announcement(cfg.reminders.lookahead_days),
        "오늘은 오늘 할 일, 3일 후는 결혼기념일"
    );
}

#[test]
fn snapshot_serializes() {
    let a = Anniversary::new(
        "seollal",
        AnniversaryDate::Lunar(LunarDate::new(2024, 1, 1, false).unwrap()),
        AnniversaryKind::Anniversary,
    );
    let state = a.snapshot(&solar(2024, 2, 10)).unwrap();
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["solar_date"]["day"], 10);
    assert_eq!(json["lunar_date_gapja"], "갑진년 병인월 갑진일");
    assert_eq!(json["kind"], "anniversary");
    assert_eq!(json["d_day"], 0);
}

#[test]
fn anniversary_json_round_trip() {
    let a = Anniversary::new(
        "leap",
        AnniversaryDate::Lunar(LunarDate::new(2023, 2, 10, true).unwrap()),
        AnniversaryKind::Memorial,
    );
    let text = serde_json::to_string(&a).unwrap();
    let back: Anniversary = serde_json::from_str(&text).unwrap();
    assert_eq!(back, a);
}

fn ordinal(y: i32, m: u32, d: u32) -> i32 {
    solar(y, m, d).ordinal().unwrap()
}

proptest! {
    #[test]
    fn next_occurrence_is_within_a_year(
        origin in MIN_ORDINAL..ordinal(2049, 1, 1),
        today in ordinal(1600, 1, 1)..ordinal(2049, 1, 1),
        lunar in any::<bool>(),
    ) {
        let date = if lunar {
            AnniversaryDate::Lunar(LunarDate::from_ordinal(origin).unwrap())
        } else {
            AnniversaryDate::Solar(SolarDate::from_ordinal(origin).unwrap())
        };
        let a = Anniversary::new("p", date, AnniversaryKind::Anniversary);
        let today = SolarDate::from_ordinal(today).unwrap();
        let d = a.d_day(&today).unwrap();
        prop_assert!(d.date >= today);
        prop_assert!((0..400).contains(&d.days));
        prop_assert_eq!(today.add_days(d.days).unwrap(), d.date);
    }
}
