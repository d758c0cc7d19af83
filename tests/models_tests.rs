// Model tests: point pair encoding, series JSON shape, stat name parsing

use botstats::models::{Point, Sample, Series, StatName};
use chrono::NaiveDateTime;

#[test]
fn point_serializes_as_two_element_array() {
    let p = Point {
        time_ms: 1_609_459_200_000,
        value: 9,
    };
    assert_eq!(serde_json::to_string(&p).unwrap(), "[1609459200000,9]");
    let back: Point = serde_json::from_str("[1609459200000,9]").unwrap();
    assert_eq!(back, p);
}

#[test]
fn series_json_shape_matches_chart_convention() {
    let s = Series {
        name: "StatsBot".into(),
        data: vec![
            Point {
                time_ms: 0,
                value: 1,
            },
            Point {
                time_ms: 3_600_000,
                value: 2,
            },
        ],
    };
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "StatsBot", "data": [[0, 1], [3600000, 2]]})
    );
}

#[test]
fn stat_name_parses_every_member_of_the_set() {
    for stat in StatName::ALL {
        let parsed: StatName = stat.to_string().parse().unwrap();
        assert_eq!(parsed, stat);
    }
}

#[test]
fn stat_name_display_matches_column() {
    assert_eq!(StatName::TotalPosts.to_string(), "total_posts");
    assert_eq!(StatName::GuestsOnline.column(), "guests_online");
}

#[test]
fn stat_name_rejects_unknown_names() {
    assert!("total_bots".parse::<StatName>().is_err());
    assert!("".parse::<StatName>().is_err());
    assert!("TOTAL_POSTS".parse::<StatName>().is_err());
    // a column expression is just another unknown name
    assert!(
        "total_posts`, (SELECT password FROM users) AS `x"
            .parse::<StatName>()
            .is_err()
    );
}

#[test]
fn sample_value_of_selects_matching_column() {
    let s = Sample {
        created_at: NaiveDateTime::parse_from_str("2021-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
        active_members: 1,
        total_members: 2,
        members_online: 3,
        guests_online: 4,
        total_online: 5,
        total_threads: 6,
        total_posts: 7,
    };
    assert_eq!(s.value_of(StatName::ActiveMembers), 1);
    assert_eq!(s.value_of(StatName::TotalMembers), 2);
    assert_eq!(s.value_of(StatName::MembersOnline), 3);
    assert_eq!(s.value_of(StatName::GuestsOnline), 4);
    assert_eq!(s.value_of(StatName::TotalOnline), 5);
    assert_eq!(s.value_of(StatName::TotalThreads), 6);
    assert_eq!(s.value_of(StatName::TotalPosts), 7);
}
