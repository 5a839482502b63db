//! End-to-end: raw export files through the ingest parsers into the
//! annual-review aggregation.

use campus_ingest::{parse_course_table, parse_grade_sheet, parse_meter_log};
use campus_review::{AnnualReview, DormHistory, MoocProfile, StudentProfile};

const COURSE_JSON: &str = r#"[
    {
        "name": "数据结构",
        "teacher": "王老师",
        "slots": [
            {"day": 1, "startPeriod": 1, "endPeriod": 2, "weeks": "1-16周", "classroom": "金12-101A"},
            {"day": 3, "startPeriod": 9, "endPeriod": 10, "weeks": "1-8周", "classroom": "金12-305"}
        ]
    },
    {
        "name": "高等数学",
        "teacher": "张老师",
        "slots": [
            {"day": 6, "startPeriod": 3, "endPeriod": 4, "weeks": "1-4周", "classroom": "理科楼-201"}
        ]
    }
]"#;

const GRADE_CSV: &str = "\
学期,课程编号,课程名称,成绩,学分,绩点,考核方式,课程性质
2025-2026-1,B001,数据结构,95,4,4.0,考试,必修
2025-2026-1,B002,高等数学,62,5,1.0,考试,必修
2025-2026-2,B003,大学英语,78,2,2.7,考查,必修
";

const METER_CSV: &str = "\
查询时间,剩余电量
2025-11-01 08:00:00,52.3
2025-11-02 08:00:00,44.1
2025-11-03 08:00:00,90.0
2025-11-04 08:00:00,82.5
";

#[test]
fn review_from_raw_exports() {
    let courses = parse_course_table(COURSE_JSON).unwrap();
    let grades = parse_grade_sheet(GRADE_CSV).unwrap();
    let readings = parse_meter_log(METER_CSV).unwrap();
    let mooc = MoocProfile {
        online_time: "12小时30分".to_string(),
        login_count: 57,
    };
    let dorms = vec![DormHistory {
        label: "16-520".to_string(),
        readings,
    }];

    let profile = StudentProfile {
        name: "李明".to_string(),
        student_id: Some("202501001".to_string()),
        college: None,
    };

    let review = AnnualReview::compute(Some(&profile), &grades, &courses, Some(&mooc), &dorms);

    assert_eq!(review.student_name.as_deref(), Some("李明"));

    // (4*4 + 1*5 + 2.7*2) / 11
    assert!((review.gpa - 26.4 / 11.0).abs() < 1e-9);
    assert_eq!(review.exam_count, 2);
    assert_eq!(review.assessment_count, 1);
    assert_eq!(review.full_point_courses, vec!["数据结构".to_string()]);
    assert_eq!(review.just_passed_count, 1);
    assert_eq!(review.highest_grade.as_ref().unwrap().course_name, "数据结构");

    // Monday 1-2 for 16 weeks, Wednesday 9-10 for 8, Saturday 3-4 for 4.
    assert_eq!(review.early_morning_count, 16);
    assert_eq!(review.evening_count, 8);
    assert_eq!(review.weekend_count, 4);
    assert_eq!(review.total_study_minutes, (16 + 8 + 4) * 2 * 45);

    assert_eq!(review.teacher_ranking[0], ("王老师".to_string(), 24));
    assert_eq!(review.building_ranking[0], ("金12".to_string(), 24));

    let dorm = &review.dorm_stats[0];
    assert_eq!(dorm.min_level, Some(44.1));
    assert_eq!(dorm.max_level, Some(90.0));
    assert_eq!(dorm.charge_cycles, 1);

    assert_eq!(review.mooc_online_minutes, 750);
    assert_eq!(review.mooc_login_count, 57);
}
