//! Annual review aggregation.
//!
//! Takes a year's grades, course table, MOOC profile, and dorm meter
//! history, and boils them down to the descriptive statistics the review
//! pages show. Pure computation over snapshots; recomputed on every view
//! and never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use campus_core::{
    charge_cycles, AssessmentMethod, Course, ElectricityReading, GradeRecord, Weekday,
    PERIOD_MINUTES,
};

use crate::building::building_name;
use crate::mooc::parse_online_minutes;

/// How many entries the teacher/building leaderboards keep.
const RANKING_SIZE: usize = 5;

/// Student identity as fetched from the portal; shown on the report
/// header, not used in any computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub student_id: Option<String>,
    pub college: Option<String>,
}

/// MOOC platform profile as fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoocProfile {
    /// Free text, e.g. "3小时25分".
    pub online_time: String,
    pub login_count: u32,
}

/// One dorm's meter history for the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DormHistory {
    pub label: String,
    pub readings: Vec<ElectricityReading>,
}

/// Electricity summary for one dorm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DormStats {
    pub label: String,
    pub min_level: Option<f64>,
    pub max_level: Option<f64>,
    pub charge_cycles: usize,
}

/// The course with the best numeric grade. On equal grades the first
/// record in fetch order wins; upstream order is unspecified, so ties are
/// not otherwise broken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighestGrade {
    pub course_name: String,
    pub grade: i32,
}

/// The computed annual-review snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualReview {
    pub student_name: Option<String>,
    /// Credit-weighted grade-point average; 0.0 with no credits.
    pub gpa: f64,
    pub exam_count: usize,
    pub assessment_count: usize,
    /// Course names with a full 4.0 grade point.
    pub full_point_courses: Vec<String>,
    /// Grade point exactly 1.0 (the discrete scale makes equality safe).
    pub just_passed_count: usize,
    /// Grade point exactly 0.0.
    pub failed_count: usize,
    pub highest_grade: Option<HighestGrade>,
    /// Occurrence-weighted: one count per active week of each session.
    pub early_morning_count: usize,
    pub weekend_count: usize,
    pub evening_count: usize,
    pub total_study_minutes: u64,
    /// Occurrence-weighted session counts per weekday, calendar order
    /// Sunday..Saturday.
    pub sessions_per_day: Vec<(Weekday, usize)>,
    /// Top teachers by occurrence count, descending (name breaks ties).
    pub teacher_ranking: Vec<(String, usize)>,
    /// Top buildings by occurrence count, descending (name breaks ties).
    pub building_ranking: Vec<(String, usize)>,
    pub dorm_stats: Vec<DormStats>,
    pub mooc_online_minutes: u32,
    pub mooc_login_count: u32,
}

impl AnnualReview {
    pub fn compute(
        profile: Option<&StudentProfile>,
        grades: &[GradeRecord],
        courses: &[Course],
        mooc: Option<&MoocProfile>,
        dorms: &[DormHistory],
    ) -> Self {
        let total_credit: f64 = grades.iter().map(|g| g.credit).sum();
        let gpa = if total_credit > 0.0 {
            grades.iter().map(|g| g.grade_point * g.credit).sum::<f64>() / total_credit
        } else {
            0.0
        };

        let exam_count = grades
            .iter()
            .filter(|g| g.assessment == AssessmentMethod::Exam)
            .count();
        let assessment_count = grades
            .iter()
            .filter(|g| g.assessment == AssessmentMethod::Assessment)
            .count();

        let full_point_courses: Vec<String> = grades
            .iter()
            .filter(|g| g.grade_point >= 4.0)
            .map(|g| g.course_name.clone())
            .collect();
        let just_passed_count = grades.iter().filter(|g| g.grade_point == 1.0).count();
        let failed_count = grades.iter().filter(|g| g.grade_point == 0.0).count();

        let mut highest_grade: Option<HighestGrade> = None;
        for g in grades {
            let beats = highest_grade.as_ref().is_none_or(|h| g.grade > h.grade);
            if beats {
                highest_grade = Some(HighestGrade {
                    course_name: g.course_name.clone(),
                    grade: g.grade,
                });
            }
        }

        let mut early_morning_count = 0usize;
        let mut weekend_count = 0usize;
        let mut evening_count = 0usize;
        let mut total_study_minutes = 0u64;
        let mut per_day: HashMap<Weekday, usize> = HashMap::new();
        let mut teachers: HashMap<String, usize> = HashMap::new();
        let mut buildings: HashMap<String, usize> = HashMap::new();

        for course in courses {
            for session in &course.sessions {
                let occurrences = session.occurrences();
                if session.start_period == 1 {
                    early_morning_count += occurrences;
                }
                if session.day.is_weekend() {
                    weekend_count += occurrences;
                }
                if session.start_period == 9 && session.end_period == 10 {
                    evening_count += occurrences;
                }
                total_study_minutes +=
                    session.period_count() as u64 * PERIOD_MINUTES as u64 * occurrences as u64;
                *per_day.entry(session.day).or_default() += occurrences;

                if let Some(teacher) = &course.teacher {
                    *teachers.entry(teacher.clone()).or_default() += occurrences;
                }
                if let Some(classroom) = &session.classroom {
                    let building = building_name(classroom);
                    if !building.is_empty() {
                        *buildings.entry(building).or_default() += occurrences;
                    }
                }
            }
        }

        // Calendar order Sun..Sat, not string order.
        let mut sessions_per_day: Vec<(Weekday, usize)> = per_day.into_iter().collect();
        sessions_per_day.sort_by_key(|(day, _)| *day);

        let dorm_stats = dorms
            .iter()
            .map(|dorm| DormStats {
                label: dorm.label.clone(),
                min_level: dorm
                    .readings
                    .iter()
                    .map(|r| r.level)
                    .min_by(|a, b| a.total_cmp(b)),
                max_level: dorm
                    .readings
                    .iter()
                    .map(|r| r.level)
                    .max_by(|a, b| a.total_cmp(b)),
                charge_cycles: charge_cycles(&dorm.readings),
            })
            .collect();

        AnnualReview {
            student_name: profile.map(|p| p.name.clone()),
            gpa,
            exam_count,
            assessment_count,
            full_point_courses,
            just_passed_count,
            failed_count,
            highest_grade,
            early_morning_count,
            weekend_count,
            evening_count,
            total_study_minutes,
            sessions_per_day,
            teacher_ranking: ranking(teachers),
            building_ranking: ranking(buildings),
            dorm_stats,
            mooc_online_minutes: mooc.map(|m| parse_online_minutes(&m.online_time)).unwrap_or(0),
            mooc_login_count: mooc.map(|m| m.login_count).unwrap_or(0),
        }
    }
}

/// Frequency map -> top-N list, count descending, name ascending on ties.
fn ranking(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(RANKING_SIZE);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::Session;
    use chrono::{TimeZone, Utc};

    fn grade(name: &str, grade: i32, credit: f64, gp: f64, assessment: AssessmentMethod) -> GradeRecord {
        GradeRecord {
            course_id: format!("C-{name}"),
            course_name: name.to_string(),
            grade,
            credit,
            grade_point: gp,
            semester: "2025-2026-1".to_string(),
            assessment,
            course_nature: None,
        }
    }

    fn empty() -> AnnualReview {
        AnnualReview::compute(None, &[], &[], None, &[])
    }

    #[test]
    fn gpa_is_credit_weighted() {
        let grades = vec![
            grade("甲", 95, 2.0, 4.0, AssessmentMethod::Exam),
            grade("乙", 70, 2.0, 2.0, AssessmentMethod::Exam),
        ];
        let review = AnnualReview::compute(None, &grades, &[], None, &[]);
        assert_eq!(review.gpa, 3.0);
    }

    #[test]
    fn empty_grades_mean_zero_gpa() {
        assert_eq!(empty().gpa, 0.0);
        assert_eq!(empty().highest_grade, None);
    }

    #[test]
    fn grade_buckets_use_the_discrete_scale() {
        let grades = vec![
            grade("满绩", 95, 2.0, 4.0, AssessmentMethod::Exam),
            grade("刚过", 60, 2.0, 1.0, AssessmentMethod::Exam),
            grade("挂科", 40, 2.0, 0.0, AssessmentMethod::Assessment),
            grade("普通", 80, 2.0, 3.0, AssessmentMethod::Assessment),
        ];
        let review = AnnualReview::compute(None, &grades, &[], None, &[]);
        assert_eq!(review.full_point_courses, vec!["满绩".to_string()]);
        assert_eq!(review.just_passed_count, 1);
        assert_eq!(review.failed_count, 1);
        assert_eq!(review.exam_count, 2);
        assert_eq!(review.assessment_count, 2);
    }

    #[test]
    fn highest_grade_keeps_first_on_ties() {
        let grades = vec![
            grade("先到", 92, 2.0, 4.0, AssessmentMethod::Exam),
            grade("后到", 92, 2.0, 4.0, AssessmentMethod::Exam),
        ];
        let review = AnnualReview::compute(None, &grades, &[], None, &[]);
        assert_eq!(review.highest_grade.unwrap().course_name, "先到");
    }

    fn course_fixture() -> Vec<Course> {
        vec![
            Course::new("高数")
                .with_teacher("张老师")
                .with_session(
                    // Period 1-2, 8 weeks: early-morning x8.
                    Session::new(Weekday::Monday, 1, 2)
                        .with_classroom("金12-101A")
                        .with_weeks((1..=8).collect()),
                )
                .with_session(
                    // Evening 9-10, 4 weeks.
                    Session::new(Weekday::Monday, 9, 10)
                        .with_classroom("金12-305")
                        .with_weeks((1..=4).collect()),
                ),
            Course::new("选修")
                .with_teacher("李老师")
                .with_session(
                    // Weekend, 2 weeks.
                    Session::new(Weekday::Saturday, 3, 4)
                        .with_classroom("理科楼-201")
                        .with_weeks(vec![5, 6]),
                ),
        ]
    }

    #[test]
    fn occurrence_weighted_session_counts() {
        let review = AnnualReview::compute(None, &[], &course_fixture(), None, &[]);
        assert_eq!(review.early_morning_count, 8);
        assert_eq!(review.evening_count, 4);
        assert_eq!(review.weekend_count, 2);
        // (2 periods * 45min * 8) + (2 * 45 * 4) + (2 * 45 * 2) = 1260.
        assert_eq!(review.total_study_minutes, 1260);
    }

    #[test]
    fn per_day_counts_in_calendar_order() {
        let review = AnnualReview::compute(None, &[], &course_fixture(), None, &[]);
        assert_eq!(
            review.sessions_per_day,
            vec![(Weekday::Monday, 12), (Weekday::Saturday, 2)]
        );
    }

    #[test]
    fn rankings_are_weighted_and_capped() {
        let review = AnnualReview::compute(None, &[], &course_fixture(), None, &[]);
        assert_eq!(
            review.teacher_ranking,
            vec![("张老师".to_string(), 12), ("李老师".to_string(), 2)]
        );
        assert_eq!(
            review.building_ranking,
            vec![("金12".to_string(), 12), ("理科楼".to_string(), 2)]
        );
    }

    #[test]
    fn dorm_stats_cover_min_max_and_cycles() {
        let at = |d| Utc.with_ymd_and_hms(2025, 11, d, 8, 0, 0).unwrap();
        let dorms = vec![DormHistory {
            label: "16栋A区520".to_string(),
            readings: vec![
                ElectricityReading::new(at(1), 50.0),
                ElectricityReading::new(at(2), 12.0),
                ElectricityReading::new(at(3), 80.0),
            ],
        }];
        let review = AnnualReview::compute(None, &[], &[], None, &dorms);
        let stats = &review.dorm_stats[0];
        assert_eq!(stats.min_level, Some(12.0));
        assert_eq!(stats.max_level, Some(80.0));
        assert_eq!(stats.charge_cycles, 1);
    }

    #[test]
    fn mooc_profile_is_parsed_or_defaulted() {
        let mooc = MoocProfile {
            online_time: "3小时25分".to_string(),
            login_count: 42,
        };
        let review = AnnualReview::compute(None, &[], &[], Some(&mooc), &[]);
        assert_eq!(review.mooc_online_minutes, 205);
        assert_eq!(review.mooc_login_count, 42);
        assert_eq!(empty().mooc_online_minutes, 0);
    }
}
