//! Grade-sheet CSV export parser.
//!
//! Header row as the academic system exports it:
//! 学期,课程编号,课程名称,成绩,学分,绩点,考核方式,课程性质

use anyhow::{Context, Result};
use serde::Deserialize;

use campus_core::{AssessmentMethod, GradeRecord};

#[derive(Debug, Deserialize)]
struct RawGradeRow {
    #[serde(rename = "学期")]
    semester: String,
    #[serde(rename = "课程编号")]
    course_id: String,
    #[serde(rename = "课程名称")]
    course_name: String,
    #[serde(rename = "成绩")]
    grade: i32,
    #[serde(rename = "学分")]
    credit: f64,
    #[serde(rename = "绩点")]
    grade_point: f64,
    #[serde(rename = "考核方式")]
    assessment: String,
    #[serde(rename = "课程性质", default)]
    course_nature: Option<String>,
}

/// Parse a grade-sheet CSV export. Rows that fail to deserialize are
/// skipped; a sheet that cannot be read at all is an error.
pub fn parse_grade_sheet(csv_text: &str) -> Result<Vec<GradeRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut records = Vec::new();
    for row in rdr.deserialize::<RawGradeRow>() {
        let row = match row {
            Ok(r) => r,
            Err(_) => continue, // skip malformed rows
        };
        records.push(GradeRecord {
            course_id: row.course_id,
            course_name: row.course_name,
            grade: row.grade,
            credit: row.credit,
            grade_point: row.grade_point,
            semester: row.semester,
            assessment: AssessmentMethod::from_label(&row.assessment),
            course_nature: row.course_nature.filter(|s| !s.trim().is_empty()),
        });
    }

    Ok(records)
}

/// Read and parse a grade sheet from disk.
pub fn parse_grade_sheet_file(path: impl AsRef<std::path::Path>) -> Result<Vec<GradeRecord>> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("reading {}", path.as_ref().display()))?;
    parse_grade_sheet(&text)
}
