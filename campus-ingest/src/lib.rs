//! campus-ingest: export-file parsers (course-table JSON, grade-sheet CSV,
//! meter-log CSV) that normalize raw university-system data into
//! `campus-core` types.

pub mod parsers;
pub mod types;

pub use parsers::course_table::parse_course_table;
pub use parsers::grade_sheet::{parse_grade_sheet, parse_grade_sheet_file};
pub use parsers::meter_log::{
    parse_meter_log, parse_meter_log_counting, parse_meter_log_file, MeterImport,
};
pub use parsers::week_spec::{parse_week_spec, parse_week_spec_with_max};
pub use types::{RawCourse, RawSlot};
