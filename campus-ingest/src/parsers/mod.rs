pub mod course_table;
pub mod grade_sheet;
pub mod meter_log;
pub mod week_spec;
