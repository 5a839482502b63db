use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use campus_core::{
    current_week, relevant_session, semester_status, timeline_snapshot, today_sessions,
    charge_cycles, consumption_rate, predicted_exhaustion, severity, Course, ElectricityReading,
    GradeRecord, LivePhase, SemesterStatus,
};
use campus_ingest::{parse_course_table, parse_grade_sheet_file, parse_meter_log_counting};
use campus_review::{AnnualReview, DormHistory, MoocProfile, StudentProfile};

mod cache;
mod config;

use cache::{cached_dorm_ids, dorm_kind, read_cache, write_cache, CacheEntry};
use config::{init_config, load_config, Config};

#[derive(Parser, Debug)]
#[command(name = "campus", version, about = "Campus schedule & utilities CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default config (optionally setting the semester start)
    Init {
        /// Sunday of week 1, e.g. 2025-09-07
        #[arg(long)]
        semester_start: Option<NaiveDate>,
    },

    /// Import exported data files into the local cache
    Import {
        #[command(subcommand)]
        command: ImportCommand,
    },

    /// Today's remaining classes
    Today,

    /// The single most relevant class right now (live-status payload)
    Live,

    /// Week number and semester status
    Week {
        /// Date to resolve (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Widget timeline snapshot as JSON (sessions + refresh schedule)
    WidgetPlan,

    /// Dorm electricity commands
    Power {
        #[command(subcommand)]
        command: PowerCommand,
    },

    /// Annual review for an academic year
    Review {
        /// Starting year of the academic year, e.g. 2025 for 2025-2026
        #[arg(long)]
        year: i32,
    },
}

#[derive(Subcommand, Debug)]
enum ImportCommand {
    /// Course-table JSON export
    Courses { file: PathBuf },

    /// Grade-sheet CSV export
    Grades { file: PathBuf },

    /// Electricity meter-log CSV, appended to one dorm's history
    Power {
        file: PathBuf,

        /// Dorm identifier, e.g. 16-520
        #[arg(long)]
        dorm: String,
    },

    /// Student identity shown on report headers
    Profile {
        #[arg(long)]
        name: String,

        #[arg(long)]
        student_id: Option<String>,

        #[arg(long)]
        college: Option<String>,
    },

    /// MOOC profile figures (shown on the platform's profile page)
    Mooc {
        /// Accumulated online time text, e.g. "3小时25分"
        #[arg(long)]
        online_time: String,

        #[arg(long, default_value_t = 0)]
        logins: u32,
    },
}

#[derive(Subcommand, Debug)]
enum PowerCommand {
    /// Latest level, trend and predicted exhaustion for a dorm
    Status {
        /// Dorm identifier (defaults to every cached dorm)
        #[arg(long)]
        dorm: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init { semester_start } => init_config(semester_start)?,
        Command::Import { command } => run_import(command)?,
        Command::Today => run_today()?,
        Command::Live => run_live()?,
        Command::Week { date } => run_week(date)?,
        Command::WidgetPlan => run_widget_plan()?,
        Command::Power { command } => match command {
            PowerCommand::Status { dorm } => run_power_status(dorm)?,
        },
        Command::Review { year } => run_review(year)?,
    }

    Ok(())
}

/// Wall-clock "now" in the configured campus timezone.
fn campus_now(cfg: &Config) -> Result<NaiveDateTime> {
    let tz: chrono_tz::Tz = cfg
        .campus
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {}", cfg.campus.timezone))?;
    Ok(Utc::now().with_timezone(&tz).naive_local())
}

fn require_courses() -> Result<CacheEntry<Vec<Course>>> {
    read_cache("courses")?
        .context("no cached course table (run `campus import courses <file>` first)")
}

fn run_import(command: ImportCommand) -> Result<()> {
    match command {
        ImportCommand::Courses { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let courses = parse_course_table(&json)
                .with_context(|| format!("parsing {}", file.display()))?;
            let sessions: usize = courses.iter().map(|c| c.sessions.len()).sum();
            write_cache("courses", &courses)?;
            println!("Imported {} courses ({} sessions)", courses.len(), sessions);
        }
        ImportCommand::Grades { file } => {
            let grades = parse_grade_sheet_file(&file)
                .with_context(|| format!("parsing {}", file.display()))?;
            write_cache("grades", &grades)?;
            println!("Imported {} grade records", grades.len());
        }
        ImportCommand::Power { file, dorm } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let import = parse_meter_log_counting(&text)
                .with_context(|| format!("parsing {}", file.display()))?;
            if import.skipped > 0 {
                println!("Warning: skipped {} unreadable rows", import.skipped);
            }

            let kind = dorm_kind(&dorm);
            let mut readings: Vec<ElectricityReading> = read_cache(&kind)?
                .map(|entry: CacheEntry<Vec<ElectricityReading>>| entry.data)
                .unwrap_or_default();
            readings.extend(import.readings.iter().copied());
            write_cache(&kind, &readings)?;
            println!("Dorm {dorm}: {} readings on record", readings.len());
        }
        ImportCommand::Profile { name, student_id, college } => {
            let profile = StudentProfile {
                name,
                student_id,
                college,
            };
            write_cache("profile", &profile)?;
            println!("Imported student profile");
        }
        ImportCommand::Mooc { online_time, logins } => {
            let profile = MoocProfile {
                online_time,
                login_count: logins,
            };
            write_cache("mooc", &profile)?;
            println!("Imported MOOC profile");
        }
    }
    Ok(())
}

fn run_today() -> Result<()> {
    let cfg = load_config()?;
    let ctx = cfg.semester_context();
    let courses = require_courses()?;
    let now = campus_now(&cfg)?;

    match current_week(&ctx, now.date()) {
        Some(week) => println!("Week {week} · {}", now.format("%Y-%m-%d %H:%M")),
        None => {
            println!("Outside the semester ({:?})", semester_status(&ctx, now.date()));
            return Ok(());
        }
    }

    let sessions = today_sessions(&ctx, now, &courses.data);
    if sessions.is_empty() {
        println!("No more classes today.");
        return Ok(());
    }
    for s in &sessions {
        let marker = if s.is_current { ">" } else { " " };
        println!(
            "{marker} {}-{}  {}  {}",
            s.starts_at.format("%H:%M"),
            s.ends_at.format("%H:%M"),
            s.entry.course_name,
            s.entry.session.classroom.as_deref().unwrap_or("-"),
        );
    }
    println!("(course table imported {})", courses.fetched_at.format("%Y-%m-%d"));
    Ok(())
}

fn run_live() -> Result<()> {
    let cfg = load_config()?;
    let ctx = cfg.semester_context();
    let courses = require_courses()?;
    let now = campus_now(&cfg)?;

    let Some(live) = relevant_session(&ctx, now, &courses.data) else {
        println!("Nothing on right now.");
        return Ok(());
    };

    let t = now.time();
    match live.phase {
        LivePhase::InProgress => {
            let left = (live.ends_at - t).num_minutes();
            println!("In class: {} ({} min left)", live.entry.course_name, left);
        }
        LivePhase::StartingSoon => {
            let until = (live.starts_at - t).num_minutes();
            println!("Up next: {} (starts in {} min)", live.entry.course_name, until);
        }
        LivePhase::JustEnded => {
            println!("Just finished: {}", live.entry.course_name);
        }
    }
    if let Some(room) = &live.entry.session.classroom {
        println!("Room: {room}");
    }
    Ok(())
}

fn run_week(date: Option<NaiveDate>) -> Result<()> {
    let cfg = load_config()?;
    let ctx = cfg.semester_context();
    let date = match date {
        Some(d) => d,
        None => campus_now(&cfg)?.date(),
    };

    match semester_status(&ctx, date) {
        SemesterStatus::Before => println!("{date}: before the semester"),
        SemesterStatus::After => println!("{date}: after the semester"),
        SemesterStatus::In => {
            // In-semester dates always resolve to a week.
            if let Some(week) = current_week(&ctx, date) {
                println!("{date}: week {week} of {}", ctx.week_count);
            }
        }
    }
    Ok(())
}

fn run_widget_plan() -> Result<()> {
    let cfg = load_config()?;
    let ctx = cfg.semester_context();
    let courses = require_courses()?;
    let now = campus_now(&cfg)?;

    let snapshot = timeline_snapshot(&ctx, now, &courses.data);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_power_status(dorm: Option<String>) -> Result<()> {
    let dorms = match dorm {
        Some(d) => vec![d],
        None => {
            let ids = cached_dorm_ids()?;
            if ids.is_empty() {
                bail!("no dorm history cached (run `campus import power --dorm <id> <file>`)");
            }
            ids
        }
    };

    for dorm in dorms {
        let kind = dorm_kind(&dorm);
        let Some(entry) = read_cache::<Vec<ElectricityReading>>(&kind)? else {
            bail!("no history for dorm {dorm}");
        };
        let readings = entry.data;
        let Some(latest) = readings.iter().max_by_key(|r| r.at) else {
            println!("Dorm {dorm}: no readings");
            continue;
        };

        let band = severity(latest.level);
        println!(
            "Dorm {dorm}: {:.1} kWh [{}] (read {})",
            latest.level,
            band.color(),
            latest.at.format("%Y-%m-%d %H:%M"),
        );
        match consumption_rate(&readings) {
            Some(rate) if rate > 0.0 => {
                println!("  using ~{rate:.1} kWh/day");
                if let Some(when) = predicted_exhaustion(&readings) {
                    println!("  empty around {}", when.format("%Y-%m-%d %H:%M"));
                }
            }
            _ => println!("  no depletion trend (recently recharged?)"),
        }
        println!("  {} recharge(s) on record", charge_cycles(&readings));
    }
    Ok(())
}

fn run_review(year: i32) -> Result<()> {
    let labels = [
        format!("{year}-{}-1", year + 1),
        format!("{year}-{}-2", year + 1),
    ];

    let grades: Vec<GradeRecord> = read_cache::<Vec<GradeRecord>>("grades")?
        .map(|e| e.data)
        .unwrap_or_default()
        .into_iter()
        .filter(|g| labels.contains(&g.semester))
        .collect();
    let courses: Vec<Course> = read_cache::<Vec<Course>>("courses")?
        .map(|e| e.data)
        .unwrap_or_default();
    let profile: Option<StudentProfile> = read_cache::<StudentProfile>("profile")?.map(|e| e.data);
    let mooc: Option<MoocProfile> = read_cache::<MoocProfile>("mooc")?.map(|e| e.data);
    let mut dorms = Vec::new();
    for id in cached_dorm_ids()? {
        if let Some(entry) = read_cache::<Vec<ElectricityReading>>(&dorm_kind(&id))? {
            dorms.push(DormHistory {
                label: id,
                readings: entry.data,
            });
        }
    }

    if grades.is_empty() && courses.is_empty() {
        bail!("nothing cached for {year}-{} (import courses/grades first)", year + 1);
    }

    let review = AnnualReview::compute(profile.as_ref(), &grades, &courses, mooc.as_ref(), &dorms);
    print_review(year, &review);
    Ok(())
}

fn print_review(year: i32, review: &AnnualReview) {
    println!("=== {year}-{} annual review ===", year + 1);
    if let Some(name) = &review.student_name {
        println!("For: {name}");
    }
    println!("GPA: {:.2}", review.gpa);
    println!(
        "Assessment split: {} exams, {} assessed courses",
        review.exam_count, review.assessment_count
    );
    if !review.full_point_courses.is_empty() {
        println!("Full grade point: {}", review.full_point_courses.join(", "));
    }
    if review.just_passed_count > 0 {
        println!("Close calls (grade point 1.0): {}", review.just_passed_count);
    }
    if review.failed_count > 0 {
        println!("Failed: {}", review.failed_count);
    }
    if let Some(high) = &review.highest_grade {
        println!("Best course: {} ({})", high.course_name, high.grade);
    }

    println!(
        "Classes: {} early mornings, {} evenings, {} weekend slots",
        review.early_morning_count, review.evening_count, review.weekend_count
    );
    let hours = review.total_study_minutes / 60;
    println!("Total class time: {hours} hours");
    if let Some((day, count)) = review.sessions_per_day.iter().max_by_key(|(_, count)| *count) {
        println!("Busiest day: {} ({count} class meetings)", day.name());
    }

    if !review.teacher_ranking.is_empty() {
        println!("Most-seen teachers:");
        for (name, count) in &review.teacher_ranking {
            println!("  {name} ({count})");
        }
    }
    if !review.building_ranking.is_empty() {
        println!("Most-visited buildings:");
        for (name, count) in &review.building_ranking {
            println!("  {name} ({count})");
        }
    }

    for dorm in &review.dorm_stats {
        if let (Some(min), Some(max)) = (dorm.min_level, dorm.max_level) {
            println!(
                "Dorm {}: {:.1}-{:.1} kWh, {} recharge(s)",
                dorm.label, min, max, dorm.charge_cycles
            );
        }
    }

    if review.mooc_online_minutes > 0 || review.mooc_login_count > 0 {
        println!(
            "MOOC: {} min online across {} logins",
            review.mooc_online_minutes, review.mooc_login_count
        );
    }
}
