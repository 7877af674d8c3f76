use crate::infra::{parse_ordering, parse_today};
use chrono::NaiveDateTime;
use clap::Args;
use home_study::access::{guard_navigation, Role, Session};
use home_study::clock::{Clock, SystemClock};
use home_study::config::AppConfig;
use home_study::error::AppError;
use home_study::materials::{load_materials, StudentReport};
use home_study::roster::dates::format_br_date;
use home_study::roster::{
    recent_registrations, RosterFilter, RosterImporter, RosterListing, RosterOrdering, StudentId,
    StudentStatus, RECENT_REGISTRATION_DAYS,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// Roster export from the students API (CSV, or JSON when the extension is .json)
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Evaluation date or timestamp (defaults to now)
    #[arg(long, value_parser = parse_today)]
    pub(crate) today: Option<NaiveDateTime>,
    /// Case-insensitive match on the student's name
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Only show students from this course ("all" shows every course)
    #[arg(long)]
    pub(crate) course: Option<String>,
    /// Only show students from this class ("all" shows every class)
    #[arg(long = "class")]
    pub(crate) class_name: Option<String>,
    /// status_first, deadline_first or as_provided (defaults to APP_ROSTER_ORDERING)
    #[arg(long, value_parser = parse_ordering)]
    pub(crate) ordering: Option<RosterOrdering>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Roster export containing the student
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Materials export (JSON array)
    #[arg(long)]
    pub(crate) materials: PathBuf,
    /// Id of the student to report on
    #[arg(long)]
    pub(crate) student: String,
    /// Evaluation date or timestamp (defaults to now)
    #[arg(long, value_parser = parse_today)]
    pub(crate) today: Option<NaiveDateTime>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AuthorizeArgs {
    /// Session role; omit to evaluate an anonymous visitor
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// View path to open, e.g. /coordinator or /perfil
    #[arg(long)]
    pub(crate) path: String,
}

pub(crate) fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let RosterArgs {
        file,
        today,
        search,
        course,
        class_name,
        ordering,
    } = args;

    let now = today.unwrap_or_else(|| SystemClock.now());
    let ordering = resolve_ordering(ordering)?;
    let records = RosterImporter::from_path(&file)?;
    let filter = RosterFilter {
        search,
        course,
        class_name,
    };
    let listing = RosterListing::build(&records, &filter, ordering, now);

    render_roster(&listing, recent_registrations(&records, now, RECENT_REGISTRATION_DAYS));
    Ok(())
}

/// An explicit `--ordering` wins over the configured default.
fn resolve_ordering(flag: Option<RosterOrdering>) -> Result<RosterOrdering, AppError> {
    match flag {
        Some(ordering) => Ok(ordering),
        None => Ok(AppConfig::load()?.roster.ordering),
    }
}

fn render_roster(listing: &RosterListing, recent: usize) {
    println!(
        "Home-study roster as of {} ({} ordering)",
        listing.evaluated_at.format("%d/%m/%Y %H:%M"),
        listing.ordering.label()
    );
    println!(
        "- {} students | {} active | {} ending soon | {} ended | {} registered in the last {} days",
        listing.counts.total,
        listing.counts.get(StudentStatus::Active),
        listing.counts.get(StudentStatus::EndingSoon),
        listing.counts.get(StudentStatus::Ended),
        recent,
        RECENT_REGISTRATION_DAYS
    );

    if listing.is_empty() {
        println!("No students match the current filters.");
        return;
    }

    for entry in &listing.students {
        let student = &entry.student;
        let deadline = student
            .end_date
            .as_deref()
            .map(format_br_date)
            .unwrap_or_else(|| "-".to_string());
        let remaining = match entry.days_left {
            Some(days) if days >= 0.0 => format!("{:.1} days left", days),
            Some(_) => "finished".to_string(),
            None => "no valid end date".to_string(),
        };
        println!(
            "  [{}] {} | {} / {} | ends {} ({})",
            entry.status_label, student.name, student.course, student.class_name, deadline, remaining
        );
    }
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let now = args.today.unwrap_or_else(|| SystemClock.now());
    let records = RosterImporter::from_path(&args.roster)?;
    let materials = load_materials(&args.materials)?;

    let student_id = StudentId::new(args.student.trim());
    let student = records
        .iter()
        .find(|record| record.id == student_id)
        .ok_or_else(|| AppError::StudentNotFound(student_id.to_string()))?;

    let report = StudentReport::build(student, &materials, now);
    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(body) => println!("{body}"),
            Err(err) => return Err(AppError::Io(std::io::Error::other(err))),
        }
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

pub(crate) fn run_authorize(args: AuthorizeArgs) {
    let session = args.role.as_deref().map(|role| Session::new(Role::parse(role)));
    let decision = guard_navigation(session.as_ref(), &args.path);

    match decision.redirect_path() {
        Some(redirect) => println!("{} -> {}", decision.label(), redirect),
        None => println!("{}", decision.label()),
    }
}
