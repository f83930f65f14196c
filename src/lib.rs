// src/lib.rs

pub mod cli;
pub mod errors;
pub mod input;
pub mod logging;
pub mod schedule;
pub mod types;

use std::io::{self, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::errors::ScheduleError;
use crate::input::{CourseCatalog, load_and_validate};
use crate::schedule::{CourseScheduler, Schedule};

/// High-level entry point used by `main.rs`.
///
/// Loads the course list, builds the scheduler and prints the report for
/// either the whole catalog or the course named by `--course`.
pub fn run(args: CliArgs) -> Result<()> {
    let catalog = load_and_validate(&args.input, args.format)?;
    info!(input = %args.input, courses = catalog.len(), "loaded course list");

    let scheduler = CourseScheduler::from_catalog(&catalog);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.dry_run {
        write_dry_run(&mut out, &catalog, &scheduler)?;
        return Ok(());
    }

    match args.course {
        Some(ref course) => write_course_report(&mut out, &scheduler, course)?,
        None => write_report(&mut out, &scheduler)?,
    }

    Ok(())
}

/// Whole-catalog report: whether everything can be completed, then each
/// course with its minimum prerequisite count.
///
/// Courses are listed in completion order when one exists, otherwise in
/// sorted order together with the cycle that blocks them.
pub fn write_report<W: Write>(out: &mut W, scheduler: &CourseScheduler) -> io::Result<()> {
    let schedule = scheduler.schedule();
    writeln!(out, "can complete all: {}", schedule.is_complete())?;

    let courses = match schedule {
        Schedule::Complete(order) => {
            writeln!(out, "completion order:")?;
            order
        }
        Schedule::Cycle(cycle) => {
            writeln!(out, "cycle: {}", cycle.join(" -> "))?;
            writeln!(out, "courses:")?;
            scheduler.all_courses()
        }
        Schedule::NotFound(course) => {
            writeln!(out, "missing course: {course}")?;
            writeln!(out, "courses:")?;
            scheduler.all_courses()
        }
    };

    for course in courses.iter() {
        writeln!(
            out,
            "  {course}: {}",
            scheduler.minimum_prerequisite_count(course)
        )?;
    }

    Ok(())
}

/// Report for a single course: its count plus either the path of courses
/// leading to it or the cycle that blocks it.
pub fn write_course_report<W: Write>(
    out: &mut W,
    scheduler: &CourseScheduler,
    course: &str,
) -> errors::Result<()> {
    match scheduler.schedule_for(course) {
        Schedule::Complete(path) => {
            writeln!(out, "{course}: {}", path.len() - 1)?;
            writeln!(out, "order: {}", path.join(" -> "))?;
        }
        Schedule::Cycle(cycle) => {
            writeln!(out, "{course}: -1")?;
            writeln!(out, "cycle: {}", cycle.join(" -> "))?;
        }
        Schedule::NotFound(missing) => {
            return Err(ScheduleError::CourseNotFound(missing).into());
        }
    }
    Ok(())
}

/// Dry-run output: the validated course list and the graph built from it.
pub fn write_dry_run<W: Write>(
    out: &mut W,
    catalog: &CourseCatalog,
    scheduler: &CourseScheduler,
) -> io::Result<()> {
    let graph = scheduler.graph();

    writeln!(out, "courseplan dry-run")?;
    writeln!(out, "  records = {}", catalog.len())?;
    writeln!(out, "  courses = {}", graph.order())?;
    writeln!(out, "  prerequisite links = {}", graph.size())?;
    writeln!(out)?;
    write!(out, "{graph}")?;

    debug!("dry-run complete (no scheduling)");
    Ok(())
}
