use timetabler::dataset::Dataset;
use timetabler::io;
use timetabler::scheduler::Scheduler;
use timetabler::validation;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default input file consumed when the program starts.
const INPUT_PATH: &str = "input_data/input.json";
/// Destination of the timetable report.
const OUTPUT_PATH: &str = "output/timetable.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "timetabler=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut dataset = Dataset::seed();
    dataset.extend(io::load_input(INPUT_PATH)?);
    info!(
        courses = dataset.courses.len(),
        lecturers = dataset.lecturers.len(),
        rooms = dataset.rooms.len(),
        student_groups = dataset.student_groups.len(),
        "dataset loaded"
    );

    if let Err(findings) = validation::validate_dataset(&dataset) {
        for finding in &findings {
            warn!("{}", finding.message);
        }
    }

    let Dataset {
        courses,
        lecturers,
        rooms,
        student_groups,
    } = dataset;

    let mut scheduler = Scheduler::new(lecturers, rooms, student_groups);
    let timetable = scheduler.run(&courses)?;

    io::write_csv(&timetable, OUTPUT_PATH)?;
    info!(slots = timetable.slot_count(), path = OUTPUT_PATH, "timetable written");

    Ok(())
}
