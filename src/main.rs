use class_timetable::cli;
use class_timetable::config::PipelineConfig;

/// Reads `Classteachers.csv` and `Alright.csv` from the working directory and
/// writes `New_Class_Timetable.xlsx` next to them.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "class_timetable=info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::generate(&PipelineConfig::default())?;
    Ok(())
}
