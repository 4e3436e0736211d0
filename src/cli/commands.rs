use crate::config::PipelineConfig;
use crate::pipeline::{self, Progress, RunSummary};
use anyhow::Context;
use colored::Colorize;

/// Execute the generate command: build the class timetable workbook
pub fn generate(config: &PipelineConfig) -> anyhow::Result<RunSummary> {
    println!("{}", "📅 Class Timetable - Workbook Generator".bold().green());
    println!("   Class teachers: {}", config.classteachers.display());
    println!("   Timetable:      {}", config.timetable.display());
    println!("   Output:         {}\n", config.output.display());

    // Context for whichever step was running when the pipeline failed
    let mut current_step = String::new();
    let summary = pipeline::run_with_progress(config, |event| {
        if let Some(step) = step_description(&event) {
            current_step = step;
        }
        print_progress(&event);
    })
    .with_context(|| current_step.clone())?;

    for sheet in &summary.sheets {
        println!("   • {}", sheet);
    }
    println!();

    println!("{}", "✅ Export Complete!".bold().green());
    println!("   Excel file: {}\n", summary.output.display());

    Ok(summary)
}

fn step_description(event: &Progress<'_>) -> Option<String> {
    match event {
        Progress::LoadStarted(path) => Some(format!(
            "Failed to load class teachers from {}",
            path.display()
        )),
        Progress::ParseStarted(path) => Some(format!(
            "Failed to parse timetable from {}",
            path.display()
        )),
        Progress::ExportStarted(path) => {
            Some(format!("Failed to write workbook {}", path.display()))
        }
        _ => None,
    }
}

fn print_progress(event: &Progress<'_>) {
    match event {
        Progress::LoadStarted(_) => println!("{}", "📖 Loading class teachers...".cyan()),
        Progress::Loaded { class_teachers } => {
            println!("   Found {} class teachers\n", class_teachers)
        }
        Progress::ParseStarted(_) => println!("{}", "📖 Parsing timetable...".cyan()),
        Progress::Parsed { classes } => println!("   Found {} classes\n", classes),
        Progress::Merged { kept, dropped } => {
            println!("{}", "🔧 Applied class teachers".cyan());
            for class_name in dropped.iter() {
                println!(
                    "   {} {}",
                    "⚠️  No class teacher, skipped:".yellow(),
                    class_name
                );
            }
            println!("   {} classes ready\n", kept);
        }
        Progress::ExportStarted(_) => println!("{}", "📊 Exporting to Excel...".cyan()),
    }
}
