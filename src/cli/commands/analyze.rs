//! Analysis command handlers
//!
//! One handler per analytics query. Every handler loads the dataset fresh,
//! prints the result to stdout, and optionally exports it as CSV.

use mooc_analytics::config::Config;
use mooc_analytics::core::{analytics, dataset::CourseDataset, export};
use mooc_analytics::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Where an analysis command should write its CSV result, if anywhere
pub struct ExportOpts<'a> {
    /// Write into the configured output directory with a derived filename
    pub enabled: bool,
    /// Explicit output path; implies exporting
    pub path: Option<&'a Path>,
}

/// Run the participation command (per institution, or per institution-subject).
pub fn participation(
    input: &Path,
    by_subject: bool,
    export_opts: &ExportOpts<'_>,
    config: &Config,
    verbose: bool,
) {
    if let Err(msg) = run_participation(input, by_subject, export_opts, config, verbose) {
        eprintln!("{msg}");
    }
}

fn run_participation(
    input: &Path,
    by_subject: bool,
    export_opts: &ExportOpts<'_>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let dataset = load_dataset(input, config, verbose)?;

    let rows: Vec<(String, u64)> = if by_subject {
        analytics::participants_by_institution_and_subject(&dataset)
    } else {
        // No ordering contract for this query; display alphabetically.
        let mut rows: Vec<(String, u64)> = analytics::participants_by_institution(&dataset)
            .into_iter()
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    };

    for (key, total) in &rows {
        println!("{key}: {total}");
    }

    let (suffix, key_header) = if by_subject {
        ("participation_by_subject", "institution_subject")
    } else {
        ("participation", "institution")
    };
    if let Some(target) = export_target(input, export_opts, suffix, config)? {
        export::export_count_table(&target, key_header, "participants", &rows)
            .map_err(|e| format!("✗ Failed to export to {}: {e}", target.display()))?;
        println!("✓ Results exported to: {}", target.display());
    }

    Ok(())
}

/// Run the instructors command.
pub fn instructors(input: &Path, export_opts: &ExportOpts<'_>, config: &Config, verbose: bool) {
    if let Err(msg) = run_instructors(input, export_opts, config, verbose) {
        eprintln!("{msg}");
    }
}

fn run_instructors(
    input: &Path,
    export_opts: &ExportOpts<'_>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let dataset = load_dataset(input, config, verbose)?;
    let by_instructor = analytics::courses_by_instructor(&dataset);

    let mut names: Vec<&String> = by_instructor.keys().collect();
    names.sort();

    for name in names {
        if let Some(courses) = by_instructor.get(name) {
            println!(
                "{name}: {} solo-taught, {} co-taught",
                courses.solo.len(),
                courses.co_taught.len()
            );
            if verbose {
                for title in &courses.solo {
                    println!("  solo: {title}");
                }
                for title in &courses.co_taught {
                    println!("  co:   {title}");
                }
            }
        }
    }

    if let Some(target) = export_target(input, export_opts, "instructors", config)? {
        export::export_instructor_table(&target, &by_instructor)
            .map_err(|e| format!("✗ Failed to export to {}: {e}", target.display()))?;
        println!("✓ Results exported to: {}", target.display());
    }

    Ok(())
}

/// Run the top command: the best `count` titles by the chosen metric.
pub fn top(
    input: &Path,
    count: usize,
    by: &str,
    export_opts: &ExportOpts<'_>,
    config: &Config,
    verbose: bool,
) {
    if let Err(msg) = run_titles_command(
        input,
        export_opts,
        config,
        verbose,
        &format!("top_{by}"),
        |dataset| analytics::top_courses(dataset, count, by).map_err(|e| format!("✗ {e}")),
    ) {
        eprintln!("{msg}");
    }
}

/// Run the search command.
pub fn search(
    input: &Path,
    subject: &str,
    min_audited: f64,
    max_hours: f64,
    export_opts: &ExportOpts<'_>,
    config: &Config,
    verbose: bool,
) {
    if let Err(msg) = run_titles_command(
        input,
        export_opts,
        config,
        verbose,
        "search",
        |dataset| Ok(analytics::search_courses(dataset, subject, min_audited, max_hours)),
    ) {
        eprintln!("{msg}");
    }
}

/// Run the recommend command.
pub fn recommend(
    input: &Path,
    age: u32,
    gender: u8,
    bachelor: u8,
    export_opts: &ExportOpts<'_>,
    config: &Config,
    verbose: bool,
) {
    if let Err(msg) = run_titles_command(
        input,
        export_opts,
        config,
        verbose,
        "recommendations",
        |dataset| Ok(analytics::recommend_courses(dataset, age, gender, bachelor)),
    ) {
        eprintln!("{msg}");
    }
}

/// Shared driver for the commands whose result is an ordered title list.
fn run_titles_command(
    input: &Path,
    export_opts: &ExportOpts<'_>,
    config: &Config,
    verbose: bool,
    suffix: &str,
    query: impl FnOnce(&CourseDataset) -> Result<Vec<String>, String>,
) -> Result<(), String> {
    let dataset = load_dataset(input, config, verbose)?;
    let titles = query(&dataset)?;

    if titles.is_empty() {
        println!("(no matching courses)");
    }
    for title in &titles {
        println!("{title}");
    }

    if let Some(target) = export_target(input, export_opts, suffix, config)? {
        export::export_title_list(&target, &titles)
            .map_err(|e| format!("✗ Failed to export to {}: {e}", target.display()))?;
        println!("✓ Results exported to: {}", target.display());
    }

    Ok(())
}

fn load_dataset(input: &Path, config: &Config, verbose: bool) -> Result<CourseDataset, String> {
    let path = resolve_dataset_path(input, config);

    let dataset = CourseDataset::from_csv(&path).map_err(|e| {
        error!("Failed to load dataset {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })?;

    if verbose {
        println!(
            "✓ Loaded {} offering records from: {}",
            dataset.len(),
            path.display()
        );
    } else {
        info!("Dataset loaded: {} ({} records)", path.display(), dataset.len());
    }

    Ok(dataset)
}

/// Resolve a dataset path, falling back to the configured data directory
/// when the path does not exist as given.
fn resolve_dataset_path(input: &Path, config: &Config) -> PathBuf {
    if input.exists() || config.paths.data_dir.is_empty() {
        return input.to_path_buf();
    }

    let fallback = PathBuf::from(&config.paths.data_dir).join(input);
    if fallback.exists() {
        fallback
    } else {
        input.to_path_buf()
    }
}

fn export_target(
    input: &Path,
    opts: &ExportOpts<'_>,
    suffix: &str,
    config: &Config,
) -> Result<Option<PathBuf>, String> {
    if let Some(path) = opts.path {
        return Ok(Some(path.to_path_buf()));
    }
    if !opts.enabled {
        return Ok(None);
    }

    let out_dir = PathBuf::from(&config.paths.out_dir);
    fs::create_dir_all(&out_dir).map_err(|e| {
        format!(
            "✗ Failed to create output directory {}: {e}",
            out_dir.display()
        )
    })?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    Ok(Some(out_dir.join(format!("{stem}_{suffix}.csv"))))
}
