//! Helio Android CLI
//!
//! Build-time code generation for the Helio Android SDK: embeds Lua
//! bootstrap scripts into generated Java sources before Gradle compiles
//! the source tree.

use anyhow::Result;
use clap::{Parser, Subcommand};
use helio_cli::output::{format_count, format_duration, format_size, Status};
use helio_codegen::generator;
use helio_codegen::{GenerateOptions, GenerateOutcome};
use helio_core::config::{CodegenJob, Config};
use helio_core::error::{exit_codes, Error};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helio-android")]
#[command(about = "Build-time code generation for the Helio Android SDK")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources from Lua scripts
    Generate {
        /// Generate a single named job (default: all jobs)
        #[arg(long)]
        job: Option<String>,
        /// Render and validate but don't write
        #[arg(long)]
        dry_run: bool,
        /// Rewrite artifacts even when up to date
        #[arg(long)]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate jobs without writing anything
    Check {
        /// Check a single named job (default: all jobs)
        #[arg(long)]
        job: Option<String>,
    },

    /// List configured codegen jobs
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove generated artifacts
    Clean,

    /// Diagnose configuration and project layout
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let config = match Config::load(cli.config.as_deref().and_then(|p| p.to_str())) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&e.to_string());
            std::process::exit(exit_code_for(&e));
        }
    };

    let exit_code = match cli.command {
        Commands::Generate {
            job,
            dry_run,
            force,
            json,
        } => run_generate(&config, job.as_deref(), dry_run, force, json, cli.quiet),
        Commands::Check { job } => run_check(&config, job.as_deref()),
        Commands::List { json } => run_list(&config, json),
        Commands::Clean => run_clean(&config),
        Commands::Doctor { json } => run_doctor(&config, json),
    };

    std::process::exit(exit_code);
}

/// Map an error to the process exit code its category owns
fn exit_code_for(err: &Error) -> i32 {
    match err.code.category() {
        "Configuration" => exit_codes::CONFIG_ERROR,
        "Codegen" => exit_codes::CODEGEN_ERROR,
        "Validation" => exit_codes::VALIDATION_ERROR,
        _ => exit_codes::FAILURE,
    }
}

/// Resolve `--job NAME` against the config, or all jobs when absent
fn select_jobs<'a>(config: &'a Config, name: Option<&str>) -> Result<Vec<&'a CodegenJob>, Error> {
    match name {
        Some(name) => config
            .schema
            .job(name)
            .map(|j| vec![j])
            .ok_or_else(|| Error::job_not_found(name)),
        None => Ok(config.schema.codegen.jobs.iter().collect()),
    }
}

fn run_generate(
    config: &Config,
    job: Option<&str>,
    dry_run: bool,
    force: bool,
    json: bool,
    quiet: bool,
) -> i32 {
    let jobs = match select_jobs(config, job) {
        Ok(jobs) => jobs,
        Err(e) => return report_error(e, json),
    };

    if jobs.is_empty() {
        Status::warning("No codegen jobs configured");
        return exit_codes::SUCCESS;
    }

    let options = GenerateOptions { dry_run, force };
    let start = std::time::Instant::now();
    let mut outcomes: Vec<GenerateOutcome> = Vec::new();

    for (i, job) in jobs.iter().enumerate() {
        if !quiet && !json {
            Status::step(
                i + 1,
                jobs.len(),
                &format!("{}: {}", job.name, job.script.display()),
            );
        }

        match generator::generate(&config.schema.codegen, job, options) {
            Ok(outcome) => {
                if !json {
                    print_outcome(&outcome, dry_run, quiet);
                }
                outcomes.push(outcome);
            }
            Err(e) => return report_error(e, json),
        }
    }

    if json {
        match serde_json::to_string_pretty(&outcomes) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                Status::error(&format!("JSON encoding failed: {}", e));
                return exit_codes::FAILURE;
            }
        }
    } else if !quiet {
        let written = outcomes.iter().filter(|o| o.written).count();
        let up_to_date = outcomes.len() - written;
        let mut summary = format!(
            "Generated {} in {}",
            format_count(written, "artifact", "artifacts"),
            format_duration(start.elapsed())
        );
        if up_to_date > 0 {
            summary.push_str(&format!(" ({} up to date)", up_to_date));
        }
        Status::success(&summary);
    }

    exit_codes::SUCCESS
}

fn print_outcome(outcome: &GenerateOutcome, dry_run: bool, quiet: bool) {
    if outcome.up_to_date {
        if !quiet {
            Status::info(&format!(
                "{}: up to date ({})",
                outcome.job,
                outcome.output_path.display()
            ));
        }
    } else if dry_run {
        Status::info(&format!(
            "{}: would write {} ({})",
            outcome.job,
            outcome.output_path.display(),
            format_size(outcome.bytes)
        ));
    } else if !quiet {
        Status::success(&format!(
            "{}: wrote {} ({})",
            outcome.job,
            outcome.output_path.display(),
            format_size(outcome.bytes)
        ));
    }
}

fn report_error(err: Error, json: bool) -> i32 {
    if json {
        match serde_json::to_string_pretty(&err.to_report()) {
            Ok(out) => eprintln!("{}", out),
            Err(_) => Status::error(&err.to_string()),
        }
    } else {
        Status::error(&err.to_string());
    }
    exit_code_for(&err)
}

fn run_check(config: &Config, job: Option<&str>) -> i32 {
    let jobs = match select_jobs(config, job) {
        Ok(jobs) => jobs,
        Err(e) => return report_error(e, false),
    };

    if jobs.is_empty() {
        Status::warning("No codegen jobs configured");
        return exit_codes::SUCCESS;
    }

    let mut first_failure: Option<i32> = None;
    for job in jobs {
        match generator::check(&config.schema.codegen, job) {
            Ok(path) => {
                Status::success(&format!("{}: ok -> {}", job.name, path.display()));
            }
            Err(e) => {
                Status::error(&format!("{}: {}", job.name, e));
                first_failure.get_or_insert(exit_code_for(&e));
            }
        }
    }

    first_failure.unwrap_or(exit_codes::SUCCESS)
}

fn run_list(config: &Config, json: bool) -> i32 {
    let jobs = &config.schema.codegen.jobs;

    if json {
        return match serde_json::to_string_pretty(jobs) {
            Ok(out) => {
                println!("{}", out);
                exit_codes::SUCCESS
            }
            Err(e) => {
                Status::error(&format!("JSON encoding failed: {}", e));
                exit_codes::FAILURE
            }
        };
    }

    if jobs.is_empty() {
        Status::warning("No codegen jobs configured");
        return exit_codes::SUCCESS;
    }

    Status::header(&format!("Codegen jobs ({})", jobs.len()));
    for job in jobs {
        println!("  {}", job.name);
        Status::detail(&format!("script:      {}", job.script.display()));
        Status::detail(&format!("template:    {}", job.template.display()));
        Status::detail(&format!("placeholder: @@{}@@", job.placeholder));
    }
    println!();
    println!(
        "  Output directory: {}",
        config.schema.codegen.output_dir.display()
    );

    exit_codes::SUCCESS
}

fn run_clean(config: &Config) -> i32 {
    match generator::clean(&config.schema.codegen) {
        Ok(removed) => {
            for path in &removed {
                Status::info(&format!("Removed {}", path.display()));
            }
            Status::success(&format!(
                "Cleaned {}",
                format_count(removed.len(), "artifact", "artifacts")
            ));
            exit_codes::SUCCESS
        }
        Err(e) => report_error(e, false),
    }
}

fn run_doctor(config: &Config, json: bool) -> i32 {
    use helio_core::file_scanner::{scan_lua_files, scan_template_files};

    let project_root = std::path::Path::new(".");

    let spinner = if json {
        None
    } else {
        Some(helio_cli::progress::spinner("Scanning project..."))
    };

    let lua_files = scan_lua_files(project_root).unwrap_or_default();
    let template_files = scan_template_files(project_root).unwrap_or_default();

    if let Some(pb) = spinner {
        helio_cli::progress::finish_success(
            &pb,
            &format!(
                "Scanned project: {}, {}",
                format_count(lua_files.len(), "Lua script", "Lua scripts"),
                format_count(template_files.len(), "template", "templates")
            ),
        );
    }

    // Templates on disk that no job references are usually a forgotten
    // config entry.
    let referenced: Vec<&std::path::Path> = config
        .schema
        .codegen
        .jobs
        .iter()
        .map(|j| j.template.as_path())
        .collect();
    let unreferenced: Vec<&PathBuf> = template_files
        .iter()
        .filter(|t| {
            !referenced
                .iter()
                .any(|r| r.file_name() == t.file_name())
        })
        .collect();

    let mut job_problems = 0usize;

    if json {
        let jobs: Vec<serde_json::Value> = config
            .schema
            .codegen
            .jobs
            .iter()
            .map(|job| {
                let result = generator::check(&config.schema.codegen, job);
                if result.is_err() {
                    job_problems += 1;
                }
                serde_json::json!({
                    "name": &job.name,
                    "ok": result.is_ok(),
                    "error": result.err().map(|e| e.to_report()),
                })
            })
            .collect();

        let output = serde_json::json!({
            "config_path": &config.path,
            "output_dir": &config.schema.codegen.output_dir,
            "jobs": jobs,
            "lua_scripts": lua_files.len(),
            "templates": template_files.len(),
            "unreferenced_templates": unreferenced,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                Status::error(&format!("JSON encoding failed: {}", e));
                return exit_codes::FAILURE;
            }
        }
    } else {
        match &config.path {
            Some(path) => Status::success(&format!("Config: {}", path)),
            None => Status::warning("Config: not found, using defaults"),
        }
        Status::info(&format!(
            "Output directory: {}",
            config.schema.codegen.output_dir.display()
        ));

        for job in &config.schema.codegen.jobs {
            match generator::check(&config.schema.codegen, job) {
                Ok(_) => Status::success(&format!("Job {}: ok", job.name)),
                Err(e) => {
                    job_problems += 1;
                    Status::error(&format!("Job {}: {}", job.name, e));
                }
            }
        }

        for template in &unreferenced {
            Status::warning(&format!(
                "Template not referenced by any job: {}",
                template.display()
            ));
        }
    }

    if job_problems > 0 {
        exit_codes::FAILURE
    } else {
        exit_codes::SUCCESS
    }
}
