//! Generation orchestration: script + template -> generated artifact

use crate::{escape, template};
use helio_core::config::{CodegenConfig, CodegenJob};
use helio_core::error::{Error, Result, ResultExt};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options controlling a generation run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Render and validate but write nothing
    pub dry_run: bool,
    /// Rewrite the artifact even when it is already up to date
    pub force: bool,
}

/// Result of generating one artifact
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutcome {
    /// Name of the job that produced this artifact
    pub job: String,
    /// Where the artifact lives (or would live, on a dry run)
    pub output_path: PathBuf,
    /// Size of the rendered artifact in bytes
    pub bytes: u64,
    /// The existing artifact already matched the rendered output
    pub up_to_date: bool,
    /// The artifact was written this run
    pub written: bool,
}

/// Run one generation job.
///
/// Reads the script and template, escapes and substitutes, then writes the
/// artifact under the output directory. If the existing artifact is
/// byte-identical to the rendered output the write is skipped and the
/// outcome reports `up_to_date`, so the host build's incremental checks see
/// an untouched file. All failures happen before anything is written.
pub fn generate(
    config: &CodegenConfig,
    job: &CodegenJob,
    options: GenerateOptions,
) -> Result<GenerateOutcome> {
    let output_path = output_path(config, job)?;
    let rendered = render(job)?;
    let bytes = rendered.len() as u64;

    if !options.force {
        if let Ok(existing) = fs::read_to_string(&output_path) {
            if existing == rendered {
                return Ok(GenerateOutcome {
                    job: job.name.clone(),
                    output_path,
                    bytes,
                    up_to_date: true,
                    written: false,
                });
            }
        }
    }

    if options.dry_run {
        return Ok(GenerateOutcome {
            job: job.name.clone(),
            output_path,
            bytes,
            up_to_date: false,
            written: false,
        });
    }

    write_artifact(&output_path, &rendered)?;

    Ok(GenerateOutcome {
        job: job.name.clone(),
        output_path,
        bytes,
        up_to_date: false,
        written: true,
    })
}

/// Validate a job without touching the output directory.
///
/// Checks that the script and template are readable, the template filename
/// carries the suffix, and the placeholder token is present. Returns the
/// path the artifact would be written to.
pub fn check(config: &CodegenConfig, job: &CodegenJob) -> Result<PathBuf> {
    let output_path = output_path(config, job)?;
    render(job)?;
    Ok(output_path)
}

/// Remove the artifacts of all configured jobs.
///
/// Returns the paths that were actually removed. The output directory
/// itself is removed once it is left empty.
pub fn clean(config: &CodegenConfig) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for job in &config.jobs {
        let path = output_path(config, job)?;
        if path.exists() {
            fs::remove_file(&path)
                .map_err(Error::from)
                .context(format!("While removing {}", path.display()))?;
            removed.push(path);
        }
    }

    // Succeeds only when no other artifacts remain.
    let _ = fs::remove_dir(&config.output_dir);

    Ok(removed)
}

fn output_path(config: &CodegenConfig, job: &CodegenJob) -> Result<PathBuf> {
    let file_name = template::output_file_name(&job.template, &config.template_suffix)?;
    Ok(config.output_dir.join(file_name))
}

fn render(job: &CodegenJob) -> Result<String> {
    let script = fs::read_to_string(&job.script)
        .map_err(Error::from)
        .context(format!(
            "While reading script {} for job {}",
            job.script.display(),
            job.name
        ))?;

    let template_text = fs::read_to_string(&job.template)
        .map_err(Error::from)
        .context(format!(
            "While reading template {} for job {}",
            job.template.display(),
            job.name
        ))?;

    let expression = escape::java_string_expression(&script);
    template::substitute(&template_text, &job.placeholder, &expression, &job.template)
}

/// Write through a temp file in the output directory so a failed write
/// leaves the previous artifact (or nothing) in place, never a torn file.
fn write_artifact(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().ok_or_else(|| Error::write_failed(path))?;

    fs::create_dir_all(dir)
        .map_err(|e| Error::write_failed(dir).with_source(e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| Error::write_failed(path).with_source(e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::write_failed(path).with_source(e))?;
    tmp.persist(path)
        .map_err(|e| Error::write_failed(path).with_source(e.error))?;

    Ok(())
}
