//! Configuration schema definitions
//!
//! Types for the codegen job tables in `.helio-codegen.toml`.

use crate::error::{Error, ErrorCode, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub codegen: CodegenConfig,
}

/// Code generation configuration shared by all jobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Directory the generated sources are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Filename suffix marking a file as a template
    #[serde(default = "default_template_suffix")]
    pub template_suffix: String,

    /// Generation jobs, one per embedded script
    #[serde(default)]
    pub jobs: Vec<CodegenJob>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            template_suffix: default_template_suffix(),
            jobs: Vec::new(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build/generated/source/lua")
}

fn default_template_suffix() -> String {
    ".template".to_string()
}

/// One script-embedding job: script + template -> generated source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenJob {
    /// Job name, unique within the config
    pub name: String,

    /// Lua source script to embed
    pub script: PathBuf,

    /// Template file, filename must end in the template suffix
    pub template: PathBuf,

    /// Placeholder key; the token `@@<key>@@` is replaced in the template
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    "code".to_string()
}

impl ConfigSchema {
    /// Validate the job tables
    ///
    /// Job names must be unique, placeholder keys non-empty, the template
    /// suffix must start with a dot, and no two jobs may derive the same
    /// output filename.
    pub fn validate(&self) -> Result<()> {
        if !self.codegen.template_suffix.starts_with('.') {
            return Err(Error::new(
                ErrorCode::InvalidConfigValue,
                format!(
                    "template_suffix must start with '.', got {:?}",
                    self.codegen.template_suffix
                ),
            ));
        }

        let mut names = HashSet::new();
        let mut outputs = HashSet::new();
        for job in &self.codegen.jobs {
            if job.name.is_empty() {
                return Err(Error::new(
                    ErrorCode::ConfigValidationError,
                    "Job name must not be empty",
                ));
            }
            if !names.insert(job.name.as_str()) {
                return Err(Error::new(
                    ErrorCode::ConfigValidationError,
                    format!("Duplicate job name: {}", job.name),
                ));
            }
            if job.placeholder.is_empty() {
                return Err(Error::new(
                    ErrorCode::ConfigValidationError,
                    format!("Job {} has an empty placeholder key", job.name),
                ));
            }

            let file_name = job
                .template
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| {
                    Error::new(
                        ErrorCode::InvalidPath,
                        format!("Job {} has an invalid template path", job.name),
                    )
                })?;
            // Outputs collide when two templates strip to the same filename.
            let derived = file_name
                .strip_suffix(self.codegen.template_suffix.as_str())
                .unwrap_or(file_name)
                .to_string();
            if !outputs.insert(derived.clone()) {
                return Err(Error::new(
                    ErrorCode::ConfigValidationError,
                    format!("Jobs write the same output file: {}", derived),
                )
                .with_suggestion("Give each job a template with a distinct output filename"));
            }
        }

        Ok(())
    }

    /// Find a job by name
    pub fn job(&self, name: &str) -> Option<&CodegenJob> {
        self.codegen.jobs.iter().find(|j| j.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str, template: &str) -> CodegenJob {
        CodegenJob {
            name: name.to_string(),
            script: PathBuf::from("src/init.lua"),
            template: PathBuf::from(template),
            placeholder: "code".to_string(),
        }
    }

    #[test]
    fn test_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.codegen.template_suffix, ".template");
        assert!(schema.codegen.jobs.is_empty());
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut schema = ConfigSchema::default();
        schema.codegen.jobs = vec![
            job("init", "A.java.template"),
            job("init", "B.java.template"),
        ];
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_colliding_outputs_rejected() {
        let mut schema = ConfigSchema::default();
        schema.codegen.jobs = vec![
            job("a", "templates/Shim.java.template"),
            job("b", "other/Shim.java.template"),
        ];
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let mut schema = ConfigSchema::default();
        let mut j = job("init", "Shim.java.template");
        j.placeholder = String::new();
        schema.codegen.jobs = vec![j];
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_suffix_must_be_dotted() {
        let mut schema = ConfigSchema::default();
        schema.codegen.template_suffix = "template".to_string();
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_job_lookup() {
        let mut schema = ConfigSchema::default();
        schema.codegen.jobs = vec![job("init", "Shim.java.template")];
        assert!(schema.job("init").is_some());
        assert!(schema.job("missing").is_none());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_src = r#"
            [codegen]
            output_dir = "build/generated/source/lua"
            template_suffix = ".template"

            [[codegen.jobs]]
            name = "init-lua"
            script = "src/init.lua"
            template = "templates/LuaShim.java.template"
            placeholder = "code"
        "#;
        let schema: ConfigSchema = toml::from_str(toml_src).unwrap();
        assert_eq!(schema.codegen.jobs.len(), 1);
        assert_eq!(schema.codegen.jobs[0].name, "init-lua");
        assert!(schema.validate().is_ok());
    }
}
