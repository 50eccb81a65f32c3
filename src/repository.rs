use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::pipeline::detect::Classification;
use crate::pipeline::validate::ValidationIssue;
use crate::pipeline::{self, parse, Generation};

/// Palette source expected inside every theme directory.
pub const SOURCE_FILE: &str = "alacritty.toml";

/// File name of the generated document for `theme_name`.
pub fn output_file_name(theme_name: &str) -> String {
    format!("{theme_name}-theme-sync.json")
}

/// Resolve the default themes directory.
pub fn default_themes_dir() -> PathBuf {
    let config_home = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "~".to_string());
            PathBuf::from(home).join(".config")
        });
    config_home.join("omarchy").join("themes")
}

/// Summary of a theme that was generated and written.
#[derive(Debug, Clone)]
pub struct GeneratedTheme {
    pub name: String,
    pub path: PathBuf,
    pub classification: Classification,
    pub issues: Vec<ValidationIssue>,
    pub color_count: usize,
}

/// Per-theme outcomes of a batch run, in directory name order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<(String, Result<GeneratedTheme, ThemeError>)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// True when every theme generated. An empty batch is not a success.
    pub fn is_success(&self) -> bool {
        self.total() > 0 && self.failed() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeState {
    /// The output document exists.
    Generated,
    /// A palette source exists but nothing has been generated yet.
    Pending,
    /// The directory has no palette source.
    NoSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStatus {
    pub name: String,
    pub state: ThemeState,
}

/// A directory of theme subdirectories, each holding a palette source and,
/// once generated, the theme document.
#[derive(Debug, Clone)]
pub struct ThemeRepository {
    root: PathBuf,
    config: ThemeConfig,
}

impl ThemeRepository {
    pub fn new(root: impl Into<PathBuf>, config: ThemeConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn theme_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn source_path(&self, name: &str) -> PathBuf {
        self.theme_dir(name).join(SOURCE_FILE)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.theme_dir(name).join(output_file_name(name))
    }

    /// Names of all subdirectories, sorted.
    fn subdirectories(&self) -> Result<Vec<String>, ThemeError> {
        if !self.root.is_dir() {
            return Err(ThemeError::ThemesDirNotFound(self.root.clone()));
        }
        let list_err = |source| ThemeError::ListThemes {
            path: self.root.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Names of the themes that carry a palette source, sorted.
    pub fn list_themes(&self) -> Result<Vec<String>, ThemeError> {
        Ok(self
            .subdirectories()?
            .into_iter()
            .filter(|name| self.source_path(name).is_file())
            .collect())
    }

    /// Run the pipeline for one theme without writing anything.
    ///
    /// Only a missing directory or source file is an error; an unreadable
    /// source is logged and generation continues from fallbacks.
    pub fn prepare(&self, name: &str) -> Result<Generation, ThemeError> {
        let dir = self.theme_dir(name);
        if !dir.is_dir() {
            return Err(ThemeError::MissingThemeDirectory {
                name: name.to_string(),
                path: dir,
            });
        }
        let source = self.source_path(name);
        if !source.is_file() {
            return Err(ThemeError::MissingSourceFile {
                name: name.to_string(),
                path: source,
            });
        }

        info!(theme = name, "generating theme");
        let (raw, warning) = parse::load_source(&source);
        if let Some(err) = warning {
            warn!(theme = name, "{err}; continuing with fallback colors");
        }

        let generation = pipeline::generate(name, &raw, &self.config);
        for issue in &generation.issues {
            warn!(
                theme = name,
                field = %issue.field,
                kind = %issue.kind,
                "{}",
                issue.message
            );
        }
        debug!(
            theme = name,
            classification = %generation.classification,
            colors = generation.document.colors.len(),
            "theme assembled"
        );
        Ok(generation)
    }

    /// Write a generated document to its place in the theme directory.
    pub fn persist(&self, generation: &Generation) -> Result<PathBuf, ThemeError> {
        let path = self.output_path(&generation.document.name);
        generation.document.write_to(&path)?;
        Ok(path)
    }

    /// Generate one theme and write its document.
    pub fn generate(&self, name: &str) -> Result<GeneratedTheme, ThemeError> {
        let generation = self.prepare(name)?;
        let path = self.persist(&generation)?;
        info!(
            theme = name,
            path = %path.display(),
            classification = %generation.classification,
            "theme written"
        );

        Ok(GeneratedTheme {
            name: name.to_string(),
            path,
            classification: generation.classification,
            color_count: generation.document.colors.len(),
            issues: generation.issues,
        })
    }

    /// Generate every subdirectory. One theme failing never stops the rest.
    pub fn generate_all(&self) -> Result<BatchReport, ThemeError> {
        let mut report = BatchReport::default();
        for name in self.subdirectories()? {
            let outcome = self.generate(&name);
            if let Err(err) = &outcome {
                warn!(theme = %name, "{err}");
            }
            report.outcomes.push((name, outcome));
        }
        info!(
            succeeded = report.succeeded(),
            total = report.total(),
            "batch generation finished"
        );
        Ok(report)
    }

    /// Report which themes have a generated document, without generating.
    pub fn status(&self) -> Result<Vec<ThemeStatus>, ThemeError> {
        Ok(self
            .subdirectories()?
            .into_iter()
            .map(|name| {
                let state = if !self.source_path(&name).is_file() {
                    ThemeState::NoSource
                } else if self.output_path(&name).is_file() {
                    ThemeState::Generated
                } else {
                    ThemeState::Pending
                };
                ThemeStatus { name, state }
            })
            .collect())
    }
}
