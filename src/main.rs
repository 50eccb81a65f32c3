use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ide_themer::cli::{Args, Command};
use ide_themer::config::ThemeConfig;
use ide_themer::preview;
use ide_themer::repository::{default_themes_dir, ThemeRepository, ThemeState};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = ThemeConfig::default().with_min_readable_contrast(args.min_contrast);
    let themes_dir = args.themes_dir.unwrap_or_else(default_themes_dir);
    let repo = ThemeRepository::new(themes_dir, config);

    match args.command {
        Command::Generate {
            theme,
            stdout,
            output,
            preview: show_preview,
        } => {
            let generation = repo
                .prepare(&theme)
                .with_context(|| format!("cannot generate theme '{theme}'"))?;

            if show_preview {
                preview::render(&mut io::stderr(), &generation)
                    .context("failed to print preview")?;
            }

            if stdout {
                print!("{}", generation.document.to_json()?);
            } else if let Some(path) = output {
                generation.document.write_to(&path)?;
                info!(path = %path.display(), "theme written");
            } else {
                let path = repo.persist(&generation)?;
                info!(
                    path = %path.display(),
                    classification = %generation.classification,
                    colors = generation.document.colors.len(),
                    "theme written"
                );
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::GenerateAll => {
            let report = repo.generate_all()?;
            for (name, outcome) in &report.outcomes {
                match outcome {
                    Ok(theme) => println!(
                        "ok    {name} ({}, {} colors, {} issues)",
                        theme.classification,
                        theme.color_count,
                        theme.issues.len()
                    ),
                    Err(err) => println!("fail  {name}: {err}"),
                }
            }
            println!(
                "generated {}/{} themes",
                report.succeeded(),
                report.total()
            );
            if report.total() == 0 {
                warn!(dir = %repo.root().display(), "no themes found");
            }
            Ok(if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Command::Status => {
            let status = repo.status()?;
            let mut generated = 0;
            let mut themes = 0;
            for entry in &status {
                let label = match entry.state {
                    ThemeState::Generated => "generated",
                    ThemeState::Pending => "missing",
                    ThemeState::NoSource => continue,
                };
                themes += 1;
                if entry.state == ThemeState::Generated {
                    generated += 1;
                }
                println!("{label:<10} {}", entry.name);
            }
            println!("{generated}/{themes} themes complete");
            Ok(ExitCode::SUCCESS)
        }

        Command::List => {
            for name in repo.list_themes()? {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
