use crate::agents::update::{DependencyUpdate, EnvironmentUpdate};
use crate::agents::{
    ManifestWriter, ProjectScannerAgent, ResolutionConfig, UpdateChecker, UpdateResult,
};
use crate::error::Result;
use crate::pubspec::{DependencySection, PubspecParser};
use crate::registry::RegistryEndpoints;
use colored::Colorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::info;

/// Execute the check workflow, writing the manifest when `config.write_changes` is set
pub fn execute_check<P: AsRef<Path>>(
    manifest_path: P,
    config: ResolutionConfig,
    endpoints: RegistryEndpoints,
) -> Result<()> {
    let scanner = ProjectScannerAgent::new(manifest_path);
    let project_info = scanner.validate()?;
    let manifest_path = project_info.manifest_path;

    println!(
        "{}",
        format!("Checking for updates in {}...", manifest_path.display())
            .cyan()
            .bold()
    );

    let manifest = PubspecParser::new(&manifest_path).parse()?;
    info!(
        name = manifest.name.as_deref().unwrap_or("<unnamed>"),
        dependencies = manifest.section(DependencySection::Dependencies).count(),
        dev_dependencies = manifest.section(DependencySection::DevDependencies).count(),
        "parsed {}",
        manifest_path.display()
    );

    let write_changes = config.write_changes;
    let checker =
        UpdateChecker::new(&endpoints, config)?.with_progress(std::io::stderr().is_terminal());
    let update = checker.check(&manifest)?;

    print!("{}", render_update(&update));

    if !update.has_updates() {
        return Ok(());
    }

    if write_changes {
        let writer = ManifestWriter::new(&manifest_path);
        if writer.write_updates(&update)? {
            println!(
                "\n{}",
                format!("Updates have been written to {}", manifest_path.display()).green()
            );
        } else {
            println!(
                "\n{}",
                "No matching lines found, pubspec.yaml left unchanged".yellow()
            );
        }
    } else {
        println!(
            "\n{}",
            format!(
                "Found {} update(s). Running in dry-run mode. Use --write flag to apply changes.",
                update.total_updates()
            )
            .dimmed()
        );
    }

    Ok(())
}

/// Console rendering of an update result.
pub fn render_update(update: &UpdateResult) -> String {
    let mut out = String::new();

    if let Some(environment) = &update.environment {
        out.push_str(&render_environment(environment));
    }

    if !update.dependencies.is_empty() {
        out.push_str(&render_dependencies(&update.dependencies));
    }

    if !update.has_updates() {
        out.push_str(&format!("{}\n", "Everything is up to date!".green().bold()));
    }

    out
}

fn render_environment(environment: &EnvironmentUpdate) -> String {
    let mut out = format!("{}\n", "=== SDK Updates ===".cyan().bold());

    if let Some(version) = &environment.dart_sdk {
        out.push_str(&format!("{} {}\n", "Dart SDK:".yellow().bold(), version.green()));
    }
    if let Some(version) = &environment.flutter_sdk {
        out.push_str(&format!("{} {}\n", "Flutter SDK:".yellow().bold(), version.green()));
    }

    out.push('\n');
    out
}

fn render_dependencies(dependencies: &[DependencyUpdate]) -> String {
    let mut out = format!("{}\n", "=== Dependency Updates ===".cyan().bold());

    let width = dependencies
        .iter()
        .map(|dep| dep.name.chars().count())
        .max()
        .unwrap_or(0);

    for dep in dependencies {
        let padding = " ".repeat(width - dep.name.chars().count());
        out.push_str(&format!(
            "{}{}: {} → {}\n",
            dep.name.yellow().bold(),
            padding,
            dep.current_version.red(),
            dep.latest_version.green()
        ));
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(update: &UpdateResult) -> String {
        colored::control::set_override(false);
        render_update(update)
    }

    #[test]
    fn renders_up_to_date_message() {
        assert_eq!(plain(&UpdateResult::default()), "Everything is up to date!\n");
    }

    #[test]
    fn renders_sdk_and_aligned_dependency_rows() {
        let update = UpdateResult {
            environment: Some(EnvironmentUpdate {
                dart_sdk: Some("3.0.0".into()),
                flutter_sdk: None,
            }),
            dependencies: vec![
                DependencyUpdate {
                    name: "http".into(),
                    current_version: "0.13.3".into(),
                    latest_version: "0.13.5".into(),
                },
                DependencyUpdate {
                    name: "flutter_svg".into(),
                    current_version: "1.0.0".into(),
                    latest_version: "2.0.10".into(),
                },
            ],
        };

        assert_eq!(
            plain(&update),
            "=== SDK Updates ===\n\
             Dart SDK: 3.0.0\n\
             \n\
             === Dependency Updates ===\n\
             http       : 0.13.3 → 0.13.5\n\
             flutter_svg: 1.0.0 → 2.0.10\n\
             \n"
        );
    }
}
