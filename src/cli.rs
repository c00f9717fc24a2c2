use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "puby",
    about = "A utility for managing Dart/Flutter package dependencies",
    version,
    after_help = "Examples:
  puby                            # Check for updates in current directory
  puby --path=/path/to/project    # Check for updates in a specific directory
  puby --write                    # Apply updates to pubspec.yaml
  puby --include=http,path        # Only check specific packages
  puby --exclude=flutter_svg      # Check all packages except flutter_svg"
)]
pub struct Cli {
    /// Use beta versions for SDK updates
    #[arg(long)]
    pub beta: bool,

    /// Check Flutter SDK version
    #[arg(long)]
    pub flutter: bool,

    /// Write changes to pubspec.yaml (otherwise run in dry-run mode)
    #[arg(long)]
    pub write: bool,

    /// Path to the pubspec.yaml file (or its project directory)
    #[arg(long, default_value = "pubspec.yaml")]
    pub path: String,

    /// Comma-separated list of packages to include in update check
    #[arg(long, value_delimiter = ',', value_name = "PACKAGES")]
    pub include: Vec<String>,

    /// Comma-separated list of packages to exclude from update check
    #[arg(long, value_delimiter = ',', value_name = "PACKAGES")]
    pub exclude: Vec<String>,

    /// Timeout in seconds for each registry request
    #[arg(long, default_value_t = 30, value_name = "SECS")]
    pub timeout: u64,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn include_packages(&self) -> Option<Vec<String>> {
        package_list(&self.include)
    }

    pub fn exclude_packages(&self) -> Option<Vec<String>> {
        package_list(&self.exclude)
    }
}

/// Trims entries and drops empty ones; `None` when nothing is left.
fn package_list(raw: &[String]) -> Option<Vec<String>> {
    let packages: Vec<String> = raw
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();

    (!packages.is_empty()).then_some(packages)
}
