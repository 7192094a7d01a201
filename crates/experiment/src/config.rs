use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use serde::Deserialize;
use sort_lab::{ALL_PATTERNS, Pattern, PivotStrategy};

pub const DEFAULT_SEED: u64 = 0x5EED_2026;

#[derive(Debug, Parser)]
#[command(name = "sort-experiment")]
#[command(about = "Compare quick sort, merge sort and heap sort across sizes and input patterns")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// TOML file with experiment settings; flags override its values
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma-separated array sizes
    #[arg(long, global = true, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Comma-separated input patterns (random, sorted, reverse_sorted, nearly_sorted)
    #[arg(long, global = true, value_delimiter = ',')]
    pub patterns: Option<Vec<String>>,

    /// Timed runs per measurement, averaged
    #[arg(long, global = true)]
    pub runs: Option<usize>,

    /// Seed for input generation and the random pivot
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Upper bound of generated random values
    #[arg(long, global = true)]
    pub max_value: Option<i64>,

    /// Pivot strategy used by quick sort in `compare`
    #[arg(long, global = true)]
    pub strategy: Option<String>,

    /// Directory that receives the PNG charts
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long, global = true)]
    pub no_plots: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Time quick, merge and heap sort for every pattern and size
    #[default]
    Compare,
    /// Compare pivot strategies by time, comparisons and swaps
    Pivots {
        /// Array size for the strategy comparison
        #[arg(long)]
        size: Option<usize>,
    },
    /// Walk through one Lomuto partition and a full recursion tree
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    pub sizes: Vec<usize>,
    pub patterns: Vec<String>,
    pub runs: usize,
    pub seed: u64,
    pub max_value: i64,
    pub strategy: String,
    pub pivot_size: usize,
    pub output_dir: PathBuf,
    pub plots: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1000, 5000, 10000],
            patterns: ALL_PATTERNS.iter().map(|p| p.label().to_owned()).collect(),
            runs: 5,
            seed: DEFAULT_SEED,
            max_value: 1000,
            strategy: PivotStrategy::Random.label().to_owned(),
            pivot_size: 1000,
            output_dir: PathBuf::from("results"),
            plots: true,
        }
    }
}

impl ExperimentConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// File settings (if any) overlaid with command-line flags, validated.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(sizes) = &cli.sizes {
            self.sizes = sizes.clone();
        }
        if let Some(patterns) = &cli.patterns {
            self.patterns = patterns.clone();
        }
        if let Some(runs) = cli.runs {
            self.runs = runs;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(max_value) = cli.max_value {
            self.max_value = max_value;
        }
        if let Some(strategy) = &cli.strategy {
            self.strategy = strategy.clone();
        }
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        if cli.no_plots {
            self.plots = false;
        }
        if let Some(Command::Pivots { size: Some(size) }) = cli.command {
            self.pivot_size = size;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            bail!("at least one array size is required");
        }
        if self.sizes.contains(&0) {
            bail!("array sizes must be greater than 0");
        }
        if self.pivot_size == 0 {
            bail!("pivot_size must be greater than 0");
        }
        if self.runs == 0 {
            bail!("runs must be greater than 0");
        }
        if self.max_value < 1 {
            bail!("max_value must be at least 1, got {}", self.max_value);
        }
        if self.patterns.is_empty() {
            bail!("at least one input pattern is required");
        }
        self.parsed_patterns()?;
        self.pivot_strategy()?;
        Ok(())
    }

    pub fn parsed_patterns(&self) -> Result<Vec<Pattern>> {
        let mut parsed = Vec::with_capacity(self.patterns.len());
        for name in &self.patterns {
            let pattern = name.parse::<Pattern>()?;
            if !parsed.contains(&pattern) {
                parsed.push(pattern);
            }
        }
        Ok(parsed)
    }

    pub fn pivot_strategy(&self) -> Result<PivotStrategy> {
        Ok(self.strategy.parse::<PivotStrategy>()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use sort_lab::SortError;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("sort-experiment").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_are_valid() {
        let config = ExperimentConfig::load(&cli(&[])).unwrap();
        assert_eq!(config, ExperimentConfig::default());
        assert_eq!(config.parsed_patterns().unwrap(), ALL_PATTERNS.to_vec());
        assert_eq!(config.pivot_strategy().unwrap(), PivotStrategy::Random);
    }

    #[test]
    fn flags_override_defaults() {
        let args = cli(&[
            "pivots",
            "--size",
            "250",
            "--sizes",
            "10,20",
            "--patterns",
            "sorted,random",
            "--runs",
            "2",
            "--strategy",
            "median3",
            "--no-plots",
        ]);
        assert_eq!(args.command, Some(Command::Pivots { size: Some(250) }));

        let config = ExperimentConfig::load(&args).unwrap();
        assert_eq!(config.sizes, [10, 20]);
        assert_eq!(
            config.parsed_patterns().unwrap(),
            [Pattern::Sorted, Pattern::Random]
        );
        assert_eq!(config.runs, 2);
        assert_eq!(config.pivot_size, 250);
        assert_eq!(config.pivot_strategy().unwrap(), PivotStrategy::MedianOfThree);
        assert!(!config.plots);
    }

    #[test]
    fn toml_file_is_overlaid_by_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "sizes = [100, 200]\nruns = 3\nstrategy = \"first\"\nplots = false"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let config = ExperimentConfig::load(&cli(&["--config", &path, "--runs", "7"])).unwrap();
        assert_eq!(config.sizes, [100, 200]);
        assert_eq!(config.runs, 7);
        assert_eq!(config.pivot_strategy().unwrap(), PivotStrategy::First);
        assert!(!config.plots);
        assert_eq!(config.max_value, 1000);
    }

    #[test]
    fn unknown_toml_key_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sizez = [1]").unwrap();
        assert!(ExperimentConfig::from_toml_file(file.path()).is_err());
    }

    #[test]
    fn invalid_settings_are_rejected() {
        assert!(ExperimentConfig::load(&cli(&["--runs", "0"])).is_err());
        assert!(ExperimentConfig::load(&cli(&["--sizes", "10,0"])).is_err());
        assert!(ExperimentConfig::load(&cli(&["--max-value", "0"])).is_err());
        assert!(ExperimentConfig::load(&cli(&["--patterns", "zigzag"])).is_err());

        let err = ExperimentConfig::load(&cli(&["--strategy", "ninther"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SortError>(),
            Some(&SortError::UnknownPivotStrategy("ninther".to_owned()))
        );
    }
}
