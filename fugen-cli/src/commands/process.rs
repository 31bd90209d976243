//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use fugen_core::{Decompounder, DecompounderConfig, Lexicon};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Dictionary word list, one morpheme per line
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Input files (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Minimum subword length in characters
    #[arg(short, long, value_name = "CHARS")]
    pub min_subword_len: Option<usize>,

    /// File with protected tokens, one per line
    #[arg(short, long, value_name = "FILE")]
    pub keywords: Option<PathBuf>,

    /// Decompound protected tokens as if they were ordinary
    #[arg(long)]
    pub no_respect_keywords: bool,

    /// Emit subwords without the original tokens
    #[arg(long)]
    pub subwords_only: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one token per line with subwords indented
    Text,
    /// JSON array of tokens with metadata
    Json,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting decompounding");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let engine = self.build_engine(&config)?;
        log::info!(
            "Loaded dictionary with {} entries, minimum subword length {}",
            engine.lexicon().len(),
            engine.config().min_subword_len
        );

        let text = self.read_input()?;
        let stream = engine.expand_text(&text);
        log::info!(
            "Expanded {} input tokens into {} output tokens",
            text.split_whitespace().count(),
            stream.len()
        );

        let mut formatter = self.formatter(&config)?;
        for token in &stream {
            formatter.format_token(token)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn build_engine(&self, config: &CliConfig) -> Result<Decompounder> {
        let dictionary = self
            .dictionary
            .as_ref()
            .or(config.engine.dictionary.as_ref())
            .ok_or(CliError::MissingDictionary)?;

        let lexicon = Lexicon::from_file(dictionary).with_context(|| {
            CliError::DictionaryNotFound(dictionary.display().to_string())
        })?;

        let mut keywords = config.engine.keywords.clone();
        if let Some(path) = &self.keywords {
            let content = std::fs::read_to_string(path)
                .with_context(|| CliError::InputNotFound(path.display().to_string()))?;
            keywords.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .map(str::to_string),
            );
        }

        let engine_config = DecompounderConfig::builder()
            .min_subword_len(self.min_subword_len.unwrap_or(config.engine.min_subword_len))
            .keywords(keywords)
            .respect_keywords(config.engine.respect_keywords && !self.no_respect_keywords)
            .subwords_only(config.engine.subwords_only || self.subwords_only)
            .build()?;

        Ok(Decompounder::new(lexicon, engine_config)?)
    }

    fn read_input(&self) -> Result<String> {
        if self.input.is_empty() {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            return Ok(text);
        }

        let mut text = String::new();
        for path in &self.input {
            let content = std::fs::read_to_string(path)
                .with_context(|| CliError::InputNotFound(path.display().to_string()))?;
            text.push_str(&content);
            text.push('\n');
        }
        Ok(text)
    }

    fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(std::io::stdout()),
        };

        let format = match self.format {
            Some(format) => format,
            None => match config.output.format.as_str() {
                "json" => OutputFormat::Json,
                "text" => OutputFormat::Text,
                other => {
                    return Err(
                        CliError::ConfigError(format!("unknown output format '{other}'")).into(),
                    )
                }
            },
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }

        Ok(())
    }
}
