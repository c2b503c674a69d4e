// CLI module - command-line argument parsing and handlers
//
// `codeplay [FILES]...` opens one playground per file, or the bundled samples
// when no file is given. Flags override the [playground] config defaults.
//
// Provides a subcommand for configuration management:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR

use crate::config::{Config, PlaygroundDefaults, VERSION};
use crate::playground::PlaygroundOptions;
use crate::samples::{self, SAMPLES};
use crate::tui::app::SectionSpec;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// codeplay - view, copy, edit and reset code snippets in the terminal
#[derive(Parser, Debug)]
#[command(name = "codeplay")]
#[command(version = VERSION)]
#[command(about = "Terminal code playground", long_about = None)]
pub struct Cli {
    /// Files to open, one playground each (bundled samples when empty)
    pub files: Vec<PathBuf>,

    /// Playground title (defaults to the file name)
    #[arg(long)]
    pub title: Option<String>,

    /// Highlighter language (defaults to the file extension)
    #[arg(long)]
    pub language: Option<String>,

    /// Maximum body rows
    #[arg(long)]
    pub height: Option<u16>,

    /// Disable Edit mode
    #[arg(long)]
    pub read_only: bool,

    /// Show the Code/Preview tab pair
    #[arg(long)]
    pub preview: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,
    },
}

impl Cli {
    /// Build the sections to open: the given files, or the bundled samples
    pub fn sections(&self, defaults: &PlaygroundDefaults) -> Result<Vec<SectionSpec>> {
        if self.files.is_empty() {
            return Ok(SAMPLES
                .iter()
                .map(|sample| SectionSpec {
                    label: sample.label.to_string(),
                    subtitle: Some(sample.subtitle.to_string()),
                    description: Some(sample.description.to_string()),
                    options: self.apply(
                        defaults
                            .options_for(sample.code)
                            .title(sample.title)
                            .language(sample.language),
                    ),
                })
                .collect());
        }

        self.files
            .iter()
            .map(|path| self.file_section(path, defaults))
            .collect()
    }

    fn file_section(&self, path: &Path, defaults: &PlaygroundDefaults) -> Result<SectionSpec> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let language = samples::language_for_path(path)
            .map(str::to_string)
            .unwrap_or_else(|| defaults.language.clone());

        tracing::debug!(file = %path.display(), %language, bytes = text.len(), "file loaded");

        Ok(SectionSpec {
            label: name.clone(),
            subtitle: None,
            description: None,
            options: self.apply(defaults.options_for(text).title(name).language(language)),
        })
    }

    /// Command-line flags win over everything else
    fn apply(&self, mut options: PlaygroundOptions) -> PlaygroundOptions {
        if let Some(title) = &self.title {
            options = options.title(title.clone());
        }
        if let Some(language) = &self.language {
            options = options.language(language.clone());
        }
        if let Some(height) = self.height {
            options = options.height((height > 0).then_some(height));
        }
        if self.read_only {
            options = options.editable(false);
        }
        if self.preview {
            options = options.dual_tab(true);
        }
        options
    }
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match cli.command {
        Some(Commands::Config {
            show,
            path,
            reset,
            edit,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else {
                // No flag provided, show help
                println!("Usage: codeplay config [--show|--path|--reset|--edit]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
            }
            true
        }
        None => false, // No subcommand, open the playgrounds
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("codeplay").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_no_files_opens_samples() {
        let cli = parse(&[]);
        let sections = cli.sections(&PlaygroundDefaults::default()).unwrap();

        assert_eq!(sections.len(), SAMPLES.len());
        assert_eq!(sections[0].label, SAMPLES[0].label);
        assert_eq!(sections[0].options.title, SAMPLES[0].title);
        assert_eq!(sections[0].options.initial_text, SAMPLES[0].code);
        assert!(sections[0].options.editable);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&["--read-only", "--preview", "--height", "12", "--language", "rust"]);
        let sections = cli.sections(&PlaygroundDefaults::default()).unwrap();

        for section in &sections {
            assert!(!section.options.editable);
            assert!(section.options.dual_tab);
            assert_eq!(section.options.height, Some(12));
            assert_eq!(section.options.language, "rust");
        }
    }

    #[test]
    fn test_file_section_infers_language_and_title() {
        let dir = std::env::temp_dir().join(format!("codeplay-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("main.py");
        std::fs::write(&file, "print('hi')\n").unwrap();

        let cli = parse(&[file.to_str().unwrap()]);
        let sections = cli.sections(&PlaygroundDefaults::default()).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, "main.py");
        assert_eq!(sections[0].options.title, "main.py");
        assert_eq!(sections[0].options.language, "python");
        assert_eq!(sections[0].options.initial_text, "print('hi')\n");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cli = parse(&["/definitely/not/here.rs"]);
        let err = cli.sections(&PlaygroundDefaults::default()).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.rs"));
    }

    #[test]
    fn test_config_subcommand_parses() {
        let cli = parse(&["config", "--path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, .. })
        ));
    }
}
