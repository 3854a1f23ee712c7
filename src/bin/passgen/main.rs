use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use passgen::{GenerationConfig, InvalidConfiguration, Rubric, Selection, StrengthReport};

mod settings;
mod table;

/// Generate random passwords, or check the strength of an existing one.
#[derive(Parser)]
#[command(name = "passgen")]
struct Args {
    /// Password length [default: 16]
    #[arg(short, long, value_name = "N")]
    length: Option<usize>,
    /// Number of passwords to generate
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    count: usize,
    /// Include symbols
    #[arg(short, long)]
    symbols: bool,
    /// Exclude lowercase letters
    #[arg(long)]
    no_lowercase: bool,
    /// Exclude uppercase letters
    #[arg(long)]
    no_uppercase: bool,
    /// Exclude numbers
    #[arg(long)]
    no_numbers: bool,
    /// Exclude similar characters (0, O, 1, l, I)
    #[arg(long)]
    exclude_similar: bool,
    /// Redraw random bytes that would bias the output towards some characters
    #[arg(long)]
    strict_uniform: bool,
    /// Check password strength
    #[arg(long, value_name = "PASSWORD")]
    check: Option<String>,
    /// Strength rubric [default: five for --check, ten for --strength]
    #[arg(long, value_enum)]
    rubric: Option<RubricArg>,
    /// Print the --check report as JSON
    #[arg(long, requires = "check")]
    json: bool,
    /// Show the strength of each generated password
    #[arg(long)]
    strength: bool,
    /// Settings file holding the default generation options
    #[arg(long, env = "PASSGEN_SETTINGS", value_name = "PATH")]
    settings: Option<PathBuf>,
    /// Save the effective generation options as the new defaults
    #[arg(long)]
    save_settings: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RubricArg {
    Five,
    Ten,
}

impl From<RubricArg> for Rubric {
    fn from(arg: RubricArg) -> Rubric {
        match arg {
            RubricArg::Five => Rubric::FivePoint,
            RubricArg::Ten => Rubric::TenPoint,
        }
    }
}

impl Args {
    /// Layer the command line flags on top of the saved defaults.
    fn apply_to(&self, mut config: GenerationConfig) -> GenerationConfig {
        if let Some(length) = self.length {
            config.length = length;
        }
        if self.symbols {
            config.include_symbols = true;
        }
        if self.no_lowercase {
            config.include_lowercase = false;
        }
        if self.no_uppercase {
            config.include_uppercase = false;
        }
        if self.no_numbers {
            config.include_numbers = false;
        }
        if self.exclude_similar {
            config.exclude_similar = true;
        }
        if self.strict_uniform {
            config.selection = Selection::RejectionSampling;
        }
        config
    }
}

fn parse_args() -> Result<Args, ProgError> {
    match Args::try_parse() {
        Ok(args) => Ok(args),
        Err(err) if err.kind() == ErrorKind::UnknownArgument => {
            Err(ProgError::UnknownOption(context_string(&err, ContextKind::InvalidArg)))
        }
        Err(err) if err.kind() == ErrorKind::ValueValidation => Err(ProgError::InvalidValue {
            value: context_string(&err, ContextKind::InvalidValue),
            arg: context_string(&err, ContextKind::InvalidArg),
        }),
        // Help and the remaining usage errors are reported by clap itself.
        Err(err) => err.exit(),
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> String {
    match err.get(kind) {
        Some(ContextValue::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn run() -> Result<(), ProgError> {
    let args = parse_args()?;

    // An empty --check is treated as absent.
    if let Some(password) = args.check.as_deref().filter(|p| !p.is_empty()) {
        let rubric = args.rubric.map_or(Rubric::FivePoint, Rubric::from);
        let report = passgen::score(password, rubric);
        let stdout = io::stdout().lock();
        if args.json {
            serde_json::to_writer_pretty(stdout, &report)
                .context("failed to write report as JSON to stdout")?;
            println!();
        } else {
            print_report(stdout, password, &report).context("failed to write report")?;
        }
        return Ok(());
    }

    let settings_path = settings::settings_path(args.settings.clone())?;
    let defaults = settings::load(&settings_path)?;
    let config = args.apply_to(defaults);
    log::debug!("generating {} password(s) with {:?}", args.count, config);

    let passwords = passgen::generate_multiple(args.count, &config)?;

    if args.save_settings {
        settings::save(&settings_path.path, &config)?;
        eprintln!("Saved settings to {}", settings_path.path.display());
    }

    if args.strength {
        let rubric = args.rubric.map_or(Rubric::TenPoint, Rubric::from);
        let rows = passwords
            .iter()
            .enumerate()
            .map(|(index, password)| PasswordRow {
                index: (index + 1).to_string(),
                password: password.as_str(),
                label: passgen::score(password.as_str(), rubric).label,
            })
            .collect::<Vec<_>>();
        table::display_table(&rows, io::stdout().lock()).context("failed to output table")?;
    } else if passwords.len() == 1 {
        println!("{}", passwords[0].as_str());
    } else {
        for (index, password) in passwords.iter().enumerate() {
            println!("{}: {}", index + 1, password.as_str());
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn print_report(mut out: impl Write, password: &str, report: &StrengthReport) -> io::Result<()> {
    let mark = |passed: bool| if passed { '✓' } else { '✗' };
    writeln!(out, "Password: {password}")?;
    writeln!(
        out,
        "Strength: {} ({}/{})",
        report.label, report.score, report.max_score
    )?;
    writeln!(out, "Requirements:")?;
    writeln!(out, "  ✓ Length ≥ 8: {}", mark(report.checks.length))?;
    writeln!(out, "  ✓ Lowercase: {}", mark(report.checks.lowercase))?;
    writeln!(out, "  ✓ Uppercase: {}", mark(report.checks.uppercase))?;
    writeln!(out, "  ✓ Numbers: {}", mark(report.checks.numbers))?;
    writeln!(out, "  ✓ Symbols: {}", mark(report.checks.symbols))?;
    Ok(())
}

struct PasswordRow<'a> {
    index: String,
    password: &'a str,
    label: &'static str,
}

impl table::TableDisplay for PasswordRow<'_> {
    fn columns() -> usize {
        3
    }

    fn column_name(column_index: usize) -> &'static str {
        ["#", "Password", "Strength"][column_index]
    }

    fn item(&self, column_index: usize) -> &str {
        [self.index.as_str(), self.password, self.label][column_index]
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Error: invalid value '{value}' for '{arg}'")]
    InvalidValue { value: String, arg: String },
    #[error("Error: {0}")]
    InvalidConfiguration(InvalidConfiguration),
    #[error("Error: {0:#}")]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<InvalidConfiguration> for ProgError {
    fn from(err: InvalidConfiguration) -> ProgError {
        ProgError::InvalidConfiguration(err)
    }
}
