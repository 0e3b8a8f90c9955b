// SPDX-License-Identifier: PMPL-1.0-or-later

//! display-names: print localized names for language, region, script and
//! currency codes
//!
//! Thin command-line front end over the `display_names` library. Options can
//! be given as flags or loaded from a JSON/YAML file; flags win.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use display_names::locale;
use display_names::{
    DisplayNamesOptions, DisplayNamesResolver, DisplayType, EmbeddedProvider, OptionsFormat,
};
use icu_locid::Locale;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "display-names")]
#[command(version)]
#[command(about = "Localized display names for language, region, script and currency codes")]
#[command(long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the display name of each code
    Of {
        #[command(flatten)]
        resolver: ResolverArgs,

        /// Codes to name
        #[arg(value_name = "CODE", required = true)]
        codes: Vec<String>,
    },

    /// Print the resolved options of a resolver
    Options {
        #[command(flatten)]
        resolver: ResolverArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OptionsFormat,
    },

    /// Print which of the given locales have display-name data
    Supported {
        /// Requested locales
        #[arg(value_name = "LOCALE")]
        locales: Vec<String>,
    },
}

#[derive(Args)]
struct ResolverArgs {
    /// Requested locale, in priority order (repeatable)
    #[arg(short, long = "locale", value_name = "TAG")]
    locales: Vec<String>,

    /// Kind of code to name
    #[arg(short = 't', long = "type", value_enum)]
    display_type: Option<DisplayTypeArg>,

    /// Name style
    #[arg(short, long, value_enum)]
    style: Option<StyleArg>,

    /// What to print for codes without a name
    #[arg(long, value_enum)]
    fallback: Option<FallbackArg>,

    /// JSON or YAML file with default options
    #[arg(long = "options", value_name = "FILE")]
    options_file: Option<PathBuf>,

    /// Locale used when no requested locale is available [default: from LC_ALL/LC_MESSAGES/LANG]
    #[arg(long, value_name = "TAG")]
    default_locale: Option<String>,
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum DisplayTypeArg {
    Language,
    Region,
    Script,
    Currency,
}

impl From<DisplayTypeArg> for DisplayType {
    fn from(arg: DisplayTypeArg) -> Self {
        match arg {
            DisplayTypeArg::Language => DisplayType::Language,
            DisplayTypeArg::Region => DisplayType::Region,
            DisplayTypeArg::Script => DisplayType::Script,
            DisplayTypeArg::Currency => DisplayType::Currency,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum StyleArg {
    Long,
    Short,
    Narrow,
}

impl StyleArg {
    fn token(self) -> &'static str {
        match self {
            StyleArg::Long => "long",
            StyleArg::Short => "short",
            StyleArg::Narrow => "narrow",
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FallbackArg {
    Code,
    None,
}

impl FallbackArg {
    fn token(self) -> &'static str {
        match self {
            FallbackArg::Code => "code",
            FallbackArg::None => "none",
        }
    }
}

impl ResolverArgs {
    fn options(&self) -> Result<DisplayNamesOptions> {
        let flags = DisplayNamesOptions {
            style: self.style.map(|s| s.token().to_string()),
            display_type: self
                .display_type
                .map(|t| DisplayType::from(t).as_str().to_string()),
            fallback: self.fallback.map(|f| f.token().to_string()),
        };
        match &self.options_file {
            Some(path) => Ok(flags.or(DisplayNamesOptions::from_path(path)?)),
            None => Ok(flags),
        }
    }

    fn default_locale(&self) -> Result<Locale> {
        match &self.default_locale {
            Some(tag) => locale::parse_locale_tag(tag)
                .with_context(|| format!("invalid --default-locale {:?}", tag)),
            None => Ok(locale::environment_default_locale()),
        }
    }

    fn build(&self) -> Result<DisplayNamesResolver> {
        let options = self.options()?;
        let default_locale = self.default_locale()?;
        Ok(DisplayNamesResolver::new(
            &EmbeddedProvider,
            self.locales.as_slice(),
            &options,
            &default_locale,
        )?)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Of { resolver, codes } => {
            let resolver = resolver.build()?;
            let mut failures = 0;
            for code in &codes {
                match resolver.of(code) {
                    Ok(Some(name)) => println!("{}\t{}", code, name),
                    Ok(None) => println!("{}\t{}", code, "(no value)".dimmed()),
                    Err(err) => {
                        failures += 1;
                        eprintln!("{} {}", "error:".red().bold(), err);
                    }
                }
            }
            if failures > 0 {
                bail!("{} of {} codes were rejected", failures, codes.len());
            }
        }

        Commands::Options { resolver, format } => {
            let resolver = resolver.build()?;
            let snapshot = resolver.resolved_options();
            println!("{}", format.serialize(&snapshot)?.trim_end());
        }

        Commands::Supported { locales } => {
            let supported =
                DisplayNamesResolver::supported_locales_of(&EmbeddedProvider, locales.as_slice())?;
            if supported.is_empty() {
                println!("{}", "no requested locale is supported".yellow());
            }
            for tag in &supported {
                println!("{}", tag);
            }
        }
    }

    Ok(())
}
