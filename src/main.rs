//! scalenty-site - inspect and change the site preference state
//!
//! Entry point for the command-line tool. Handles argument parsing,
//! logging initialization, and mounting the site state against a
//! file-backed preference store.

use anyhow::Context;
use chrono::Datelike;
use scalenty_site::config::SiteConfig;
use scalenty_site::faq::{self, CategoryFilter};
use scalenty_site::i18n::{self, MessageCatalog};
use scalenty_site::platform::{DocumentRoot, SystemAppearance};
use scalenty_site::state::{ConsentState, Host, SiteState};
use scalenty_site::storage::{FileStorage, Preference, Storage, CONSENT_KEY};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Application name for logging
const APP_NAME: &str = "scalenty-site";

/// What the invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Status,
    Locale(String),
    Theme(String),
    ToggleTheme,
    Consent(String),
    Reset(String),
    Translate(String),
    Faq { file: PathBuf, category: String },
    CheckCatalog,
}

/// Parsed command line
#[derive(Debug)]
struct Flags {
    storage: Option<PathBuf>,
    config: Option<PathBuf>,
    command: Command,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging();

    let flags = parse_args();
    log::debug!("Running {:?}", flags.command);

    if flags.command == Command::CheckCatalog {
        return check_catalog();
    }

    let mut config = match &flags.config {
        Some(path) => SiteConfig::load_from(path)?,
        None => SiteConfig::load()?,
    };
    if let Some(path) = flags.storage {
        config.storage_file = Some(path);
    }

    let storage_path = config.storage_path()?;
    log::debug!("Using preference store {}", storage_path.display());

    let storage: Rc<dyn Storage> = Rc::new(FileStorage::new(storage_path));
    let document = Rc::new(DocumentRoot::new());
    let browser_language = std::env::var("LANG").ok();
    let host = Host {
        storage: Rc::clone(&storage),
        document: document.clone(),
        appearance: Rc::new(SystemAppearance::detect()),
        browser_language: browser_language.clone(),
    };

    let mut state = SiteState::mounted(host, config);

    match flags.command {
        Command::Status => {}
        Command::Locale(code) => state.use_locale_mut()?.set_locale_code(&code)?,
        Command::Theme(name) => {
            let theme = name.parse()?;
            state.use_theme_mut()?.set_theme(theme);
        }
        Command::ToggleTheme => state.use_theme_mut()?.toggle_theme(),
        Command::Consent(answer) => match answer.as_str() {
            "accept" => state.use_consent_mut()?.give_consent(),
            "decline" => state.use_consent_mut()?.deny_consent(),
            other => anyhow::bail!("Unknown consent answer: {} (use accept or decline)", other),
        },
        Command::Reset(target) => match target.as_str() {
            "locale" => state
                .use_locale_mut()?
                .reset(browser_language.as_deref()),
            "theme" => state.use_theme_mut()?.reset(),
            "consent" => {
                Preference::<ConsentState>::new(CONSENT_KEY, Rc::clone(&storage)).reset();
                println!("Cookie consent cleared; the banner will be shown again.");
                return Ok(());
            }
            other => anyhow::bail!("Unknown reset target: {} (use locale, theme or consent)", other),
        },
        Command::Translate(path) => {
            let locale = state.use_locale()?.locale();
            let template = MessageCatalog::global().get(locale, &path)?;
            let year = chrono::Local::now().year().to_string();
            println!("{}", i18n::fill(template, "year", &year));
            return Ok(());
        }
        Command::Faq { file, category } => {
            return print_faq(&state, &file, &category);
        }
        Command::CheckCatalog => return check_catalog(),
    }

    print_status(&state, &document)
}

/// Initialize the logging system
fn init_logging() {
    // Set default log level if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,scalenty_site=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

/// Parse command line arguments
fn parse_args() -> Flags {
    let args: Vec<String> = std::env::args().collect();
    let mut storage = None;
    let mut config = None;
    let mut positional = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-s" | "--storage" => {
                storage = Some(path_argument(&args, i));
                i += 1;
            }
            "-c" | "--config" => {
                config = Some(path_argument(&args, i));
                i += 1;
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    let command = match parse_command(&positional) {
        Some(command) => command,
        None => {
            eprintln!("Invalid command: {}", positional.join(" "));
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    Flags {
        storage,
        config,
        command,
    }
}

/// Value following the option at `i`, or exit with a usage error
fn path_argument(args: &[String], i: usize) -> PathBuf {
    match args.get(i + 1) {
        Some(value) => PathBuf::from(value),
        None => {
            eprintln!("Error: {} requires a path argument", args[i]);
            std::process::exit(1);
        }
    }
}

fn parse_command(positional: &[String]) -> Option<Command> {
    let words: Vec<&str> = positional.iter().map(String::as_str).collect();
    let command = match words.as_slice() {
        [] | ["status"] => Command::Status,
        ["locale", code] => Command::Locale(code.to_string()),
        ["theme", name] => Command::Theme(name.to_string()),
        ["toggle-theme"] => Command::ToggleTheme,
        ["consent", answer] => Command::Consent(answer.to_string()),
        ["reset", target] => Command::Reset(target.to_string()),
        ["t", path] => Command::Translate(path.to_string()),
        ["faq", file] => Command::Faq {
            file: PathBuf::from(file),
            category: "all".to_string(),
        },
        ["faq", file, category] => Command::Faq {
            file: PathBuf::from(file),
            category: category.to_string(),
        },
        ["check-catalog"] => Command::CheckCatalog,
        _ => return None,
    };
    Some(command)
}

fn print_status(state: &SiteState, document: &DocumentRoot) -> anyhow::Result<()> {
    let locale = state.use_locale()?.locale();
    let theme = state.use_theme()?;
    let consent = state.use_consent()?.state();

    println!("locale:    {} ({})", locale, locale.native_name());
    println!("theme:     {} -> {}", theme.theme(), theme.resolved_theme());
    match consent.timestamp() {
        Some(at) => println!("consent:   {} at {}", consent.status(), at.to_rfc3339()),
        None => println!("consent:   {}", consent.status()),
    }
    println!("banner:    {}", if state.banner_visible()? { "shown" } else { "hidden" });
    println!(
        "document:  lang={} class=\"{}\"",
        document.lang().unwrap_or_default(),
        document.classes().join(" ")
    );
    Ok(())
}

fn print_faq(state: &SiteState, file: &Path, category: &str) -> anyhow::Result<()> {
    let locale = state.use_locale()?.locale();
    let selector: CategoryFilter = category.parse()?;

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read FAQ content: {}", file.display()))?;
    let records = faq::parse_records(&content)
        .with_context(|| format!("Invalid FAQ content: {}", file.display()))?;

    let mut tabs = vec![format!("{} ({})", i18n::lookup(locale, "faq", "category_all")?, records.len())];
    for (category, count) in faq::category_counts(&records) {
        tabs.push(format!("{} ({})", i18n::lookup(locale, "faq", category.label_key())?, count));
    }
    println!("{}", tabs.join(" | "));
    println!();

    let visible = faq::filter(&records, selector);
    if visible.is_empty() {
        println!("{}", i18n::lookup(locale, "faq", "empty")?);
    }
    for record in visible {
        println!("[{}] {}", record.category, record.question);
        println!("    {}", record.answer);
    }
    Ok(())
}

fn check_catalog() -> anyhow::Result<()> {
    match MessageCatalog::global().verify_complete() {
        Ok(()) => {
            println!("Catalog complete");
            Ok(())
        }
        Err(missing) => {
            for error in &missing {
                eprintln!("{}", error);
            }
            anyhow::bail!("{} missing translations", missing.len())
        }
    }
}

/// Print help message
fn print_help() {
    println!(
        r#"scalenty-site - Scalenty site preference state

USAGE:
    scalenty-site [OPTIONS] [COMMAND]

COMMANDS:
    status                      Show locale, theme and consent (default)
    locale <en|tr>              Switch language
    theme <light|dark|system>   Set the theme preference
    toggle-theme                Flip between light and dark
    consent <accept|decline>    Answer the cookie banner
    reset <locale|theme|consent>
                                Forget a stored preference
    t <namespace.key>           Print a UI string in the current language
    faq <file.json> [category]  List FAQ entries (all, general, amazon, etsy, pricing)
    check-catalog               Verify every locale defines every string

OPTIONS:
    -h, --help          Show this help message
    -v, --version       Show version information
    -s, --storage       Use a specific preference store file
    -c, --config        Use a specific configuration file
"#
    );
}

/// Print version information
fn print_version() {
    println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(&[]), Some(Command::Status));
        assert_eq!(
            parse_command(&words(&["locale", "tr"])),
            Some(Command::Locale("tr".to_string()))
        );
        assert_eq!(
            parse_command(&words(&["faq", "faq.json"])),
            Some(Command::Faq {
                file: PathBuf::from("faq.json"),
                category: "all".to_string()
            })
        );
        assert_eq!(parse_command(&words(&["theme"])), None);
        assert_eq!(parse_command(&words(&["dance"])), None);
    }
}
