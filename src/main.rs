use std::path::PathBuf;

use clap::{Parser, Subcommand};

use roster_db::{Error, LanguageCatalog, ProfileStore, StudentProfile, normalize_key};

/// Tool configuration resolved from environment variables.
///
/// # Environment Variables
///
/// | Variable           | Required | Default                   | Description                    |
/// |--------------------|----------|---------------------------|--------------------------------|
/// | `ROSTER_DATA`      | No       | `Students.csv`            | Path to the profile CSV file   |
/// | `ROSTER_LANGUAGES` | No       | `ProgrammingLanguage.csv` | Path to the language catalog   |
///
/// Relative paths resolve against the working directory, so by default both
/// files live next to wherever the tool is run.
#[derive(Debug, Clone, PartialEq)]
struct Config {
    /// Path to the profile CSV file.
    data_path: PathBuf,
    /// Path to the language catalog file.
    languages_path: PathBuf,
}

/// Default profile file name when `ROSTER_DATA` is not set.
const DEFAULT_DATA_FILE: &str = "Students.csv";

/// Default language catalog file name when `ROSTER_LANGUAGES` is not set.
const DEFAULT_LANGUAGES_FILE: &str = "ProgrammingLanguage.csv";

impl Config {
    /// Parse configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` if either variable is set to an empty value.
    fn from_env() -> Result<Config, String> {
        let data_path = match std::env::var("ROSTER_DATA") {
            Ok(val) if val.is_empty() => {
                return Err("ROSTER_DATA must not be empty".to_string());
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let languages_path = match std::env::var("ROSTER_LANGUAGES") {
            Ok(val) if val.is_empty() => {
                return Err("ROSTER_LANGUAGES must not be empty".to_string());
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_LANGUAGES_FILE),
        };

        Ok(Config {
            data_path,
            languages_path,
        })
    }
}

/// Initialize the global `tracing` subscriber with an `EnvFilter`.
///
/// Reads the `RUST_LOG` environment variable to configure log level
/// filtering; defaults to `"warn"` so normal CLI output stays clean. Uses
/// `try_init()` so repeated calls (e.g. across tests in one process) are a
/// silent no-op.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Maintain student profiles stored in a CSV file.
#[derive(Parser, Debug)]
#[command(name = "roster-db", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all stored profiles.
    List,
    /// Show every field of one profile.
    Show {
        /// Student name (matched after whitespace/case normalization).
        name: String,
    },
    /// Add a new profile.
    Add {
        /// Student name; must be unique after normalization.
        name: String,
        /// Academic standing label.
        #[arg(long, default_value = "")]
        status: String,
        /// Mark the student as employed.
        #[arg(long)]
        employed: bool,
        /// Job description.
        #[arg(long, default_value = "")]
        job: String,
        /// Programming language (repeatable).
        #[arg(long = "language")]
        languages: Vec<String>,
        /// Database system (repeatable).
        #[arg(long = "database")]
        databases: Vec<String>,
        /// Preferred professional role.
        #[arg(long, default_value = "")]
        role: String,
        /// Faculty comment.
        #[arg(long, default_value = "")]
        comment: String,
        /// Recommend for hire.
        #[arg(long)]
        whitelist: bool,
        /// Flag against hire.
        #[arg(long)]
        blacklist: bool,
    },
    /// Remove a profile.
    Remove {
        /// Student name (matched after whitespace/case normalization).
        name: String,
    },
    /// List the language catalog.
    Languages,
}

/// Read all profiles, skipping rows too short for the schema with a warning.
fn load_profiles(store: &ProfileStore) -> Result<Vec<StudentProfile>, Error> {
    let mut profiles = Vec::new();
    for record in store.read_all()? {
        match StudentProfile::from_record(&record) {
            Ok(profile) => profiles.push(profile),
            Err(e) => {
                tracing::warn!(error = %e, "skipping undersized record");
            }
        }
    }
    Ok(profiles)
}

/// Render a flag for display.
fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn run(cli: Cli, config: &Config) -> Result<(), Error> {
    let store = ProfileStore::new(&config.data_path);

    match cli.command {
        Command::List => {
            let profiles = load_profiles(&store)?;
            for p in &profiles {
                println!(
                    "{} | {} | employed: {} | {}",
                    p.full_name,
                    p.academic_status,
                    yes_no(p.employed),
                    p.preferred_role
                );
            }
            println!("{} profile(s)", profiles.len());
        }
        Command::Show { name } => {
            let normalized = normalize_key(&name);
            let profiles = load_profiles(&store)?;
            let profile = profiles
                .iter()
                .find(|p| normalize_key(&p.full_name) == normalized)
                .ok_or(Error::NotFound { key: name })?;
            println!("Name:        {}", profile.full_name);
            println!("Status:      {}", profile.academic_status);
            println!("Employed:    {}", yes_no(profile.employed));
            println!("Job:         {}", profile.job_details);
            println!("Languages:   {}", profile.languages.join(", "));
            println!("Databases:   {}", profile.databases.join(", "));
            println!("Role:        {}", profile.preferred_role);
            println!("Whitelisted: {}", yes_no(profile.whitelisted));
            println!("Blacklisted: {}", yes_no(profile.blacklisted));
            println!("Comments:");
            for line in profile.comment.lines() {
                println!("  {line}");
            }
        }
        Command::Add {
            name,
            status,
            employed,
            job,
            languages,
            databases,
            role,
            comment,
            whitelist,
            blacklist,
        } => {
            let profile = StudentProfile {
                full_name: name,
                academic_status: status,
                employed,
                job_details: job,
                languages,
                databases,
                preferred_role: role,
                comment,
                whitelisted: whitelist,
                blacklisted: blacklist,
            };
            store.append(&profile.to_record())?;
            println!("added {}", profile.full_name);
        }
        Command::Remove { name } => {
            store.delete_by_key(&name)?;
            println!("removed {name}");
        }
        Command::Languages => {
            let catalog = LanguageCatalog::new(&config.languages_path);
            for name in catalog.load()? {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn main() {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();

    if let Err(e) = run(cli, &config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
