use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use doctor11_assist::labs::{interpret_labs, lab_summary, load_lab_values, REFERENCE_RANGES};
use doctor11_assist::suggest::suggest_diagnosis;
use doctor11_cli::config::{self, CATALOG_ENV};
use doctor11_cli::form::{form_choices, process_form, FormDefaults, FormInput};
use doctor11_cli::state::AppState;
use doctor11_pricing::calculate_price;
use doctor11_report::export::{export_docx, export_txt};
use doctor11_report::styles::DocumentStyles;

#[derive(Parser)]
#[command(name = "doctor11")]
#[command(about = "Emergency medical report assistant")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a report from a JSON form
    Report {
        /// Form file
        form: PathBuf,
        /// Also write the report as plain text
        #[arg(long)]
        txt: Option<PathBuf>,
        /// Also write the report as DOCX
        #[arg(long)]
        docx: Option<PathBuf>,
        /// Print the full outcome as JSON instead of the report text
        #[arg(long)]
        json: bool,
    },
    /// Calculate the service price
    Price {
        #[arg(long)]
        locality: String,
        /// Base treatment cost
        #[arg(long, default_value_t = doctor11_pricing::TREATMENT_COST_DEFAULT)]
        base: u64,
        /// Heavy treatment (e.g. unconsciousness)
        #[arg(long)]
        heavy: bool,
        /// Diagnostic procedure (repeatable)
        #[arg(long = "diag")]
        diagnostics: Vec<String>,
    },
    /// Describe an MKN-10 code
    Lookup { code: String },
    /// List MKN-10 codes starting with a prefix
    Complete {
        prefix: String,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Suggest a diagnosis from present-illness text
    Suggest { text: String },
    /// Interpret lab values from a JSON file
    Labs { file: PathBuf },
    /// List the localities, diagnostics, anamnesis sections and substances the form accepts
    Choices,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default configuration if none exists
    Init,
    /// Remove the configuration file
    Delete,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Price {
            locality,
            base,
            heavy,
            diagnostics,
        } => {
            println!("{} Kč", calculate_price(&locality, base, heavy, &diagnostics));
        }
        Commands::Suggest { text } => match suggest_diagnosis(&text) {
            Some(suggestion) => println!("{}", suggestion.label()),
            None => println!("Žádný návrh."),
        },
        Commands::Labs { file } => {
            let values = load_lab_values(&file)?;
            let findings = interpret_labs(&values);
            if findings.is_empty() {
                println!("Hodnoty v referenčním rozmezí.");
                for range in REFERENCE_RANGES {
                    println!("{}: {}–{} {}", range.name, range.low, range.high, range.unit);
                }
            } else {
                println!("{}", lab_summary(&findings));
            }
        }
        Commands::Choices => {
            let choices = form_choices();
            println!("Lokalita: {}", choices.localities.join(", "));
            println!("Diagnostika: {}", choices.diagnostics.join(", "));
            for (key, name) in choices.anamnesis_sections {
                println!("{key}: {name}");
            }
            println!("Látky: {}", choices.substances.join(", "));
        }
        Commands::Config { action } => run_config(action)?,
        Commands::Report {
            form,
            txt,
            docx,
            json,
        } => {
            let state = bootstrap()?;
            let input = FormInput::from_file(&form)?;
            let outcome = process_form(
                &input,
                state.catalog.as_ref().ok(),
                &FormDefaults::from(&state.config),
            )?;

            for notice in &outcome.notices {
                eprintln!("{notice}");
            }
            if let Some(suggestion) = &outcome.suggestion {
                eprintln!("{}", suggestion.label());
            }
            if !outcome.lab_findings.is_empty() {
                eprintln!("{}", lab_summary(&outcome.lab_findings));
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.report);
            }
            if let Some(path) = txt {
                export_txt(&path, &outcome.report)?;
            }
            if let Some(path) = docx {
                export_docx(&path, &outcome.report, &DocumentStyles::default())?;
            }
        }
        Commands::Lookup { code } => {
            let state = bootstrap()?;
            match state.require_catalog()?.describe(&code) {
                Some(description) => println!("{}: {description}", code.trim().to_uppercase()),
                None => println!("{}", doctor11_cli::form::DESCRIPTION_NOT_FOUND),
            }
        }
        Commands::Complete { prefix, limit } => {
            let state = bootstrap()?;
            for code in state.require_catalog()?.complete(&prefix, limit) {
                println!("{code}");
            }
        }
    }

    Ok(())
}

fn bootstrap() -> Result<AppState> {
    let config = config::load_or_default()?;
    let source = config.resolve_catalog(std::env::var_os(CATALOG_ENV).map(PathBuf::from));
    Ok(AppState::bootstrap(config, &source))
}

fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = config::load_or_default()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init => {
            if config::has_config() {
                println!("Configuration already exists.");
            } else {
                let config = config::Doctor11Config::new();
                let path = config::save_config(&config)?;
                println!("Wrote {}", path.display());
            }
        }
        ConfigAction::Delete => config::delete_config()?,
    }
    Ok(())
}
