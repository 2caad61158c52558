//! Point d'entrée CLI pour llh-to-ecef

use anyhow::Result;
use clap::Parser;
use llh_ecef::{OutputFormat, DEFAULT_PRECISION};
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

// Charger .env au démarrage (RUST_LOG)
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

/// Convertir une position LLH en coordonnées ECEF
#[derive(Parser)]
#[command(name = "llh-to-ecef")]
#[command(author, version)]
#[command(about = "Convertir une position LLH (latitude, longitude, hauteur ellipsoïdale) en x, y, z ECEF (km)")]
#[command(long_about = "Convertit une position géodésique en coordonnées ECEF (Earth-Centered, Earth-Fixed).\n\nAffiche x, y et z (km) sur trois lignes, arrondis à 6 décimales.\nLes options se placent avant les coordonnées.")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long)]
    quiet: bool,

    /// Nombre de décimales conservées en sortie
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u8,

    /// Format de sortie : text (une composante par ligne) ou json
    #[arg(long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// lat_degrees long_degrees hae_km
    ///
    /// Tout argument commençant par un tiret est une valeur (`-6.5e-3`, `-inf`),
    /// sauf s'il ne contient que des options courtes connues (`-v`, `-q`).
    #[arg(value_name = "COORD", num_args = 0.., allow_hyphen_values = true)]
    coords: Vec<String>,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    // Mauvais nombre d'arguments : usage sur stdout, sortie 0
    let Ok(coords) = <&[String; 3]>::try_from(cli.coords.as_slice()) else {
        debug!(count = cli.coords.len(), "Nombre d'arguments incorrect");
        println!("{}", cli::usage(&cli::program_name()));
        return Ok(());
    };

    let output = cli::cmd_convert(coords, cli.precision, cli.format)?;
    println!("{}", output);

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout reste réservé aux résultats
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
