//! Implémentation de la commande de conversion
//!
//! - `llh-to-ecef lat_degrees long_degrees hae_km` : affiche x, y, z (km)
//! - tout autre nombre d'arguments : affiche l'usage et sort avec le code 0

use std::path::Path;

use anyhow::{Context, Result};
use llh_ecef::{parse_arguments, render, EllipsoidConverter, GeodeticPosition, OutputFormat};
use tracing::debug;

/// Arguments positionnels attendus, dans l'ordre
pub const USAGE_ARGS: &str = "lat_degrees long_degrees hae_km";

const DEFAULT_PROGRAM_NAME: &str = "llh-to-ecef";

/// Message d'usage
pub fn usage(program: &str) -> String {
    format!("Usage: {} {}", program, USAGE_ARGS)
}

/// Nom du programme tel qu'invoqué (sans répertoire ni extension)
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_stem())
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Exécute la conversion et retourne le texte à afficher
pub fn cmd_convert(raw: &[String; 3], precision: u8, format: OutputFormat) -> Result<String> {
    let [latitude_deg, longitude_deg, height_km] = parse_arguments(raw)?;
    let position = GeodeticPosition::new(latitude_deg, longitude_deg, height_km);

    debug!(
        lat = latitude_deg,
        lon = longitude_deg,
        hae_km = height_km,
        precision,
        format = %format,
        "Conversion LLH → ECEF"
    );

    let ecef = EllipsoidConverter::new()
        .convert_unrounded(&position)
        .rounded(precision);

    debug!(x = ecef.x_km, y = ecef.y_km, z = ecef.z_km, "Position ECEF");

    render(&ecef, format).context("Failed to render ECEF position")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(lat: &str, lon: &str, h: &str) -> [String; 3] {
        [lat.to_string(), lon.to_string(), h.to_string()]
    }

    #[test]
    fn test_usage() {
        assert_eq!(
            usage("llh-to-ecef"),
            "Usage: llh-to-ecef lat_degrees long_degrees hae_km"
        );
    }

    #[test]
    fn test_program_name_not_empty() {
        assert!(!program_name().is_empty());
    }

    #[test]
    fn test_cmd_convert_origin() {
        let out = cmd_convert(&args("0", "0", "0"), 6, OutputFormat::Text).unwrap();
        assert_eq!(out, "6378.1363\n0.0\n0.0");
    }

    #[test]
    fn test_cmd_convert_negative_inputs() {
        let out = cmd_convert(&args("-33.8688", "151.2093", "0.058"), 6, OutputFormat::Text)
            .unwrap();
        assert_eq!(out, "-4646.092971\n2553.229258\n-3534.404308");
    }

    #[test]
    fn test_cmd_convert_precision() {
        let out = cmd_convert(&args("0", "0", "0"), 2, OutputFormat::Text).unwrap();
        assert_eq!(out, "6378.14\n0.0\n0.0");
    }

    #[test]
    fn test_cmd_convert_json() {
        let out = cmd_convert(&args("90", "0", "0"), 6, OutputFormat::Json).unwrap();
        assert_eq!(out, r#"{"x_km":0.0,"y_km":0.0,"z_km":6356.751601}"#);
    }

    #[test]
    fn test_cmd_convert_invalid_number() {
        let err = cmd_convert(&args("0", "east", "0"), 6, OutputFormat::Text).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid numeric argument for long_degrees: 'east'"
        );
    }
}
