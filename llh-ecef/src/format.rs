//! Rendu texte et JSON d'une position ECEF

use std::fmt;
use std::str::FromStr;

use crate::types::EcefPosition;
use crate::EcefError;

/// Format de sortie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Trois lignes x, y, z
    #[default]
    Text,
    /// Un objet JSON `{"x_km":…,"y_km":…,"z_km":…}`
    Json,
}

impl FromStr for OutputFormat {
    type Err = EcefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(EcefError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Rendu le plus court qui relit la même valeur, toujours avec un point décimal
///
/// `6378.1363`, `0.0`, `-0.0`. En dessous de 1e-4 ou à partir de 1e16 la
/// notation exponentielle s'écrit `1e-06` / `1e+16` (exposant signé, au moins
/// deux chiffres).
pub fn format_component(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug donne déjà le plus court aller-retour avec ".0" et les mêmes seuils
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Rend une position dans le format demandé (sans saut de ligne final)
pub fn render(position: &EcefPosition, format: OutputFormat) -> Result<String, EcefError> {
    match format {
        OutputFormat::Text => Ok(position
            .components()
            .iter()
            .map(|&c| format_component(c))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(position)?),
    }
}
