//! Lecture des arguments numériques

use tracing::trace;

use crate::EcefError;

/// Noms des trois arguments positionnels, dans l'ordre
pub const ARGUMENT_NAMES: [&str; 3] = ["lat_degrees", "long_degrees", "hae_km"];

/// Parse un argument numérique
///
/// Les blancs autour sont ignorés. Accepte les formes décimales et
/// exponentielles usuelles ainsi que `inf` / `nan`.
pub fn parse_coordinate(name: &str, raw: &str) -> Result<f64, EcefError> {
    let value: f64 =
        fast_float::parse(raw.trim()).map_err(|_| EcefError::invalid_number(name, raw))?;
    trace!(argument = name, raw, value, "Argument parsé");
    Ok(value)
}

/// Parse les trois arguments (latitude, longitude, hauteur) dans l'ordre
pub fn parse_arguments<S: AsRef<str>>(raw: &[S; 3]) -> Result<[f64; 3], EcefError> {
    let mut values = [0.0; 3];
    for ((value, name), raw) in values.iter_mut().zip(ARGUMENT_NAMES).zip(raw) {
        *value = parse_coordinate(name, raw.as_ref())?;
    }
    Ok(values)
}
