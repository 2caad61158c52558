//! Arrondi décimal des composantes

/// Arrondit `value` à `places` décimales
///
/// Passe par un formatage décimal exact de la valeur binaire puis relit le
/// résultat : pas de double arrondi via `value * 10^n`, et les égalités
/// exactes sont arrondies au pair. Les valeurs non finies sont renvoyées
/// telles quelles.
pub fn round_to_decimals(value: f64, places: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let text = format!("{:.*}", usize::from(places), value);
    fast_float::parse(&text).unwrap_or(value)
}
