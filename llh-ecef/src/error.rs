//! Types d'erreurs pour le crate llh-ecef

use thiserror::Error;

/// Erreurs pouvant survenir autour de la conversion.
///
/// La conversion elle-même ne peut pas échouer : seules la lecture des
/// arguments, la construction d'un ellipsoïde et le rendu JSON produisent
/// des erreurs.
#[derive(Debug, Error)]
pub enum EcefError {
    /// Argument non numérique
    #[error("invalid numeric argument for {name}: '{value}'")]
    InvalidNumber { name: String, value: String },

    /// Paramètres d'ellipsoïde hors domaine
    #[error("Invalid ellipsoid: {0}")]
    InvalidEllipsoid(String),

    /// Format de sortie inconnu
    #[error("Unknown output format: {0}. Use: text, json")]
    UnknownFormat(String),

    /// Erreur de sérialisation JSON
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EcefError {
    /// Crée une erreur d'argument numérique invalide
    pub fn invalid_number(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            name: name.into(),
            value: value.into(),
        }
    }
}
