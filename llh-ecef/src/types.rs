//! Types de données pour le crate llh-ecef

use serde::{Deserialize, Serialize};

use crate::round::round_to_decimals;

/// Position géodésique (latitude, longitude, hauteur ellipsoïdale)
///
/// Aucune validation de domaine : une latitude hors de ±90° ou une longitude
/// hors de ±180° passe telle quelle dans les formules trigonométriques.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPosition {
    /// Latitude en degrés
    pub latitude_deg: f64,

    /// Longitude en degrés
    pub longitude_deg: f64,

    /// Hauteur au-dessus de l'ellipsoïde en kilomètres
    pub height_km: f64,
}

impl GeodeticPosition {
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_km: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            height_km,
        }
    }

    /// Latitude en radians (`deg * π/180`)
    #[inline]
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude en radians (`deg * π/180`)
    #[inline]
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Position ECEF (Earth-Centered, Earth-Fixed) en kilomètres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcefPosition {
    pub x_km: f64,
    pub y_km: f64,
    pub z_km: f64,
}

impl EcefPosition {
    pub fn new(x_km: f64, y_km: f64, z_km: f64) -> Self {
        Self { x_km, y_km, z_km }
    }

    /// Distance au centre de la Terre (norme euclidienne)
    pub fn norm(&self) -> f64 {
        (self.x_km.powi(2) + self.y_km.powi(2) + self.z_km.powi(2)).sqrt()
    }

    /// Arrondit chaque composante indépendamment à `places` décimales
    pub fn rounded(&self, places: u8) -> Self {
        Self {
            x_km: round_to_decimals(self.x_km, places),
            y_km: round_to_decimals(self.y_km, places),
            z_km: round_to_decimals(self.z_km, places),
        }
    }

    /// Vrai si les trois composantes sont finies
    pub fn is_finite(&self) -> bool {
        self.x_km.is_finite() && self.y_km.is_finite() && self.z_km.is_finite()
    }

    /// Composantes dans l'ordre x, y, z
    pub fn components(&self) -> [f64; 3] {
        [self.x_km, self.y_km, self.z_km]
    }
}
