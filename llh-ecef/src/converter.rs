//! Conversion géodésique → ECEF
//!
//! Formule analytique fermée :
//!
//! ```text
//! denom = sqrt(1 - e² sin²(lat))
//! C_E   = R_E / denom
//! S_E   = R_E (1 - e²) / denom
//! x     = (C_E + h) cos(lat) cos(lon)
//! y     = (C_E + h) cos(lat) sin(lon)
//! z     = (S_E + h) sin(lat)
//! ```

use tracing::trace;

use crate::ellipsoid::EllipsoidModel;
use crate::types::{EcefPosition, GeodeticPosition};

/// Nombre de décimales conservées en sortie
pub const DEFAULT_PRECISION: u8 = 6;

/// Convertisseur LLH → ECEF sur un ellipsoïde donné
///
/// Sans état mutable : `Copy`, réentrant et partageable entre threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EllipsoidConverter {
    model: EllipsoidModel,
}

impl EllipsoidConverter {
    /// Crée un convertisseur sur l'ellipsoïde de référence
    pub fn new() -> Self {
        Self::default()
    }

    /// Crée un convertisseur sur un ellipsoïde explicite
    pub fn with_model(model: EllipsoidModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &EllipsoidModel {
        &self.model
    }

    /// Convertit (latitude °, longitude °, hauteur km) en ECEF km, arrondi à 6 décimales
    pub fn convert(&self, latitude_deg: f64, longitude_deg: f64, height_km: f64) -> EcefPosition {
        self.convert_position(&GeodeticPosition::new(latitude_deg, longitude_deg, height_km))
    }

    /// Comme [`convert`](Self::convert), à partir d'une position typée
    pub fn convert_position(&self, position: &GeodeticPosition) -> EcefPosition {
        self.convert_unrounded(position).rounded(DEFAULT_PRECISION)
    }

    /// Résultat brut de la formule, sans arrondi
    ///
    /// Les entrées non finies (NaN, ±∞) donnent des composantes non finies,
    /// sans erreur.
    pub fn convert_unrounded(&self, position: &GeodeticPosition) -> EcefPosition {
        let lat = position.latitude_rad();
        let lon = position.longitude_rad();
        let h = position.height_km;

        // Calculé une seule fois pour les deux rayons
        let denom = self.model.denominator(lat);

        let r_e = self.model.equatorial_radius_km;
        let c_e = r_e / denom;
        let s_e = r_e * (1.0 - self.model.eccentricity_squared()) / denom;

        trace!(lat_rad = lat, lon_rad = lon, denom, c_e, s_e, "Rayons de courbure");

        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        EcefPosition {
            x_km: (c_e + h) * cos_lat * cos_lon,
            y_km: (c_e + h) * cos_lat * sin_lon,
            z_km: (s_e + h) * sin_lat,
        }
    }
}

/// Conversion sur l'ellipsoïde de référence, arrondie à 6 décimales
pub fn llh_to_ecef(latitude_deg: f64, longitude_deg: f64, height_km: f64) -> EcefPosition {
    EllipsoidConverter::new().convert(latitude_deg, longitude_deg, height_km)
}
