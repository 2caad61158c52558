//! Modèle d'ellipsoïde de référence

use serde::{Deserialize, Serialize};

use crate::EcefError;

/// Ellipsoïde de référence (rayon équatorial et première excentricité)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidModel {
    /// Demi-grand axe (rayon équatorial) en kilomètres
    pub equatorial_radius_km: f64,

    /// Première excentricité
    pub eccentricity: f64,
}

impl EllipsoidModel {
    /// Rayon équatorial de référence en kilomètres
    pub const R_E_KM: f64 = 6378.1363;

    /// Excentricité de référence (12 chiffres significatifs, à ne pas arrondir)
    pub const E: f64 = 0.081819221456;

    /// Ellipsoïde utilisé par défaut pour toutes les conversions
    pub const REFERENCE: Self = Self {
        equatorial_radius_km: Self::R_E_KM,
        eccentricity: Self::E,
    };

    /// Crée un ellipsoïde en validant ses paramètres
    ///
    /// Le rayon doit être fini et strictement positif, l'excentricité dans `[0, 1)`
    /// pour que le dénominateur reste strictement positif à toute latitude.
    pub fn new(equatorial_radius_km: f64, eccentricity: f64) -> Result<Self, EcefError> {
        if !equatorial_radius_km.is_finite() || equatorial_radius_km <= 0.0 {
            return Err(EcefError::InvalidEllipsoid(format!(
                "equatorial radius must be finite and positive, got {}",
                equatorial_radius_km
            )));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(EcefError::InvalidEllipsoid(format!(
                "eccentricity must be in [0, 1), got {}",
                eccentricity
            )));
        }

        Ok(Self {
            equatorial_radius_km,
            eccentricity,
        })
    }

    /// Première excentricité au carré
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity.powi(2)
    }

    /// Dénominateur commun aux deux rayons de courbure : `sqrt(1 - e² sin²(lat))`
    #[inline]
    pub fn denominator(&self, lat_rad: f64) -> f64 {
        (1.0 - self.eccentricity_squared() * lat_rad.sin().powi(2)).sqrt()
    }

    /// Demi-petit axe (rayon polaire) en kilomètres
    pub fn polar_radius_km(&self) -> f64 {
        self.equatorial_radius_km * (1.0 - self.eccentricity_squared()).sqrt()
    }
}

impl Default for EllipsoidModel {
    fn default() -> Self {
        Self::REFERENCE
    }
}
