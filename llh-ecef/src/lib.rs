//! # llh-ecef
//!
//! Conversion d'une position géodésique (latitude, longitude, hauteur au-dessus
//! de l'ellipsoïde) en coordonnées cartésiennes ECEF (Earth-Centered, Earth-Fixed).
//!
//! ## Features
//!
//! - Formule analytique fermée, sans état, sans validation de domaine
//! - Ellipsoïde de référence figé (R_E = 6378.1363 km, e = 0.081819221456)
//! - Arrondi décimal exact à 6 décimales
//! - Rendu texte (une composante par ligne) ou JSON
//!
//! ## Usage
//!
//! ```rust
//! use llh_ecef::llh_to_ecef;
//!
//! let ecef = llh_to_ecef(0.0, 0.0, 0.0);
//! assert_eq!(ecef.x_km, 6378.1363);
//! assert_eq!(ecef.y_km, 0.0);
//! assert_eq!(ecef.z_km, 0.0);
//! ```

pub mod converter;
pub mod ellipsoid;
pub mod error;
pub mod format;
pub mod parse;
pub mod round;
pub mod types;

pub use converter::{llh_to_ecef, EllipsoidConverter, DEFAULT_PRECISION};
pub use ellipsoid::EllipsoidModel;
pub use error::EcefError;
pub use format::{format_component, render, OutputFormat};
pub use parse::{parse_arguments, parse_coordinate, ARGUMENT_NAMES};
pub use round::round_to_decimals;
pub use types::{EcefPosition, GeodeticPosition};
