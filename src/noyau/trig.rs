// src/noyau/trig.rs
//
// Mode d’angle (DRG) pour sin/cos/tan et leurs réciproques
// -------------------------------------------------------
// - DEG : l’argument de sin/cos/tan est en degrés, le résultat de asin/acos/atan aussi
// - RAD : tout reste dans le domaine radian

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Deg,
    Rad,
}

impl ModeAngle {
    /// DRG : seule transition possible.
    pub fn bascule(self) -> Self {
        match self {
            Self::Deg => Self::Rad,
            Self::Rad => Self::Deg,
        }
    }

    /// Argument saisi -> radians (avant sin/cos/tan).
    pub fn vers_radians(self, a: f64) -> f64 {
        match self {
            Self::Deg => a.to_radians(),
            Self::Rad => a,
        }
    }

    /// Radians -> unité d’affichage (après asin/acos/atan).
    pub fn depuis_radians(self, r: f64) -> f64 {
        match self {
            Self::Deg => r.to_degrees(),
            Self::Rad => r,
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deg => f.write_str("DEG"),
            Self::Rad => f.write_str("RAD"),
        }
    }
}
