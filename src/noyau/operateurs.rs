// src/noyau/operateurs.rs
//
// Table des opérateurs + noms de fonctions (enums fermés)
// -------------------------------------------------------
// Le texte des jetons est converti ici, une seule fois, en variantes matchées
// exhaustivement par rpn.rs et eval.rs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    /// `,` : séparateur d’arguments, sans précédence, no-op à l’évaluation.
    Separateur,
}

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '^' => Some(Self::Puissance),
            ',' => Some(Self::Separateur),
            _ => None,
        }
    }

    /// (précédence, associativité). `None` pour `,`.
    pub fn precedence(self) -> Option<(u8, Assoc)> {
        match self {
            Self::Plus | Self::Moins => Some((2, Assoc::Gauche)),
            Self::Fois | Self::Divise => Some((3, Assoc::Gauche)),
            Self::Puissance => Some((PREC_PUISSANCE, Assoc::Droite)),
            Self::Separateur => None,
        }
    }
}

const PREC_PUISSANCE: u8 = 4;

/// Précédence d’un symbole d’opérateur brut.
/// Les symboles inconnus (repli du tokenizer) n’en ont pas.
pub fn precedence_symbole(c: char) -> Option<(u8, Assoc)> {
    Operateur::depuis_symbole(c).and_then(Operateur::precedence)
}

/// Moins unaire : plus fort que `* /`, plus faible que `^` (-2^2 = -4).
/// Comparée à 10× l’échelle des binaires pour rester entière.
pub const PREC_NEG_X10: u8 = 35;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log,
    Sqrt,
    DixPuissance,
    ExpPuissance,
    Abs,
}

impl Fonction {
    /// Nom insensible à la casse. Accepte aussi les alias du clavier (`10^x`, `pow10`, `e^(`...).
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        let f = match nom.to_ascii_lowercase().as_str() {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "ln" => Self::Ln,
            "log" => Self::Log,
            "sqrt" => Self::Sqrt,
            "10^" | "10^(" | "10^x" | "pow10" => Self::DixPuissance,
            "e^" | "e^(" => Self::ExpPuissance,
            "abs" => Self::Abs,
            _ => return None,
        };
        Some(f)
    }
}
