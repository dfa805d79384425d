//! Noyau calculatrice scientifique (f64)
//!
//! Organisation interne :
//! - jetons.rs       : normalisation des glyphes + tokenisation
//! - operateurs.rs   : enums fermés Operateur / Fonction + table de précédence
//! - rpn.rs          : shunting-yard -> RPN
//! - trig.rs         : mode d’angle DEG/RAD
//! - eval.rs         : pile RPN + pipeline complet + EvalError
//! - format.rs       : texte affiché pour "="
//! - calculatrice.rs : état (tampon, Ans, M, DRG, SHIFT/ALPHA) + commandes

pub mod calculatrice;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;
pub mod trig;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale (utilisée par app/)
pub use calculatrice::{alternative_shift, Action, Calculatrice};
