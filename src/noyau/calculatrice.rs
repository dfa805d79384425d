//! État de la calculatrice (modèle fx-82MS) + commandes du clavier.
//!
//! Rôle : posséder le tampon d’expression, Ans, la mémoire M, le mode DRG
//! et les drapeaux SHIFT/ALPHA ; traiter une commande à la fois.
//!
//! Contrats :
//! - `ans` ne change que sur un calcul réussi ("=").
//! - `memoire` ne change que par M+ / M- (jamais remise à zéro par AC/ON).
//! - SHIFT est “one-shot” seulement si la touche suivante a une alternative :
//!   sinon il RESTE actif.

use rand::Rng;
use tracing::{info, warn};

use super::eval::{eval_expression, EvalError};
use super::format::{format_resultat, AFFICHAGE_ERREUR};
use super::trig::ModeAngle;

/// Nombre de décimales du littéral inséré par RND.
const DECIMALES_RND: usize = 8;

/// Texte affiché après ON / AC.
pub const AFFICHAGE_INITIAL: &str = "0";

/// Table SHIFT : jeton primaire -> jeton alternatif.
const ALTERNATIVES_SHIFT: &[(&str, &str)] = &[
    ("sin(", "asin("),
    ("cos(", "acos("),
    ("tan(", "atan("),
    ("log(", "10^("),
    ("ln(", "e^("),
    ("√(", "^2"),
];

/// Alternative SHIFT d’une touche, si elle en a une.
pub fn alternative_shift(primaire: &str) -> Option<&'static str> {
    ALTERNATIVES_SHIFT
        .iter()
        .find(|(p, _)| *p == primaire)
        .map(|(_, alt)| *alt)
}

/// Touches “action” (tout ce qui n’insère pas simplement un jeton).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Shift,
    Alpha,
    /// COMP/STAT/TBL : non implémenté.
    Mode,
    On,
    Ac,
    Del,
    Ans,
    Exp,
    Rcl,
    MPlus,
    MMoins,
    Mr,
    Drg,
    Rnd,
    Calc,
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    pub expression: String,
    pub ans: f64,
    pub memoire: f64,
    pub mode_angle: ModeAngle,
    pub shift: bool,
    /// Exclusif avec `shift`, sans effet pour l’instant.
    pub alpha: bool,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            expression: String::new(),
            ans: 0.0,
            memoire: 0.0,
            mode_angle: ModeAngle::Deg,
            shift: false,
            alpha: false,
        }
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue `brut` sous le mode d’angle et l’Ans courants, sans rien modifier.
    pub fn evaluer(&self, brut: &str) -> Result<f64, EvalError> {
        eval_expression(brut, self.mode_angle, self.ans)
    }

    /// "=" : évalue `brut`, mémorise Ans si succès, retourne le texte à afficher.
    /// Toute erreur (non-fini compris) donne "Error" et laisse Ans intact.
    pub fn calculer(&mut self, brut: &str) -> String {
        match self.evaluer(brut) {
            Ok(v) => {
                self.ans = v;
                format_resultat(v)
            }
            Err(e) => {
                warn!(expression = brut, erreur = %e, "évaluation en échec");
                AFFICHAGE_ERREUR.to_string()
            }
        }
    }

    /// Valeur du tampon pour M+/M- : une évaluation en échec compte pour 0.
    fn valeur_tampon(&self) -> f64 {
        self.evaluer(&self.expression).unwrap_or(0.0)
    }

    /* ------------------------ Commandes ------------------------ */

    /// INSERT : ajoute un jeton au tampon, avec substitution SHIFT si la touche en a une.
    pub fn inserer(&mut self, jeton: &str) {
        if self.shift {
            if let Some(alt) = alternative_shift(jeton) {
                self.expression.push_str(alt);
                self.shift = false;
                return;
            }
        }
        // pas d’alternative : SHIFT reste actif
        self.expression.push_str(jeton);
    }

    /// ACTION : retourne `Some(texte)` quand l’affichage du résultat doit changer.
    pub fn action(&mut self, action: Action) -> Option<String> {
        match action {
            Action::Shift => {
                self.shift = !self.shift;
                self.alpha = false;
            }
            Action::Alpha => {
                self.alpha = !self.alpha;
                self.shift = false;
            }
            Action::Mode => {
                warn!("MODE non implémenté (COMP/STAT/TBL)");
            }
            Action::On | Action::Ac => {
                self.expression.clear();
                return Some(AFFICHAGE_INITIAL.to_string());
            }
            Action::Del => {
                self.expression.pop();
            }
            Action::Ans => {
                let txt = self.ans.to_string();
                self.expression.push_str(&txt);
            }
            Action::Exp => self.expression.push('E'),
            Action::Rcl | Action::Mr => {
                let txt = self.memoire.to_string();
                self.expression.push_str(&txt);
            }
            Action::MPlus => {
                self.memoire += self.valeur_tampon();
                info!(memoire = self.memoire, "M+");
            }
            Action::MMoins => {
                self.memoire -= self.valeur_tampon();
                info!(memoire = self.memoire, "M-");
            }
            Action::Drg => {
                self.mode_angle = self.mode_angle.bascule();
                info!(mode = %self.mode_angle, "DRG");
            }
            Action::Rnd => {
                let x: f64 = rand::thread_rng().gen();
                self.expression.push_str(&format!("{:.*}", DECIMALES_RND, x));
            }
            Action::Calc => {
                let brut = self.expression.clone();
                return Some(self.calculer(&brut));
            }
        }
        None
    }
}
