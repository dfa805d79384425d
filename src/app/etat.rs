//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter UNE `Calculatrice` (le noyau, seul propriétaire du tampon,
//! d’Ans, de M, du DRG et de SHIFT/ALPHA) + le texte du résultat affiché.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par les commandes du noyau.
//! - Une commande à la fois (clic), aucun état partagé.

use crate::noyau::calculatrice::AFFICHAGE_INITIAL;
use crate::noyau::{alternative_shift, Action, Calculatrice};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,

    /// Ligne résultat (nombre formaté ou "Error").
    pub resultat: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::new(),
            resultat: AFFICHAGE_INITIAL.to_string(), // comme après ON / AC
        }
    }
}

impl AppCalc {
    /* ------------------------ Commandes (état seulement) ------------------------ */

    /// Touche “jeton” : INSERT.
    pub fn touche(&mut self, jeton: &str) {
        self.calc.inserer(jeton);
    }

    /// Touche “action” : ACTION ; met à jour la ligne résultat si le noyau le demande.
    pub fn action(&mut self, action: Action) {
        if let Some(txt) = self.calc.action(action) {
            self.resultat = txt;
        }
    }

    /* ------------------------ Lecture pour la vue ------------------------ */

    /// Libellé courant d’une touche : l’alternative si SHIFT est actif et qu’elle existe.
    pub fn libelle<'a>(&self, primaire: &'a str) -> &'a str {
        if self.calc.shift {
            alternative_shift(primaire).unwrap_or(primaire)
        } else {
            primaire
        }
    }

    /// Indicateurs d’écran : S, A, M, DEG/RAD.
    pub fn indicateurs(&self) -> String {
        let mut out = Vec::with_capacity(4);
        if self.calc.shift {
            out.push("S".to_string());
        }
        if self.calc.alpha {
            out.push("A".to_string());
        }
        if self.calc.memoire != 0.0 {
            out.push("M".to_string());
        }
        out.push(self.calc.mode_angle.to_string());
        out.join(" ")
    }
}
