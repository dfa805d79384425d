// src/app.rs
//
// SciCal — module App (racine)
// ----------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Calculatrice “clic uniquement” : les boutons sont dans vue.rs.
// - Ici, un seul raccourci global (ESC), sans risque de double déclenchement.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Action;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = AC (efface l’expression, garde Ans et M).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.action(Action::Ac);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
