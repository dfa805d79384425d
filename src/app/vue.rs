// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clic uniquement (pas de champ texte) : chaque bouton = UNE commande du noyau
// - Disposition type fx-82MS : rangée mode, rangée fonctions, mémoire, pavé numérique
// - SHIFT actif : les touches qui ont une alternative affichent l’alternative

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Action;

const TAILLE_TOUCHE: [f32; 2] = [58.0, 34.0];
const TAILLE_RESULTAT: f32 = 28.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("SciCal");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_rangee_mode(ui);
                ui.add_space(6.0);
                self.ui_fonctions(ui);
                ui.add_space(6.0);
                self.ui_memoire(ui);

                ui.add_space(8.0);

                self.ui_pave_numerique(ui);
            });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.small(self.indicateurs());

                // tampon d’expression (une ligne, tel que saisi)
                ui.monospace(&self.calc.expression);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.resultat)
                            .monospace()
                            .size(TAILLE_RESULTAT),
                    );
                });
            });
    }

    fn ui_rangee_mode(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let shift = self.calc.shift;
            let alpha = self.calc.alpha;
            self.bouton_bascule(ui, "SHIFT", shift, Action::Shift);
            self.bouton_bascule(ui, "ALPHA", alpha, Action::Alpha);
            self.bouton_action(ui, "MODE", "COMP/STAT/TBL (non implémenté)", Action::Mode);
            self.bouton_action(ui, "ON", "Efface l’expression", Action::On);

            ui.separator();

            self.bouton_action(ui, "DRG", "Bascule DEG / RAD", Action::Drg);
            self.bouton_action(ui, "RND", "Insère un nombre aléatoire", Action::Rnd);
        });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for primaire in ["sin(", "cos(", "tan(", "log(", "ln(", "√("] {
                self.bouton_insert(ui, primaire);
            }
        });
        ui.horizontal_wrapped(|ui| {
            for primaire in ["^", "(", ")", "%", ",", "π"] {
                self.bouton_insert(ui, primaire);
            }
        });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton_action(ui, "RCL", "Rappelle M", Action::Rcl);
            self.bouton_action(ui, "M+", "M += valeur de l’expression", Action::MPlus);
            self.bouton_action(ui, "M−", "M -= valeur de l’expression", Action::MMoins);
            self.bouton_action(ui, "MR", "Insère M", Action::Mr);
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_scical")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Del);
                self.bouton_action(ui, "AC", "Efface l’expression", Action::Ac);
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                self.bouton_insert(ui, "×");
                self.bouton_insert(ui, "÷");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, "+");
                self.bouton_insert(ui, "−");
                ui.end_row();

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_action(ui, "EXP", "×10^ (insère E)", Action::Exp);
                self.bouton_action(ui, "Ans", "Insère la dernière réponse", Action::Ans);
                self.bouton_action(ui, "=", "Calcule", Action::Calc);
                ui.end_row();
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            self.action(action);
        }
    }

    /// SHIFT / ALPHA : bouton “enfoncé” tant que le drapeau est actif.
    fn bouton_bascule(&mut self, ui: &mut egui::Ui, label: &str, actif: bool, action: Action) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label).selected(actif));
        if resp.clicked() {
            self.action(action);
        }
    }

    /// Touche “jeton” : le libellé suit SHIFT, l’insertion passe par le noyau.
    fn bouton_insert(&mut self, ui: &mut egui::Ui, primaire: &str) {
        let label = self.libelle(primaire);
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if resp.clicked() {
            self.touche(primaire);
        }
    }
}
