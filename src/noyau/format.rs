// src/noyau/format.rs
//
// Affichage du résultat (touche "=")
// ---------------------------------
// - 0 < |r| < 1e-9 ou |r| >= 1e10 : scientifique, 9 décimales de mantisse, zéros finaux retirés
// - sinon                         : 12 chiffres significatifs, zéros finaux retirés
// - non fini                      : "Error"

/// Texte affiché pour toute évaluation en échec.
pub const AFFICHAGE_ERREUR: &str = "Error";

const SEUIL_SCI_BAS: f64 = 1e-9;
const SEUIL_SCI_HAUT: f64 = 1e10;
const DECIMALES_SCI: usize = 9;
const CHIFFRES_SIGNIFICATIFS: usize = 12;

pub fn format_resultat(r: f64) -> String {
    if !r.is_finite() {
        return AFFICHAGE_ERREUR.to_string();
    }

    let a = r.abs();
    if a != 0.0 && !(SEUIL_SCI_BAS..SEUIL_SCI_HAUT).contains(&a) {
        format_scientifique(r)
    } else {
        format_significatif(r)
    }
}

/// 1.230000000e10 -> "1.23e+10" ; 1.000000000e-12 -> "1e-12"
fn format_scientifique(r: f64) -> String {
    let brut = format!("{:.*e}", DECIMALES_SCI, r);
    let (mantisse, exposant) = brut.split_once('e').unwrap_or((brut.as_str(), "0"));

    let mantisse = if mantisse.contains('.') {
        mantisse.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantisse
    };

    match exposant.strip_prefix('-') {
        Some(abs) => format!("{mantisse}e-{abs}"),
        None => format!("{mantisse}e+{exposant}"),
    }
}

/// Arrondi à 12 chiffres significatifs, puis écriture décimale la plus courte.
fn format_significatif(r: f64) -> String {
    if r == 0.0 {
        // -0 s’affiche 0
        return "0".to_string();
    }
    let arrondi = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, r)
        .parse::<f64>()
        .unwrap_or(r);
    format!("{arrondi}")
}
