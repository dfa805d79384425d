//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> tokenize -> RPN -> pile numérique -> garde “fini”
//!
//! Toutes les erreurs sont typées (`EvalError`) ; la conversion en texte
//! d’affichage ("Error") se fait plus haut, dans calculatrice.rs.

use thiserror::Error;
use tracing::debug;

use super::jetons::{format_tokens, normaliser, tokenize, Tok};
use super::operateurs::{Fonction, Operateur};
use super::rpn::to_rpn;
use super::trig::ModeAngle;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("nombre invalide: {0:?}")]
    ParseError(String),

    #[error("opérateur inconnu: {0:?}")]
    UnknownOperator(char),

    #[error("fonction inconnue: {0:?}")]
    UnknownFunction(String),

    #[error("expression mal formée")]
    MalformedExpression,

    #[error("résultat non fini")]
    NonFinite,
}

/// API publique : évalue une saisie brute (glyphes compris) sous un mode d’angle,
/// avec `ans` comme valeur de `Ans`.
///
/// - Entrée vide (ou seulement des espaces) => 0, sans erreur
/// - Résultat infini / NaN => `EvalError::NonFinite`
pub fn eval_expression(brut: &str, mode: ModeAngle, ans: f64) -> Result<f64, EvalError> {
    let s = normaliser(brut);
    if s.is_empty() {
        return Ok(0.0);
    }

    let jetons = tokenize(&s);
    debug!(jetons = %format_tokens(&jetons), "tokenize");

    let rpn = to_rpn(&jetons);
    debug!(rpn = %format_tokens(&rpn), "shunting-yard");

    let v = eval_postfix(&rpn, mode, ans)?;
    if !v.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(v)
}

/// Évalue une RPN avec une pile de f64.
///
/// Un dépilement sur pile vide, ou une pile finale de taille != 1,
/// donne `MalformedExpression`. Le caractère fini du résultat n’est PAS vérifié ici.
pub fn eval_postfix(rpn: &[Tok], mode: ModeAngle, ans: f64) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Number(txt) => {
                let v = txt
                    .parse::<f64>()
                    .map_err(|_| EvalError::ParseError(txt.clone()))?;
                st.push(v);
            }

            Tok::Var(nom) | Tok::Name(nom) => st.push(valeur_variable(nom, ans)),

            Tok::Percent => {
                let a = depile(&mut st)?;
                st.push(a / 100.0);
            }

            Tok::Neg => {
                let a = depile(&mut st)?;
                st.push(-a);
            }

            Tok::Op(c) => {
                let op = Operateur::depuis_symbole(*c).ok_or(EvalError::UnknownOperator(*c))?;
                let calc: fn(f64, f64) -> f64 = match op {
                    // ',' : argument multiple non supporté, la valeur reste telle quelle
                    Operateur::Separateur => continue,
                    Operateur::Plus => |a: f64, b: f64| a + b,
                    Operateur::Moins => |a: f64, b: f64| a - b,
                    Operateur::Fois => |a: f64, b: f64| a * b,
                    Operateur::Divise => |a: f64, b: f64| a / b,
                    Operateur::Puissance => f64::powf,
                };

                // b d’abord : le second dépilé est l’opérande gauche
                let b = depile(&mut st)?;
                let a = depile(&mut st)?;
                st.push(calc(a, b));
            }

            Tok::Func(nom) => {
                let f = Fonction::depuis_nom(nom)
                    .ok_or_else(|| EvalError::UnknownFunction(nom.clone()))?;
                let a = depile(&mut st)?;
                st.push(applique_fonction(f, a, mode));
            }

            // une parenthèse ne devrait jamais atteindre la RPN
            Tok::LPar | Tok::RPar => return Err(EvalError::MalformedExpression),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::MalformedExpression),
    }
}

fn depile(st: &mut Vec<f64>) -> Result<f64, EvalError> {
    st.pop().ok_or(EvalError::MalformedExpression)
}

/// Résolution insensible à la casse. Nom inconnu => 0 (tolérance voulue, pas une erreur).
fn valeur_variable(nom: &str, ans: f64) -> f64 {
    match nom.to_uppercase().as_str() {
        "ANS" => ans,
        "PI" | "Π" => std::f64::consts::PI,
        "E" => std::f64::consts::E,
        _ => 0.0,
    }
}

fn applique_fonction(f: Fonction, a: f64, mode: ModeAngle) -> f64 {
    match f {
        Fonction::Sin => mode.vers_radians(a).sin(),
        Fonction::Cos => mode.vers_radians(a).cos(),
        Fonction::Tan => mode.vers_radians(a).tan(),
        Fonction::Asin => mode.depuis_radians(a.asin()),
        Fonction::Acos => mode.depuis_radians(a.acos()),
        Fonction::Atan => mode.depuis_radians(a.atan()),
        Fonction::Ln => a.ln(),
        Fonction::Log => a.log10(),
        Fonction::Sqrt => a.sqrt(),
        Fonction::DixPuissance => 10f64.powf(a),
        Fonction::ExpPuissance => a.exp(),
        Fonction::Abs => a.abs(),
    }
}
