// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), consommée telle quelle par eval.rs
//
// Règles:
// - Number / Percent          => sortie directe (% est un postfixe déjà placé)
// - Name                      => sortie, retaggé Var
// - Func                      => pile ; sort après la ')' qui ferme son argument
// - '-' en position d’opérande => Neg (préfixe, poussé sans dépiler)
// - Op                        => dépile selon précédence/associativité, puis empile
//
// Tolérances (aucune erreur ici) :
// - ')' sans '(' : vide la pile vers la sortie, rien d’autre
// - '(' jamais fermée : ignorée à la vidange finale (fermeture implicite)
// - ',' et symboles inconnus : pas de précédence => ne dépilent rien et ne sont jamais dépilés
//   par la boucle de précédence

use super::jetons::Tok;
use super::operateurs::{precedence_symbole, Assoc, PREC_NEG_X10};

/// Rang comparable d’un élément de la pile (échelle ×10), `None` si barrière.
fn rang_pile(t: &Tok) -> Option<u8> {
    match t {
        Tok::Op(c) => precedence_symbole(*c).map(|(p, _)| p * 10),
        Tok::Neg => Some(PREC_NEG_X10),
        _ => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Func("sin"), LPar, Number("30"), RPar, Op('+'), Number("1")]
///   rpn:    [Number("30"), Func("sin"), Number("1"), Op('+')]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Number(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Name(nom) | Tok::Var(nom) => {
                out.push(Tok::Var(nom));
                prev_was_value = true;
            }

            Tok::Percent => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Func(_) | Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                while let Some(top) = ops.pop() {
                    if top == Tok::LPar {
                        break;
                    }
                    out.push(top);
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Tok::Func(_)) = ops.last() {
                    out.extend(ops.pop());
                }

                prev_was_value = true;
            }

            Tok::Op('-') if !prev_was_value => {
                ops.push(Tok::Neg);
                prev_was_value = false;
            }

            Tok::Neg => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Op(c) => {
                if let Some((p, assoc)) = precedence_symbole(c) {
                    let p = p * 10;
                    while let Some(top) = ops.last() {
                        let Some(p_top) = rang_pile(top) else {
                            break;
                        };

                        let doit_pop = match assoc {
                            Assoc::Droite => p_top > p,
                            Assoc::Gauche => p_top >= p,
                        };

                        if !doit_pop {
                            break;
                        }
                        out.extend(ops.pop());
                    }
                }

                ops.push(Tok::Op(c));
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops ; les '(' orphelines disparaissent
    while let Some(op) = ops.pop() {
        if op != Tok::LPar {
            out.push(op);
        }
    }

    out
}
