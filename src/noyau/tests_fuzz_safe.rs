//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   - jamais de panique, quelle que soit la saisie (caractères parasites compris)
//!   - "Error" affiché <=> évaluation en échec
//!   - Ans intact après un échec, égal au résultat après un succès

use std::time::{Duration, Instant};

use super::calculatrice::{Action, Calculatrice};
use super::eval::eval_expression;
use super::format::AFFICHAGE_ERREUR;
use super::jetons::{normaliser, tokenize, Tok};
use super::trig::ModeAngle;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn choisir<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const ATOMES: &[&str] = &[
    "0", "1", "2", "7", "30", "0.5", ".25", "1.5E3", "2e-2", "Ans", "π", "PI", "E", "foo",
];
const BINAIRES: &[&str] = &["+", "-", "*", "/", "^", "×", "÷", "−"];
const FONCTIONS: &[&str] = &[
    "sin(", "cos(", "tan(", "asin(", "acos(", "atan(", "ln(", "log(", "√(", "abs(", "sqrt(",
];
const PARASITES: &[&str] = &["(", ")", ",", "%", "√", "#", "&", "E", ".", "-", "€"];

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return rng.choisir(ATOMES).to_string();
    }

    match rng.pick(7) {
        0 => rng.choisir(ATOMES).to_string(),
        1 | 2 => format!(
            "{}{}{}",
            gen_expr(rng, depth - 1),
            rng.choisir(BINAIRES),
            gen_expr(rng, depth - 1)
        ),
        3 => format!("{}{})", rng.choisir(FONCTIONS), gen_expr(rng, depth - 1)),
        4 => format!("({})", gen_expr(rng, depth - 1)),
        5 => format!("{}%", gen_expr(rng, depth - 1)),
        _ => format!("-{}", gen_expr(rng, depth - 1)),
    }
}

/// Saisie “sale” : expression valide + caractères parasites insérés au hasard.
fn gen_saisie_sale(rng: &mut Rng) -> String {
    let mut s = gen_expr(rng, 3);
    for _ in 0..rng.pick(4) {
        let pos = rng.pick(s.chars().count() as u32 + 1) as usize;
        let idx = s.char_indices().nth(pos).map(|(i, _)| i).unwrap_or(s.len());
        s.insert_str(idx, rng.choisir(PARASITES));
    }
    s
}

/// Texte source d’un jeton (√ revient sous la forme "sqrt").
fn texte_jeton(t: &Tok) -> String {
    match t {
        Tok::Number(n) | Tok::Func(n) | Tok::Name(n) | Tok::Var(n) => n.clone(),
        Tok::LPar => "(".to_string(),
        Tok::RPar => ")".to_string(),
        Tok::Op(c) => c.to_string(),
        Tok::Percent => "%".to_string(),
        Tok::Neg => "-".to_string(),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut a = Rng::new(0xC0FFEE_u64);
    let mut b = Rng::new(0xC0FFEE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let ea = gen_expr(&mut a, 4);
        let eb = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);

        let ra = eval_expression(&ea, ModeAngle::Deg, 1.5);
        let rb = eval_expression(&eb, ModeAngle::Deg, 1.5);
        match (ra, rb) {
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={ea:?}"),
            (Err(x), Err(y)) => assert_eq!(x, y, "expr={ea:?}"),
            (x, y) => panic!("non déterministe: expr={ea:?} {x:?} vs {y:?}"),
        }
    }
}

#[test]
fn fuzz_safe_ans_et_affichage() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut c = Calculatrice::new();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for i in 0..200 {
        budget(t0, max);

        if i % 17 == 0 {
            c.action(Action::Drg);
        }

        let expr = gen_expr(&mut rng, 4);
        let ans_avant = c.ans;
        let attendu = c.evaluer(&expr);

        c.action(Action::Ac);
        c.inserer(&expr);
        let affichage = c.action(Action::Calc).unwrap_or_default();

        match attendu {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?}");
                assert_ne!(affichage, AFFICHAGE_ERREUR, "expr={expr:?}");
                assert_eq!(c.ans.to_bits(), v.to_bits(), "expr={expr:?}");
                seen_ok += 1;
            }
            Err(_) => {
                assert_eq!(affichage, AFFICHAGE_ERREUR, "expr={expr:?}");
                assert_eq!(c.ans.to_bits(), ans_avant.to_bits(), "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_saisie_sale_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let s = gen_saisie_sale(&mut rng);

        // aucun caractère normalisé n’est perdu par le tokenizer
        let norm = normaliser(&s);
        let recompose: String = tokenize(&norm).iter().map(texte_jeton).collect();
        assert_eq!(recompose, norm.replace('√', "sqrt"), "saisie={s:?}");

        // Ok ou Err, mais jamais de panique ni de résultat non fini
        if let Ok(v) = eval_expression(&s, ModeAngle::Rad, 0.0) {
            assert!(v.is_finite(), "saisie={s:?}");
        }
    }
}

#[test]
fn fuzz_safe_commandes_aleatoires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xF00D_u64);
    let mut c = Calculatrice::new();

    const TOUCHES: &[&str] = &[
        "1", "2", "9", ".", "+", "×", "÷", "−", "(", ")", "sin(", "ln(", "√(", "%",
    ];
    const ACTIONS: &[Action] = &[
        Action::Shift,
        Action::Alpha,
        Action::Del,
        Action::Ans,
        Action::Exp,
        Action::Rcl,
        Action::MPlus,
        Action::MMoins,
        Action::Mr,
        Action::Drg,
        Action::Rnd,
        Action::Calc,
        Action::Ac,
    ];

    for _ in 0..400 {
        budget(t0, max);

        if rng.pick(3) == 0 {
            let a = ACTIONS[rng.pick(ACTIONS.len() as u32) as usize];
            c.action(a);
        } else {
            c.inserer(rng.choisir(TOUCHES));
        }

        // SHIFT et ALPHA jamais actifs ensemble
        assert!(!(c.shift && c.alpha));
        assert!(c.ans.is_finite());
        assert!(!c.memoire.is_nan());
    }
}
