// src/noyau/jetons.rs
//
// Normalisation des glyphes + tokenisation
// ----------------------------------------
// - normaliser() : ×→*, ÷→/, −→-, π→PI, suppression des espaces
// - tokenize()   : n’échoue jamais (repli "opérateur" pour tout caractère inconnu)

/// Jeton typé.
///
/// `Var` et `Neg` ne sortent jamais du tokenizer : ils sont produits par le
/// shunting-yard (rpn.rs) à partir de `Name` et d’un `-` en position d’opérande.
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Littéral numérique brut (décimal, exposant optionnel).
    Number(String),
    /// Identifiant immédiatement suivi de `(` (ou glyphe √).
    Func(String),
    /// Identifiant nu (Ans, PI, E, ...).
    Name(String),
    /// `Name` retaggé par le parseur, résolu à l’évaluation.
    Var(String),

    LPar,
    RPar,

    /// `+ - * / ^ ,` ou tout caractère non reconnu (repli volontaire).
    Op(char),
    /// `%` postfixé.
    Percent,
    /// Moins unaire (préfixe).
    Neg,
}

/// Remplace les glyphes “visuels” du clavier par leur forme ASCII.
pub fn normaliser(brut: &str) -> String {
    let mut out = String::with_capacity(brut.len());
    for c in brut.chars() {
        match c {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '−' => out.push('-'),
            'π' => out.push_str("PI"),
            c if c.is_whitespace() => {}
            c => out.push(c),
        }
    }
    out
}

/// Tokenize une chaîne DÉJÀ normalisée.
///
/// Ordre de priorité à chaque position :
/// 1. nombre `digits[.digits]` ou `.digits`, exposant `[eE][+-]?digits` optionnel
/// 2. suite de lettres ASCII, avec `(` collée => `Func` + `LPar`, sinon `Name`
/// 3. parenthèse
/// 4. `+ - * / ^ ,`
/// 5. `%`
/// 6. `√` => `Func("sqrt")` (sans parenthèse obligatoire)
/// 7. tout le reste => `Op(c)`
///
/// Chaque règle consomme au moins un caractère : la boucle termine toujours.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        // 1) Nombre
        if let Some(fin) = lire_nombre(&chars, i) {
            out.push(Tok::Number(chars[i..fin].iter().collect()));
            i = fin;
            continue;
        }

        let c = chars[i];

        // 2) Identifiant (fonction si '(' collée)
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let nom: String = chars[start..i].iter().collect();

            if i < chars.len() && chars[i] == '(' {
                // la '(' est consommée ici mais ré-émise comme jeton à part
                out.push(Tok::Func(nom));
                out.push(Tok::LPar);
                i += 1;
            } else {
                out.push(Tok::Name(nom));
            }
            continue;
        }

        i += 1;
        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            '+' | '-' | '*' | '/' | '^' | ',' => Tok::Op(c),
            '%' => Tok::Percent,
            '√' => Tok::Func("sqrt".to_string()),
            // repli : jamais d’échec à ce stade
            autre => Tok::Op(autre),
        };
        out.push(tok);
    }

    out
}

/// Reconnaît un littéral numérique à partir de `i`.
/// Retourne l’indice de fin (exclu) si un nombre commence ici.
fn lire_nombre(chars: &[char], i: usize) -> Option<usize> {
    let chiffres = |mut j: usize| {
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    let mut j = chiffres(i);
    if j > i {
        // digits[.digits*]
        if j < chars.len() && chars[j] == '.' {
            j = chiffres(j + 1);
        }
    } else if chars.get(i) == Some(&'.') {
        // .digits
        let k = chiffres(i + 1);
        if k == i + 1 {
            return None;
        }
        j = k;
    } else {
        return None;
    }

    // exposant : seulement s’il est complet (sinon 'E' reste un identifiant)
    if j < chars.len() && (chars[j] == 'e' || chars[j] == 'E') {
        let mut k = j + 1;
        if k < chars.len() && (chars[k] == '+' || chars[k] == '-') {
            k += 1;
        }
        let fin = chiffres(k);
        if fin > k {
            j = fin;
        }
    }

    Some(j)
}

/// Format utilitaire (journalisation) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Number(n) => n.clone(),
            Tok::Func(f) => format!("{f}()"),
            Tok::Name(n) | Tok::Var(n) => n.clone(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Op(c) => c.to_string(),
            Tok::Percent => "%".to_string(),
            Tok::Neg => "neg".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
