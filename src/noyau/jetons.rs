// src/noyau/jetons.rs

use std::fmt;

use super::erreur::Erreur;

/// Opérateurs et ponctuation : ensemble fermé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl Op {
    pub fn as_char(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::LPar => '(',
            Op::RPar => ')',
        }
    }

    /// Opérateur binaire (hors parenthèses).
    pub fn is_binaire(self) -> bool {
        !matches!(self, Op::LPar | Op::RPar)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Texte littéral de l’opérande (signe et point compris), lu en f64 à l’évaluation seulement.
    Num(String),
    Op(Op),
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(texte) => f.write_str(texte),
            Tok::Op(op) => write!(f, "{op}"),
        }
    }
}

fn op_simple(c: char) -> Option<Op> {
    match c {
        '+' => Some(Op::Plus),
        '*' => Some(Op::Star),
        '/' => Some(Op::Slash),
        '(' => Some(Op::LPar),
        ')' => Some(Op::RPar),
        _ => None,
    }
}

fn is_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenize la première ligne de `s`.
///
/// Règles (une passe, sans retour arrière):
/// - chiffre ou '.' : littéral numérique, on avale tous les chiffres et '.' qui suivent
///   (aucune vérification de forme ici, "1.2.3" passe et échouera à l’évaluation)
/// - + * / ( ) : opérateurs d’un caractère
/// - '-' : début de littéral signé en tête d’entrée ou si le jeton précédent
///   n’est pas une opérande ; sinon moins binaire
/// - '\n' : fin de lecture, le reste est ignoré
/// - tout autre caractère : `UnexpectedToken`
pub fn tokenize(s: &str) -> Result<Vec<Tok>, Erreur> {
    let mut out: Vec<Tok> = Vec::new();
    let mut chars = s.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if c == '\n' {
            break;
        }

        if let Some(op) = op_simple(c) {
            out.push(Tok::Op(op));
            continue;
        }

        let signe = c == '-' && !matches!(out.last(), Some(Tok::Num(_)));
        if c == '-' && !signe {
            out.push(Tok::Op(Op::Minus));
            continue;
        }

        if signe || is_chiffre(c) {
            let mut texte = String::from(c);
            while let Some(&(_, d)) = chars.peek() {
                if !is_chiffre(d) {
                    break;
                }
                texte.push(d);
                chars.next();
            }
            out.push(Tok::Num(texte));
            continue;
        }

        return Err(Erreur::UnexpectedToken {
            caractere: c,
            position: pos,
        });
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte, séparés par des espaces.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Recolle le texte des jetons, sans séparateur.
pub fn reconstruire(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::to_string).collect()
}
