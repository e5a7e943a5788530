//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> valider -> RPN -> pile numérique -> f64
//!
//! Chaque étape consomme toute la sortie de la précédente ; le premier échec
//! remonte tel quel à l’appelant. Tous les tampons sont locaux à l’appel.

use super::erreur::Erreur;
use super::jetons::{format_tokens, tokenize, Op, Tok};
use super::rpn::to_rpn;
use super::validation::valider;

/// Démarche : ce que chaque étape a produit.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub valeur: f64,
}

/// API publique : évalue la première ligne de `input`.
pub fn process(input: &str) -> Result<f64, Erreur> {
    let jetons = tokenize(input)?;
    valider(&jetons)?;
    eval_rpn(to_rpn(jetons))
}

/// Comme `process`, mais garde aussi le texte des jetons et de la RPN.
pub fn analyser(input: &str) -> Result<Demarche, Erreur> {
    // 1) Jetons
    let jetons = tokenize(input)?;

    // 2) Validation
    valider(&jetons)?;
    let jetons_txt = format_tokens(&jetons);

    // 3) RPN
    let rpn = to_rpn(jetons);
    let rpn_txt = format_tokens(&rpn);

    // 4) Pile
    let valeur = eval_rpn(rpn)?;

    Ok(Demarche {
        jetons: jetons_txt,
        rpn: rpn_txt,
        valeur,
    })
}

/// Évalue une suite RPN avec une pile de f64.
///
/// Les littéraux ne sont lus qu’ici : "1.2.3" échoue à cette étape, pas avant.
pub fn eval_rpn(rpn: Vec<Tok>) -> Result<f64, Erreur> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len() / 2 + 1);

    for tok in rpn {
        match tok {
            Tok::Num(texte) => pile.push(lire_nombre(texte)?),
            Tok::Op(op) => {
                // b d’abord : le plus récent est l’opérande de droite
                let b = pile.pop().ok_or_else(|| pile_vide(op))?;
                let a = pile.pop().ok_or_else(|| pile_vide(op))?;
                pile.push(appliquer(op, a, b)?);
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(Erreur::invalide(format!(
            "{} valeurs restantes en fin de RPN",
            pile.len()
        ))),
    }
}

fn lire_nombre(texte: String) -> Result<f64, Erreur> {
    match texte.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(Erreur::NonFiniteNumber(texte)),
        Err(source) => Err(Erreur::NumberParse { texte, source }),
    }
}

fn pile_vide(op: Op) -> Erreur {
    Erreur::invalide(format!("opérande manquante pour '{op}'"))
}

fn appliquer(op: Op, a: f64, b: f64) -> Result<f64, Erreur> {
    match op {
        Op::Plus => Ok(a + b),
        Op::Minus => Ok(a - b),
        Op::Star => Ok(a * b),
        Op::Slash => {
            // -0.0 == 0.0 aussi
            if b == 0.0 {
                return Err(Erreur::DivisionByZero);
            }
            Ok(a / b)
        }
        Op::LPar | Op::RPar => Err(Erreur::InvalidOperation(op)),
    }
}
