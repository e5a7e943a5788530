// src/noyau/validation.rs
//
// Validation grammaticale avant shunting-yard.
//
// Une seule passe avant, avec seulement le jeton précédent en mémoire
// (plus une pile de parenthèses bornée par la profondeur d’imbrication).
// Après validation, la RPN produite par rpn.rs est toujours bien formée.

use super::erreur::Erreur;
use super::jetons::{Op, Tok};

/// Forme minimale : `a op b` (ou `(a)`).
const MIN_JETONS: usize = 3;

/// Vérifie la suite de jetons. Ne modifie rien : deux appels donnent le même verdict.
pub fn valider(tokens: &[Tok]) -> Result<(), Erreur> {
    if tokens.len() < MIN_JETONS {
        return Err(Erreur::invalide(format!(
            "au moins {MIN_JETONS} jetons attendus, {} reçus",
            tokens.len()
        )));
    }

    // positions des '(' encore ouvertes
    let mut ouvertes: Vec<usize> = Vec::new();
    let mut prev: Option<&Tok> = None;

    for (i, tok) in tokens.iter().enumerate() {
        adjacence(prev, tok, i)?;

        match tok {
            Tok::Op(Op::LPar) => ouvertes.push(i),
            Tok::Op(Op::RPar) => {
                if ouvertes.pop().is_none() {
                    return Err(Erreur::invalide(format!(
                        "')' sans '(' correspondante (jeton {i})"
                    )));
                }
            }
            _ => {}
        }

        prev = Some(tok);
    }

    // fin d’expression : il faut une valeur complète
    if let Some(Tok::Op(op)) = prev {
        if *op != Op::RPar {
            return Err(Erreur::invalide(format!("fin inattendue sur '{op}'")));
        }
    }

    if let Some(i) = ouvertes.last() {
        return Err(Erreur::invalide(format!("'(' non fermée (jeton {i})")));
    }

    Ok(())
}

/// Règles d’adjacence (jeton précédent -> jeton courant).
fn adjacence(prev: Option<&Tok>, tok: &Tok, i: usize) -> Result<(), Erreur> {
    // "attend une valeur" : début, après un opérateur binaire, après '('
    let attend_valeur = match prev {
        None => true,
        Some(Tok::Op(op)) => *op != Op::RPar,
        Some(Tok::Num(_)) => false,
    };

    let ok = match tok {
        Tok::Num(_) | Tok::Op(Op::LPar) => attend_valeur,
        Tok::Op(_) => !attend_valeur,
    };
    if ok {
        return Ok(());
    }

    let raison = match (prev, tok) {
        (Some(Tok::Num(_)), Tok::Num(_)) => "deux opérandes consécutives".to_string(),
        (Some(Tok::Num(_)), Tok::Op(Op::LPar)) => "'(' juste après une opérande".to_string(),
        (Some(Tok::Op(a)), Tok::Op(b)) if a.is_binaire() && b.is_binaire() => {
            format!("deux opérateurs consécutifs '{a}' '{b}'")
        }
        (None, _) => format!("début inattendu sur '{tok}'"),
        (Some(p), _) => format!("'{tok}' inattendu après '{p}'"),
    };
    Err(Erreur::invalide(format!("{raison} (jeton {i})")))
}
