// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
//
// Règles:
// - l’entrée est supposée validée (validation.rs) : rien n’est revérifié ici
// - opérateurs binaires tous associatifs à gauche (on dépile à précédence >=)
// - '(' et ')' ne sortent jamais en RPN

use super::jetons::{Op, Tok};

/// Précédence : + - = 1, * / = 2, parenthèses = 0 (jamais comparées).
pub fn precedence(op: Op) -> u8 {
    match op {
        Op::Plus | Op::Minus => 1,
        Op::Star | Op::Slash => 2,
        Op::LPar | Op::RPar => 0,
    }
}

/// Convertit une suite de jetons infixe (validée) en RPN.
///
/// Exemple:
///   tokens: [Num(1), Plus, Num(2), Star, Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Star, Plus]
pub fn to_rpn(tokens: Vec<Tok>) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Op> = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(Op::LPar) => ops.push(Op::LPar),

            Tok::Op(Op::RPar) => {
                // dépile jusqu’à '(' (retirée, jamais émise)
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if top == Op::LPar {
                        fermee = true;
                        break;
                    }
                    out.push(Tok::Op(top));
                }
                debug_assert!(fermee, "')' sans '(' : entrée non validée");
            }

            Tok::Op(op) => {
                // '(' a précédence 0 : elle bloque naturellement le dépilement
                while let Some(&top) = ops.last() {
                    if top == Op::LPar || precedence(top) < precedence(op) {
                        break;
                    }
                    out.push(Tok::Op(top));
                    ops.pop();
                }
                ops.push(op);
            }
        }
    }

    // vide la pile ops (ordre LIFO)
    while let Some(op) = ops.pop() {
        debug_assert!(op != Op::LPar, "'(' non fermée : entrée non validée");
        out.push(Tok::Op(op));
    }

    out
}
