//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, moins collé après ')', etc.)
//! - invariant clé : un Ok n’est jamais inf/NaN tant que les littéraux restent petits

use std::time::{Duration, Instant};

use super::erreur::Erreur;
use super::process;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &Erreur) -> bool {
    // Liste blanche : erreurs *normales* pour un fuzz.
    // InvalidOperation n’en fait pas partie : elle signalerait une RPN cassée.
    matches!(
        e,
        Erreur::DivisionByZero
            | Erreur::InvalidExpression(_)
            | Erreur::UnexpectedToken { .. }
            | Erreur::NumberParse { .. }
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits littéraux, 0 inclus (division par zéro voulue)
    let n = rng.pick(10);
    let s = match rng.pick(4) {
        0 => format!("{n}"),
        1 => format!("{n}.5"),
        2 => format!(".{n}"),
        _ => format!("{n}.25"),
    };
    if rng.pick(5) == 0 {
        format!("-{s}")
    } else {
        s
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(4) {
        0 => gen_nombre(rng),
        1 => format!("({})", gen_expr(rng, depth - 1)),
        _ => format!(
            "{}{}{}",
            gen_expr(rng, depth - 1),
            gen_op(rng),
            gen_expr(rng, depth - 1)
        ),
    }
}

/// Abîme une expression : insertion, suppression ou caractère hors grammaire.
fn abimer(rng: &mut Rng, expr: &str) -> String {
    let mut chars: Vec<char> = expr.chars().collect();
    let i = rng.pick(chars.len() as u32 + 1) as usize;
    match rng.pick(3) {
        0 if i < chars.len() => {
            chars.remove(i);
        }
        1 => {
            let c = ['(', ')', '.', '+', '*', '/', '-', '1'][rng.pick(8) as usize];
            chars.insert(i, c);
        }
        _ => {
            let c = [' ', 'x', '^', '%', '\t'][rng.pick(5) as usize];
            chars.insert(i, c);
        }
    }
    chars.into_iter().collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_erreurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);
        let r1 = process(&expr);
        // Même entrée => même sortie
        let r2 = process(&expr);
        assert_eq!(r1, r2, "non déterministe: expr={expr:?}");

        match r1 {
            Ok(v) => {
                assert!(v.is_finite(), "valeur non finie: expr={expr:?} v={v}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_entrees_abimees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let base = gen_expr(&mut rng, 3);
        let mut expr = abimer(&mut rng, &base);
        if rng.coin() {
            expr = abimer(&mut rng, &expr);
        }

        if let Err(e) = process(&expr) {
            assert!(
                is_erreur_attendue(&e),
                "erreur non attendue: expr={expr:?} err={e}"
            );
        }
    }
}

#[test]
fn fuzz_safe_ligne_suivante_ignoree() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        let expr = gen_expr(&mut rng, 4);
        let base = gen_expr(&mut rng, 2);
        let bruit = abimer(&mut rng, &base);
        assert_eq!(
            process(&expr),
            process(&format!("{expr}\n{bruit}")),
            "expr={expr:?}"
        );
    }
}
