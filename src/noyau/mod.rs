//! Noyau RPN (f64)
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (Tok, Op)
//! - validation.rs : grammaire (adjacence + parenthèses)
//! - rpn.rs        : shunting-yard
//! - eval.rs       : pile numérique + pipeline complet
//! - format.rs     : affichage décimal
//! - erreur.rs     : erreurs

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod validation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::Erreur;
pub use eval::{analyser, process, Demarche};
