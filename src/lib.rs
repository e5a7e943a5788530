//! Calculatrice RPN : évalue une ligne d’arithmétique (`+ - * /`, parenthèses,
//! littéraux décimaux signés) en f64.
//!
//! `process(entrée) = évaluer(rpn(valider(jetons(entrée))))`, premier échec renvoyé tel quel.
//!
//! ```
//! assert_eq!(calculatrice_rpn::process("1+2*3"), Ok(7.0));
//! ```

pub mod noyau;

pub use noyau::{analyser, process, Demarche, Erreur};
