//! Taxonomie des erreurs du noyau.
//!
//! Chaque étape du pipeline échoue tout de suite et rend la main à l’appelant :
//! pas de reprise, pas de résultat partiel, pas de log d’erreur côté noyau.

use std::num::ParseFloatError;

use thiserror::Error;

use super::jetons::Op;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Erreur {
    /// Jetons : caractère hors grammaire (lettre, espace, symbole non supporté).
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    UnexpectedToken { caractere: char, position: usize },

    /// Validation : adjacence interdite, parenthèses déséquilibrées, entrée trop courte.
    #[error("expression invalide: {0}")]
    InvalidExpression(String),

    /// Évaluation : le texte d’une opérande n’est pas un flottant.
    #[error("nombre invalide: {texte:?}")]
    NumberParse {
        texte: String,
        #[source]
        source: ParseFloatError,
    },

    /// Évaluation : le texte se lit, mais pas comme un double fini.
    #[error("nombre hors domaine: {0:?}")]
    NonFiniteNumber(String),

    #[error("division par zéro")]
    DivisionByZero,

    /// Un jeton qui n’est pas un opérateur binaire est arrivé à l’évaluation.
    #[error("opération invalide: '{0}'")]
    InvalidOperation(Op),
}

impl Erreur {
    pub(crate) fn invalide(raison: impl Into<String>) -> Self {
        Erreur::InvalidExpression(raison.into())
    }
}
