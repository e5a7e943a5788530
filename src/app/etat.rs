//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, digits, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici : du noyau, on n’utilise que le formatage.
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur l’affichage (digits).

use calculatrice_rpn::noyau::format::format_decimal;
use calculatrice_rpn::Demarche;

/// Décimales affichées par défaut.
pub const DIGITS_DEFAUT: usize = 10;

/// Garde-fou : au-delà, un f64 n’a plus de chiffres significatifs à montrer.
pub const DIGITS_MAX: usize = 17;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,      // valeur formatée (digits)
    pub valeur: Option<f64>,   // valeur brute, pour reformater quand digits change
    pub erreur: String,        // message d’erreur (si une étape échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            valeur: None,
            erreur: String::new(),
            demarche: Demarche::default(),
            digits: DIGITS_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.valeur = None;
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE le dernier résultat pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe la démarche (elle décrivait l’expression précédente).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (la démarche porte la valeur).
    pub fn set_resultat(&mut self, demarche: Demarche) {
        self.erreur.clear();
        self.valeur = Some(demarche.valeur);
        self.resultat = format_decimal(demarche.valeur, self.digits);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : borne digits, puis reformate la dernière valeur.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.clamp(0, DIGITS_MAX);
        if let Some(v) = self.valeur {
            self.resultat = format_decimal(v, self.digits);
        }
        self.focus_entree = true;
    }
}
