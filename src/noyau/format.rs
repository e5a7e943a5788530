// src/noyau/format.rs
//
// Affichage décimal d’un résultat f64 (arrondi à `digits` décimales, zéros finaux retirés).

/// Texte décimal de `v` avec au plus `digits` décimales.
///
/// - 0.30000000000000004 à 10 décimales => "0.3"
/// - jamais de "-0"
pub fn format_decimal(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        // débordement IEEE (produit de très grands littéraux) : tel quel
        return v.to_string();
    }

    let mut s = format!("{v:.digits$}");
    if s.contains('.') {
        let garde = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(garde);
    }

    if s == "-0" {
        s.remove(0);
    }
    s
}
