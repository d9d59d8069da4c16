// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/* ------------------------ Affichage des réponses ------------------------ */

/// Forme scolaire d’un rationnel :
/// - entier     -> "N"
/// - |r| < 1    -> "N/D"
/// - sinon      -> "W'N/D" (nombre mixte)
///
/// Le signe (jamais produit par le générateur) préfixe l’ensemble : -1/2, -1'1/2.
pub fn format_nombre(r: &BigRational) -> String {
    let signe = if r.is_negative() { "-" } else { "" };
    let a = r.abs();
    let n = a.numer();
    let d = a.denom();

    if a.is_integer() {
        return format!("{signe}{n}");
    }

    let entier: BigInt = n / d;
    let reste: BigInt = n % d;

    if entier.is_zero() {
        format!("{signe}{reste}/{d}")
    } else {
        format!("{signe}{entier}'{reste}/{d}")
    }
}
