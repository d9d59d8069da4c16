// src/noyau/lecture.rs
//
// Lecture des nombres écrits : N, N/N, N'N/N
// - `'` sépare la partie entière de la fraction (2'1/3)
// - chiffres ASCII seulement, pas de signe, pas de décimal
// - dénominateur nul refusé
//
// Le tokeniseur laisse passer n’importe quelle suite de chiffres, `/` et `'` :
// c’est ici que la forme est validée.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use std::fmt;

use super::erreur::ErreurLitteral;

/// Nombre tel qu’il est écrit (forme de surface conservée).
///
/// La grammaire est volontairement plus large que ce que produit le générateur :
/// `3/2`, `2/2` ou `0'1/2` sont lus et comparés par valeur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Litteral {
    Naturel(BigInt),
    Fraction {
        num: BigInt,
        den: BigInt,
    },
    Mixte {
        entier: BigInt,
        num: BigInt,
        den: BigInt,
    },
}

impl Litteral {
    pub fn valeur(&self) -> BigRational {
        match self {
            Litteral::Naturel(n) => BigRational::from_integer(n.clone()),
            Litteral::Fraction { num, den } => BigRational::new(num.clone(), den.clone()),
            Litteral::Mixte { entier, num, den } => {
                BigRational::new(entier * den + num, den.clone())
            }
        }
    }
}

impl fmt::Display for Litteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Litteral::Naturel(n) => write!(f, "{n}"),
            Litteral::Fraction { num, den } => write!(f, "{num}/{den}"),
            Litteral::Mixte { entier, num, den } => write!(f, "{entier}'{num}/{den}"),
        }
    }
}

/* ------------------------ Lecture ------------------------ */

fn chiffres(s: &str, source: &str) -> Result<BigInt, ErreurLitteral> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErreurLitteral::Invalide(source.to_string()));
    }
    BigInt::parse_bytes(s.as_bytes(), 10).ok_or_else(|| ErreurLitteral::Invalide(source.to_string()))
}

fn fraction(s: &str, source: &str) -> Result<(BigInt, BigInt), ErreurLitteral> {
    let (n, d) = s
        .split_once('/')
        .ok_or_else(|| ErreurLitteral::Invalide(source.to_string()))?;
    let num = chiffres(n, source)?;
    let den = chiffres(d, source)?;
    if den.is_zero() {
        return Err(ErreurLitteral::DenominateurNul(source.to_string()));
    }
    Ok((num, den))
}

/// Lit un nombre écrit (sans espaces autour).
pub fn parse_litteral(s: &str) -> Result<Litteral, ErreurLitteral> {
    if s.is_empty() {
        return Err(ErreurLitteral::Vide);
    }

    if let Some((e, reste)) = s.split_once('\'') {
        let entier = chiffres(e, s)?;
        let (num, den) = fraction(reste, s)?;
        return Ok(Litteral::Mixte { entier, num, den });
    }

    if s.contains('/') {
        let (num, den) = fraction(s, s)?;
        return Ok(Litteral::Fraction { num, den });
    }

    Ok(Litteral::Naturel(chiffres(s, s)?))
}

/// Lit une réponse (texte éventuellement entouré d’espaces) et donne sa valeur exacte.
pub fn parse_nombre(s: &str) -> Result<BigRational, ErreurLitteral> {
    parse_litteral(s.trim()).map(|l| l.valeur())
}
