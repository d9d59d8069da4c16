// src/noyau/generateur.rs
//
// Générateur d’exercices (tirage contraint + rejet).
//
// Un candidat :
// 1) k opérateurs tirés dans [1, ops_max]
// 2) k+1 nombres : naturel dans [0, r) ou fraction (vraie / mixte) de valeur < r
// 3) construction gauche -> droite, chaque préfixe réévalué (÷0, négatif => abandon)
// 4) parenthèses aléatoires (30 %, si k > 1), bornes recalées hors des nombres,
//    repli sur la forme sans parenthèses si elle ne s’évalue plus
// 5) avec une division, la réponse doit être > 0
//
// Dédoublonnage par clé canonique (canon.rs). Le hasard est toujours passé
// explicitement : même graine => même série.
//
// Budget : `tentatives_max` candidats au total ; au-delà, ErreurGeneration::Insuffisant.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use rand::Rng;
use tracing::{debug, info, trace, warn};

use super::canon::cle_canonique;
use super::erreur::{ErreurEval, ErreurGeneration};
use super::eval::eval_expression;
use super::expr::Op;
use super::lecture::Litteral;

/// Probabilité de parenthéser une sous-chaîne (si plus d’un opérateur).
const PROBA_PARENTHESES: f64 = 0.3;

/// Caractères où une parenthèse ouvrante / fermante peut se poser.
const BORD_OUVRANT: &[char] = &[' ', '+', '-', '×', '÷', '('];
const BORD_FERMANT: &[char] = &[' ', '+', '-', '×', '÷', ')'];

/// Paramètres d’une série.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consigne {
    /// Nombre d’exercices distincts demandés.
    pub nombre: usize,
    /// Borne exclusive des nombres tirés (r >= 1).
    pub borne: u64,
    /// Nombre maximal d’opérateurs par exercice (>= 1).
    pub ops_max: usize,
    /// Nombre total de candidats autorisés avant abandon.
    pub tentatives_max: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exercice {
    /// Texte affiché, terminé par " =".
    pub texte: String,
    pub valeur: BigRational,
    pub cle: String,
}

impl Exercice {
    /// Construit un exercice à partir d’une expression déjà validée.
    fn depuis_expression(expr: &str, valeur: BigRational) -> Result<Exercice, ErreurEval> {
        let texte = format!("{expr} =");
        let cle = cle_canonique(&texte)?;
        Ok(Exercice { texte, valeur, cle })
    }
}

/// Série en cours : exercices gardés + clés déjà vues.
#[derive(Debug, Default)]
struct SerieExercices {
    exercices: Vec<Exercice>,
    vues: HashSet<String>,
}

impl SerieExercices {
    fn new() -> Self {
        Self::default()
    }

    /// Ajoute l’exercice si sa clé est nouvelle. Renvoie false pour un doublon.
    fn ajouter(&mut self, ex: Exercice) -> bool {
        if !self.vues.insert(ex.cle.clone()) {
            return false;
        }
        self.exercices.push(ex);
        true
    }

    fn len(&self) -> usize {
        self.exercices.len()
    }

    fn into_exercices(self) -> Vec<Exercice> {
        self.exercices
    }
}

/* ------------------------ Tirages élémentaires ------------------------ */

/// Tire un nombre de valeur dans [0, r) :
/// moitié naturels, moitié fractions (vraie si partie entière nulle, sinon mixte).
/// Avec r = 1 seul 0 est possible.
pub fn generer_nombre<R: Rng + ?Sized>(rng: &mut R, borne: u64) -> Litteral {
    if borne < 2 || rng.random_bool(0.5) {
        return Litteral::Naturel(BigInt::from(rng.random_range(0..borne.max(1))));
    }

    // entier <= r - 2 et num < den  =>  valeur < r - 1 < r (aucun produit sur u64)
    let entier = rng.random_range(0..borne - 1);
    let den = if borne > 2 {
        rng.random_range(2..=borne - 1)
    } else {
        2
    };
    let num = rng.random_range(1..den);

    let num = BigInt::from(num);
    let den = BigInt::from(den);
    if entier == 0 {
        Litteral::Fraction { num, den }
    } else {
        Litteral::Mixte {
            entier: BigInt::from(entier),
            num,
            den,
        }
    }
}

fn generer_op<R: Rng + ?Sized>(rng: &mut R) -> Op {
    Op::TOUS[rng.random_range(0..Op::TOUS.len())]
}

/// Évalue un texte candidat ; None si le domaine le refuse.
/// Une faute structurelle remonte.
fn valider(expr: &str) -> Result<Option<BigRational>, ErreurEval> {
    match eval_expression(expr) {
        Ok(v) => Ok(v),
        Err(e) if e.est_structurelle() => Err(e),
        Err(e) => {
            trace!(expr = %expr, erreur = %e, "candidat refusé");
            Ok(None)
        }
    }
}

/// Entoure une sous-chaîne de parenthèses, bornes recalées pour ne pas couper de nombre
/// et pour laisser les espaces à l’extérieur.
fn parentheser<R: Rng + ?Sized>(rng: &mut R, expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let len = chars.len();
    if len < 2 {
        return expr.to_string();
    }

    let mut debut = rng.random_range(0..=len / 2);
    let mut fin = (debut + rng.random_range(2..=(len - debut).max(2))).min(len);

    while debut > 0 && !BORD_OUVRANT.contains(&chars[debut - 1]) {
        debut -= 1;
    }
    while fin < len && !BORD_FERMANT.contains(&chars[fin]) {
        fin += 1;
    }
    // les espaces restent hors des parenthèses : "1 + (2 × 3)", pas "1 +( 2 × 3)"
    while debut < fin && chars[debut] == ' ' {
        debut += 1;
    }
    while fin > debut && chars[fin - 1] == ' ' {
        fin -= 1;
    }
    if debut == fin {
        return expr.to_string();
    }

    let mut out = String::with_capacity(expr.len() + 2);
    out.extend(&chars[..debut]);
    out.push('(');
    out.extend(&chars[debut..fin]);
    out.push(')');
    out.extend(&chars[fin..]);
    out
}

/* ------------------------ Candidat ------------------------ */

/// Produit un candidat valide, ou None s’il a fallu l’abandonner.
pub fn generer_candidat<R: Rng + ?Sized>(
    rng: &mut R,
    borne: u64,
    ops_max: usize,
) -> Result<Option<Exercice>, ErreurEval> {
    let k = rng.random_range(1..=ops_max.max(1));
    let nombres: Vec<Litteral> = (0..=k).map(|_| generer_nombre(rng, borne)).collect();
    let ops: Vec<Op> = (0..k).map(|_| generer_op(rng)).collect();

    let mut expr = nombres[0].to_string();
    let mut valeur = None;
    for (op, n) in ops.iter().zip(&nombres[1..]) {
        let suivant = format!("{expr} {op} {n}");
        match valider(&suivant)? {
            Some(v) => valeur = Some(v),
            None => return Ok(None),
        }
        expr = suivant;
    }

    let Some(mut valeur) = valeur else {
        return Ok(None);
    };

    if k > 1 && rng.random_bool(PROBA_PARENTHESES) {
        let avec = parentheser(rng, &expr);
        match valider(&avec)? {
            Some(v) => {
                expr = avec;
                valeur = v;
            }
            None => trace!(expr = %avec, "parenthèses abandonnées"),
        }
    }

    // un exercice avec division doit avoir une réponse strictement positive
    if valeur.is_zero() && ops.contains(&Op::Divise) {
        trace!(expr = %expr, "division de résultat nul écartée");
        return Ok(None);
    }

    Exercice::depuis_expression(&expr, valeur).map(Some)
}

/* ------------------------ Série ------------------------ */

/// Produit `consigne.nombre` exercices deux à deux distincts (clé canonique).
pub fn generer_exercices<R: Rng + ?Sized>(
    rng: &mut R,
    consigne: &Consigne,
) -> Result<Vec<Exercice>, ErreurGeneration> {
    let mut serie = SerieExercices::new();
    let mut tentatives = 0usize;

    while serie.len() < consigne.nombre {
        if tentatives >= consigne.tentatives_max {
            warn!(
                produits = serie.len(),
                demandes = consigne.nombre,
                tentatives,
                "budget de tentatives épuisé"
            );
            return Err(ErreurGeneration::Insuffisant {
                produits: serie.len(),
                demandes: consigne.nombre,
                tentatives,
            });
        }
        tentatives += 1;

        let Some(ex) = generer_candidat(rng, consigne.borne, consigne.ops_max)? else {
            continue;
        };

        let texte = ex.texte.clone();
        if serie.ajouter(ex) {
            debug!(numero = serie.len(), exercice = %texte, "exercice retenu");
        } else {
            trace!(exercice = %texte, "doublon écarté");
        }
    }

    info!(
        exercices = serie.len(),
        tentatives,
        borne = consigne.borne,
        "série générée"
    );
    Ok(serie.into_exercices())
}
