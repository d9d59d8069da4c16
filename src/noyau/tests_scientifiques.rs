//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés de bout en bout sans faire chauffer la machine.
//! - graines fixes
//! - budget temps global
//! - plages et nombres d’opérateurs bornés
//!
//! Notes :
//! - La clé canonique ne connaît que la commutativité : deux exercices de même valeur
//!   mais d’arbres différents restent distincts (voulu).
//! - Les deux chemins d’évaluation (AST / RPN) doivent concorder, erreurs comprises.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::analyse::analyser_texte;
use super::canon::cle_canonique;
use super::eval::eval_expression;
use super::expr::Op;
use super::{corriger, format_nombre, generer_exercices, Consigne};

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn consigne(nombre: usize, borne: u64, ops_max: usize) -> Consigne {
    Consigne {
        nombre,
        borne,
        ops_max,
        tentatives_max: 50_000,
    }
}

/* ------------------------ Invariants du générateur ------------------------ */

#[test]
fn sci_generateur_invariants_domaine() {
    let t0 = Instant::now();
    let max = Duration::from_secs(10);

    for (graine, borne) in [(1u64, 3u64), (2, 10), (3, 20), (4, 100)] {
        budget(t0, max);

        let mut rng = StdRng::seed_from_u64(graine);
        let exercices = generer_exercices(&mut rng, &consigne(100, borne, 3))
            .unwrap_or_else(|e| panic!("borne={borne} err={e}"));

        for ex in &exercices {
            let v = &ex.valeur;
            assert!(*v >= BigRational::zero(), "{}", ex.texte);
            if ex.texte.contains('÷') {
                assert!(*v > BigRational::zero(), "{}", ex.texte);
            }
            // réévaluation indépendante
            assert_eq!(eval_expression(&ex.texte), Ok(Some(v.clone())), "{}", ex.texte);
            // nombre d’opérateurs respecté
            let ops = ex.texte.chars().filter(|c| Op::depuis_car(*c).is_some()).count();
            assert!((1..=3).contains(&ops), "{}", ex.texte);
            assert!(analyser_texte(&ex.texte).is_ok(), "{}", ex.texte);
        }
    }
}

#[test]
fn sci_generateur_cles_distinctes_et_recalculables() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let exercices = generer_exercices(&mut rng, &consigne(200, 10, 3)).unwrap();

    let mut vues = HashSet::new();
    for ex in &exercices {
        assert_eq!(cle_canonique(&ex.texte).as_ref(), Ok(&ex.cle));
        assert!(vues.insert(ex.cle.clone()), "doublon: {}", ex.texte);
    }
}

#[test]
fn sci_generateur_parentheses_presentes() {
    let mut rng = StdRng::seed_from_u64(99);
    let exercices = generer_exercices(&mut rng, &consigne(200, 10, 3)).unwrap();
    let avec = exercices.iter().filter(|e| e.texte.contains('(')).count();
    assert!(avec > 0, "aucune parenthèse en 200 exercices");
}

/* ------------------------ Générer puis corriger ------------------------ */

#[test]
fn sci_generer_puis_corriger_tout_juste() {
    let mut rng = StdRng::seed_from_u64(2025);
    let exercices = generer_exercices(&mut rng, &consigne(60, 12, 3)).unwrap();

    let textes: Vec<&str> = exercices.iter().map(|e| e.texte.as_str()).collect();
    let reponses: Vec<String> = exercices.iter().map(|e| format_nombre(&e.valeur)).collect();

    let bilan = corriger(&textes, &reponses).unwrap();
    assert_eq!(bilan.justes, (1..=60).collect::<Vec<_>>());
    assert!(bilan.fausses.is_empty());
}

#[test]
fn sci_reponse_decalee_toute_fausse_sauf_egalites() {
    let mut rng = StdRng::seed_from_u64(17);
    let exercices = generer_exercices(&mut rng, &consigne(40, 10, 2)).unwrap();

    let textes: Vec<&str> = exercices.iter().map(|e| e.texte.as_str()).collect();
    // réponse = valeur + 1 : jamais juste
    let reponses: Vec<String> = exercices
        .iter()
        .map(|e| format_nombre(&(&e.valeur + BigRational::from_integer(BigInt::from(1)))))
        .collect();

    let bilan = corriger(&textes, &reponses).unwrap();
    assert!(bilan.justes.is_empty());
    assert_eq!(bilan.fausses.len(), 40);
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn sci_exemples_de_reference() {
    let ex = ["1 + 2 =", "3 × 4 =", "5 - 2 =", "8 ÷ 2 ="];

    let b = corriger(&ex, &["3", "12", "3", "4"]).unwrap();
    assert_eq!(b.to_string(), "Correct: 4 (1, 2, 3, 4)\nWrong: 0 ()\n");

    let b = corriger(&ex, &["4", "10", "4", "5"]).unwrap();
    assert_eq!(b.to_string(), "Correct: 0 ()\nWrong: 4 (1, 2, 3, 4)\n");

    let b = corriger(&["1/2 + 1/2 ="], &["2/2"]).unwrap();
    assert_eq!(b.justes, vec![1]);

    let b = corriger(&["1 ÷ 0 ="], &["0"]).unwrap();
    assert_eq!(b.fausses, vec![1]);
}
