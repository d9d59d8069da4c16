//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (graine fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les erreurs attendues (÷0, résultat négatif, forme invalide)
//! - invariant clé : aucune faute structurelle depuis du texte, AST == RPN

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::analyse::analyser_texte;
use super::canon::cle_canonique;
use super::correction::corriger;
use super::erreur::ErreurEval;
use super::eval::eval_expression;
use super::lecture::parse_nombre;

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut StdRng) -> String {
    match rng.random_range(0..4) {
        0 => format!("{}", rng.random_range(0..10)),
        1 => format!("{}/{}", rng.random_range(1..5), rng.random_range(2..7)),
        2 => format!(
            "{}'{}/{}",
            rng.random_range(1..4),
            rng.random_range(1..3),
            rng.random_range(3..6)
        ),
        // zéro : utile pour provoquer ÷0
        _ => "0".to_string(),
    }
}

fn gen_expr(rng: &mut StdRng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.random_range(0..6) {
        0 => format!("{a} + {b}"),
        1 => format!("{a} - {b}"),
        2 => format!("{a} × {b}"),
        3 => format!("{a} ÷ {b}"),
        4 => format!("({a} + {b})"),
        _ => gen_nombre(rng),
    }
}

/// Texte arbitraire sur l’alphabet des exercices (plus quelques intrus).
fn gen_bruit(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '/', '\'', '+', '-', '×', '÷', '(', ')', ' ', '=', 'x', '.',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_ast_et_rpn_concordent() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let rpn = eval_expression(&expr);
        let ast = analyser_texte(&expr).map_err(ErreurEval::from).and_then(|e| e.valeur());

        match rpn {
            Ok(Some(v)) => {
                assert_eq!(ast, Ok(v), "expr={expr:?}");
                seen_ok += 1;
            }
            Ok(None) => panic!("expression non vide sans valeur: {expr:?}"),
            Err(e) => {
                assert!(!e.est_structurelle(), "faute structurelle: expr={expr:?} err={e}");
                assert_eq!(ast, Err(e), "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_ast_et_rpn_concordent_sur_le_bruit() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut seen_ok = 0usize;
    let mut seen_paren = 0usize;

    for _ in 0..3_000 {
        budget(t0, max);

        // bruit brut, ou expression bien formée dont on retire / ajoute une parenthèse
        let s = match rng.random_range(0..3) {
            0 => {
                let len = rng.random_range(1..14);
                gen_bruit(&mut rng, len)
            }
            1 => format!("({}", gen_expr(&mut rng, 2)),
            _ => {
                let e = gen_expr(&mut rng, 2);
                let i = rng.random_range(0..=e.len());
                let i = (0..=i).rev().find(|&k| e.is_char_boundary(k)).unwrap_or(0);
                format!("{}){}", &e[..i], &e[i..])
            }
        };

        let rpn = eval_expression(&s);
        if rpn == Ok(None) {
            // rien à lire : pas d’AST non plus
            assert!(analyser_texte(&s).is_err(), "s={s:?}");
            continue;
        }
        let ast = analyser_texte(&s).map_err(ErreurEval::from).and_then(|e| e.valeur());

        match rpn {
            Ok(Some(v)) => {
                assert_eq!(ast, Ok(v), "s={s:?}");
                seen_ok += 1;
                if s.contains('(') != s.contains(')') {
                    seen_paren += 1;
                }
            }
            Ok(None) => unreachable!(),
            Err(e) => assert_eq!(ast, Err(e), "s={s:?}"),
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_paren > 0, "aucune parenthèse déséquilibrée acceptée");
}

#[test]
fn fuzz_safe_bruit_jamais_structurel() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = StdRng::seed_from_u64(0xBADC0DE);

    for _ in 0..2_000 {
        budget(t0, max);

        let len = rng.random_range(0..16);
        let s = gen_bruit(&mut rng, len);

        if let Err(e) = eval_expression(&s) {
            assert!(!e.est_structurelle(), "s={s:?} err={e}");
        }
        // ni la clé ni la lecture de réponse ne paniquent
        let _ = cle_canonique(&s);
        let _ = parse_nombre(&s);
    }
}

#[test]
fn fuzz_safe_correction_ne_bloque_jamais() {
    let mut rng = StdRng::seed_from_u64(7);

    let exercices: Vec<String> = (0..200).map(|_| gen_bruit(&mut rng, 10)).collect();
    let reponses: Vec<String> = (0..200).map(|_| gen_bruit(&mut rng, 4)).collect();

    let bilan = corriger(&exercices, &reponses).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(bilan.justes.len() + bilan.fausses.len(), 200);
}

#[test]
fn fuzz_safe_longue_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 1/2 + 1/2 + ... (800 termes), à plat : pas de récursion profonde côté RPN
    let expr = vec!["1/2"; 800].join(" + ");
    let v = eval_expression(&expr).unwrap().unwrap();
    budget(t0, max);

    assert_eq!(super::format_nombre(&v), "400");
}
