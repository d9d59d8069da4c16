// src/noyau/canon.rs
//
// Canonicalisation pour le dédoublonnage :
// - enfants d’abord (récursif)
// - pour + et × : si rendu(gauche) > rendu(droite), on échange
// - - et ÷ : jamais réordonnés
// - clé = rendu entièrement parenthésé "(" g op d ")" ; feuilles = texte du littéral
//
// Seule la commutativité compte : (1+2)+3 et 1+(2+3) restent deux exercices distincts.
// Le rendu d’un sous-arbre est calculé une seule fois et remonte avec lui.

use super::analyse::analyser_texte;
use super::erreur::ErreurSyntaxe;
use super::expr::Expr;

fn canon_rendu(e: Expr) -> (Expr, String) {
    match e {
        Expr::Nombre(ref l) => {
            let s = l.to_string();
            (e, s)
        }
        Expr::Binaire(op, a, b) => {
            let (mut ga, mut sa) = canon_rendu(*a);
            let (mut db, mut sb) = canon_rendu(*b);

            if op.est_commutatif() && sa > sb {
                std::mem::swap(&mut ga, &mut db);
                std::mem::swap(&mut sa, &mut sb);
            }

            let s = format!("({sa}{op}{sb})");
            (Expr::binaire(op, ga, db), s)
        }
    }
}

pub fn canon_expr(e: Expr) -> Expr {
    canon_rendu(e).0
}

/// Clé canonique d’une ligne d’exercice (jamais relue comme expression, sert d’appartenance).
pub fn cle_canonique(s: &str) -> Result<String, ErreurSyntaxe> {
    Ok(analyser_texte(s)?.canon().to_string())
}
