//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> RPN -> valeur exacte
//!
//! Deux chemins équivalents :
//! - `eval_expression` : shunting-yard + pile (strict sur la forme)
//! - `Expr::valeur`    : parcours direct de l’AST (analyse.rs)
//! Mêmes règles de domaine (Op::appliquer), mêmes résultats.

use num_rational::BigRational;
use tracing::trace;

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

impl Expr {
    /// Valeur exacte par parcours de l’arbre (gauche puis droite).
    pub fn valeur(&self) -> Result<BigRational, ErreurEval> {
        match self {
            Expr::Nombre(l) => Ok(l.valeur()),
            Expr::Binaire(op, a, b) => {
                let va = a.valeur()?;
                let vb = b.valeur()?;
                op.appliquer(&va, &vb)
            }
        }
    }
}

/// API publique : évalue une ligne d’exercice (avec ou sans `=` final).
/// - Ok(Some(v)) : valeur exacte
/// - Ok(None)    : entrée vide (rien à évaluer)
/// - Err(_)      : forme invalide, ÷0, résultat négatif, ou faute structurelle
pub fn eval_expression(expr_str: &str) -> Result<Option<BigRational>, ErreurEval> {
    // 1) Jetons
    let jetons = tokenize(expr_str);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(jetons = %format_tokens(&jetons), rpn = %format_tokens(&rpn), "rpn");

    // 3) Valeur
    eval_rpn(&rpn)
}
