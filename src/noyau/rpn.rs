// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en vérifiant la forme infixe
// - Puis évaluer la RPN sur une pile de rationnels exacts
//
// Règles:
// - valeur attendue : Nombre ou '(' ; sinon opérateur ou ')'
// - pas de moins unaire (les exercices n’ont pas de négatifs)
// - '(' non fermée : refermée en fin d’entrée ; ')' sans '(' : refusée
// - littéraux vérifiés au passage, dans l’ordre de lecture
// Même politique, mêmes erreurs que analyse.rs : les deux chemins concordent.
//
// Une pile incohérente pendant eval_rpn ne peut venir que d’une RPN fabriquée
// à la main : c’est une faute structurelle, pas une erreur d’utilisateur.

use num_rational::BigRational;

use super::erreur::{ErreurEval, ErreurSyntaxe};
use super::jetons::Tok;
use super::lecture::{parse_litteral, parse_nombre};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Plus, Num(2), Fois, Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Fois, Plus]
///
/// Une suite vide donne une RPN vide.
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurSyntaxe> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // Sert à refuser "1 (2)", "1 +", "+ 1", "()".
    let mut attend_valeur = true;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Nombre(s) => {
                if !attend_valeur {
                    return Err(ErreurSyntaxe::JetonInattendu(s));
                }
                parse_litteral(&s)?;
                out.push(Tok::Nombre(s));
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurSyntaxe::JetonInattendu("(".into()));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(ErreurSyntaxe::JetonInattendu(")".into()));
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurSyntaxe::ParentheseNonOuverte),
                    }
                }
            }

            Tok::Op(op) => {
                if attend_valeur {
                    return Err(ErreurSyntaxe::JetonInattendu(op.to_string()));
                }
                // associativité gauche : on sort tout opérateur de précédence >=
                while let Some(Tok::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Tok::Op(*top));
                    ops.pop();
                }
                ops.push(tok);
                attend_valeur = true;
            }
        }
    }

    if attend_valeur && !tokens.is_empty() {
        return Err(ErreurSyntaxe::FinInattendue);
    }

    // vide la pile ops ; une '(' restée ouverte se referme ici
    while let Some(op) = ops.pop() {
        if !matches!(op, Tok::LPar) {
            out.push(op);
        }
    }

    Ok(out)
}

/// Évalue une RPN.
/// - RPN vide => Ok(None) (pas de valeur, pas d’erreur)
/// - opérande manquante / surplus / parenthèse => ErreurEval::Structure
pub fn eval_rpn(rpn: &[Tok]) -> Result<Option<BigRational>, ErreurEval> {
    if rpn.is_empty() {
        return Ok(None);
    }

    let mut st: Vec<BigRational> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Nombre(s) => st.push(parse_nombre(s)?),

            Tok::Op(op) => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurEval::Structure(format!("opérande manquante pour {op}")))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurEval::Structure(format!("opérande manquante pour {op}")))?;
                st.push(op.appliquer(&a, &b)?);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::Structure("parenthèse inattendue en RPN".into()))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(Some(v)),
        _ => Err(ErreurEval::Structure(format!(
            "{} valeurs restantes sur la pile",
            st.len() + 1
        ))),
    }
}
