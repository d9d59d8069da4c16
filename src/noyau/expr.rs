// src/noyau/expr.rs
//
// AST exact (sans flottants).
// - Nombre  : littéral tel qu’écrit (N, N/N, N'N/N)
// - Binaire : opérateur + deux sous-arbres possédés
//
// Les parenthèses ne sont pas gardées comme jetons : elles sont dans la forme de l’arbre.
// Règles de domaine (exercices d’école) : voir Op::appliquer.

use num_rational::BigRational;
use num_traits::{Signed, Zero};

use std::fmt;

use super::erreur::ErreurEval;
use super::lecture::Litteral;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    pub const TOUS: [Op; 4] = [Op::Plus, Op::Moins, Op::Fois, Op::Divise];

    pub fn depuis_car(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '×' => Some(Op::Fois),
            '÷' => Some(Op::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '×',
            Op::Divise => '÷',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Divise => 2,
        }
    }

    pub fn est_commutatif(self) -> bool {
        matches!(self, Op::Plus | Op::Fois)
    }

    /// Applique l’opérateur avec les contraintes d’exercice :
    /// - a - b refusé si a < b
    /// - a ÷ 0 refusé
    /// - quotient entier négatif refusé (un quotient négatif non entier passe)
    pub fn appliquer(self, a: &BigRational, b: &BigRational) -> Result<BigRational, ErreurEval> {
        match self {
            Op::Plus => Ok(a + b),
            Op::Fois => Ok(a * b),
            Op::Moins => {
                if a < b {
                    return Err(ErreurEval::ResultatNegatif);
                }
                Ok(a - b)
            }
            Op::Divise => {
                if b.is_zero() {
                    return Err(ErreurEval::DivisionParZero);
                }
                let q = a / b;
                if q.is_integer() && q.is_negative() {
                    return Err(ErreurEval::ResultatNegatif);
                }
                Ok(q)
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Nombre(Litteral),
    Binaire(Op, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn binaire(op: Op, a: Expr, b: Expr) -> Expr {
        Expr::Binaire(op, Box::new(a), Box::new(b))
    }

    /// Canonicalisation (commutativité de + et ×), voir canon.rs.
    pub fn canon(self) -> Expr {
        super::canon::canon_expr(self)
    }
}

/// Rendu entièrement parenthésé : "((1+2)×3)".
/// C’est aussi la forme de la clé canonique une fois l’arbre canonisé.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Nombre(l) => write!(f, "{l}"),
            Expr::Binaire(op, a, b) => write!(f, "({a}{op}{b})"),
        }
    }
}
