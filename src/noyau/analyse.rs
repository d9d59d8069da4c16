// src/noyau/analyse.rs
//
// Descente récursive, trois niveaux (du plus faible au plus fort) :
//   Expression := Terme (('+'|'-') Terme)*
//   Terme      := Facteur (('×'|'÷') Facteur)*
//   Facteur    := '(' Expression ')' | Nombre
//
// Chaque niveau replie à gauche : 8 ÷ 4 ÷ 2 = (8 ÷ 4) ÷ 2.
//
// Indulgence conservée : ')' manquante, l’expression intérieure est rendue telle
// quelle (toute '(' restée ouverte se referme en fin d’entrée).
// Jetons restants après une expression complète : refusés.
// Même politique que rpn.rs : AST et RPN donnent les mêmes valeurs et les mêmes erreurs.

use super::erreur::ErreurSyntaxe;
use super::expr::{Expr, Op};
use super::jetons::{tokenize, Tok};
use super::lecture::parse_litteral;

struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&'a Tok> {
        self.jetons.get(self.pos)
    }

    fn op_courant(&self, niveau: u8) -> Option<Op> {
        match self.courant() {
            Some(Tok::Op(op)) if op.precedence() == niveau => Some(*op),
            _ => None,
        }
    }

    fn expression(&mut self) -> Result<Expr, ErreurSyntaxe> {
        let mut gauche = self.terme()?;
        while let Some(op) = self.op_courant(1) {
            self.pos += 1;
            let droite = self.terme()?;
            gauche = Expr::binaire(op, gauche, droite);
        }
        Ok(gauche)
    }

    fn terme(&mut self) -> Result<Expr, ErreurSyntaxe> {
        let mut gauche = self.facteur()?;
        while let Some(op) = self.op_courant(2) {
            self.pos += 1;
            let droite = self.facteur()?;
            gauche = Expr::binaire(op, gauche, droite);
        }
        Ok(gauche)
    }

    fn facteur(&mut self) -> Result<Expr, ErreurSyntaxe> {
        match self.courant() {
            None => Err(ErreurSyntaxe::FinInattendue),
            Some(Tok::LPar) => {
                self.pos += 1;
                let e = self.expression()?;
                if let Some(Tok::RPar) = self.courant() {
                    self.pos += 1;
                }
                Ok(e)
            }
            Some(Tok::Nombre(s)) => {
                self.pos += 1;
                Ok(Expr::Nombre(parse_litteral(s)?))
            }
            Some(Tok::Op(op)) => Err(ErreurSyntaxe::JetonInattendu(op.to_string())),
            Some(Tok::RPar) => Err(ErreurSyntaxe::JetonInattendu(")".into())),
        }
    }
}

/// Construit l’AST d’une suite de jetons. Aucun résultat partiel en cas d’échec.
pub fn analyser(jetons: &[Tok]) -> Result<Expr, ErreurSyntaxe> {
    let mut a = Analyseur { jetons, pos: 0 };
    let e = a.expression()?;
    match a.courant() {
        None => Ok(e),
        Some(Tok::RPar) => Err(ErreurSyntaxe::ParentheseNonOuverte),
        Some(Tok::LPar) => Err(ErreurSyntaxe::JetonInattendu("(".into())),
        Some(Tok::Nombre(s)) => Err(ErreurSyntaxe::JetonInattendu(s.clone())),
        Some(Tok::Op(op)) => Err(ErreurSyntaxe::JetonInattendu(op.to_string())),
    }
}

pub fn analyser_texte(s: &str) -> Result<Expr, ErreurSyntaxe> {
    analyser(&tokenize(s))
}
