// src/noyau/erreur.rs
//
// Taxonomie des échecs du noyau.
// - ErreurLitteral : nombre mal écrit (réponse ou jeton)
// - ErreurSyntaxe  : suite de jetons incomplète / mal formée => pas d’AST
// - ErreurEval     : domaine (÷0, résultat négatif) ou faute structurelle
// - ErreurGeneration : budget de tentatives épuisé, ou faute structurelle remontée
//
// Seule ErreurEval::Structure est une vraie faute (invariant noyau cassé).
// Tout le reste est récupéré localement (nouveau tirage / réponse fausse).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurLitteral {
    #[error("nombre vide")]
    Vide,
    #[error("nombre invalide: '{0}'")]
    Invalide(String),
    #[error("dénominateur nul dans '{0}'")]
    DenominateurNul(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurSyntaxe {
    #[error("expression incomplète")]
    FinInattendue,
    #[error("jeton inattendu: '{0}'")]
    JetonInattendu(String),
    #[error("parenthèse fermante sans ouvrante")]
    ParentheseNonOuverte,
    #[error(transparent)]
    Litteral(#[from] ErreurLitteral),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("division par zéro")]
    DivisionParZero,
    #[error("résultat négatif")]
    ResultatNegatif,
    #[error(transparent)]
    Syntaxe(#[from] ErreurSyntaxe),
    #[error("faute structurelle: {0}")]
    Structure(String),
}

impl ErreurEval {
    /// Vrai si l’échec trahit un invariant cassé (pile RPN incohérente),
    /// et non une condition normale du domaine.
    pub fn est_structurelle(&self) -> bool {
        matches!(self, ErreurEval::Structure(_))
    }
}

impl From<ErreurLitteral> for ErreurEval {
    fn from(e: ErreurLitteral) -> Self {
        ErreurEval::Syntaxe(ErreurSyntaxe::Litteral(e))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurGeneration {
    #[error(
        "seulement {produits} exercices distincts sur {demandes} demandés après {tentatives} tentatives (plage trop petite ?)"
    )]
    Insuffisant {
        produits: usize,
        demandes: usize,
        tentatives: usize,
    },
    #[error(transparent)]
    Noyau(#[from] ErreurEval),
}
