//! Noyau exact Q-pur (exercices d’arithmétique)
//!
//! Organisation interne :
//! - lecture.rs    : nombres écrits N, N/N, N'N/N -> rationnel exact
//! - format.rs     : rationnel -> forme scolaire (réponses)
//! - jetons.rs     : tokenisation (indulgente)
//! - expr.rs       : AST + règles de domaine des opérateurs
//! - analyse.rs    : descente récursive -> Expr
//! - rpn.rs        : shunting-yard + évaluation sur pile
//! - eval.rs       : pipeline texte -> valeur, parcours d’AST
//! - canon.rs      : clé canonique (commutativité + et ×)
//! - generateur.rs : tirage contraint d’une série sans doublons
//! - correction.rs : comparaison exercices / réponses
//! - erreur.rs     : taxonomie des échecs

pub mod analyse;
pub mod canon;
pub mod correction;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod generateur;
pub mod jetons;
pub mod lecture;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use correction::{corriger, Bilan};
pub use format::format_nombre;
pub use generateur::{generer_exercices, Consigne, Exercice};
