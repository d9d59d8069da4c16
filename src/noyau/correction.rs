// src/noyau/correction.rs
//
// Correction : exercices et réponses en parallèle (déjà débarrassés des lignes vides).
// - l’exercice est réévalué (eval.rs), la réponse lue comme nombre (lecture.rs)
// - égalité de valeur exacte : "2/2" == "1"
// - une ligne illisible ou sans valeur est comptée fausse, jamais bloquante
// - seule une faute structurelle du noyau interrompt la correction

use std::fmt;

use num_rational::BigRational;
use tracing::{debug, info};

use super::erreur::ErreurEval;
use super::eval::eval_expression;
use super::lecture::parse_nombre;

/// Indices (à partir de 1) des réponses justes et fausses, dans l’ordre rencontré.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub justes: Vec<usize>,
    pub fausses: Vec<usize>,
}

fn liste(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rendu du fichier Grade.txt (deux lignes).
impl fmt::Display for Bilan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correct: {} ({})", self.justes.len(), liste(&self.justes))?;
        writeln!(f, "Wrong: {} ({})", self.fausses.len(), liste(&self.fausses))
    }
}

/// Valeur attendue d’une ligne d’exercice ; None si elle n’en a pas.
fn valeur_attendue(exercice: &str) -> Result<Option<BigRational>, ErreurEval> {
    match eval_expression(exercice) {
        Ok(v) => Ok(v),
        Err(e) if e.est_structurelle() => Err(e),
        Err(e) => {
            debug!(exercice, erreur = %e, "exercice sans valeur");
            Ok(None)
        }
    }
}

pub fn corriger<E, A>(exercices: &[E], reponses: &[A]) -> Result<Bilan, ErreurEval>
where
    E: AsRef<str>,
    A: AsRef<str>,
{
    let mut bilan = Bilan::default();

    for (i, (ex, rep)) in exercices.iter().zip(reponses).enumerate() {
        let numero = i + 1;
        let (ex, rep) = (ex.as_ref(), rep.as_ref());

        let juste = match valeur_attendue(ex)? {
            None => false,
            Some(attendue) => match parse_nombre(rep) {
                Ok(donnee) => donnee == attendue,
                Err(e) => {
                    debug!(numero, reponse = rep, erreur = %e, "réponse illisible");
                    false
                }
            },
        };

        debug!(numero, juste, "ligne corrigée");
        if juste {
            bilan.justes.push(numero);
        } else {
            bilan.fausses.push(numero);
        }
    }

    info!(
        justes = bilan.justes.len(),
        fausses = bilan.fausses.len(),
        "correction terminée"
    );
    Ok(bilan)
}
