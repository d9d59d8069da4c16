//! src/app/etat.rs
//!
//! État du lanceur (sans I/O, sans calcul).
//!
//! Rôle : ramener les réglages de la ligne de commande à UN mode complet
//! (génération ou correction), ou refuser avant toute écriture de fichier.
//!
//! Contrats :
//! - Jamais deux modes à la fois, jamais un mode à moitié donné.
//! - Garde-fous : nombre d’exercices, plage et nombre d’opérateurs bornés (anti-gel).

use std::path::PathBuf;

use thiserror::Error;

use crate::noyau::Consigne;

/// Nombre d’opérateurs par défaut (au plus) dans un exercice.
pub const OPS_MAX_DEFAUT: usize = 3;

/// Garde-fou : au-delà, les exercices ne sont plus lisibles.
pub const OPS_MAX_LIMITE: usize = 10;

/// Garde-fou : taille maximale d’une série.
pub const NOMBRE_MAX: usize = 10_000;

/// Garde-fou : plage maximale des nombres tirés (exercices lisibles à la main).
pub const BORNE_MAX: u64 = 1_000_000;

/// Candidats autorisés par exercice demandé.
pub const TENTATIVES_DEFAUT: usize = 1_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurParametres {
    #[error("aucun mode : donner -n et -r (génération) ou -e et -a (correction)")]
    AucunMode,

    #[error("modes mélangés : -n/-r (génération) et -e/-a (correction) s’excluent")]
    ModesMelanges,

    #[error("paramètre manquant : {0}")]
    Manquant(&'static str),

    #[error("-r doit valoir au moins 1")]
    PlageNulle,

    #[error("-r vaut au plus {max} (reçu {0})", max = BORNE_MAX)]
    PlageTropGrande(u64),

    #[error("--ops-max doit être dans [1, {max}] (reçu {0})", max = OPS_MAX_LIMITE)]
    OpsHorsLimite(usize),

    #[error("-n vaut au plus {max} (reçu {0})", max = NOMBRE_MAX)]
    TropDExercices(usize),

    #[error("--tentatives doit valoir au moins 1")]
    TentativesNulles,
}

/// Réglages bruts, tels que donnés (tout est optionnel sauf les valeurs par défaut).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Demande {
    pub nombre: Option<usize>,
    pub borne: Option<u64>,
    pub exercices: Option<PathBuf>,
    pub reponses: Option<PathBuf>,
    pub ops_max: usize,
    /// Par exercice demandé (le budget total en découle).
    pub tentatives: usize,
    pub graine: Option<u64>,
}

impl Default for Demande {
    fn default() -> Self {
        Self {
            nombre: None,
            borne: None,
            exercices: None,
            reponses: None,
            ops_max: OPS_MAX_DEFAUT,
            tentatives: TENTATIVES_DEFAUT,
            graine: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Écrit Exercises.txt + Answers.txt.
    Generation {
        consigne: Consigne,
        graine: Option<u64>,
    },
    /// Lit deux fichiers, écrit Grade.txt.
    Correction {
        exercices: PathBuf,
        reponses: PathBuf,
    },
}

impl Mode {
    pub fn depuis(d: Demande) -> Result<Mode, ErreurParametres> {
        let generation = d.nombre.is_some() || d.borne.is_some();
        let correction = d.exercices.is_some() || d.reponses.is_some();

        match (generation, correction) {
            (true, true) => Err(ErreurParametres::ModesMelanges),
            (false, false) => Err(ErreurParametres::AucunMode),
            (true, false) => {
                let nombre = d.nombre.ok_or(ErreurParametres::Manquant("-n"))?;
                let borne = d.borne.ok_or(ErreurParametres::Manquant("-r"))?;

                if borne < 1 {
                    return Err(ErreurParametres::PlageNulle);
                }
                if borne > BORNE_MAX {
                    return Err(ErreurParametres::PlageTropGrande(borne));
                }
                if nombre > NOMBRE_MAX {
                    return Err(ErreurParametres::TropDExercices(nombre));
                }
                if !(1..=OPS_MAX_LIMITE).contains(&d.ops_max) {
                    return Err(ErreurParametres::OpsHorsLimite(d.ops_max));
                }
                if d.tentatives == 0 {
                    return Err(ErreurParametres::TentativesNulles);
                }

                Ok(Mode::Generation {
                    consigne: Consigne {
                        nombre,
                        borne,
                        ops_max: d.ops_max,
                        tentatives_max: d.tentatives.saturating_mul(nombre.max(1)),
                    },
                    graine: d.graine,
                })
            }
            (false, true) => Ok(Mode::Correction {
                exercices: d.exercices.ok_or(ErreurParametres::Manquant("-e"))?,
                reponses: d.reponses.ok_or(ErreurParametres::Manquant("-a"))?,
            }),
        }
    }
}
