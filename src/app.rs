// src/app.rs
//
// Lanceur (ligne de commande)
// ---------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Cli : arguments (clap), ramenés à une Demande puis à un Mode (etat.rs)
// - executer : noyau d’abord, fichiers ensuite (rien n’est écrit si le noyau échoue)
//
// Génération :  -n <nombre> -r <plage> [--ops-max k] [--graine g] [--tentatives t]
// Correction :  -e <Exercises.txt> -a <Answers.txt>
// Sortie     :  --sortie <dossier> (défaut ".")

pub mod etat;
pub mod vue;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::noyau::{corriger, generer_exercices, Consigne};

use etat::{Demande, Mode, OPS_MAX_DEFAUT, TENTATIVES_DEFAUT};

/// Exercices d’arithmétique exacts (naturels et fractions) : génération et correction.
#[derive(Parser, Debug)]
#[command(name = "exercices-qpur", version, about, long_about = None)]
pub struct Cli {
    /// Nombre d’exercices à générer
    #[arg(short = 'n', value_name = "NOMBRE")]
    pub nombre: Option<usize>,

    /// Plage des nombres tirés (borne exclusive, au moins 1)
    #[arg(short = 'r', value_name = "PLAGE")]
    pub borne: Option<u64>,

    /// Fichier d’exercices à corriger
    #[arg(short = 'e', value_name = "FICHIER")]
    pub exercices: Option<PathBuf>,

    /// Fichier de réponses à corriger
    #[arg(short = 'a', value_name = "FICHIER")]
    pub reponses: Option<PathBuf>,

    /// Nombre maximal d’opérateurs par exercice
    #[arg(long, value_name = "K", default_value_t = OPS_MAX_DEFAUT)]
    pub ops_max: usize,

    /// Graine du tirage (même graine => même série)
    #[arg(long, value_name = "GRAINE")]
    pub graine: Option<u64>,

    /// Candidats autorisés par exercice demandé
    #[arg(long, value_name = "T", default_value_t = TENTATIVES_DEFAUT)]
    pub tentatives: usize,

    /// Dossier où écrire Exercises.txt / Answers.txt / Grade.txt
    #[arg(long, value_name = "DOSSIER", default_value = ".")]
    pub sortie: PathBuf,
}

impl Cli {
    pub fn demande(&self) -> Demande {
        Demande {
            nombre: self.nombre,
            borne: self.borne,
            exercices: self.exercices.clone(),
            reponses: self.reponses.clone(),
            ops_max: self.ops_max,
            tentatives: self.tentatives,
            graine: self.graine,
        }
    }

    pub fn executer(&self) -> Result<()> {
        match Mode::depuis(self.demande())? {
            Mode::Generation { consigne, graine } => generer(&consigne, graine, &self.sortie),
            Mode::Correction {
                exercices,
                reponses,
            } => corriger_fichiers(&exercices, &reponses, &self.sortie),
        }
    }
}

fn generer(consigne: &Consigne, graine: Option<u64>, sortie: &Path) -> Result<()> {
    let mut rng = match graine {
        Some(g) => StdRng::seed_from_u64(g),
        None => StdRng::from_os_rng(),
    };
    info!(
        nombre = consigne.nombre,
        plage = consigne.borne,
        ops_max = consigne.ops_max,
        ?graine,
        "génération"
    );

    let exercices = generer_exercices(&mut rng, consigne)?;
    vue::ecrire_serie(sortie, &exercices)?;
    Ok(())
}

fn corriger_fichiers(exercices: &Path, reponses: &Path, sortie: &Path) -> Result<()> {
    let ex = vue::lire_lignes(exercices)?;
    let rep = vue::lire_lignes(reponses)?;

    if ex.len() != rep.len() {
        warn!(
            exercices = ex.len(),
            reponses = rep.len(),
            "longueurs différentes : seules les paires complètes sont corrigées"
        );
    }

    let bilan = corriger(&ex, &rep)?;
    vue::ecrire_bilan(sortie, &bilan)?;
    Ok(())
}
