// src/app/vue.rs
//
// Vue fichiers (texte brut UTF-8, une donnée par ligne)
// -----------------------------------------------------
// - Exercises.txt : "<expr> =" ; le numéro d’un exercice est sa position
// - Answers.txt   : la réponse du même exercice (N, N/N, N'N/N)
// - Grade.txt     : rendu du Bilan (deux lignes)
//
// Lecture : lignes rognées, lignes vides écartées, fichier absent = erreur.
// Écriture : tout est rendu avant le premier fichier écrit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::noyau::{format_nombre, Bilan, Exercice};

pub const FICHIER_EXERCICES: &str = "Exercises.txt";
pub const FICHIER_REPONSES: &str = "Answers.txt";
pub const FICHIER_BILAN: &str = "Grade.txt";

/* ------------------------ Lecture ------------------------ */

pub fn lire_lignes(chemin: &Path) -> Result<Vec<String>> {
    let texte = fs::read_to_string(chemin)
        .with_context(|| format!("lecture impossible : {}", chemin.display()))?;
    Ok(lignes_utiles(&texte))
}

fn lignes_utiles(texte: &str) -> Vec<String> {
    texte
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/* ------------------------ Rendus ------------------------ */

fn une_par_ligne(lignes: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for l in lignes {
        out.push_str(&l);
        out.push('\n');
    }
    out
}

pub fn rendu_exercices(exercices: &[Exercice]) -> String {
    une_par_ligne(exercices.iter().map(|e| e.texte.clone()))
}

pub fn rendu_reponses(exercices: &[Exercice]) -> String {
    une_par_ligne(exercices.iter().map(|e| format_nombre(&e.valeur)))
}

/* ------------------------ Écriture ------------------------ */

fn ecrire(chemin: &Path, contenu: &str) -> Result<()> {
    fs::write(chemin, contenu)
        .with_context(|| format!("écriture impossible : {}", chemin.display()))
}

fn preparer_dossier(dossier: &Path) -> Result<()> {
    fs::create_dir_all(dossier)
        .with_context(|| format!("dossier de sortie impossible : {}", dossier.display()))
}

/// Écrit Exercises.txt et Answers.txt ; rend leurs chemins.
pub fn ecrire_serie(dossier: &Path, exercices: &[Exercice]) -> Result<(PathBuf, PathBuf)> {
    let textes = rendu_exercices(exercices);
    let reponses = rendu_reponses(exercices);

    preparer_dossier(dossier)?;
    let chemin_ex = dossier.join(FICHIER_EXERCICES);
    let chemin_rep = dossier.join(FICHIER_REPONSES);
    ecrire(&chemin_ex, &textes)?;
    ecrire(&chemin_rep, &reponses)?;

    info!(
        exercices = %chemin_ex.display(),
        reponses = %chemin_rep.display(),
        nombre = exercices.len(),
        "série écrite"
    );
    Ok((chemin_ex, chemin_rep))
}

pub fn ecrire_bilan(dossier: &Path, bilan: &Bilan) -> Result<PathBuf> {
    preparer_dossier(dossier)?;
    let chemin = dossier.join(FICHIER_BILAN);
    ecrire(&chemin, &bilan.to_string())?;
    info!(bilan = %chemin.display(), "bilan écrit");
    Ok(chemin)
}
