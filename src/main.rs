// src/main.rs
//
// Exercices Q-pur — point d’entrée (ligne de commande)
// ----------------------------------------------------
// - Traces : tracing-subscriber sur stderr (RUST_LOG, sinon "info")
// - Arguments : app::Cli (clap)
// - Code de sortie : 0 si tout est écrit, 1 sinon (l’erreur est tracée)
//
// Le calcul vit dans noyau/, les fichiers dans app/vue.rs.

mod app;
mod noyau;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use app::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.executer() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
