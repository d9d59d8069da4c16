// src/noyau/jetons.rs

use tracing::trace;

use super::expr::Op;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte brut : la forme (N, N/N, N'N/N) est vérifiée plus tard par lecture.rs
    Nombre(String),
    Op(Op),
    LPar,
    RPar,
}

fn est_car_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '/' || c == '\''
}

/// Tokenize une ligne d’exercice en jetons.
/// Supporte:
/// - un `=` final unique (ex: "1 + 2 =")
/// - nombres : suite maximale de chiffres, `/` et `'` (ex: 2'1/3)
/// - opérateurs + - × ÷
/// - parenthèses ( )
///
/// Les espaces sont retirés avant la lecture ("1 2" se lit 12).
/// Tout autre caractère inconnu est ignoré (il coupe un nombre) : pas d’erreur ici.
/// Une entrée vide donne une suite vide.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let compacte: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let s = compacte.strip_suffix('=').unwrap_or(&compacte);

    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ => {
                if let Some(op) = Op::depuis_car(c) {
                    out.push(Tok::Op(op));
                } else if est_car_nombre(c) {
                    let start = i;
                    while i < chars.len() && est_car_nombre(chars[i]) {
                        i += 1;
                    }
                    out.push(Tok::Nombre(chars[start..i].iter().collect()));
                    continue;
                } else {
                    trace!(caractere = %c, "caractère ignoré");
                }
            }
        }
        i += 1;
    }

    out
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Nombre(n) => n.clone(),
            Tok::Op(op) => op.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
