// src/rejeu.rs
//
// Rejeu sans fenêtre (`--rejouer "5 + 3 ="`)
// ------------------------------------------
// Un moteur neuf reçoit les jetons un par un ; on garde l’affichage après chacun.
// Jeton inconnu => erreur (rien n’est joué après).

use crate::noyau::{ErreurTouche, Moteur, Touche};

/// (touche, affichage après la touche), dans l’ordre.
pub fn rejouer(script: &str) -> Result<Vec<(Touche, String)>, ErreurTouche> {
    let touches = script
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Touche>, _>>()?;

    let mut moteur = Moteur::new();
    let mut etapes = Vec::with_capacity(touches.len());
    for t in touches {
        moteur.appuyer(t);
        etapes.push((t, moteur.affichage().to_string()));
    }
    Ok(etapes)
}
