//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - moteur.rs     : machine à états (affichage, accumulateur, opérateur, mémoire)
//! - operations.rs : opérateurs binaires + fonctions scientifiques (sentinelles 0 / NaN)
//! - nombre.rs     : f64 <-> texte de l’affichage
//! - touches.rs    : jetons d’entrée + disposition des boutons

pub mod moteur;
pub mod nombre;
pub mod operations;
pub mod touches;

#[cfg(test)]
mod tests_moteur;

// API publique minimale
pub use moteur::Moteur;
pub use touches::{ErreurTouche, Touche};
