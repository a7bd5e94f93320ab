//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder UN moteur par vue/session et lui transmettre les touches.
//! La vue ne lit que `affichage()` et quelques indicateurs (mémoire, opération en cours).
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par le noyau.
//! - Pas de singleton global : chaque AppCalc a son propre Moteur.

use crate::noyau::{Moteur, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: Moteur,

    // --- UX ---
    // Dernière touche reçue (bouton ou clavier), pour la mettre en évidence.
    pub derniere_touche: Option<Touche>,
}

impl AppCalc {
    /// Transmet une touche au moteur (seul point d’entrée de la vue).
    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.appuyer(touche);
        self.derniere_touche = Some(touche);
    }

    pub fn affichage(&self) -> &str {
        self.moteur.affichage()
    }

    /// Faux juste après opérateur / fonction / = / MR : le prochain chiffre remplacera l’affichage.
    pub fn saisie_en_cours(&self) -> bool {
        !self.moteur.attente_saisie()
    }

    /// Indicateur "M" : mémoire non nulle.
    pub fn memoire_active(&self) -> bool {
        self.moteur.memoire() != 0.0
    }

    /// Ligne d’opération en cours, ex. "8 +" (vide si rien en attente).
    pub fn operation_en_cours(&self) -> String {
        match (self.moteur.accumulateur(), self.moteur.operateur_en_attente()) {
            (Some(acc), Some(op)) => {
                format!("{} {}", crate::noyau::nombre::texte_de(acc), op.symbole())
            }
            _ => String::new(),
        }
    }
}
