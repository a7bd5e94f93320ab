//! Noyau — moteur de la calculatrice (machine à états)
//!
//! Une méthode par classe d’entrée (chiffre, virgule, opérateur, fonction,
//! mémoire, C, CE, =) et une sortie observable : `affichage()`.
//!
//! Contrats :
//! - l’affichage n’est jamais vide ("0" par défaut)
//! - aucune opération n’échoue : les cas “impossibles” deviennent 0 ou NaN
//! - la mémoire survit à C ; seul MC la remet à 0

use super::nombre::{analyser, texte_de};
use super::operations::{Fonction, Operateur};
use super::touches::{Chiffre, CommandeMemoire, Touche};

#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    affichage: String,
    /// Opérande gauche en attente d’un opérateur binaire.
    accumulateur: Option<f64>,
    operateur: Option<Operateur>,
    /// Vrai juste après opérateur / fonction / = / MR : le prochain chiffre repart de zéro.
    attente_saisie: bool,
    memoire: f64,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            accumulateur: None,
            operateur: None,
            attente_saisie: false,
            memoire: 0.0,
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn accumulateur(&self) -> Option<f64> {
        self.accumulateur
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn attente_saisie(&self) -> bool {
        self.attente_saisie
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    fn valeur_affichee(&self) -> f64 {
        analyser(&self.affichage)
    }

    fn afficher(&mut self, x: f64) {
        self.affichage = texte_de(x);
    }

    /* ------------------------ Entrées ------------------------ */

    /// Dispatch d’une touche vers l’opération correspondante.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Virgule => self.virgule(),
            Touche::Operateur(op) => self.appliquer_operateur(op),
            Touche::Fonction(f) => self.appliquer_fonction(f),
            Touche::Memoire(cmd) => self.commande_memoire(cmd),
            Touche::Effacer => self.effacer(),
            Touche::EffacerEntree => self.effacer_entree(),
            Touche::Egal => self.egal(),
        }
        tracing::debug!(%touche, affichage = %self.affichage, "touche");
    }

    /// Pas de borne sur le nombre de chiffres.
    pub fn chiffre(&mut self, d: Chiffre) {
        let c = d.en_char();
        if self.attente_saisie {
            self.affichage = c.to_string();
            self.attente_saisie = false;
        } else if self.affichage == "0" {
            self.affichage = c.to_string();
        } else {
            self.affichage.push(c);
        }
    }

    /// Idempotent : un seul '.' par nombre.
    pub fn virgule(&mut self) {
        if self.attente_saisie {
            self.affichage = "0.".to_string();
            self.attente_saisie = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// Enchaînement : `5 + 3 +` calcule 8 et attend le prochain opérande.
    /// `+ +` sans chiffre ré-applique l’opération sur la valeur affichée.
    pub fn appliquer_operateur(&mut self, op: Operateur) {
        let x = self.valeur_affichee();

        match (self.accumulateur, self.operateur) {
            (None, _) => self.accumulateur = Some(x),
            (Some(acc), Some(en_attente)) => {
                // un accumulateur NaN compte pour 0 à l’enchaînement
                let gauche = if acc.is_nan() { 0.0 } else { acc };
                let r = en_attente.appliquer(gauche, x);
                self.afficher(r);
                self.accumulateur = Some(r);
            }
            (Some(_), None) => {}
        }

        self.operateur = Some(op);
        self.attente_saisie = true;
    }

    pub fn appliquer_fonction(&mut self, f: Fonction) {
        let x = self.valeur_affichee();
        self.afficher(f.appliquer(x));
        self.attente_saisie = true;
    }

    /// Ne touche jamais à l’accumulateur ni à l’opérateur en attente.
    pub fn commande_memoire(&mut self, cmd: CommandeMemoire) {
        let x = self.valeur_affichee();
        match cmd {
            CommandeMemoire::Effacer => self.memoire = 0.0,
            CommandeMemoire::Rappeler => {
                self.afficher(self.memoire);
                self.attente_saisie = true;
            }
            CommandeMemoire::Stocker => self.memoire = x,
            CommandeMemoire::Ajouter => self.memoire += x,
            CommandeMemoire::Retrancher => self.memoire -= x,
        }
    }

    /// C : tout sauf la mémoire.
    pub fn effacer(&mut self) {
        self.affichage = "0".to_string();
        self.accumulateur = None;
        self.operateur = None;
        self.attente_saisie = false;
    }

    /// CE : l’affichage seulement.
    pub fn effacer_entree(&mut self) {
        self.affichage = "0".to_string();
    }

    /// Sans accumulateur ET opérateur, `=` est inerte.
    pub fn egal(&mut self) {
        let (Some(acc), Some(op)) = (self.accumulateur, self.operateur) else {
            return;
        };
        let r = op.appliquer(acc, self.valeur_affichee());
        self.afficher(r);
        self.accumulateur = None;
        self.operateur = None;
        self.attente_saisie = true;
    }
}
