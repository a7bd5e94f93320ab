// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : affichage (monospace, aligné à droite) + indicateurs (M, opération en cours)
// - Boutons : rangées de noyau::touches::DISPOSITION, largeur répartie par rangée
//
// La vue ne calcule rien : elle envoie des Touche et relit l’affichage.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::touches::DISPOSITION;
use crate::noyau::Touche;

/// Hauteur d’un bouton (tactile-friendly).
const HAUTEUR_BOUTON: f32 = 44.0;

/// Taille du texte de l’écran.
const TAILLE_AFFICHAGE: f32 = 34.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_boutons(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Ligne du haut : M + opération en attente
                ui.horizontal(|ui| {
                    let m = if self.memoire_active() { "M" } else { " " };
                    ui.monospace(m);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(self.operation_en_cours());
                    });
                });

                // Affichage (texte brut du moteur, sans reformatage).
                // Atténué tant que le prochain chiffre doit le remplacer.
                let mut texte = egui::RichText::new(self.affichage())
                    .monospace()
                    .size(TAILLE_AFFICHAGE);
                texte = if self.saisie_en_cours() {
                    texte.strong()
                } else {
                    texte.weak()
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(texte);
                });
            });
    }

    fn ui_boutons(&mut self, ui: &mut egui::Ui) {
        for rangee in DISPOSITION {
            self.ui_rangee(ui, rangee);
        }
    }

    fn ui_rangee(&mut self, ui: &mut egui::Ui, rangee: &[Touche]) {
        let n = rangee.len().max(1) as f32;
        let ecart = ui.spacing().item_spacing.x;
        let largeur = ((ui.available_width() - ecart * (n - 1.0)) / n).max(32.0);

        ui.horizontal(|ui| {
            for &touche in rangee {
                self.bouton(ui, touche, largeur);
            }
        });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, largeur: f32) {
        let libelle = egui::RichText::new(touche.to_string()).size(18.0);
        let resp = ui
            .add_sized(
                [largeur, HAUTEUR_BOUTON],
                egui::Button::new(libelle).selected(self.derniere_touche == Some(touche)),
            )
            .on_hover_text(aide(touche));

        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}

/// Infobulle courte par bouton.
fn aide(touche: Touche) -> &'static str {
    use crate::noyau::operations::{Fonction, Operateur};
    use crate::noyau::touches::CommandeMemoire;

    match touche {
        Touche::Chiffre(_) => "Chiffre",
        Touche::Virgule => "Virgule décimale",
        Touche::Operateur(Operateur::Modulo) => "Reste (signe du dividende)",
        Touche::Operateur(Operateur::Puissance) => "x puissance y",
        Touche::Operateur(Operateur::Division) => "Division (÷0 donne 0)",
        Touche::Operateur(_) => "Opérateur",
        Touche::Fonction(Fonction::Sin | Fonction::Cos | Fonction::Tan) => "Angle en degrés",
        Touche::Fonction(Fonction::Log) => "Logarithme décimal",
        Touche::Fonction(Fonction::Ln) => "Logarithme népérien",
        Touche::Fonction(Fonction::Inverse) => "Inverse (1/0 donne 0)",
        Touche::Fonction(Fonction::Factorielle) => "Factorielle (entier ≥ 0)",
        Touche::Fonction(_) => "Fonction",
        Touche::Memoire(CommandeMemoire::Effacer) => "Mémoire à 0",
        Touche::Memoire(CommandeMemoire::Rappeler) => "Rappel mémoire",
        Touche::Memoire(CommandeMemoire::Stocker) => "Stocke l’affichage",
        Touche::Memoire(CommandeMemoire::Ajouter) => "Ajoute l’affichage à la mémoire",
        Touche::Memoire(CommandeMemoire::Retrancher) => "Retranche l’affichage de la mémoire",
        Touche::Effacer => "Tout effacer (sauf mémoire)",
        Touche::EffacerEntree => "Efface seulement l’entrée",
        Touche::Egal => "Résultat",
    }
}
