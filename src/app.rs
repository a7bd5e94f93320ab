// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB) + raccourcis clavier

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::touches::touche_clavier;
use crate::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier (natif + web) :
        // - texte tapé : chiffres, '.', ',', + - * / ^ % ! =
        // - Entrée = résultat, Échap = C, Suppr / Retour arrière = CE
        let touches: Vec<Touche> =
            ctx.input(|i| i.events.iter().flat_map(touches_evenement).collect());
        for t in touches {
            self.appuyer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

fn touches_evenement(ev: &egui::Event) -> Vec<Touche> {
    match ev {
        egui::Event::Text(texte) => texte.chars().filter_map(touche_clavier).collect(),
        egui::Event::Key {
            key, pressed: true, ..
        } => touche_speciale(*key).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn touche_speciale(key: egui::Key) -> Option<Touche> {
    match key {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Escape => Some(Touche::Effacer),
        egui::Key::Delete | egui::Key::Backspace => Some(Touche::EffacerEntree),
        _ => None,
    }
}
