// src/main.rs
//
// Calculatrice scientifique — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 ou rejeu sans fenêtre (--rejouer)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;
#[cfg(not(target_arch = "wasm32"))]
mod rejeu;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice scientifique";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use clap::Parser;

    /// Filtre de logs si RUST_LOG est absent.
    const FILTRE_LOG_DEFAUT: &str = "info";

    #[derive(Parser, Debug)]
    #[command(version, about = "Calculatrice scientifique (egui)")]
    pub struct Args {
        /// Rejoue une suite de touches sans fenêtre, ex. "5 + 3 =" (libellés séparés par des espaces)
        #[arg(long)]
        pub rejouer: Option<String>,

        /// Largeur initiale de la fenêtre
        #[arg(long, default_value_t = 380.0)]
        pub largeur: f32,

        /// Hauteur initiale de la fenêtre
        #[arg(long, default_value_t = 620.0)]
        pub hauteur: f32,
    }

    pub fn init_logs() {
        let filtre = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(FILTRE_LOG_DEFAUT));
        tracing_subscriber::fmt().with_env_filter(filtre).init();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    natif::init_logs();
    let args = natif::Args::parse();

    if let Some(script) = args.rejouer.as_deref() {
        match rejeu::rejouer(script) {
            Ok(etapes) => {
                for (touche, affichage) in &etapes {
                    println!("{touche} → {affichage}");
                }
                return Ok(());
            }
            Err(e) => {
                tracing::error!(erreur = %e, "rejeu interrompu");
                eprintln!("{e}");
                std::process::exit(2);
            }
        }
    }

    tracing::info!(largeur = args.largeur, hauteur = args.hauteur, "démarrage");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([args.largeur, args.hauteur])
            .with_min_inner_size([320.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (une AppCalc = un moteur par page)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        tracing::info!("démarrage web");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
