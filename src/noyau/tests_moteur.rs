//! Tests du moteur : scénarios “boutons” + propriétés.
//!
//! Les scénarios s’écrivent comme une suite de libellés séparés par des espaces,
//! exactement ce que la vue (ou --rejouer) enverrait au moteur.

use proptest::prelude::*;

use super::operations::Operateur;
use super::touches::Chiffre;
use super::{Moteur, Touche};

fn taper(m: &mut Moteur, jetons: &str) {
    for j in jetons.split_whitespace() {
        let t: Touche = j
            .parse()
            .unwrap_or_else(|e| panic!("jeton={j:?} err={e}"));
        m.appuyer(t);
    }
}

fn apres(jetons: &str) -> Moteur {
    let mut m = Moteur::new();
    taper(&mut m, jetons);
    m
}

fn assert_affiche(jetons: &str, attendu: &str) {
    let m = apres(jetons);
    assert_eq!(m.affichage(), attendu, "jetons={jetons:?}");
}

/* ------------------------ État initial ------------------------ */

#[test]
fn etat_initial() {
    let m = Moteur::new();
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.accumulateur(), None);
    assert_eq!(m.operateur_en_attente(), None);
    assert!(!m.attente_saisie());
    assert_eq!(m.memoire(), 0.0);
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn chiffres_tapes_litteralement() {
    assert_affiche("1 2 3", "123");
    assert_affiche("0 5", "5");
    assert_affiche("0 0", "0");
    assert_affiche("1 0 0", "100");
}

#[test]
fn virgule_idempotente() {
    assert_affiche(". .", "0.");
    assert_affiche("3 . . 5", "3.5");
    assert_affiche("3 . 5 .", "3.5");
}

#[test]
fn virgule_apres_operateur_repart_de_zero() {
    assert_affiche("5 + .", "0.");
    assert_affiche("5 + . 5 =", "5.5");
}

/* ------------------------ Opérateurs binaires ------------------------ */

#[test]
fn enchainement_et_reapplication() {
    let mut m = apres("5 + 3 =");
    assert_eq!(m.affichage(), "8");

    // + = sans nouveau chiffre : 8 + 8
    taper(&mut m, "+ =");
    assert_eq!(m.affichage(), "16");
}

#[test]
fn operateur_double_reapplique_la_valeur_affichee() {
    let m = apres("5 + +");
    assert_eq!(m.affichage(), "10");
    assert_eq!(m.accumulateur(), Some(10.0));
    assert_eq!(m.operateur_en_attente(), Some(Operateur::Addition));
}

#[test]
fn evaluation_de_gauche_a_droite() {
    // pas de priorité : (3 + 4) × 2
    assert_affiche("3 + 4 × 2 =", "14");
    assert_affiche("3 + 4 ×", "7");
}

#[test]
fn changement_d_operateur_en_cours() {
    let m = apres("6 + 2 - 1 =");
    assert_eq!(m.affichage(), "7");
    assert_eq!(m.accumulateur(), None);
    assert_eq!(m.operateur_en_attente(), None);
}

#[test]
fn division_par_zero_affiche_zero() {
    assert_affiche("5 ÷ 0 =", "0");
    assert_affiche("5 1/x", "0.2");
    assert_affiche("0 1/x", "0");
}

#[test]
fn puissance_modulo() {
    assert_affiche("2 ^ 1 0 =", "1024");
    assert_affiche("7 mod 3 =", "1");
    assert_affiche("7 ± mod 3 =", "-1");
    assert_affiche("7 mod 0 =", "NaN");
}

#[test]
fn debordement_vers_infini() {
    assert_affiche("9 9 9 ^ 9 9 9 =", "Infinity");
    assert_affiche("9 9 9 ± ^ 9 9 9 =", "-Infinity");
}

#[test]
fn flottants_non_arrondis() {
    assert_affiche(". 1 + . 2 =", "0.30000000000000004");
}

#[test]
fn affichage_egalite_arrondie_au_pair() {
    // 1729868768220442.25 : deux formes courtes possibles, la paire l’emporte
    assert_affiche(
        "1 7 2 9 8 6 8 7 6 8 2 2 0 4 4 2 . 2 5 + 0 =",
        "1729868768220442.2",
    );
}

#[test]
fn egal_inerte_sans_operation() {
    let mut m = apres("7 =");
    assert_eq!(m.affichage(), "7");
    assert!(!m.attente_saisie());

    // `=` n’a rien changé : le chiffre suivant s’ajoute
    taper(&mut m, "1");
    assert_eq!(m.affichage(), "71");
}

#[test]
fn egal_remet_en_attente() {
    let mut m = apres("2 + 2 =");
    assert!(m.attente_saisie());
    taper(&mut m, "9");
    assert_eq!(m.affichage(), "9");
}

/* ------------------------ Fonctions scientifiques ------------------------ */

#[test]
fn factorielle() {
    assert_affiche("5 x!", "120");
    assert_affiche("0 x!", "1");
    assert_affiche("1 ± x!", "NaN");
    assert_affiche("2 . 5 x!", "NaN");
    assert_affiche("2 5 x!", "1.5511210043330986e+25");
    assert_affiche("1 7 1 x!", "Infinity");
}

#[test]
fn fonctions_remettent_en_attente() {
    let mut m = apres("8 1 √");
    assert_eq!(m.affichage(), "9");
    assert!(m.attente_saisie());
    taper(&mut m, "4");
    assert_eq!(m.affichage(), "4");
}

#[test]
fn constantes_et_oppose() {
    assert_affiche("π", "3.141592653589793");
    assert_affiche("1 2 e", "2.718281828459045");
    assert_affiche("5 ±", "-5");
    assert_affiche("0 ±", "0");
    assert_affiche("4 x²", "16");
    assert_affiche("1 0 0 0 log", "3");
    assert_affiche("1 ln", "0");
}

#[test]
fn domaines_invalides_donnent_nan_ou_infini() {
    assert_affiche("4 ± √", "NaN");
    assert_affiche("0 log", "-Infinity");
    assert_affiche("1 ± ln", "NaN");
}

#[test]
fn trig_en_degres() {
    let m = apres("3 0 sin");
    let v: f64 = m.affichage().parse().expect("nombre");
    assert!((v - 0.5).abs() < 1e-12, "sin(30°)={v}");

    assert_affiche("0 cos", "1");
    assert_affiche("0 tan", "0");
}

#[test]
fn fonction_ne_touche_pas_a_l_operation_en_attente() {
    // 3 + √16 = 7
    assert_affiche("3 + 1 6 √ =", "7");
}

/* ------------------------ Accumulateur NaN ------------------------ */

#[test]
fn accumulateur_nan_compte_pour_zero_a_l_enchainement() {
    let m = apres("1 ± x! + 5 +");
    assert_eq!(m.affichage(), "5");
    assert_eq!(m.accumulateur(), Some(5.0));
}

#[test]
fn accumulateur_nan_garde_tel_quel_par_egal() {
    assert_affiche("1 ± x! + 5 =", "NaN");
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn memoire_aller_retour() {
    let mut m = apres("7 MS C MR");
    assert_eq!(m.affichage(), "7");
    assert_eq!(m.memoire(), 7.0);

    taper(&mut m, "C C");
    assert_eq!(m.memoire(), 7.0, "C ne touche pas la mémoire");

    taper(&mut m, "MC MR");
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.memoire(), 0.0);
}

#[test]
fn memoire_cumul() {
    let mut m = apres("5 M+ 3 M+");
    // 5 puis 53 (le 3 s’ajoute à l’affichage "5")
    assert_eq!(m.memoire(), 58.0);

    taper(&mut m, "C 8 M-");
    assert_eq!(m.memoire(), 50.0);

    taper(&mut m, "MR");
    assert_eq!(m.affichage(), "50");
}

#[test]
fn rappel_memoire_remet_en_attente() {
    assert_affiche("7 MS C 1 MR 2", "2");
}

#[test]
fn memoire_ne_touche_pas_l_operation() {
    let m = apres("4 + 9 MS =");
    assert_eq!(m.affichage(), "13");
    assert_eq!(m.memoire(), 9.0);
}

/* ------------------------ C / CE ------------------------ */

#[test]
fn effacer_entree_garde_l_operation() {
    assert_affiche("4 + 9 CE 2 =", "6");
}

#[test]
fn effacer_remet_tout_sauf_memoire() {
    let mut m = apres("4 MS + 9");
    taper(&mut m, "C");
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.accumulateur(), None);
    assert_eq!(m.operateur_en_attente(), None);
    assert!(!m.attente_saisie());
    assert_eq!(m.memoire(), 4.0);

    // après C, `=` est inerte
    taper(&mut m, "3 =");
    assert_eq!(m.affichage(), "3");
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn prop_chiffres_affiches_sans_zeros_initiaux(chiffres in proptest::collection::vec(0u8..=9, 1..40)) {
        let mut m = apres("3 + 4 = C");
        for d in &chiffres {
            m.chiffre(Chiffre::new(*d).expect("0..=9"));
        }

        let tape: String = chiffres.iter().map(|d| char::from(b'0' + d)).collect();
        let sans_zeros = tape.trim_start_matches('0');
        let attendu = if sans_zeros.is_empty() { "0" } else { sans_zeros };
        prop_assert_eq!(m.affichage(), attendu);
    }

    #[test]
    fn prop_une_seule_virgule(
        avant in proptest::collection::vec(0u8..=9, 0..10),
        virgules in 1usize..5,
        apres_v in proptest::collection::vec(0u8..=9, 0..10),
    ) {
        let mut m = Moteur::new();
        for d in &avant {
            m.chiffre(Chiffre::new(*d).expect("0..=9"));
        }
        for _ in 0..virgules {
            m.virgule();
        }
        for d in &apres_v {
            m.chiffre(Chiffre::new(*d).expect("0..=9"));
        }
        prop_assert_eq!(m.affichage().matches('.').count(), 1);
    }

    #[test]
    fn prop_affichage_jamais_vide(
        jetons in proptest::collection::vec(
            proptest::sample::select(vec![
                "0", "1", "7", ".", "+", "-", "×", "÷", "^", "mod", "sin", "√", "1/x",
                "x!", "±", "π", "MS", "MR", "M+", "C", "CE", "=",
            ]),
            0..30,
        )
    ) {
        let m = apres(&jetons.join(" "));
        prop_assert!(!m.affichage().is_empty());
    }
}

#[test]
fn appuyer_equivaut_aux_methodes() {
    let mut a = Moteur::new();
    taper(&mut a, "1 2 + 3 =");

    let mut b = Moteur::new();
    for d in [1, 2] {
        b.chiffre(Chiffre::new(d).expect("0..=9"));
    }
    b.appliquer_operateur(Operateur::Addition);
    b.chiffre(Chiffre::new(3).expect("0..=9"));
    b.egal();

    assert_eq!(a, b);
    assert_eq!(b.affichage(), "15");
}
