// src/noyau/operations.rs
//
// Table des opérations (binaires + fonctions scientifiques)
// ---------------------------------------------------------
// Politique “sentinelles” : aucune opération n’échoue.
// - division par zéro, 1/0 -> 0
// - factorielle invalide   -> NaN
// - dépassement            -> ±∞ (flottant standard)

use std::f64::consts::{E, PI};

/// Opérateurs binaires (attendent un opérande droit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Puissance,
    Modulo,
}

impl Operateur {
    /// Libellé du bouton.
    pub const fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
            Operateur::Puissance => "^",
            Operateur::Modulo => "mod",
        }
    }

    /// a (op) b
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Addition => a + b,
            Operateur::Soustraction => a - b,
            Operateur::Multiplication => a * b,
            Operateur::Division => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
            Operateur::Puissance => puissance(a, b),
            // `%` flottant = reste tronqué (signe du dividende)
            Operateur::Modulo => a % b,
        }
    }
}

/// Fonctions scientifiques / unaires (agissent sur la valeur affichée).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Racine,
    Carre,
    Inverse,
    Factorielle,
    Pi,
    E,
    Oppose,
}

impl Fonction {
    pub const fn symbole(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Racine => "√",
            Fonction::Carre => "x²",
            Fonction::Inverse => "1/x",
            Fonction::Factorielle => "x!",
            Fonction::Pi => "π",
            Fonction::E => "e",
            Fonction::Oppose => "±",
        }
    }

    /// f(x). Les angles sont en DEGRÉS ; π et e ignorent x.
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Fonction::Sin => (degres_vers_radians(x)).sin(),
            Fonction::Cos => (degres_vers_radians(x)).cos(),
            Fonction::Tan => (degres_vers_radians(x)).tan(),
            Fonction::Log => x.log10(),
            Fonction::Ln => x.ln(),
            Fonction::Racine => x.sqrt(),
            Fonction::Carre => x * x,
            Fonction::Inverse => {
                if x != 0.0 {
                    1.0 / x
                } else {
                    0.0
                }
            }
            Fonction::Factorielle => factorielle(x),
            Fonction::Pi => PI,
            Fonction::E => E,
            Fonction::Oppose => -x,
        }
    }
}

fn degres_vers_radians(x: f64) -> f64 {
    (x * PI) / 180.0
}

/// a^b avec les cas limites d’un `pow` IEEE “strict” :
/// pow(x, NaN) = NaN et pow(±1, ±∞) = NaN (powf renverrait 1).
fn puissance(a: f64, b: f64) -> f64 {
    if b.is_nan() {
        return f64::NAN;
    }
    if b.is_infinite() && a.abs() == 1.0 {
        return f64::NAN;
    }
    a.powf(b)
}

/// n! itératif (2·3·…·n).
///
/// - n < 0 ou non entier (NaN inclus) -> NaN
/// - 0! = 1! = 1
/// - pas de plafond : le produit déborde vers +∞ (on s’arrête dès qu’il y est,
///   la suite ne changerait plus rien ; ∞! termine donc aussi)
pub fn factorielle(n: f64) -> f64 {
    if n < 0.0 || n != n.floor() {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }

    let mut produit = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        produit *= i;
        if produit.is_infinite() {
            break;
        }
        i += 1.0;
    }
    produit
}
