// src/noyau/touches.rs
//
// Jetons d’entrée (touches)
// -------------------------
// La vue ne fait que produire des `Touche` et relire l’affichage.
// - Display  : libellé du bouton
// - FromStr  : libellés + alias ASCII ("*", "/", "%", "pi", "sqrt"…)
// - DISPOSITION : rangées de boutons, de haut en bas

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::operations::{Fonction, Operateur};

/// Chiffre décimal 0..=9 (invariant garanti à la construction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chiffre(u8);

impl Chiffre {
    pub const fn new(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Chiffre(d))
        } else {
            None
        }
    }

    pub fn depuis_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Chiffre::new(d as u8))
    }

    pub const fn en_char(self) -> char {
        (b'0' + self.0) as char
    }
}

/// Commandes du registre mémoire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandeMemoire {
    /// MC
    Effacer,
    /// MR
    Rappeler,
    /// MS
    Stocker,
    /// M+
    Ajouter,
    /// M-
    Retrancher,
}

impl CommandeMemoire {
    pub const fn symbole(self) -> &'static str {
        match self {
            CommandeMemoire::Effacer => "MC",
            CommandeMemoire::Rappeler => "MR",
            CommandeMemoire::Stocker => "MS",
            CommandeMemoire::Ajouter => "M+",
            CommandeMemoire::Retrancher => "M-",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Chiffre(Chiffre),
    Virgule,
    Operateur(Operateur),
    Fonction(Fonction),
    Memoire(CommandeMemoire),
    /// C
    Effacer,
    /// CE
    EffacerEntree,
    Egal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurTouche {
    #[error("touche inconnue : {0:?}")]
    Inconnue(String),
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Touche::Chiffre(c) => write!(f, "{}", c.en_char()),
            Touche::Virgule => f.write_str("."),
            Touche::Operateur(op) => f.write_str(op.symbole()),
            Touche::Fonction(fx) => f.write_str(fx.symbole()),
            Touche::Memoire(m) => f.write_str(m.symbole()),
            Touche::Effacer => f.write_str("C"),
            Touche::EffacerEntree => f.write_str("CE"),
            Touche::Egal => f.write_str("="),
        }
    }
}

impl FromStr for Touche {
    type Err = ErreurTouche;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = Chiffre::depuis_char(c) {
                return Ok(Touche::Chiffre(d));
            }
        }

        let t = match s {
            "." | "," => Touche::Virgule,

            "+" => Touche::Operateur(Operateur::Addition),
            "-" => Touche::Operateur(Operateur::Soustraction),
            "×" | "*" => Touche::Operateur(Operateur::Multiplication),
            "÷" | "/" => Touche::Operateur(Operateur::Division),
            "^" => Touche::Operateur(Operateur::Puissance),
            "mod" | "%" => Touche::Operateur(Operateur::Modulo),

            "sin" => Touche::Fonction(Fonction::Sin),
            "cos" => Touche::Fonction(Fonction::Cos),
            "tan" => Touche::Fonction(Fonction::Tan),
            "log" => Touche::Fonction(Fonction::Log),
            "ln" => Touche::Fonction(Fonction::Ln),
            "√" | "sqrt" => Touche::Fonction(Fonction::Racine),
            "x²" | "sq" => Touche::Fonction(Fonction::Carre),
            "1/x" | "inv" => Touche::Fonction(Fonction::Inverse),
            "x!" | "!" => Touche::Fonction(Fonction::Factorielle),
            "π" | "pi" => Touche::Fonction(Fonction::Pi),
            "e" => Touche::Fonction(Fonction::E),
            "±" | "neg" => Touche::Fonction(Fonction::Oppose),

            "MC" => Touche::Memoire(CommandeMemoire::Effacer),
            "MR" => Touche::Memoire(CommandeMemoire::Rappeler),
            "MS" => Touche::Memoire(CommandeMemoire::Stocker),
            "M+" => Touche::Memoire(CommandeMemoire::Ajouter),
            "M-" => Touche::Memoire(CommandeMemoire::Retrancher),

            "C" => Touche::Effacer,
            "CE" => Touche::EffacerEntree,
            "=" => Touche::Egal,

            autre => return Err(ErreurTouche::Inconnue(autre.to_string())),
        };
        Ok(t)
    }
}

/// Touche correspondant à un caractère tapé au clavier (None = ignoré).
///
/// Seuls les caractères “texte” : Entrée / Échap / Suppr sont gérés par la vue.
pub fn touche_clavier(c: char) -> Option<Touche> {
    if let Some(d) = Chiffre::depuis_char(c) {
        return Some(Touche::Chiffre(d));
    }
    let t = match c {
        '.' | ',' => Touche::Virgule,
        '+' => Touche::Operateur(Operateur::Addition),
        '-' => Touche::Operateur(Operateur::Soustraction),
        '*' | '×' => Touche::Operateur(Operateur::Multiplication),
        '/' | '÷' => Touche::Operateur(Operateur::Division),
        '^' => Touche::Operateur(Operateur::Puissance),
        '%' => Touche::Operateur(Operateur::Modulo),
        '!' => Touche::Fonction(Fonction::Factorielle),
        '=' => Touche::Egal,
        _ => return None,
    };
    Some(t)
}

/* ------------------------ Disposition des boutons ------------------------ */

const fn ch(d: u8) -> Touche {
    Touche::Chiffre(Chiffre(d))
}
const fn op(o: Operateur) -> Touche {
    Touche::Operateur(o)
}
const fn fx(f: Fonction) -> Touche {
    Touche::Fonction(f)
}
const fn mem(m: CommandeMemoire) -> Touche {
    Touche::Memoire(m)
}

/// Rangées de la calculatrice, de haut en bas.
pub const DISPOSITION: [&[Touche]; 9] = [
    &[
        mem(CommandeMemoire::Effacer),
        mem(CommandeMemoire::Rappeler),
        mem(CommandeMemoire::Stocker),
        mem(CommandeMemoire::Ajouter),
        mem(CommandeMemoire::Retrancher),
    ],
    &[
        fx(Fonction::Sin),
        fx(Fonction::Cos),
        fx(Fonction::Tan),
        fx(Fonction::Log),
        fx(Fonction::Ln),
    ],
    &[
        fx(Fonction::Carre),
        fx(Fonction::Racine),
        fx(Fonction::Inverse),
        fx(Fonction::Factorielle),
        op(Operateur::Puissance),
    ],
    &[
        fx(Fonction::Pi),
        fx(Fonction::E),
        Touche::Effacer,
        Touche::EffacerEntree,
        fx(Fonction::Oppose),
    ],
    &[ch(7), ch(8), ch(9), op(Operateur::Division)],
    &[ch(4), ch(5), ch(6), op(Operateur::Multiplication)],
    &[ch(1), ch(2), ch(3), op(Operateur::Soustraction)],
    &[ch(0), Touche::Virgule, op(Operateur::Addition)],
    &[op(Operateur::Modulo), Touche::Egal],
];
