// src/noyau/nombre.rs
//
// Nombre <-> texte de l’affichage
// -------------------------------
// - texte_de()  : forme canonique “Number → String” via ryu_js (chiffres minimaux, sans séparateurs)
// - analyser()  : lecture tolérante d’un préfixe numérique (comme un parseFloat)
//
// L’affichage est TOUJOURS re-dérivé d’un f64 via texte_de() : cette conversion
// fixe donc les zéros finaux et le passage en notation exponentielle.

/// Texte canonique d’un f64 (`ryu_js` : même forme que Number → String).
///
/// - NaN -> "NaN", ±∞ -> "Infinity" / "-Infinity", -0 -> "0"
/// - chiffres minimaux qui relisent exactement la même valeur (égalité -> chiffre pair)
/// - notation exponentielle seulement au-delà de 1e21 / en dessous de 1e-6
pub fn texte_de(x: f64) -> String {
    let mut tampon = ryu_js::Buffer::new();
    tampon.format(x).to_string()
}

/// Lecture tolérante : on lit le plus long préfixe numérique valide.
///
/// Accepte : espaces initiaux, signe, "Infinity", `chiffres[.chiffres][e[±]chiffres]`.
/// Rien de lisible => NaN (jamais d’erreur).
pub fn analyser(texte: &str) -> f64 {
    let s = texte.trim_start();
    let octets = s.as_bytes();
    let mut i = 0;

    let mut negatif = false;
    if let Some(&c) = octets.first() {
        if c == b'+' || c == b'-' {
            negatif = c == b'-';
            i += 1;
        }
    }

    if s[i..].starts_with("Infinity") {
        return if negatif {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let avance_chiffres = |mut j: usize| {
        while j < octets.len() && octets[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    let debut = i;
    i = avance_chiffres(i);
    let mut nb_chiffres = i - debut;

    if i < octets.len() && octets[i] == b'.' {
        let apres_point = i + 1;
        i = avance_chiffres(apres_point);
        nb_chiffres += i - apres_point;
    }

    if nb_chiffres == 0 {
        return f64::NAN;
    }

    // Exposant : seulement s’il est complet (au moins un chiffre)
    let mut fin = i;
    if i < octets.len() && (octets[i] == b'e' || octets[i] == b'E') {
        let mut j = i + 1;
        if j < octets.len() && (octets[j] == b'+' || octets[j] == b'-') {
            j += 1;
        }
        let debut_exp = j;
        j = avance_chiffres(j);
        if j > debut_exp {
            fin = j;
        }
    }

    s[..fin].parse::<f64>().unwrap_or(f64::NAN)
}
