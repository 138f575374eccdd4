// src/model/elements.rs

/// Returns the atomic number (Z) written as the species code of an XSF record.
/// Only species that commonly carry a local moment are listed.
pub fn get_atomic_number(element: &str) -> Option<u32> {
    let z = match element {
        // --- 3d transition metals ---
        "Ti" => 22, "V" => 23, "Cr" => 24, "Mn" => 25,
        "Fe" => 26, "Co" => 27, "Ni" => 28, "Cu" => 29,
        // --- 4d / 5d ---
        "Ru" => 44, "Rh" => 45, "Pd" => 46,
        "Ir" => 77, "Pt" => 78,
        // --- 4f (rare earths) ---
        "Ce" => 58, "Pr" => 59, "Nd" => 60, "Sm" => 62, "Eu" => 63,
        "Gd" => 64, "Tb" => 65, "Dy" => 66, "Ho" => 67, "Er" => 68, "Tm" => 69, "Yb" => 70,
        // --- 5f ---
        "U" => 92, "Np" => 93, "Pu" => 94,
        _ => return None,
    };
    Some(z)
}
