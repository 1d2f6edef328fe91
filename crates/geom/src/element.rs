//! static element table mapping atomic symbols to atomic numbers

use crate::GeomError;

/// atomic symbols indexed by atomic number, with a placeholder at 0
pub const NUMBER_TO_SYMBOL: [&str; 55] = [
    "X", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg",
    "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn",
    "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb",
    "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe",
];

/// look up the atomic number for `symbol`. the lookup is case-sensitive, so
/// neither "h" nor "PD" names an element
pub fn atomic_number(symbol: &str) -> Result<usize, GeomError> {
    NUMBER_TO_SYMBOL
        .iter()
        .position(|&s| s == symbol)
        .filter(|&n| n != 0)
        .ok_or_else(|| GeomError::UnknownElement(symbol.to_owned()))
}
