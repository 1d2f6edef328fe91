use std::io::Write;

use approx::assert_abs_diff_eq;
use tempfile::NamedTempFile;
use test_case::test_case;

use crate::*;

const WATER: &str = "2\ncomment\nH 0.0 0.0 0.0\nO 0.0 0.0 1.0\n";

#[test]
fn parse_water() {
    let mol: Molecule = WATER.parse().unwrap();
    assert_eq!(mol.natoms(), 2);
    assert_eq!(mol.numbers, vec![1, 8]);
    assert_eq!(mol.positions, vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(mol.charge, 0.0);
    assert_eq!(mol.unit, Unit::Angstrom);
}

/// files with fewer than two lines parse to an empty molecule, not an error
#[test_case(""; "empty")]
#[test_case("3"; "count only")]
#[test_case("3\n"; "count and newline")]
#[test_case("3\ncomment"; "count and comment")]
fn parse_short(s: &str) {
    let mol: Molecule = s.parse().unwrap();
    assert_eq!(mol.natoms(), 0);
    assert!(mol.positions.is_empty());
    assert_eq!(mol.unit, Unit::Angstrom);
}

/// the header count is skipped, not validated against the body
#[test]
fn header_count_ignored() {
    let mol: Molecule = "100\nlying header\nH 0 0 0\n".parse().unwrap();
    assert_eq!(mol.natoms(), 1);
}

#[test]
fn unknown_element_fails_whole_parse() {
    let s = "3\ncomment\nH 0 0 0\nXx 0 0 0\nO 0 0 1\n";
    assert_eq!(
        s.parse::<Molecule>().unwrap_err(),
        GeomError::UnknownElement("Xx".to_owned())
    );
}

#[test_case("H 0 0"; "missing coordinate")]
#[test_case("H 0 zero 0"; "unparsable coordinate")]
#[test_case(""; "blank atom line")]
fn malformed_atom_line(line: &str) {
    let s = format!("1\ncomment\n{line}\n");
    assert!(matches!(
        s.parse::<Molecule>().unwrap_err(),
        GeomError::MalformedAtomLine(_)
    ));
}

#[test]
fn to_bohr() {
    let mut mol: Molecule = WATER.parse().unwrap();
    mol.to_bohr();
    assert_eq!(mol.unit, Unit::Bohr);
    assert_eq!(mol.positions, vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.88973]);
}

#[test]
fn to_bohr_idempotent() {
    let mut mol: Molecule = WATER.parse().unwrap();
    mol.to_bohr();
    let snap = mol.positions.clone();
    mol.to_bohr();
    assert_eq!(mol.positions, snap);
    assert_eq!(mol.unit, Unit::Bohr);
}

#[test]
fn to_angstrom_idempotent() {
    let mut mol: Molecule = WATER.parse().unwrap();
    // already in Angstroms, so the coordinates must not move at all
    let snap = mol.positions.clone();
    mol.to_angstrom();
    assert_eq!(mol.positions, snap);
    assert_eq!(mol.unit, Unit::Angstrom);
}

#[test]
fn round_trip_drifts() {
    let mut mol: Molecule = WATER.parse().unwrap();
    let want: Molecule = WATER.parse().unwrap();
    mol.to_bohr();
    mol.to_angstrom();
    // the conversion factors are rounded independently, so the round trip
    // is close but not exact
    assert_ne!(mol.positions[5], want.positions[5]);
    assert_abs_diff_eq!(mol, want, epsilon = 1e-5);
}

#[test]
fn load() {
    let mut f = NamedTempFile::new().unwrap();
    write!(f, "{WATER}").unwrap();
    let mol = Molecule::load(f.path()).unwrap();
    assert_eq!(mol.numbers, vec![1, 8]);
}

#[test]
fn load_missing_file() {
    assert_eq!(
        Molecule::load("/does/not/exist.xyz").unwrap_err(),
        GeomError::FileRead(
            "/does/not/exist.xyz".to_owned(),
            std::io::ErrorKind::NotFound
        )
    );
}

#[test]
fn display() {
    let mol: Molecule = WATER.parse().unwrap();
    assert_eq!(
        mol.to_string(),
        "H      0.00000000  0.00000000  0.00000000\n\
         O      0.00000000  0.00000000  1.00000000\n"
    );
}
