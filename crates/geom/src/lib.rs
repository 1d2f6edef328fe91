//! molecular geometries for the dispersion property tool: the element
//! table, XYZ parsing, and the Angstrom/Bohr unit state machine

use std::{fmt::Display, fs::read_to_string, path::Path, str::FromStr};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

pub mod atom;
pub mod element;

#[cfg(test)]
mod tests;

pub use atom::Atom;
pub use element::{atomic_number, NUMBER_TO_SYMBOL};

/// conversion factor from Angstroms to Bohr
pub const ANG_TO_BOHR: f64 = 1.88973;

/// conversion factor from Bohr to Angstroms. rounded independently of
/// [`ANG_TO_BOHR`], so the two are not exact reciprocals and a round trip
/// drifts on the order of 2e-6 relative
pub const BOHR_TO_ANG: f64 = 0.529177;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    UnknownElement(String),
    MalformedAtomLine(String),
    FileRead(String, std::io::ErrorKind),
}

impl Display for GeomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for GeomError {}

/// the length unit of a [`Molecule`]'s coordinates
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum Unit {
    #[default]
    Angstrom,
    Bohr,
}

/// a molecular geometry as the dispersion library consumes it: atomic
/// numbers and a flat coordinate array in atom order, plus the net charge
/// and the current length unit.
///
/// the atom order is significant. every per-atom array returned by the
/// property engine is indexed positionally against `numbers`, so nothing
/// here ever reorders the atoms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    /// atomic numbers, one per atom, in input order
    pub numbers: Vec<usize>,

    /// coordinates as consecutive (x, y, z) triples, `3 * natoms()` long
    pub positions: Vec<f64>,

    /// net molecular charge. not part of the XYZ format; assigned by the
    /// caller after parsing
    pub charge: f64,

    pub unit: Unit,
}

impl Molecule {
    pub fn natoms(&self) -> usize {
        self.numbers.len()
    }

    /// append `atom` to the end of the geometry
    pub fn push(&mut self, atom: Atom) {
        self.numbers.push(atom.atomic_number);
        self.positions.extend([atom.x, atom.y, atom.z]);
    }

    /// reconstruct per-atom views of the flat arrays, in order
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.numbers
            .iter()
            .zip(self.positions.chunks_exact(3))
            .map(|(&n, c)| Atom::new(n, c[0], c[1], c[2]))
    }

    /// read a molecule from the XYZ file at `path`. a missing or unreadable
    /// file is an error; callers should treat it as fatal rather than
    /// continuing with an empty geometry
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeomError> {
        let path = path.as_ref();
        let s = read_to_string(path).map_err(|e| {
            GeomError::FileRead(path.display().to_string(), e.kind())
        })?;
        s.parse()
    }

    /// scale the coordinates to Bohr in place. a no-op if they are already
    /// in Bohr
    pub fn to_bohr(&mut self) {
        if self.unit != Unit::Bohr {
            for p in self.positions.iter_mut() {
                *p *= ANG_TO_BOHR;
            }
            self.unit = Unit::Bohr;
        }
    }

    /// scale the coordinates to Angstroms in place. a no-op if they are
    /// already in Angstroms
    pub fn to_angstrom(&mut self) {
        if self.unit != Unit::Angstrom {
            for p in self.positions.iter_mut() {
                *p *= BOHR_TO_ANG;
            }
            self.unit = Unit::Angstrom;
        }
    }
}

impl FromStr for Molecule {
    type Err = GeomError;

    /// parse an XYZ geometry like
    ///  3
    ///  water
    ///  O 0.0000000000 0.0000000000 -0.0657441568
    ///  H 0.0000000000 0.7574590974 0.5217905143
    ///  H 0.0000000000 -0.7574590974 0.5217905143
    /// into a Molecule in Angstroms with zero charge.
    ///
    /// the first two lines are skipped whatever they contain. the atom
    /// count on the first line is never trusted; the real count is however
    /// many atom lines follow. a failure on any atom line fails the whole
    /// parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mol = Self::default();
        let mut header = None;
        for (i, line) in s.lines().enumerate() {
            match i {
                0 => header = line.trim().parse::<usize>().ok(),
                1 => (),
                _ => mol.push(line.parse()?),
            }
        }
        if let Some(n) = header {
            if n != mol.natoms() {
                log::warn!(
                    "header claims {n} atoms but the file contains {}",
                    mol.natoms()
                );
            }
        }
        Ok(mol)
    }
}

impl Display for Molecule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(8);
        let width = f.width().unwrap_or(precision + 4);
        for atom in self.atoms() {
            writeln!(
                f,
                "{:5}{:w$.p$}{:w$.p$}{:w$.p$}",
                atom.label(),
                atom.x,
                atom.y,
                atom.z,
                w = width,
                p = precision,
            )?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Molecule {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.numbers == other.numbers
            && self.unit == other.unit
            && self.positions.len() == other.positions.len()
            && self
                .positions
                .iter()
                .zip(&other.positions)
                .all(|(a, b)| (a - b).abs() < epsilon)
            && (self.charge - other.charge).abs() < epsilon
    }
}
