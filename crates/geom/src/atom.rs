use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{element, GeomError};

/// a single atom read from one line of an XYZ file. atoms are transient:
/// they are folded into a [`Molecule`](crate::Molecule)'s flat arrays as
/// soon as they are parsed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub atomic_number: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Atom {
    pub fn new(atomic_number: usize, x: f64, y: f64, z: f64) -> Self {
        Self {
            atomic_number,
            x,
            y,
            z,
        }
    }

    pub fn label(&self) -> &'static str {
        element::NUMBER_TO_SYMBOL[self.atomic_number]
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:2} {:15.10} {:15.10} {:15.10}",
            self.label(),
            self.x,
            self.y,
            self.z
        )
    }
}

impl FromStr for Atom {
    type Err = GeomError;

    /// parse an Atom from a line like
    ///  C 1.0 1.0 1.0
    /// fields after the third coordinate are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = s.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(GeomError::MalformedAtomLine(s.to_owned()));
        }
        let mut coord = [0.0; 3];
        for (c, field) in coord.iter_mut().zip(&fields[1..4]) {
            *c = field
                .parse()
                .map_err(|_| GeomError::MalformedAtomLine(s.to_owned()))?;
        }
        let number = element::atomic_number(fields[0])?;
        Ok(Self::new(number, coord[0], coord[1], coord[2]))
    }
}
