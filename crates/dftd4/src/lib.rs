//! safe wrapper around the dftd4 dispersion library. the library itself
//! does all of the physics; this crate marshals a [`Molecule`] across the C
//! boundary, checks the shared error context after every fallible call, and
//! guarantees that each handle is torn down on every exit path

use std::fmt::Display;

use geom::{Molecule, Unit};
use libc::{c_char, c_int};
use serde::{Deserialize, Serialize};

pub mod ffi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    Structure(String),
    Model(String),
    Properties(String),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for EngineError {}

/// owned dftd4 error context, released on drop
struct ErrorHandle(*mut ffi::dftd4_error);

impl ErrorHandle {
    fn new() -> Self {
        Self(unsafe { ffi::dftd4_new_error() })
    }

    /// retrieve the engine's message if the last call left the context in a
    /// failed state
    fn check(&self) -> Result<(), String> {
        if unsafe { ffi::dftd4_check_error(self.0) } == 0 {
            return Ok(());
        }
        let mut buf = [0 as c_char; 512];
        let len = buf.len() as c_int;
        unsafe { ffi::dftd4_get_error(self.0, buf.as_mut_ptr(), &len) };
        let msg = unsafe { std::ffi::CStr::from_ptr(buf.as_ptr()) };
        Err(msg.to_string_lossy().into_owned())
    }
}

impl Drop for ErrorHandle {
    fn drop(&mut self) {
        unsafe { ffi::dftd4_delete_error(&mut self.0) };
    }
}

/// owned dftd4 molecular structure handle
struct Structure(*mut ffi::dftd4_structure);

impl Structure {
    fn new(err: &ErrorHandle, mol: &Molecule) -> Result<Self, EngineError> {
        let numbers: Vec<c_int> =
            mol.numbers.iter().map(|&n| n as c_int).collect();
        let s = Self(unsafe {
            ffi::dftd4_new_structure(
                err.0,
                mol.natoms() as c_int,
                numbers.as_ptr(),
                mol.positions.as_ptr(),
                &mol.charge,
                std::ptr::null(),
                std::ptr::null(),
            )
        });
        err.check().map_err(EngineError::Structure)?;
        Ok(s)
    }
}

impl Drop for Structure {
    fn drop(&mut self) {
        unsafe { ffi::dftd4_delete_structure(&mut self.0) };
    }
}

/// owned D4 model handle
struct Model(*mut ffi::dftd4_model);

impl Model {
    fn new(
        err: &ErrorHandle,
        structure: &Structure,
    ) -> Result<Self, EngineError> {
        let m =
            Self(unsafe { ffi::dftd4_new_d4_model(err.0, structure.0) });
        err.check().map_err(EngineError::Model)?;
        Ok(m)
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        unsafe { ffi::dftd4_delete_model(&mut self.0) };
    }
}

/// per-atom properties returned by the D4 model. every vector is indexed by
/// atom in the same order as the input [`Molecule`]; `c6` is the full
/// natoms x natoms pairwise matrix in row-major order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub cn: Vec<f64>,
    pub charges: Vec<f64>,
    pub c6: Vec<f64>,
    pub alphas: Vec<f64>,
}

impl Properties {
    pub fn natoms(&self) -> usize {
        self.cn.len()
    }

    /// the C6 coefficient reported for atom `i`, read from the second row
    /// of the pairwise matrix. TODO check whether this should be the
    /// diagonal entry `i * natoms + i` instead; the current choice matches
    /// the output this tool has always produced
    pub fn c6(&self, i: usize) -> f64 {
        let n = self.natoms();
        if n < 2 {
            // the matrix for a single atom has no second row
            self.c6[i]
        } else {
            self.c6[n + i]
        }
    }
}

impl Display for Properties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.natoms() {
            writeln!(
                f,
                "[ atom #{i}: CN {:.8}, Q {:.8}, C6 {:.8}, Alpha {:.8} ]",
                self.cn[i],
                self.charges[i],
                self.c6(i),
                self.alphas[i],
            )?;
        }
        Ok(())
    }
}

/// compute the coordination numbers, partial charges, C6 coefficients, and
/// polarizabilities for `mol`.
///
/// # Panics
///
/// panics if `mol` is not in Bohr
pub fn properties(mol: &Molecule) -> Result<Properties, EngineError> {
    assert_eq!(mol.unit, Unit::Bohr, "dftd4 requires coordinates in Bohr");
    let err = ErrorHandle::new();
    let structure = Structure::new(&err, mol)?;
    let model = Model::new(&err, &structure)?;
    let n = mol.natoms();
    let mut props = Properties {
        cn: vec![0.0; n],
        charges: vec![0.0; n],
        c6: vec![0.0; n * n],
        alphas: vec![0.0; n],
    };
    unsafe {
        ffi::dftd4_get_properties(
            err.0,
            structure.0,
            model.0,
            props.cn.as_mut_ptr(),
            props.charges.as_mut_ptr(),
            props.c6.as_mut_ptr(),
            props.alphas.as_mut_ptr(),
        );
    }
    err.check().map_err(EngineError::Properties)?;
    Ok(props)
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn two_atoms() -> Properties {
        Properties {
            cn: vec![1.0, 2.0],
            charges: vec![-0.25, 0.25],
            c6: vec![11.0, 12.0, 21.0, 22.0],
            alphas: vec![4.5, 5.5],
        }
    }

    #[test]
    fn c6_second_row() {
        let props = two_atoms();
        assert_eq!(props.c6(0), 21.0);
        assert_eq!(props.c6(1), 22.0);
    }

    #[test]
    fn c6_single_atom() {
        let props = Properties {
            cn: vec![0.0],
            charges: vec![0.0],
            c6: vec![5.0],
            alphas: vec![1.0],
        };
        assert_eq!(props.c6(0), 5.0);
    }

    #[test]
    fn display() {
        assert_snapshot!(two_atoms().to_string(), @r"
        [ atom #0: CN 1.00000000, Q -0.25000000, C6 21.00000000, Alpha 4.50000000 ]
        [ atom #1: CN 2.00000000, Q 0.25000000, C6 22.00000000, Alpha 5.50000000 ]
        ");
    }
}
