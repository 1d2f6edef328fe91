//! raw bindings to the dftd4 C API. all handles are opaque pointers owned
//! by the library; every `dftd4_new_*` call must be paired with the
//! matching `dftd4_delete_*`

#![allow(non_camel_case_types)]

use libc::{c_char, c_double, c_int};

#[repr(C)]
pub struct dftd4_error {
    _private: [u8; 0],
}

#[repr(C)]
pub struct dftd4_structure {
    _private: [u8; 0],
}

#[repr(C)]
pub struct dftd4_model {
    _private: [u8; 0],
}

unsafe extern "C" {
    pub fn dftd4_new_error() -> *mut dftd4_error;

    /// returns non-zero if `error` holds a failure from the last call
    pub fn dftd4_check_error(error: *mut dftd4_error) -> c_int;

    /// copy the current error message into `buffer`, at most `buffersize`
    /// bytes including the nul terminator
    pub fn dftd4_get_error(
        error: *mut dftd4_error,
        buffer: *mut c_char,
        buffersize: *const c_int,
    );

    pub fn dftd4_delete_error(error: *mut *mut dftd4_error);

    /// `positions` is a flat `3 * natoms` array in Bohr. `lattice` and
    /// `periodic` may be null for molecular (non-periodic) input
    pub fn dftd4_new_structure(
        error: *mut dftd4_error,
        natoms: c_int,
        numbers: *const c_int,
        positions: *const c_double,
        charge: *const c_double,
        lattice: *const c_double,
        periodic: *const bool,
    ) -> *mut dftd4_structure;

    pub fn dftd4_delete_structure(structure: *mut *mut dftd4_structure);

    pub fn dftd4_new_d4_model(
        error: *mut dftd4_error,
        structure: *mut dftd4_structure,
    ) -> *mut dftd4_model;

    pub fn dftd4_delete_model(model: *mut *mut dftd4_model);

    /// fill `cn`, `charges`, and `alpha` (length natoms) and `c6` (length
    /// natoms * natoms, row-major) with the properties of `structure`
    pub fn dftd4_get_properties(
        error: *mut dftd4_error,
        structure: *mut dftd4_structure,
        model: *mut dftd4_model,
        cn: *mut c_double,
        charges: *mut c_double,
        c6: *mut c_double,
        alpha: *mut c_double,
    );
}
