//! Argument coercion between host values and native identifiers.
//!
//! Every function here is one translation step: inspect the dynamic payload,
//! produce the native argument or a failure, and retain no state. Numeric
//! identifiers are deliberately passed through unvalidated; the dataset
//! rejects a bad id at the eventual native call. Name lookups go to the
//! dataset immediately and surface its own miss statuses.

use tracing::trace;

use crate::dataset::{
    Dataset, NcType, NC_BYTE, NC_CHAR, NC_DOUBLE, NC_FLOAT, NC_INT, NC_INT64, NC_LONG, NC_SHORT,
    NC_STRING, NC_UBYTE, NC_UINT, NC_UINT64, NC_USHORT,
};
use crate::error::{Error, Status, NC_EINVAL};
use crate::value::{RData, RValue, NA_INTEGER, NA_INTEGER64};

// ==================== Identifier Resolution ====================

/// Decode element `index` of `dim` as a dimension id.
///
/// Integer and double elements are truncated and used as the id directly.
/// String elements are resolved by name in the dataset.
pub fn dim_id(dim: &RValue, ds: &impl Dataset, index: usize) -> Result<i32, Status> {
    if dim.len() <= index {
        return Err(NC_EINVAL);
    }
    match dim.data() {
        RData::Int(v) => Ok(v[index]),
        RData::Real(v) => Ok(v[index] as i32),
        RData::Str(v) => ds.inq_dim_id(&v[index]),
        _ => Err(NC_EINVAL),
    }
}

/// Decode element 0 of `var` as a variable id.
///
/// Any numeric payload is accepted; strings are resolved by name.
pub fn var_id(var: &RValue, ds: &impl Dataset) -> Result<i32, Status> {
    if var.is_empty() {
        return Err(NC_EINVAL);
    }
    match var.data() {
        RData::Str(v) => ds.inq_var_id(&v[0]),
        _ if var.is_numeric() => var.as_int().ok_or(NC_EINVAL),
        _ => Err(NC_EINVAL),
    }
}

/// Decode element `index` of `value` as a type code.
pub fn type_id(value: &RValue, ds: &impl Dataset, index: usize) -> Result<NcType, Status> {
    if value.len() <= index {
        return Err(NC_EINVAL);
    }
    match value.data() {
        RData::Int(v) => Ok(v[index]),
        RData::Real(v) => Ok(v[index] as NcType),
        RData::Str(v) => name_to_type(ds, &v[index]),
        _ => Err(NC_EINVAL),
    }
}

// ==================== Type Catalogue ====================

/// Canonical names of the built-in external types.
const BUILTIN_TYPES: [(&str, NcType); 12] = [
    ("NC_BYTE", NC_BYTE),
    ("NC_UBYTE", NC_UBYTE),
    ("NC_CHAR", NC_CHAR),
    ("NC_SHORT", NC_SHORT),
    ("NC_USHORT", NC_USHORT),
    ("NC_INT", NC_INT),
    ("NC_UINT", NC_UINT),
    ("NC_INT64", NC_INT64),
    ("NC_UINT64", NC_UINT64),
    ("NC_FLOAT", NC_FLOAT),
    ("NC_DOUBLE", NC_DOUBLE),
    ("NC_STRING", NC_STRING),
];

/// Canonical name for a type code.
///
/// Codes outside the built-in catalogue are looked up as user-defined types.
/// User types are re-queried on every call; the set can change while the
/// dataset is open.
pub fn type_to_name(ds: &impl Dataset, xtype: NcType) -> Result<String, Status> {
    for (name, code) in BUILTIN_TYPES {
        if code == xtype {
            return Ok(name.to_string());
        }
    }
    ds.inq_user_type(xtype)
}

/// Type code for a canonical or user-defined type name.
///
/// Matching is case-sensitive. The legacy spelling `"NC_LONG"` is accepted
/// as an alias for `NC_INT`; it is never produced by [`type_to_name`].
pub fn name_to_type(ds: &impl Dataset, name: &str) -> Result<NcType, Status> {
    for (builtin, code) in BUILTIN_TYPES {
        if builtin == name {
            return Ok(code);
        }
    }
    if name == "NC_LONG" {
        return Ok(NC_LONG);
    }
    trace!("type name {name:?} is not built in, asking the dataset");
    ds.inq_type_id(name)
}

// ==================== Scalar Arguments ====================

/// Coerce element 0 of `size` to an unsigned size.
///
/// Native sizes and counts are unsigned while the host has no unsigned
/// scalar kind, so every size-bearing argument passes through here. Missing
/// values, negatives, non-finite doubles, and values past `usize::MAX` are
/// out of range, with one exception: when `i64` is no wider than `usize`, a
/// negative 64-bit integer wraps to its unsigned bit pattern, a compatibility
/// behavior some callers of 64-bit sizes depend on.
pub fn size_arg(size: &RValue) -> Result<usize, Error> {
    if size.is_empty() {
        return Err(Error::SizeEmpty);
    }
    match size.data() {
        RData::Int(v) => {
            let ival = v[0];
            if ival == NA_INTEGER || ival < 0 {
                Err(Error::SizeRange)
            } else {
                Ok(ival as usize)
            }
        }
        RData::Int64(v) => {
            let llval = v[0];
            if llval == NA_INTEGER64 {
                Err(Error::SizeRange)
            } else if std::mem::size_of::<i64>() > std::mem::size_of::<usize>() {
                if llval < 0 || llval as u64 > usize::MAX as u64 {
                    Err(Error::SizeRange)
                } else {
                    Ok(llval as usize)
                }
            } else {
                // Same-width case: negatives wrap to the unsigned bit pattern.
                Ok(llval as usize)
            }
        }
        RData::Real(v) => {
            let dval = v[0];
            // One past usize::MAX: exact at 32 bits, rounds to 2^64 at 64.
            let limit = usize::MAX as f64 + 1.0;
            if !dval.is_finite() || dval < 0.0 || dval >= limit {
                Err(Error::SizeRange)
            } else {
                Ok(dval as usize)
            }
        }
        _ => Err(Error::SizeType),
    }
}

/// Borrow element 0 of `value` as a string argument.
pub fn str_arg(value: &RValue) -> Result<&str, Error> {
    value.str_at(0).ok_or(Error::NotString)
}

/// True when `value` is a string vector whose first element equals `expected`.
///
/// Callers use this to test option strings such as `"NC_FILL"` without
/// failing on values of some other shape.
pub fn str_eq(value: &RValue, expected: &str) -> bool {
    value.str_at(0) == Some(expected)
}
