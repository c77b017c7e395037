//! Status translation between the storage library and the host.
//!
//! The library reports every outcome as an integer status; `NC_NOERR` is
//! success and everything else is fatal to the current call. [`check`] is the
//! single choke point that turns a status into an [`Error`], so no call site
//! carries its own message logic. Coercion helpers that detect a bad argument
//! before any native call report the same way, using the library's
//! "invalid argument" sentinel.
//!
//! Errors propagate by `Result` only. There is no local recovery: the first
//! failure unwinds the whole call to the host's error handler.

use thiserror::Error;

/// Native status code.
pub type Status = i32;

pub const NC_NOERR: Status = 0;
pub const NC_EBADID: Status = -33;
pub const NC_EINVAL: Status = -36;
pub const NC_ENOTINDEFINE: Status = -38;
pub const NC_EINDEFINE: Status = -39;
pub const NC_EBADTYPE: Status = -45;
pub const NC_EBADDIM: Status = -46;
pub const NC_ENOTVAR: Status = -49;
pub const NC_EBADNAME: Status = -59;
pub const NC_ERANGE: Status = -60;

/// Library message for a status code.
pub fn strerror(status: Status) -> &'static str {
    match status {
        NC_NOERR => "No error",
        NC_EBADID => "NetCDF: Not a valid ID",
        NC_EINVAL => "NetCDF: Invalid argument",
        NC_ENOTINDEFINE => "NetCDF: Operation not allowed in data mode",
        NC_EINDEFINE => "NetCDF: Operation not allowed in define mode",
        NC_EBADTYPE => "NetCDF: Not a valid data type or _FillValue type mismatch",
        NC_EBADDIM => "NetCDF: Invalid dimension ID or name",
        NC_ENOTVAR => "NetCDF: Variable not found",
        NC_EBADNAME => "NetCDF: Name contains illegal characters",
        NC_ERANGE => "NetCDF: Numeric conversion not representable",
        _ => "NetCDF: Unknown error status",
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error raised to the host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A status reported by the storage library (or one of its sentinels
    /// raised locally before the native call).
    #[error("{}", strerror(*status))]
    Native { status: Status },

    #[error("Expected character string as argument")]
    NotString,

    #[error("Size argument must contain at least one numeric value")]
    SizeEmpty,

    #[error("Size argument has unsupported R type")]
    SizeType,

    #[error("Size argument is outside valid range")]
    SizeRange,
}

impl Error {
    pub fn native(status: Status) -> Self {
        Error::Native { status }
    }

    /// The native status behind this error, if there is one.
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::Native { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<Status> for Error {
    fn from(status: Status) -> Self {
        Error::Native { status }
    }
}

/// Pass a success status through; translate anything else into an [`Error`].
pub fn check(status: Status) -> Result<Status> {
    if status == NC_NOERR {
        Ok(status)
    } else {
        Err(Error::Native { status })
    }
}
