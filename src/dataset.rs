//! Surface of the storage library consumed by the coercion layer.
//!
//! [`Dataset`] is one open dataset handle: every name lookup and every
//! define-mode transition is scoped to it. Implementations sit directly on
//! the native library; the trait exists so this layer's behavior can be
//! exercised without an open file.
//!
//! Methods report failure with the library's own status codes, which callers
//! route through [`crate::error::check`].

use tracing::debug;

use crate::error::{Status, NC_EINDEFINE};

/// External type code.
pub type NcType = i32;

/// Not-a-type, never a valid code.
pub const NC_NAT: NcType = 0;
pub const NC_BYTE: NcType = 1;
pub const NC_CHAR: NcType = 2;
pub const NC_SHORT: NcType = 3;
pub const NC_INT: NcType = 4;
/// Legacy alias for [`NC_INT`], accepted on input only.
pub const NC_LONG: NcType = NC_INT;
pub const NC_FLOAT: NcType = 5;
pub const NC_DOUBLE: NcType = 6;
pub const NC_UBYTE: NcType = 7;
pub const NC_USHORT: NcType = 8;
pub const NC_UINT: NcType = 9;
pub const NC_INT64: NcType = 10;
pub const NC_UINT64: NcType = 11;
pub const NC_STRING: NcType = 12;

/// One open dataset.
pub trait Dataset {
    /// Id of the named dimension.
    fn inq_dim_id(&self, name: &str) -> Result<i32, Status>;

    /// Id of the named variable.
    fn inq_var_id(&self, name: &str) -> Result<i32, Status>;

    /// Code of the named user-defined type.
    fn inq_type_id(&self, name: &str) -> Result<NcType, Status>;

    /// Name of the user-defined type with the given code.
    fn inq_user_type(&self, xtype: NcType) -> Result<String, Status>;

    /// Enter schema-definition mode.
    fn redef(&mut self) -> Result<(), Status>;

    /// Leave schema-definition mode.
    fn enddef(&mut self) -> Result<(), Status>;
}

/// Put the dataset into define mode.
///
/// "Already in define mode" counts as success, so schema-changing callers
/// can request the mode unconditionally.
pub fn enter_define(ds: &mut impl Dataset) -> Result<(), Status> {
    match ds.redef() {
        Err(NC_EINDEFINE) => {
            debug!("dataset already in define mode");
            Ok(())
        }
        other => other,
    }
}

/// Take the dataset out of define mode.
///
/// The library recovers on its own from most failed transitions here, so a
/// failure status is logged and dropped rather than raised.
pub fn leave_define(ds: &mut impl Dataset) {
    if let Err(status) = ds.enddef() {
        debug!("enddef returned status {status}, ignoring");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::collections::HashMap;

    use super::{Dataset, NcType};
    use crate::error::{Status, NC_EBADDIM, NC_EBADTYPE, NC_EINDEFINE, NC_ENOTINDEFINE, NC_ENOTVAR};

    /// In-memory stand-in for an open dataset.
    #[derive(Debug, Default)]
    pub struct MemDataset {
        dims: HashMap<String, i32>,
        vars: HashMap<String, i32>,
        types: Vec<(String, NcType)>,
        define_mode: bool,
        /// Transitions into define mode.
        pub redefs: usize,
        /// Name/code lookups served, across all four inquiry methods.
        pub lookups: Cell<usize>,
    }

    impl MemDataset {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_dim(&mut self, name: &str, id: i32) {
            self.dims.insert(name.to_string(), id);
        }

        pub fn add_var(&mut self, name: &str, id: i32) {
            self.vars.insert(name.to_string(), id);
        }

        pub fn add_type(&mut self, name: &str, code: NcType) {
            self.types.push((name.to_string(), code));
        }

        pub fn in_define_mode(&self) -> bool {
            self.define_mode
        }

        fn count_lookup(&self) {
            self.lookups.set(self.lookups.get() + 1);
        }
    }

    impl Dataset for MemDataset {
        fn inq_dim_id(&self, name: &str) -> Result<i32, Status> {
            self.count_lookup();
            self.dims.get(name).copied().ok_or(NC_EBADDIM)
        }

        fn inq_var_id(&self, name: &str) -> Result<i32, Status> {
            self.count_lookup();
            self.vars.get(name).copied().ok_or(NC_ENOTVAR)
        }

        fn inq_type_id(&self, name: &str) -> Result<NcType, Status> {
            self.count_lookup();
            self.types
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, code)| *code)
                .ok_or(NC_EBADTYPE)
        }

        fn inq_user_type(&self, xtype: NcType) -> Result<String, Status> {
            self.count_lookup();
            self.types
                .iter()
                .find(|(_, code)| *code == xtype)
                .map(|(name, _)| name.clone())
                .ok_or(NC_EBADTYPE)
        }

        fn redef(&mut self) -> Result<(), Status> {
            if self.define_mode {
                Err(NC_EINDEFINE)
            } else {
                self.define_mode = true;
                self.redefs += 1;
                Ok(())
            }
        }

        fn enddef(&mut self) -> Result<(), Status> {
            if self.define_mode {
                self.define_mode = false;
                Ok(())
            } else {
                Err(NC_ENOTINDEFINE)
            }
        }
    }
}
