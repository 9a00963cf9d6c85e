//! # Package Metadata Queries
//!
//! The crawler only needs one capability from the package database: the list
//! of declared dependencies of a package. [`DependencySource`] captures that,
//! and [`AptCacheSource`] provides it by running `apt-cache depends`.

mod apt;

pub use apt::{AptCacheSource, parse_depends};

use crate::error::DebGraphError;

/// Something that can list the declared dependencies of a package
pub trait DependencySource {
    /// Return the dependency names declared by `package`, in the order the
    /// source reports them. An empty list means the package declares none.
    fn dependencies_of(&self, package: &str) -> Result<Vec<String>, DebGraphError>;
}

impl<S: DependencySource + ?Sized> DependencySource for &S {
    fn dependencies_of(&self, package: &str) -> Result<Vec<String>, DebGraphError> {
        (**self).dependencies_of(package)
    }
}
