use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;

use crate::error::SplineError;
use crate::kind::SplineKind;
use crate::spline::Spline;

/// A named collection of [Spline] instances.
///
/// Splines are stored under string ids; creating under an existing id
/// replaces the previous instance. Accessors return borrows, so callers
/// operate on the stored spline directly:
///
/// ```
/// use spline_engine::{SplineKind, SplineRegistry};
///
/// let mut registry = SplineRegistry::new();
/// registry.create("fuel", SplineKind::Pchip);
///
/// let spline = registry.get_mut("fuel").unwrap();
/// spline.build_from(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
///
/// assert!((registry.get("fuel").unwrap().eval(0.5).unwrap() - 1.0).abs() < 1e-12);
/// ```
#[derive(Default)]
pub struct SplineRegistry {
    splines: HashMap<String, Spline>,
}

impl SplineRegistry {
    pub fn new() -> Self {
        SplineRegistry::default()
    }

    /// Store a fresh spline of `kind` under `id`, replacing any previous
    /// instance with that id.
    pub fn create(&mut self, id: &str, kind: SplineKind) -> &mut Spline {
        match self.splines.entry(id.to_string()) {
            Entry::Occupied(mut entry) => {
                debug!("replacing spline `{}` with a new {} spline", id, kind);
                entry.insert(Spline::new(kind));
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!("creating {} spline `{}`", kind, id);
                entry.insert(Spline::new(kind))
            }
        }
    }

    /// Like [create](SplineRegistry::create), with the kind given by name.
    pub fn create_by_name(&mut self, id: &str, kind: &str) -> Result<&mut Spline, SplineError> {
        let kind: SplineKind = kind.parse()?;
        Ok(self.create(id, kind))
    }

    pub fn get(&self, id: &str) -> Result<&Spline, SplineError> {
        self.splines
            .get(id)
            .ok_or_else(|| SplineError::UnknownId(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Spline, SplineError> {
        self.splines
            .get_mut(id)
            .ok_or_else(|| SplineError::UnknownId(id.to_string()))
    }

    /// Remove and return the spline stored under `id`.
    pub fn remove(&mut self, id: &str) -> Result<Spline, SplineError> {
        debug!("removing spline `{}`", id);
        self.splines
            .remove(id)
            .ok_or_else(|| SplineError::UnknownId(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.splines.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.splines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splines.is_empty()
    }

    /// Ids of all stored splines, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.splines.keys().map(String::as_str)
    }
}
