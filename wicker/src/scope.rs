//! The bean scope: candidate resolution, priority-sorted lists and
//! lifecycle.
//!
//! Lookups are lock-free reads of the immutable [BeanMap]; `start` and
//! `close` serialize on a single per-scope lock guarding the closed flag.

use crate::entry::{BeanContract, BeanHandle, CandidateEntry};
use crate::error::ScopeError;
use crate::lifecycle::BeanLifecycle;
use crate::map::BeanMap;
use itertools::Itertools;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::trace;

/// Default annotation consulted by [BeanScope::list_by_priority].
pub const PRIORITY_ANNOTATION: &str = "Priority";

/// Priority assumed for beans without the annotation (user-level tier).
const DEFAULT_PRIORITY: i32 = 5000;

/// Holds the beans created by a generated wiring module.
///
/// Beans have singleton scope and are indexed by canonical type name and
/// qualifier. Single-candidate lookups resolve through a priority ladder:
/// a supplied bean (test double) wins outright, then a sole primary, then
/// a sole unmarked candidate, then a sole secondary; more than one
/// candidate at the deciding tier is an error.
pub struct BeanScope {
    beans: BeanMap,
    lifecycle: Vec<Arc<dyn BeanLifecycle>>,
    closed: Mutex<bool>,
}

impl BeanScope {
    pub(crate) fn new(beans: BeanMap, lifecycle: Vec<Arc<dyn BeanLifecycle>>) -> Self {
        Self {
            beans,
            lifecycle,
            closed: Mutex::new(false),
        }
    }

    /// A single bean by contract and optional qualifier, or `None` when
    /// nothing is registered for it.
    pub fn get<T: BeanContract + ?Sized>(
        &self,
        qualifier: Option<&str>,
    ) -> Result<Option<Arc<T>>, ScopeError> {
        match self.candidate(T::TYPE_NAME, qualifier)? {
            Some(entry) => entry.bean::<T>().map(Some),
            None => Ok(None),
        }
    }

    /// The winning wiring candidate for `(type, qualifier)`.
    pub fn candidate(
        &self,
        type_name: &str,
        qualifier: Option<&str>,
    ) -> Result<Option<Arc<CandidateEntry>>, ScopeError> {
        let mut sort = EntrySort::new(type_name);
        for entry in self.beans.candidates(type_name, qualifier) {
            sort.add(entry);
        }
        sort.get()
    }

    /// All beans assignable to the contract, in registration order.
    pub fn list<T: BeanContract + ?Sized>(&self) -> Result<Vec<Arc<T>>, ScopeError> {
        self.beans
            .candidates(T::TYPE_NAME, None)
            .iter()
            .map(|entry| entry.bean::<T>())
            .try_collect()
    }

    /// [list](Self::list) sorted by the `Priority` annotation.
    pub fn list_by_priority<T: BeanContract + ?Sized>(&self) -> Result<Vec<Arc<T>>, ScopeError> {
        self.list_by_priority_with::<T>(PRIORITY_ANNOTATION)
    }

    /// [list](Self::list) sorted ascending by the value of the given
    /// priority annotation. Beans without the annotation sort at 5000;
    /// when no listed bean declares the annotation the registration order
    /// is preserved.
    pub fn list_by_priority_with<T: BeanContract + ?Sized>(
        &self,
        annotation: &str,
    ) -> Result<Vec<Arc<T>>, ScopeError> {
        sort_by_priority(self.beans.candidates(T::TYPE_NAME, None), annotation)?
            .iter()
            .map(|entry| entry.bean::<T>())
            .try_collect()
    }

    /// Handles of all beans carrying the annotation, in registration order.
    pub fn beans_with_annotation(&self, name: &str) -> Vec<BeanHandle> {
        self.beans
            .with_annotation(name)
            .iter()
            .map(|entry| entry.handle.clone())
            .collect()
    }

    /// Fires `post_construct` on every lifecycle bean in registration
    /// order. Call once after building the scope.
    pub fn start(&self) -> Result<(), ScopeError> {
        let _closed = self.closed.lock().unwrap_or_else(PoisonError::into_inner);
        trace!("firing post_construct");
        for bean in &self.lifecycle {
            bean.post_construct().map_err(ScopeError::PostConstruct)?;
        }
        Ok(())
    }

    /// Fires `pre_destroy` on every lifecycle bean in registration order.
    /// Only the first call fires; later calls are no-ops. The scope marks
    /// itself closed before the first callback runs, so a failing callback
    /// cannot re-open it.
    pub fn close(&self) -> Result<(), ScopeError> {
        let mut closed = self.closed.lock().unwrap_or_else(PoisonError::into_inner);
        if *closed {
            return Ok(());
        }
        *closed = true;
        trace!("firing pre_destroy");
        for bean in &self.lifecycle {
            bean.pre_destroy().map_err(ScopeError::PreDestroy)?;
        }
        Ok(())
    }
}

/// Stable ascending sort of candidate entries by the integer value of a
/// priority annotation. Registration order is kept when no entry declares
/// the annotation.
pub fn sort_by_priority(
    entries: &[Arc<CandidateEntry>],
    annotation: &str,
) -> Result<Vec<Arc<CandidateEntry>>, ScopeError> {
    if entries.len() <= 1 {
        return Ok(entries.to_vec());
    }
    let mut priority_used = false;
    let mut keyed = Vec::with_capacity(entries.len());
    for entry in entries {
        let priority = match entry.annotation(annotation) {
            Some(tag) => {
                priority_used = true;
                tag.value
                    .as_deref()
                    .and_then(|value| value.parse::<i32>().ok())
                    .ok_or_else(|| ScopeError::MalformedPriority {
                        annotation: annotation.to_string(),
                        bean: entry.type_name().to_string(),
                    })?
            }
            None => DEFAULT_PRIORITY,
        };
        keyed.push((priority, entry.clone()));
    }
    if !priority_used {
        return Ok(entries.to_vec());
    }
    keyed.sort_by_key(|(priority, _)| *priority);
    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}

/// Partitions candidates by priority tier and picks the winner.
struct EntrySort<'a> {
    type_key: &'a str,
    supplied: Option<&'a Arc<CandidateEntry>>,
    primary: Option<&'a Arc<CandidateEntry>>,
    primary_count: usize,
    normal: Option<&'a Arc<CandidateEntry>>,
    normal_count: usize,
    secondary: Option<&'a Arc<CandidateEntry>>,
    secondary_count: usize,
    all: Vec<&'a Arc<CandidateEntry>>,
}

impl<'a> EntrySort<'a> {
    fn new(type_key: &'a str) -> Self {
        Self {
            type_key,
            supplied: None,
            primary: None,
            primary_count: 0,
            normal: None,
            normal_count: 0,
            secondary: None,
            secondary_count: 0,
            all: Vec::new(),
        }
    }

    fn add(&mut self, candidate: &'a Arc<CandidateEntry>) {
        if candidate.is_supplied() {
            // a supplied bean trumps all
            self.supplied = Some(candidate);
            return;
        }
        self.all.push(candidate);
        if candidate.is_primary() {
            self.primary = Some(candidate);
            self.primary_count += 1;
        } else if candidate.is_secondary() {
            self.secondary = Some(candidate);
            self.secondary_count += 1;
        } else {
            self.normal = Some(candidate);
            self.normal_count += 1;
        }
    }

    fn get(self) -> Result<Option<Arc<CandidateEntry>>, ScopeError> {
        if let Some(supplied) = self.supplied {
            return Ok(Some(supplied.clone()));
        }
        if self.primary_count > 1 {
            return Err(ScopeError::MultiplePrimary {
                type_key: self.type_key.to_string(),
                candidates: self.describe(),
            });
        }
        if self.primary_count == 1 {
            return Ok(self.primary.cloned());
        }
        if self.normal_count > 1 {
            return Err(ScopeError::MultipleCandidates {
                type_key: self.type_key.to_string(),
                candidates: self.describe(),
            });
        }
        if self.normal_count == 1 {
            return Ok(self.normal.cloned());
        }
        if self.secondary_count > 1 {
            return Err(ScopeError::MultipleSecondary {
                type_key: self.type_key.to_string(),
                candidates: self.describe(),
            });
        }
        Ok(self.secondary.cloned())
    }

    fn describe(&self) -> Vec<String> {
        self.all
            .iter()
            .map(|entry| entry.type_name().to_string())
            .collect()
    }
}
