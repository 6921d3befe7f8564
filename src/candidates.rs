//! Ordered candidate sequences
//!
//! A scan is a snapshot: the set is never patched when the host's tree
//! changes. Callers that mutate the tree must rescan.

use crate::host::CandidateQuery;

/// Navigable elements in document order at the time of the last scan
#[derive(Debug, Clone)]
pub struct CandidateSet<E> {
    elements: Vec<E>,
}

impl<E> Default for CandidateSet<E> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<E: Clone + PartialEq> CandidateSet<E> {
    pub fn new(elements: Vec<E>) -> Self {
        Self { elements }
    }

    pub fn scan<Q>(host: &Q, container: &E, selector: &str) -> Self
    where
        Q: CandidateQuery<Element = E>,
    {
        let elements = host.query_all(container, selector);
        log::debug!("Scanned {} candidates for {:?}", elements.len(), selector);
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    pub fn first(&self) -> Option<&E> {
        self.elements.first()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.elements.get(index)
    }

    pub fn position_of(&self, el: &E) -> Option<usize> {
        self.elements.iter().position(|candidate| candidate == el)
    }

    /// Candidate immediately after `el`; no wrap-around
    pub fn next_after(&self, el: &E) -> Option<&E> {
        let index = self.position_of(el)?;
        self.elements.get(index + 1)
    }

    /// Candidate immediately before `el`; no wrap-around
    pub fn previous_before(&self, el: &E) -> Option<&E> {
        let index = self.position_of(el)?;
        index.checked_sub(1).and_then(|i| self.elements.get(i))
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}
