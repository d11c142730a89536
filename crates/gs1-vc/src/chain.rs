//! # Credential Chain Arena
//!
//! A resolved chain is stored as a flat arena: index `0` is the credential
//! under validation, index `i + 1` is the parent ("extended") credential of
//! index `i`, and the last entry is where resolution stopped. Links borrow
//! from the arena, so there are no owned back-references and no recursion.
//!
//! Why resolution stopped is recorded in [`ChainTerminal`]. Only a
//! [`ChainTerminal::Root`] chain ends at a credential that extends nothing;
//! every other terminal means the last link's parent is missing.

use serde::{Deserialize, Serialize};

use crate::credential::VerifiableCredential;

/// Why chain resolution stopped at the last link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChainTerminal {
    /// The last credential declares no parent.
    Root,
    /// The declared parent could not be resolved.
    Unresolved {
        /// The parent URI.
        uri: String,
        /// Loader diagnostic.
        reason: String,
    },
    /// The declared parent is already part of this chain.
    Cycle {
        /// The URI that closed the cycle.
        uri: String,
    },
    /// Resolution hit the configured depth limit.
    TooDeep {
        /// The limit that was reached.
        max_depth: usize,
    },
}

/// A resolved credential chain, leaf first.
#[derive(Debug, Clone)]
pub struct CredentialChain {
    links: Vec<VerifiableCredential>,
    terminal: ChainTerminal,
}

/// One link of a chain: a credential and its resolved parent, if any.
#[derive(Debug, Clone, Copy)]
pub struct ChainLink<'a> {
    /// Position in the arena (0 = leaf).
    pub index: usize,
    /// The credential at this position.
    pub credential: &'a VerifiableCredential,
    /// The resolved parent credential.
    pub extended: Option<&'a VerifiableCredential>,
}

impl CredentialChain {
    /// Start a chain at the credential under validation.
    pub fn new(leaf: VerifiableCredential) -> Self {
        Self {
            links: vec![leaf],
            terminal: ChainTerminal::Root,
        }
    }

    /// A two-link chain, mostly useful for validating one edge directly.
    pub fn pair(child: VerifiableCredential, parent: VerifiableCredential) -> Self {
        let mut chain = Self::new(child);
        chain.push_parent(parent);
        chain
    }

    /// Append the parent of the current last link.
    pub fn push_parent(&mut self, parent: VerifiableCredential) {
        self.links.push(parent);
    }

    /// Record why resolution stopped.
    pub fn terminate(&mut self, terminal: ChainTerminal) {
        self.terminal = terminal;
    }

    /// Why resolution stopped.
    pub fn terminal(&self) -> &ChainTerminal {
        &self.terminal
    }

    /// Number of resolved credentials.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always false: a chain holds at least its leaf.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The credential under validation.
    pub fn leaf(&self) -> &VerifiableCredential {
        &self.links[0]
    }

    /// The last resolved credential.
    pub fn top(&self) -> &VerifiableCredential {
        &self.links[self.links.len() - 1]
    }

    /// All credentials, leaf first.
    pub fn credentials(&self) -> &[VerifiableCredential] {
        &self.links
    }

    /// True when a credential with this id is already in the chain.
    pub fn contains_id(&self, id: &str) -> bool {
        self.links.iter().any(|vc| vc.id.as_deref() == Some(id))
    }

    /// The link at `index`.
    pub fn link(&self, index: usize) -> Option<ChainLink<'_>> {
        self.links.get(index).map(|credential| ChainLink {
            index,
            credential,
            extended: self.links.get(index + 1),
        })
    }

    /// Links in validation order: root (top) first, leaf last.
    pub fn links_root_first(&self) -> impl Iterator<Item = ChainLink<'_>> + '_ {
        (0..self.links.len()).rev().filter_map(move |i| self.link(i))
    }

    /// True when `index` is the last link and resolution did not end at a
    /// credential that extends nothing.
    pub fn parent_missing(&self, index: usize) -> bool {
        index + 1 == self.links.len() && self.terminal != ChainTerminal::Root
    }
}
