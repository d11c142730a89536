//! # Chain Resolution
//!
//! Builds the [`CredentialChain`] arena for one credential before any rule
//! runs. Starting at the leaf, each step follows the last credential's
//! parent reference (`extendsCredential`, or `keyAuthorization` for data
//! credentials) and appends the parent. The inline pool is searched first
//! and the loader is called only on a miss.
//!
//! Resolution is a loop, not recursion. It stops at a credential that
//! extends nothing or at the first [`ChainError`], which is recorded as the
//! arena's terminal:
//!
//! - the parent URI (or the resolved parent's `id`) was already visited;
//! - the arena already holds `max_chain_depth` credentials;
//! - neither the pool nor the loader produced the parent.

use std::collections::HashSet;

use gs1_vc::{CredentialChain, VerifiableCredential};

use crate::config::VerifierConfig;
use crate::error::ChainError;
use crate::provider::CredentialLoader;

/// Resolve the chain above `credential`.
pub async fn resolve_chain<L>(
    credential: VerifiableCredential,
    inline: &[VerifiableCredential],
    loader: &L,
    config: &VerifierConfig,
) -> CredentialChain
where
    L: CredentialLoader,
{
    let mut visited: HashSet<String> = credential.id.iter().cloned().collect();
    let mut chain = CredentialChain::new(credential);

    while let Some(uri) = chain.top().parent_uri().map(str::to_string) {
        match next_parent(&uri, &chain, &visited, inline, loader, config).await {
            Ok(parent) => {
                tracing::debug!(
                    child = chain.top().id_or_unknown(),
                    parent = %uri,
                    depth = chain.len() + 1,
                    "resolved extended credential"
                );
                visited.insert(uri);
                visited.extend(parent.id.iter().cloned());
                chain.push_parent(parent);
            }
            Err(e) => {
                tracing::warn!(
                    credential = chain.top().id_or_unknown(),
                    error = %e,
                    "chain resolution stopped"
                );
                chain.terminate(e.into());
                break;
            }
        }
    }
    chain
}

async fn next_parent<L>(
    uri: &str,
    chain: &CredentialChain,
    visited: &HashSet<String>,
    inline: &[VerifiableCredential],
    loader: &L,
    config: &VerifierConfig,
) -> Result<VerifiableCredential, ChainError>
where
    L: CredentialLoader,
{
    if visited.contains(uri) {
        return Err(ChainError::Cycle { uri: uri.to_string() });
    }
    if chain.len() >= config.max_chain_depth {
        return Err(ChainError::TooDeep {
            max_depth: config.max_chain_depth,
        });
    }

    let parent = match inline.iter().find(|vc| vc.id.as_deref() == Some(uri)) {
        Some(found) => found.clone(),
        None => loader.load(uri).await.map_err(|e| ChainError::Unresolved {
            uri: uri.to_string(),
            reason: format!("{e:#}"),
        })?,
    };

    // A loader may hand back a credential whose id differs from the URI
    // it was asked for; that id must not close a cycle either.
    if let Some(id) = parent.id.as_deref() {
        if id != uri && (visited.contains(id) || chain.contains_id(id)) {
            return Err(ChainError::Cycle { uri: uri.to_string() });
        }
    }
    Ok(parent)
}
