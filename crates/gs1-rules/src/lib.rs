//! # gs1-rules — GS1 Credential Business Rules
//!
//! The rules that tie a credential to the license hierarchy above it.
//!
//! - **Catalog** (`catalog.rs`): every rule with its stable `GS1-xxx` code.
//! - **Results** (`result.rs`): [`RuleCheckResult`] and the per-credential
//!   [`ChainCheckResult`].
//! - **Comparator** (`compare.rs`): literal-prefix license containment.
//! - **Reconciler** (`issuer.rs`): issuer-to-subject with same-issuer
//!   fallback.
//! - **Subject predicates** (`subject/`): checks on one credential.
//! - **Rule table** (`chain_rules.rs`): which type extends which, and the
//!   rule for each edge.
//! - **Rules manager** (`manager.rs`): dispatch from rule key to validator.
//! - **Edge validators** (`chain/`): one credential against its parent.
//!
//! ## Crate Policy
//!
//! - Every check is synchronous and pure; time is passed in.
//! - Rule violations are values, never `Err`. [`RuleError`] is reserved
//!   for credentials that cannot be matched to a rule at all.

pub mod catalog;
pub mod chain;
pub mod chain_rules;
pub mod compare;
pub mod error;
pub mod issuer;
pub mod manager;
pub mod result;
pub mod subject;

pub use catalog::RuleDescriptor;
pub use chain_rules::{chain_rule, chain_rule_by_name, ChainRuleEntry, ExtendsRule, RuleKey};
pub use compare::compare_license_value;
pub use error::RuleError;
pub use issuer::{check_credential_issuers, check_issuer_to_subject_id, reconcile_issuer};
pub use manager::{validate_link, validator, RuleValidator};
pub use result::{ChainCheckResult, RuleCheckResult};
