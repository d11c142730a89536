//! # Verify Subcommands
//!
//! `gs1vc verify` and `gs1vc verify-presentation`. Parents are resolved
//! from `--chain-dir`; schemas from `--schema-dir`. Both default to
//! nothing, in which case parents must be inline and every credential is
//! checked against the generic schema.
//!
//! Proofs are not checked: the structural verifier stands in for the
//! cryptographic layer.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use gs1_schema::DirectorySchemaLoader;
use gs1_vc::VerifiablePresentation;
use gs1_verify::{
    verify_credential, verify_presentation, StructuralVerifier, VerificationRequest,
    VerifierConfig,
};

use crate::loader::{read_credential, DirectoryCredentialLoader};

/// Options shared by both verify subcommands. Unset options fall back to
/// the `GS1_*` environment variables, then to the defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct VerifyOptions {
    /// Directory of credential JSON files used to resolve parents.
    #[arg(long)]
    pub chain_dir: Option<PathBuf>,

    /// Directory of `<name>.schema.json` credential schemas.
    #[arg(long)]
    pub schema_dir: Option<PathBuf>,

    /// Skip JSON Schema validation.
    #[arg(long)]
    pub no_schema: bool,

    /// DID the root prefix license must be issued by.
    #[arg(long)]
    pub gs1_global_did: Option<String>,

    /// Maximum number of credentials in a chain.
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl VerifyOptions {
    /// Environment configuration overridden by the flags.
    pub fn config(&self) -> anyhow::Result<VerifierConfig> {
        let mut config = VerifierConfig::from_env()?;
        if self.no_schema {
            config = config.with_schema_validation(false);
        }
        if let Some(did) = &self.gs1_global_did {
            config = config.with_gs1_global_did(did.clone());
        }
        if let Some(depth) = self.max_depth {
            config = config.with_max_chain_depth(depth);
        }
        Ok(config)
    }

    fn request(&self) -> anyhow::Result<VerificationRequest<DirectoryCredentialLoader, StructuralVerifier>> {
        let loader = match &self.chain_dir {
            Some(dir) => DirectoryCredentialLoader::open(dir)?,
            None => DirectoryCredentialLoader::default(),
        };
        let request = VerificationRequest::new(self.config()?, loader, StructuralVerifier);
        tracing::debug!(config = ?request.config(), "verifier configured");
        Ok(match &self.schema_dir {
            Some(dir) => request.with_schema_loader(DirectorySchemaLoader::new(dir)),
            None => request,
        })
    }
}

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Credential JSON file.
    pub credential: PathBuf,

    #[command(flatten)]
    pub options: VerifyOptions,
}

/// Arguments for the verify-presentation subcommand.
#[derive(Args, Debug)]
pub struct VerifyPresentationArgs {
    /// Presentation JSON file.
    pub presentation: PathBuf,

    #[command(flatten)]
    pub options: VerifyOptions,
}

/// Verify one credential and write the chain report to `out`. Returns
/// whether every link verified.
pub async fn run_verify(args: &VerifyArgs, out: &mut impl Write) -> anyhow::Result<bool> {
    let credential = read_credential(&args.credential)?;
    let request = args.options.request()?;
    let report = verify_credential(&request, credential).await;
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(report.verified)
}

/// Verify a presentation and write its report to `out`. Returns whether
/// every credential verified.
pub async fn run_verify_presentation(
    args: &VerifyPresentationArgs,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let presentation = read_presentation(&args.presentation)?;
    let request = args.options.request()?;
    let report = verify_presentation(&request, &presentation).await;
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(report.verified)
}

fn read_presentation(path: &Path) -> anyhow::Result<VerifiablePresentation> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    VerifiablePresentation::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}
