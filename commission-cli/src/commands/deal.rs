//! Deal command
//!
//! - **Pure Logic**: request shape, upline construction, engine call
//! - **Imperative Shell**: reading the request file, printing the result

use lib_commission::{compute_deal, compute_offer, CommissionResult, EngineError, OfferResult};
use lib_tariff::QuoteRequest;
use lib_types::{ConsultantId, ConsultantRank, Sale, SoldItem, UplineChain};
use serde::{Deserialize, Serialize};

use crate::argument_parsing::DealArgs;
use crate::commands::{print_result, read_json};
use crate::config::EngineConfig;
use crate::error::CliResult;
use crate::output::Output;

// ============================================================================
// PURE LOGIC
// ============================================================================

/// A sale as submitted by the offer flow
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DealRequest {
    pub rank: ConsultantRank,
    /// Sponsors, direct sponsor first
    #[serde(default)]
    pub upline: Vec<ConsultantId>,
    pub items: Vec<SoldItem>,
    /// Customer quote to price alongside the commission
    #[serde(default)]
    pub quote: Option<QuoteRequest>,
}

impl DealRequest {
    pub fn sale(&self) -> Sale {
        Sale::new(self.items.clone())
    }

    pub fn upline_chain(&self) -> Result<UplineChain, EngineError> {
        Ok(UplineChain::from_sponsors(self.upline.iter().cloned())?)
    }
}

/// Commission only, or commission plus customer quote
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DealOutcome {
    Commission(CommissionResult),
    Offer(OfferResult),
}

pub fn evaluate_deal(request: &DealRequest, config: &EngineConfig) -> Result<CommissionResult, EngineError> {
    let chain = request.upline_chain()?;
    compute_deal(&config.catalog, &request.sale(), request.rank, &chain)
}

pub fn evaluate_request(request: &DealRequest, config: &EngineConfig) -> Result<DealOutcome, EngineError> {
    match &request.quote {
        Some(quote) => {
            let chain = request.upline_chain()?;
            let offer = compute_offer(
                &config.catalog,
                &config.tariff,
                &request.sale(),
                request.rank,
                &chain,
                quote,
            )?;
            Ok(DealOutcome::Offer(offer))
        }
        None => Ok(DealOutcome::Commission(evaluate_deal(request, config)?)),
    }
}

// ============================================================================
// IMPERATIVE SHELL
// ============================================================================

pub fn handle_deal_command(
    args: &DealArgs,
    format: &str,
    config: &EngineConfig,
    output: &dyn Output,
) -> CliResult<()> {
    let request: DealRequest = read_json(&args.input)?;
    let outcome = evaluate_request(&request, config)?;
    print_result(&outcome, format, output)
}
