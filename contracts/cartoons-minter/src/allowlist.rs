use cartoons_merkle::{parse_hash, to_hex, verify_hex};
use cosmwasm_std::{Addr, OverflowError, OverflowOperation, StdResult, Storage};

use crate::state::{WhitelistRoot, CLAIMED, WHITELIST_ROOT};
use crate::ContractError;

/// Outcome of an allowance lookup under one root/cap snapshot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Allowance {
    NotMember,
    Member(u32),
}

impl Allowance {
    pub fn is_member(&self) -> bool {
        matches!(self, Allowance::Member(_))
    }

    /// Numeric view: non-members can claim nothing
    pub fn amount(&self) -> u32 {
        match self {
            Allowance::NotMember => 0,
            Allowance::Member(remaining) => *remaining,
        }
    }
}

/// Builds a root/cap pair, normalizing the root to lowercase hex
pub fn new_root(root: &str, cap: u32) -> Result<WhitelistRoot, ContractError> {
    let hash = parse_hash(root).map_err(|e| ContractError::InvalidRoot(e.to_string()))?;
    Ok(WhitelistRoot {
        root: to_hex(&hash),
        cap,
    })
}

pub fn current_root(storage: &dyn Storage) -> StdResult<WhitelistRoot> {
    WHITELIST_ROOT.load(storage)
}

/// Swaps root and cap in a single write. Claim counts are left alone.
pub fn rotate_root(storage: &mut dyn Storage, root: &WhitelistRoot) -> StdResult<()> {
    WHITELIST_ROOT.save(storage, root)
}

pub fn claimed(storage: &dyn Storage, address: &Addr) -> StdResult<u32> {
    Ok(CLAIMED.may_load(storage, address)?.unwrap_or_default())
}

pub fn remaining_allowance(
    storage: &dyn Storage,
    root: &WhitelistRoot,
    proof: &[String],
    address: &Addr,
) -> StdResult<Allowance> {
    if !verify_hex(&root.root, address.as_str(), proof) {
        return Ok(Allowance::NotMember);
    }
    let claimed = claimed(storage, address)?;
    Ok(Allowance::Member(root.cap.saturating_sub(claimed)))
}

/// Adds `quantity` to the address' claim count. The caller must already have
/// checked it against the remaining allowance.
pub fn record_claim(storage: &mut dyn Storage, address: &Addr, quantity: u32) -> StdResult<u32> {
    let total = claimed(storage, address)?
        .checked_add(quantity)
        .ok_or_else(|| OverflowError::new(OverflowOperation::Add, "claimed", quantity))?;
    CLAIMED.save(storage, address, &total)?;
    Ok(total)
}
