use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Ownable: caller is not the owner")]
    Unauthorized {},

    #[error("Minting from Contract not Allowed")]
    ContractCaller {},

    #[error("Cartoons Whitelist Mint Not Active")]
    WhitelistMintNotActive {},

    #[error("Cartoons Public Mint Not Active")]
    PublicMintNotActive {},

    #[error("Invalid Proof")]
    InvalidProof {},

    #[error("Requested Claim Amount Invalid")]
    RequestedClaimAmountInvalid {},

    #[error("Requested Mint Amount Invalid")]
    InvalidMintAmount {},

    #[error("Requested Mint Amount Exceeds Limit Per Tx")]
    MintAmountExceedsLimitPerTx {},

    #[error("Purchase Would Exceed Max Supply")]
    MaxSupplyExceeded {},

    #[error("Insufficient Payment")]
    InsufficientPayment { got: Uint128, expected: Uint128 },

    #[error("Incorrect Payment")]
    IncorrectPayment { got: Uint128, expected: Uint128 },

    #[error("Invalid Merkle Root: {0}")]
    InvalidRoot(String),

    #[error("Invalid reply ID")]
    InvalidReplyID {},

    #[error("Reply error")]
    ReplyOnSuccess {},
}
