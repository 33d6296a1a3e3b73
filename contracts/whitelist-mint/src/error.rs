use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;
use wl_merkle::ProofError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Proof(#[from] ProofError),

    #[error("Whitelist sale is not active")]
    SaleNotActive {},

    #[error("Address is not whitelisted")]
    NotWhitelisted {},

    #[error("Max {max} mints per address")]
    OverPerAddressLimit { max: u32 },

    #[error("Insufficient payment, got: {got}, expected: {expected}")]
    InsufficientPayment { got: u128, expected: u128 },

    #[error("Sold out")]
    SoldOut {},

    #[error("Quantity must be greater than zero")]
    ZeroQuantity {},

    #[error("Per address limit must be greater than zero")]
    InvalidPerAddressLimit {},

    #[error("Max supply must be greater than zero")]
    InvalidMaxSupply {},

    #[error("Invalid reply ID")]
    InvalidReplyID {},

    #[error("Reply error")]
    ReplyOnSuccess {},
}
