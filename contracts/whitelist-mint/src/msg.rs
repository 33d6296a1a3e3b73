use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Coin;

use crate::state::{Config, SaleStatus};

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the sender
    pub admin: Option<String>,
    /// Code id of the cw721 contract instantiated as the collection
    pub collection_code_id: u64,
    pub name: String,
    pub symbol: String,
    pub unit_price: Coin,
    pub per_address_limit: u32,
    pub max_supply: u32,
    /// Hex Merkle root of the allow-list. Can also be set later; while
    /// unset every mint attempt is rejected as not whitelisted.
    pub whitelist_root: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    UpdateAdmin {
        admin: Option<String>,
    },
    SetSaleStatus {
        status: SaleStatus,
    },
    /// Replace the allow-list commitment wholesale. Takes effect for all
    /// subsequent mint attempts.
    SetWhitelistRoot {
        root: String,
    },
    /// Mint `quantity` units to the sender, proving allow-list membership
    /// with the hex sibling digests in `proof`. Payment rides in the funds.
    WhitelistMint {
        proof: Vec<String>,
        quantity: u32,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(cw_controllers::AdminResponse)]
    Admin {},
    #[returns(SaleStatus)]
    SaleStatus {},
    #[returns(Option<String>)]
    WhitelistRoot {},
    #[returns(u32)]
    MintCount { address: String },
    #[returns(u32)]
    RemainingSupply {},
    #[returns(String)]
    Collection {},
    /// Check a proof against the current root without minting
    #[returns(bool)]
    IsWhitelisted { address: String, proof: Vec<String> },
}
