use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Price of a single unit, paid in `unit_price.denom`
    pub unit_price: Coin,
    /// 2 in the reference deployment
    pub per_address_limit: u32,
}

/// Global sale switch. Extensible with a public sale phase later.
#[cw_serde]
pub enum SaleStatus {
    Inactive,
    WhitelistOnly,
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleStatus::Inactive => write!(f, "inactive"),
            SaleStatus::WhitelistOnly => write!(f, "whitelist_only"),
        }
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const ADMIN: Admin = Admin::new("admin");

pub const SALE_STATUS: Item<SaleStatus> = Item::new("sale_status");

/// Hex digest committing the whole allow-list. Absent until the operator
/// sets it; replacing it invalidates every proof built for the old root.
pub const WHITELIST_ROOT: Item<String> = Item::new("whitelist_root");

/// Cumulative units minted per address
pub const MINT_COUNTS: Map<Addr, u32> = Map::new("mint_counts");

pub const REMAINING_SUPPLY: Item<u32> = Item::new("remaining_supply");

/// cw721 collection this contract is the minter of
pub const COLLECTION: Item<Addr> = Item::new("collection");

/// Next token id handed to the collection
pub const TOKEN_INDEX: Item<u64> = Item::new("token_index");
