#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, to_binary, Addr, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, Reply,
    Response, StdError, StdResult, SubMsg, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw721_base::{
    ExecuteMsg as Cw721ExecuteMsg, Extension, InstantiateMsg as Cw721InstantiateMsg, MintMsg,
};
use cw_utils::{may_pay, nonpayable, parse_reply_instantiate_data};
use semver::Version;
use wl_merkle::{decode_digest, encode_digest, verify_membership, Digest};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{
    Config, SaleStatus, ADMIN, COLLECTION, CONFIG, MINT_COUNTS, REMAINING_SUPPLY, SALE_STATUS,
    TOKEN_INDEX, WHITELIST_ROOT,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:whitelist-mint";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const INIT_COLLECTION_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    ensure!(
        msg.per_address_limit > 0,
        ContractError::InvalidPerAddressLimit {}
    );
    ensure!(msg.max_supply > 0, ContractError::InvalidMaxSupply {});

    let admin = msg
        .admin
        .map_or_else(|| Ok(info.sender), |a| deps.api.addr_validate(&a))?;
    ADMIN.set(deps.branch(), Some(admin))?;

    if let Some(root) = msg.whitelist_root {
        WHITELIST_ROOT.save(deps.storage, &encode_digest(&decode_digest(&root)?))?;
    }

    CONFIG.save(
        deps.storage,
        &Config {
            unit_price: msg.unit_price,
            per_address_limit: msg.per_address_limit,
        },
    )?;
    SALE_STATUS.save(deps.storage, &SaleStatus::Inactive)?;
    REMAINING_SUPPLY.save(deps.storage, &msg.max_supply)?;
    TOKEN_INDEX.save(deps.storage, &0u64)?;

    let wasm_msg = WasmMsg::Instantiate {
        code_id: msg.collection_code_id,
        msg: to_binary(&Cw721InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            minter: env.contract.address.to_string(),
        })?,
        funds: vec![],
        admin: None,
        label: "Whitelist Mint Collection".to_string(),
    };
    let submsg = SubMsg::reply_on_success(wasm_msg, INIT_COLLECTION_REPLY_ID);

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("minter_addr", env.contract.address.to_string())
        .add_submessage(submsg))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INIT_COLLECTION_REPLY_ID {
        return Err(ContractError::InvalidReplyID {});
    }

    match parse_reply_instantiate_data(msg) {
        Ok(res) => {
            COLLECTION.save(deps.storage, &Addr::unchecked(res.contract_address))?;
            Ok(Response::default().add_attribute("action", "init_collection_reply"))
        }
        Err(_) => Err(ContractError::ReplyOnSuccess {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, info, admin),
        ExecuteMsg::SetSaleStatus { status } => execute_set_sale_status(deps, info, status),
        ExecuteMsg::SetWhitelistRoot { root } => execute_set_whitelist_root(deps, info, root),
        ExecuteMsg::WhitelistMint { proof, quantity } => {
            execute_whitelist_mint(deps, info, proof, quantity)
        }
    }
}

pub fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let admin = admin
        .map(|a| deps.api.addr_validate(&a))
        .transpose()?;
    Ok(ADMIN.execute_update_admin(deps, info, admin)?)
}

pub fn execute_set_sale_status(
    deps: DepsMut,
    info: MessageInfo,
    status: SaleStatus,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    SALE_STATUS.save(deps.storage, &status)?;

    let event = Event::new("set-sale-status")
        .add_attribute("status", status.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_whitelist_root(
    deps: DepsMut,
    info: MessageInfo,
    root: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    // store in canonical lowercase hex
    let root = encode_digest(&decode_digest(&root)?);
    WHITELIST_ROOT.save(deps.storage, &root)?;

    let event = Event::new("set-whitelist-root")
        .add_attribute("root", root)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_whitelist_mint(
    deps: DepsMut,
    info: MessageInfo,
    proof: Vec<String>,
    quantity: u32,
) -> Result<Response, ContractError> {
    ensure!(quantity > 0, ContractError::ZeroQuantity {});

    let status = SALE_STATUS.load(deps.storage)?;
    ensure!(
        status == SaleStatus::WhitelistOnly,
        ContractError::SaleNotActive {}
    );

    // no root committed yet means nobody is whitelisted
    let root = WHITELIST_ROOT
        .may_load(deps.storage)?
        .ok_or(ContractError::NotWhitelisted {})?;
    let root = decode_digest(&root)?;
    let proof = proof
        .iter()
        .map(|s| decode_digest(s))
        .collect::<Result<Vec<Digest>, _>>()?;
    ensure!(
        verify_membership(&root, info.sender.as_bytes(), &proof),
        ContractError::NotWhitelisted {}
    );

    let config = CONFIG.load(deps.storage)?;
    let minted = MINT_COUNTS
        .may_load(deps.storage, info.sender.clone())?
        .unwrap_or_default();
    // checked against the post-request total, so a single oversized request
    // fails even with nothing minted yet
    let new_total = minted
        .checked_add(quantity)
        .ok_or_else(|| StdError::generic_err("mint count overflow"))?;
    ensure!(
        new_total <= config.per_address_limit,
        ContractError::OverPerAddressLimit {
            max: config.per_address_limit
        }
    );

    let expected = config
        .unit_price
        .amount
        .checked_mul(Uint128::from(quantity))
        .map_err(StdError::overflow)?;
    let got = may_pay(&info, &config.unit_price.denom)?;
    ensure!(
        got >= expected,
        ContractError::InsufficientPayment {
            got: got.u128(),
            expected: expected.u128(),
        }
    );

    let remaining = REMAINING_SUPPLY.load(deps.storage)?;
    ensure!(remaining >= quantity, ContractError::SoldOut {});

    MINT_COUNTS.save(deps.storage, info.sender.clone(), &new_total)?;
    REMAINING_SUPPLY.save(deps.storage, &(remaining - quantity))?;

    let first_id = TOKEN_INDEX.load(deps.storage)?;
    let next_id = first_id
        .checked_add(quantity.into())
        .ok_or_else(|| StdError::generic_err("token index overflow"))?;
    TOKEN_INDEX.save(deps.storage, &next_id)?;

    let collection = COLLECTION.load(deps.storage)?;
    let mint_msgs = (first_id..next_id)
        .map(|token_id| {
            let mint_msg = Cw721ExecuteMsg::<Extension, Empty>::Mint(MintMsg {
                token_id: token_id.to_string(),
                owner: info.sender.to_string(),
                token_uri: None,
                extension: None,
            });
            Ok(WasmMsg::Execute {
                contract_addr: collection.to_string(),
                msg: to_binary(&mint_msg)?,
                funds: vec![],
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    let event = Event::new("whitelist-mint")
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("mint_count", new_total.to_string())
        .add_attribute("remaining_supply", (remaining - quantity).to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_messages(mint_msgs).add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Admin {} => to_binary(&ADMIN.query_admin(deps)?),
        QueryMsg::SaleStatus {} => to_binary(&query_sale_status(deps)?),
        QueryMsg::WhitelistRoot {} => to_binary(&query_whitelist_root(deps)?),
        QueryMsg::MintCount { address } => to_binary(&query_mint_count(deps, address)?),
        QueryMsg::RemainingSupply {} => to_binary(&query_remaining_supply(deps)?),
        QueryMsg::Collection {} => to_binary(&query_collection(deps)?),
        QueryMsg::IsWhitelisted { address, proof } => {
            to_binary(&query_is_whitelisted(deps, address, proof)?)
        }
    }
}

pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_sale_status(deps: Deps) -> StdResult<SaleStatus> {
    SALE_STATUS.load(deps.storage)
}

pub fn query_whitelist_root(deps: Deps) -> StdResult<Option<String>> {
    WHITELIST_ROOT.may_load(deps.storage)
}

pub fn query_mint_count(deps: Deps, address: String) -> StdResult<u32> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(MINT_COUNTS.may_load(deps.storage, addr)?.unwrap_or_default())
}

pub fn query_remaining_supply(deps: Deps) -> StdResult<u32> {
    REMAINING_SUPPLY.load(deps.storage)
}

pub fn query_collection(deps: Deps) -> StdResult<String> {
    Ok(COLLECTION.load(deps.storage)?.to_string())
}

pub fn query_is_whitelisted(deps: Deps, address: String, proof: Vec<String>) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    let root = match WHITELIST_ROOT.may_load(deps.storage)? {
        Some(root) => decode_digest(&root).map_err(|e| StdError::generic_err(e.to_string()))?,
        None => return Ok(false),
    };
    let proof = proof
        .iter()
        .map(|s| decode_digest(s))
        .collect::<Result<Vec<Digest>, _>>()
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(verify_membership(&root, addr.as_bytes(), &proof))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    let current_version = cw2::get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(StdError::generic_err("Cannot upgrade to a different contract").into());
    }
    let version: Version = current_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    if version > new_version {
        return Err(StdError::generic_err("Cannot upgrade to a previous contract version").into());
    }
    // if same version return
    if version == new_version {
        return Ok(Response::new());
    }

    // set new contract version
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new())
}
