//! Shared cw-multi-test setup: the gateway, a reference ingestion queue and
//! CW20 ledgers (cw20-base plus two misbehaving mocks).

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coin, coins, to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};
use cw_storage_plus::Item;
use gateway_common::hash::keccak256;
use gateway_common::QueueExecuteMsg;

use asset_gateway::msg::{ExecuteMsg, InstantiateMsg};

pub const DENOM: &str = "uluna";
pub const OTHER_DENOM: &str = "uusd";
pub const INITIAL_NATIVE: u128 = 1_000_000;
pub const INITIAL_TOKENS: u128 = 1_000_000;
/// Balance the silent CW20 reports for every holder
pub const SILENT_BALANCE: u128 = 1_000;

// ============================================================================
// Test Setup
// ============================================================================

pub struct Suite {
    pub app: App,
    pub gateway: Addr,
    pub queue: Addr,
    pub token: Addr,
    pub authority: Addr,
    pub user: Addr,
    pub recipient: Addr,
}

pub fn contract_gateway() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        asset_gateway::contract::execute,
        asset_gateway::contract::instantiate,
        asset_gateway::contract::query,
    )
    .with_reply(asset_gateway::contract::reply)
    .with_migrate(asset_gateway::contract::migrate);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub fn setup() -> Suite {
    setup_with_queue(false)
}

/// Same as [`setup`], with a queue that refuses every submission when `reject` is set.
pub fn setup_with_queue(reject: bool) -> Suite {
    let authority = Addr::unchecked("terra1authority");
    let user = Addr::unchecked("terra1user");
    let recipient = Addr::unchecked("terra1recipient");

    let mut app = App::new(|router, _, storage| {
        router
            .bank
            .init_balance(
                storage,
                &user,
                vec![coin(INITIAL_NATIVE, DENOM), coin(INITIAL_NATIVE, OTHER_DENOM)],
            )
            .unwrap();
        router
            .bank
            .init_balance(storage, &authority, coins(INITIAL_NATIVE, DENOM))
            .unwrap();
    });

    let queue_code = app.store_code(contract_queue());
    let queue = app
        .instantiate_contract(
            queue_code,
            authority.clone(),
            &QueueInstantiateMsg { reject },
            &[],
            "input-queue",
            None,
        )
        .unwrap();

    let gateway_code = app.store_code(contract_gateway());
    let gateway = app
        .instantiate_contract(
            gateway_code,
            authority.clone(),
            &InstantiateMsg {
                input_queue: queue.to_string(),
                settlement_authority: authority.to_string(),
                native_denom: DENOM.to_string(),
            },
            &[],
            "asset-gateway",
            Some(authority.to_string()),
        )
        .unwrap();

    let token = instantiate_cw20(&mut app, &user);

    Suite {
        app,
        gateway,
        queue,
        token,
        authority,
        user,
        recipient,
    }
}

fn instantiate_cw20(app: &mut App, holder: &Addr) -> Addr {
    let code_id = app.store_code(contract_cw20());
    app.instantiate_contract(
        code_id,
        holder.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: "Test Token".to_string(),
            symbol: "TEST".to_string(),
            decimals: 6,
            initial_balances: vec![Cw20Coin {
                address: holder.to_string(),
                amount: Uint128::new(INITIAL_TOKENS),
            }],
            mint: None,
            marketing: None,
        },
        &[],
        "test-token",
        None,
    )
    .unwrap()
}

// ============================================================================
// Helpers
// ============================================================================

impl Suite {
    pub fn native_balance(&self, addr: &Addr) -> u128 {
        self.app.wrap().query_balance(addr, DENOM).unwrap().amount.u128()
    }

    pub fn token_balance(&self, token: &Addr, addr: &Addr) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    /// Records accepted by the reference queue, in submission order
    pub fn queued_records(&self) -> Vec<Binary> {
        self.app
            .wrap()
            .query_wasm_smart(&self.queue, &QueueQueryMsg::Records {})
            .unwrap()
    }

    pub fn increase_allowance(&mut self, amount: u128) {
        self.app
            .execute_contract(
                self.user.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.gateway.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    /// Fund custody directly with CW20 tokens, outside the deposit flow
    pub fn fund_gateway_tokens(&mut self, amount: u128) {
        self.app
            .execute_contract(
                self.user.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: self.gateway.to_string(),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .unwrap();
    }

    /// Fund custody directly with the native coin, outside the deposit flow
    pub fn fund_gateway_native(&mut self, amount: u128) {
        self.app
            .send_tokens(self.authority.clone(), self.gateway.clone(), &coins(amount, DENOM))
            .unwrap();
    }

    pub fn store_silent_cw20(&mut self) -> Addr {
        let code_id = self.app.store_code(contract_silent_cw20());
        self.app
            .instantiate_contract(code_id, self.user.clone(), &Empty {}, &[], "silent", None)
            .unwrap()
    }

    pub fn store_reentrant_cw20(&mut self) -> Addr {
        let code_id = self.app.store_code(contract_reentrant_cw20());
        self.app
            .instantiate_contract(
                code_id,
                self.user.clone(),
                &ReentrantInstantiateMsg {
                    gateway: self.gateway.to_string(),
                },
                &[],
                "reentrant",
                None,
            )
            .unwrap()
    }
}

pub fn recipient_key(byte: u8) -> Binary {
    Binary::from(vec![byte; 32])
}

pub fn amounts(values: &[u128]) -> Vec<Uint128> {
    values.iter().copied().map(Uint128::new).collect()
}

pub fn deposit_native_msg(recipients: Vec<Binary>, values: &[u128]) -> ExecuteMsg {
    ExecuteMsg::DepositNative {
        recipients,
        amounts: amounts(values),
        aux_data: Binary::from(b"aux".to_vec()),
    }
}

// ============================================================================
// Reference Ingestion Queue
// ============================================================================

#[cw_serde]
pub struct QueueInstantiateMsg {
    pub reject: bool,
}

#[cw_serde]
pub enum QueueQueryMsg {
    Records {},
}

const QUEUE_REJECT: Item<bool> = Item::new("reject");
const QUEUE_RECORDS: Item<Vec<Binary>> = Item::new("records");

fn queue_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: QueueInstantiateMsg,
) -> StdResult<Response> {
    QUEUE_REJECT.save(deps.storage, &msg.reject)?;
    QUEUE_RECORDS.save(deps.storage, &vec![])?;
    Ok(Response::new())
}

/// Stores the record and answers with its keccak256 as the identifier
fn queue_execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: QueueExecuteMsg,
) -> StdResult<Response> {
    if QUEUE_REJECT.load(deps.storage)? {
        return Err(StdError::generic_err("input queue is closed"));
    }
    match msg {
        QueueExecuteMsg::Submit { record } => {
            let identifier = keccak256(record.as_slice());
            QUEUE_RECORDS.update(deps.storage, |mut records| -> StdResult<_> {
                records.push(record);
                Ok(records)
            })?;
            Ok(Response::new().set_data(Binary::from(identifier.to_vec())))
        }
    }
}

fn queue_query(deps: Deps, _env: Env, msg: QueueQueryMsg) -> StdResult<Binary> {
    match msg {
        QueueQueryMsg::Records {} => to_json_binary(&QUEUE_RECORDS.load(deps.storage)?),
    }
}

fn contract_queue() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        queue_execute,
        queue_instantiate,
        queue_query,
    ))
}

// ============================================================================
// Misbehaving CW20 Ledgers
// ============================================================================

fn empty_instantiate(_: DepsMut, _: Env, _: MessageInfo, _: Empty) -> StdResult<Response> {
    Ok(Response::new())
}

/// Reports success for every transfer without moving anything
fn silent_execute(_: DepsMut, _: Env, _: MessageInfo, _: Cw20ExecuteMsg) -> StdResult<Response> {
    Ok(Response::new())
}

fn silent_query(_: Deps, _: Env, msg: Cw20QueryMsg) -> StdResult<Binary> {
    match msg {
        Cw20QueryMsg::Balance { .. } => to_json_binary(&BalanceResponse {
            balance: Uint128::new(SILENT_BALANCE),
        }),
        _ => Err(StdError::generic_err("unsupported query")),
    }
}

fn contract_silent_cw20() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        silent_execute,
        empty_instantiate,
        silent_query,
    ))
}

#[cw_serde]
pub struct ReentrantInstantiateMsg {
    pub gateway: String,
}

const REENTRANT_TARGET: Item<String> = Item::new("gateway");

fn reentrant_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ReentrantInstantiateMsg,
) -> StdResult<Response> {
    REENTRANT_TARGET.save(deps.storage, &msg.gateway)?;
    Ok(Response::new())
}

/// Calls back into the gateway while its `TransferFrom` is being processed
fn reentrant_execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Cw20ExecuteMsg,
) -> StdResult<Response> {
    let gateway = REENTRANT_TARGET.load(deps.storage)?;
    Ok(Response::new().add_message(WasmMsg::Execute {
        contract_addr: gateway,
        msg: to_json_binary(&ExecuteMsg::DepositNative {
            recipients: vec![],
            amounts: vec![],
            aux_data: Binary::default(),
        })?,
        funds: vec![],
    }))
}

fn reentrant_query(_: Deps, _: Env, msg: Cw20QueryMsg) -> StdResult<Binary> {
    match msg {
        Cw20QueryMsg::Balance { .. } => to_json_binary(&BalanceResponse {
            balance: Uint128::zero(),
        }),
        _ => Err(StdError::generic_err("unsupported query")),
    }
}

fn contract_reentrant_cw20() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        reentrant_execute,
        reentrant_instantiate,
        reentrant_query,
    ))
}
