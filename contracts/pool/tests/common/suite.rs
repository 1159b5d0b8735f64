use cosmwasm_std::testing::{MockApi, MockStorage};
use cosmwasm_std::{Addr, Coin, Empty, StdResult};
use cw_multi_test::{
    App, AppBuilder, AppResponse, BankKeeper, Contract, ContractWrapper, DistributionKeeper,
    Executor, FailingModule, GovFailingModule, IbcFailingModule, IntoBech32, StakeKeeper,
    StargateAccepting, WasmKeeper,
};

use amm::pool::{
    DepositSimulationResponse, ExecuteMsg, InstantiateMsg, PoolInfoResponse, QueryMsg,
};

pub const POOL_IDENTIFIER: &str = "p.1";

/// Token factory messages go through the stargate module, accepted as no-ops.
type PoolApp = App<
    BankKeeper,
    MockApi,
    MockStorage,
    FailingModule<Empty, Empty, Empty>,
    WasmKeeper<Empty, Empty>,
    StakeKeeper,
    DistributionKeeper,
    IbcFailingModule,
    GovFailingModule,
    StargateAccepting,
>;

/// Creates the pool contract
fn pool_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        pool::contract::execute,
        pool::contract::instantiate,
        pool::contract::query,
    )
    .with_migrate(pool::contract::migrate);

    Box::new(contract)
}

pub struct TestingSuite {
    pub app: PoolApp,
    pub senders: Vec<Addr>,
    pub pool_addr: Addr,
}

impl TestingSuite {
    pub fn default_with_balances(initial_balance: Vec<Coin>) -> Self {
        let senders = vec![
            "creator".into_bech32(),
            "other".into_bech32(),
            "another".into_bech32(),
        ];

        let balances: Vec<(Addr, Vec<Coin>)> = senders
            .iter()
            .map(|sender| (sender.clone(), initial_balance.clone()))
            .collect();

        let app = AppBuilder::new()
            .with_stargate(StargateAccepting)
            .build(|router, _api, storage| {
                balances.into_iter().for_each(|(account, amount)| {
                    router.bank.init_balance(storage, &account, amount).unwrap()
                });
            });

        Self {
            app,
            senders,
            pool_addr: Addr::unchecked(""),
        }
    }

    pub fn creator(&mut self) -> Addr {
        self.senders.first().unwrap().clone()
    }

    pub fn instantiate_pool(
        &mut self,
        asset_denoms: Vec<String>,
        asset_decimals: Vec<u8>,
    ) -> &mut Self {
        let code_id = self.app.store_code(pool_contract());
        let creator = self.creator();

        self.pool_addr = self
            .app
            .instantiate_contract(
                code_id,
                creator.clone(),
                &InstantiateMsg {
                    pool_identifier: POOL_IDENTIFIER.to_string(),
                    asset_denoms,
                    asset_decimals,
                },
                &[],
                "pool",
                Some(creator.to_string()),
            )
            .unwrap();

        self
    }

    pub fn provide_liquidity(
        &mut self,
        sender: &Addr,
        funds: Vec<Coin>,
        result: impl Fn(Result<AppResponse, anyhow::Error>),
    ) -> &mut Self {
        result(self.app.execute_contract(
            sender.clone(),
            self.pool_addr.clone(),
            &ExecuteMsg::ProvideLiquidity { receiver: None },
            &funds,
        ));

        self
    }

    pub fn query_pool(&mut self, result: impl Fn(StdResult<PoolInfoResponse>)) -> &mut Self {
        result(
            self.app
                .wrap()
                .query_wasm_smart(&self.pool_addr, &QueryMsg::Pool),
        );

        self
    }

    pub fn query_simulate_deposit(
        &mut self,
        deposits: Vec<Coin>,
        result: impl Fn(StdResult<DepositSimulationResponse>),
    ) -> &mut Self {
        result(
            self.app
                .wrap()
                .query_wasm_smart(&self.pool_addr, &QueryMsg::SimulateDeposit { deposits }),
        );

        self
    }
}
