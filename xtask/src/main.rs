use std::env;

use cosmwasm_schema::write_api;

use amm::pool::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

fn main() {
    // schemas land in contracts/pool/schema
    let root = env::current_dir().expect("cannot read the current directory");
    env::set_current_dir(root.join("contracts/pool")).expect("cannot enter contracts/pool");

    write_api! {
        name: "pool",
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
        migrate: MigrateMsg,
    };
}
