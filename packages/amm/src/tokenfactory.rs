use anybuf::Anybuf;
use cosmwasm_std::{Addr, AnyMsg, Coin, CosmosMsg};

const TOKENFACTORY_TYPE_PREFIX: &str = "/osmosis.tokenfactory.v1beta1.";

fn proto_coin(coin: &Coin) -> Anybuf {
    Anybuf::new()
        .append_string(1, &coin.denom)
        .append_string(2, coin.amount.to_string())
}

/// Creates the token factory message to register the denom
/// `factory/{sender}/{subdenom}`, with the sender as admin.
pub fn create_denom(sender: Addr, subdenom: String) -> CosmosMsg {
    CosmosMsg::Any(AnyMsg {
        type_url: format!("{TOKENFACTORY_TYPE_PREFIX}MsgCreateDenom"),
        value: Anybuf::new()
            .append_string(1, sender.as_str())
            .append_string(2, &subdenom)
            .into_vec()
            .into(),
    })
}

/// Creates the token factory message to mint `coin` to `mint_to_address`.
/// Only the denom admin, i.e. the creating contract, can do this.
pub fn mint(sender: Addr, coin: Coin, mint_to_address: String) -> CosmosMsg {
    CosmosMsg::Any(AnyMsg {
        type_url: format!("{TOKENFACTORY_TYPE_PREFIX}MsgMint"),
        value: Anybuf::new()
            .append_string(1, sender.as_str())
            .append_message(2, &proto_coin(&coin))
            .append_string(3, &mint_to_address)
            .into_vec()
            .into(),
    })
}

/// Creates the token factory message to burn `coin` from `burn_from_address`.
pub fn burn(sender: Addr, coin: Coin, burn_from_address: String) -> CosmosMsg {
    CosmosMsg::Any(AnyMsg {
        type_url: format!("{TOKENFACTORY_TYPE_PREFIX}MsgBurn"),
        value: Anybuf::new()
            .append_string(1, sender.as_str())
            .append_message(2, &proto_coin(&coin))
            .append_string(3, &burn_from_address)
            .into_vec()
            .into(),
    })
}
