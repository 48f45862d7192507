// src/services/pricing.rs
//
// A regra de precificação. A margem chega sempre como argumento explícito,
// nunca lida de estado compartilhado, para que o preço derivado dependa só
// do que foi passado na chamada.

use rust_decimal::Decimal;

// sellPrice = costPrice x (1 + margem/100)
pub fn sell_price(cost_price: Decimal, profit_margin: Decimal) -> Decimal {
    cost_price * (Decimal::ONE + profit_margin / Decimal::ONE_HUNDRED)
}

pub fn profit(cost_price: Decimal, sell_price: Decimal) -> Decimal {
    sell_price - cost_price
}

// Margem efetivamente realizada. Custo zero define a razão como 0 em vez de
// falhar na divisão.
pub fn realized_margin(cost_price: Decimal, sell_price: Decimal) -> Decimal {
    if cost_price > Decimal::ZERO {
        profit(cost_price, sell_price) / cost_price * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

// Arredondamento de exibição: duas casas, somente na borda de apresentação.
pub fn display_round(value: Decimal) -> Decimal {
    value.round_dp(2)
}
