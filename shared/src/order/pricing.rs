//! 订单金额计算
//!
//! 总额含固定 10% 服务费，四舍五入到分 (远离零方向)

use rust_decimal::prelude::*;

/// 应用于菜品合计的倍率 (1.10)
pub const SURCHARGE_MULTIPLIER: Decimal = Decimal::from_parts(110, 0, 0, false, 2);

/// 菜品单价上限 (1,000,000.00)
pub const MAX_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 2);

/// 每行最大数量
pub const MAX_QUANTITY: u32 = 9999;

const MONEY_SCALE: u32 = 2;

#[inline]
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// 单价乘以数量，不做额外舍入
///
/// 溢出时返回 `None`
pub fn line_subtotal(price: Decimal, quantity: u32) -> Option<Decimal> {
    price.checked_mul(Decimal::from(quantity))
}

/// 按 `(单价, 数量)` 行计算含服务费总额
///
/// 任一步溢出时返回 `None`
pub fn order_total<I>(lines: I) -> Option<Decimal>
where
    I: IntoIterator<Item = (Decimal, u32)>,
{
    let sum = lines
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, (price, qty)| {
            acc.checked_add(line_subtotal(price, qty)?)
        })?;
    sum.checked_mul(SURCHARGE_MULTIPLIER).map(round_money)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_multiplier_value() {
        assert_eq!(SURCHARGE_MULTIPLIER, d("1.10"));
    }

    #[test]
    fn test_burger_and_fries_total() {
        // (2 * 8.99 + 3.49) * 1.10 = 23.617
        let total = order_total([(d("8.99"), 2), (d("3.49"), 1)]);
        assert_eq!(total, Some(d("23.62")));
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 0.05 * 1.10 = 0.055
        assert_eq!(order_total([(d("0.05"), 1)]), Some(d("0.06")));
        // 0.15 * 1.10 = 0.165
        assert_eq!(order_total([(d("0.15"), 1)]), Some(d("0.17")));
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(order_total(std::iter::empty()), Some(Decimal::ZERO));
    }

    #[test]
    fn test_line_subtotal() {
        assert_eq!(line_subtotal(d("2.49"), 3), Some(d("7.47")));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(MAX_PRICE, d("1000000"));
        // the largest bounded line stays far from overflow
        let line = line_subtotal(MAX_PRICE, MAX_QUANTITY).unwrap();
        assert_eq!(line, d("9999000000"));
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(line_subtotal(Decimal::MAX, 2), None);
        assert_eq!(order_total([(Decimal::MAX, 1), (Decimal::MAX, 1)]), None);
        // sum fits, surcharge does not
        assert_eq!(order_total([(Decimal::MAX, 1)]), None);
    }
}
