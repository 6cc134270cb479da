//! Portfolio aggregation shared by the Activated and InReview builders.

use rust_decimal::Decimal;

use crate::application::{Fund, Product};

/// All funds across all products, product order first, then fund order.
pub fn flatten_funds(products: &[Product]) -> Vec<Fund> {
    products
        .iter()
        .flat_map(|product| product.funds.iter().cloned())
        .collect()
}

/// Sum of `(amount - fee) * tax_rate` over the funds, left to right.
///
/// `None` when any step overflows `Decimal`.
pub fn net_total(funds: &[Fund], tax_rate: Decimal) -> Option<Decimal> {
    funds.iter().try_fold(Decimal::ZERO, |total, fund| {
        let net = fund.amount.checked_sub(fund.fee)?.checked_mul(tax_rate)?;
        total.checked_add(net)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fund(name: &str, amount: i64, fee: i64) -> Fund {
        Fund {
            name: name.to_string(),
            amount: Decimal::from(amount),
            fee: Decimal::from(fee),
        }
    }

    #[test]
    fn test_flatten_preserves_order() {
        let products = vec![
            Product {
                name: "P1".to_string(),
                funds: vec![fund("f1", 1, 0), fund("f2", 2, 0)],
            },
            Product {
                name: "P2".to_string(),
                funds: vec![fund("f3", 3, 0)],
            },
        ];

        let names: Vec<String> = flatten_funds(&products).into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["f1", "f2", "f3"]);
    }

    #[test]
    fn test_empty_products() {
        let funds = flatten_funds(&[]);
        assert!(funds.is_empty());
        assert_eq!(net_total(&funds, Decimal::new(2, 1)), Some(Decimal::ZERO));
    }

    #[test]
    fn test_products_without_funds() {
        let products = vec![Product {
            name: "Empty".to_string(),
            funds: Vec::new(),
        }];
        let funds = flatten_funds(&products);
        assert!(funds.is_empty());
        assert_eq!(net_total(&funds, Decimal::ONE), Some(Decimal::ZERO));
    }

    #[test]
    fn test_single_fund_net_total() {
        let funds = vec![fund("f1", 100, 10)];
        assert_eq!(net_total(&funds, Decimal::new(2, 1)), Some(Decimal::from(18)));
    }

    #[test]
    fn test_net_total_sums_all_funds() {
        let funds = vec![fund("f1", 100, 10), fund("f2", 50, 0), fund("f3", 10, 20)];
        // 90*0.2 + 50*0.2 + (-10)*0.2
        assert_eq!(net_total(&funds, Decimal::new(2, 1)), Some(Decimal::from(26)));
    }

    #[test]
    fn test_net_total_overflow_on_sum() {
        let huge = Fund {
            name: "huge".to_string(),
            amount: Decimal::MAX,
            fee: Decimal::ZERO,
        };
        let funds = vec![huge.clone(), huge];
        assert_eq!(net_total(&funds, Decimal::ONE), None);
    }

    #[test]
    fn test_net_total_overflow_on_fee() {
        let funds = vec![Fund {
            name: "huge".to_string(),
            amount: Decimal::MAX,
            fee: Decimal::NEGATIVE_ONE,
        }];
        assert_eq!(net_total(&funds, Decimal::ONE), None);
    }

    #[test]
    fn test_net_total_overflow_on_tax() {
        let funds = vec![Fund {
            name: "huge".to_string(),
            amount: Decimal::MAX,
            fee: Decimal::ZERO,
        }];
        assert_eq!(net_total(&funds, Decimal::TWO), None);
    }
}
