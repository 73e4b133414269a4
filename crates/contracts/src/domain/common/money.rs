use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Whole-rupee amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn rupees(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Formats the amount the way `Intl.NumberFormat('en-IN')` does for INR with no decimals.
    ///
    /// `124500` -> `₹1,24,500`
    pub fn format_inr(&self) -> String {
        let grouped = group_indian(self.0.unsigned_abs());
        if self.0 < 0 {
            format!("-₹{}", grouped)
        } else {
            format!("₹{}", grouped)
        }
    }
}

/// Indian digit grouping: the last three digits, then pairs.
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_inr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr() {
        assert_eq!(Money(8500).format_inr(), "₹8,500");
        assert_eq!(Money(124500).format_inr(), "₹1,24,500");
        assert_eq!(Money(256800).format_inr(), "₹2,56,800");
        assert_eq!(Money(500).format_inr(), "₹500");
        assert_eq!(Money(0).format_inr(), "₹0");
        assert_eq!(Money(-500).format_inr(), "-₹500");
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(12345678), "1,23,45,678");
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money(8500), Money(6200), Money(4500)].into_iter().sum();
        assert_eq!(total, Money(19200));
    }
}
