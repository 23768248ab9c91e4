use std::fmt;
use std::fmt::{Display, Formatter};
use num::{NumCast, ToPrimitive};

/// Wrapper structure for printing an amount as dollars and cents.
///
/// Amounts are rounded to two decimal places and the whole-dollar part is
/// grouped in thousands, e.g. `$41,714.29`. Width and alignment flags given
/// to the formatter apply to the whole rendered string.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Money<I> {
    inner: I
}

impl<I> From<I> for Money<I> {
    fn from(outer: I) -> Money<I> {
        Money {
            inner: outer
        }
    }
}

/// Insert a comma between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    grouped
}

impl<I> Display for Money<I> where I: Clone + NumCast + ToPrimitive {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let amount : f64 = NumCast::from(self.inner.clone()).ok_or(fmt::Error::default())?;

        if !amount.is_finite() {
            return f.pad(&format!("{}", amount));
        }

        let cents = format!("{:.2}", amount.abs());
        let (dollars, fraction) = cents.split_at(cents.len() - 3);
        let sign = if amount < 0.0 && cents != "0.00" { "-" } else { "" };

        f.pad(&format!("{}${}{}", sign, group_thousands(dollars), fraction))
    }
}

#[cfg(test)]
mod tests {
    use crate::units::money::Money;

    #[test]
    fn money_small() {
        assert_eq!(format!("{}", Money::from(0.0)), "$0.00");
        assert_eq!(format!("{}", Money::from(20.0)), "$20.00");
        assert_eq!(format!("{}", Money::from(999.999)), "$1,000.00");
    }

    #[test]
    fn money_thousands() {
        assert_eq!(format!("{}", Money::from(1234567.891)), "$1,234,567.89");
        assert_eq!(format!("{}", Money::from(41714.2857)), "$41,714.29");
        assert_eq!(format!("{}", Money::from(100000.0)), "$100,000.00");
    }

    #[test]
    fn money_integers() {
        assert_eq!(format!("{}", Money::from(24000u32)), "$24,000.00");
        assert_eq!(format!("{}", Money::from(-7i64)), "-$7.00");
    }

    #[test]
    fn money_negative() {
        assert_eq!(format!("{}", Money::from(-1500.0)), "-$1,500.00");
        assert_eq!(format!("{}", Money::from(-0.001)), "$0.00");
    }

    #[test]
    fn money_width() {
        assert_eq!(format!("{:>10}", Money::from(5.5)), "     $5.50");
    }

    #[test]
    fn money_not_finite() {
        assert_eq!(format!("{}", Money::from(std::f64::INFINITY)), "inf");
        assert_eq!(format!("{}", Money::from(std::f64::NAN)), "NaN");
    }
}
