//! Ingredient kinds
//!
//! Every recipe is made of the same five ingredients. Amounts are grams,
//! except eggs which are counted.

use std::fmt;
use std::str::FromStr;

/// One of the five ingredients a recipe can call for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Sugar,
    Eggs,
    Flour,
    Yeast,
    Butter,
}

/// How an ingredient amount is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Grams,
    Count,
}

impl Ingredient {
    /// Order in which shopping list totals are printed
    pub const REPORT_ORDER: [Ingredient; 5] = [
        Ingredient::Yeast,
        Ingredient::Flour,
        Ingredient::Sugar,
        Ingredient::Eggs,
        Ingredient::Butter,
    ];

    /// Lowercase name as written in recipe files
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sugar => "sugar",
            Self::Eggs => "eggs",
            Self::Flour => "flour",
            Self::Yeast => "yeast",
            Self::Butter => "butter",
        }
    }

    pub const fn unit(&self) -> Unit {
        match self {
            Self::Eggs => Unit::Count,
            _ => Unit::Grams,
        }
    }

    /// Format a total amount of this ingredient for the shopping list
    ///
    /// Gram amounts read `"21.0 grams of yeast"`, eggs read `"6.0 egg(s)"`.
    pub fn format_amount(&self, amount: f64) -> String {
        let amount = format_one_decimal(amount);
        match self.unit() {
            Unit::Grams => format!("{} grams of {}", amount, self.name()),
            Unit::Count => format!("{} egg(s)", amount),
        }
    }
}

/// Format with one decimal digit, rounding ties away from zero
///
/// Rounds the shortest decimal form of `amount`, so `1.25` reads `1.3` and
/// `0.05` reads `0.1`. Plain `{:.1}` would round ties to even.
fn format_one_decimal(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{:.1}", amount);
    }

    let shortest = format!("{}", amount.abs());
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let mut fraction = fraction.bytes();
    let tenths = fraction.next().unwrap_or(b'0');
    let round_up = fraction.next().is_some_and(|d| d >= b'5');

    // Digits of the value scaled by ten, rounded
    let mut digits: Vec<u8> = whole.bytes().chain(std::iter::once(tenths)).collect();
    if round_up {
        increment_digits(&mut digits);
    }

    let split = digits.len() - 1;
    let whole = std::str::from_utf8(&digits[..split]).unwrap_or("0");
    let sign = if amount.is_sign_negative() && digits.iter().any(|d| *d != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, whole, digits[split] as char)
}

fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ingredient {
    type Err = String;

    /// Parse an ingredient name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sugar" => Ok(Self::Sugar),
            "eggs" => Ok(Self::Eggs),
            "flour" => Ok(Self::Flour),
            "yeast" => Ok(Self::Yeast),
            "butter" => Ok(Self::Butter),
            other => Err(format!(
                "unknown ingredient '{}' (expected one of sugar, eggs, flour, yeast, butter)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("sugar".parse::<Ingredient>().unwrap(), Ingredient::Sugar);
        assert_eq!("EGGS".parse::<Ingredient>().unwrap(), Ingredient::Eggs);
        assert_eq!("Flour".parse::<Ingredient>().unwrap(), Ingredient::Flour);
        assert_eq!("yEaSt".parse::<Ingredient>().unwrap(), Ingredient::Yeast);
        assert_eq!("butter".parse::<Ingredient>().unwrap(), Ingredient::Butter);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "salt".parse::<Ingredient>().unwrap_err();
        assert!(err.contains("salt"));
    }

    #[test]
    fn test_report_order() {
        let names: Vec<_> = Ingredient::REPORT_ORDER.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["yeast", "flour", "sugar", "eggs", "butter"]);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(Ingredient::Yeast.format_amount(21.0), "21.0 grams of yeast");
        assert_eq!(Ingredient::Eggs.format_amount(6.0), "6.0 egg(s)");
        assert_eq!(Ingredient::Butter.format_amount(12.24), "12.2 grams of butter");
    }

    #[test]
    fn test_ties_round_half_up() {
        assert_eq!(Ingredient::Yeast.format_amount(1.25), "1.3 grams of yeast");
        assert_eq!(Ingredient::Butter.format_amount(0.25), "0.3 grams of butter");
        assert_eq!(Ingredient::Eggs.format_amount(2.75), "2.8 egg(s)");
    }

    #[test]
    fn test_format_one_decimal() {
        assert_eq!(format_one_decimal(0.0), "0.0");
        assert_eq!(format_one_decimal(7.0), "7.0");
        assert_eq!(format_one_decimal(0.05), "0.1");
        assert_eq!(format_one_decimal(1500.04), "1500.0");
        assert_eq!(format_one_decimal(9.95), "10.0");
        assert_eq!(format_one_decimal(99.96), "100.0");
        assert_eq!(format_one_decimal(-1.25), "-1.3");
        assert_eq!(format_one_decimal(-0.04), "0.0");
    }
}
