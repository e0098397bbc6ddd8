//! Percentage-spent bar chart across categories.

use rust_decimal::Decimal;

use crate::{
    config::{ChartLayout, Config},
    ledger::Category,
};

const ROW_LABEL_WIDTH: usize = 3;
const AXIS_INDENT: &str = "    ";
const CELL_WIDTH: usize = 3;
const PERCENT_STEP: u32 = 10;

/// Renders the spend chart with the default layout.
pub fn create_spend_chart<'a, I>(categories: I) -> String
where
    I: IntoIterator<Item = &'a Category>,
{
    render_spend_chart(categories, &Config::default_ref().chart)
}

/// Renders the spend chart for `categories`, in the given order.
///
/// Each bar is the category's share of the combined spending, floored to a
/// multiple of ten percent. With no spending at all every bar is empty.
pub fn render_spend_chart<'a, I>(categories: I, layout: &ChartLayout) -> String
where
    I: IntoIterator<Item = &'a Category>,
{
    let categories: Vec<&Category> = categories.into_iter().collect();
    let spent: Vec<Decimal> = categories.iter().map(|category| category.spent()).collect();
    let shares = floored_shares(&spent);
    tracing::trace!(categories = categories.len(), "rendering spend chart");

    let marker_cell = format!(" {} ", layout.marker);
    let blank_cell = " ".repeat(CELL_WIDTH);

    let mut out = layout.title.clone();
    out.push('\n');
    for row in (0..=100).rev().step_by(PERCENT_STEP as usize) {
        out.push_str(&format!("{:>width$}|", row, width = ROW_LABEL_WIDTH));
        match &shares {
            Some(shares) => {
                let threshold = Decimal::from(row);
                for share in shares {
                    let cell = if *share >= threshold {
                        &marker_cell
                    } else {
                        &blank_cell
                    };
                    out.push_str(cell);
                }
            }
            None => out.push_str(&blank_cell.repeat(categories.len())),
        }
        out.push_str(" \n");
    }

    out.push_str(AXIS_INDENT);
    out.push_str(&"-".repeat(CELL_WIDTH * categories.len()));
    out.push('-');

    let names: Vec<Vec<char>> = categories
        .iter()
        .map(|category| category.name().chars().collect())
        .collect();
    let rows = names.iter().map(Vec::len).max().unwrap_or(0);
    for index in 0..rows {
        out.push('\n');
        out.push_str(AXIS_INDENT);
        for name in &names {
            match name.get(index) {
                Some(ch) => {
                    out.push(' ');
                    out.push(*ch);
                    out.push(' ');
                }
                None => out.push_str(&blank_cell),
            }
        }
        out.push(' ');
    }
    out
}

/// Floored share of each amount, or `None` when nothing was spent.
///
/// When the plain total overflows, every amount is divided by the number of
/// categories first; the ratios are unchanged.
fn floored_shares(spent: &[Decimal]) -> Option<Vec<Decimal>> {
    let scaled: Vec<Decimal> = match checked_total(spent) {
        Some(_) => spent.to_vec(),
        None => {
            let count = Decimal::from(spent.len());
            tracing::debug!(categories = spent.len(), "spent total overflows, scaling down");
            spent.iter().map(|amount| *amount / count).collect()
        }
    };
    let total = checked_total(&scaled)?;
    if total.is_zero() {
        return None;
    }
    Some(
        scaled
            .iter()
            .map(|amount| floored_share(*amount, total))
            .collect(),
    )
}

fn checked_total(amounts: &[Decimal]) -> Option<Decimal> {
    amounts
        .iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))
}

/// `spent / total` as a percentage, floored to the chart's step.
fn floored_share(spent: Decimal, total: Decimal) -> Decimal {
    let step = Decimal::from(PERCENT_STEP);
    (spent / total * Decimal::ONE_HUNDRED / step).floor() * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn share_is_floored_to_step() {
        assert_eq!(floored_share(dec!(70.30), dec!(136.84)), dec!(50));
        assert_eq!(floored_share(dec!(36.04), dec!(136.84)), dec!(20));
        assert_eq!(floored_share(dec!(30.50), dec!(136.84)), dec!(20));
        assert_eq!(floored_share(dec!(1), dec!(1)), dec!(100));
        assert_eq!(floored_share(dec!(0), dec!(5)), dec!(0));
    }

    #[test]
    fn exact_tenths_are_not_lost_to_rounding() {
        assert_eq!(floored_share(dec!(3), dec!(10)), dec!(30));
        assert_eq!(floored_share(dec!(7), dec!(10)), dec!(70));
    }

    #[test]
    fn shares_survive_a_total_beyond_decimal_range() {
        let huge = Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0);
        let shares = floored_shares(&[huge, huge, huge]).expect("non-zero spending");
        assert_eq!(shares, vec![dec!(30), dec!(30), dec!(30)]);
        assert_eq!(floored_shares(&[Decimal::ZERO, Decimal::ZERO]), None);
        assert_eq!(floored_shares(&[]), None);
    }

    #[test]
    fn custom_layout_changes_title_and_marker() {
        let mut food = Category::new("A");
        food.deposit(dec!(10), "deposit");
        food.withdraw(dec!(5), "x").expect("funds");
        let layout = ChartLayout {
            title: "Spent".into(),
            marker: '#',
        };
        let chart = render_spend_chart([&food], &layout);
        assert!(chart.starts_with("Spent\n100| #  \n"));
        assert!(chart.ends_with("    ----\n     A  "));
    }
}
