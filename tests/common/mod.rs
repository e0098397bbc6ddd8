#![allow(dead_code)]

use budget_ledger::Category;
use rust_decimal_macros::dec;

/// Food with one deposit and two purchases, nothing transferred yet.
pub fn food_after_groceries() -> Category {
    let mut food = Category::new("Food");
    food.deposit(dec!(1000), "deposit");
    food.withdraw(dec!(10.15), "groceries").expect("funded");
    food.withdraw(dec!(15.89), "restaurant and more food for dessert")
        .expect("funded");
    food
}

/// The Food / Clothing / Auto walkthrough used by the demo binary.
pub fn demo_categories() -> (Category, Category, Category) {
    let mut food = food_after_groceries();
    let mut clothing = Category::new("Clothing");
    let mut auto = Category::new("Auto");

    food.transfer(dec!(50), &mut clothing).expect("funded");
    food.transfer(dec!(100), &mut auto).expect("funded");

    clothing.withdraw(dec!(30.50), "t-shirt").expect("funded");
    auto.withdraw(dec!(70.30), "engine").expect("funded");

    (food, clothing, auto)
}

pub const DEMO_FOOD_LEDGER: &str = "*************Food*************\n\
deposit                1000.00\n\
groceries               -10.15\n\
restaurant and more foo -15.89\n\
Transfer to Clothing    -50.00\n\
Transfer to Auto       -100.00\n\
Total: 823.96";

pub const DEMO_CHART: &str = "Percentage spent by category\n\
100|          \n \
90|          \n \
80|          \n \
70|          \n \
60| o        \n \
50| o        \n \
40| o        \n \
30| o        \n \
20| o     o  \n \
10| o  o  o  \n  \
0| o  o  o  \n    \
----------\n     \
F  C  A  \n     \
o  l  u  \n     \
o  o  t  \n     \
d  t  o  \n        \
h     \n        \
i     \n        \
n     \n        \
g     ";
