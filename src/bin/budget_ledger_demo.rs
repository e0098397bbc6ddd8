use std::error::Error;

use budget_ledger::{config::ConfigManager, init, render_spend_chart, Category};
use rust_decimal_macros::dec;

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = ConfigManager::from_default_location().load()?;

    let mut food = Category::new("Food");
    food.deposit(dec!(1000), "deposit");
    food.withdraw(dec!(10.15), "groceries")?;
    food.withdraw(dec!(15.89), "restaurant and more food for dessert")?;

    let mut clothing = Category::new("Clothing");
    let mut auto = Category::new("Auto");

    food.transfer(dec!(50), &mut clothing)?;
    food.transfer(dec!(100), &mut auto)?;

    clothing.withdraw(dec!(30.50), "t-shirt")?;
    auto.withdraw(dec!(70.30), "engine")?;

    println!("{}", food.render(&config.ledger));
    println!();
    println!("{}", render_spend_chart([&food, &clothing, &auto], &config.chart));
    Ok(())
}
