// ============================================================================
// Basic Usage Example
// ============================================================================

use calendar_interval::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Calendar Interval Example ===\n");

    let strict = IntervalEvaluator::new(ArithmeticConfig::ansi());
    let legacy = IntervalEvaluator::new(ArithmeticConfig::legacy());

    // make_interval(1 year, 2 months, 1 week, 3 days, 25 hours, 0 minutes, 7.5 seconds)
    let parts = IntervalBuilder::new()
        .with_years(1)
        .with_months(2)
        .with_weeks(1)
        .with_days(3)
        .with_hours(25)
        .with_seconds("7.5".parse()?);
    let iv = strict.make_interval(&parts)?;
    println!("Built interval: {}\n", iv);

    println!("Extracted fields:");
    for field in IntervalField::ALL {
        println!("  {:<12} {}", field.name(), strict.extract(field.name(), &iv)?);
    }

    println!("\nScaling:");
    println!("  x 0.5  = {}", strict.multiply(&iv, 0.5)?);
    println!("  / 3    = {:?}", strict.divide(&iv, 3.0)?.map(|v| v.to_string()));
    println!("  -iv    = {}", strict.negate(&iv)?);

    println!("\nOverflow handling:");
    let huge = Interval::new(i32::MAX, 0, 0);
    match strict.multiply(&huge, 2.0) {
        Ok(v) => println!("  strict x 2 = {}", v),
        Err(e) => println!("  strict x 2 failed: {}", e),
    }
    println!("  legacy x 2 = {}", legacy.multiply(&huge, 2.0)?);

    match strict.divide(&iv, 0.0) {
        Ok(v) => println!("  strict / 0 = {:?}", v),
        Err(e) => println!("  strict / 0 failed: {}", e),
    }
    println!("  legacy / 0 = {:?}", legacy.divide(&iv, 0.0)?);

    println!("\n=== Example Complete ===");
    Ok(())
}
