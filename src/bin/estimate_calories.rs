//! One-shot calorie estimate
//! Usage: cargo run --bin estimate_calories -- <weight_kg> [male|female] [light|usual|moderate|hard|very_hard]

use calories::tools::form::estimate_calories;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let weight = args.get(1).map(|s| s.as_str()).unwrap_or("");
    let gender = args.get(2).map(|s| s.as_str());
    let intensity = args.get(3).map(|s| s.as_str());

    let estimate = estimate_calories(weight, gender, intensity)?;

    println!("Weight: {} kg", estimate.inputs.weight.kg());
    println!("Gender: {}", estimate.inputs.gender.display_name());
    println!(
        "Activity Level: {} (x{:.2})",
        estimate.inputs.intensity.label(),
        estimate.intensity_multiplier
    );
    println!("Base: {:.2}", estimate.base_metabolic_value);
    println!("{}", estimate.result_text);

    Ok(())
}
