//! Calculate sweat rate from the command line
//! Usage: cargo run --bin sweat_rate -- <initial_kg> <final_kg> <intake_ml> <urine_ml> <duration_min>

use sportcalc::models::SweatInputs;
use sportcalc::tools::sweat::calculate_sweat_rate;

fn parse_arg(args: &[String], index: usize, name: &str) -> Result<f64, String> {
    let raw = args
        .get(index)
        .ok_or_else(|| format!("Missing argument: {}", name))?;
    raw.parse()
        .map_err(|_| format!("Invalid {}: '{}' is not a number", name, raw))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 6 {
        eprintln!("Usage: sweat_rate <initial_kg> <final_kg> <intake_ml> <urine_ml> <duration_min>");
        std::process::exit(2);
    }

    let inputs = SweatInputs {
        initial_weight_kg: parse_arg(&args, 1, "initial_kg")?,
        final_weight_kg: parse_arg(&args, 2, "final_kg")?,
        fluid_intake_ml: parse_arg(&args, 3, "intake_ml")?,
        urine_loss_ml: parse_arg(&args, 4, "urine_ml")?,
        duration_min: parse_arg(&args, 5, "duration_min")?,
    };

    match calculate_sweat_rate(inputs) {
        Ok(response) => {
            println!("Weight difference:  {}", response.display.weight_difference);
            println!("Total sweat loss:   {}", response.display.total_sweat_loss);
            println!("Sweat rate:         {}", response.display.sweat_rate);
            println!("Body weight loss:   {}", response.display.body_weight_loss);
            println!("{}", response.hydration_message);
            Ok(())
        }
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
}
