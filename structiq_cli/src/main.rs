//! # StructIQ CLI Application
//!
//! Terminal-based interface for structural engineering calculations.
//! Runs an interactive deflection check demo and prints both a formatted
//! report and the JSON payload a UI or automation consumer would receive.

use std::io::{self, BufRead, Write};

use structiq_core::calculations::deflection::{
    calculate, DeflectionInput, DeflectionLimit, LoadType, SupportType,
};
use structiq_core::materials;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("StructIQ CLI - Structural Engineering Calculator");
    println!("================================================");
    println!();
    println!("Simply-supported UDL deflection check demo. Press Enter to accept defaults.");
    println!();

    // Default E from the reference table (M25 concrete)
    let default_e_mpa =
        materials::find("Concrete (M25)").map_or(25_000.0, |m| m.elastic_modulus_gpa * 1000.0);

    let span_m = prompt_f64("Enter beam span (m) [5.0]: ", 5.0);
    let load_kn_per_m = prompt_f64("Enter uniform load (kN/m) [10.0]: ", 10.0);
    let elastic_modulus_mpa = prompt_f64("Enter elastic modulus (MPa) [25000]: ", default_e_mpa);
    let moment_of_inertia_mm4 =
        prompt_f64("Enter moment of inertia (mm⁴) [450000000]: ", 450_000_000.0);
    let denominator = prompt_f64("Deflection limit denominator (250/360/480) [250]: ", 250.0);

    println!();
    println!("Checking deflection...");
    println!();

    let input = DeflectionInput {
        support_type: SupportType::SimplySupported,
        load_type: LoadType::Uniform,
        span_m,
        load_magnitude: load_kn_per_m,
        point_load_position_m: None,
        elastic_modulus_mpa,
        moment_of_inertia_mm4,
        limit: DeflectionLimit::from_denominator(denominator as u32),
    };

    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  DEFLECTION CHECK RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!(
                "  Case:     {} / {}",
                input.support_type.display_name(),
                input.load_type.display_name()
            );
            println!("  Span:     {:.1} m", input.span_m);
            println!("  Load:     {:.1} kN/m", input.load_magnitude);
            println!("  E:        {:.0} MPa", input.elastic_modulus_mpa);
            println!("  I:        {:.0} mm⁴", input.moment_of_inertia_mm4);
            println!();
            println!("Demand:");
            println!("  δ_max = {:.3} mm", result.max_deflection_mm);
            println!();
            println!("Serviceability:");
            println!(
                "  Allowable: {:.3} mm ({})",
                result.allowable_deflection_mm,
                input.limit.display_name()
            );
            println!(
                "  Ratio:     {:.2} {}",
                result.deflection_ratio,
                status_icon(result.passes)
            );
            println!();
            println!("═══════════════════════════════════════");
            println!("  RESULT: {}", if result.passes { "PASS" } else { "FAIL" });
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for UI/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
