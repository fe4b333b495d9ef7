/// Drag Comparison Example
///
/// This example compares the same launch under increasing amounts of
/// quadratic air resistance against the ideal drag-free flight, showing how
/// drag cuts both range and maximum height.

use projectile_engine::{compare, PhysicsParameters};

fn main() {
    println!("=== Ideal vs Quadratic Drag ===\n");

    let drag_coefficients = [0.0, 0.01, 0.05, 0.1, 0.2];

    println!(
        " {:>6} | {:>10} | {:>12} | {:>12} | {:>12}",
        "k", "range (m)", "height (m)", "flight (s)", "range loss"
    );
    println!("{}", "-".repeat(66));

    for &k in &drag_coefficients {
        let params = PhysicsParameters {
            drag_coefficient: k,
            ..Default::default()
        };

        match compare(&params) {
            Ok(result) => {
                let s = result.summary;
                println!(
                    " {:>6.2} | {:>10.2} | {:>12.2} | {:>12.3} | {:>11.1}%",
                    k,
                    s.drag_range_m,
                    s.drag_apex_m,
                    s.drag_flight_time_s,
                    s.range_reduction_pct
                );
            }
            Err(e) => println!(" {:>6.2} | simulation failed: {}", k, e),
        }
    }

    println!();
    println!("Air resistance, modeled here with quadratic drag, reduces both");
    println!("the projectile's range and its maximum height.");
}
