/// Thrown Ball Example
///
/// This example walks through the classic maximum-height problem: a ball
/// thrown straight up at 20 m/s under gravity, solved step by step with the
/// kinematic solver.

use projectile_engine::solve_stopping_displacement;

fn main() {
    println!("=== Thrown Ball: Maximum Height ===\n");

    let initial_speed = 20.0; // m/s, straight up
    let acceleration = -9.8; // m/s², gravity opposing the throw

    println!("A ball is thrown straight up with u = {} m/s.", initial_speed);
    println!("At the top of the flight v = 0, so solve v² = u² + 2as for s.");
    println!();

    let solution =
        solve_stopping_displacement(initial_speed, acceleration).expect("valid inputs");

    println!("Derivation:");
    for step in &solution.derivation {
        println!("  {}", step);
    }
    println!();
    println!(
        "Maximum height reached: {:.2} meters, after {:.2} seconds.",
        solution.displacement_m, solution.stop_time_s
    );
}
