//! Informational entry point for the library crate

fn main() {
    println!("Projectile Engine v0.1.0");
    println!();
    println!("Trajectory and kinematics engine for physics-education displays.");
    println!("This crate is designed to be used as a Rust library; the companion");
    println!("projectile-cli binary exposes the solvers on the command line.");
    println!();
    println!("To use as a Rust library:");
    println!("  Add to Cargo.toml: projectile-engine = \"0.1\"");
    println!();
    println!("Command-line usage:");
    println!("  projectile-cli throw --velocity 20 --acceleration=-9.8");
    println!("  projectile-cli trajectory --velocity 30 --angle 45 --drag 0.05");
    println!("  projectile-cli compare --velocity 30 --angle 45");
}
