use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;

use projectile_engine::{
    compare, sample_at_distances, simulate_drag, simulate_ideal, solve_stopping_displacement,
    PhysicsParameters, RangeSample,
};

#[derive(Parser)]
#[command(name = "projectile")]
#[command(version = "0.1.0")]
#[command(about = "Projectile trajectory calculator for physics-education displays", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the thrown-ball stopping distance with its full derivation
    Throw {
        /// Initial speed (m/s)
        #[arg(short = 'v', long, default_value = "20.0")]
        velocity: f64,

        /// Constant acceleration, signed (m/s²)
        #[arg(short = 'a', long, default_value = "-9.8", allow_hyphen_values = true)]
        acceleration: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Simulate projectile flight and print range samples
    Trajectory {
        /// Launch speed (m/s)
        #[arg(short = 'v', long, default_value = "30.0")]
        velocity: f64,

        /// Launch angle above horizontal (degrees)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Projectile mass (kg)
        #[arg(short = 'm', long, default_value = "1.0")]
        mass: f64,

        /// Gravitational acceleration (m/s²)
        #[arg(short = 'g', long, default_value = "9.8")]
        gravity: f64,

        /// Quadratic drag coefficient (kg/m)
        #[arg(short = 'k', long, default_value = "0.05")]
        drag: f64,

        /// Integration time step (seconds)
        #[arg(long, default_value = "0.005")]
        time_step: f64,

        /// Downrange sampling interval (meters)
        #[arg(long, default_value = "5.0")]
        sample_interval: f64,

        /// Simulate the ideal drag-free trajectory instead
        #[arg(long)]
        ideal: bool,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Compare ideal and drag-affected flight for one scenario
    Compare {
        /// Launch speed (m/s)
        #[arg(short = 'v', long, default_value = "30.0")]
        velocity: f64,

        /// Launch angle above horizontal (degrees)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Projectile mass (kg)
        #[arg(short = 'm', long, default_value = "1.0")]
        mass: f64,

        /// Gravitational acceleration (m/s²)
        #[arg(short = 'g', long, default_value = "9.8")]
        gravity: f64,

        /// Quadratic drag coefficient (kg/m)
        #[arg(short = 'k', long, default_value = "0.05")]
        drag: f64,

        /// Integration time step (seconds)
        #[arg(long, default_value = "0.005")]
        time_step: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Show engine information
    Info,
}

/// Serializable flight summary for JSON output
#[derive(Serialize)]
struct FlightReport {
    range_m: f64,
    apex_m: f64,
    time_of_flight_s: f64,
    impact_speed_mps: f64,
    samples: Vec<RangeSample>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Throw {
            velocity,
            acceleration,
            output,
        } => run_throw(velocity, acceleration, output),
        Commands::Trajectory {
            velocity,
            angle,
            mass,
            gravity,
            drag,
            time_step,
            sample_interval,
            ideal,
            output,
        } => {
            let params = PhysicsParameters {
                initial_speed: velocity,
                launch_angle: angle,
                mass,
                gravity,
                drag_coefficient: drag,
                time_step,
            };
            run_trajectory(&params, sample_interval, ideal, output)
        }
        Commands::Compare {
            velocity,
            angle,
            mass,
            gravity,
            drag,
            time_step,
            output,
        } => {
            let params = PhysicsParameters {
                initial_speed: velocity,
                launch_angle: angle,
                mass,
                gravity,
                drag_coefficient: drag,
                time_step,
            };
            run_compare(&params, output)
        }
        Commands::Info => {
            print_info();
            Ok(())
        }
    }
}

fn run_throw(velocity: f64, acceleration: f64, output: OutputFormat) -> Result<(), Box<dyn Error>> {
    let solution = solve_stopping_displacement(velocity, acceleration)?;

    match output {
        OutputFormat::Table => {
            println!("=== THROW: STOPPING DISTANCE ===");
            println!();
            for step in &solution.derivation {
                println!("  {}", step);
            }
            println!();
            println!("Displacement at v = 0:  {:.2} m", solution.displacement_m);
            println!("Time to stop:           {:.2} s", solution.stop_time_s);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&solution)?);
        }
        OutputFormat::Csv => {
            println!("displacement_m,stop_time_s");
            println!("{:.6},{:.6}", solution.displacement_m, solution.stop_time_s);
        }
    }
    Ok(())
}

fn run_trajectory(
    params: &PhysicsParameters,
    sample_interval: f64,
    ideal: bool,
    output: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let trajectory = if ideal {
        simulate_ideal(params)?
    } else {
        simulate_drag(params)?
    };
    let samples = sample_at_distances(&trajectory, sample_interval);

    let report = FlightReport {
        range_m: trajectory.range_m(),
        apex_m: trajectory.apex().map_or(0.0, |p| p.position.y),
        time_of_flight_s: trajectory.time_of_flight_s(),
        impact_speed_mps: trajectory.impact_speed_mps(),
        samples,
    };

    match output {
        OutputFormat::Table => {
            println!("=== TRAJECTORY ===");
            println!();
            println!("Range:           {:.2} m", report.range_m);
            println!("Max height:      {:.2} m", report.apex_m);
            println!("Time of flight:  {:.3} s", report.time_of_flight_s);
            println!("Impact speed:    {:.2} m/s", report.impact_speed_mps);
            println!();
            println!(
                "{:>10} | {:>10} | {:>12} | {:>8} | flags",
                "dist (m)", "height (m)", "speed (m/s)", "time (s)"
            );
            println!("{}", "-".repeat(60));
            for sample in &report.samples {
                let flags: Vec<String> =
                    sample.flags.iter().map(|f| format!("{:?}", f)).collect();
                println!(
                    "{:>10.1} | {:>10.2} | {:>12.2} | {:>8.3} | {}",
                    sample.distance_m,
                    sample.height_m,
                    sample.velocity_mps,
                    sample.time_s,
                    flags.join(",")
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            println!("distance_m,height_m,velocity_mps,time_s");
            for sample in &report.samples {
                println!(
                    "{:.4},{:.4},{:.4},{:.4}",
                    sample.distance_m, sample.height_m, sample.velocity_mps, sample.time_s
                );
            }
        }
    }
    Ok(())
}

fn run_compare(params: &PhysicsParameters, output: OutputFormat) -> Result<(), Box<dyn Error>> {
    let result = compare(params)?;
    let s = &result.summary;

    match output {
        OutputFormat::Table => {
            println!("=== IDEAL vs QUADRATIC DRAG ===");
            println!();
            println!("{:<18} {:>12} {:>12}", "", "ideal", "drag");
            println!(
                "{:<18} {:>12.2} {:>12.2}",
                "Range (m)", s.ideal_range_m, s.drag_range_m
            );
            println!(
                "{:<18} {:>12.2} {:>12.2}",
                "Max height (m)", s.ideal_apex_m, s.drag_apex_m
            );
            println!(
                "{:<18} {:>12.3} {:>12.3}",
                "Flight time (s)", s.ideal_flight_time_s, s.drag_flight_time_s
            );
            println!();
            println!("Range reduction:       {:.1}%", s.range_reduction_pct);
            println!("Max height reduction:  {:.1}%", s.apex_reduction_pct);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(s)?);
        }
        OutputFormat::Csv => {
            println!("metric,ideal,drag");
            println!("range_m,{:.4},{:.4}", s.ideal_range_m, s.drag_range_m);
            println!("apex_m,{:.4},{:.4}", s.ideal_apex_m, s.drag_apex_m);
            println!(
                "flight_time_s,{:.4},{:.4}",
                s.ideal_flight_time_s, s.drag_flight_time_s
            );
        }
    }
    Ok(())
}

fn print_info() {
    println!("Projectile Engine v0.1.0");
    println!();
    println!("Trajectory and kinematics engine for physics-education displays.");
    println!("Simulates 2D projectile motion under gravity and quadratic air");
    println!("resistance with a fixed-step semi-implicit Euler integrator, and");
    println!("solves the classic thrown-ball stopping-distance problem with a");
    println!("step-by-step derivation.");
    println!();
    println!("Commands: throw, trajectory, compare, info");
}
