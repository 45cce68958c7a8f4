//! Trajectories of a two-component ODE system under each stepper.
//!
//! Integrates
//!
//! ```text
//! y₁' = y₂
//! y₂' = -0.01 · e^(-0.8x)
//! ```
//!
//! from `y(0) = (0, 0.5)` over `[0, 3)` and prints the recorded trajectory.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trajectory
//! cargo run --example trajectory -- euler
//! cargo run --example trajectory -- rk 0.05
//! ```
//!
//! # Modes
//!
//! - **all** (default) — Euler and Runge–Kutta at steps 0.1 and 0.05.
//! - **euler [h]** — Euler only, step `h` (default 0.1).
//! - **rk [h]** — Runge–Kutta only, step `h` (default 0.1).

use std::error::Error;

use odestep_core::{DerivativeFn, Stepper, System};
use odestep_observers::Trajectory;
use odestep_solvers::transient::{Euler, RungeKutta, fixed_step};

const INITIAL: [f64; 2] = [0.0, 0.5];
const DOMAIN: (f64, f64) = (0.0, 3.0);

/// y₁' = y₂
fn position_rate(_x: f64, y: &[f64]) -> f64 {
    y[1]
}

/// y₂' = -0.01 · e^(-0.8x)
fn velocity_rate(x: f64, _y: &[f64]) -> f64 {
    -0.01 * (-0.8 * x).exp()
}

fn system() -> System<DerivativeFn> {
    System::new(vec![position_rate as DerivativeFn, velocity_rate])
}

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "all".into());
    let step = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size, expected a number, e.g. 0.05");
            std::process::exit(1);
        })
        .unwrap_or(0.1);

    match mode.as_str() {
        "all" => {
            for h in [0.1, 0.05] {
                report("Euler", &mut Euler::new(system()), h)?;
            }
            for h in [0.1, 0.05] {
                report("Runge-Kutta", &mut RungeKutta::new(system()), h)?;
            }
        }
        "euler" => report("Euler", &mut Euler::new(system()), step)?,
        "rk" => report("Runge-Kutta", &mut RungeKutta::new(system()), step)?,
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: trajectory [all|euler [h]|rk [h]]");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn report<St: Stepper>(name: &str, stepper: &mut St, step: f64) -> Result<(), fixed_step::Error> {
    let mut trajectory = Trajectory::new();
    let solution = fixed_step::run(
        stepper,
        &INITIAL,
        step,
        fixed_step::Domain::from(DOMAIN),
        &mut trajectory,
    )?;
    trajectory.finish(&solution);

    println!("{name}, h = {step} ({} steps)", solution.steps);
    println!("{:>8}  {:>12}  {:>12}", "x", "y1", "y2");
    for (x, y) in trajectory.points() {
        println!("{x:>8.3}  {:>12.6}  {:>12.6}", y[0], y[1]);
    }
    println!();

    Ok(())
}
