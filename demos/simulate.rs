use orrery_sim::{SimulationConfig, SolarSystem};
use std::io::{self, StdoutLock, Write};

const SIMULATION_FRAMES: u64 = 3600;
const FRAME: f64 = 1.0 / 60.0;

/// Frames between position dumps.
const REPORT_EVERY: u64 = 600;

fn main() {
    let config = SimulationConfig {
        seed: Some(2024),
        ..Default::default()
    };
    let mut system = SolarSystem::from_config(&config).unwrap();
    describe_system(&system);

    // Stands in for the UI slider
    let slider = system.clock().speed_control();

    let mut lock = io::stdout().lock();
    eprintln!("Simulating {SIMULATION_FRAMES} frames...");
    for t in 0..SIMULATION_FRAMES {
        if t == SIMULATION_FRAMES / 2 {
            let speed = slider.set(5.0).unwrap();
            eprintln!("Speed multiplier set to {speed}");
        }

        let frame = system.step(FRAME);

        if t % REPORT_EVERY == 0 {
            writeln!(&mut lock, "=== Frame {t} (tick {}) ===", frame.tick).unwrap();
            print_all_body_positions(&mut lock, &system);
        }
    }

    eprintln!("{system}");
}

fn describe_system(system: &SolarSystem) {
    let central = system.get_central_body();
    println!(
        "Orrery around {} with {} bodies",
        central.name,
        system.get_bodies().len()
    );
    for (i, body) in system.get_bodies() {
        let orbit = &body.orbit;
        println!("    {}: {:?}", i, body.name);
        println!("      Display radius: {}", body.display_radius);
        println!("      Position: {:?}", orbit.position());
        println!("        Semi-major axis: {}", orbit.get_semi_major_axis());
        println!("        Eccentricity: {}", orbit.get_eccentricity());
        println!("        Periapsis: {}", orbit.get_periapsis());
        println!("        Apoapsis: {}", orbit.get_apoapsis());
        println!("        Phase angle: {}", orbit.get_phase_angle());
        println!("        Period: {}", orbit.get_period());
    }

    let points: usize = system.orbit_paths().iter().map(|(_, path)| path.len()).sum();
    println!("Orbit paths: {points} points");
}

fn print_all_body_positions(lock: &mut StdoutLock, system: &SolarSystem) {
    for (i, body) in system.get_bodies() {
        let position = system.get_body_position(i);
        writeln!(lock, "{}: {:?}", body.name, position).unwrap();
    }
}
