//! Grow one small labyrinth and print it, then run a short simulation

use labyrinth_growth::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    println!("=== Single Labyrinth ===\n");

    let sampler = UniformExits::new(StdRng::seed_from_u64(42));
    let outcome = run_trial(sampler, 8);
    let lab = &outcome.labyrinth;

    println!("Termination: {:?}", outcome.termination);
    println!("New rooms per iteration: {:?}", outcome.history);
    println!("Rooms: {}, passages: {}", lab.room_count(), lab.passage_count());

    if let Some(origin) = lab.room(Coord::ORIGIN) {
        println!("{:?}", origin);
    }

    // Occupancy map, origin marked with 'O'
    let coords: Vec<Coord> = lab.rooms().map(|r| r.coord()).collect();
    let (min_x, max_x) = bounds(coords.iter().map(|c| c.x));
    let (min_y, max_y) = bounds(coords.iter().map(|c| c.y));
    println!();
    for y in (min_y..=max_y).rev() {
        let row: String = (min_x..=max_x)
            .map(|x| {
                let c = Coord::new(x, y);
                if c == Coord::ORIGIN {
                    'O'
                } else if lab.contains(c) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("  {}", row);
    }

    println!("\n=== Short Simulation ===\n");
    let config = SimulationConfig::new(50, 20).with_seed(42);
    let report = simulate(&config)?;
    println!("{}", report);

    Ok(())
}

fn bounds(values: impl Iterator<Item = i64>) -> (i64, i64) {
    values.fold((0, 0), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
