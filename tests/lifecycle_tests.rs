//! Life cycle and per-tick driver tests
//!
//! Death and revival countdown, round resets, the taxi red-light wait, and
//! the driver entry points.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crossing_sim::simulation::driver::{self, TickOutcome};
use crossing_sim::simulation::{
    AgentId, AgentSummary, DispatchState, Direction, LightState, Neighbors, SimAgent, Species,
    Terrain,
};

fn truck_summary() -> AgentSummary {
    AgentSummary {
        species: Species::Truck,
        alive: true,
        image: "truck.gif",
    }
}

fn surrounded_by(terrain: Terrain) -> Neighbors {
    Direction::ALL.into_iter().map(|dir| (dir, terrain)).collect()
}

#[test]
fn test_poke_is_noop_while_alive() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut car = SimAgent::new(AgentId(0), Species::Car, 2, 3, Direction::East);
    for _ in 0..10 {
        assert!(!car.poke(&mut rng));
    }
    assert!(car.is_alive());
    assert_eq!(car.heading(), Direction::East);
    assert_eq!(car.revive_countdown(), 15);
}

/// A dead agent with countdown N needs N + 1 pokes to come back
#[test]
fn test_revival_takes_countdown_plus_one_pokes() {
    let mut rng = StdRng::seed_from_u64(2);
    for countdown in [0u32, 1, 4, 15] {
        let mut car = SimAgent::new(AgentId(0), Species::Car, 0, 0, Direction::North);
        assert!(car.collide(&truck_summary()));
        car.set_revive_countdown(countdown);

        for _ in 0..countdown {
            assert!(!car.poke(&mut rng));
            assert!(!car.is_alive());
            assert_eq!(car.image(), "car_dead.gif");
        }
        assert_eq!(car.revive_countdown(), 0);

        assert!(car.poke(&mut rng));
        assert!(car.is_alive());
        assert_eq!(car.image(), "car.gif");
        assert_eq!(car.revive_countdown(), 15);
    }
}

#[test]
fn test_species_death_lasts_duration_plus_one() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut human = SimAgent::new(AgentId(0), Species::Human, 0, 0, Direction::North);
    assert!(human.collide(&truck_summary()));

    let pokes = (1..=100).find(|_| human.poke(&mut rng)).unwrap();
    assert_eq!(pokes, 46);
}

#[test]
fn test_revival_randomizes_heading() {
    let mut headings = HashSet::new();
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut taxi = SimAgent::new(AgentId(0), Species::Taxi, 0, 0, Direction::North);
        taxi.collide(&truck_summary());
        taxi.set_revive_countdown(0);
        assert!(taxi.poke(&mut rng));
        headings.insert(taxi.heading());
    }
    assert!(headings.len() > 1);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut bike = SimAgent::new(AgentId(3), Species::Bicycle, 4, 7, Direction::South);

    bike.move_to(9, 1);
    bike.set_heading(Direction::West);
    assert!(bike.collide(&truck_summary()));
    bike.poke(&mut rng);
    bike.poke(&mut rng);
    let countdown = bike.revive_countdown();
    assert_eq!(countdown, 33);

    bike.reset();
    assert!(bike.is_alive());
    assert_eq!(bike.position(), (4, 7));
    assert_eq!(bike.heading(), Direction::South);
    assert_eq!(bike.image(), "bicycle.gif");
    // The countdown is left where it was
    assert_eq!(bike.revive_countdown(), countdown);

    // Resetting a live agent is harmless
    bike.reset();
    assert!(bike.is_alive());
    assert_eq!(bike.position(), (4, 7));
}

#[test]
fn test_initial_snapshot() {
    let taxi = SimAgent::new(AgentId(1), Species::Taxi, 6, 2, Direction::West);
    let initial = taxi.initial();
    assert_eq!((initial.x, initial.y), (6, 2));
    assert_eq!(initial.heading, Direction::West);
    assert_eq!(initial.revive_duration, 15);
    assert_eq!(initial.alive_image, "taxi.gif");
    assert_eq!(initial.dead_image, "taxi_dead.gif");
}

/// Red crosswalk: hold for three checks, go on the fourth
#[test]
fn test_taxi_waits_out_red_crosswalk() {
    let mut taxi = SimAgent::new(AgentId(0), Species::Taxi, 0, 0, Direction::North);
    let answers: Vec<bool> = (0..4)
        .map(|_| taxi.can_pass(Terrain::Crosswalk, LightState::Red))
        .collect();
    assert_eq!(answers, vec![false, false, false, true]);
    assert_eq!(taxi.dispatch_state(), Some(&DispatchState::default()));

    // A fresh red stops it again
    assert!(!taxi.can_pass(Terrain::Crosswalk, LightState::Red));
    let state = taxi.dispatch_state().expect("taxi carries wait state");
    assert!(state.is_stopped());
    assert_eq!(state.wait_timer(), 3);
}

#[test]
fn test_taxi_green_clears_wait() {
    let mut state = DispatchState::new();
    assert!(!state.can_pass(Terrain::Crosswalk, LightState::Red));
    assert!(state.can_pass(Terrain::Crosswalk, LightState::Green));
    assert_eq!(state, DispatchState::default());
}

#[test]
fn test_taxi_timer_runs_on_any_terrain() {
    let mut state = DispatchState::new();
    assert!(!state.can_pass(Terrain::Crosswalk, LightState::Red));
    assert!(state.can_pass(Terrain::Street, LightState::Red));
    assert!(!state.can_pass(Terrain::Wall, LightState::Green));
    assert_eq!(state.wait_timer(), 1);
    assert!(state.can_pass(Terrain::Crosswalk, LightState::Red));
    assert!(!state.is_stopped());
}

#[test]
fn test_taxi_yellow_passes_without_clearing() {
    let mut state = DispatchState::new();
    assert!(!state.can_pass(Terrain::Crosswalk, LightState::Red));
    assert!(state.can_pass(Terrain::Crosswalk, LightState::Yellow));
    assert!(state.is_stopped());
    assert_eq!(state.wait_timer(), 2);
}

#[test]
fn test_reset_clears_taxi_wait() {
    let mut taxi = SimAgent::new(AgentId(0), Species::Taxi, 0, 0, Direction::North);
    assert!(!taxi.can_pass(Terrain::Crosswalk, LightState::Red));
    driver::reset_round(&mut taxi);
    assert_eq!(taxi.dispatch_state(), Some(&DispatchState::default()));
}

#[test]
fn test_driver_tick_moves_and_blocks() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut car = SimAgent::new(AgentId(0), Species::Car, 1, 1, Direction::East);

    let street = surrounded_by(Terrain::Street);
    assert_eq!(
        driver::tick(&mut car, &street, LightState::Red, &mut rng),
        TickOutcome::Moved(Direction::East)
    );

    let lights = surrounded_by(Terrain::Light);
    assert_eq!(
        driver::tick(&mut car, &lights, LightState::Red, &mut rng),
        TickOutcome::Blocked(Direction::East)
    );
    assert_eq!(
        driver::tick(&mut car, &lights, LightState::Yellow, &mut rng),
        TickOutcome::Moved(Direction::East)
    );

    // The driver applies moves, not the tick itself
    assert_eq!(car.position(), (1, 1));
}

#[test]
fn test_driver_tick_turns_before_checking() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut car = SimAgent::new(AgentId(0), Species::Car, 1, 1, Direction::North);
    let mut neighbors = surrounded_by(Terrain::Grass);
    neighbors.insert(Direction::East, Terrain::Crosswalk);

    assert_eq!(
        driver::tick(&mut car, &neighbors, LightState::Red, &mut rng),
        TickOutcome::Blocked(Direction::East)
    );
    assert_eq!(car.heading(), Direction::East);
}

#[test]
fn test_driver_tick_dead_agent_revives() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut car = SimAgent::new(AgentId(0), Species::Car, 1, 1, Direction::North);
    assert!(driver::notify_collision(&mut car, &truck_summary()));
    car.set_revive_countdown(1);

    let street = surrounded_by(Terrain::Street);
    assert_eq!(
        driver::tick(&mut car, &street, LightState::Green, &mut rng),
        TickOutcome::Dead
    );
    assert_eq!(
        driver::tick(&mut car, &street, LightState::Green, &mut rng),
        TickOutcome::Revived
    );
    assert!(car.is_alive());
}
