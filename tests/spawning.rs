use belsin_spawning::{ErrorKind, SpawnRng, SpawnTable, SpawnTimer};
use rltk::RandomNumberGenerator;
use std::collections::HashMap;

const FRAME: f32 = 1.0 / 60.0;

fn room_table(depth: i32) -> SpawnTable {
    SpawnTable::new()
        .add("Goblin", 11.0).unwrap()
        .add("Orc", 1.0 + depth as f32).unwrap()
        .add("Health Potion", 7.0).unwrap()
        .add("Shield", 3.0).unwrap()
        .add("Dagger", 0.0).unwrap()
}

#[test]
fn timer_drives_table_rolls() {
    let table = room_table(1);
    let mut timer = SpawnTimer::with_rate(2.0);
    let mut rng = RandomNumberGenerator::seeded(99);

    let mut spawned: HashMap<String, u32> = HashMap::new();
    let mut elapsed = 0.0;
    while elapsed < 30.1 {
        elapsed += FRAME;
        for _ in 0..timer.advance(FRAME) {
            let name = table.roll(&mut rng).unwrap();
            *spawned.entry(name).or_insert(0) += 1;
        }
    }

    assert_eq!(spawned.values().sum::<u32>(), 60);
    assert!(!spawned.contains_key("Dagger"));
    assert!(spawned.keys().all(|name| table.contains(name)));
}

#[test]
fn step_size_does_not_change_total_spawns() {
    let mut fine = SpawnTimer::with_rate(1.0);
    let mut coarse = SpawnTimer::with_rate(1.0);

    let fine_total: u32 = (0..10_000).map(|_| fine.advance(0.01)).sum();
    let coarse_total: u32 = (0..100).map(|_| coarse.advance(1.0)).sum();

    assert_eq!(coarse_total, 100);
    assert!((fine_total as i64 - 100).abs() <= 1, "fine_total = {}", fine_total);
}

#[test]
fn caller_can_skip_a_frame_on_empty_table() {
    let mut table = SpawnTable::new();
    let mut timer = SpawnTimer::with_rate(4.0);
    let mut rng = RandomNumberGenerator::seeded(3);

    let due = timer.advance(1.0);
    assert_eq!(due, 4);
    let err = table.roll(&mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    table.set_weights(vec![("Goblin", 1.0)]).unwrap();
    assert_eq!(table.roll(&mut rng).unwrap(), "Goblin");
}

struct Always(f32);

impl SpawnRng for Always {
    fn next_f32(&mut self) -> f32 { self.0 }
}

#[test]
fn custom_rng_picks_from_the_top_of_the_table() {
    let table = room_table(1);
    assert_eq!(table.roll(&mut Always(0.0)).unwrap(), "Goblin");
    assert_eq!(table.roll(&mut Always(0.999)).unwrap(), "Shield");
}

#[test]
fn deeper_rooms_weight_orcs_higher() {
    let shallow = room_table(1);
    let deep = room_table(10);

    let share = |table: &SpawnTable| table.weight("Orc").unwrap() / table.total_weight();
    assert!(share(&deep) > share(&shallow));
    assert_eq!(deep.weight("Goblin"), shallow.weight("Goblin"));
}
