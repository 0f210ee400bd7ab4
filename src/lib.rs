//! Spawn support for the dungeon: a weighted table that picks *what* to spawn
//! and a fixed-rate timer that says *how many* spawns are due this frame.
//!
//! ```
//! use belsin_spawning::{SpawnTable, SpawnTimer};
//! use rltk::RandomNumberGenerator;
//!
//! let table = SpawnTable::new()
//!     .add("Goblin", 11.0)?
//!     .add("Orc", 2.0)?;
//! let mut timer = SpawnTimer::with_rate(2.0);
//! let mut rng = RandomNumberGenerator::seeded(1);
//!
//! for _ in 0..timer.advance(1.0) {
//!     let name = table.roll(&mut rng)?;
//!     assert!(name == "Goblin" || name == "Orc");
//! }
//! # Ok::<(), belsin_spawning::SpawnError>(())
//! ```

mod error;
pub use error::{ErrorKind, SpawnError, SpawnResult};
mod rng;
pub use rng::SpawnRng;
mod spawn_table;
pub use spawn_table::SpawnTable;
mod spawn_timer;
pub use spawn_timer::SpawnTimer;
