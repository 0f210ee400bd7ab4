use std::collections::HashMap;
use log::{debug, trace, warn};
use super::{SpawnError, SpawnResult, SpawnRng};

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    name : String,
    weight : f32
}

impl Entry {
    fn new<S:ToString>(name: S, weight: f32) -> Entry {
        Entry{name: name.to_string(), weight}
    }
}

/// Weighted table of spawn identifiers.
///
/// Entries keep the order they were first added in, which fixes the cumulative
/// boundaries a roll walks through. Overwriting an entry keeps its slot.
#[derive(Clone, Debug, Default)]
pub struct SpawnTable {
    entries : Vec<Entry>,
    total_weight : f32
}

fn check_weight(id: &str, weight: f32) -> SpawnResult<()> {
    if !weight.is_finite() || weight < 0.0 {
        warn!("Rejected weight {} for {}", weight, id);
        return Err(SpawnError::InvalidWeight{id: id.to_string(), weight});
    }
    Ok(())
}

impl SpawnTable {
    pub fn new() -> SpawnTable {
        SpawnTable{entries: Vec::new(), total_weight: 0.0}
    }

    /// Builder form of [`SpawnTable::set_weight`]
    pub fn add<S:ToString>(mut self, name : S, weight: f32) -> SpawnResult<SpawnTable> {
        self.set_weight(name, weight)?;
        Ok(self)
    }

    /// Merges the given weights into the table.
    ///
    /// Identifiers missing from `weights` keep their current value, so this
    /// updates rather than replaces the table. Fails without touching the
    /// table if the batch is empty or any weight is negative or not finite.
    pub fn set_weights<I, S>(&mut self, weights: I) -> SpawnResult<()>
    where
        I: IntoIterator<Item = (S, f32)>,
        S: ToString,
    {
        let batch : Vec<(String, f32)> = weights.into_iter()
            .map(|(name, weight)| (name.to_string(), weight))
            .collect();

        if batch.is_empty() {
            warn!("Rejected empty weight batch");
            return Err(SpawnError::EmptyWeights);
        }
        for (name, weight) in batch.iter() {
            check_weight(name, *weight)?;
        }

        let count = batch.len();
        for (name, weight) in batch {
            self.upsert(name, weight);
        }
        self.recalculate();
        debug!("Merged {} weights, total weight now {}", count, self.total_weight);
        Ok(())
    }

    /// Inserts or overwrites a single entry
    pub fn set_weight<S:ToString>(&mut self, name: S, weight: f32) -> SpawnResult<()> {
        let name = name.to_string();
        check_weight(&name, weight)?;

        debug!("Set weight of {} to {}", name, weight);
        self.upsert(name, weight);
        self.recalculate();
        Ok(())
    }

    pub fn weight(&self, name: &str) -> SpawnResult<f32> {
        self.entries.iter()
            .find(|e| e.name == name)
            .map(|e| e.weight)
            .ok_or_else(|| SpawnError::NotFound{id: name.to_string()})
    }

    /// Copy of every entry; changing it never affects the table
    pub fn weights(&self) -> HashMap<String, f32> {
        self.entries.iter().map(|e| (e.name.clone(), e.weight)).collect()
    }

    /// Entries in roll order
    pub fn entries(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
        self.entries.iter().map(|e| (e.name.as_str(), e.weight))
    }

    pub fn remove(&mut self, name: &str) -> SpawnResult<f32> {
        let idx = self.entries.iter()
            .position(|e| e.name == name)
            .ok_or_else(|| SpawnError::NotFound{id: name.to_string()})?;

        let removed = self.entries.remove(idx);
        self.recalculate();
        debug!("Removed {} from table", name);
        Ok(removed.weight)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recalculate();
        debug!("Cleared spawn table");
    }

    pub fn total_weight(&self) -> f32 { self.total_weight }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Draws one identifier, each entry winning with `weight / total_weight`
    pub fn roll<R: SpawnRng + ?Sized>(&self, rng : &mut R) -> SpawnResult<String> {
        if self.total_weight <= 0.0 {return Err(SpawnError::NothingToRoll);}

        let roll = rng.roll_up_to(self.total_weight);
        let name = self.pick(roll)?;
        trace!("Rolled {} of {} -> {}", roll, self.total_weight, name);
        Ok(name.to_string())
    }

    fn pick(&self, roll: f32) -> SpawnResult<&str> {
        let mut total = 0.0;

        for entry in self.entries.iter() {
            // zero width in the cumulative range, even for a roll of exactly 0
            if entry.weight <= 0.0 {continue;}
            total += entry.weight;
            if roll <= total {
                return Ok(&entry.name);
            }
        }

        warn!("Rolled {} past total weight {}", roll, self.total_weight);
        Err(SpawnError::RolledPastTotal{roll, total: self.total_weight})
    }

    fn upsert(&mut self, name: String, weight: f32) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.weight = weight,
            None => self.entries.push(Entry::new(name, weight)),
        }
    }

    // Summed in roll order so the last cumulative boundary equals the total exactly
    fn recalculate(&mut self) {
        self.total_weight = self.entries.iter().fold(0.0, |total, e| total + e.weight);
    }
}
