//! In-memory settlement repository.

use crate::data::City;

/// Owns the loaded settlements. Built once at startup, then read-only.
#[derive(Debug, Clone, Default)]
pub struct CityRepo {
    cities: Vec<City>,
}

impl CityRepo {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    pub fn all(&self) -> &[City] {
        &self.cities
    }

    pub fn get(&self, id: u32) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
