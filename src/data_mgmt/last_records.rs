use std::collections::HashMap;

use super::models::{CityRecord, Record};

/// Last published record per city, held in memory for the life of the
/// process. Owned by the produce loop; never persisted.
#[derive(Debug, Default)]
pub struct LastRecords {
    by_city: HashMap<String, Record>,
}

impl LastRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, city: &str) -> Option<&Record> {
        self.by_city.get(city)
    }

    pub fn len(&self) -> usize {
        self.by_city.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_city.is_empty()
    }

    /// Merge one cycle's fetch results. A fresh record is accepted only if
    /// its city is not yet tracked or its measurement time is strictly newer
    /// than the stored one; anything else is dropped. Returns the accepted
    /// records in city order.
    pub fn absorb(&mut self, fresh: HashMap<String, Record>) -> Vec<CityRecord> {
        let mut updates = Vec::new();
        for (city, record) in fresh {
            let newer = match self.by_city.get(&city) {
                Some(last) => record.time > last.time,
                None => true,
            };
            if newer {
                self.by_city.insert(city.clone(), record.clone());
                updates.push(CityRecord { city, record });
            }
        }
        updates.sort_by(|a, b| a.city.cmp(&b.city));
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_mgmt::models::AqiValue;

    fn rec(aqi: i64, time: &str) -> Record {
        Record {
            aqi: AqiValue::Int(aqi),
            time: time.parse().unwrap(),
        }
    }

    const T0: &str = "2024-05-01T10:00:00+02:00";
    const T1: &str = "2024-05-01T11:00:00+02:00";

    #[test]
    fn bootstrap_accepts_every_city() {
        let mut last = LastRecords::new();
        let fresh = HashMap::from([
            ("zurich".to_string(), rec(50, T0)),
            ("geneva".to_string(), rec(40, T0)),
        ]);

        let updates = last.absorb(fresh);

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].city, "geneva");
        assert_eq!(updates[1].city, "zurich");
        assert_eq!(last.len(), 2);
    }

    #[test]
    fn strictly_newer_record_replaces_and_is_returned() {
        let mut last = LastRecords::new();
        last.absorb(HashMap::from([
            ("zurich".to_string(), rec(50, T0)),
            ("geneva".to_string(), rec(40, T0)),
        ]));

        let updates = last.absorb(HashMap::from([
            ("zurich".to_string(), rec(50, T0)),
            ("geneva".to_string(), rec(45, T1)),
        ]));

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].city, "geneva");
        assert_eq!(updates[0].record, rec(45, T1));
        assert_eq!(last.get("geneva"), Some(&rec(45, T1)));
        assert_eq!(last.get("zurich"), Some(&rec(50, T0)));
    }

    #[test]
    fn unchanged_fetch_result_yields_no_updates() {
        let fresh = HashMap::from([("zurich".to_string(), rec(50, T0))]);
        let mut last = LastRecords::new();
        last.absorb(fresh.clone());

        assert!(last.absorb(fresh).is_empty());
    }

    #[test]
    fn older_record_is_dropped() {
        let mut last = LastRecords::new();
        last.absorb(HashMap::from([("basel".to_string(), rec(60, T1))]));

        let updates = last.absorb(HashMap::from([("basel".to_string(), rec(55, T0))]));

        assert!(updates.is_empty());
        assert_eq!(last.get("basel"), Some(&rec(60, T1)));
    }

    #[test]
    fn city_missing_from_fetch_is_left_untouched() {
        let mut last = LastRecords::new();
        last.absorb(HashMap::from([
            ("zurich".to_string(), rec(50, T0)),
            ("basel".to_string(), rec(60, T0)),
        ]));

        // basel's fetch failed this cycle; zurich came back unchanged
        let updates = last.absorb(HashMap::from([("zurich".to_string(), rec(50, T0))]));

        assert!(updates.is_empty());
        assert_eq!(last.get("basel"), Some(&rec(60, T0)));
    }

    #[test]
    fn city_first_seen_after_bootstrap_is_accepted() {
        let mut last = LastRecords::new();
        last.absorb(HashMap::from([("zurich".to_string(), rec(50, T0))]));

        let updates = last.absorb(HashMap::from([
            ("zurich".to_string(), rec(50, T0)),
            ("basel".to_string(), rec(60, T1)),
        ]));

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].city, "basel");
    }

    #[test]
    fn timestamps_compare_across_offsets() {
        let mut last = LastRecords::new();
        last.absorb(HashMap::from([(
            "lugano".to_string(),
            rec(30, "2024-05-01T10:00:00+02:00"),
        )]));

        // Same instant, different offset: not strictly newer
        let updates = last.absorb(HashMap::from([(
            "lugano".to_string(),
            rec(30, "2024-05-01T08:00:00+00:00"),
        )]));

        assert!(updates.is_empty());
    }
}
