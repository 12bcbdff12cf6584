use wdv_sightings::month::Month;
use wdv_sightings::sighting::SightingsQuery;

/// The user's current picks.
///
/// `species` and `year` come from the dropdowns, `month` from the chart.
/// Setters report whether the value actually changed so the caller can
/// skip redundant fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    species: Option<String>,
    year: Option<i32>,
    month: Option<Month>,
}

impl Selection {
    pub fn species(&self) -> Option<&str> {
        self.species.as_deref()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn month(&self) -> Option<Month> {
        self.month
    }

    pub fn set_species(&mut self, species: impl Into<String>) -> bool {
        let species = species.into();
        if self.species.as_deref() == Some(species.as_str()) {
            return false;
        }
        self.species = Some(species);
        true
    }

    pub fn set_year(&mut self, year: i32) -> bool {
        if self.year == Some(year) {
            return false;
        }
        self.year = Some(year);
        true
    }

    pub fn set_month(&mut self, month: Option<Month>) -> bool {
        if self.month == month {
            return false;
        }
        self.month = month;
        true
    }

    /// The filtered-sightings query, present once both species and year are picked.
    pub fn query(&self) -> Option<SightingsQuery> {
        match (&self.species, self.year) {
            (Some(species), Some(year)) => Some(SightingsQuery::new(species.clone(), year)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;
    use wdv_sightings::month::Month;
    use wdv_sightings::sighting::SightingsQuery;

    #[test]
    fn test_query_requires_both_fields() {
        let mut selection = Selection::default();
        assert!(selection.query().is_none());

        selection.set_year(2020);
        assert!(selection.query().is_none());

        selection.set_species("Gray Whale");
        assert_eq!(
            selection.query(),
            Some(SightingsQuery::new("Gray Whale", 2020))
        );
    }

    #[test]
    fn test_setters_report_changes() {
        let mut selection = Selection::default();
        assert!(selection.set_species("Blue Whale"));
        assert!(!selection.set_species("Blue Whale"));
        assert!(selection.set_species("Gray Whale"));

        assert!(selection.set_year(2019));
        assert!(!selection.set_year(2019));

        let march = Month::new(3).ok();
        assert!(selection.set_month(march));
        assert!(!selection.set_month(march));
        assert!(selection.set_month(None));
        assert_eq!(selection.month(), None);
    }
}
