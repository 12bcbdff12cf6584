//! The single owner of all viewer state.
//!
//! Every user action and fetch completion goes through a `ViewCoordinator`
//! method. Methods that require a fetch return the request to run; the
//! caller performs it and passes the result back with the same token.

use crate::load_state::LoadState;
use crate::loader::{DataLoader, Resolution, SightingsRequest};
use crate::selection::Selection;
use crate::visibility::{ResponsiveController, Visibility};
use log::{debug, warn};
use wdv_sightings::catalog::Catalog;
use wdv_sightings::error::FetchError;
use wdv_sightings::month::Month;
use wdv_sightings::sighting::SightingData;

#[derive(Debug)]
pub struct ViewCoordinator {
    loader: DataLoader,
    selection: Selection,
    responsive: ResponsiveController,
}

impl ViewCoordinator {
    /// Start with nothing selected and the given viewport width.
    pub fn new(width: u32) -> Self {
        Self {
            loader: DataLoader::new(),
            selection: Selection::default(),
            responsive: ResponsiveController::new(width),
        }
    }

    // ───────────────────── Catalog ─────────────────────

    /// Returns `true` when the caller should fetch the catalog (first call only).
    pub fn begin_catalog_load(&mut self) -> bool {
        self.loader.begin_catalog_load()
    }

    pub fn finish_catalog_load(&mut self, result: Result<Catalog, FetchError>) {
        self.loader.finish_catalog_load(result);
    }

    pub fn catalog(&self) -> &LoadState<Catalog> {
        self.loader.catalog()
    }

    // ───────────────────── Selection ─────────────────────

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Pick a species. Returns the sightings fetch to run, if any.
    pub fn select_species(&mut self, species: impl Into<String>) -> Option<SightingsRequest> {
        if !self.selection.set_species(species) {
            return None;
        }
        self.request_sightings()
    }

    /// Pick a year. Returns the sightings fetch to run, if any.
    pub fn select_year(&mut self, year: i32) -> Option<SightingsRequest> {
        if !self.selection.set_year(year) {
            return None;
        }
        self.request_sightings()
    }

    pub fn select_month(&mut self, month: Option<Month>) {
        if self.selection.set_month(month) {
            debug!("Selected month: {:?}", month.map(Month::number));
        }
    }

    fn request_sightings(&mut self) -> Option<SightingsRequest> {
        let query = self.selection.query()?;
        Some(self.loader.begin_sightings_load(query))
    }

    // ───────────────────── Sightings ─────────────────────

    /// Apply a finished sightings fetch if it still matches the selection.
    ///
    /// A successful apply also clears the month, which indexed the
    /// previous data set.
    pub fn finish_sightings_load(
        &mut self,
        request: &SightingsRequest,
        result: Result<SightingData, FetchError>,
    ) -> Resolution {
        if self.selection.query().as_ref() != Some(request.query()) {
            warn!(
                "Discarding sightings for {} {}: selection has moved on",
                request.query().species,
                request.query().year
            );
            return Resolution::Discarded;
        }
        let succeeded = result.is_ok();
        let resolution = self.loader.finish_sightings_load(request, result);
        if resolution == Resolution::Applied && succeeded {
            self.selection.set_month(None);
        }
        resolution
    }

    pub fn sightings(&self) -> &LoadState<SightingData> {
        self.loader.sightings()
    }

    pub fn sighting_data(&self) -> Option<&SightingData> {
        self.loader.sightings().loaded()
    }

    // ───────────────────── Viewport ─────────────────────

    /// Track a window resize. Cheap; unchanged widths are ignored.
    pub fn resize(&mut self, width: u32) {
        self.responsive.resize(width);
    }

    pub fn width(&self) -> u32 {
        self.responsive.width()
    }

    pub fn mobile_map_visible(&self) -> bool {
        self.responsive.mobile_map_visible()
    }

    /// Switch the narrow-viewport region between chart and map.
    ///
    /// The month pick is cleared along with it.
    pub fn toggle_mobile_map(&mut self) {
        let visible = self.responsive.toggle_mobile_map();
        debug!("Mobile map visible: {}", visible);
        self.selection.set_month(None);
    }

    pub fn visibility(&self) -> Visibility {
        self.responsive.visibility(self.sighting_data().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::ToggleAlignment;
    use serde_json::json;
    use wdv_sightings::sighting::SightingsQuery;

    fn catalog() -> Catalog {
        Catalog {
            species: vec!["Blue Whale".to_string(), "Gray Whale".to_string()],
            years: vec![2019, 2020],
        }
    }

    fn records() -> SightingData {
        SightingData::from_value(json!([
            {"month": 1, "latitude": 37.69, "longitude": -123.0},
            {"month": 3, "latitude": 37.70, "longitude": -123.01}
        ]))
    }

    #[test]
    fn test_no_request_until_both_fields_picked() {
        let mut view = ViewCoordinator::new(1500);
        assert!(view.select_species("Gray Whale").is_none());
        let request = view.select_year(2020).expect("request once both are set");
        assert_eq!(request.query(), &SightingsQuery::new("Gray Whale", 2020));
        assert!(view.sightings().is_loading());
    }

    #[test]
    fn test_every_change_requests_again() {
        let mut view = ViewCoordinator::new(1500);
        view.select_species("Gray Whale");
        let first = view.select_year(2020).unwrap();
        let second = view.select_year(2019).unwrap();
        let third = view.select_species("Blue Whale").unwrap();
        assert!(first.generation() < second.generation());
        assert!(second.generation() < third.generation());
        assert_eq!(third.query(), &SightingsQuery::new("Blue Whale", 2019));
    }

    #[test]
    fn test_repeated_identical_pick_is_idempotent() {
        let mut view = ViewCoordinator::new(1500);
        view.select_species("Gray Whale");
        let request = view.select_year(2020).unwrap();
        view.finish_sightings_load(&request, Ok(records()));

        assert!(view.select_year(2020).is_none());
        assert!(view.select_species("Gray Whale").is_none());
        assert_eq!(view.sighting_data(), Some(&records()));
    }

    #[test]
    fn test_late_response_for_old_selection_is_discarded() {
        let mut view = ViewCoordinator::new(1500);
        view.select_species("A");
        let a = view.select_year(2020).unwrap();
        view.select_species("B");
        let b = view.select_year(2021).unwrap();

        let b_data = SightingData::from_value(json!([{"species": "B", "year": 2021}]));
        assert_eq!(
            view.finish_sightings_load(&b, Ok(b_data.clone())),
            Resolution::Applied
        );
        assert_eq!(
            view.finish_sightings_load(&a, Ok(SightingData::from_value(json!([{"species": "A"}])))),
            Resolution::Discarded
        );
        assert_eq!(view.sighting_data(), Some(&b_data));
        assert_eq!(view.selection().query(), Some(SightingsQuery::new("B", 2021)));
    }

    #[test]
    fn test_success_resets_month() {
        let mut view = ViewCoordinator::new(800);
        view.select_species("Gray Whale");
        let first = view.select_year(2020).unwrap();
        view.finish_sightings_load(&first, Ok(records()));
        view.select_month(Month::new(3).ok());
        assert_eq!(view.selection().month(), Month::new(3).ok());

        let second = view.select_year(2019).unwrap();
        view.finish_sightings_load(&second, Ok(records()));
        assert_eq!(view.selection().month(), None);
    }

    #[test]
    fn test_failure_hides_chart_and_is_reported() {
        let mut view = ViewCoordinator::new(800);
        view.select_species("Gray Whale");
        let first = view.select_year(2020).unwrap();
        view.finish_sightings_load(&first, Ok(records()));
        assert!(view.visibility().show_chart);

        let second = view.select_year(2019).unwrap();
        view.finish_sightings_load(&second, Err(FetchError::Status(502)));
        assert_eq!(view.sightings().failure(), Some(&FetchError::Status(502)));
        let v = view.visibility();
        assert!(!v.show_chart);
        assert!(!v.show_toggle);
    }

    #[test]
    fn test_wide_viewport_without_selection() {
        let mut view = ViewCoordinator::new(1500);
        assert!(view.begin_catalog_load());
        assert!(view.catalog().loaded().is_none());

        let v = view.visibility();
        assert!(v.show_desktop_map);
        assert!(!v.show_chart);
        assert!(!v.show_mobile_map);
        assert!(!v.show_toggle);

        view.finish_catalog_load(Ok(catalog()));
        let loaded = view.catalog().loaded().unwrap();
        assert_eq!(loaded.species, vec!["Blue Whale", "Gray Whale"]);
        assert_eq!(loaded.years, vec![2019, 2020]);
        assert_eq!(view.visibility(), v);
        assert!(!view.begin_catalog_load());
    }

    #[test]
    fn test_narrow_viewport_toggle_scenario() {
        let mut view = ViewCoordinator::new(800);
        view.begin_catalog_load();
        view.finish_catalog_load(Ok(catalog()));

        view.select_species("Gray Whale");
        let request = view.select_year(2020).unwrap();
        assert_eq!(
            view.finish_sightings_load(&request, Ok(records())),
            Resolution::Applied
        );

        let v = view.visibility();
        assert!(v.show_chart);
        assert!(v.show_toggle);
        assert_eq!(v.toggle_alignment, ToggleAlignment::End);
        assert!(!v.show_mobile_map);
        assert!(!v.show_desktop_map);

        view.select_month(Month::new(5).ok());
        view.toggle_mobile_map();

        let v = view.visibility();
        assert!(!v.show_chart);
        assert!(v.show_mobile_map);
        assert!(v.show_toggle);
        assert_eq!(v.toggle_alignment, ToggleAlignment::Start);
        assert_eq!(view.selection().month(), None);
    }

    #[test]
    fn test_refetch_keeps_toggle_flag() {
        let mut view = ViewCoordinator::new(800);
        view.select_species("Gray Whale");
        let first = view.select_year(2020).unwrap();
        view.finish_sightings_load(&first, Ok(records()));
        view.toggle_mobile_map();

        let second = view.select_year(2019).unwrap();
        assert!(view.mobile_map_visible());
        assert!(!view.visibility().show_toggle);

        view.finish_sightings_load(&second, Ok(records()));
        assert!(view.visibility().show_mobile_map);
    }

    #[test]
    fn test_resize_crosses_breakpoint() {
        let mut view = ViewCoordinator::new(1500);
        view.select_species("Gray Whale");
        let request = view.select_year(2020).unwrap();
        view.finish_sightings_load(&request, Ok(records()));
        assert!(view.visibility().show_desktop_map);

        view.resize(900);
        assert_eq!(view.width(), 900);
        let v = view.visibility();
        assert!(!v.show_desktop_map);
        assert!(v.show_chart);
        assert!(v.show_toggle);
    }
}
