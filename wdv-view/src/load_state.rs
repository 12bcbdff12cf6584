use wdv_sightings::error::FetchError;

/// Progress of one network-backed piece of view state.
///
/// `Failed` is kept apart from `Idle` so the UI can tell "load failed"
/// from "nothing requested yet".
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Record a finished load.
    pub fn resolve(&mut self, result: Result<T, FetchError>) {
        *self = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::LoadState;
    use wdv_sightings::error::FetchError;

    #[test]
    fn test_default_is_idle() {
        let state: LoadState<u32> = LoadState::default();
        assert_eq!(state, LoadState::Idle);
        assert!(state.loaded().is_none());
        assert!(state.failure().is_none());
    }

    #[test]
    fn test_resolve() {
        let mut state: LoadState<u32> = LoadState::Loading;
        assert!(state.is_loading());
        state.resolve(Ok(7));
        assert_eq!(state.loaded(), Some(&7));

        state.resolve(Err(FetchError::Status(500)));
        assert!(state.loaded().is_none());
        assert_eq!(state.failure(), Some(&FetchError::Status(500)));
    }
}
