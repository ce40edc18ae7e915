//! Walk-or-drive choice for access and egress legs.

use tracing::trace;

use crate::domain::{Hop, Leg, TravelMode};
use crate::provider::{LegFetcher, LookupError};

/// Resolve the leg connecting a trip endpoint and a station.
///
/// A walk is preferred. A walk longer than `walk_threshold_meters` is
/// replaced by a drive when one exists, and a missing walk falls through
/// to whatever the drive request yields. The returned leg is always one
/// the fetcher produced, never a blend of two.
pub async fn select_leg<F: LegFetcher>(
    fetcher: &F,
    hop: &Hop,
    walk_threshold_meters: u32,
) -> Result<Leg, LookupError> {
    let walk = match fetcher.fetch_leg(hop, TravelMode::Walk, None).await {
        Ok(walk) => walk,
        Err(e) => {
            trace!(from = %hop.from.name, to = %hop.to.name, error = %e, "no walk, trying drive");
            return fetcher.fetch_leg(hop, TravelMode::Drive, None).await;
        }
    };

    if walk.distance_meters() <= walk_threshold_meters {
        return Ok(walk);
    }

    match fetcher.fetch_leg(hop, TravelMode::Drive, None).await {
        Ok(drive) => Ok(drive),
        Err(e) => {
            trace!(from = %hop.from.name, to = %hop.to.name, error = %e, "no drive, keeping long walk");
            Ok(walk)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, Endpoint};
    use std::sync::Mutex;

    fn hop() -> Hop {
        Hop::new(
            Endpoint::new("Home", Coordinate::new(28.6139, 77.2090).unwrap()),
            Endpoint::new("Rajiv Chowk", Coordinate::new(28.6328, 77.2197).unwrap()),
        )
    }

    /// Fetcher with a fixed answer per mode, recording each request.
    struct ModeFetcher {
        walk: Result<u32, LookupError>,
        drive: Result<u32, LookupError>,
        requests: Mutex<Vec<TravelMode>>,
    }

    impl ModeFetcher {
        fn new(walk: Result<u32, LookupError>, drive: Result<u32, LookupError>) -> Self {
            Self {
                walk,
                drive,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<TravelMode> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl LegFetcher for ModeFetcher {
        async fn fetch_leg(
            &self,
            hop: &Hop,
            mode: TravelMode,
            _departure_epoch_secs: Option<i64>,
        ) -> Result<Leg, LookupError> {
            self.requests.lock().unwrap().push(mode);
            let distance = match mode {
                TravelMode::Walk => self.walk.clone()?,
                TravelMode::Drive => self.drive.clone()?,
                TravelMode::Transit => return Err(LookupError::NoResult),
            };
            Ok(Leg::new(mode, hop.clone(), distance, distance / 2))
        }
    }

    #[tokio::test]
    async fn short_walk_is_kept() {
        let fetcher = ModeFetcher::new(Ok(350), Ok(500));

        let leg = select_leg(&fetcher, &hop(), 400).await.unwrap();
        assert_eq!(leg.mode(), TravelMode::Walk);
        assert_eq!(leg.distance_meters(), 350);
        assert_eq!(fetcher.requests(), vec![TravelMode::Walk]);
    }

    #[tokio::test]
    async fn walk_at_threshold_is_kept() {
        let fetcher = ModeFetcher::new(Ok(400), Ok(500));

        let leg = select_leg(&fetcher, &hop(), 400).await.unwrap();
        assert_eq!(leg.mode(), TravelMode::Walk);
    }

    #[tokio::test]
    async fn long_walk_becomes_drive() {
        let fetcher = ModeFetcher::new(Ok(1_200), Ok(1_500));

        let leg = select_leg(&fetcher, &hop(), 400).await.unwrap();
        assert_eq!(leg.mode(), TravelMode::Drive);
        assert_eq!(leg.distance_meters(), 1_500);
        assert_eq!(
            fetcher.requests(),
            vec![TravelMode::Walk, TravelMode::Drive]
        );
    }

    #[tokio::test]
    async fn long_walk_kept_without_drive() {
        let fetcher = ModeFetcher::new(Ok(1_200), Err(LookupError::Status("ZERO_RESULTS".into())));

        let leg = select_leg(&fetcher, &hop(), 400).await.unwrap();
        assert_eq!(leg.mode(), TravelMode::Walk);
        assert_eq!(leg.distance_meters(), 1_200);
    }

    #[tokio::test]
    async fn missing_walk_falls_back_to_drive() {
        let fetcher = ModeFetcher::new(Err(LookupError::NoResult), Ok(900));

        let leg = select_leg(&fetcher, &hop(), 400).await.unwrap();
        assert_eq!(leg.mode(), TravelMode::Drive);
        assert_eq!(leg.distance_meters(), 900);
    }

    #[tokio::test]
    async fn both_missing_is_absent() {
        let fetcher = ModeFetcher::new(
            Err(LookupError::NoResult),
            Err(LookupError::Unavailable("timeout".into())),
        );

        let err = select_leg(&fetcher, &hop(), 400).await.unwrap_err();
        assert_eq!(err, LookupError::Unavailable("timeout".into()));
    }

    #[tokio::test]
    async fn selection_is_idempotent() {
        for (walk, drive) in [(Ok(100), Ok(200)), (Ok(800), Ok(900)), (Err(LookupError::NoResult), Ok(50))] {
            let fetcher = ModeFetcher::new(walk, drive);
            let first = select_leg(&fetcher, &hop(), 400).await;
            let second = select_leg(&fetcher, &hop(), 400).await;
            assert_eq!(first, second);
        }
    }
}
