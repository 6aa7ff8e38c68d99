// src/orchestrator.rs
use std::time::Duration;

use tokio::task::JoinSet;

use crate::client::GeoClient;
use crate::error::GeoError;
use crate::geopoint::{Lookup, ResolvedLocation};
use crate::haversine::{self, DistanceUnit};

type LookupOutcome = Result<Lookup, GeoError>;

impl GeoClient {
    /// Resolves both place names concurrently and returns the great-circle distance between them.
    ///
    /// Uses the client's configured lookup timeout, if any. See
    /// [`GeoClient::get_distance_with_timeout`] for a per-call deadline.
    ///
    /// # Errors
    /// * `GeoError::Transport` / `GeoError::Decode` from either lookup, returned unchanged.
    /// * `GeoError::NotFound` naming the query the provider had no candidates for.
    /// * `GeoError::Timeout` if a deadline is configured and a lookup has not reported by then.
    pub async fn get_distance(
        &self,
        query_a: &str,
        query_b: &str,
        unit: DistanceUnit,
    ) -> Result<f64, GeoError> {
        let (a, b) = self.resolve_pair(query_a, query_b).await?;
        Ok(haversine::distance(a.coordinate, b.coordinate, unit))
    }

    /// Like [`GeoClient::get_distance`] but bounded by `timeout` instead of the client default.
    pub async fn get_distance_with_timeout(
        &self,
        query_a: &str,
        query_b: &str,
        unit: DistanceUnit,
        timeout: Duration,
    ) -> Result<f64, GeoError> {
        let (a, b) = self
            .resolve_pair_with_deadline(query_a, query_b, Some(timeout))
            .await?;
        Ok(haversine::distance(a.coordinate, b.coordinate, unit))
    }

    /// Resolves two place names concurrently, returning both locations in argument order.
    pub async fn resolve_pair(
        &self,
        query_a: &str,
        query_b: &str,
    ) -> Result<(ResolvedLocation, ResolvedLocation), GeoError> {
        self.resolve_pair_with_deadline(query_a, query_b, self.lookup_timeout)
            .await
    }

    async fn resolve_pair_with_deadline(
        &self,
        query_a: &str,
        query_b: &str,
        deadline: Option<Duration>,
    ) -> Result<(ResolvedLocation, ResolvedLocation), GeoError> {
        let mut join_set = JoinSet::new();
        for (slot, query) in [query_a, query_b].into_iter().enumerate() {
            let client = self.clone();
            let query = query.to_string();
            join_set.spawn(async move {
                let outcome = client.resolve(&query).await;
                (slot, outcome)
            });
        }

        let (outcome_a, outcome_b) = match deadline {
            Some(limit) => match tokio::time::timeout(limit, join_both(&mut join_set)).await {
                Ok(joined) => joined?,
                Err(_) => {
                    log::warn!(
                        "Geocoding '{}' and '{}' exceeded {:?}; cancelling outstanding lookups",
                        query_a,
                        query_b,
                        limit
                    );
                    join_set.abort_all();
                    return Err(GeoError::Timeout(limit));
                }
            },
            None => join_both(&mut join_set).await?,
        };

        // Faults take precedence over an empty match on the other side.
        let (lookup_a, lookup_b) = (outcome_a?, outcome_b?);

        let location_a = lookup_a
            .found()
            .ok_or_else(|| GeoError::NotFound(query_a.to_string()))?;
        let location_b = lookup_b
            .found()
            .ok_or_else(|| GeoError::NotFound(query_b.to_string()))?;

        Ok((location_a, location_b))
    }
}

// Waits for exactly the two spawned lookups, in whichever order they finish, and puts
// each outcome back in its argument slot.
async fn join_both(
    join_set: &mut JoinSet<(usize, LookupOutcome)>,
) -> Result<(LookupOutcome, LookupOutcome), GeoError> {
    let mut slots: [Option<LookupOutcome>; 2] = [None, None];
    while let Some(joined) = join_set.join_next().await {
        let (slot, outcome) = joined.map_err(|e| GeoError::TaskFailed(e.to_string()))?;
        slots[slot] = Some(outcome);
    }

    match slots {
        [Some(a), Some(b)] => Ok((a, b)),
        _ => Err(GeoError::TaskFailed(
            "a geocoding lookup finished without reporting".to_string(),
        )),
    }
}
