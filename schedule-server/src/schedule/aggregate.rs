//! Schedule aggregation: timetable and service status joined into one board.

use std::future::Future;
use std::sync::Arc;

use futures::future::join;
use tracing::{debug, info};

use crate::domain::{DepartureEntry, RawTimetableEntry, ServiceStatus, StationDirectory};
use crate::odpt::TimetableError;

use super::clock::Clock;
use super::config::RouteConfig;
use super::filter::filter_line;
use super::project::upcoming_departures;

/// Source of raw timetable entries.
///
/// Abstracted so the aggregator can be exercised without a network.
pub trait TimetableSource: Send + Sync {
    fn fetch_timetable(
        &self,
    ) -> impl Future<Output = Result<Vec<RawTimetableEntry>, TimetableError>> + Send;
}

/// Source of the current line status. Infallible: problems are statuses.
pub trait StatusSource: Send + Sync {
    fn fetch_status(&self) -> impl Future<Output = ServiceStatus> + Send;
}

/// A departure annotated with the line status at the time of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledDeparture {
    pub entry: DepartureEntry,
    pub status: ServiceStatus,
}

/// The departures to show, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResponse {
    pub departures: Vec<ScheduledDeparture>,
}

impl ScheduleResponse {
    /// Attach one status to every departure.
    pub fn new(entries: Vec<DepartureEntry>, status: ServiceStatus) -> Self {
        Self {
            departures: entries
                .into_iter()
                .map(|entry| ScheduledDeparture { entry, status })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}

/// Builds the departure board for one request.
///
/// The timetable and status page are fetched concurrently. A timetable
/// failure fails the request; a status failure only changes the label.
pub struct ScheduleAggregator<T, S, C> {
    timetable: T,
    status: S,
    clock: C,
    directory: Arc<StationDirectory>,
    route: RouteConfig,
}

impl<T, S, C> ScheduleAggregator<T, S, C>
where
    T: TimetableSource,
    S: StatusSource,
    C: Clock,
{
    pub fn new(
        timetable: T,
        status: S,
        clock: C,
        directory: Arc<StationDirectory>,
        route: RouteConfig,
    ) -> Self {
        Self {
            timetable,
            status,
            clock,
            directory,
            route,
        }
    }

    /// The route this aggregator serves.
    pub fn route(&self) -> &RouteConfig {
        &self.route
    }

    /// Compute the next departures with the current line status attached.
    pub async fn compute_schedule(&self) -> Result<ScheduleResponse, TimetableError> {
        let (timetable, status) =
            join(self.timetable.fetch_timetable(), self.status.fetch_status()).await;
        let entries = timetable?;

        let line = filter_line(&entries, &self.route.line_prefix, self.route.max_entries);
        debug!(
            fetched = entries.len(),
            on_line = line.len(),
            prefix = %self.route.line_prefix,
            "filtered timetable"
        );

        let now = self.clock.now();
        let departures = upcoming_departures(
            &line,
            &self.directory,
            self.route.travel_minutes,
            now,
            self.route.max_results,
        );

        info!(%now, departures = departures.len(), %status, "computed schedule");

        Ok(ScheduleResponse::new(departures, status))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::{Departure, TimeOfDay, UNKNOWN_STATION};
    use crate::schedule::FixedClock;

    const NAKANO: &str = "odpt.Station:TokyoMetro.Tozai.Nakano";

    /// Timetable source returning canned entries, or a 500 when `None`.
    struct FakeTimetable {
        entries: Option<Vec<RawTimetableEntry>>,
        calls: AtomicUsize,
    }

    impl FakeTimetable {
        fn ok(entries: Vec<RawTimetableEntry>) -> Self {
            Self {
                entries: Some(entries),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                entries: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TimetableSource for FakeTimetable {
        async fn fetch_timetable(&self) -> Result<Vec<RawTimetableEntry>, TimetableError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entries
                .clone()
                .ok_or(TimetableError::UpstreamUnavailable {
                    status: Some(500),
                    message: "API error 500: Internal Server Error".into(),
                })
        }
    }

    struct FakeStatus(ServiceStatus);

    impl StatusSource for FakeStatus {
        async fn fetch_status(&self) -> ServiceStatus {
            self.0
        }
    }

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmm(s).unwrap()
    }

    fn tozai(time: &str) -> RawTimetableEntry {
        RawTimetableEntry::new(
            format!("odpt.Train:TokyoMetro.Tozai.{}", time.replace(':', "")),
            Departure::At(t(time)),
            vec![NAKANO.to_string()],
        )
    }

    fn other_line(time: &str) -> RawTimetableEntry {
        RawTimetableEntry::new(
            "odpt.Train:TokyoMetro.Hibiya.X",
            Departure::At(t(time)),
            vec![NAKANO.to_string()],
        )
    }

    fn aggregator(
        timetable: FakeTimetable,
        status: ServiceStatus,
        now: &str,
    ) -> ScheduleAggregator<FakeTimetable, FakeStatus, FixedClock> {
        ScheduleAggregator::new(
            timetable,
            FakeStatus(status),
            FixedClock(t(now)),
            Arc::new(StationDirectory::default()),
            RouteConfig::default(),
        )
    }

    fn times(response: &ScheduleResponse) -> Vec<String> {
        response
            .departures
            .iter()
            .map(|d| d.entry.departure.to_string())
            .collect()
    }

    #[tokio::test]
    async fn filters_projects_and_annotates() {
        let timetable = FakeTimetable::ok(vec![
            tozai("08:00"),
            other_line("08:07"),
            tozai("08:10"),
            tozai("08:20"),
        ]);
        let agg = aggregator(timetable, ServiceStatus::Normal, "08:05");

        let response = agg.compute_schedule().await.unwrap();

        assert_eq!(times(&response), vec!["08:10", "08:20", "08:00"]);
        for d in &response.departures {
            assert_eq!(d.status, ServiceStatus::Normal);
            assert_eq!(d.entry.destination, "中野");
        }
        assert_eq!(response.departures[0].entry.arrival.to_string(), "08:57");
    }

    #[tokio::test]
    async fn status_failure_degrades_label_only() {
        let timetable = FakeTimetable::ok(vec![tozai("09:00"), tozai("09:10")]);
        let agg = aggregator(timetable, ServiceStatus::FetchFailed, "08:00");

        let response = agg.compute_schedule().await.unwrap();

        assert_eq!(response.len(), 2);
        assert!(response.departures.iter().all(|d| d.status == ServiceStatus::FetchFailed));
    }

    #[tokio::test]
    async fn missing_status_container_degrades_label_only() {
        let timetable = FakeTimetable::ok(vec![tozai("09:00")]);
        let agg = aggregator(timetable, ServiceStatus::Unknown, "08:00");

        let response = agg.compute_schedule().await.unwrap();
        assert_eq!(response.departures[0].status.label(), "status container not found");
    }

    #[tokio::test]
    async fn timetable_failure_fails_request() {
        let agg = aggregator(FakeTimetable::failing(), ServiceStatus::Normal, "08:00");

        let err = agg.compute_schedule().await.unwrap_err();
        assert!(matches!(
            err,
            TimetableError::UpstreamUnavailable {
                status: Some(500),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn one_timetable_fetch_per_request() {
        let agg = aggregator(FakeTimetable::ok(vec![]), ServiceStatus::Normal, "08:00");

        agg.compute_schedule().await.unwrap();
        agg.compute_schedule().await.unwrap();

        assert_eq!(agg.timetable.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn no_line_entries_is_empty_response() {
        let timetable = FakeTimetable::ok(vec![other_line("08:00"), other_line("09:00")]);
        let agg = aggregator(timetable, ServiceStatus::Normal, "08:00");

        let response = agg.compute_schedule().await.unwrap();
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn unknown_destination_code_does_not_fail() {
        let mut entry = tozai("10:00");
        entry.destination_codes = vec!["odpt.Station:Tokyu.DenEnToshi.ChuoRinkan".into()];
        let agg = aggregator(FakeTimetable::ok(vec![entry]), ServiceStatus::Normal, "08:00");

        let response = agg.compute_schedule().await.unwrap();
        assert_eq!(response.departures[0].entry.destination, UNKNOWN_STATION);
    }

    #[tokio::test]
    async fn bound_applies_before_projection() {
        let route = RouteConfig {
            max_entries: 2,
            ..RouteConfig::default()
        };
        let agg = ScheduleAggregator::new(
            FakeTimetable::ok(vec![tozai("06:00"), tozai("06:10"), tozai("23:00")]),
            FakeStatus(ServiceStatus::Normal),
            FixedClock(t("12:00")),
            Arc::new(StationDirectory::default()),
            route,
        );

        // 23:00 is beyond the bound, so only next-day trains remain
        let response = agg.compute_schedule().await.unwrap();
        assert_eq!(times(&response), vec!["06:00", "06:10"]);
    }
}
