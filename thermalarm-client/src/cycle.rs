use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use thermalarm_api::{Resource, TemperatureLimits, parse_status, parse_temperature};

use crate::error::{Error, Result};
use crate::remote::{RemoteState, fetch_within};

/// Identity of one poll cycle, increasing with every tick of a surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleId(u64);

impl CycleId {
    pub fn next(self) -> Self {
        CycleId(self.0 + 1)
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reading and limits fetched within the same cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub temperature: f64,
    pub limits: TemperatureLimits,
}

/// Status was fetched but the rest of the chain broke off.
#[derive(Debug, thiserror::Error)]
pub enum PartialCycleFailure {
    #[error("Temperature unavailable: {0}")]
    Temperature(Error),

    #[error("Limits unavailable after reading {temperature}: {source}")]
    Limits { temperature: f64, source: Error },
}

impl PartialCycleFailure {
    /// The reading, when the chain got that far.
    pub fn temperature(&self) -> Option<f64> {
        match self {
            PartialCycleFailure::Temperature(_) => None,
            PartialCycleFailure::Limits { temperature, .. } => Some(*temperature),
        }
    }
}

/// Everything one cycle learned about the device.
#[derive(Debug)]
pub struct CycleReport {
    pub cycle: CycleId,
    pub status: Result<bool>,
    /// Present only when the device reported the alarm on
    pub sample: Option<std::result::Result<Sample, PartialCycleFailure>>,
}

impl CycleReport {
    pub fn unreachable(cycle: CycleId, error: Error) -> Self {
        Self {
            cycle,
            status: Err(error),
            sample: None,
        }
    }

    pub fn off(cycle: CycleId) -> Self {
        Self {
            cycle,
            status: Ok(false),
            sample: None,
        }
    }

    pub fn on(cycle: CycleId, sample: std::result::Result<Sample, PartialCycleFailure>) -> Self {
        Self {
            cycle,
            status: Ok(true),
            sample: Some(sample),
        }
    }
}

/// Runs the status → temperature → limits chain for one cycle.
///
/// Each call starts only after the previous one answered, so the reading and
/// the limits it is classified against come from the same cycle.
pub async fn run_cycle(remote: Arc<dyn RemoteState>, cycle: CycleId, limit: Duration) -> CycleReport {
    let on = match fetch_within(remote.as_ref(), &Resource::AlarmStatus, limit).await {
        Ok(body) => parse_status(&body),
        Err(e) => return CycleReport::unreachable(cycle, e),
    };

    if !on {
        return CycleReport::off(cycle);
    }

    CycleReport::on(cycle, sample(remote.as_ref(), limit).await)
}

async fn sample(
    remote: &dyn RemoteState,
    limit: Duration,
) -> std::result::Result<Sample, PartialCycleFailure> {
    let resource = Resource::TemperatureRead;
    let temperature = fetch_within(remote, &resource, limit)
        .await
        .and_then(|body| parse_temperature(&body).map_err(|e| Error::decode(&resource, e)))
        .map_err(PartialCycleFailure::Temperature)?;

    let resource = Resource::TemperatureLimits;
    let limits = fetch_within(remote, &resource, limit)
        .await
        .and_then(|body| TemperatureLimits::from_json(&body).map_err(|e| Error::decode(&resource, e)))
        .map_err(|source| PartialCycleFailure::Limits {
            temperature,
            source,
        })?;

    Ok(Sample {
        temperature,
        limits,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Answers from a fixed table; missing entries fail like a dead link.
    struct Table {
        bodies: HashMap<&'static str, &'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl Table {
        fn new(entries: &[(&'static str, &'static str)]) -> Arc<Self> {
            Arc::new(Self {
                bodies: entries.iter().copied().collect(),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl RemoteState for Table {
        async fn fetch(&self, resource: &Resource) -> Result<String> {
            self.calls.lock().unwrap().push(resource.path().to_string());
            self.bodies
                .get(resource.path())
                .map(|body| body.to_string())
                .ok_or_else(|| Error::transport(resource, "connection refused"))
        }
    }

    const LIMIT: Duration = Duration::from_millis(1200);

    #[tokio::test]
    async fn test_full_chain_in_order() {
        let table = Table::new(&[
            ("alarm/status", "true"),
            ("temperature/read", "30.5"),
            ("temperature/limits", r#"{"min":18,"max":26}"#),
        ]);

        let report = run_cycle(table.clone(), CycleId(7), LIMIT).await;

        assert_eq!(report.cycle, CycleId(7));
        assert!(matches!(report.status, Ok(true)));
        let sample = report.sample.unwrap().unwrap();
        assert_eq!(sample.temperature, 30.5);
        assert_eq!(sample.limits, TemperatureLimits::new(18.0, 26.0));
        assert_eq!(
            *table.calls.lock().unwrap(),
            vec!["alarm/status", "temperature/read", "temperature/limits"]
        );
    }

    #[tokio::test]
    async fn test_off_stops_after_status() {
        let table = Table::new(&[("alarm/status", "false")]);

        let report = run_cycle(table.clone(), CycleId(1), LIMIT).await;

        assert!(matches!(report.status, Ok(false)));
        assert!(report.sample.is_none());
        assert_eq!(table.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_status() {
        let table = Table::new(&[]);

        let report = run_cycle(table, CycleId(1), LIMIT).await;

        assert!(report.status.unwrap_err().is_transport());
        assert!(report.sample.is_none());
    }

    #[tokio::test]
    async fn test_partial_failures_keep_reading() {
        let table = Table::new(&[("alarm/status", "true"), ("temperature/read", "19.25")]);
        let report = run_cycle(table, CycleId(1), LIMIT).await;
        let failure = report.sample.unwrap().unwrap_err();
        assert!(matches!(failure, PartialCycleFailure::Limits { .. }));
        assert_eq!(failure.temperature(), Some(19.25));

        let table = Table::new(&[("alarm/status", "true"), ("temperature/read", "n/a")]);
        let report = run_cycle(table.clone(), CycleId(2), LIMIT).await;
        let failure = report.sample.unwrap().unwrap_err();
        assert!(matches!(
            failure,
            PartialCycleFailure::Temperature(Error::Decode { .. })
        ));
        assert_eq!(failure.temperature(), None);
        assert_eq!(table.calls.lock().unwrap().len(), 2);
    }
}
