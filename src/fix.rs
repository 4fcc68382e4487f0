use bon::bon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single positioning reading.
///
/// A fix is constructed once and never mutated. Optional fields use
/// `Option` as their presence flag, so a reported accuracy of `Some(0.0)`
/// stays distinct from an absent one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFix {
    /// Signed degrees, positive north. Passed through unvalidated.
    pub latitude: f64,
    /// Signed degrees, positive east. Passed through unvalidated.
    pub longitude: f64,
    /// Meters.
    pub altitude: f64,
    /// Ground speed in meters per second.
    pub speed: f64,
    /// Direction of travel in degrees, 0-360 nominal.
    pub bearing: f64,
    /// Epoch timestamp in milliseconds.
    pub time: i64,
    /// Horizontal/vertical accuracy radius in meters, if reported.
    pub accuracy: Option<f64>,
    /// Speed accuracy in meters per second, if reported.
    pub speed_accuracy: Option<f64>,
    /// Bearing accuracy in degrees, if reported.
    pub bearing_accuracy: Option<f64>,
}

#[bon]
impl LocationFix {
    #[builder]
    pub fn new(
        latitude: f64,
        longitude: f64,
        altitude: f64,
        speed: f64,
        bearing: f64,
        time: i64,
        accuracy: Option<f64>,
        speed_accuracy: Option<f64>,
        bearing_accuracy: Option<f64>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
            speed,
            bearing,
            time,
            accuracy,
            speed_accuracy,
            bearing_accuracy,
        }
    }

    /// The fix time as a UTC datetime.
    ///
    /// Returns `None` when the millisecond timestamp falls outside chrono's
    /// representable range. The card displays the raw integer; this is for
    /// callers that want a calendar reading of the same instant.
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}
