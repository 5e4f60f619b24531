//! The embedded patient-vitals dataset and its column names.
//!
//! The fixture is returned as an owned value so the pipeline entry point
//! receives the table explicitly; there is no process-wide dataset state.

use polars::prelude::*;

use crate::error::Result;

/// Integer identifier column, unique per patient.
pub const PATIENT_ID: &str = "PatientID";
/// Patient age in years.
pub const AGE: &str = "Age";
/// Systolic blood pressure reading.
pub const BLOOD_PRESSURE: &str = "BloodPressure";
/// Blood sugar level reading.
pub const SUGAR_LEVEL: &str = "SugarLevel";
/// Body weight in kilograms.
pub const WEIGHT: &str = "Weight";

/// The three vitals columns monitored for outliers and standardization.
pub const MONITORED_COLUMNS: [&str; 3] = [BLOOD_PRESSURE, SUGAR_LEVEL, WEIGHT];

/// Build the embedded 20-row patient vitals table.
///
/// `PatientID` and `Age` are integer columns; the three monitored vitals
/// are `Float64` so the standardization stage can rewrite them in place.
pub fn patient_vitals() -> Result<DataFrame> {
    let df = df![
        PATIENT_ID => (1i32..=20).collect::<Vec<i32>>(),
        AGE => [44i32, 39, 49, 58, 35, 25, 46, 28, 60, 55, 41, 48, 58, 35, 67, 70, 43, 74, 19, 56],
        BLOOD_PRESSURE => [
            118.0f64, 109.0, 149.0, 121.0, 109.0, 129.0, 132.0, 93.0, 145.0, 125.0,
            143.0, 141.0, 93.0, 145.0, 176.0, 109.0, 148.0, 122.0, 147.0, 119.0,
        ],
        SUGAR_LEVEL => [
            87.89f64, 177.32, 144.14, 90.35, 126.42, 95.27, 146.60, 109.75, 103.19, 197.72,
            180.57, 181.97, 181.78, 133.38, 87.00, 193.27, 135.93, 129.41, 125.48, 160.71,
        ],
        WEIGHT => [
            105.57f64, 105.70, 77.78, 115.24, 70.38, 119.05, 62.17, 81.79, 94.63, 118.59,
            103.58, 61.45, 50.68, 113.18, 84.93, 77.71, 106.57, 83.30, 74.08, 111.86,
        ],
    ]?;

    Ok(df)
}
