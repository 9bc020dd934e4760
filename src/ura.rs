//! GPS User Range Accuracy (URA) index tables.
use crate::prelude::Error;

/// Highest valid URA index
pub const SV_ACCURACY_GPS_MAX_INDEX_VALUE: usize = 15;

/// Lower accuracy bound (m) of each URA index
const SV_ACCURACY_GPS_MIN_INDEX: [f64; SV_ACCURACY_GPS_MAX_INDEX_VALUE + 1] = [
    0.0, 2.4, 3.4, 4.85, 6.85, 9.65, 13.65, 24.0, 48.0, 96.0, 192.0, 384.0, 768.0, 1536.0,
    3072.0, 6144.0,
];

/// Nominal accuracy (m) of each URA index
const SV_ACCURACY_GPS_NOMINAL_INDEX: [f64; SV_ACCURACY_GPS_MAX_INDEX_VALUE + 1] = [
    2.0, 2.8, 4.0, 5.7, 8.0, 11.3, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0, 1024.0, 2048.0,
    4096.0, 9.999999999999e99,
];

/// Upper accuracy bound (m) of each URA index
const SV_ACCURACY_GPS_MAX_INDEX: [f64; SV_ACCURACY_GPS_MAX_INDEX_VALUE + 1] = [
    2.4, 3.4, 4.85, 6.85, 9.65, 13.65, 24.0, 48.0, 96.0, 192.0, 384.0, 768.0, 1536.0, 3072.0,
    6144.0, 9.999999999999e99,
];

fn lookup(table: &[f64], index: usize) -> Result<f64, Error> {
    table.get(index).copied().ok_or(Error::IndexOutOfRange(index))
}

/// Lower accuracy bound (m) of URA `index`
pub fn sv_accuracy_gps_min_index(index: usize) -> Result<f64, Error> {
    lookup(&SV_ACCURACY_GPS_MIN_INDEX, index)
}

/// Nominal accuracy (m) of URA `index`
pub fn sv_accuracy_gps_nominal_index(index: usize) -> Result<f64, Error> {
    lookup(&SV_ACCURACY_GPS_NOMINAL_INDEX, index)
}

/// Upper accuracy bound (m) of URA `index`
pub fn sv_accuracy_gps_max_index(index: usize) -> Result<f64, Error> {
    lookup(&SV_ACCURACY_GPS_MAX_INDEX, index)
}

/// Smallest URA index whose upper bound covers `accuracy_m`
pub fn accuracy_to_ura(accuracy_m: f64) -> usize {
    SV_ACCURACY_GPS_MAX_INDEX
        .iter()
        .position(|max| accuracy_m <= *max)
        .unwrap_or(SV_ACCURACY_GPS_MAX_INDEX_VALUE)
}

/// Upper accuracy bound (m) of given URA, saturated to the last index.
pub fn ura_to_accuracy(ura: usize) -> f64 {
    SV_ACCURACY_GPS_MAX_INDEX[ura.min(SV_ACCURACY_GPS_MAX_INDEX_VALUE)]
}
