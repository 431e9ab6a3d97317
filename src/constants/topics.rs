/// Root of the data topic; per-city messages go to `{AQI_DATA}/{city}`.
pub const AQI_DATA: &str = "air_quality_index";
