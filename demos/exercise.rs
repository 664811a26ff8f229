//! Logs every supported value type at every severity, then shows a per-tag filter.
//!
//! ```not_rust
//! cargo run --example exercise --features tracing
//! ```

use safelog::{Severity, debug, error, filter::Filter, info, sink::TracingSink, warn};

const TAG: &str = "LoggerTest";

static FILTERED: Filter<TracingSink> = Filter::new(TracingSink);

macro_rules! exercise {
    ($level:ident) => {
        $level!(TAG, "uint8_t max", u8::MAX);
        $level!(TAG, "uint16_t max", u16::MAX);
        $level!(TAG, "uint32_t max", u32::MAX);
        $level!(TAG, "uint64_t max", u64::MAX);
        $level!(TAG, "int8_t min", i8::MIN);
        $level!(TAG, "int16_t min", i16::MIN);
        $level!(TAG, "int32_t min", i32::MIN);
        $level!(TAG, "int64_t min", i64::MIN);
        $level!(TAG, "int", -5_isize);
        $level!(TAG, "float", 3.3_f32);
        $level!(TAG, "double", core::f64::consts::PI);
        $level!(TAG, "char", 'A');
        $level!(TAG, "bool true", true);
        $level!(TAG, "bool false", false);
        $level!(TAG, "string", "Active");
    };
}

fn main() -> Result<(), Box<dyn core::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("safelog=debug")
        .init();

    exercise!(error);
    exercise!(warn);
    exercise!(info);
    exercise!(debug);

    // Silence everything below `WARN` for the sensor tags, keep the rest at `DEBUG`.
    FILTERED.set_level("*", Severity::Debug)?;
    FILTERED.set_level("sensor*", Severity::Warn)?;

    for tag in ["sensor_adc", "wifi"] {
        debug!(sink: FILTERED, tag, "debug visible", tag != "sensor_adc");
        warn!(sink: FILTERED, tag, "warn visible", true);
    }

    Ok(())
}
