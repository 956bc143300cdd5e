use collectd_metrics::{Distribution, Snapshot};

/// A single scalar extracted from a snapshot, not yet addressed to a host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub type_instance: &'static str,
    pub value: SampleValue,
}

/// The numeric kind a sample carries to the writer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleValue {
    /// Monotonic event count.
    Counter(u64),
    /// Integer gauge reading.
    GaugeLong(i64),
    /// Floating-point gauge reading.
    Gauge(f64),
}

/// Maps one snapshot onto its samples, in emission order.
///
/// Counters report their count, gauges their value, and distributions
/// report count, max, mean and total. Timers report exactly as their
/// underlying value distribution. This is purely a translation: no I/O
/// happens here, and error handling around the resulting writes belongs to
/// the reporter.
pub fn samples(snapshot: &Snapshot) -> Vec<Sample> {
    match snapshot {
        Snapshot::Counter { count, .. } => vec![Sample {
            type_instance: "count",
            value: SampleValue::Counter(*count),
        }],
        Snapshot::GaugeLong { value, .. } => vec![Sample {
            type_instance: "value",
            value: SampleValue::GaugeLong(*value),
        }],
        Snapshot::GaugeDouble { value, .. } => vec![Sample {
            type_instance: "value",
            value: SampleValue::Gauge(*value),
        }],
        Snapshot::ValueDistribution(d) | Snapshot::Timed(d) => distribution_samples(d),
    }
}

fn distribution_samples(d: &Distribution) -> Vec<Sample> {
    vec![
        Sample {
            type_instance: "count",
            value: SampleValue::Counter(d.count),
        },
        Sample {
            type_instance: "max",
            value: SampleValue::GaugeLong(d.max),
        },
        Sample {
            type_instance: "mean",
            value: SampleValue::Gauge(d.mean),
        },
        Sample {
            type_instance: "total",
            value: SampleValue::Gauge(d.total),
        },
    ]
}
