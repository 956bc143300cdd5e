/// Collector addressing for one sample write.
///
/// `host`, `timestamp_secs` and `interval_secs` are fixed for the duration
/// of a reporting cycle; `plugin` names the metric and `type_instance` the
/// scalar field being written. A value is built per write and dropped
/// immediately, so a sample can never observe another metric's naming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetaData<'a> {
    /// Identifier of the reporting source, resolved once at build time.
    pub host: &'a str,
    /// Seconds since the Unix epoch, captured once per cycle.
    pub timestamp_secs: i64,
    /// The reporting period the samples cover.
    pub interval_secs: u64,
    /// Metric name, mapped onto collectd's plugin level.
    pub plugin: &'a str,
    /// Which scalar field of the metric this sample carries.
    pub type_instance: &'a str,
}
