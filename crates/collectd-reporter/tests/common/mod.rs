//! Fake collaborators shared by the integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Barrier, Mutex};

use collectd_reporter::{
    Clock, Endpoint, MetaData, PacketWriter, ProtocolPlugin, SampleValue, Transport, WriteError,
    WriterAuth,
};

/// Everything the fakes observed, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Connect,
    Write(RecordedWrite),
    Disconnect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWrite {
    pub host: String,
    pub timestamp_secs: i64,
    pub interval_secs: u64,
    pub plugin: String,
    pub type_instance: String,
    pub value: SampleValue,
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

/// The write events out of a log, in order.
pub fn writes(events: &EventLog) -> Vec<RecordedWrite> {
    events
        .lock()
        .unwrap()
        .iter()
        .filter_map(|e| match e {
            Event::Write(w) => Some(w.clone()),
            _ => None,
        })
        .collect()
}

pub fn count(events: &EventLog, wanted: &Event) -> usize {
    events.lock().unwrap().iter().filter(|e| *e == wanted).count()
}

pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

pub struct FakeTransport {
    events: EventLog,
    connected: bool,
    fail_connect: bool,
    fail_disconnect: bool,
    /// When set, `connect` signals the sender and then parks on the barrier,
    /// holding the reporter's cycle open until the test releases it.
    connect_gate: Option<(Sender<()>, Arc<Barrier>)>,
}

impl Transport for FakeTransport {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) -> io::Result<()> {
        if self.fail_connect {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "collector unreachable",
            ));
        }
        self.events.lock().unwrap().push(Event::Connect);
        if let Some((signal, barrier)) = &self.connect_gate {
            signal.send(()).unwrap();
            barrier.wait();
        }
        self.connected = true;
        Ok(())
    }

    fn send(&mut self, _packet: &[u8]) -> io::Result<()> {
        Ok(())
    }

    fn disconnect(&mut self) -> anyhow::Result<()> {
        self.connected = false;
        self.events.lock().unwrap().push(Event::Disconnect);
        if self.fail_disconnect {
            anyhow::bail!("teardown refused by peer");
        }
        Ok(())
    }
}

pub struct FakeWriter {
    events: EventLog,
    reject: Vec<String>,
    io_fail: Vec<String>,
}

impl PacketWriter for FakeWriter {
    fn write(
        &mut self,
        _transport: &mut dyn Transport,
        meta: &MetaData<'_>,
        value: SampleValue,
    ) -> Result<(), WriteError> {
        if self.reject.iter().any(|p| p == meta.plugin) {
            return Err(WriteError::Validation(format!(
                "rejected plugin '{}'",
                meta.plugin
            )));
        }
        if self.io_fail.iter().any(|p| p == meta.plugin) {
            return Err(WriteError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "send failed",
            )));
        }
        self.events.lock().unwrap().push(Event::Write(RecordedWrite {
            host: meta.host.to_string(),
            timestamp_secs: meta.timestamp_secs,
            interval_secs: meta.interval_secs,
            plugin: meta.plugin.to_string(),
            type_instance: meta.type_instance.to_string(),
            value,
        }));
        Ok(())
    }
}

/// Protocol plugin producing observable fakes. The event log is shared with
/// the test, so everything the reporter does to the collaborators can be
/// asserted on afterwards.
#[derive(Default)]
pub struct FakeProtocol {
    pub events: EventLog,
    pub fail_connect: bool,
    pub fail_disconnect: bool,
    /// Plugins whose writes fail with a validation error.
    pub reject: Vec<String>,
    /// Plugins whose writes fail with an I/O error.
    pub io_fail: Vec<String>,
    pub connect_gate: Option<(Sender<()>, Arc<Barrier>)>,
}

impl FakeProtocol {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProtocolPlugin for FakeProtocol {
    fn create_transport(&self, _endpoint: &Endpoint) -> anyhow::Result<Box<dyn Transport>> {
        Ok(Box::new(FakeTransport {
            events: Arc::clone(&self.events),
            connected: false,
            fail_connect: self.fail_connect,
            fail_disconnect: self.fail_disconnect,
            connect_gate: self.connect_gate.clone(),
        }))
    }

    fn create_writer(&self, _auth: WriterAuth<'_>) -> anyhow::Result<Box<dyn PacketWriter>> {
        Ok(Box::new(FakeWriter {
            events: Arc::clone(&self.events),
            reject: self.reject.clone(),
            io_fail: self.io_fail.clone(),
        }))
    }
}
