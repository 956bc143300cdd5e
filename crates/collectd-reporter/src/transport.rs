use std::io;
use std::net::UdpSocket;

/// Stateful connection to the collector.
///
/// `connect` and `disconnect` bracket one reporting cycle; `send` carries
/// one encoded packet. An implementation is owned by a single reporter and
/// is never used by two cycles at once.
pub trait Transport: Send {
    /// Whether the connection is currently open.
    fn is_connected(&self) -> bool;

    /// Opens the connection to the collector.
    ///
    /// # Errors
    ///
    /// Returns an error if the collector address is missing or the
    /// connection cannot be set up.
    fn connect(&mut self) -> io::Result<()>;

    /// Sends one encoded packet.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is closed or the send fails.
    fn send(&mut self, packet: &[u8]) -> io::Result<()>;

    /// Closes the connection. The reporter logs and swallows errors from
    /// this call.
    ///
    /// # Errors
    ///
    /// Returns whatever teardown error the implementation hits.
    fn disconnect(&mut self) -> anyhow::Result<()>;
}

/// UDP datagram transport.
///
/// Unconnected until [`Transport::connect`], which binds an ephemeral local
/// socket and connects it to the collector address. Each `send` is one
/// datagram. A missing collector host is surfaced here, at connect time,
/// not at build time.
pub struct UdpTransport {
    host: Option<String>,
    port: u16,
    socket: Option<UdpSocket>,
}

impl UdpTransport {
    pub fn new(host: Option<String>, port: u16) -> Self {
        Self {
            host,
            port,
            socket: None,
        }
    }
}

impl Transport for UdpTransport {
    fn is_connected(&self) -> bool {
        self.socket.is_some()
    }

    fn connect(&mut self) -> io::Result<()> {
        let host = self.host.as_deref().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "collector host is not configured",
            )
        })?;
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.connect((host, self.port))?;
        self.socket = Some(socket);
        Ok(())
    }

    fn send(&mut self, packet: &[u8]) -> io::Result<()> {
        let socket = self.socket.as_ref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotConnected, "transport is not connected")
        })?;
        // A connected datagram socket sends the whole packet or errors.
        socket.send(packet).map(|_| ())
    }

    fn disconnect(&mut self) -> anyhow::Result<()> {
        self.socket = None;
        Ok(())
    }
}
