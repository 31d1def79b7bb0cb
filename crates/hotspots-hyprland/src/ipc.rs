use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::PathBuf;
use std::time::Duration;

use hotspots_core::ipc::{Command, Response, SOCKET_NAME};
use hotspots_core::{HotspotsResult, pid};

/// Client-side timeout for a whole request/response exchange.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Path of the daemon's socket.
pub fn socket_path() -> PathBuf {
    pid::runtime_dir().join(SOCKET_NAME)
}

/// A Unix socket server that the daemon uses to accept CLI connections.
///
/// Each connection carries exactly one JSON command line and receives
/// one JSON response line. The socket file is removed on drop.
pub struct SocketServer {
    listener: UnixListener,
    path: PathBuf,
}

impl SocketServer {
    /// Binds the daemon socket, replacing a stale socket file.
    ///
    /// Fails if another daemon is still answering on it.
    pub fn bind() -> HotspotsResult<Self> {
        let path = socket_path();
        if path.exists() {
            if is_daemon_running() {
                return Err("another hypr-hotspots daemon is already listening".into());
            }
            std::fs::remove_file(&path)?;
        }
        let listener = UnixListener::bind(&path)?;
        Ok(Self { listener, path })
    }

    /// Blocks until a client connects.
    pub fn accept(&self) -> HotspotsResult<Connection> {
        let (stream, _) = self.listener.accept()?;
        Ok(Connection { stream })
    }
}

impl Drop for SocketServer {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// One accepted client connection.
pub struct Connection {
    stream: UnixStream,
}

impl Connection {
    /// Reads the client's command.
    ///
    /// Returns `Ok(None)` if the client hung up without sending anything,
    /// which is how [`is_daemon_running`] probes the socket.
    pub fn read_command(&self) -> HotspotsResult<Option<Command>> {
        let mut line = String::new();
        BufReader::new(&self.stream).read_line(&mut line)?;
        if line.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(line.trim())?))
    }

    /// Sends the response and closes the connection.
    pub fn send_response(mut self, response: &Response) -> HotspotsResult<()> {
        let json = serde_json::to_string(response)?;
        writeln!(self.stream, "{json}")?;
        self.stream.flush()?;
        Ok(())
    }
}

/// Sends a command to the daemon over the socket and returns the response.
///
/// This is used by the CLI (client side).
pub fn send_command(command: &Command) -> HotspotsResult<Response> {
    let mut stream = UnixStream::connect(socket_path())?;
    stream.set_read_timeout(Some(CLIENT_TIMEOUT))?;
    stream.set_write_timeout(Some(CLIENT_TIMEOUT))?;

    let json = serde_json::to_string(command)?;
    writeln!(stream, "{json}")?;
    stream.flush()?;

    let mut response_line = String::new();
    BufReader::new(&stream).read_line(&mut response_line)?;

    let response: Response = serde_json::from_str(response_line.trim())?;
    Ok(response)
}

/// Checks whether a daemon is accepting connections on the socket.
///
/// Connects and immediately hangs up; the daemon ignores empty
/// connections.
pub fn is_daemon_running() -> bool {
    UnixStream::connect(socket_path()).is_ok()
}
