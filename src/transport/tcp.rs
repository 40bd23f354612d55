#![cfg(feature = "std")]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::protocol::Message;
use crate::transport::Transport;

/// Default timeout for network operations (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum frame size (1 MB) to prevent excessive memory allocation.
const MAX_FRAME_SIZE: u32 = 1_000_000;

/// TCP transport framing messages as a big-endian u32 length prefix
/// followed by the bincode-encoded payload.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
    max_frame_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            timeout_duration: DEFAULT_TIMEOUT,
            max_frame_size: MAX_FRAME_SIZE,
        }
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self {
            stream,
            timeout_duration,
            max_frame_size: MAX_FRAME_SIZE,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let send_op = async {
            let data = bincode::serialize(&msg)
                .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
            if data.len() as u32 > self.max_frame_size {
                return Err(anyhow::anyhow!(
                    "Frame too large: {} bytes (max: {})",
                    data.len(),
                    self.max_frame_size
                ));
            }
            let len = (data.len() as u32).to_be_bytes();
            self.stream.write_all(&len).await.map_err(map_io_error)?;
            self.stream.write_all(&data).await.map_err(map_io_error)?;
            anyhow::Ok(())
        };

        timeout(self.timeout_duration, send_op)
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", self.timeout_duration))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let recv_op = async {
            let mut len_buf = [0u8; 4];
            self.stream
                .read_exact(&mut len_buf)
                .await
                .map_err(map_io_error)?;
            let len = u32::from_be_bytes(len_buf);
            if len > self.max_frame_size {
                return Err(anyhow::anyhow!(
                    "Frame too large: {} bytes (max: {})",
                    len,
                    self.max_frame_size
                ));
            }
            let mut data = vec![0u8; len as usize];
            self.stream
                .read_exact(&mut data)
                .await
                .map_err(map_io_error)?;
            bincode::deserialize(&data).map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
        };

        timeout(self.timeout_duration, recv_op)
            .await
            .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", self.timeout_duration))?
    }
}

fn map_io_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        std::io::ErrorKind::UnexpectedEof
        | std::io::ErrorKind::BrokenPipe
        | std::io::ErrorKind::ConnectionReset => anyhow::anyhow!("Connection closed by peer"),
        _ => anyhow::anyhow!("I/O error: {}", e),
    }
}
