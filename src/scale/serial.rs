//! シリアルポート経由のスケール接続

use super::ScaleLink;
use serialport::{ClearBuffer, SerialPort};
use std::io::{self, BufRead, BufReader};
use std::time::Duration;

/// 1行あたりの読み取りタイムアウト
pub const LINE_TIMEOUT: Duration = Duration::from_secs(2);

pub struct SerialScale {
    reader: BufReader<Box<dyn SerialPort>>,
}

impl SerialScale {
    pub fn open(port: &str, baud_rate: u32) -> io::Result<Self> {
        let serial = serialport::new(port, baud_rate)
            .timeout(LINE_TIMEOUT)
            .open()?;
        Ok(Self {
            reader: BufReader::new(serial),
        })
    }
}

impl ScaleLink for SerialScale {
    fn discard_input(&mut self) -> io::Result<()> {
        // BufReader内のデータも捨てる
        let buffered = self.reader.buffer().len();
        self.reader.consume(buffered);
        self.reader.get_ref().clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(_) => Ok(line),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(line),
            Err(e) => Err(e),
        }
    }
}

/// 利用可能なシリアルポート名の一覧
pub fn available_ports() -> io::Result<Vec<String>> {
    let ports = serialport::available_ports()?;
    Ok(ports.into_iter().map(|p| p.port_name).collect())
}
