use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Sequential, newline-delimited reader over a live pipe.
///
/// Lines are decoded lossily so stray bytes from a non-UTF-8 console code page never
/// end the stream. `next_line` is cancel safe: a partially read line stays buffered.
pub struct LineReader<R> {
    inner: BufReader<R>,
    buf: Vec<u8>,
}

impl<R> LineReader<R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(rd: R) -> Self {
        Self {
            inner: BufReader::new(rd),
            buf: Vec::with_capacity(1024),
        }
    }

    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.inner.read_until(b'\n', &mut self.buf).await?;

        // EOF with nothing pending. A last line without '\n' is still delivered.
        if self.buf.is_empty() {
            return Ok(None);
        }

        let mut one = std::mem::take(&mut self.buf);
        trim_newline(&mut one);
        Ok(Some(String::from_utf8_lossy(&one).into_owned()))
    }
}

fn trim_newline(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
}
