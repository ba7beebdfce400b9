use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Feeds every line typed on stdin to `on_line` until end of input, or until
/// `on_line` resolves to `false`.
pub async fn watch_stdin<F, Fut>(on_line: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = bool>,
{
    watch_lines(BufReader::new(tokio::io::stdin()), on_line).await
}

/// Line loop behind [`watch_stdin`]. Bytes that are not UTF-8 are replaced
/// rather than ending the watch.
pub async fn watch_lines<R, F, Fut>(mut reader: R, mut on_line: F) -> Result<(), anyhow::Error>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = bool>,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = match String::from_utf8(raw.to_vec()) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("stdin line is not valid UTF-8: {}", e);
                String::from_utf8_lossy(raw).into_owned()
            }
        };

        if !on_line(line).await {
            tracing::debug!("stdin watcher stopped by receiver");
            return Ok(());
        }
    }

    tracing::debug!("stdin closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(input: &'static [u8], stop_after: usize) -> Vec<String> {
        let mut seen = Vec::new();
        watch_lines(BufReader::new(input), |line| {
            seen.push(line);
            let more = seen.len() < stop_after;
            async move { more }
        })
        .await
        .unwrap();
        seen
    }

    #[tokio::test]
    async fn reads_every_line_until_eof() {
        let lines = collect(b"api\r\n:cat Web\nlast", usize::MAX).await;
        assert_eq!(lines, vec!["api", ":cat Web", "last"]);
    }

    #[tokio::test]
    async fn invalid_utf8_line_does_not_end_the_watch() {
        let lines = collect(b"api\n\xff\xfe\napi\n", usize::MAX).await;
        assert_eq!(lines, vec!["api", "\u{FFFD}\u{FFFD}", "api"]);
    }

    #[tokio::test]
    async fn stops_when_callback_declines() {
        let lines = collect(b"one\ntwo\nthree\n", 2).await;
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn empty_input_calls_nothing() {
        assert!(collect(b"", usize::MAX).await.is_empty());
    }
}
