use crate::utils::error::Result;
use std::io::Write;

pub const ENGLISH_GREETING: &str = "Hello World from Java Backend!";
pub const CHINESE_GREETING: &str = "欢迎使用Java后端服务";

/// Lines written by [`greet`], in output order.
pub const GREETINGS: [&str; 2] = [ENGLISH_GREETING, CHINESE_GREETING];

/// Writes both greetings to `out`, one per line, then flushes.
pub fn greet<W: Write>(out: &mut W) -> Result<()> {
    for line in GREETINGS {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_greet_exact_output() {
        let mut buf = Vec::new();
        greet(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Hello World from Java Backend!\n欢迎使用Java后端服务\n"
        );
    }

    #[test]
    fn test_greet_is_repeatable() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        greet(&mut first).unwrap();
        greet(&mut second).unwrap();
        assert_eq!(first, second);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_greet_propagates_write_error() {
        let err = greet(&mut ClosedPipe).unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::HelloError::IoError(ref e) if e.kind() == io::ErrorKind::BrokenPipe
        ));
    }
}
