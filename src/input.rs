use std::io::BufRead;

use crate::error::{Error, Result};

/// 读取一行，取第一个以空白分隔的词作为序列号；空行或EOF得到空字符串
pub fn read_serial<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(Error::Input)?;
    Ok(first_token(&line).to_string())
}

pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}


#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::error::Error;
    use crate::input::{first_token, read_serial};

    #[test]
    fn token() {
        assert_eq!(first_token(""), "");
        assert_eq!(first_token("\n"), "");
        assert_eq!(first_token("B09876543E\r\n"), "B09876543E");
        assert_eq!(first_token("  EE  FF\n"), "EE");
    }

    #[test]
    fn first_line_only() {
        let mut reader = Cursor::new("AE1EE2E\nB09876543E\n");
        assert_eq!(read_serial(&mut reader).unwrap(), "AE1EE2E");
    }

    #[test]
    fn eof() {
        let mut reader = Cursor::new("");
        assert_eq!(read_serial(&mut reader).unwrap(), "");
    }

    #[test]
    fn invalid_utf8() {
        let mut reader = Cursor::new(vec![0xff, 0xfe, b'\n']);
        assert!(matches!(read_serial(&mut reader), Err(Error::Input(_))));
    }
}
