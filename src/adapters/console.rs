use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::Write;

/// 寫到任意 `Write`（預設為 stdout）
#[derive(Debug)]
pub struct WriterConsole<W: Write> {
    writer: W,
}

pub type StdoutConsole = WriterConsole<std::io::Stdout>;

impl StdoutConsole {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// 測試用：把每一行留在記憶體中
#[derive(Debug, Clone, Default)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Console for BufferConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_console_appends_newlines() {
        let mut console = WriterConsole::new(Vec::new());
        console.write_line("Hello, World!").unwrap();
        console.write_line("1 2 3 ").unwrap();
        let output = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(output, "Hello, World!\n1 2 3 \n");
    }

    #[test]
    fn test_buffer_console() {
        let mut console = BufferConsole::new();
        console.write_line("a").unwrap();
        console.write_line("").unwrap();
        assert_eq!(console.lines(), &["a".to_string(), String::new()]);
    }
}
