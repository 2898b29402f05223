use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Syntax Error: Cannot parse from index {0}")]
    Syntax(usize),

    #[error("Cannot store {0} in a 64bit register")]
    ValueRange(String),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to dump AST")]
    Dump(#[from] serde_yaml::Error),
}

/// 1-based line and column of a char index
pub fn locate(source: &str, index: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for c in source.chars().take(index) {
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

impl Error {
    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, source: &str) {
        cprintln!("<red,bold>error</>: {}", self);

        let Error::Syntax(index) = self else {
            return;
        };
        let (line_num, col) = locate(source, *index);
        let line_content = source.lines().nth(line_num - 1).unwrap_or("");

        cprintln!("     <blue>--></> <underline>{}:{}:{}</>", file, line_num, col);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</> {}<red,bold>^</>", " ".repeat(col - 1));
    }
}

#[test]
fn locate_counts_lines() {
    let source = "r10 = 1;\nr11 = ?;";
    assert_eq!(locate(source, 0), (1, 1));
    assert_eq!(locate(source, 4), (1, 5));
    assert_eq!(locate(source, 15), (2, 7));
    assert_eq!(locate(source, 100), (2, 9));
}
