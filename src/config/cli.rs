use crate::core::{Prompter, Storage};
use crate::utils::error::{QualifierError, Result};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        std::fs::read(&full_path).map_err(|e| QualifierError::FileAccess {
            path: full_path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| QualifierError::FileAccess {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })?;
            }
        }

        std::fs::write(&full_path, data).map_err(|e| QualifierError::FileAccess {
            path: full_path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Blocking question/answer on the terminal. One line per question.
#[derive(Debug, Clone, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompter {
    fn ask_text(&self, prompt: &str) -> Result<String> {
        print!("{} ", prompt);
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = std::io::stdin().read_line(&mut line)?;
        if read == 0 {
            // EOF: the interactive session is over, do not loop on it.
            return Err(QualifierError::InputFormat {
                message: "Input stream closed before all questions were answered".to_string(),
            });
        }
        Ok(line.trim().to_string())
    }
}
