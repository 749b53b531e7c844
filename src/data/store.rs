use crate::error::Result;
use crate::types::Problem;
use std::path::{Path, PathBuf};

/// Per-run output store: one `<id>.txt` file per record
#[derive(Debug, Clone)]
pub struct ProblemStore {
    output_dir: PathBuf,
}

impl ProblemStore {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, problem: &Problem) -> PathBuf {
        self.output_dir.join(format!("{}.txt", problem.id))
    }

    pub fn save(&self, problem: &Problem) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.path_for(problem);
        std::fs::write(&path, &problem.content)?;
        log::debug!("Saved problem {} to {}", problem.id, path.display());
        Ok(path)
    }

    pub fn save_all(&self, problems: &[Problem]) -> Result<()> {
        for problem in problems {
            self.save(problem)?;
        }
        Ok(())
    }
}
