use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct QualifierEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> QualifierEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run the three stages in order: load the rate sheet, qualify the
    /// applicant, report and optionally save the results. Returns the path
    /// the results were saved to, if any.
    pub fn run(&self) -> Result<Option<String>> {
        let started = Instant::now();

        println!("Loading the latest rate sheet...");
        let offers = self.pipeline.extract()?;
        println!("Loaded {} loan products", offers.len());

        let result = self.pipeline.transform(offers)?;
        println!("Found {} qualifying loans", result.qualifying.len());

        let saved_to = self.pipeline.load(result)?;

        tracing::debug!("Run finished in {:?}", started.elapsed());
        Ok(saved_to)
    }
}
