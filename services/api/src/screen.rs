use crate::infra::{default_eligibility_config, InMemoryLoanRepository};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use loan_screen::error::AppError;
use loan_screen::screening::{
    GradeResolver, LoanScreeningService, LoanSubmission, SimulatedCrimeDataSource,
};

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Path to a JSON file holding a single loan submission
    #[arg(long)]
    pub(crate) file: PathBuf,
}

/// One-shot screening: read a submission, run it through the same service the
/// HTTP surface uses, and print the decision record.
pub(crate) async fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.file)?;
    let submission: LoanSubmission = serde_json::from_str(&raw)?;

    let service = LoanScreeningService::new(
        Arc::new(InMemoryLoanRepository::default()),
        Arc::new(GradeResolver::new(SimulatedCrimeDataSource)),
        default_eligibility_config(),
    );

    let record = service.submit(submission).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
