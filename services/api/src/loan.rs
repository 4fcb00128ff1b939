use crate::infra::parse_amount;
use clap::Args;
use dreamhome::error::AppError;
use dreamhome::format::format_inr;
use dreamhome::loans::{
    write_schedule_csv, LoanApplication, LoanCalculation, LoanInput, LoanService,
};
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct LoanScheduleArgs {
    /// Property value or loan amount; separators such as 10,00,000 are accepted
    #[arg(long, value_parser = parse_amount)]
    pub(crate) amount: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    pub(crate) rate: f64,
    /// Tenure in years
    #[arg(long)]
    pub(crate) tenure: u32,
    /// Down payment deducted from the amount before financing
    #[arg(long, default_value_t = 0.0, value_parser = parse_amount)]
    pub(crate) down_payment: f64,
    /// Also write the yearly schedule to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct LoanQuoteArgs {
    /// Requested loan amount
    #[arg(long, value_parser = parse_amount)]
    pub(crate) amount: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    pub(crate) rate: f64,
    /// Tenure in years
    #[arg(long)]
    pub(crate) tenure: u32,
}

pub(crate) fn run_loan_schedule(args: LoanScheduleArgs) -> Result<(), AppError> {
    let LoanScheduleArgs {
        amount,
        rate,
        tenure,
        down_payment,
        csv,
    } = args;

    let service = LoanService::default();
    let inputs = LoanInput::new(amount, rate, tenure).with_down_payment(down_payment);
    let calculation = service.calculate_input(inputs)?;
    render_calculation(&calculation);

    if let Some(path) = csv {
        let file = File::create(&path)?;
        write_schedule_csv(&calculation.result, file)?;
        println!("\nSchedule written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_loan_quote(args: LoanQuoteArgs) -> Result<(), AppError> {
    let LoanQuoteArgs {
        amount,
        rate,
        tenure,
    } = args;

    let quote = LoanService::default().apply(&LoanApplication {
        amount,
        rate,
        tenure,
    })?;

    println!("Pre-approval {}", quote.reference_id);
    println!("- status: {}", quote.status.label());
    println!("- requested: {}", format_inr(quote.requested_amount));
    println!("- eligible up to: {}", format_inr(quote.max_amount));
    println!("- {:.2}% over {} years", quote.rate, quote.tenure);
    println!(
        "- applied: {}",
        quote.application_date.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}

fn render_calculation(calculation: &LoanCalculation) {
    let LoanCalculation {
        inputs,
        result,
        rate_advice,
        tenure_advice,
    } = calculation;

    println!("Home loan summary");
    println!(
        "- financed {} ({} less {} down) at {:.2}% for {} years",
        format_inr(result.effective_principal),
        format_inr(inputs.principal),
        format_inr(inputs.down_payment),
        inputs.annual_rate_percent,
        inputs.tenure_years
    );
    println!("- monthly EMI: {}", format_inr(result.monthly_payment.round()));
    println!(
        "- total payment: {} | total interest: {}",
        format_inr(result.total_payment.round()),
        format_inr(result.total_interest.round())
    );
    println!(
        "- split: {:.1}% principal / {:.1}% interest",
        result.principal_percent_of_total, result.interest_percent_of_total
    );
    println!("- rate: {}", rate_advice.message);
    println!("- tenure: {}", tenure_advice.message);

    println!("\nYear | Principal | Interest | Paid | Balance");
    for year in &result.schedule {
        println!(
            "{:>4} | {} | {} | {} | {}",
            year.year,
            format_inr(year.principal_paid.round()),
            format_inr(year.interest_paid.round()),
            format_inr(year.total_payment.round()),
            format_inr(year.ending_balance.round())
        );
    }
}
