//! Command-line arguments for the planner

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;

use springpad_calculators::calculators::allocation::{AllocationInput, RiskTolerance};
use springpad_calculators::calculators::composite::{self, CompositeInput};
use springpad_calculators::calculators::compounding::CompoundingInput;
use springpad_calculators::calculators::crorepati::CrorepatiInput;
use springpad_calculators::calculators::education::{Child, EducationInput};
use springpad_calculators::calculators::emi::EmiInput;
use springpad_calculators::calculators::epf::EpfInput;
use springpad_calculators::calculators::goals::{DreamHomeInput, EmergencyFundInput, WeddingInput};
use springpad_calculators::calculators::hlv::HumanLifeValueInput;
use springpad_calculators::calculators::lumpsum::{LumpsumInput, LumpsumTargetInput};
use springpad_calculators::calculators::networth::NetWorthInput;
use springpad_calculators::calculators::ppf::PpfInput;
use springpad_calculators::calculators::retirement::RetirementInput;
use springpad_calculators::calculators::returns::SipReturnInput;
use springpad_calculators::calculators::sip::{GoalSipInput, SipInput};
use springpad_calculators::calculators::spending_less::SpendingLessInput;
use springpad_calculators::calculators::step_up::StepUpInput;
use springpad_calculators::calculators::swp::SwpInput;
use springpad_calculators::calculators::wealth::WealthInput;
use springpad_calculators::{Frequency, PlannerConfig};

/// Springpad - personal finance planning calculators
#[derive(Parser)]
#[command(name = "springpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Planner defaults as JSON; SPRINGPAD_* variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Future value of a monthly SIP
    Sip(SipArgs),
    /// Future value of a one-time investment
    Lumpsum(LumpsumArgs),
    /// One-time investment needed today for a target
    LumpsumTarget(LumpsumTargetArgs),
    /// Monthly SIP needed for a target
    GoalSip(GoalSipArgs),
    /// Time for a monthly SIP to reach a crore
    Crorepati(CrorepatiArgs),
    /// SIP that grows by a fixed percent every year
    StepUp(StepUpArgs),
    /// Loan EMI and total interest
    Emi(EmiArgs),
    /// Retirement corpus and the SIP to build it
    Retirement(RetirementArgs),
    /// Child's wedding fund
    Wedding(WeddingArgs),
    /// Home down payment fund
    DreamHome(DreamHomeArgs),
    /// Emergency fund
    Emergency(EmergencyArgs),
    /// Education fund for one or more children
    Education(EducationArgs),
    /// Several prioritized goals sharing current savings
    Composite(CompositeArgs),
    /// Lumpsum plus SIP wealth projection
    Wealth(WealthArgs),
    /// Human life value and insurance gap
    Hlv(HlvArgs),
    /// Asset allocation by age and risk appetite
    Allocation(AllocationArgs),
    /// Systematic withdrawal plan
    Swp(SwpArgs),
    /// Compound interest with monthly top-ups
    Compounding(CompoundingArgs),
    /// Public Provident Fund maturity
    Ppf(PpfArgs),
    /// Return earned by a running SIP
    SipReturn(SipReturnArgs),
    /// Employees' Provident Fund and pension at retirement
    Epf(EpfArgs),
    /// Assets minus liabilities, by category
    Networth(NetworthArgs),
    /// Invested value of cutting everyday expenses
    SpendingLess(SpendingLessArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Label/value table
    #[default]
    Table,
    /// Full result as JSON
    Json,
    /// Label/value rows as CSV
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FrequencyArg {
    Monthly,
    Quarterly,
    Annual,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Monthly => Frequency::Monthly,
            FrequencyArg::Quarterly => Frequency::Quarterly,
            FrequencyArg::Annual => Frequency::Annual,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RiskArg {
    Conservative,
    Moderate,
    Aggressive,
}

impl From<RiskArg> for RiskTolerance {
    fn from(arg: RiskArg) -> Self {
        match arg {
            RiskArg::Conservative => RiskTolerance::Conservative,
            RiskArg::Moderate => RiskTolerance::Moderate,
            RiskArg::Aggressive => RiskTolerance::Aggressive,
        }
    }
}

/// Start every calculator from a JSON file when given; flags then override single fields
#[derive(Args, Debug, Clone)]
pub struct InputFile {
    /// Calculator input as JSON (missing fields keep their defaults)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl InputFile {
    /// Input from the file, or the default with planner-config values filled in
    fn load_or<T, F>(&self, fallback: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match &self.input {
            Some(path) => read_json(path),
            None => Ok(fallback()),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("Failed to parse {}", path.display()))
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[derive(Args, Debug)]
pub struct SipArgs {
    #[command(flatten)]
    pub file: InputFile,
    /// Monthly investment
    #[arg(short, long)]
    pub monthly: Option<f64>,
    /// Expected annual return, percent
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
}

impl SipArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<SipInput> {
        let mut input = self.file.load_or(|| SipInput {
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        set(&mut input.monthly_investment, self.monthly);
        set(&mut input.expected_return, self.rate);
        set(&mut input.years, self.years);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct LumpsumArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(short, long)]
    pub amount: Option<f64>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
}

impl LumpsumArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<LumpsumInput> {
        let mut input = self.file.load_or(|| LumpsumInput {
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        set(&mut input.investment_amount, self.amount);
        set(&mut input.expected_return, self.rate);
        set(&mut input.years, self.years);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct LumpsumTargetArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(short, long)]
    pub target: Option<f64>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
}

impl LumpsumTargetArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<LumpsumTargetInput> {
        let mut input = self.file.load_or(|| LumpsumTargetInput {
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        set(&mut input.target_amount, self.target);
        set(&mut input.expected_return, self.rate);
        set(&mut input.years, self.years);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct GoalSipArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(short, long)]
    pub target: Option<f64>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
}

impl GoalSipArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<GoalSipInput> {
        let mut input = self.file.load_or(|| GoalSipInput {
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        set(&mut input.target_amount, self.target);
        set(&mut input.expected_return, self.rate);
        set(&mut input.years, self.years);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct CrorepatiArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(short, long)]
    pub monthly: Option<f64>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    /// Target corpus, defaults to one crore
    #[arg(short, long)]
    pub target: Option<f64>,
}

impl CrorepatiArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<CrorepatiInput> {
        let mut input = self.file.load_or(|| CrorepatiInput {
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        set(&mut input.monthly_investment, self.monthly);
        set(&mut input.expected_return, self.rate);
        set(&mut input.target_amount, self.target);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct StepUpArgs {
    #[command(flatten)]
    pub file: InputFile,
    /// Monthly SIP in the first year
    #[arg(short, long)]
    pub monthly: Option<f64>,
    /// Yearly increase, percent
    #[arg(short, long)]
    pub step_up: Option<f64>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
}

impl StepUpArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<StepUpInput> {
        let mut input = self.file.load_or(|| StepUpInput {
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        set(&mut input.initial_sip, self.monthly);
        set(&mut input.step_up_percent, self.step_up);
        set(&mut input.expected_return, self.rate);
        set(&mut input.years, self.years);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct EmiArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(short, long)]
    pub amount: Option<f64>,
    /// Loan interest, percent a year
    #[arg(short, long)]
    pub rate: Option<f64>,
    /// Tenure in years
    #[arg(short, long)]
    pub years: Option<u32>,
    /// Include the month-by-month amortization schedule
    #[arg(long)]
    pub schedule: bool,
}

impl EmiArgs {
    pub fn input(self) -> Result<EmiInput> {
        let mut input: EmiInput = self.file.load_or(EmiInput::default)?;
        set(&mut input.loan_amount, self.amount);
        set(&mut input.interest_rate, self.rate);
        set(&mut input.tenure_years, self.years);
        input.with_schedule |= self.schedule;
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct RetirementArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(long)]
    pub current_age: Option<u32>,
    #[arg(long)]
    pub retirement_age: Option<u32>,
    /// Monthly expenses today
    #[arg(short, long)]
    pub expenses: Option<f64>,
    #[arg(long)]
    pub inflation: Option<f64>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub savings: Option<f64>,
}

impl RetirementArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<RetirementInput> {
        let mut input = self.file.load_or(|| RetirementInput {
            inflation_rate: config.inflation,
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        set(&mut input.current_age, self.current_age);
        set(&mut input.retirement_age, self.retirement_age);
        set(&mut input.current_expenses, self.expenses);
        set(&mut input.inflation_rate, self.inflation);
        set(&mut input.expected_return, self.rate);
        set(&mut input.existing_savings, self.savings);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct WeddingArgs {
    #[command(flatten)]
    pub file: InputFile,
    /// Wedding cost in today's rupees
    #[arg(long)]
    pub cost: Option<f64>,
    #[arg(long)]
    pub child_age: Option<u32>,
    #[arg(long)]
    pub wedding_age: Option<u32>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub savings: Option<f64>,
    #[arg(long)]
    pub inflation: Option<f64>,
}

impl WeddingArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<WeddingInput> {
        let mut input = self.file.load_or(|| WeddingInput {
            expected_return: config.expected_return,
            inflation_rate: config.inflation,
            ..Default::default()
        })?;
        set(&mut input.wedding_cost, self.cost);
        set(&mut input.child_age, self.child_age);
        set(&mut input.wedding_age, self.wedding_age);
        set(&mut input.expected_return, self.rate);
        set(&mut input.current_savings, self.savings);
        set(&mut input.inflation_rate, self.inflation);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct DreamHomeArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(short, long)]
    pub price: Option<f64>,
    /// Down payment, percent of the price
    #[arg(short, long)]
    pub down_payment: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub savings: Option<f64>,
}

impl DreamHomeArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<DreamHomeInput> {
        let mut input = self.file.load_or(|| DreamHomeInput {
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        set(&mut input.home_price, self.price);
        set(&mut input.down_payment_percent, self.down_payment);
        set(&mut input.years, self.years);
        set(&mut input.expected_return, self.rate);
        set(&mut input.current_savings, self.savings);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct EmergencyArgs {
    #[command(flatten)]
    pub file: InputFile,
    /// Monthly expenses to cover
    #[arg(short, long)]
    pub expenses: Option<f64>,
    /// Months of expenses the fund should hold
    #[arg(short, long)]
    pub months: Option<u32>,
    #[arg(short, long)]
    pub years: Option<u32>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub savings: Option<f64>,
}

impl EmergencyArgs {
    pub fn input(self) -> Result<EmergencyFundInput> {
        // Emergency money sits in safer instruments than the planner's default return
        let mut input: EmergencyFundInput = self.file.load_or(EmergencyFundInput::default)?;
        set(&mut input.monthly_expenses, self.expenses);
        set(&mut input.coverage_months, self.months);
        set(&mut input.years_to_save, self.years);
        set(&mut input.expected_return, self.rate);
        set(&mut input.current_savings, self.savings);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct EducationArgs {
    #[command(flatten)]
    pub file: InputFile,
    /// Children as a JSON array, replacing those from --input
    #[arg(long)]
    pub children: Option<PathBuf>,
    #[arg(long)]
    pub inflation: Option<f64>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub savings: Option<f64>,
}

impl EducationArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<EducationInput> {
        let mut input = self.file.load_or(|| EducationInput {
            education_inflation: config.education_inflation,
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        if let Some(path) = &self.children {
            let children: Vec<Child> = read_json(path)?;
            input.children = children;
        }
        set(&mut input.education_inflation, self.inflation);
        set(&mut input.expected_return, self.rate);
        set(&mut input.current_savings, self.savings);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct CompositeArgs {
    #[command(flatten)]
    pub file: InputFile,
    /// Goals as CSV with a name,amount,years,priority header
    #[arg(short, long)]
    pub goals: Option<PathBuf>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub savings: Option<f64>,
}

impl CompositeArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<CompositeInput> {
        let mut input = self.file.load_or(|| CompositeInput {
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        if let Some(path) = &self.goals {
            input.goals = composite::load_goals(path)
                .with_context(|| format!("Failed to load goals from {}", path.display()))?;
        }
        set(&mut input.expected_return, self.rate);
        set(&mut input.current_savings, self.savings);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct WealthArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(short, long)]
    pub target: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    /// Lumpsum invested today
    #[arg(short, long)]
    pub lumpsum: Option<f64>,
    #[arg(short, long)]
    pub monthly: Option<f64>,
}

impl WealthArgs {
    pub fn input(self) -> Result<WealthInput> {
        let mut input: WealthInput = self.file.load_or(WealthInput::default)?;
        set(&mut input.target_wealth, self.target);
        set(&mut input.years, self.years);
        set(&mut input.expected_return, self.rate);
        set(&mut input.current_investment, self.lumpsum);
        set(&mut input.monthly_investment, self.monthly);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct HlvArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(long)]
    pub current_age: Option<u32>,
    #[arg(long)]
    pub retirement_age: Option<u32>,
    /// Annual income today
    #[arg(long)]
    pub income: Option<f64>,
    #[arg(long)]
    pub income_growth: Option<f64>,
    #[arg(long)]
    pub discount_rate: Option<f64>,
    /// Share of income spent on the earner, percent
    #[arg(long)]
    pub personal_expenses: Option<f64>,
    #[arg(long)]
    pub existing_cover: Option<f64>,
}

impl HlvArgs {
    pub fn input(self) -> Result<HumanLifeValueInput> {
        let mut input: HumanLifeValueInput = self.file.load_or(HumanLifeValueInput::default)?;
        set(&mut input.current_age, self.current_age);
        set(&mut input.retirement_age, self.retirement_age);
        set(&mut input.current_income, self.income);
        set(&mut input.income_growth_rate, self.income_growth);
        set(&mut input.discount_rate, self.discount_rate);
        set(&mut input.personal_expenses_percent, self.personal_expenses);
        set(&mut input.existing_life_insurance, self.existing_cover);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct AllocationArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(long)]
    pub age: Option<u32>,
    #[arg(long, value_enum)]
    pub risk: Option<RiskArg>,
    #[arg(short, long)]
    pub amount: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
}

impl AllocationArgs {
    pub fn input(self) -> Result<AllocationInput> {
        let mut input: AllocationInput = self.file.load_or(AllocationInput::default)?;
        set(&mut input.age, self.age);
        set(&mut input.risk_tolerance, self.risk.map(Into::into));
        set(&mut input.investment_amount, self.amount);
        set(&mut input.years, self.years);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct SwpArgs {
    #[command(flatten)]
    pub file: InputFile,
    /// Corpus invested at the start
    #[arg(long)]
    pub corpus: Option<f64>,
    #[arg(short, long)]
    pub withdrawal: Option<f64>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
}

impl SwpArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<SwpInput> {
        let mut input = self.file.load_or(|| SwpInput {
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        set(&mut input.initial_investment, self.corpus);
        set(&mut input.monthly_withdrawal, self.withdrawal);
        set(&mut input.expected_return, self.rate);
        set(&mut input.years, self.years);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct CompoundingArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(short, long)]
    pub principal: Option<f64>,
    #[arg(short, long)]
    pub monthly: Option<f64>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
    #[arg(long, value_enum)]
    pub frequency: Option<FrequencyArg>,
}

impl CompoundingArgs {
    pub fn input(self) -> Result<CompoundingInput> {
        let mut input: CompoundingInput = self.file.load_or(CompoundingInput::default)?;
        set(&mut input.principal, self.principal);
        set(&mut input.monthly_contribution, self.monthly);
        set(&mut input.annual_rate, self.rate);
        set(&mut input.years, self.years);
        set(&mut input.frequency, self.frequency.map(Into::into));
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct PpfArgs {
    #[command(flatten)]
    pub file: InputFile,
    /// Deposit per year, capped at the annual limit
    #[arg(short, long)]
    pub yearly: Option<f64>,
    /// Balance of an existing account
    #[arg(short, long)]
    pub balance: Option<f64>,
    /// Years the existing account has run
    #[arg(long)]
    pub account_age: Option<u32>,
    #[arg(short, long)]
    pub rate: Option<f64>,
    /// Extra years invested after maturity
    #[arg(short, long)]
    pub extension: Option<u32>,
}

impl PpfArgs {
    pub fn input(self) -> Result<PpfInput> {
        let mut input: PpfInput = self.file.load_or(PpfInput::default)?;
        set(&mut input.yearly_contribution, self.yearly);
        set(&mut input.current_balance, self.balance);
        set(&mut input.account_age, self.account_age);
        set(&mut input.interest_rate, self.rate);
        set(&mut input.extension_years, self.extension);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct SipReturnArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(short, long)]
    pub monthly: Option<f64>,
    /// Instalments paid so far
    #[arg(long)]
    pub months: Option<u32>,
    /// Current value of the holding
    #[arg(short, long)]
    pub value: Option<f64>,
}

impl SipReturnArgs {
    pub fn input(self) -> Result<SipReturnInput> {
        let mut input: SipReturnInput = self.file.load_or(SipReturnInput::default)?;
        set(&mut input.monthly_investment, self.monthly);
        set(&mut input.months, self.months);
        set(&mut input.current_value, self.value);
        Ok(input)
    }
}

#[derive(Args, Debug)]
pub struct EpfArgs {
    #[command(flatten)]
    pub file: InputFile,
    /// Basic salary per year
    #[arg(short, long)]
    pub salary: Option<f64>,
    #[arg(short, long)]
    pub age: Option<u32>,
    #[arg(long)]
    pub retirement_age: Option<u32>,
    /// Yearly salary raise, percent
    #[arg(long)]
    pub increase: Option<f64>,
    /// Existing EPF balance
    #[arg(short, long)]
    pub balance: Option<f64>,
    /// EPF interest rate, percent
    #[arg(short, long)]
    pub rate: Option<f64>,
}

impl EpfArgs {
    pub fn input(self) -> Result<EpfInput> {
        let mut input: EpfInput = self.file.load_or(EpfInput::default)?;
        set(&mut input.annual_salary, self.salary);
        set(&mut input.current_age, self.age);
        set(&mut input.retirement_age, self.retirement_age);
        set(&mut input.salary_increase, self.increase);
        set(&mut input.current_balance, self.balance);
        set(&mut input.epf_rate, self.rate);
        Ok(input)
    }
}

/// Assets and liabilities come from the JSON input file
#[derive(Args, Debug)]
pub struct NetworthArgs {
    #[command(flatten)]
    pub file: InputFile,
}

impl NetworthArgs {
    pub fn input(self) -> Result<NetWorthInput> {
        self.file.load_or(NetWorthInput::default)
    }
}

/// Expenses come from the JSON input file
#[derive(Args, Debug)]
pub struct SpendingLessArgs {
    #[command(flatten)]
    pub file: InputFile,
    #[arg(short, long)]
    pub rate: Option<f64>,
    #[arg(short, long)]
    pub years: Option<u32>,
}

impl SpendingLessArgs {
    pub fn input(self, config: &PlannerConfig) -> Result<SpendingLessInput> {
        let mut input = self.file.load_or(|| SpendingLessInput {
            expected_return: config.expected_return,
            ..Default::default()
        })?;
        set(&mut input.expected_return, self.rate);
        set(&mut input.years, self.years);
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["springpad", "sip", "--monthly", "2000", "--years", "20"]);
        let config = PlannerConfig {
            expected_return: 10.0,
            ..Default::default()
        };
        let Commands::Sip(args) = cli.command else {
            panic!("expected sip");
        };
        let input = args.input(&config).unwrap();
        assert_eq!(input.monthly_investment, 2000.0);
        assert_eq!(input.expected_return, 10.0);
        assert_eq!(input.years, 20);
    }

    #[test]
    fn test_global_format() {
        let cli = Cli::parse_from(["springpad", "emi", "--schedule", "--format", "csv"]);
        assert_eq!(cli.format, OutputFormat::Csv);
        let Commands::Emi(args) = cli.command else {
            panic!("expected emi");
        };
        assert!(args.input().unwrap().with_schedule);
    }

    #[test]
    fn test_new_calculator_commands() {
        let cli = Cli::parse_from(["springpad", "epf", "--salary", "900000", "--retirement-age", "60"]);
        let Commands::Epf(args) = cli.command else {
            panic!("expected epf");
        };
        let input = args.input().unwrap();
        assert_eq!(input.annual_salary, 900_000.0);
        assert_eq!(input.retirement_age, 60);
        assert_eq!(input.current_age, 25);

        let cli = Cli::parse_from(["springpad", "networth"]);
        let Commands::Networth(args) = cli.command else {
            panic!("expected networth");
        };
        assert_eq!(args.input().unwrap().assets.len(), 3);

        let cli = Cli::parse_from(["springpad", "spending-less", "--years", "20"]);
        let config = PlannerConfig {
            expected_return: 9.0,
            ..Default::default()
        };
        let Commands::SpendingLess(args) = cli.command else {
            panic!("expected spending-less");
        };
        let input = args.input(&config).unwrap();
        assert_eq!(input.years, 20);
        assert_eq!(input.expected_return, 9.0);
    }
}
