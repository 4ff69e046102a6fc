pub mod calculator;
pub mod simulator;
pub mod trends;

pub use calculator::CalculatorPage;
pub use simulator::SimulatorPage;
pub use trends::TrendsPage;
