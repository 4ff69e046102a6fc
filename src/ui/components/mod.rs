pub mod breakdown_table;
pub mod demand_badge;
pub mod kpi_card;
pub mod regulation_list;
pub mod toast;
pub mod trend_chart;
